//! Reusable UI components.

mod help_bar;
mod loading;
mod pager;

pub use help_bar::render_status_bar;
pub use loading::LoadingIndicator;
pub use pager::{pager_items, plain_pager_line, render_pager, PagerItem, PagerPosition};
