//! User interface components and views.
//!
//! This module contains all TUI rendering logic: the project table view,
//! the help overlay, and the components they are built from.

mod components;
pub mod format;
mod views;

pub use components::render_status_bar;
pub use views::{render_help, TableAction, TableView, TABLE_TITLE};
