//! Event handling for the application.
//!
//! This module turns terminal input into application events and defines the
//! key hints shown for each input context.

mod handler;
mod keys;

pub use handler::EventHandler;
pub use keys::{get_context_hints, KeyContext};

use crossterm::event::KeyEvent;

/// An application event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A key was pressed.
    Key(KeyEvent),
    /// The terminal was resized.
    Resize(u16, u16),
    /// Periodic tick for animations and message polling.
    Tick,
}
