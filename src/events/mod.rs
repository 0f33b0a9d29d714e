//! Event handling module for keyboard, mouse, and resize events.
//!
//! Terminal events are decoded into `Action`s here; the App applies them.

mod action;
mod handler;
mod keyboard;
mod mouse;

pub use action::Action;
pub use handler::EventHandler;
