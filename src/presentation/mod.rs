//! Presentation layer handling terminal UI and user input.
//!
//! Renders the sidebar shell and the page for the current route with
//! ratatui, and maps key presses onto application actions.

pub mod input;
pub mod pages;
pub mod ui;

pub use input::*;
pub use ui::*;
