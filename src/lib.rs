//! AutoFlow - AI-assisted automation builder for the terminal.
//!
//! Describe a workflow in plain language, pick the apps involved, choose a
//! trigger and actions, and get a generated automation blueprint back.

pub mod domain;
pub mod application;
pub mod infrastructure;
pub mod presentation;

pub use domain::*;
pub use application::*;
