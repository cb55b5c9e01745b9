//! Infrastructure layer providing external service integrations.
//!
//! This module contains the collaborators the app does not control: the
//! generation endpoint, local persistent storage, file downloads, the
//! clipboard, and process configuration.

pub mod config;
pub mod export;
pub mod gemini;
pub mod logging;
pub mod persistence;

pub use config::*;
pub use export::*;
pub use gemini::{shared_api_key, GeminiClient, GenerationClient, SharedApiKey, TextGenerator};
pub use persistence::*;
