//! Domain layer: the data the app works with and the logic that does not
//! touch the terminal, the network or the disk.

pub mod catalog;
pub mod decoder;
pub mod errors;
pub mod models;
pub mod prompts;
pub mod wizard;

pub use decoder::*;
pub use errors::*;
pub use models::*;
pub use wizard::*;
