//! Application layer: page routing, the wizard controller and the state the
//! terminal front end renders from.

pub mod controller;
pub mod routes;
pub mod state;

pub use controller::{Job, JobKind, JobOutcome, OutcomeKind, WizardController};
pub use routes::{nav_routes, nav_sections, NavSection, Route};
pub use state::{App, AppMode, ConfigureColumn, CustomAppDraft, Field, Focus, SettingsField};
