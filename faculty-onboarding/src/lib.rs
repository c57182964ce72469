pub mod macros;

pub mod cli;
pub mod config;
pub mod form;
pub mod tui;
pub mod wizard;

pub use config::Config;
pub use form::{FieldPath, Record, Scope, Submitter, ValidationErrors, validate};
pub use wizard::{Msg, State, Wizard};
