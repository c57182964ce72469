pub mod handler;

use clap::Args;
use std::path::PathBuf;

pub use handler::{handle_validate_command, resolve_step, validate_file};

#[derive(Args, Debug)]
pub struct ValidateCommands {
    /// Record JSON file
    pub file: PathBuf,

    /// Only check the fields of one step (number or name, e.g. "4" or "Account Details")
    #[arg(short, long)]
    pub step: Option<String>,

    /// Print errors as JSON instead of text
    #[arg(long)]
    pub json: bool,
}
