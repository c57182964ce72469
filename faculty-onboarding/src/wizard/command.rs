//! Effects requested by `update`
//!
//! `update` never performs side effects itself. It returns a command and the
//! controller (or a test) decides how to carry it out.

use crate::form::{FieldPath, Record};

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    None,
    /// Hand the record to the submitter, then report back with
    /// `Msg::SubmissionFinished`
    Submit(Box<Record>),
    /// Move input focus to this field
    Focus(FieldPath),
    Quit,
}

impl Command {
    pub fn set_focus(path: FieldPath) -> Self {
        Command::Focus(path)
    }
}

