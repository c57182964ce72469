//! Messages for the onboarding wizard
//!
//! Every user interaction becomes one of these and is fed to
//! [`update`](super::app::update).

use crate::form::{FieldPath, FieldValue};

#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    // === Navigation ===
    /// Validate the current step and move forward (submits on the last content step)
    Next,
    /// Move back one step without validating
    Back,

    // === Editing ===
    /// Write a value into the field at the path
    SetField(FieldPath, FieldValue),
    /// Toggle "correspondence address same as first address"
    ToggleSameAddress,

    // === Lists ===
    AddEducation,
    RemoveEducation(usize),
    AddChild,
    RemoveChild(usize),

    // === Submission ===
    /// Result reported by the submitter
    SubmissionFinished(Result<(), String>),

    // === General ===
    DismissBanner,
    Quit,
}
