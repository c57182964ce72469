//! Wizard state
//!
//! One `State` is owned by the controller for the whole session. Views
//! only read it; every change goes through [`update`](super::app::update).

use crate::form::{FieldPath, Record, ValidationErrors};

use super::steps::{self, COMPLETE_STEP, StepDescriptor};

/// Message shown above the step footer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Banner {
    Info(String),
    Error(String),
}

impl Banner {
    pub fn text(&self) -> &str {
        match self {
            Banner::Info(s) | Banner::Error(s) => s,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Banner::Error(_))
    }
}

/// Which way a step transition goes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

#[derive(Debug, Default)]
pub struct State {
    /// Index into the step registry
    pub current_step: usize,

    /// Index we came from on the last transition
    pub previous_step: usize,

    /// "Correspondence address same as first address"
    pub same_address: bool,

    /// The document being filled in
    pub record: Record,

    /// Field errors currently shown
    pub errors: ValidationErrors,

    /// Field the view should focus (first invalid field after a failed Next)
    pub focus: Option<FieldPath>,

    /// Status or error message
    pub banner: Option<Banner>,

    /// A submission is in flight; navigation is frozen until it finishes
    pub submitting: bool,

    /// Number of records handed to the submitter this session
    pub submitted_count: usize,
}

impl State {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> &'static StepDescriptor {
        steps::step(self.current_step)
    }

    pub fn is_complete(&self) -> bool {
        self.current_step == COMPLETE_STEP
    }

    /// Error message attached to exactly `path`
    pub fn error_for(&self, path: &FieldPath) -> Option<&str> {
        self.errors.get(path)
    }

    /// Whether the correspondence lines are currently mirrored (read-only)
    pub fn correspondence_locked(&self) -> bool {
        self.same_address
    }

    /// Move one step in `direction`
    pub(crate) fn move_step(&mut self, direction: Direction) {
        self.previous_step = self.current_step;
        match direction {
            Direction::Forward => self.current_step = (self.current_step + 1).min(COMPLETE_STEP),
            Direction::Backward => self.current_step = self.current_step.saturating_sub(1),
        }
    }

    /// Discard the document after a successful submission
    pub(crate) fn reset_record(&mut self) {
        self.record = Record::default();
        self.same_address = false;
        self.errors.clear();
        self.focus = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = State::new();
        assert_eq!(state.current_step, 0);
        assert_eq!(state.previous_step, 0);
        assert_eq!(state.record, Record::default());
    }

    #[test]
    fn test_move_step_stays_in_bounds() {
        let mut state = State::new();
        state.move_step(Direction::Backward);
        assert_eq!(state.current_step, 0);

        state.current_step = COMPLETE_STEP;
        state.move_step(Direction::Forward);
        assert_eq!(state.current_step, COMPLETE_STEP);
    }

    #[test]
    fn test_move_step_records_previous() {
        let mut state = State::new();
        state.move_step(Direction::Forward);
        state.move_step(Direction::Forward);
        state.move_step(Direction::Backward);
        assert_eq!(state.current_step, 1);
        assert_eq!(state.previous_step, 2);
    }
}
