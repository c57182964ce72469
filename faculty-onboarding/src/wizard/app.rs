//! Onboarding Wizard - Controller
//!
//! `update` holds every state transition. `Wizard` owns the state and the
//! submitter, runs `update`, and carries out the commands it returns.

use crate::form::address::{self, is_correspondence_path};
use crate::form::{FieldPath, FieldValue, Record, Scope, Submitter, validate};

use super::command::Command;
use super::msg::Msg;
use super::state::{Banner, Direction, State};
use super::steps::{COMPLETE_STEP, SUBMIT_STEP};

/// Apply one message to the state
pub fn update(state: &mut State, msg: Msg) -> Command {
    match msg {
        // === Navigation ===
        Msg::Next => handle_next(state),
        Msg::Back => handle_back(state),

        // === Editing ===
        Msg::SetField(path, value) => handle_set_field(state, path, value),
        Msg::ToggleSameAddress => {
            if state.is_complete() {
                return Command::None;
            }
            state.same_address = !state.same_address;
            address::apply_same_address(&mut state.record, state.same_address);
            log::debug!("Same address toggled {}", if state.same_address { "on" } else { "off" });
            revalidate_errored(state, &correspondence_paths());
            Command::None
        }

        // === Lists ===
        Msg::AddEducation => {
            if state.is_complete() {
                return Command::None;
            }
            state.record.education.append_default();
            let index = state.record.education.len() - 1;
            log::debug!("Education entry {} added", index);
            Command::set_focus(Record::education_path().index(index).field("class"))
        }
        Msg::RemoveEducation(index) => {
            if state.is_complete() {
                return Command::None;
            }
            if state.record.education.remove(index).is_some() {
                state.errors.remove_list_entry(&Record::education_path(), index);
                log::debug!("Education entry {} removed", index);
            }
            Command::None
        }
        Msg::AddChild => {
            if state.is_complete() {
                return Command::None;
            }
            state.record.dependents.children.append_default();
            let index = state.record.dependents.children.len() - 1;
            log::debug!("Child {} added", index);
            Command::set_focus(Record::children_path().index(index).field("name"))
        }
        Msg::RemoveChild(index) => {
            if state.is_complete() {
                return Command::None;
            }
            if state.record.dependents.children.remove(index).is_some() {
                state.errors.remove_list_entry(&Record::children_path(), index);
                log::debug!("Child {} removed", index);
            }
            Command::None
        }

        // === Submission ===
        Msg::SubmissionFinished(result) => handle_submission_finished(state, result),

        // === General ===
        Msg::DismissBanner => {
            state.banner = None;
            Command::None
        }
        Msg::Quit => Command::Quit,
    }
}

/// Handle forward navigation
fn handle_next(state: &mut State) -> Command {
    if state.submitting {
        return Command::None;
    }
    if state.current_step >= COMPLETE_STEP {
        // Already at the terminal step
        return Command::None;
    }

    let step = state.step();
    let scope = step.scope();
    let fresh = validate(&state.record, &scope);
    let step_valid = fresh.is_empty();
    state.errors.replace_scope(&scope, fresh);

    if !step_valid {
        log::warn!(
            "{} ({}) has {} invalid field(s)",
            step.id,
            step.name,
            state.errors.iter().filter(|e| scope.covers(&e.path)).count()
        );
        return focus_first_error(state, &scope);
    }

    if state.current_step == SUBMIT_STEP {
        // Whole-document check; errors on unvisited steps become visible too
        let all = validate(&state.record, &Scope::All);
        if !all.is_empty() {
            log::warn!("Submission blocked: {} invalid field(s) in the record", all.len());
            state.errors = all;
            state.banner = Some(Banner::Error(
                "Please fix the highlighted fields before submitting".to_string(),
            ));
            return focus_first_error(state, &Scope::All);
        }

        log::info!("Record valid, submitting");
        state.errors.clear();
        state.focus = None;
        state.submitting = true;
        return Command::Submit(Box::new(state.record.clone()));
    }

    state.focus = None;
    state.banner = None;
    state.move_step(Direction::Forward);
    log::debug!("Advanced to {}", state.step().id);
    Command::None
}

/// Handle backward navigation
fn handle_back(state: &mut State) -> Command {
    if state.submitting || state.current_step == 0 {
        return Command::None;
    }
    state.focus = None;
    state.move_step(Direction::Backward);
    log::debug!("Went back to {}", state.step().id);
    Command::None
}

fn handle_set_field(state: &mut State, path: FieldPath, value: FieldValue) -> Command {
    if state.is_complete() || state.submitting {
        log::debug!("Ignoring edit of {} while the form is closed", path);
        return Command::None;
    }
    if state.same_address && is_correspondence_path(&path) {
        log::debug!("Ignoring edit of mirrored field {}", path);
        return Command::None;
    }

    if let Err(e) = state.record.set_field(&path, value) {
        log::warn!("{:#}", e);
        return Command::None;
    }

    let mut touched = vec![path];
    if state.same_address && address::sync_correspondence(&mut state.record.personal) {
        touched.extend(correspondence_paths());
    }
    revalidate_errored(state, &touched);
    Command::None
}

fn handle_submission_finished(state: &mut State, result: Result<(), String>) -> Command {
    if !state.submitting {
        log::warn!("Submission result received with no submission in flight");
        return Command::None;
    }
    state.submitting = false;

    match result {
        Ok(()) => {
            state.submitted_count += 1;
            state.reset_record();
            state.move_step(Direction::Forward);
            state.banner = Some(Banner::Info("Submission complete".to_string()));
            log::info!("Submission complete");
        }
        Err(e) => {
            // Stay on the last content step with everything the user entered
            log::error!("Submission failed: {}", e);
            state.banner = Some(Banner::Error(format!("Submission failed: {}", e)));
        }
    }
    Command::None
}

/// Re-check fields that are currently showing an error
fn revalidate_errored(state: &mut State, paths: &[FieldPath]) {
    for path in paths {
        if state.errors.contains(path) {
            let scope = Scope::single(path.clone());
            let fresh = validate(&state.record, &scope);
            state.errors.replace_scope(&scope, fresh);
        }
    }
}

fn focus_first_error(state: &mut State, scope: &Scope) -> Command {
    let first = state
        .errors
        .iter()
        .find(|e| scope.covers(&e.path))
        .map(|e| e.path.clone());
    state.focus = first.clone();
    match first {
        Some(path) => Command::set_focus(path),
        None => Command::None,
    }
}

fn correspondence_paths() -> Vec<FieldPath> {
    let base = FieldPath::simple(crate::form::value::PERSONAL);
    address::CORRESPONDENCE_FIELDS
        .iter()
        .map(|name| base.field(name))
        .collect()
}

/// Owns the wizard state and carries out its commands
pub struct Wizard<S: Submitter> {
    state: State,
    submitter: S,
    quit: bool,
}

impl<S: Submitter> Wizard<S> {
    pub fn new(submitter: S) -> Self {
        Self {
            state: State::new(),
            submitter,
            quit: false,
        }
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn submitter(&self) -> &S {
        &self.submitter
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Run one message through `update` and execute the resulting commands
    ///
    /// Submissions are carried out here; focus requests are returned for
    /// the view to act on.
    pub fn dispatch(&mut self, msg: Msg) -> Vec<FieldPath> {
        let mut focus = Vec::new();
        let mut pending = Some(update(&mut self.state, msg));

        while let Some(command) = pending.take() {
            match command {
                Command::Submit(record) => {
                    let result = self.submitter.submit(&record).map_err(|e| format!("{:#}", e));
                    pending = Some(update(&mut self.state, Msg::SubmissionFinished(result)));
                }
                Command::Focus(path) => focus.push(path),
                Command::Quit => self.quit = true,
                Command::None => {}
            }
        }

        focus
    }
}
