//! Faculty Onboarding Wizard
//!
//! Step-by-step collection of one faculty record:
//!
//! 1. Personal Information
//! 2. Address
//! 3. Other Details
//! 4. Account Details
//! 5. Education Details
//! 6. Dependents - leaving this step validates the whole record and submits it
//! 7. Complete
//!
//! Elm-style: [`State`] is owned by one controller, [`Msg`]s describe user
//! interactions, [`update`] applies them and returns a [`Command`] for the
//! controller to carry out.

pub mod app;
pub mod command;
pub mod msg;
pub mod state;
pub mod steps;

pub use app::{Wizard, update};
pub use command::Command;
pub use msg::Msg;
pub use state::{Banner, Direction, State};
pub use steps::{COMPLETE_STEP, STEPS, SUBMIT_STEP, StepDescriptor};
