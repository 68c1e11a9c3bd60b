//! Worklog client shell: configuration, tracing, wiring and the terminal
//! front end of the onboarding workflow.

pub mod bootstrap;
pub mod cli;
pub mod shell;
