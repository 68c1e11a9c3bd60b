//! Terminal shell around the onboarding controller.

pub mod invitation;
pub mod run;
pub mod terminal;

pub use invitation::{parse_invitation_link, InvitationError};
pub use run::run_onboarding;
pub use terminal::{render_frame, TerminalView};
