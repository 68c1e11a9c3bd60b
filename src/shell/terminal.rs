//! Terminal rendering of the onboarding form.

use std::io::Write;

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::warn;
use wl_core::onboarding::FormState;
use wl_core::ports::OnboardingEventPort;

const TITLE: &str = "Configura la tua azienda";
const COMPANY_NAME_LABEL: &str = "Nome dell'azienda";

/// Render one frame of the form.
pub fn render_frame(email: &str, state: &FormState) -> String {
    let mut frame = String::new();
    frame.push_str(TITLE);
    frame.push('\n');
    if !email.is_empty() {
        frame.push_str(email);
        frame.push('\n');
    }

    let lock = if state.is_interactive() { "" } else { " (bloccato)" };
    frame.push_str(&format!(
        "{COMPANY_NAME_LABEL}: [{}]{lock}\n",
        state.company_name
    ));
    frame.push_str(&format!("<{}>\n", state.submit_label()));

    if let Some(message) = state.error_message() {
        frame.push_str(&format!("! {message}\n"));
    }
    frame
}

/// View that prints every form state change to a writer.
pub struct TerminalView<W> {
    email: String,
    out: Mutex<W>,
}

impl TerminalView<std::io::Stdout> {
    pub fn stdout(email: impl Into<String>) -> Self {
        Self::new(email, std::io::stdout())
    }
}

impl<W: Write + Send> TerminalView<W> {
    pub fn new(email: impl Into<String>, out: W) -> Self {
        Self {
            email: email.into(),
            out: Mutex::new(out),
        }
    }

    pub fn into_inner(self) -> W {
        self.out.into_inner()
    }
}

#[async_trait]
impl<W: Write + Send> OnboardingEventPort for TerminalView<W> {
    async fn emit_form_state_changed(&self, state: FormState) {
        let frame = render_frame(&self.email, &state);
        let mut out = self.out.lock().await;
        if let Err(err) = writeln!(out, "{frame}").and_then(|_| out.flush()) {
            warn!(error = %err, "failed to render onboarding form");
        }
    }
}
