//! Onboarding workflow controller.
//!
//! This module coordinates the onboarding form state machine and its side
//! effects: the completion call, session persistence and navigation.

use std::sync::Arc;

use tracing::{debug, error, info, info_span, warn, Instrument};

use wl_core::{
    navigation::{NavigationMode, Route},
    onboarding::{
        guard, FormState, GuardDecision, OnboardingAction, OnboardingContext, OnboardingEvent,
        OnboardingStateMachine,
    },
    ports::{NavigatorPort, OnboardingCompletionPort, OnboardingEventPort},
};

use super::context::PageContext;
use crate::usecases::session::PersistSession;

/// Lifecycle of one onboarding page activation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageStatus {
    /// Created, guard not evaluated yet.
    Inactive,
    /// Form rendered and accepting events.
    Active,
    /// Token missing; redirected to login. Terminal.
    Blocked,
    /// Onboarding completed; redirected to the dashboard. Terminal.
    Completed,
    /// Page unmounted by its owner. Terminal.
    TornDown,
}

/// Errors produced by the onboarding controller.
#[derive(Debug, thiserror::Error)]
pub enum OnboardingControllerError {
    #[error("navigation to {route:?} failed: {source}")]
    Navigation {
        route: Route,
        #[source]
        source: anyhow::Error,
    },
}

/// Ports and use cases the controller drives.
pub struct OnboardingControllerDeps {
    pub completion: Arc<dyn OnboardingCompletionPort>,
    pub persist_session: Arc<PersistSession>,
    pub navigator: Arc<dyn NavigatorPort>,
    pub event_port: Arc<dyn OnboardingEventPort>,
}

enum Applied {
    Actions(Vec<OnboardingAction>),
    Ignored(OnboardingEvent, PageStatus),
}

/// Controller that drives one onboarding page activation.
pub struct OnboardingController {
    page: Arc<PageContext>,
    onboarding: OnboardingContext,

    completion: Arc<dyn OnboardingCompletionPort>,
    persist_session: Arc<PersistSession>,
    navigator: Arc<dyn NavigatorPort>,
    event_port: Arc<dyn OnboardingEventPort>,
}

impl OnboardingController {
    pub fn new(onboarding: OnboardingContext, deps: OnboardingControllerDeps) -> Self {
        let initial = FormState::new(onboarding.suggested_company_name());
        Self {
            page: PageContext::new(initial).arc(),
            onboarding,
            completion: deps.completion,
            persist_session: deps.persist_session,
            navigator: deps.navigator,
            event_port: deps.event_port,
        }
    }

    /// Email from the invitation link, for display.
    pub fn email(&self) -> &str {
        self.onboarding.email()
    }

    /// Run the activation guard. Only the first call has an effect.
    pub async fn activate(&self) -> Result<PageStatus, OnboardingControllerError> {
        let span = info_span!("usecase.onboarding_controller.activate");
        async {
            let decision = {
                let _dispatch_guard = self.page.acquire_dispatch_lock().await;
                let status = self.page.status().await;
                if status != PageStatus::Inactive {
                    debug!(?status, "onboarding page already activated");
                    return Ok(status);
                }
                let decision = guard::evaluate(&self.onboarding);
                match decision {
                    GuardDecision::Allow => self.page.set_status(PageStatus::Active).await,
                    GuardDecision::RedirectToLogin => {
                        self.page.set_status(PageStatus::Blocked).await
                    }
                }
                decision
            };

            match decision {
                GuardDecision::Allow => {
                    info!("onboarding page activated");
                    self.event_port
                        .emit_form_state_changed(self.page.get_state().await)
                        .await;
                    Ok(PageStatus::Active)
                }
                GuardDecision::RedirectToLogin => {
                    info!("onboarding token missing, redirecting to login");
                    self.navigate(Route::Login, NavigationMode::Replace).await?;
                    Ok(PageStatus::Blocked)
                }
            }
        }
        .instrument(span)
        .await
    }

    pub async fn set_company_name(
        &self,
        value: impl Into<String>,
    ) -> Result<FormState, OnboardingControllerError> {
        self.dispatch(OnboardingEvent::EditCompanyName {
            value: value.into(),
        })
        .await
    }

    /// Submit the form. Resolves once the completion call (if any) settled.
    ///
    /// A submit while another one is in flight returns immediately with the
    /// current state and does not reach the completion port.
    pub async fn submit(&self) -> Result<FormState, OnboardingControllerError> {
        self.dispatch(OnboardingEvent::Submit).await
    }

    pub async fn state(&self) -> FormState {
        self.page.get_state().await
    }

    pub async fn status(&self) -> PageStatus {
        self.page.status().await
    }

    /// Unmount the page. Later events and completion outcomes no longer
    /// touch form state, the view or navigation.
    pub async fn teardown(&self) {
        let _dispatch_guard = self.page.acquire_dispatch_lock().await;
        let previous = self.page.status().await;
        self.page.set_status(PageStatus::TornDown).await;
        debug!(?previous, "onboarding page torn down");
    }

    async fn dispatch(&self, event: OnboardingEvent) -> Result<FormState, OnboardingControllerError> {
        let span = info_span!("usecase.onboarding_controller.dispatch", event = event.kind());
        async {
            let mut pending_events = vec![event];

            while let Some(event) = pending_events.pop() {
                match self.apply(event).await {
                    Applied::Actions(actions) => {
                        for action in actions {
                            if let Some(follow_up) = self.execute_action(action).await? {
                                pending_events.push(follow_up);
                            }
                        }
                    }
                    Applied::Ignored(event, status) => self.handle_ignored(event, status).await,
                }
            }

            Ok(self.page.get_state().await)
        }
        .instrument(span)
        .await
    }

    /// Run one transition under the dispatch lock.
    async fn apply(&self, event: OnboardingEvent) -> Applied {
        let _dispatch_guard = self.page.acquire_dispatch_lock().await;

        let status = self.page.status().await;
        if status != PageStatus::Active {
            return Applied::Ignored(event, status);
        }

        let from = self.page.get_state().await;
        let event_name = event.kind();
        let (next, actions) = OnboardingStateMachine::transition(from.clone(), event);
        info!(from = ?from, to = ?next, event = %event_name, "onboarding form transition");

        if next != from {
            self.page.set_state(next.clone()).await;
            self.event_port.emit_form_state_changed(next).await;
        }

        Applied::Actions(actions)
    }

    async fn execute_action(
        &self,
        action: OnboardingAction,
    ) -> Result<Option<OnboardingEvent>, OnboardingControllerError> {
        debug!(action = action.kind(), "onboarding executing action");
        match action {
            OnboardingAction::CompleteOnboarding { company_name } => {
                let outcome = self
                    .completion
                    .complete_onboarding(self.onboarding.token(), &company_name)
                    .await;
                let event = match outcome {
                    Ok(result) => {
                        info!("onboarding completion succeeded");
                        OnboardingEvent::CompletionSucceeded { result }
                    }
                    Err(err) => {
                        warn!(error = %err, "onboarding completion failed");
                        OnboardingEvent::CompletionFailed {
                            message: err.message().to_string(),
                        }
                    }
                };
                Ok(Some(event))
            }
            OnboardingAction::PersistSession { result } => {
                self.persist_session.execute(result).await;
                Ok(None)
            }
            OnboardingAction::Navigate { route, mode } => {
                let leaving = {
                    let _dispatch_guard = self.page.acquire_dispatch_lock().await;
                    if self.page.status().await == PageStatus::Active {
                        self.page.set_status(PageStatus::Completed).await;
                        true
                    } else {
                        false
                    }
                };
                if leaving {
                    self.navigate(route, mode).await?;
                } else {
                    debug!(?route, "onboarding page no longer active, skipping navigation");
                }
                Ok(None)
            }
        }
    }

    async fn handle_ignored(&self, event: OnboardingEvent, status: PageStatus) {
        match (event, status) {
            // The one-time token is consumed at this point; keep the credentials.
            (OnboardingEvent::CompletionSucceeded { result }, PageStatus::TornDown) => {
                info!("onboarding completed after teardown, persisting session only");
                self.persist_session.execute(result).await;
            }
            (event, status) => {
                debug!(?status, event = event.kind(), "onboarding page not active, ignoring event");
            }
        }
    }

    async fn navigate(
        &self,
        route: Route,
        mode: NavigationMode,
    ) -> Result<(), OnboardingControllerError> {
        info!(?route, ?mode, "onboarding navigating");
        self.navigator
            .navigate(route, mode)
            .await
            .map_err(|source| {
                error!(?route, error = %source, "onboarding navigation failed");
                OnboardingControllerError::Navigation { route, source }
            })
    }
}
