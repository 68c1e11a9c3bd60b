use std::sync::Arc;

use tokio::sync::Mutex;
use wl_core::onboarding::FormState;

use super::PageStatus;

/// Shared page context containing form state, page status and dispatch lock.
///
/// ## Lock Ordering
/// When acquiring several locks, acquire `dispatch_lock` first, then
/// `status`, then `state`.
/// - `dispatch_lock`: serializes transitions. Never held across an external
///   call, so a second submit observes `is_submitting` instead of queueing.
/// - `status` / `state`: short critical sections for reads and writes.
#[derive(Clone)]
pub struct PageContext {
    state: Arc<Mutex<FormState>>,
    status: Arc<Mutex<PageStatus>>,
    dispatch_lock: Arc<Mutex<()>>,
}

impl PageContext {
    pub fn new(initial_state: FormState) -> Self {
        Self {
            state: Arc::new(Mutex::new(initial_state)),
            status: Arc::new(Mutex::new(PageStatus::Inactive)),
            dispatch_lock: Arc::new(Mutex::new(())),
        }
    }

    pub fn arc(self) -> Arc<Self> {
        Arc::new(self)
    }

    pub async fn get_state(&self) -> FormState {
        self.state.lock().await.clone()
    }

    /// Should only be called while holding `dispatch_lock`.
    pub async fn set_state(&self, state: FormState) {
        *self.state.lock().await = state;
    }

    pub async fn status(&self) -> PageStatus {
        *self.status.lock().await
    }

    pub async fn set_status(&self, status: PageStatus) {
        *self.status.lock().await = status;
    }

    pub async fn acquire_dispatch_lock(&self) -> tokio::sync::MutexGuard<'_, ()> {
        self.dispatch_lock.lock().await
    }
}
