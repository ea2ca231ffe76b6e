//! State

use std::sync::Arc;

use till_app::context::AppContext;

/// Shared handler state carrying the application services.
#[derive(Clone)]
pub(crate) struct State {
    pub(crate) app: AppContext,
}

impl State {
    #[must_use]
    pub(crate) fn new(app: AppContext) -> Arc<Self> {
        Arc::new(Self { app })
    }
}
