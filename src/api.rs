//! HTTP surface for the USSD gateway callback

mod handlers;

pub use handlers::create_router;

use crate::runtime::SessionRuntime;
use std::sync::Arc;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub runtime: Arc<SessionRuntime>,
}

impl AppState {
    pub fn new(runtime: SessionRuntime) -> Self {
        Self {
            runtime: Arc::new(runtime),
        }
    }
}
