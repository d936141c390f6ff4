use vibemoney_service::Providers;

use crate::Settings;

/// Immutable state shared by every worker.
#[derive(Clone)]
pub struct AppState {
    pub settings: Settings,
    pub providers: Providers,
}

impl AppState {
    pub fn new(settings: Settings, providers: Providers) -> Self {
        Self {
            settings,
            providers,
        }
    }
}
