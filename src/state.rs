use std::sync::Arc;

use crate::application::services::{AuthService, ShortcutService};
use crate::domain::repositories::ShortcutRepository;

/// Shared state injected into every handler.
///
/// Holds only service handles and configuration values; no per-request data
/// is kept between requests.
#[derive(Clone)]
pub struct AppState {
    pub shortcut_service: Arc<ShortcutService>,
    pub auth_service: Arc<AuthService>,
    /// When set, `GET /` redirects here instead of showing the creation form.
    pub home_url: Option<String>,
}

impl AppState {
    pub fn new(
        repository: Arc<dyn ShortcutRepository>,
        api_key: &str,
        home_url: Option<String>,
    ) -> Self {
        Self {
            shortcut_service: Arc::new(ShortcutService::new(repository)),
            auth_service: Arc::new(AuthService::new(api_key)),
            home_url,
        }
    }
}
