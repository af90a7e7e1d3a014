use std::sync::Arc;
use std::sync::atomic::AtomicBool;

use textlens_config::Config;
use textlens_core::state::SessionState;
use tokio::sync::RwLock;

pub struct AppState {
    pub config: Arc<RwLock<Config>>,
    pub session: RwLock<SessionState>,
    /// Exactly-once guard for the paste watcher subscription
    pub paste_watcher_running: AtomicBool,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(RwLock::new(config)),
            session: RwLock::new(SessionState::new()),
            paste_watcher_running: AtomicBool::new(false),
        }
    }
}
