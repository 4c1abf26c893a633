use crate::config::AppConfig;
use crate::models::TallyRecord;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Shared in-process state. `record` is `None` until the user has gone
/// through initial setup, and again after a full reset.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub record: Arc<Mutex<Option<TallyRecord>>>,
}

impl AppState {
    pub fn new(config: AppConfig, record: Option<TallyRecord>) -> Self {
        Self {
            config: Arc::new(config),
            record: Arc::new(Mutex::new(record)),
        }
    }
}
