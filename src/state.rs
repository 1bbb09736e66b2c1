use crate::config::AppConfig;
use crate::services::catalog::Catalog;
use crate::services::sessions::SessionStore;
use crate::services::submission::SubmissionSink;

pub struct AppState {
    pub config: AppConfig,
    pub catalog: Catalog,
    pub sink: Box<dyn SubmissionSink>,
    pub sessions: SessionStore,
}
