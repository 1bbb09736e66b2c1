use std::env;
use std::time::Duration;

use crate::i18n::Lang;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub port: u16,
    pub submission_sink: String,
    pub sink_webhook_url: String,
    pub sink_signing_secret: String,
    pub submission_timeout_secs: u64,
    pub simulated_delay_ms: u64,
    pub session_ttl_minutes: i64,
    pub default_lang: Lang,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
            submission_sink: env::var("SUBMISSION_SINK")
                .unwrap_or_else(|_| "simulated".to_string()),
            sink_webhook_url: env::var("SINK_WEBHOOK_URL").unwrap_or_default(),
            sink_signing_secret: env::var("SINK_SIGNING_SECRET").unwrap_or_default(),
            submission_timeout_secs: env::var("SUBMISSION_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
            simulated_delay_ms: env::var("SIMULATED_DELAY_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(1800),
            session_ttl_minutes: env::var("SESSION_TTL_MINUTES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30),
            default_lang: env::var("DEFAULT_LANG")
                .ok()
                .and_then(|v| Lang::parse(&v))
                .unwrap_or(Lang::En),
        }
    }

    pub fn submission_timeout(&self) -> Duration {
        Duration::from_secs(self.submission_timeout_secs)
    }
}
