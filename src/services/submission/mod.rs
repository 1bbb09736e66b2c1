pub mod simulated;
pub mod webhook;

use std::time::Duration;

use async_trait::async_trait;

use crate::config::AppConfig;
use crate::errors::AppError;
use crate::models::{Confirmation, Submission, SubmissionError};

use self::simulated::SimulatedSink;
use self::webhook::WebhookSink;

/// External collaborator that durably accepts a finished booking, contact
/// message or callback request.
#[async_trait]
pub trait SubmissionSink: Send + Sync {
    async fn submit(&self, submission: &Submission) -> Result<Confirmation, SubmissionError>;
}

/// Picks the sink named by `SUBMISSION_SINK`.
pub fn from_config(config: &AppConfig) -> Result<Box<dyn SubmissionSink>, AppError> {
    match config.submission_sink.trim().to_lowercase().as_str() {
        "webhook" => {
            if config.sink_webhook_url.trim().is_empty() {
                return Err(AppError::Config(
                    "SINK_WEBHOOK_URL must be set when SUBMISSION_SINK=webhook".to_string(),
                ));
            }
            tracing::info!("using webhook submission sink (url: {})", config.sink_webhook_url);
            Ok(Box::new(WebhookSink::new(
                config.sink_webhook_url.clone(),
                config.sink_signing_secret.clone(),
            )))
        }
        "" | "simulated" => {
            tracing::info!(
                "using simulated submission sink (delay: {} ms)",
                config.simulated_delay_ms
            );
            Ok(Box::new(SimulatedSink::new(Duration::from_millis(
                config.simulated_delay_ms,
            ))))
        }
        other => Err(AppError::Config(format!("unknown submission sink: {other}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Lang;

    fn config(sink: &str, url: &str) -> AppConfig {
        AppConfig {
            port: 3000,
            submission_sink: sink.to_string(),
            sink_webhook_url: url.to_string(),
            sink_signing_secret: String::new(),
            submission_timeout_secs: 10,
            simulated_delay_ms: 0,
            session_ttl_minutes: 30,
            default_lang: Lang::En,
        }
    }

    #[test]
    fn test_webhook_without_url_is_config_error() {
        let err = from_config(&config("webhook", "  ")).err().unwrap();
        assert!(matches!(err, AppError::Config(_)));
        assert!(err.to_string().contains("SINK_WEBHOOK_URL"));
    }

    #[test]
    fn test_unknown_sink_is_config_error() {
        let err = from_config(&config("carrier-pigeon", "")).err().unwrap();
        assert_eq!(err.to_string(), "configuration error: unknown submission sink: carrier-pigeon");
    }

    #[test]
    fn test_known_sinks_build() {
        assert!(from_config(&config("simulated", "")).is_ok());
        assert!(from_config(&config("Webhook", "http://127.0.0.1:9/hook")).is_ok());
    }
}
