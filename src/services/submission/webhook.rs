use async_trait::async_trait;
use base64::Engine;
use hmac::{Hmac, Mac};
use sha1::Sha1;

use super::SubmissionSink;
use crate::models::{Confirmation, Submission, SubmissionError};

pub const SIGNATURE_HEADER: &str = "x-booking-signature";

/// Forwards submissions as JSON to an HTTP endpoint owned by the clinic's
/// back office.
pub struct WebhookSink {
    url: String,
    signing_secret: String,
    client: reqwest::Client,
}

impl WebhookSink {
    pub fn new(url: String, signing_secret: String) -> Self {
        Self {
            url,
            signing_secret,
            client: reqwest::Client::new(),
        }
    }
}

/// base64(HMAC-SHA1(secret, body)), or `None` when no secret is set.
pub fn sign_body(secret: &str, body: &[u8]) -> Option<String> {
    if secret.is_empty() {
        return None;
    }
    let mut mac = Hmac::<Sha1>::new_from_slice(secret.as_bytes()).ok()?;
    mac.update(body);
    let result = mac.finalize().into_bytes();
    Some(base64::engine::general_purpose::STANDARD.encode(result))
}

#[async_trait]
impl SubmissionSink for WebhookSink {
    async fn submit(&self, submission: &Submission) -> Result<Confirmation, SubmissionError> {
        let body = serde_json::to_vec(submission)
            .map_err(|e| SubmissionError::Transport(format!("failed to encode submission: {e}")))?;

        let mut request = self
            .client
            .post(&self.url)
            .header(reqwest::header::CONTENT_TYPE, "application/json");
        if let Some(signature) = sign_body(&self.signing_secret, &body) {
            request = request.header(SIGNATURE_HEADER, signature);
        }

        let resp = request.body(body).send().await.map_err(|e| {
            tracing::error!(error = %e, url = %self.url, "failed to reach submission webhook");
            SubmissionError::Transport(e.to_string())
        })?;

        let status = resp.status();
        if !status.is_success() {
            let detail = resp.text().await.unwrap_or_default();
            tracing::warn!(status = %status, detail = %detail, "submission webhook rejected request");
            return Err(SubmissionError::Rejected(format!("webhook returned {status}")));
        }

        // An empty or non-JSON body still counts as accepted.
        let reference = resp
            .json::<serde_json::Value>()
            .await
            .ok()
            .and_then(|v| v["reference"].as_str().map(str::to_string))
            .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());

        Ok(Confirmation::new(reference))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_body_without_secret() {
        assert_eq!(sign_body("", b"{}"), None);
    }

    #[test]
    fn test_sign_body_is_stable_base64() {
        let a = sign_body("secret", br#"{"type":"booking"}"#).unwrap();
        let b = sign_body("secret", br#"{"type":"booking"}"#).unwrap();
        assert_eq!(a, b);
        // SHA-1 digest is 20 bytes -> 28 base64 chars
        assert_eq!(a.len(), 28);
        assert_ne!(a, sign_body("other", br#"{"type":"booking"}"#).unwrap());
    }

    #[tokio::test]
    async fn test_unreachable_webhook_is_transport_error() {
        let sink = WebhookSink::new("http://127.0.0.1:9/submit".to_string(), String::new());
        let submission = Submission::Callback(crate::models::CallbackRequest {
            event_id: "2".to_string(),
            name: "Ali".to_string(),
            phone: "+20 155".to_string(),
            email: None,
            time: None,
            lang: None,
        });
        let err = sink.submit(&submission).await.unwrap_err();
        assert!(matches!(err, SubmissionError::Transport(_)));
    }
}
