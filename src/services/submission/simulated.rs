use std::time::Duration;

use async_trait::async_trait;

use super::SubmissionSink;
use crate::models::{Confirmation, Submission, SubmissionError};

/// Accepts everything after a fixed delay. Stands in for the real backend
/// until one exists.
pub struct SimulatedSink {
    delay: Duration,
}

impl SimulatedSink {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl SubmissionSink for SimulatedSink {
    async fn submit(&self, submission: &Submission) -> Result<Confirmation, SubmissionError> {
        tokio::time::sleep(self.delay).await;
        let reference = uuid::Uuid::new_v4().to_string();
        tracing::info!(
            kind = submission.type_name(),
            reference = %reference,
            "simulated submission accepted"
        );
        Ok(Confirmation::new(reference))
    }
}
