use async_trait::async_trait;

use crate::{GatewayError, Submission};

/// Trait for the endpoint that durably records a completed wizard.
///
/// Gateways receive the assembled payload and report success or a
/// [`GatewayError`]. They own transport concerns such as timeouts and
/// retries; the wizard itself never retries.
#[async_trait]
pub trait SubmissionGateway: Send + Sync {
    /// Send one submission.
    ///
    /// # Returns
    /// * `Ok(())` once the endpoint accepted the payload
    /// * `Err` on a non-success status, an explicit failure flag, or a
    ///   transport failure
    async fn submit(&self, submission: &Submission) -> Result<(), GatewayError>;
}

#[async_trait]
impl<G: SubmissionGateway + ?Sized> SubmissionGateway for std::sync::Arc<G> {
    async fn submit(&self, submission: &Submission) -> Result<(), GatewayError> {
        (**self).submit(submission).await
    }
}
