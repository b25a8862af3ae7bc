//! Test gateway for exercising the wizard without a network.
//!
//! `TestGateway` records every payload it receives and answers with
//! pre-scripted outcomes. Clones share the same record, so a test can keep
//! a handle while the wizard owns another.
//!
//! # Example
//!
//! ```rust,ignore
//! use diagnostico::{Command, TestGateway, Wizard};
//!
//! let gateway = TestGateway::new().with_failure(GatewayError::rejected(500, None));
//! let mut wizard = Wizard::new(gateway.clone());
//! // ... fill in the wizard ...
//! wizard.dispatch(Command::Submit).await;
//! assert_eq!(gateway.submissions().len(), 1);
//! ```

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, PoisonError};

use async_trait::async_trait;

use crate::{GatewayError, Submission, SubmissionGateway};

#[derive(Debug, Default)]
struct Record {
    outcomes: VecDeque<Result<(), GatewayError>>,
    submissions: Vec<Submission>,
}

/// A gateway that returns pre-configured outcomes.
///
/// Once the scripted outcomes run out, every submission succeeds.
#[derive(Debug, Clone, Default)]
pub struct TestGateway {
    record: Arc<Mutex<Record>>,
}

impl TestGateway {
    /// Create a gateway that accepts everything.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue an outcome for the next unanswered submission.
    pub fn with_outcome(self, outcome: Result<(), GatewayError>) -> Self {
        self.lock().outcomes.push_back(outcome);
        self
    }

    /// Queue a failure.
    pub fn with_failure(self, err: GatewayError) -> Self {
        self.with_outcome(Err(err))
    }

    /// Queue a success.
    pub fn with_success(self) -> Self {
        self.with_outcome(Ok(()))
    }

    /// Every payload received so far, in order.
    pub fn submissions(&self) -> Vec<Submission> {
        self.lock().submissions.clone()
    }

    /// The most recent payload.
    pub fn last_submission(&self) -> Option<Submission> {
        self.lock().submissions.last().cloned()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Record> {
        self.record.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl SubmissionGateway for TestGateway {
    async fn submit(&self, submission: &Submission) -> Result<(), GatewayError> {
        let mut record = self.lock();
        record.submissions.push(submission.clone());
        record.outcomes.pop_front().unwrap_or(Ok(()))
    }
}
