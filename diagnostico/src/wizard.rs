use diagnostico_types::{SubmissionGateway, Utms};

use crate::state::{Command, Effect, WizardState};

/// Drives a [`WizardState`] against a submission gateway.
///
/// Front-ends feed user actions to [`Wizard::dispatch`] and render the
/// returned state. When a command asks for a submission, the wizard calls
/// the gateway and applies the outcome before returning.
#[derive(Debug)]
pub struct Wizard<G> {
    state: WizardState,
    gateway: G,
}

impl<G: SubmissionGateway> Wizard<G> {
    /// Create a wizard for a fresh session.
    pub fn new(gateway: G) -> Self {
        Self::with_state(WizardState::new(), gateway)
    }

    /// Create a wizard for a session that arrived with attribution parameters.
    pub fn with_utms(utms: Utms, gateway: G) -> Self {
        Self::with_state(WizardState::with_utms(utms), gateway)
    }

    /// Create a wizard around an existing state.
    pub fn with_state(state: WizardState, gateway: G) -> Self {
        Self { state, gateway }
    }

    /// The current state.
    pub fn state(&self) -> &WizardState {
        &self.state
    }

    /// The gateway submissions go to.
    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    /// Apply a command and perform whatever effect it produces.
    pub async fn dispatch(&mut self, command: Command) -> &WizardState {
        if let Effect::Submit(submission) = self.state.apply(command) {
            let outcome = self.gateway.submit(&submission).await;
            self.state.apply(Command::SubmissionSettled(outcome));
        }
        &self.state
    }
}
