//! # diagnostico
//!
//! The lead-qualification wizard of the diagnostico form. Backend-agnostic.
//!
//! The wizard runs in three gated steps:
//! 1. three single-choice qualification questions, some with a free-text
//!    supplement
//! 2. contact details, with a corporate-email check and a per-country phone rule
//! 3. consent, then submission through a [`SubmissionGateway`]
//!
//! ## Usage
//!
//! ```rust,ignore
//! use diagnostico::{Command, ContactField, Wizard};
//!
//! let mut wizard = Wizard::new(gateway);
//! wizard.dispatch(Command::select("industria", "retail")).await;
//! // ...
//! wizard.dispatch(Command::SetConsent(true)).await;
//! let state = wizard.dispatch(Command::Submit).await;
//! if let Some(view) = state.result() {
//!     println!("{}", view.title);
//! }
//! ```
//!
//! [`WizardState`] can also be driven directly: [`WizardState::apply`]
//! returns an [`Effect`] instead of calling the gateway itself.
//!
//! ## Front-ends and gateways
//!
//! - `diagnostico-wizard-dialoguer` - terminal prompts via dialoguer
//! - `diagnostico-gateway-http` - JSON over HTTP via reqwest

// Re-export all types from diagnostico-types
pub use diagnostico_types::*;

pub mod catalog;
pub mod validate;

mod state;
pub use state::{Command, Effect, OutboundLink, ResultView, Step, WizardState};

mod wizard;
pub use wizard::Wizard;

// Test gateway for exercising the wizard without a network
mod test_gateway;
pub use test_gateway::TestGateway;
