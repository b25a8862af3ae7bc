//! # diagnostico-wizard-dialoguer
//!
//! Dialoguer front-end for the diagnostico wizard.
//!
//! The three steps are presented as classic CLI prompts. Every edit goes
//! through [`diagnostico::Wizard::dispatch`], so gates, hints and the
//! submission flow behave exactly as in any other front-end.
//!
//! ## Example
//!
//! ```rust,ignore
//! use diagnostico::Wizard;
//! use diagnostico_gateway_http::HttpGateway;
//! use diagnostico_wizard_dialoguer::DialoguerFrontend;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> anyhow::Result<()> {
//!     let mut wizard = Wizard::new(HttpGateway::from_env()?);
//!     let view = DialoguerFrontend::new().run(&mut wizard).await?;
//!     println!("{}", view.title);
//!     Ok(())
//! }
//! ```

mod backend;
mod settings;

pub use backend::{DialoguerFrontend, FrontendError};
pub use settings::{ENV_DEFAULT_COUNTRY, ENV_PRIVACY_URL, Settings, SettingsError};
