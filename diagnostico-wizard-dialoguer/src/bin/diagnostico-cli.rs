//! Interactive diagnostico wizard.
//!
//! Usage: `diagnostico-cli [LANDING_URL]`
//!
//! The landing URL is optional; its `utm_*` parameters are forwarded with the
//! submission. `DIAGNOSTICO_DEFAULT_COUNTRY` (e.g. `PA`) preselects the
//! country. Set `RUST_LOG` for diagnostics on stderr.

use diagnostico::{Command, Wizard};
use diagnostico_gateway_http::HttpGateway;
use diagnostico_wizard_dialoguer::{DialoguerFrontend, FrontendError, Settings};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let settings = Settings::from_env()?;
    let gateway = HttpGateway::from_env()?;
    tracing::info!(endpoint = %gateway.config().endpoint, utms = settings.utms.len(), "starting wizard");

    let mut wizard = Wizard::with_utms(settings.utms, gateway);
    if let Some(country) = settings.default_country {
        wizard.dispatch(Command::SetCountry(country)).await;
    }
    let frontend =
        DialoguerFrontend::new().with_privacy_url(settings.privacy_url.map(String::from));

    match frontend.run(&mut wizard).await {
        Ok(_) => Ok(()),
        Err(FrontendError::Cancelled) => {
            eprintln!("Cancelado.");
            Ok(())
        }
        Err(err) => Err(err.into()),
    }
}
