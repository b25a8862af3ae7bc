//! Run the wizard against a local gateway that fails once, then accepts.
//! Run with: cargo run -p diagnostico-wizard-dialoguer --example offline

use diagnostico::{GatewayError, TestGateway, Utms, Wizard};
use diagnostico_wizard_dialoguer::DialoguerFrontend;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let gateway = TestGateway::new()
        .with_failure(GatewayError::transport("connection refused"))
        .with_success();
    let utms = Utms::from_query_pairs([("utm_source", "demo")]);
    let mut wizard = Wizard::with_utms(utms, gateway);

    DialoguerFrontend::new().run(&mut wizard).await?;

    if let Some(submission) = wizard.gateway().last_submission() {
        println!();
        println!("{submission:#?}");
    }
    Ok(())
}
