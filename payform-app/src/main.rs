//! payform
//!
//! A checkout form over the payment order service: renders a pre-filled
//! order, validates the editable fields, creates the order, and redirects
//! to the hosted checkout page after a short confirmation pause.

mod controller;
mod form;
mod navigate;
mod render;
mod sample;

use std::sync::Arc;

use clap::Parser;
use payform_sdk::client::OrderClient;
use payform_sdk::config::ApiConfig;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use url::Url;

use controller::{OrderFormController, SubmitOutcome};
use navigate::StdoutNavigator;

/// payform - submit a pre-filled order and continue to hosted checkout
#[derive(Parser, Debug)]
#[command(name = "payform")]
#[command(version, about, long_about = None)]
struct Args {
    /// Base URL of the order service
    #[arg(long, env = "API_BASE_URL")]
    api_base_url: Url,

    /// Bearer token attached to every order-service request
    #[arg(long, env = "API_TOKEN", hide_env_values = true)]
    api_token: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let args = Args::parse();
    tracing::info!("Starting payform v{}", env!("CARGO_PKG_VERSION"));

    let config = ApiConfig::new(args.api_base_url, args.api_token);
    let client = OrderClient::new(config);

    let mut controller =
        OrderFormController::new(sample::sample_order(), client, Arc::new(StdoutNavigator));

    println!("{}", controller.view());

    match controller.submit().await {
        SubmitOutcome::Created { checkout_url } => {
            tracing::info!(url = %checkout_url, "order created");
            println!("{}", controller.view());
            if let Some(mut redirect) = controller.take_redirect() {
                // The redirect fires after the confirmation pause unless the
                // user leaves first (Ctrl+C is this surface's page unload).
                let navigated = tokio::select! {
                    _ = redirect.wait() => true,
                    _ = tokio::signal::ctrl_c() => false,
                };
                if !navigated {
                    tracing::info!("interrupted before redirect");
                    redirect.cancel();
                }
            }
        }
        SubmitOutcome::Invalid(errors) => {
            tracing::warn!(fields = errors.len(), "submission blocked by validation");
            for (field, message) in errors.iter() {
                tracing::debug!(field, message, "field validation failed");
            }
            println!("{}", controller.view());
        }
        // The failure detail is already on the diagnostic log; the form
        // shows no change.
        SubmitOutcome::Failed => {}
        // Unreachable here: the submit control runs once per invocation.
        SubmitOutcome::AlreadyPending => {}
    }

    Ok(())
}

/// Initialize the tracing subscriber with environment-based filtering.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
