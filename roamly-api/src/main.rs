use std::net::SocketAddr;
use std::sync::Arc;

use roamly_api::{app, app_config::Config, AppState};
use roamly_notion::NotionClient;
use roamly_paypal::{ExpectedPayment, PayPalVerifier};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "roamly_api=debug,tower_http=debug,axum::rejection=trace".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load().expect("Failed to load config");
    tracing::info!("Starting Roamly API on port {}", config.server.port);

    let content = NotionClient::new(config.notion.api_key.clone(), config.notion.databases.clone())
        .expect("Failed to build content client");

    let expected = ExpectedPayment {
        currency: config.listing.currency.clone(),
        amount: config.listing.fee.clone(),
    };
    let verifier = PayPalVerifier::new(config.paypal.clone(), expected)
        .expect("Failed to build payment verifier");

    let state = AppState {
        content: Arc::new(content),
        verifier: Arc::new(verifier),
        listing: config.listing.clone(),
    };

    tokio::spawn(roamly_api::heartbeat::run(config.listing.heartbeat_seconds));

    let app = app(state, &config.server.static_dir);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
