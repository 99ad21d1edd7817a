//! RIP Gamertags server binary.

use std::sync::Arc;

use http::{header::CONTENT_TYPE, HeaderValue, Method};
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use rip_gamertags::adapters::{
    app_router, AppState, PayPalGateway, PayPalGatewayConfig, SiteSettings, SupabaseRecordStore,
    SupabaseStoreConfig,
};
use rip_gamertags::config::AppConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    init_tracing(&config);

    // Incomplete configuration is served anyway; affected endpoints answer 500.
    if let Err(e) = config.validate() {
        tracing::warn!(error = %e, "Configuration incomplete");
    }

    tracing::info!("Initializing state...");
    let http_client = reqwest::Client::builder()
        .timeout(config.server.upstream_timeout())
        .build()?;

    let gateway = PayPalGateway::new(
        PayPalGatewayConfig::from_app_config(&config.paypal),
        http_client.clone(),
    );
    let store = SupabaseRecordStore::new(
        SupabaseStoreConfig::from_app_config(&config.supabase),
        http_client,
    );
    let state = AppState::new(
        Arc::new(gateway),
        Arc::new(store),
        SiteSettings::from_config(&config),
    );

    let mut app = app_router(state).layer(TraceLayer::new_for_http());
    if let Some(cors) = cors_layer(&config.server.cors_origins_list()) {
        app = app.layer(cors);
    }

    let address = config.server.socket_addr();
    let listener = TcpListener::bind(address).await?;
    tracing::info!(%address, sandbox = config.paypal.is_sandbox(), "Server running");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shut down");
    Ok(())
}

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));

    if config.is_production() {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

/// CORS is off unless origins are configured.
fn cors_layer(origins: &[String]) -> Option<CorsLayer> {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    if origins.is_empty() {
        return None;
    }

    Some(
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers([CONTENT_TYPE]),
    )
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match tokio::signal::ctrl_c().await {
            Ok(()) => tracing::info!("Received Ctrl+C, shutting down"),
            Err(e) => {
                tracing::error!(error = %e, "Failed to install Ctrl+C handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                tracing::info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install signal handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
