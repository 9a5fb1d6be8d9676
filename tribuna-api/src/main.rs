use serde::Deserialize;
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use thiserror::Error;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{debug, error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use tribuna_db::client::{StoreClient, StoreError};

mod server;

use server::{ConfigStatus, ServerState};

#[derive(Debug, Error)]
enum InitError {
    #[error("Error parsing .env file: {0}")]
    Dotenv(#[from] dotenvy::Error),
    #[error("Error parsing environment: {0}")]
    Envy(#[from] envy::Error),
    #[error("Error connecting to the document store: {0}")]
    Store(#[from] StoreError),
    #[error("Error binding tcp listener: {0}")]
    TcpBind(std::io::Error),
    #[error("Error serving server: {0}")]
    TcpServe(std::io::Error),
}

#[derive(Clone, Eq, PartialEq, Debug, Hash, Deserialize)]
struct Env {
    server_address: IpAddr,
    server_port: u16,
    database_url: Option<String>,
    database_name: Option<String>,
}

fn install_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "tribuna_api=debug,tribuna_db=debug,tribuna_common=debug,\
                tower_http=debug,axum::rejection=trace,mongodb=info"
                    .into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn get_env() -> Result<Env, InitError> {
    if let Err(e) = dotenvy::dotenv() {
        if e.not_found() {
            debug!("No .dotenv file found");
        } else {
            return Err(e.into());
        }
    }

    envy::from_env().map_err(InitError::from)
}

/// The store handle is built once here. Missing configuration is not fatal:
/// the service starts with an unconfigured store and every data endpoint
/// reports a server error until the process is restarted with settings.
async fn connect_store(env: &Env) -> Result<StoreClient, InitError> {
    match (&env.database_url, &env.database_name) {
        (Some(url), Some(name)) => {
            let store = StoreClient::connect(url, name).await?;
            info!(database = %name, "Connected to document store");
            Ok(store)
        }
        _ => {
            warn!("DATABASE_URL or DATABASE_NAME not set; data endpoints will be unavailable");
            Ok(StoreClient::unconfigured())
        }
    }
}

/// Any origin, method, and header, with credentials. Wildcards cannot be
/// combined with credentials, so the request values are mirrored instead.
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        error!(%error, "Failed to listen for shutdown signal");
    }
}

#[tokio::main]
async fn main() -> Result<(), InitError> {
    install_tracing();
    let env = get_env()?;

    let store = connect_store(&env).await?;
    let state = ServerState {
        store: Arc::new(store),
        config_status: ConfigStatus {
            database_url_set: env.database_url.is_some(),
            database_name_set: env.database_name.is_some(),
        },
    };

    let app = server::routes()
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let server_address = SocketAddr::new(env.server_address, env.server_port);
    let listener = tokio::net::TcpListener::bind(server_address)
        .await
        .map_err(InitError::TcpBind)?;
    info!(%server_address, "Listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(InitError::TcpServe)?;

    Ok(())
}
