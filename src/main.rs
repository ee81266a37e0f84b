//! Entry point: load config, wire dependencies, and run the server.

use quoteauth::auth::JwtSecret;
use quoteauth::config::Config;
use quoteauth::db;
use quoteauth::{cors_layer, create_app, AppState, AuthService, CredentialStore};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = Config::from_env().map_err(|e| anyhow::anyhow!("config: {}", e))?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))?;
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    let db_pool = db::create_pool(&config.database_url).await?;
    db::ensure_schema(&db_pool).await?;
    tracing::info!("identity store ready");

    let store = CredentialStore::postgres(db_pool);
    let jwt_secret = JwtSecret::new(config.jwt_secret.clone());
    let state = AppState::new(AuthService::new(store, jwt_secret));

    let cors = cors_layer(config.cors_allow_origin.as_deref())
        .map_err(|e| anyhow::anyhow!("CORS_ALLOW_ORIGIN: {}", e))?;
    let app = create_app(state).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(cors),
    );

    tracing::info!(addr = %config.server_addr, "listening");
    let listener = tokio::net::TcpListener::bind(config.server_addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
