use contact_site::config::Config;
use contact_site::server::{AppState, StaticAssets, bind_listener, build_router};
use contact_site::storage::DbStorage;
use mimalloc::MiMalloc;
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    // Read the level alone first so configuration errors are logged.
    let loglevel: String = Config::figment()
        .extract_inner("loglevel")
        .unwrap_or_else(|_| "info".to_string());
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(loglevel));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_level(true)
                .with_target(false),
        )
        .init();

    let cfg = Config::load().inspect_err(|e| error!(error = %e, "invalid configuration"))?;

    info!(
        database_url = %cfg.redacted_database_url(),
        listen_addr = %cfg.listen_addr,
        port = cfg.port,
        loglevel = %cfg.loglevel,
        static_dir = ?cfg.static_dir
    );

    let pool = contact_site::db::connect(&cfg.database_url).await?;
    let state = AppState::new(Arc::new(DbStorage::new(pool)));

    let assets = StaticAssets::resolve(cfg.static_dir.as_deref());
    let app = build_router(state, |router| assets.attach(router));

    let addr = SocketAddr::from((cfg.listen_addr, cfg.port));
    let listener = bind_listener(addr)?;
    info!("serving on port {}", cfg.port);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("Server has shut down gracefully.");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
}
