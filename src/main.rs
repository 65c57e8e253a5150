use mimalloc::MiMalloc;
use portrait_gate::config::Config;
use portrait_gate::service::picture_loader;
use portrait_gate::templates::Templates;
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let cfg = Config::load()?;

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cfg.loglevel.clone()));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_level(true)
                .with_target(false),
        )
        .init();

    info!(
        database_url = %cfg.database_url,
        listen_addr = %cfg.listen_addr,
        loglevel = %cfg.loglevel,
        picture_seeds = cfg.pictures.len()
    );

    let pool = portrait_gate::db::connect(&cfg.database_url).await?;
    let templates = Templates::new()?;
    let state = portrait_gate::GateState::new(pool.clone(), templates);

    let seeded = picture_loader::seed_store(&state.pictures, &cfg.pictures).await;
    if seeded > 0 {
        info!(count = seeded, "pictures seeded");
    }

    let app = portrait_gate::gate_router(state);

    let listener = TcpListener::bind(&cfg.listen_addr).await?;
    info!("HTTP server listening on {}", cfg.listen_addr);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;
    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for shutdown signal");
    }
}
