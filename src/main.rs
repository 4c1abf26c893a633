use kill_tally::{AppConfig, AppState, router};
use kill_tally::{day, engine, storage};
use std::net::SocketAddr;
use tokio::fs;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, fmt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let config = AppConfig::from_env();
    if let Some(parent) = config.data_path.parent() {
        fs::create_dir_all(parent).await?;
    }

    let mut record = storage::load_record(&config.data_path).await;
    if let Some(rec) = record.as_mut() {
        let today = day::effective_date_now(config.rollover_hour);
        if engine::roll_over(rec, today) {
            info!(date = %rec.date, "rolled stored record onto the current day");
            if let Err(err) = storage::persist_record(&config.data_path, rec).await {
                error!("failed to write migrated record: {}", err.message);
            }
        }
    }

    let port = config.port;
    let state = AppState::new(config, record);
    let app = router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    info!("listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
