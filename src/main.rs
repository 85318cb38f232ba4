use tokio::net::TcpListener;
use tracing::info;
use user_search::app_system::{setup_tracing, shutdown_signal, Config, SearchSystem};
use user_search::http::{router, serve};
use user_search::store::RecordStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    setup_tracing();

    let config = Config::load()?;
    let store = RecordStore::seeded();
    info!(records = store.len(), delay_ms = config.search_delay.as_millis() as u64, "Loaded record store");

    let system = SearchSystem::new(store, config.search_delay);
    let app = router(system.search_client.clone());

    let address = format!("0.0.0.0:{}", config.port);
    let listener = TcpListener::bind(&address).await?;
    info!("The server is running on port: {}", config.port);

    serve(listener, app, shutdown_signal()).await?;

    system.shutdown().await?;
    info!("Server stopped");
    Ok(())
}
