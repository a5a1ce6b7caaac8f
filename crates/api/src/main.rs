mod routes;

use common_formulator::{get_db_pool, settings};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&settings().logging.level)),
        )
        .init();

    start_server().await?;
    Ok(())
}

async fn start_server() -> color_eyre::Result<()> {
    let pool = get_db_pool().await?;
    sqlx::migrate!("../../migrations").run(&pool).await?;

    let app = routes::create_router(pool);

    let api_settings = &settings().api;
    let address = format!("{}:{}", api_settings.host, api_settings.port);
    info!("Listening on {address}");
    let listener = tokio::net::TcpListener::bind(&address).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
