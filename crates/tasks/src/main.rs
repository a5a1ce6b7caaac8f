mod seed_catalog;

use crate::seed_catalog::seed_catalog;
use color_eyre::Result;
use common_formulator::get_db_pool;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt::init();

    let pool = get_db_pool().await?;
    sqlx::migrate!("../../migrations").run(&pool).await?;

    seed_catalog(&pool).await?;
    info!("Database seeding completed.");
    Ok(())
}
