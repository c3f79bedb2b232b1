//! Seed script - resets the Heroes table to the fixed roster
//!
//! Run with:
//! ```
//! cargo run -p hero-seeds --bin seed
//! ```
//!
//! Set `SEED_DRY_RUN=1` to seed an in-memory table without a database.

use hero_seeds::prelude::*;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = SeedConfig::from_env()?;

    let rows = if config.dry_run {
        tracing::info!("Dry run: seeding an in-memory table");
        let mut table = MemoryHeroTable::new();
        run(&mut table).await?
    } else {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(config.acquire_timeout())
            .connect(&config.database_url)
            .await?;

        tracing::info!("Connected to database");

        // Delete and insert must share one connection.
        let mut conn = pool.acquire().await?;
        run(&mut *conn).await?
    };

    for hero in &rows {
        tracing::info!(
            "  {}: {} {} ({})",
            hero.id,
            hero.first_name,
            hero.last_name,
            hero.hero_name
        );
    }

    Ok(())
}

async fn run<T>(table: &mut T) -> anyhow::Result<Vec<Hero>>
where
    T: HeroTable + ?Sized,
{
    let summary = match seed(table).await {
        Ok(summary) => summary,
        Err(e) => {
            tracing::error!("Seed failed: {e}");
            return Err(e.into());
        }
    };

    tracing::info!("Seed completed!");
    tracing::info!("  Deleted: {}", summary.deleted);
    tracing::info!("  Inserted: {}", summary.inserted);

    Ok(table.list_all().await?)
}
