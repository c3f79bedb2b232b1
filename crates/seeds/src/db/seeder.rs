//! Database seeding utilities.

use heroes::{HEROES_TABLE, Hero, HeroTable, StoreError};
use thiserror::Error;
use tracing::{debug, info};

use crate::fixtures;

#[derive(Debug, Error)]
pub enum SeedError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("Invalid hero roster: {0}")]
    InvalidFixture(String),
}

/// Row counts reported by a completed seed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedSummary {
    pub deleted: u64,
    pub inserted: u64,
}

/// Seeds `table` with the fixed hero roster.
pub async fn seed<T>(table: &mut T) -> Result<SeedSummary, SeedError>
where
    T: HeroTable + ?Sized,
{
    Seeder::new().seed(table).await
}

/// Clears the `Heroes` table and writes a roster into it.
#[derive(Debug, Clone)]
pub struct Seeder {
    roster: Vec<Hero>,
}

impl Default for Seeder {
    fn default() -> Self {
        Self::new()
    }
}

impl Seeder {
    /// Creates a seeder for the fixed hero roster.
    pub fn new() -> Self {
        Self {
            roster: fixtures::heroes(),
        }
    }

    /// Replaces the roster to write.
    pub fn with_roster(mut self, roster: Vec<Hero>) -> Self {
        self.roster = roster;
        self
    }

    pub fn roster(&self) -> &[Hero] {
        &self.roster
    }

    /// Deletes every row, then inserts the roster in one statement.
    ///
    /// **WARNING**: prior table contents are removed. Store failures are
    /// returned as-is with no retry; if the insert fails after the delete
    /// succeeded, the table is left empty.
    pub async fn seed<T>(&self, table: &mut T) -> Result<SeedSummary, SeedError>
    where
        T: HeroTable + ?Sized,
    {
        fixtures::validate(&self.roster).map_err(SeedError::InvalidFixture)?;

        let deleted = self.clear(table).await?;

        info!("Seeding {} heroes...", self.roster.len());
        for hero in &self.roster {
            debug!(
                "  {} {} {} ({})",
                hero.id, hero.first_name, hero.last_name, hero.hero_name
            );
        }
        let inserted = table.bulk_insert(&self.roster).await?;
        info!("Seeded {inserted} heroes");

        Ok(SeedSummary { deleted, inserted })
    }

    /// Deletes every row from the table.
    pub async fn clear<T>(&self, table: &mut T) -> Result<u64, SeedError>
    where
        T: HeroTable + ?Sized,
    {
        info!("Clearing {HEROES_TABLE}...");
        let deleted = table.delete_all().await?;
        info!("Cleared {deleted} rows from {HEROES_TABLE}");
        Ok(deleted)
    }
}
