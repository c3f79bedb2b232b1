//! Seed data for the `Heroes` table.
//!
//! The seed clears the table and inserts a fixed roster of four heroes.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use hero_seeds::prelude::*;
//!
//! let mut conn = pool.acquire().await?;
//! let summary = Seeder::new().seed(&mut *conn).await?;
//! assert_eq!(summary.inserted, 4);
//! ```

pub mod config;
pub mod db;
pub mod fixtures;

// Re-export core types from heroes crate
pub use heroes::{Hero, HeroTable, MemoryHeroTable, StoreError};

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::config::{ConfigError, SeedConfig};
    pub use crate::db::{SeedError, SeedSummary, Seeder, seed};
    pub use crate::{Hero, HeroTable, MemoryHeroTable, StoreError};
}
