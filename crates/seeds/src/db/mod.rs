//! Database seeding for the `Heroes` table.
//!
//! The [`Seeder`] clears the table and writes the hero roster through any
//! [`HeroTable`](heroes::HeroTable) handle.

mod seeder;

pub use seeder::{SeedError, SeedSummary, Seeder, seed};
