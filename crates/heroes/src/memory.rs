//! In-process `Heroes` table.
//!
//! Keyed by `id` like the real table's primary key: a bulk insert that would
//! repeat an id fails as a whole and leaves the rows untouched.

use std::collections::{BTreeMap, HashSet};

use async_trait::async_trait;
use tracing::debug;

use crate::database::{HEROES_TABLE, HeroTable};
use crate::errors::StoreError;
use crate::models::Hero;

#[derive(Debug, Default, Clone)]
pub struct MemoryHeroTable {
    rows: BTreeMap<i32, Hero>,
}

impl MemoryHeroTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a table that already holds the given rows.
    pub fn with_rows(heroes: impl IntoIterator<Item = Hero>) -> Self {
        Self {
            rows: heroes.into_iter().map(|hero| (hero.id, hero)).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn get(&self, id: i32) -> Option<&Hero> {
        self.rows.get(&id)
    }
}

#[async_trait]
impl HeroTable for MemoryHeroTable {
    async fn delete_all(&mut self) -> Result<u64, StoreError> {
        let deleted = self.rows.len() as u64;
        self.rows.clear();
        debug!("Deleted {deleted} rows from in-memory {HEROES_TABLE}");
        Ok(deleted)
    }

    async fn bulk_insert(&mut self, heroes: &[Hero]) -> Result<u64, StoreError> {
        let mut incoming = HashSet::with_capacity(heroes.len());
        for hero in heroes {
            if self.rows.contains_key(&hero.id) || !incoming.insert(hero.id) {
                return Err(StoreError::DuplicateId(hero.id));
            }
        }

        self.rows.extend(heroes.iter().map(|hero| (hero.id, hero.clone())));
        debug!("Inserted {} rows into in-memory {HEROES_TABLE}", heroes.len());
        Ok(heroes.len() as u64)
    }

    async fn list_all(&mut self) -> Result<Vec<Hero>, StoreError> {
        Ok(self.rows.values().cloned().collect())
    }
}
