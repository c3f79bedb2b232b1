//! Seeder behavior against the in-memory table.
//!
//! Failure cases wrap the table in a [`FaultyTable`] that records every call
//! and can be told to fail the delete or the insert.

use async_trait::async_trait;
use hero_seeds::fixtures;
use hero_seeds::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Call {
    DeleteAll,
    BulkInsert,
    ListAll,
}

#[derive(Default)]
struct FaultyTable {
    inner: MemoryHeroTable,
    fail_delete: bool,
    fail_insert: bool,
    calls: Vec<Call>,
}

impl FaultyTable {
    fn new(inner: MemoryHeroTable) -> Self {
        Self {
            inner,
            ..Self::default()
        }
    }
}

#[async_trait]
impl HeroTable for FaultyTable {
    async fn delete_all(&mut self) -> Result<u64, StoreError> {
        self.calls.push(Call::DeleteAll);
        if self.fail_delete {
            return Err(StoreError::Database(sqlx::Error::PoolClosed));
        }
        self.inner.delete_all().await
    }

    async fn bulk_insert(&mut self, heroes: &[Hero]) -> Result<u64, StoreError> {
        self.calls.push(Call::BulkInsert);
        if self.fail_insert {
            return Err(StoreError::Database(sqlx::Error::PoolClosed));
        }
        self.inner.bulk_insert(heroes).await
    }

    async fn list_all(&mut self) -> Result<Vec<Hero>, StoreError> {
        self.calls.push(Call::ListAll);
        self.inner.list_all().await
    }
}

fn stale_rows() -> Vec<Hero> {
    vec![
        Hero::new(1, "Kal", "El", "Superboy"),
        Hero::new(42, "Wade", "Wilson", "Deadpool"),
    ]
}

#[tokio::test]
async fn seed_leaves_exactly_the_roster() {
    let mut table = MemoryHeroTable::new();

    seed(&mut table).await.expect("seed should succeed");

    let rows = table.list_all().await.unwrap();
    assert_eq!(rows.len(), 4);
    let ids: Vec<i32> = rows.iter().map(|h| h.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4]);
    assert_eq!(rows, fixtures::heroes());
}

#[tokio::test]
async fn seed_replaces_existing_rows() {
    let mut table = MemoryHeroTable::with_rows(stale_rows());

    let summary = seed(&mut table).await.expect("seed should succeed");

    assert_eq!(summary.deleted, 2);
    assert_eq!(summary.inserted, 4);
    assert!(table.get(42).is_none());
    assert_eq!(table.get(1).unwrap().hero_name, "Superman");
}

#[tokio::test]
async fn seeding_twice_yields_the_same_rows() {
    let mut table = MemoryHeroTable::new();

    seed(&mut table).await.unwrap();
    let first = table.list_all().await.unwrap();

    let summary = seed(&mut table).await.unwrap();
    let second = table.list_all().await.unwrap();

    assert_eq!(summary.deleted, 4);
    assert_eq!(first, second);
    assert_eq!(second, fixtures::heroes());
}

#[tokio::test]
async fn delete_runs_before_insert() {
    let mut table = FaultyTable::new(MemoryHeroTable::with_rows(stale_rows()));

    seed(&mut table).await.unwrap();

    assert_eq!(table.calls, vec![Call::DeleteAll, Call::BulkInsert]);
}

#[tokio::test]
async fn delete_failure_skips_insert_and_propagates() {
    let mut table = FaultyTable::new(MemoryHeroTable::with_rows(stale_rows()));
    table.fail_delete = true;

    let err = seed(&mut table).await.unwrap_err();

    assert!(matches!(
        err,
        SeedError::Store(StoreError::Database(sqlx::Error::PoolClosed))
    ));
    assert_eq!(table.calls, vec![Call::DeleteAll]);
    assert_eq!(table.inner.len(), 2);
}

#[tokio::test]
async fn insert_failure_leaves_table_empty_and_propagates() {
    let mut table = FaultyTable::new(MemoryHeroTable::with_rows(stale_rows()));
    table.fail_insert = true;

    let err = seed(&mut table).await.unwrap_err();

    assert!(matches!(
        err,
        SeedError::Store(StoreError::Database(sqlx::Error::PoolClosed))
    ));
    assert_eq!(table.calls, vec![Call::DeleteAll, Call::BulkInsert]);
    assert!(table.inner.is_empty());
}

#[tokio::test]
async fn custom_roster_is_written_verbatim() {
    let roster = vec![
        Hero::new(10, "Diana", "Prince", "Wonder Woman"),
        Hero::new(11, "Barry", "Allen", "Flash"),
    ];
    let seeder = Seeder::new().with_roster(roster.clone());
    let mut table = MemoryHeroTable::with_rows(fixtures::heroes());

    let summary = seeder.seed(&mut table).await.unwrap();

    assert_eq!(summary.deleted, 4);
    assert_eq!(summary.inserted, 2);
    assert_eq!(table.list_all().await.unwrap(), roster);
}

#[tokio::test]
async fn seeds_through_a_trait_object() {
    let mut table: Box<dyn HeroTable> = Box::new(MemoryHeroTable::new());

    let summary = seed(table.as_mut()).await.unwrap();

    assert_eq!(summary.inserted, 4);
    assert_eq!(table.list_all().await.unwrap().len(), 4);
}
