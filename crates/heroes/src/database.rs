//! Table operations for `Heroes`.
//!
//! [`HeroTable`] is the handle the seed routine works through. Every method
//! takes `&mut self`, so a sequence of calls runs on the same connection.

use async_trait::async_trait;
use sqlx::{PgConnection, Postgres, QueryBuilder};
use tracing::debug;

use crate::errors::StoreError;
use crate::models::Hero;

pub const HEROES_TABLE: &str = "Heroes";

// Identifiers are mixed case, so they must stay quoted in PostgreSQL.
const DELETE_ALL_SQL: &str = r#"DELETE FROM "Heroes""#;
const INSERT_SQL: &str = r#"INSERT INTO "Heroes" ("id", "firstName", "lastName", "heroName") "#;
const SELECT_ALL_SQL: &str = r#"
    SELECT "id", "firstName", "lastName", "heroName"
    FROM "Heroes"
    ORDER BY "id"
"#;

/// A handle bound to the `Heroes` table.
#[async_trait]
pub trait HeroTable: Send {
    /// Removes every row. Returns the number of rows deleted.
    async fn delete_all(&mut self) -> Result<u64, StoreError>;

    /// Inserts all records in a single statement. Returns the number of rows inserted.
    async fn bulk_insert(&mut self, heroes: &[Hero]) -> Result<u64, StoreError>;

    /// Returns every row ordered by id.
    async fn list_all(&mut self) -> Result<Vec<Hero>, StoreError>;
}

#[async_trait]
impl HeroTable for PgConnection {
    async fn delete_all(&mut self) -> Result<u64, StoreError> {
        let result = sqlx::query(DELETE_ALL_SQL).execute(&mut *self).await?;
        debug!("Deleted {} rows from {HEROES_TABLE}", result.rows_affected());
        Ok(result.rows_affected())
    }

    async fn bulk_insert(&mut self, heroes: &[Hero]) -> Result<u64, StoreError> {
        if heroes.is_empty() {
            return Ok(0);
        }

        let mut qb = insert_query(heroes);
        let result = qb.build().execute(&mut *self).await?;
        debug!("Inserted {} rows into {HEROES_TABLE}", result.rows_affected());
        Ok(result.rows_affected())
    }

    async fn list_all(&mut self) -> Result<Vec<Hero>, StoreError> {
        let heroes = sqlx::query_as::<_, Hero>(SELECT_ALL_SQL)
            .fetch_all(&mut *self)
            .await?;

        Ok(heroes)
    }
}

fn insert_query(heroes: &[Hero]) -> QueryBuilder<'static, Postgres> {
    let mut qb = QueryBuilder::new(INSERT_SQL);
    qb.push_values(heroes, |mut row, hero| {
        row.push_bind(hero.id)
            .push_bind(hero.first_name.clone())
            .push_bind(hero.last_name.clone())
            .push_bind(hero.hero_name.clone());
    });
    qb
}
