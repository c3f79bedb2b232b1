use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row of the `Heroes` table.
///
/// Columns are camelCase in the store (`firstName`, `lastName`, `heroName`),
/// and the serde form uses the same names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
#[sqlx(rename_all = "camelCase")]
pub struct Hero {
    /// Caller-assigned primary key; never generated by the store.
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    /// Public alias.
    pub hero_name: String,
}

impl Hero {
    pub fn new(
        id: i32,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        hero_name: impl Into<String>,
    ) -> Self {
        Self {
            id,
            first_name: first_name.into(),
            last_name: last_name.into(),
            hero_name: hero_name.into(),
        }
    }
}
