pub mod database;
pub mod errors;
pub mod memory;
pub mod models;

pub use database::{HEROES_TABLE, HeroTable};
pub use errors::StoreError;
pub use memory::MemoryHeroTable;
pub use models::Hero;
