pub mod db;
pub mod error;
pub mod store;
pub mod types;

pub use db::PgOrderStore;
pub use error::{DbError, DbResult};
pub use store::{MemoryOrderStore, OrderStore};
pub use types::*;
