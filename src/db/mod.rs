pub mod database;
pub mod error;
#[cfg(test)]
pub mod fake;
pub mod models;
pub mod postgres;

#[allow(unused_imports)]
pub use database::Database;
#[allow(unused_imports)]
pub use error::DatabaseError;
#[allow(unused_imports)]
pub use models::{NewImage, SyncStatus};
pub use postgres::PostgresDatabase;
