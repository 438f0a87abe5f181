mod db;
mod migrations;
mod reads;

pub use db::Database;
pub use migrations::{Migration, MIGRATIONS};
