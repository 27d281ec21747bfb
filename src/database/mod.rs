pub mod migrations;
pub mod operations;

pub use migrations::run_migrations;
