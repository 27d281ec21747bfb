use diesel::PgConnection;
use diesel_migrations::{ embed_migrations, EmbeddedMigrations, MigrationHarness };
use tracing::info;

use crate::config::{ ConfigError, PgPool };

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Applies every pending migration on a single pooled connection.
///
/// Runs once at startup, before the listener is bound. Any error here is
/// fatal to the caller: serving requests against a stale schema is never
/// attempted.
pub fn run_migrations(pool: &PgPool) -> Result<Vec<String>, ConfigError> {
    let mut conn = pool.get()?;
    let applied = apply_pending(&mut conn)?;

    if applied.is_empty() {
        info!("Database schema is up to date");
    } else {
        for version in &applied {
            info!(%version, "Applied migration");
        }
    }

    Ok(applied)
}

fn apply_pending(conn: &mut PgConnection) -> Result<Vec<String>, ConfigError> {
    let versions = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(|e| ConfigError::Migration(e.to_string()))?;

    Ok(versions.into_iter().map(|version| version.to_string()).collect())
}
