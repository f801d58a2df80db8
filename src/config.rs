use std::path::PathBuf;

use diesel::{Connection, RunQueryDsl, SqliteConnection};
use diesel_migrations::MigrationHarness;

use crate::{
    MIGRATIONS,
    error::{SeedError, SeedResult},
};

pub const DATABASE_URL_VAR: &str = "DATABASE_URL";
pub const ADMIN_PASSWORD_VAR: &str = "ADMIN_PASSWORD";
pub const DEFAULT_ADMIN_PASSWORD: &str = "admin123";

#[derive(Debug, Clone)]
pub struct SeedConfig {
    pub database_url: String,
    pub admin_password: String,
    /// Read the team roster from this CSV file instead of using the
    /// built-in one.
    pub teams_csv: Option<PathBuf>,
}

impl SeedConfig {
    /// Builds the configuration from command line values, falling back to
    /// the process environment.
    pub fn from_env(
        database_url: Option<String>,
        teams_csv: Option<PathBuf>,
    ) -> SeedResult<Self> {
        Self::resolve(
            database_url,
            teams_csv,
            std::env::var(DATABASE_URL_VAR).ok(),
            std::env::var(ADMIN_PASSWORD_VAR).ok(),
        )
    }

    pub fn resolve(
        database_url: Option<String>,
        teams_csv: Option<PathBuf>,
        database_url_env: Option<String>,
        admin_password_env: Option<String>,
    ) -> SeedResult<Self> {
        let database_url = database_url
            .or(database_url_env)
            .filter(|url| !url.trim().is_empty())
            .ok_or(SeedError::MissingDatabaseUrl)?;

        Ok(SeedConfig {
            database_url,
            admin_password: admin_password(admin_password_env),
            teams_csv,
        })
    }
}

/// Only an unset `ADMIN_PASSWORD` falls back to the default; a set but empty
/// one is used as is.
pub fn admin_password(from_env: Option<String>) -> String {
    from_env.unwrap_or_else(|| DEFAULT_ADMIN_PASSWORD.to_string())
}

pub fn establish(database_url: &str) -> SeedResult<SqliteConnection> {
    let mut conn = SqliteConnection::establish(database_url)?;
    diesel::sql_query("PRAGMA foreign_keys = ON").execute(&mut conn)?;
    Ok(conn)
}

/// Creates any tables which do not exist yet.
#[tracing::instrument(skip_all)]
pub fn run_migrations(conn: &mut SqliteConnection) -> SeedResult<()> {
    let applied = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(|e| SeedError::Migration(e.to_string()))?;

    tracing::debug!("applied {} pending migration(s)", applied.len());

    Ok(())
}
