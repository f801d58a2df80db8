use diesel_migrations::{EmbeddedMigrations, embed_migrations};

pub mod auth;
pub mod config;
pub mod error;
pub mod schema;
pub mod seed;
pub mod tournaments;
pub mod validation;

#[cfg(test)]
mod test;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!();
