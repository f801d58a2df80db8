use thiserror::Error;

pub type SeedResult<T> = Result<T, SeedError>;

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("please either set `DATABASE_URL` or pass the database url")]
    MissingDatabaseUrl,
    #[error("failed to connect to the database: {0}")]
    Connection(#[from] diesel::ConnectionError),
    #[error("database error: {0}")]
    Database(#[from] diesel::result::Error),
    #[error("failed to run migrations: {0}")]
    Migration(String),
    #[error("failed to hash password: {0}")]
    PasswordHash(#[from] argon2::password_hash::Error),
    #[error("failed to read team roster: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed team roster: {0}")]
    Csv(#[from] csv::Error),
    #[error("invalid team roster: {0}")]
    InvalidRoster(String),
}
