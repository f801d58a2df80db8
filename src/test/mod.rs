use diesel::SqliteConnection;

use crate::config;


/// A fresh in-memory database with every table created.
pub fn memory_conn() -> SqliteConnection {
    let mut conn = config::establish(":memory:").unwrap();
    config::run_migrations(&mut conn).unwrap();
    conn
}
