use argon2::password_hash::SaltString;
use argon2::password_hash::rand_core::OsRng;
use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier};
use chrono::NaiveDateTime;
use diesel::{
    backend::Backend,
    deserialize::{self, FromSql, FromSqlRow},
    expression::AsExpression,
    prelude::*,
    serialize::{self, Output, ToSql},
    sql_types::Text,
    sqlite::Sqlite,
};
use uuid::Uuid;

use crate::{error::SeedResult, schema::users};

pub const ADMIN_USERNAME: &str = "admin";
pub const ADMIN_DISPLAY_NAME: &str = "管理者";

#[derive(AsExpression, FromSqlRow, Debug, Clone, Copy, PartialEq, Eq)]
#[diesel(sql_type = Text)]
pub enum UserRole {
    Admin,
    VenueStaff,
    Viewer,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Admin => "admin",
            UserRole::VenueStaff => "venue_staff",
            UserRole::Viewer => "viewer",
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ToSql<Text, Sqlite> for UserRole {
    fn to_sql<'b>(&'b self, out: &mut Output<'b, '_, Sqlite>) -> serialize::Result {
        out.set_value(self.as_str());
        Ok(serialize::IsNull::No)
    }
}

impl<DB> FromSql<Text, DB> for UserRole
where
    DB: Backend,
    String: FromSql<Text, DB>,
{
    fn from_sql(bytes: DB::RawValue<'_>) -> deserialize::Result<Self> {
        match String::from_sql(bytes)?.as_str() {
            "admin" => Ok(UserRole::Admin),
            "venue_staff" => Ok(UserRole::VenueStaff),
            "viewer" => Ok(UserRole::Viewer),
            other => Err(format!("unknown user role `{other}`").into()),
        }
    }
}

#[derive(Debug, Queryable, Selectable, Clone)]
#[diesel(table_name = users)]
pub struct User {
    pub id: String,
    pub username: String,
    pub password_hash: String,
    pub display_name: String,
    pub role: UserRole,
    pub is_active: bool,
    pub venue_id: Option<String>,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = users)]
pub struct NewUser<'a> {
    pub id: String,
    pub username: &'a str,
    pub password_hash: String,
    pub display_name: &'a str,
    pub role: UserRole,
    pub is_active: bool,
    pub venue_id: Option<&'a str>,
    pub created_at: NaiveDateTime,
}

impl<'a> NewUser<'a> {
    /// An active administrator account. The password is hashed immediately;
    /// only the hash is kept.
    pub fn admin(
        username: &'a str,
        display_name: &'a str,
        password: &str,
    ) -> SeedResult<Self> {
        Ok(NewUser {
            id: Uuid::now_v7().to_string(),
            username,
            password_hash: hash_password(password)?,
            display_name,
            role: UserRole::Admin,
            is_active: true,
            venue_id: None,
            created_at: chrono::Utc::now().naive_utc(),
        })
    }

    pub fn insert(&self, conn: &mut SqliteConnection) -> QueryResult<usize> {
        diesel::insert_into(users::table).values(self).execute(conn)
    }
}

/// Hashes `password` with Argon2 and a fresh random salt, returning the PHC
/// string.
pub fn hash_password(password: &str) -> SeedResult<String> {
    let salt = SaltString::generate(&mut OsRng);

    let argon2 = Argon2::default();

    let password_hash = argon2
        .hash_password(password.as_bytes(), &salt)?
        .to_string();

    Ok(password_hash)
}

/// Returns false for a wrong password and for a hash that cannot be parsed.
pub fn verify_password(password: &str, password_hash: &str) -> bool {
    match PasswordHash::new(password_hash) {
        Ok(parsed_hash) => Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok(),
        Err(_) => false,
    }
}

#[cfg(test)]
#[test]
fn test_hash_verifies_only_hashed_password() {
    let hash = hash_password("secret").unwrap();
    assert_ne!(hash, "secret");
    assert!(verify_password("secret", &hash));
    assert!(!verify_password("admin123", &hash));
}

#[cfg(test)]
#[test]
fn test_hashes_are_salted() {
    assert_ne!(
        hash_password("admin123").unwrap(),
        hash_password("admin123").unwrap()
    );
}

#[cfg(test)]
#[test]
fn test_garbage_hash_does_not_verify() {
    assert!(!verify_password("admin123", "not a phc string"));
}
