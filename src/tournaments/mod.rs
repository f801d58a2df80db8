use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;
use uuid::Uuid;

use crate::schema::tournaments;

pub mod groups;
pub mod teams;
pub mod venues;

#[derive(Queryable, Selectable, Clone, Debug)]
#[diesel(table_name = tournaments)]
pub struct Tournament {
    pub id: String,
    pub name: String,
    pub year: i32,
    pub edition: i32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Length of a match, in minutes.
    pub match_duration: i32,
    pub half_count: i32,
    pub created_at: NaiveDateTime,
}

impl Tournament {
    /// Whether any tournament has been created yet.
    pub fn any_exist(conn: &mut SqliteConnection) -> QueryResult<bool> {
        diesel::select(diesel::dsl::exists(
            tournaments::table.select(tournaments::id),
        ))
        .get_result(conn)
    }
}

#[derive(Insertable, Debug)]
#[diesel(table_name = tournaments)]
pub struct NewTournament<'a> {
    pub id: String,
    pub name: &'a str,
    pub year: i32,
    pub edition: i32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub match_duration: i32,
    pub half_count: i32,
    pub created_at: NaiveDateTime,
}

impl<'a> NewTournament<'a> {
    /// Allocates the id up front so that child rows can reference it before
    /// anything has been written.
    pub fn new(
        name: &'a str,
        year: i32,
        edition: i32,
        start_date: NaiveDate,
        end_date: NaiveDate,
        match_duration: i32,
        half_count: i32,
    ) -> Self {
        NewTournament {
            id: Uuid::now_v7().to_string(),
            name,
            year,
            edition,
            start_date,
            end_date,
            match_duration,
            half_count,
            created_at: chrono::Utc::now().naive_utc(),
        }
    }

    pub fn insert(&self, conn: &mut SqliteConnection) -> QueryResult<usize> {
        diesel::insert_into(tournaments::table)
            .values(self)
            .execute(conn)
    }
}
