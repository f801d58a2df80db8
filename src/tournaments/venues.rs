use diesel::prelude::*;
use uuid::Uuid;

use crate::schema::venues;

#[derive(Queryable, Selectable, Clone, Debug)]
#[diesel(table_name = venues)]
pub struct Venue {
    pub id: String,
    pub tournament_id: String,
    pub name: String,
    pub short_name: String,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = venues)]
pub struct NewVenue<'a> {
    pub id: String,
    pub tournament_id: &'a str,
    pub name: &'a str,
    pub short_name: &'a str,
}

impl<'a> NewVenue<'a> {
    pub fn new(tournament_id: &'a str, name: &'a str, short_name: &'a str) -> Self {
        NewVenue {
            id: Uuid::now_v7().to_string(),
            tournament_id,
            name,
            short_name,
        }
    }
}
