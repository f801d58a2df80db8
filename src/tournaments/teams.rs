use diesel::{
    backend::Backend,
    deserialize::{self, FromSql, FromSqlRow},
    expression::AsExpression,
    prelude::*,
    serialize::{self, Output, ToSql},
    sql_types::Text,
    sqlite::Sqlite,
};

use crate::schema::teams;

/// Teams from this prefecture are local; everyone else is invited.
pub const HOME_PREFECTURE: &str = "埼玉県";

#[derive(AsExpression, FromSqlRow, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[diesel(sql_type = Text)]
pub enum TeamType {
    Local,
    Invited,
}

impl TeamType {
    pub fn for_prefecture(prefecture: &str) -> Self {
        if prefecture == HOME_PREFECTURE {
            TeamType::Local
        } else {
            TeamType::Invited
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TeamType::Local => "local",
            TeamType::Invited => "invited",
        }
    }
}

impl std::fmt::Display for TeamType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ToSql<Text, Sqlite> for TeamType {
    fn to_sql<'b>(&'b self, out: &mut Output<'b, '_, Sqlite>) -> serialize::Result {
        out.set_value(self.as_str());
        Ok(serialize::IsNull::No)
    }
}

impl<DB> FromSql<Text, DB> for TeamType
where
    DB: Backend,
    String: FromSql<Text, DB>,
{
    fn from_sql(bytes: DB::RawValue<'_>) -> deserialize::Result<Self> {
        match String::from_sql(bytes)?.as_str() {
            "local" => Ok(TeamType::Local),
            "invited" => Ok(TeamType::Invited),
            other => Err(format!("unknown team type `{other}`").into()),
        }
    }
}

#[derive(Queryable, Selectable, Clone, Debug)]
#[diesel(table_name = teams)]
pub struct Team {
    pub id: String,
    pub tournament_id: String,
    pub group_id: String,
    /// 1-based position within the group.
    pub group_order: i32,
    pub name: String,
    pub short_name: String,
    pub prefecture: String,
    pub team_type: TeamType,
    pub is_host: bool,
}

impl Team {
    #[tracing::instrument(skip(conn))]
    pub fn fetch_all(
        tournament_id: &str,
        conn: &mut SqliteConnection,
    ) -> QueryResult<Vec<Team>> {
        let ret = teams::table
            .filter(teams::tournament_id.eq(tournament_id))
            .order_by((teams::group_id, teams::group_order))
            .select(Team::as_select())
            .load::<Team>(conn);

        tracing::trace!("ok? {}", ret.is_ok());

        ret
    }
}

#[derive(Insertable, Debug)]
#[diesel(table_name = teams)]
pub struct NewTeam<'a> {
    pub id: String,
    pub tournament_id: &'a str,
    pub group_id: String,
    pub group_order: i32,
    pub name: &'a str,
    pub short_name: &'a str,
    pub prefecture: &'a str,
    pub team_type: TeamType,
    pub is_host: bool,
}

#[cfg(test)]
#[test]
fn test_team_type_follows_prefecture() {
    assert_eq!(TeamType::for_prefecture("埼玉県"), TeamType::Local);
    assert_eq!(TeamType::for_prefecture("東京都"), TeamType::Invited);
    assert_eq!(TeamType::for_prefecture(""), TeamType::Invited);
}
