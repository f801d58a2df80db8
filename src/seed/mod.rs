//! Populates an empty database with the initial tournament data.
//!
//! Seeding is all-or-nothing: every row is written inside one transaction,
//! and if a tournament already exists nothing is written at all.

use std::collections::HashMap;

use diesel::prelude::*;

use crate::{
    auth::{ADMIN_DISPLAY_NAME, ADMIN_USERNAME, NewUser},
    config::{self, SeedConfig},
    error::{SeedError, SeedResult},
    schema::{groups, teams, venues},
    tournaments::{
        Tournament,
        groups::{GROUP_LETTERS, NewGroup, group_id},
        teams::{NewTeam, TeamType},
        venues::NewVenue,
    },
    validation::validate_roster,
};

pub mod csv_import;
pub mod data;

/// One entry of the team roster, before it is attached to a tournament.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedTeam {
    /// Group letter, `A` to `D`.
    pub group: String,
    pub name: String,
    pub short_name: String,
    pub prefecture: String,
    pub is_host: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedSummary {
    pub tournament_id: String,
    pub tournament_name: String,
    pub admin_username: String,
    pub users: usize,
    pub groups: usize,
    pub venues: usize,
    pub teams: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeedOutcome {
    Seeded(SeedSummary),
    /// A tournament already existed, so nothing was written.
    Skipped,
}

/// Connects, creates missing tables and seeds. The connection is closed when
/// this returns, whatever the outcome.
pub fn run(config: &SeedConfig) -> SeedResult<SeedOutcome> {
    let roster = match &config.teams_csv {
        Some(path) => csv_import::read_roster(path)?,
        None => data::default_roster(),
    };

    let mut conn = config::establish(&config.database_url)?;
    config::run_migrations(&mut conn)?;

    seed_database(&mut conn, &config.admin_password, &roster)
}

#[tracing::instrument(skip_all)]
pub fn seed_database(
    conn: &mut SqliteConnection,
    admin_password: &str,
    roster: &[SeedTeam],
) -> SeedResult<SeedOutcome> {
    let ret = conn.transaction::<_, SeedError, _>(|conn| {
        if Tournament::any_exist(conn)? {
            tracing::info!("the database already contains a tournament, skipping");
            return Ok(SeedOutcome::Skipped);
        }

        validate_roster(roster).map_err(SeedError::InvalidRoster)?;

        tracing::info!("seeding initial data");

        let admin =
            NewUser::admin(ADMIN_USERNAME, ADMIN_DISPLAY_NAME, admin_password)?;
        let users = admin.insert(conn)?;
        tracing::info!("created admin user `{}`", admin.username);

        let tournament = data::tournament();
        tournament.insert(conn)?;
        tracing::info!("created tournament (id: {})", tournament.id);

        let new_groups = GROUP_LETTERS
            .iter()
            .map(|letter| NewGroup::new(&tournament.id, letter))
            .collect::<Vec<_>>();
        let groups = diesel::insert_into(groups::table)
            .values(&new_groups)
            .execute(conn)?;
        tracing::info!("created groups {}", GROUP_LETTERS.join(", "));

        let new_venues = data::VENUES
            .iter()
            .map(|(name, short_name)| {
                NewVenue::new(&tournament.id, name, short_name)
            })
            .collect::<Vec<_>>();
        let venues = diesel::insert_into(venues::table)
            .values(&new_venues)
            .execute(conn)?;
        tracing::info!("created {venues} venues");

        let new_teams = new_teams(&tournament.id, roster);
        let teams = diesel::insert_into(teams::table)
            .values(&new_teams)
            .execute(conn)?;
        tracing::info!("created {teams} teams");

        Ok(SeedOutcome::Seeded(SeedSummary {
            tournament_id: tournament.id.clone(),
            tournament_name: tournament.name.to_string(),
            admin_username: admin.username.to_string(),
            users,
            groups,
            venues,
            teams,
        }))
    });

    if let Err(e) = &ret {
        tracing::error!("seeding failed, all changes were rolled back: {e}");
    }

    ret
}

/// Attaches the roster to a tournament. A team's `group_order` is its
/// 1-based position among the teams of its group, in roster order.
fn new_teams<'a>(tournament_id: &'a str, roster: &'a [SeedTeam]) -> Vec<NewTeam<'a>> {
    let mut next_order: HashMap<&str, i32> = HashMap::new();

    roster
        .iter()
        .map(|team| {
            let order = next_order.entry(team.group.as_str()).or_insert(0);
            *order += 1;

            NewTeam {
                id: uuid::Uuid::now_v7().to_string(),
                tournament_id,
                group_id: group_id(tournament_id, &team.group),
                group_order: *order,
                name: &team.name,
                short_name: &team.short_name,
                prefecture: &team.prefecture,
                team_type: TeamType::for_prefecture(&team.prefecture),
                is_host: team.is_host,
            }
        })
        .collect()
}

#[cfg(test)]
#[test]
fn test_group_order_cycles_within_each_group() {
    let roster = data::default_roster();
    let teams = new_teams("t", &roster);

    let orders = teams.iter().map(|t| t.group_order).collect::<Vec<_>>();
    assert_eq!(orders, [1, 2, 3, 4].repeat(4));
    assert_eq!(teams[4].group_id, "t_B");
}
