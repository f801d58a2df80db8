//! Seeds the database with the initial tournament, groups, venues and teams.

use std::{path::PathBuf, process::ExitCode};

use clap::Parser;
use tracing_subscriber::EnvFilter;
use urawacup::{
    config::SeedConfig,
    error::SeedError,
    seed::{self, SeedOutcome, SeedSummary},
};

#[derive(Parser)]
pub struct Seed {
    /// Database to seed. Defaults to `DATABASE_URL`.
    database_url: Option<String>,
    /// CSV file (`group,name,short_name,prefecture,is_host`) to take the
    /// teams from instead of the built-in roster.
    #[clap(long)]
    teams: Option<PathBuf>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    exit_code(run(Seed::parse()))
}

/// A skipped run still exits successfully.
fn exit_code(result: Result<SeedOutcome, SeedError>) -> ExitCode {
    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            println!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Seed) -> Result<SeedOutcome, SeedError> {
    let config = SeedConfig::from_env(args.database_url, args.teams)?;

    println!("location = {}", config.database_url);

    let outcome = seed::run(&config)?;
    match &outcome {
        SeedOutcome::Skipped => {
            println!("The database already contains data, skipping.");
        }
        SeedOutcome::Seeded(summary) => {
            print_summary(summary, &config.admin_password)
        }
    }

    Ok(outcome)
}

fn print_summary(summary: &SeedSummary, admin_password: &str) {
    println!();
    println!("Initial data loaded!");
    println!(
        "  tournament: {} (id: {})",
        summary.tournament_name, summary.tournament_id
    );
    println!(
        "  {} user(s), {} groups, {} venues, {} teams",
        summary.users, summary.groups, summary.venues, summary.teams
    );
    println!();
    println!("Login details:");
    println!("  username: {}", summary.admin_username);
    println!("  password: {admin_password}");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(database_url: String, teams: Option<PathBuf>) -> Seed {
        Seed {
            database_url: Some(database_url),
            teams,
        }
    }

    #[test]
    fn seeds_then_skips_with_success() {
        let dir = tempfile::tempdir().unwrap();
        let db = dir.path().join("urawacup.db").display().to_string();

        let first = run(args(db.clone(), None));
        assert!(matches!(first, Ok(SeedOutcome::Seeded(_))), "{first:?}");
        assert_eq!(exit_code(first), ExitCode::SUCCESS);

        let second = run(args(db, None));
        assert!(matches!(second, Ok(SeedOutcome::Skipped)), "{second:?}");
        assert_eq!(exit_code(second), ExitCode::SUCCESS);
    }

    #[test]
    fn failure_exits_non_zero() {
        let dir = tempfile::tempdir().unwrap();
        let db = dir.path().join("urawacup.db").display().to_string();

        let ret = run(args(db, Some(dir.path().join("missing.csv"))));
        assert!(matches!(ret, Err(SeedError::Io(_))), "{ret:?}");
        assert_eq!(exit_code(ret), ExitCode::FAILURE);
    }
}
