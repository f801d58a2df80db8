use itertools::Itertools;

use crate::{seed::SeedTeam, tournaments::groups::GROUP_LETTERS};

pub const TEAMS_PER_GROUP: usize = 4;

/// Every group must hold exactly four teams, one of which hosts.
pub fn validate_roster(roster: &[SeedTeam]) -> Result<(), String> {
    if let Some(team) = roster
        .iter()
        .find(|team| !GROUP_LETTERS.contains(&team.group.as_str()))
    {
        return Err(format!(
            "team `{}` is in unknown group `{}`",
            team.name, team.group
        ));
    }

    if let Some(team) = roster.iter().find(|team| team.name.trim().is_empty()) {
        return Err(format!("a team in group {} has no name", team.group));
    }

    let by_group = roster
        .iter()
        .map(|team| (team.group.as_str(), team))
        .into_group_map();

    for letter in GROUP_LETTERS {
        let teams = by_group.get(letter).map(Vec::as_slice).unwrap_or(&[]);

        if teams.len() != TEAMS_PER_GROUP {
            return Err(format!(
                "group {letter} has {} teams, expected {TEAMS_PER_GROUP}",
                teams.len()
            ));
        }

        let hosts = teams.iter().filter(|team| team.is_host).count();
        if hosts != 1 {
            return Err(format!(
                "group {letter} has {hosts} host teams, expected 1"
            ));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::data::default_roster;

    #[test]
    fn default_roster_is_valid() {
        assert!(validate_roster(&default_roster()).is_ok());
    }

    #[test]
    fn rejects_group_without_host() {
        let mut roster = default_roster();
        roster[0].is_host = false;
        assert_eq!(
            validate_roster(&roster),
            Err("group A has 0 host teams, expected 1".to_string())
        );
    }

    #[test]
    fn rejects_group_with_two_hosts() {
        let mut roster = default_roster();
        roster[5].is_host = true;
        assert!(validate_roster(&roster).unwrap_err().contains("group B"));
    }

    #[test]
    fn rejects_short_group() {
        let mut roster = default_roster();
        roster.pop();
        assert_eq!(
            validate_roster(&roster),
            Err("group D has 3 teams, expected 4".to_string())
        );
    }

    #[test]
    fn rejects_unknown_group() {
        let mut roster = default_roster();
        roster[3].group = "E".to_string();
        assert!(validate_roster(&roster).unwrap_err().contains("unknown group `E`"));
    }
}
