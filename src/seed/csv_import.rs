use std::{fs::File, io::Read, path::Path};

use serde::{
    Deserialize, Deserializer,
    de::{self, Unexpected},
};

use crate::{error::SeedResult, seed::SeedTeam};

#[derive(Deserialize, Debug, Clone)]
pub struct TeamRow {
    pub group: String,
    pub name: String,
    /// If not supplied, the full name is used.
    pub short_name: Option<String>,
    pub prefecture: String,
    #[serde(deserialize_with = "bool_from_str", default = "not_true")]
    pub is_host: bool,
}

impl From<TeamRow> for SeedTeam {
    fn from(row: TeamRow) -> Self {
        let short_name = row
            .short_name
            .filter(|short_name| !short_name.trim().is_empty())
            .unwrap_or_else(|| row.name.clone());

        SeedTeam {
            group: row.group.trim().to_uppercase(),
            name: row.name,
            short_name,
            prefecture: row.prefecture,
            is_host: row.is_host,
        }
    }
}

fn not_true() -> bool {
    false
}

fn bool_from_str<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    match String::deserialize(deserializer)?.to_lowercase().trim() {
        "t" | "true" | "1" | "on" | "y" | "yes" => Ok(true),
        "f" | "false" | "0" | "off" | "n" | "no" | "" => Ok(false),
        other => Err(de::Error::invalid_value(
            Unexpected::Str(other),
            &"Must be truthy (t, true, 1, on, y, yes) or falsey (f, false, 0, off, n, no)",
        )),
    }
}

/// Reads a roster with the header `group,name,short_name,prefecture,is_host`.
/// Rows keep their file order, which later determines `group_order`.
pub fn read_roster(path: &Path) -> SeedResult<Vec<SeedTeam>> {
    tracing::info!("reading team roster from {}", path.display());
    read_roster_from(File::open(path)?)
}

pub fn read_roster_from(reader: impl Read) -> SeedResult<Vec<SeedTeam>> {
    let mut rows = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let headers = rows.headers()?.clone();

    let mut roster = Vec::new();
    for result in rows.records() {
        let record = result?;
        let row: TeamRow = record.deserialize(Some(&headers))?;
        roster.push(SeedTeam::from(row));
    }

    Ok(roster)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SeedError;

    #[test]
    fn reads_rows_in_file_order() {
        let roster = read_roster_from(
            "group,name,short_name,prefecture,is_host\n\
             a,浦和南高校,浦和南,埼玉県,yes\n\
             A,前橋育英高校,,群馬県,\n"
                .as_bytes(),
        )
        .unwrap();

        assert_eq!(roster.len(), 2);
        assert_eq!(roster[0].group, "A");
        assert!(roster[0].is_host);
        assert_eq!(roster[1].name, "前橋育英高校");
        assert_eq!(roster[1].short_name, "前橋育英高校");
        assert!(!roster[1].is_host);
    }

    #[test]
    fn accepts_all_boolean_spellings() {
        for (text, expected) in [
            ("t", true),
            ("TRUE", true),
            ("1", true),
            ("on", true),
            ("Y", true),
            ("f", false),
            ("no", false),
            ("0", false),
            ("off", false),
        ] {
            let roster = read_roster_from(
                format!("group,name,short_name,prefecture,is_host\nA,x,x,埼玉県,{text}\n")
                    .as_bytes(),
            )
            .unwrap();
            assert_eq!(roster[0].is_host, expected, "is_host = {text}");
        }
    }

    #[test]
    fn rejects_unknown_boolean() {
        let ret = read_roster_from(
            "group,name,short_name,prefecture,is_host\nA,x,x,埼玉県,maybe\n"
                .as_bytes(),
        );
        assert!(matches!(ret, Err(SeedError::Csv(_))));
    }

    #[test]
    fn missing_file_is_io_error() {
        let ret = read_roster(Path::new("/nonexistent/teams.csv"));
        assert!(matches!(ret, Err(SeedError::Io(_))));
    }
}
