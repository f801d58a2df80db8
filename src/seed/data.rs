//! The records a fresh installation starts with.

use chrono::NaiveDate;

use crate::{seed::SeedTeam, tournaments::NewTournament};

pub const TOURNAMENT_NAME: &str = "浦和カップ";
const TOURNAMENT_YEAR: i32 = 2025;
const TOURNAMENT_EDITION: i32 = 1;
const START_DATE: NaiveDate =
    NaiveDate::from_ymd_opt(2025, 3, 28).expect("valid start date");
const END_DATE: NaiveDate =
    NaiveDate::from_ymd_opt(2025, 3, 30).expect("valid end date");
const MATCH_DURATION_MINUTES: i32 = 25;
const HALF_COUNT: i32 = 2;

/// `(name, short_name)`
pub const VENUES: [(&str, &str); 4] = [
    ("浦和駒場スタジアム", "駒場"),
    ("さいたま市浦和駒場第2グラウンド", "駒場第2"),
    ("浦和南高校", "浦和南"),
    ("浦和東高校", "浦和東"),
];

/// `(group, name, short_name, prefecture, is_host)`, in group order.
const TEAMS: [(&str, &str, &str, &str, bool); 16] = [
    ("A", "浦和南高校", "浦和南", "埼玉県", true),
    ("A", "前橋育英高校", "前橋育英", "群馬県", false),
    ("A", "國學院久我山高校", "國學院久我山", "東京都", false),
    ("A", "市立浦和高校", "市浦和", "埼玉県", false),
    ("B", "浦和東高校", "浦和東", "埼玉県", true),
    ("B", "青森山田高校", "青森山田", "青森県", false),
    ("B", "流通経済大柏高校", "流経柏", "千葉県", false),
    ("B", "川越南高校", "川越南", "埼玉県", false),
    ("C", "浦和西高校", "浦和西", "埼玉県", true),
    ("C", "静岡学園高校", "静岡学園", "静岡県", false),
    ("C", "昌平高校", "昌平", "埼玉県", false),
    ("C", "西武台高校", "西武台", "埼玉県", false),
    ("D", "浦和高校", "浦和", "埼玉県", true),
    ("D", "帝京高校", "帝京", "東京都", false),
    ("D", "正智深谷高校", "正智深谷", "埼玉県", false),
    ("D", "武南高校", "武南", "埼玉県", false),
];

pub fn tournament() -> NewTournament<'static> {
    NewTournament::new(
        TOURNAMENT_NAME,
        TOURNAMENT_YEAR,
        TOURNAMENT_EDITION,
        START_DATE,
        END_DATE,
        MATCH_DURATION_MINUTES,
        HALF_COUNT,
    )
}

pub fn default_roster() -> Vec<SeedTeam> {
    TEAMS
        .iter()
        .map(|(group, name, short_name, prefecture, is_host)| SeedTeam {
            group: group.to_string(),
            name: name.to_string(),
            short_name: short_name.to_string(),
            prefecture: prefecture.to_string(),
            is_host: *is_host,
        })
        .collect()
}
