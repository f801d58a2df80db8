use diesel::prelude::*;

use crate::schema::groups;

pub const GROUP_LETTERS: [&str; 4] = ["A", "B", "C", "D"];

#[derive(Queryable, Selectable, Clone, Debug)]
#[diesel(table_name = groups)]
pub struct Group {
    pub id: String,
    pub tournament_id: String,
    pub letter: String,
    pub name: String,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = groups)]
pub struct NewGroup<'a> {
    pub id: String,
    pub tournament_id: &'a str,
    pub letter: &'a str,
    pub name: String,
}

impl<'a> NewGroup<'a> {
    pub fn new(tournament_id: &'a str, letter: &'a str) -> Self {
        NewGroup {
            id: group_id(tournament_id, letter),
            tournament_id,
            letter,
            name: format!("グループ{letter}"),
        }
    }
}

/// Groups are keyed by their tournament and letter, e.g. `<tid>_A`.
pub fn group_id(tournament_id: &str, letter: &str) -> String {
    format!("{tournament_id}_{letter}")
}

#[cfg(test)]
#[test]
fn test_group_id_is_composite() {
    let group = NewGroup::new("t1", "C");
    assert_eq!(group.id, "t1_C");
    assert_eq!(group.name, "グループC");
}
