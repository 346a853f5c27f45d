use chrono::NaiveDate;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

#[derive(Debug, Getters, Serialize, Deserialize, PartialEq, Eq, Hash, Clone)]
pub struct Member {
    member_id: u32,
    club_id: u32,
    name: String,
    birthday: NaiveDate,
    start_date: NaiveDate,
    active_status: bool,
}

impl Member {
    pub fn new(
        member_id: u32,
        club_id: u32,
        name: String,
        birthday: NaiveDate,
        start_date: NaiveDate,
        active_status: bool,
    ) -> Self {
        Self {
            member_id,
            club_id,
            name,
            birthday,
            start_date,
            active_status,
        }
    }
}

#[cfg(any(test, feature = "test"))]
pub mod tests {
    use super::*;

    pub fn member(member_id: u32, club_id: u32) -> Member {
        Member::new(
            member_id,
            club_id,
            format!("Member {member_id}"),
            NaiveDate::from_ymd_opt(1990, 4, 12).unwrap(),
            NaiveDate::from_ymd_opt(2023, 1, 9).unwrap(),
            true,
        )
    }

    #[test]
    fn should_deserialize_member() {
        let json = r#"{
            "member_id": 1,
            "club_id": 4,
            "name": "Jon Doe",
            "birthday": "1980-02-01",
            "start_date": "2021-06-15",
            "active_status": false
        }"#;

        let member: Member = serde_json::from_str(json).unwrap();

        assert_eq!(
            Member::new(
                1,
                4,
                "Jon Doe".to_owned(),
                NaiveDate::from_ymd_opt(1980, 2, 1).unwrap(),
                NaiveDate::from_ymd_opt(2021, 6, 15).unwrap(),
                false
            ),
            member
        );
    }
}
