use crate::timestamp_format;
use chrono::NaiveDateTime;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

#[derive(Debug, Getters, Serialize, Deserialize, PartialEq, Eq, Hash, Clone)]
pub struct CheckIn {
    checkin_id: u32,
    member_id: u32,
    club_id: u32,
    #[serde(deserialize_with = "timestamp_format::deserialize")]
    timestamp: NaiveDateTime,
}

impl CheckIn {
    pub fn new(checkin_id: u32, member_id: u32, club_id: u32, timestamp: NaiveDateTime) -> Self {
        Self {
            checkin_id,
            member_id,
            club_id,
            timestamp,
        }
    }
}

#[cfg(any(test, feature = "test"))]
pub mod tests {
    use super::*;
    use chrono::NaiveDate;

    /// Build a check-in happening at noon on the given day.
    pub fn checkin(checkin_id: u32, member_id: u32, club_id: u32, (y, m, d): (i32, u32, u32)) -> CheckIn {
        let timestamp = NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap();
        CheckIn::new(checkin_id, member_id, club_id, timestamp)
    }

    #[test]
    fn should_deserialize_checkin() {
        let json = r#"{"checkin_id": 7, "member_id": 2, "club_id": 1, "timestamp": "2024-01-05T12:00:00"}"#;

        let result: CheckIn = serde_json::from_str(json).unwrap();

        assert_eq!(checkin(7, 2, 1, (2024, 1, 5)), result);
    }

    #[test]
    fn should_not_deserialize_checkin_with_invalid_timestamp() {
        let json = r#"{"checkin_id": 7, "member_id": 2, "club_id": 1, "timestamp": "last monday"}"#;

        let result = serde_json::from_str::<CheckIn>(json);

        assert!(result.is_err());
    }
}
