use crate::timestamp_format;
use chrono::NaiveDateTime;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// One occurrence of a member performing an exercise in a club.
#[derive(Debug, Getters, Serialize, Deserialize, PartialEq, Eq, Hash, Clone)]
pub struct ExerciseInstance {
    instance_id: u32,
    member_id: u32,
    exercise_id: String,
    club_id: u32,
    #[serde(deserialize_with = "timestamp_format::deserialize")]
    timestamp: NaiveDateTime,
}

impl ExerciseInstance {
    pub fn new(
        instance_id: u32,
        member_id: u32,
        exercise_id: String,
        club_id: u32,
        timestamp: NaiveDateTime,
    ) -> Self {
        Self {
            instance_id,
            member_id,
            exercise_id,
            club_id,
            timestamp,
        }
    }
}

#[cfg(any(test, feature = "test"))]
pub mod tests {
    use super::*;
    use chrono::NaiveDate;

    pub fn exercise_instance(instance_id: u32, exercise_id: &str, club_id: u32) -> ExerciseInstance {
        let timestamp = NaiveDate::from_ymd_opt(2025, 6, 2)
            .unwrap()
            .and_hms_opt(18, 30, 0)
            .unwrap();
        ExerciseInstance::new(instance_id, 1, exercise_id.to_owned(), club_id, timestamp)
    }

    #[test]
    fn should_deserialize_exercise_instance() {
        let json = r#"{
            "instance_id": 12,
            "member_id": 1,
            "exercise_id": "trmte8s",
            "club_id": 3,
            "timestamp": "2025-06-02T18:30:00"
        }"#;

        let result: ExerciseInstance = serde_json::from_str(json).unwrap();

        assert_eq!(exercise_instance(12, "trmte8s", 3), result);
    }
}
