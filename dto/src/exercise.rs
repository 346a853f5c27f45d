use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// An exercise offered by a club.
/// Identifiers are opaque strings coming from the exercise catalogue the fixtures were seeded from.
#[derive(Debug, Getters, Serialize, Deserialize, PartialEq, Eq, Hash, Clone)]
pub struct Exercise {
    exercise_id: String,
    club_id: u32,
    name: String,
    #[serde(default)]
    target_muscles: Vec<String>,
}

impl Exercise {
    pub fn new(exercise_id: String, club_id: u32, name: String, target_muscles: Vec<String>) -> Self {
        Self {
            exercise_id,
            club_id,
            name,
            target_muscles,
        }
    }
}

#[cfg(any(test, feature = "test"))]
pub mod tests {
    use super::*;

    pub fn exercise(exercise_id: &str, club_id: u32, name: &str) -> Exercise {
        Exercise::new(
            exercise_id.to_owned(),
            club_id,
            name.to_owned(),
            vec!["quads".to_owned()],
        )
    }

    #[test]
    fn should_deserialize_exercise() {
        let json = r#"{
            "exercise_id": "trmte8s",
            "club_id": 2,
            "name": "band shrug",
            "target_muscles": ["traps"]
        }"#;

        let result: Exercise = serde_json::from_str(json).unwrap();

        assert_eq!(
            Exercise::new(
                "trmte8s".to_owned(),
                2,
                "band shrug".to_owned(),
                vec!["traps".to_owned()]
            ),
            result
        );
    }

    #[test]
    fn should_deserialize_exercise_without_target_muscles() {
        let json = r#"{"exercise_id": "trmte8s", "club_id": 2, "name": "band shrug"}"#;

        let result: Exercise = serde_json::from_str(json).unwrap();

        assert!(result.target_muscles().is_empty());
    }
}
