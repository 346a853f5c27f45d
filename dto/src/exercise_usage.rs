use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Number of times an exercise has been performed in a club.
/// `club_name` and `name` are empty when the instance refers to an unknown club or exercise.
#[derive(Debug, Getters, Serialize, Deserialize, PartialEq, Eq, Hash, Clone)]
pub struct ExerciseUsage {
    club_id: u32,
    club_name: Option<String>,
    exercise_id: String,
    name: Option<String>,
    usage_count: usize,
}

impl ExerciseUsage {
    pub const COLUMNS: [&'static str; 5] =
        ["club_id", "club_name", "exercise_id", "name", "usage_count"];

    pub fn new(
        club_id: u32,
        club_name: Option<String>,
        exercise_id: String,
        name: Option<String>,
        usage_count: usize,
    ) -> Self {
        Self {
            club_id,
            club_name,
            exercise_id,
            name,
            usage_count,
        }
    }
}
