use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Number of check-ins of a club during one month.
/// `club_name` is empty when the check-in refers to an unknown club.
#[derive(Debug, Getters, Serialize, Deserialize, PartialEq, Eq, Hash, Clone)]
pub struct ClubActivity {
    club_id: u32,
    club_name: Option<String>,
    month_year: String,
    total_checkins: usize,
}

impl ClubActivity {
    pub const COLUMNS: [&'static str; 4] = ["club_id", "club_name", "month_year", "total_checkins"];

    pub fn new(
        club_id: u32,
        club_name: Option<String>,
        month_year: String,
        total_checkins: usize,
    ) -> Self {
        Self {
            club_id,
            club_name,
            month_year,
            total_checkins,
        }
    }
}
