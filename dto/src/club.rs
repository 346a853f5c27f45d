use derive_getters::Getters;
use serde::{Deserialize, Serialize};

#[derive(Debug, Getters, Serialize, Deserialize, PartialEq, Eq, Hash, Clone)]
pub struct Club {
    club_id: u32,
    club_name: String,
    city: String,
}

impl Club {
    pub fn new(club_id: u32, club_name: String, city: String) -> Self {
        Self {
            club_id,
            club_name,
            city,
        }
    }
}

#[cfg(any(test, feature = "test"))]
pub mod tests {
    use super::*;

    pub fn club(club_id: u32, club_name: &str) -> Club {
        Club::new(club_id, club_name.to_owned(), "Lyon".to_owned())
    }

    #[test]
    fn should_deserialize_club() {
        let json = r#"{"club_id": 3, "club_name": "Port Anna Fitness Center", "city": "West Jamie"}"#;

        let club: Club = serde_json::from_str(json).unwrap();

        assert_eq!(
            Club::new(
                3,
                "Port Anna Fitness Center".to_owned(),
                "West Jamie".to_owned()
            ),
            club
        );
    }
}
