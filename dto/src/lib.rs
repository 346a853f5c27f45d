pub mod checkin;
pub mod club;
pub mod club_activity;
pub mod exercise;
pub mod exercise_instance;
pub mod exercise_usage;
pub mod member;
mod timestamp_format;
