use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, de};

const FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Accept ISO-8601 date-times with or without offset, as well as plain dates.
/// Date-times with an offset keep their wall-clock time.
pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    parse(&s).ok_or_else(|| de::Error::custom(format!("invalid timestamp `{s}`")))
}

fn parse(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .or_else(|| {
            DateTime::parse_from_rfc3339(value)
                .ok()
                .map(|timestamp| timestamp.naive_local())
        })
        .or_else(|| {
            NaiveDate::parse_from_str(value, DATE_FORMAT)
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
}

#[cfg(test)]
mod tests {
    use super::parse;
    use chrono::{NaiveDate, NaiveDateTime};
    use parameterized::{ide, parameterized};

    ide!();

    fn timestamp(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, s)
            .unwrap()
    }

    #[parameterized(
        value = {
            "2025-08-01T12:34:56",
            "2025-08-01 12:34:56",
            "2025-08-01T12:34:56+02:00",
            "2025-08-01",
            " 2025-08-01T12:34:56 ",
        },
        expected = {
            timestamp(2025, 8, 1, 12, 34, 56),
            timestamp(2025, 8, 1, 12, 34, 56),
            timestamp(2025, 8, 1, 12, 34, 56),
            timestamp(2025, 8, 1, 0, 0, 0),
            timestamp(2025, 8, 1, 12, 34, 56),
        }
    )]
    fn should_parse_timestamp(value: &str, expected: NaiveDateTime) {
        assert_eq!(Some(expected), parse(value));
    }

    #[test]
    fn should_keep_fractional_seconds() {
        let parsed = parse("2025-08-01T12:34:56.123456").unwrap();

        assert_eq!(
            NaiveDate::from_ymd_opt(2025, 8, 1)
                .unwrap()
                .and_hms_micro_opt(12, 34, 56, 123456)
                .unwrap(),
            parsed
        );
    }

    #[parameterized(value = {"", "yesterday", "2025-13-01", "01-08-2025"})]
    fn should_not_parse_invalid_timestamp(value: &str) {
        assert_eq!(None, parse(value));
    }
}
