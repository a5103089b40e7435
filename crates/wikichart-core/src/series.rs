//! Heuristic type inference over data series.
//!
//! Older cached documents carry no axis type declarations, so the rendering
//! path infers formatters by sampling the actual series values. The rules
//! are deliberately conservative: one uninterpretable element makes the
//! whole series opaque.

use serde_json::Value;

use crate::format::parse_date_str;

/// True iff every element is a 10-character string that parses as a valid
/// calendar date (e.g. `2024-02-20`). Returns false as soon as one element
/// cannot be interpreted as a date. An empty series is vacuously date-like.
pub fn is_date_series(series: &[Value]) -> bool {
    series.iter().all(|value| match value.as_str() {
        Some(text) => text.chars().count() == 10 && parse_date_str(text).is_some(),
        None => false,
    })
}

/// True iff every element is a JSON number.
pub fn is_number_series(series: &[Value]) -> bool {
    series.iter().all(Value::is_number)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn date_series_accepts_iso_dates() {
        let series = [
            json!("2024-02-20"),
            json!("2023-02-20"),
            json!("2022-02-20"),
            json!("2021-02-20"),
        ];
        assert!(is_date_series(&series));
    }

    #[test]
    fn date_series_rejects_one_malformed_entry() {
        let series = [
            json!("2024-02-20"),
            json!("2023-02"),
            json!("2022-02-20"),
            json!("2021-02-20"),
        ];
        assert!(!is_date_series(&series));
    }

    #[test]
    fn date_series_rejects_ten_character_non_dates() {
        let series = [json!("2024-13-40"), json!("2023-02-20")];
        assert!(!is_date_series(&series));
    }

    #[test]
    fn date_series_rejects_numbers() {
        let series = [json!(0), json!(1), json!(2), json!(4)];
        assert!(!is_date_series(&series));
    }

    #[test]
    fn empty_series_is_vacuously_date_like() {
        assert!(is_date_series(&[]));
    }

    #[test]
    fn number_series_requires_numeric_runtime_type() {
        assert!(is_number_series(&[json!(1), json!(2.5), json!(-3)]));
        assert!(!is_number_series(&[json!(1), json!("2")]));
        assert!(is_number_series(&[]));
    }
}
