use std::sync::Arc;

use chrono::{Datelike, NaiveDate};
use icu::calendar::Date;
use icu::datetime::{DateTimeFormatter, fieldsets};
use serde_json::Value;

use crate::locale::LocaleContext;

/// Lenient calendar parse for data values: ISO `YYYY-MM-DD`, with a
/// slash-separated fallback some tabular sources emit.
pub fn parse_date_str(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(text, "%Y/%m/%d"))
        .ok()
}

/// Locale-aware date formatter.
///
/// Strings parse leniently as calendar dates and pass through unchanged when
/// they do not parse; numbers are UNIX epoch milliseconds.
#[derive(Clone)]
pub struct DateFormatter {
    language: String,
    no_data_text: String,
    formatter: Option<Arc<DateTimeFormatter<fieldsets::YMD>>>,
}

impl DateFormatter {
    pub fn new(ctx: &LocaleContext) -> Self {
        let locale = super::parse_locale(ctx.language());
        let formatter = DateTimeFormatter::try_new(locale.into(), fieldsets::YMD::medium())
            .ok()
            .map(Arc::new);
        Self {
            language: ctx.language().to_string(),
            no_data_text: ctx.no_data_text().to_string(),
            formatter,
        }
    }

    pub fn format(&self, value: &Value) -> String {
        match value {
            Value::Null => self.no_data_text.clone(),
            Value::String(text) => match parse_date_str(text) {
                Some(date) => self.format_date(date),
                None => text.clone(),
            },
            Value::Number(number) => {
                let millis = number
                    .as_i64()
                    .or_else(|| number.as_f64().map(|value| value as i64));
                match millis.and_then(chrono::DateTime::from_timestamp_millis) {
                    Some(datetime) => self.format_date(datetime.date_naive()),
                    None => number.to_string(),
                }
            }
            other => other.to_string(),
        }
    }

    pub fn format_date(&self, date: NaiveDate) -> String {
        if let Some(formatter) = &self.formatter {
            if let Ok(icu_date) =
                Date::try_new_iso(date.year(), date.month() as u8, date.day() as u8)
            {
                return formatter.format(&icu_date).to_string();
            }
        }
        date.format("%Y-%m-%d").to_string()
    }
}

impl std::fmt::Debug for DateFormatter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DateFormatter")
            .field("language", &self.language)
            .finish()
    }
}
