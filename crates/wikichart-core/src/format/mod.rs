//! Locale-aware value formatters.
//!
//! Every formatter here is total: for any JSON value it returns a string,
//! never an error. The formatting layer runs on a best-effort
//! progressive-enhancement path, so a single bad data point must not blank
//! out an entire chart. The absence sentinel (JSON `null`) always renders as
//! the host-localized "no data" message.

mod date;
mod number;
mod percent;

pub use date::{DateFormatter, parse_date_str};
pub use number::NumberFormatter;
pub use percent::PercentFormatter;

use icu::locale::{Locale, locale};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::locale::LocaleContext;

/// Numeric precision/grouping policy for an axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormatMode {
    /// Compact/grouped display with magnitude-dependent precision.
    Auto,
    /// Plain grouped decimal with a fixed high precision ceiling. The
    /// historical default for documents that predate format modes.
    #[default]
    None,
}

impl FormatMode {
    /// Parses a payload tag. Anything unrecognized falls back to `None`,
    /// which is also the default for older cached documents.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "auto" => Self::Auto,
            _ => Self::None,
        }
    }
}

/// Identity/opaque passthrough with absence-sentinel handling.
#[derive(Debug, Clone)]
pub struct TextFormatter {
    no_data_text: String,
}

impl TextFormatter {
    pub fn new(ctx: &LocaleContext) -> Self {
        Self {
            no_data_text: ctx.no_data_text().to_string(),
        }
    }

    pub fn format(&self, value: &Value) -> String {
        match value {
            Value::Null => self.no_data_text.clone(),
            Value::String(text) => text.clone(),
            Value::Number(number) => number.to_string(),
            Value::Bool(flag) => flag.to_string(),
            other => other.to_string(),
        }
    }
}

/// A resolved axis/tooltip value formatter.
#[derive(Clone)]
pub enum ValueFormatter {
    Number(NumberFormatter),
    Date(DateFormatter),
    Text(TextFormatter),
}

impl ValueFormatter {
    pub fn format(&self, value: &Value) -> String {
        match self {
            Self::Number(formatter) => formatter.format(value),
            Self::Date(formatter) => formatter.format(value),
            Self::Text(formatter) => formatter.format(value),
        }
    }

    pub fn is_number(&self) -> bool {
        matches!(self, Self::Number(_))
    }

    pub fn is_date(&self) -> bool {
        matches!(self, Self::Date(_))
    }

    pub fn is_text(&self) -> bool {
        matches!(self, Self::Text(_))
    }
}

impl std::fmt::Debug for ValueFormatter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(formatter) => formatter.fmt(f),
            Self::Date(formatter) => formatter.fmt(f),
            Self::Text(formatter) => formatter.fmt(f),
        }
    }
}

/// Parses a BCP 47 tag, falling back to English for unparseable tags rather
/// than failing the render.
pub(crate) fn parse_locale(tag: &str) -> Locale {
    tag.parse().unwrap_or_else(|_| locale!("en"))
}
