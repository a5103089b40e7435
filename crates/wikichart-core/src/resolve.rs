//! Axis formatter resolution.
//!
//! Two strategies coexist across the historical payload versions: a declared
//! axis type (authoritative, current) and a per-series heuristic (older
//! cached content). The payload decoder picks the strategy from which fields
//! the structure version carries; nothing here infers precedence.

use serde_json::Value;

use crate::format::{
    DateFormatter, FormatMode, NumberFormatter, TextFormatter, ValueFormatter,
};
use crate::locale::LocaleContext;
use crate::series::{is_date_series, is_number_series};

/// Declared semantic type of values along an axis.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AxisType {
    Number,
    Integer,
    Float,
    Date,
    /// Anything unrecognized formats as opaque text.
    Other(String),
}

impl AxisType {
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "number" => Self::Number,
            "integer" => Self::Integer,
            "float" => Self::Float,
            "date" => Self::Date,
            other => Self::Other(other.to_string()),
        }
    }
}

/// How axis formatters are chosen for a payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormatterStrategy {
    /// Axis types declared in the payload; authoritative.
    Declared,
    /// Inferred by sampling the series data (older structure versions).
    Heuristic,
}

/// Builds the formatter for a declared axis type.
pub fn formatter_for_type(
    axis_type: &AxisType,
    mode: FormatMode,
    ctx: &LocaleContext,
) -> ValueFormatter {
    match axis_type {
        AxisType::Number | AxisType::Integer | AxisType::Float => {
            ValueFormatter::Number(NumberFormatter::new(ctx, mode))
        }
        AxisType::Date => ValueFormatter::Date(DateFormatter::new(ctx)),
        AxisType::Other(_) => ValueFormatter::Text(TextFormatter::new(ctx)),
    }
}

/// Infers a formatter from the series values: date-series check first, then
/// number-series, else opaque text. The number path uses `auto` mode so both
/// strategies format the overlapping cases identically.
pub fn formatter_for_series(series: &[Value], ctx: &LocaleContext) -> ValueFormatter {
    if is_date_series(series) {
        ValueFormatter::Date(DateFormatter::new(ctx))
    } else if is_number_series(series) {
        ValueFormatter::Number(NumberFormatter::new(ctx, FormatMode::Auto))
    } else {
        ValueFormatter::Text(TextFormatter::new(ctx))
    }
}
