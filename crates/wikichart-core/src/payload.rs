//! Decoding of the `chartData` payload embedded in a host element.
//!
//! The payload structure has grown over time; previously-cached pages may
//! carry any historical shape. Presence-of-field sniffing lives here and
//! nowhere else: every shape is normalized into one `ChartData` before any
//! formatting logic runs, so a new structure version only ever needs a new
//! branch in this module.
//!
//! Shapes, oldest first:
//! 1. `{ spec, theme }` - no axis hints; formatters are inferred per series.
//! 2. `{ spec, theme, xAxisType, yAxisType }` - declared types, no modes.
//! 3. `{ spec, theme, xAxisType, xAxisFormatMode, yAxisType, yAxisFormatMode }`
//!    - current; absent modes default to `none`.

use serde_json::Value;

use crate::error::{Error, Result};
use crate::format::FormatMode;
use crate::resolve::{AxisType, FormatterStrategy};
use crate::spec::ChartSpec;

/// Declared formatting inputs for one axis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AxisFormat {
    pub axis_type: Option<AxisType>,
    pub mode: FormatMode,
}

impl Default for AxisFormat {
    fn default() -> Self {
        Self {
            axis_type: None,
            mode: FormatMode::None,
        }
    }
}

/// Normalized formatter-selection plan for a payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatterPlan {
    pub strategy: FormatterStrategy,
    pub x: AxisFormat,
    pub y: AxisFormat,
}

impl FormatterPlan {
    pub fn heuristic() -> Self {
        Self {
            strategy: FormatterStrategy::Heuristic,
            x: AxisFormat::default(),
            y: AxisFormat::default(),
        }
    }
}

/// A decoded, version-normalized chart payload.
#[derive(Debug, Clone)]
pub struct ChartData {
    pub spec: ChartSpec,
    pub theme: Option<Value>,
    pub plan: FormatterPlan,
}

impl ChartData {
    pub fn from_value(value: Value) -> Result<Self> {
        let Value::Object(mut fields) = value else {
            return Err(Error::invalid_payload("chart data must be a JSON object"));
        };
        let Some(spec_value) = fields.remove("spec") else {
            return Err(Error::invalid_payload("chart data carries no spec"));
        };
        let spec = ChartSpec::from_value(spec_value)?;
        let theme = fields.remove("theme");

        let x_type = fields
            .get("xAxisType")
            .and_then(Value::as_str)
            .map(AxisType::from_tag);
        let y_type = fields
            .get("yAxisType")
            .and_then(Value::as_str)
            .map(AxisType::from_tag);

        let plan = if x_type.is_none() && y_type.is_none() {
            FormatterPlan::heuristic()
        } else {
            FormatterPlan {
                strategy: FormatterStrategy::Declared,
                x: AxisFormat {
                    axis_type: x_type,
                    mode: format_mode_field(&fields, "xAxisFormatMode"),
                },
                y: AxisFormat {
                    axis_type: y_type,
                    mode: format_mode_field(&fields, "yAxisFormatMode"),
                },
            }
        };

        Ok(Self { spec, theme, plan })
    }
}

fn format_mode_field(fields: &serde_json::Map<String, Value>, key: &str) -> FormatMode {
    fields
        .get(key)
        .and_then(Value::as_str)
        .map(FormatMode::from_tag)
        .unwrap_or_default()
}

/// Decodes one data-attribute value into the payload JSON.
///
/// Current content stores plain JSON; legacy content URL-encodes it. The
/// legacy form is only tried once plain JSON parsing has failed, and the
/// original parse error is reported when both fail.
pub fn decode_chart_attribute(raw: &str) -> Result<Value> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(Error::invalid_payload("empty chart data attribute"));
    }
    match serde_json::from_str(trimmed) {
        Ok(value) => Ok(value),
        Err(json_err) => {
            if let Some(decoded) = percent_decode(trimmed) {
                if decoded != trimmed {
                    if let Ok(value) = serde_json::from_str(&decoded) {
                        return Ok(value);
                    }
                }
            }
            Err(Error::Json(json_err))
        }
    }
}

/// Resolves the payload from the host element's data attributes.
///
/// `data-mw-chart` is current; older cached content uses `data-chart`, and a
/// bare `"true"` marker in the current attribute means the payload still
/// lives in the legacy one.
pub fn decode_chart_attributes(mw_chart: Option<&str>, chart: Option<&str>) -> Result<Value> {
    match mw_chart {
        Some(raw) if raw != "true" => decode_chart_attribute(raw),
        _ => match chart {
            Some(raw) => decode_chart_attribute(raw),
            None => Err(Error::invalid_payload("no chart data attribute present")),
        },
    }
}

fn percent_decode(input: &str) -> Option<String> {
    let bytes = input.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());

    let mut i = 0usize;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            if i + 2 >= bytes.len() {
                return None;
            }
            let hi = from_hex_byte(bytes[i + 1])?;
            let lo = from_hex_byte(bytes[i + 2])?;
            out.push((hi << 4) | lo);
            i += 3;
            continue;
        }
        out.push(bytes[i]);
        i += 1;
    }

    String::from_utf8(out).ok()
}

fn from_hex_byte(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}
