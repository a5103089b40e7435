use std::sync::Arc;

use icu::decimal::DecimalFormatter;
use icu::decimal::input::Decimal;
use icu::decimal::options::{DecimalFormatterOptions, GroupingStrategy};
use icu::experimental::compactdecimal::{
    CompactDecimalFormatter, CompactDecimalFormatterOptions,
};
use serde_json::Value;

use crate::format::FormatMode;
use crate::locale::LocaleContext;

/// Precision ceiling for plain (`none`) mode, matching the widest fraction a
/// double's decimal form meaningfully carries for exact/raw-data display.
const PLAIN_MAX_FRACTION_DIGITS: usize = 13;

#[derive(Clone)]
enum Notation {
    /// Plain grouped decimal: minimal grouping, high precision ceiling, no
    /// compact display.
    Plain { formatter: Arc<DecimalFormatter> },
    /// Magnitude-dependent precision with compact short display for values
    /// of a thousand and above.
    Auto {
        standard: Arc<DecimalFormatter>,
        compact: Option<Arc<CompactDecimalFormatter>>,
    },
}

/// Locale- and magnitude-aware numeric formatter.
///
/// Numeric strings format like the numbers they hold; unparseable strings
/// pass through unchanged.
#[derive(Clone)]
pub struct NumberFormatter {
    language: String,
    mode: FormatMode,
    no_data_text: String,
    notation: Notation,
}

impl NumberFormatter {
    pub fn new(ctx: &LocaleContext, mode: FormatMode) -> Self {
        let locale = super::parse_locale(ctx.language());

        let notation = match mode {
            FormatMode::None => {
                let mut options = DecimalFormatterOptions::default();
                options.grouping_strategy = Some(GroupingStrategy::Min2);
                Notation::Plain {
                    formatter: Arc::new(new_decimal_formatter(&locale, options)),
                }
            }
            FormatMode::Auto => {
                let standard =
                    Arc::new(new_decimal_formatter(&locale, DecimalFormatterOptions::default()));
                let compact = CompactDecimalFormatter::try_new_short(
                    locale.clone().into(),
                    CompactDecimalFormatterOptions::default(),
                )
                .ok()
                .map(Arc::new);
                Notation::Auto { standard, compact }
            }
        };

        Self {
            language: ctx.language().to_string(),
            mode,
            no_data_text: ctx.no_data_text().to_string(),
            notation,
        }
    }

    pub fn format(&self, value: &Value) -> String {
        match value {
            Value::Null => self.no_data_text.clone(),
            Value::Number(number) => match number.as_f64() {
                Some(value) => self.format_f64(value),
                None => number.to_string(),
            },
            Value::String(text) => match text.trim().parse::<f64>() {
                Ok(value) => self.format_f64(value),
                Err(_) => text.clone(),
            },
            other => other.to_string(),
        }
    }

    pub fn format_f64(&self, value: f64) -> String {
        if !value.is_finite() {
            return format!("{value}");
        }
        match &self.notation {
            Notation::Plain { formatter } => match plain_decimal(value) {
                Some(decimal) => formatter.format(&decimal).to_string(),
                None => format!("{value}"),
            },
            Notation::Auto { standard, compact } => {
                if value >= 1000.0 {
                    if let Some(compact) = compact {
                        return compact.format_i64(value.round() as i64).to_string();
                    }
                }
                let fraction_digits = if value < 0.0 {
                    3
                } else if value < 100.0 {
                    2
                } else {
                    0
                };
                match scaled_decimal(value, fraction_digits) {
                    Some(decimal) => standard.format(&decimal).to_string(),
                    None => format!("{value}"),
                }
            }
        }
    }

    pub fn mode(&self) -> FormatMode {
        self.mode
    }
}

impl std::fmt::Debug for NumberFormatter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NumberFormatter")
            .field("language", &self.language)
            .field("mode", &self.mode)
            .finish()
    }
}

fn new_decimal_formatter(
    locale: &icu::locale::Locale,
    options: DecimalFormatterOptions,
) -> DecimalFormatter {
    DecimalFormatter::try_new(locale.clone().into(), options.clone()).unwrap_or_else(|_| {
        DecimalFormatter::try_new(icu::locale::locale!("en").into(), options)
            .expect("compiled locale data covers English")
    })
}

/// Rounds half-away-from-zero to the requested fraction digits and trims
/// trailing fraction zeros, so minimum fraction digits stay at zero.
pub(crate) fn scaled_decimal(value: f64, fraction_digits: u32) -> Option<Decimal> {
    let scale = 10f64.powi(fraction_digits as i32);
    let scaled = (value * scale).round();
    if scaled.abs() >= i64::MAX as f64 {
        return None;
    }
    let mut decimal = Decimal::from(scaled as i64);
    decimal.multiply_pow10(-(fraction_digits as i16));
    decimal.trim_end();
    Some(decimal)
}

/// Shortest round-trip decimal form, clipped to the plain-mode fraction
/// ceiling. `Display` for `f64` never uses exponent notation, so the string
/// is always plain-decimal parseable.
fn plain_decimal(value: f64) -> Option<Decimal> {
    let mut repr = format!("{value}");
    if let Some(dot) = repr.find('.') {
        let clipped = dot + 1 + PLAIN_MAX_FRACTION_DIGITS;
        if repr.len() > clipped {
            repr.truncate(clipped);
        }
    }
    let mut decimal: Decimal = repr.parse().ok()?;
    decimal.trim_end();
    Some(decimal)
}
