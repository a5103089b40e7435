use std::sync::Arc;

use icu::decimal::DecimalFormatter;
use icu::decimal::options::DecimalFormatterOptions;

use crate::format::number::scaled_decimal;
use crate::locale::LocaleContext;

/// Locale-aware percentage formatter for values already on a 0..=100 scale,
/// as charting libraries report slice percentages.
#[derive(Clone)]
pub struct PercentFormatter {
    language: String,
    sign: &'static str,
    formatter: Arc<DecimalFormatter>,
}

impl PercentFormatter {
    pub fn new(ctx: &LocaleContext) -> Self {
        let locale = super::parse_locale(ctx.language());
        let formatter = DecimalFormatter::try_new(
            locale.clone().into(),
            DecimalFormatterOptions::default(),
        )
        .unwrap_or_else(|_| {
            DecimalFormatter::try_new(
                icu::locale::locale!("en").into(),
                DecimalFormatterOptions::default(),
            )
            .expect("compiled locale data covers English")
        });
        Self {
            language: ctx.language().to_string(),
            sign: percent_sign(ctx.language()),
            formatter: Arc::new(formatter),
        }
    }

    /// Formats with up to two fraction digits and the locale percent sign.
    pub fn format_percent(&self, percent: f64) -> String {
        if !percent.is_finite() {
            return format!("{percent}{}", self.sign);
        }
        match scaled_decimal(percent, 2) {
            Some(decimal) => format!("{}{}", self.formatter.format(&decimal), self.sign),
            None => format!("{percent}{}", self.sign),
        }
    }
}

impl std::fmt::Debug for PercentFormatter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PercentFormatter")
            .field("language", &self.language)
            .finish()
    }
}

/// Arabic-script locales conventionally use U+066A as the percent sign.
fn percent_sign(tag: &str) -> &'static str {
    let lang = tag.split(['-', '_']).next().unwrap_or(tag);
    match lang.to_ascii_lowercase().as_str() {
        "ar" | "fa" | "ur" | "ps" | "sd" | "ckb" => "\u{066A}",
        _ => "%",
    }
}
