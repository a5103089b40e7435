use crate::*;
use serde_json::json;

fn ctx(language: &str) -> LocaleContext {
    LocaleContext::new(language)
}

#[test]
fn formats_small_values_to_two_decimal_places() {
    let format = NumberFormatter::new(&ctx("en"), FormatMode::Auto);
    assert_eq!(format.format(&json!(5.44444444444)), "5.44");
}

#[test]
fn formats_1000_as_1k() {
    let format = NumberFormatter::new(&ctx("en"), FormatMode::Auto);
    assert_eq!(format.format(&json!(1000)), "1K");
}

#[test]
fn formats_three_figure_values_to_nearest_integer() {
    let format = NumberFormatter::new(&ctx("en"), FormatMode::Auto);
    assert_eq!(format.format(&json!(999.4555555)), "999");
}

#[test]
fn formats_values_under_100_to_two_decimals() {
    let format = NumberFormatter::new(&ctx("en"), FormatMode::Auto);
    assert_eq!(format.format(&json!(99.4555555)), "99.46");
}

#[test]
fn negative_values_keep_up_to_three_fraction_digits() {
    let format = NumberFormatter::new(&ctx("en"), FormatMode::Auto);
    assert_eq!(format.format(&json!(-5.34567)), "-5.346");
    assert_eq!(format.format(&json!(-5.5)), "-5.5");
}

#[test]
fn trailing_zeros_are_suppressed() {
    let format = NumberFormatter::new(&ctx("en"), FormatMode::Auto);
    assert_eq!(format.format(&json!(5.0)), "5");
    assert_eq!(format.format(&json!(42.5)), "42.5");
}

#[test]
fn plain_mode_groups_minimally() {
    let format = NumberFormatter::new(&ctx("en"), FormatMode::None);
    assert_eq!(format.format(&json!(2025)), "2025");
    assert_eq!(format.format(&json!(1234)), "1234");
    assert_eq!(format.format(&json!(12345)), "12,345");
}

#[test]
fn plain_mode_keeps_full_precision() {
    let format = NumberFormatter::new(&ctx("fa"), FormatMode::None);
    assert_eq!(format.format(&json!("5.3343444")), "۵٫۳۳۴۳۴۴۴");
}

#[test]
fn plain_mode_never_goes_compact() {
    let format = NumberFormatter::new(&ctx("en"), FormatMode::None);
    assert_eq!(format.format(&json!(1000)), "1000");
}

#[test]
fn absence_sentinel_renders_the_no_data_message() {
    let ctx = ctx("en").with_no_data_text("no data available");
    let format = NumberFormatter::new(&ctx, FormatMode::Auto);
    assert_eq!(format.format(&json!(null)), "no data available");
}

#[test]
fn unparseable_strings_pass_through() {
    let format = NumberFormatter::new(&ctx("en"), FormatMode::Auto);
    assert_eq!(format.format(&json!("three")), "three");
}

#[test]
fn numeric_strings_format_like_numbers() {
    let format = NumberFormatter::new(&ctx("fa"), FormatMode::Auto);
    assert_eq!(format.format(&json!("5")), "۵");
}

#[test]
fn date_formatter_formats_iso_strings() {
    let format = DateFormatter::new(&ctx("en"));
    assert_eq!(format.format(&json!("2024-02-20")), "Feb 20, 2024");
}

#[test]
fn date_formatter_accepts_slash_separated_dates() {
    let format = DateFormatter::new(&ctx("en"));
    assert_eq!(format.format(&json!("2024/02/20")), "Feb 20, 2024");
}

#[test]
fn date_formatter_passes_unparseable_strings_through() {
    let format = DateFormatter::new(&ctx("en"));
    assert_eq!(format.format(&json!("2023-02")), "2023-02");
}

#[test]
fn date_formatter_reads_numbers_as_epoch_milliseconds() {
    let format = DateFormatter::new(&ctx("en"));
    assert_eq!(format.format(&json!(1_708_387_200_000_i64)), "Feb 20, 2024");
}

#[test]
fn date_formatter_renders_no_data_for_the_sentinel() {
    let format = DateFormatter::new(&ctx("en"));
    assert_eq!(format.format(&json!(null)), "No data");
}

#[test]
fn percent_formatter_keeps_up_to_two_fraction_digits() {
    let format = PercentFormatter::new(&ctx("en"));
    assert_eq!(format.format_percent(25.5), "25.5%");
    assert_eq!(format.format_percent(33.333333), "33.33%");
    assert_eq!(format.format_percent(0.0), "0%");
}

#[test]
fn percent_formatter_uses_the_locale_percent_sign() {
    let format = PercentFormatter::new(&ctx("fa"));
    assert_eq!(format.format_percent(50.0), "۵۰٪");
}

#[test]
fn text_formatter_is_a_passthrough_with_sentinel_handling() {
    let format = TextFormatter::new(&ctx("en"));
    assert_eq!(format.format(&json!("Q1")), "Q1");
    assert_eq!(format.format(&json!(7)), "7");
    assert_eq!(format.format(&json!(null)), "No data");
}
