use crate::*;
use serde_json::json;

fn declared_plan(x: &str, x_mode: FormatMode, y: &str, y_mode: FormatMode) -> FormatterPlan {
    FormatterPlan {
        strategy: FormatterStrategy::Declared,
        x: AxisFormat {
            axis_type: Some(AxisType::from_tag(x)),
            mode: x_mode,
        },
        y: AxisFormat {
            axis_type: Some(AxisType::from_tag(y)),
            mode: y_mode,
        },
    }
}

fn line_spec() -> ChartSpec {
    ChartSpec::from_value(json!({
        "title": { "text": "Monthly rainfall", "textStyle": {} },
        "xAxis": { "type": "category", "data": ["2024-01-01", "2024-02-01"] },
        "yAxis": { "type": "value" },
        "legend": {},
        "series": [ { "type": "line", "data": [10, 20] } ],
        "grid": { "left": 10 }
    }))
    .expect("valid spec")
}

#[test]
fn attaches_declared_formatters_to_declared_axes() {
    let ctx = LocaleContext::new("en");
    let plan = declared_plan("date", FormatMode::None, "integer", FormatMode::Auto);
    let spec = assemble(line_spec(), &plan, &ctx, Some(800.0));

    let x_label = spec.x_axis.unwrap().axis_label.unwrap();
    assert!(x_label.formatter.unwrap().is_date());
    let y_label = spec.y_axis.unwrap().axis_label.unwrap();
    assert!(y_label.formatter.unwrap().is_number());
}

#[test]
fn undeclared_axes_stay_absent() {
    let ctx = LocaleContext::new("en");
    let plan = declared_plan("string", FormatMode::None, "integer", FormatMode::None);
    let spec = ChartSpec::from_value(json!({
        "series": [ { "type": "pie", "data": [ { "name": "Cats", "value": 2 } ] } ]
    }))
    .unwrap();

    let assembled = assemble(spec, &plan, &ctx, Some(640.0));
    assert!(assembled.x_axis.is_none());
    assert!(assembled.y_axis.is_none());
    assert!(assembled.legend.is_none());
    assert!(assembled.tooltip.is_some());
}

#[test]
fn tooltip_is_always_set_when_series_exist() {
    let ctx = LocaleContext::new("en");
    let plan = FormatterPlan::heuristic();
    let spec = assemble(line_spec(), &plan, &ctx, None);
    assert_eq!(spec.tooltip.unwrap().trigger, TooltipTrigger::Axis);
}

#[test]
fn title_wrap_width_tracks_the_surface() {
    let ctx = LocaleContext::new("en");
    let plan = FormatterPlan::heuristic();
    let spec = assemble(line_spec(), &plan, &ctx, Some(765.0));
    let style = spec.title.unwrap().text_style.unwrap();
    assert_eq!(style.width, Some(765.0));
}

#[test]
fn titles_without_style_objects_get_no_width() {
    let ctx = LocaleContext::new("en");
    let plan = FormatterPlan::heuristic();
    let spec = ChartSpec::from_value(json!({
        "title": { "text": "Plain" },
        "series": [ { "type": "line", "data": [1] } ]
    }))
    .unwrap();
    let assembled = assemble(spec, &plan, &ctx, Some(765.0));
    assert!(assembled.title.unwrap().text_style.is_none());
}

#[test]
fn heuristic_strategy_samples_the_axis_data() {
    let ctx = LocaleContext::new("en");
    let plan = FormatterPlan::heuristic();
    let spec = assemble(line_spec(), &plan, &ctx, None);

    let x_label = spec.x_axis.unwrap().axis_label.unwrap();
    assert!(x_label.formatter.unwrap().is_date());
    // y axis has no data; the first series' values are numeric.
    let y_label = spec.y_axis.unwrap().axis_label.unwrap();
    assert!(y_label.formatter.unwrap().is_number());
}

#[test]
fn heuristic_with_empty_axis_data_formats_dates() {
    // An empty sample is vacuously a date series, so the date formatter wins.
    let ctx = LocaleContext::new("en");
    let plan = FormatterPlan::heuristic();
    let spec = ChartSpec::from_value(json!({
        "xAxis": { "data": [] },
        "series": [ { "type": "line", "data": [1, 2] } ]
    }))
    .unwrap();
    let assembled = assemble(spec, &plan, &ctx, None);
    let x_label = assembled.x_axis.unwrap().axis_label.unwrap();
    assert!(x_label.formatter.unwrap().is_date());
}

#[test]
fn rtl_context_positions_legend_and_guards_titles() {
    let ctx = LocaleContext::new("fa");
    let plan = FormatterPlan::heuristic();
    let spec = ChartSpec::from_value(json!({
        "title": { "text": "2024 data" },
        "legend": {},
        "series": [ { "type": "line", "data": [1] } ]
    }))
    .unwrap();
    let assembled = assemble(spec, &plan, &ctx, None);

    let legend = assembled.legend.unwrap();
    assert_eq!(legend.right, Some(json!(0)));
    assert_eq!(legend.align.as_deref(), Some("right"));
    assert_eq!(
        assembled.title.unwrap().text.unwrap(),
        "\u{202B}2024 data\u{202C}"
    );
}

#[test]
fn assembling_twice_is_idempotent_for_titles() {
    let ctx = LocaleContext::new("fa");
    let plan = FormatterPlan::heuristic();
    let once = assemble(line_spec(), &plan, &ctx, Some(800.0));
    let once_title = once.title.clone();
    let twice = assemble(once, &plan, &ctx, Some(800.0));
    assert_eq!(
        twice.title.unwrap().text,
        once_title.unwrap().text
    );
}

#[test]
fn unknown_spec_fields_survive_the_round_trip() {
    let ctx = LocaleContext::new("en");
    let plan = FormatterPlan::heuristic();
    let assembled = assemble(line_spec(), &plan, &ctx, Some(800.0));

    let value = assembled.to_value();
    assert_eq!(value["grid"], json!({ "left": 10 }));
    assert_eq!(value["xAxis"]["type"], json!("category"));
    assert_eq!(value["yAxis"]["type"], json!("value"));
}

#[test]
fn mixed_axis_samples_pass_values_through() {
    let ctx = LocaleContext::new("en");
    let plan = FormatterPlan::heuristic();
    let spec = ChartSpec::from_value(json!({
        "xAxis": { "data": ["Q1", "Q2", "Q3"] },
        "series": [ { "type": "bar", "data": [5, 6, 7] } ]
    }))
    .unwrap();
    let assembled = assemble(spec, &plan, &ctx, None);
    let formatter = assembled
        .x_axis
        .unwrap()
        .axis_label
        .unwrap()
        .formatter
        .unwrap();
    assert!(formatter.is_text());
    assert_eq!(formatter.format(&json!("Q1")), "Q1");
}
