//! Composition of a renderable spec from its parts.
//!
//! `assemble` is a pure transformation: it takes the caller's spec plus the
//! normalized formatter plan and returns a fresh, fully-populated spec.
//! Nothing here touches a live drawing surface.

use serde_json::Value;

use crate::bidi::fix_bidi_title;
use crate::format::{FormatMode, NumberFormatter, TextFormatter, ValueFormatter};
use crate::legend::position_legend;
use crate::locale::LocaleContext;
use crate::payload::{AxisFormat, FormatterPlan};
use crate::resolve::{FormatterStrategy, formatter_for_series, formatter_for_type};
use crate::spec::{Axis, AxisLabel, ChartSpec};
use crate::tooltip::add_tooltip;

/// Produces the renderable spec: title wrap width, axis label formatters,
/// tooltip, legend placement, and bidi title protection.
///
/// Sub-objects the caller did not declare are left absent; only `tooltip`
/// is ever introduced.
pub fn assemble(
    mut spec: ChartSpec,
    plan: &FormatterPlan,
    ctx: &LocaleContext,
    surface_width: Option<f64>,
) -> ChartSpec {
    if let Some(width) = surface_width {
        adjust_title_width(&mut spec, width);
    }

    let (x_formatter, y_formatter) = resolve_formatters(&spec, plan, ctx);

    add_tooltip(&mut spec, &x_formatter, &y_formatter, ctx);

    if let Some(axis) = spec.x_axis.as_mut() {
        attach_axis_formatter(axis, &x_formatter);
    }
    if let Some(axis) = spec.y_axis.as_mut() {
        attach_axis_formatter(axis, &y_formatter);
    }

    position_legend(&mut spec, ctx.is_rtl());
    fix_bidi_title(&mut spec, ctx.is_rtl());
    spec
}

/// Sets the title wrap width to the drawing surface's pixel width, on the
/// style objects the caller declared.
pub fn adjust_title_width(spec: &mut ChartSpec, width: f64) {
    let Some(title) = spec.title.as_mut() else {
        return;
    };
    if let Some(style) = title.text_style.as_mut() {
        style.width = Some(width);
    }
    if let Some(style) = title.subtext_style.as_mut() {
        style.width = Some(width);
    }
}

/// Resolves the x/y formatters for a payload's plan.
pub fn resolve_formatters(
    spec: &ChartSpec,
    plan: &FormatterPlan,
    ctx: &LocaleContext,
) -> (ValueFormatter, ValueFormatter) {
    match plan.strategy {
        FormatterStrategy::Declared => (
            declared_formatter(&plan.x, ctx),
            declared_formatter(&plan.y, ctx),
        ),
        FormatterStrategy::Heuristic => {
            let x_sample = spec.x_axis.as_ref().and_then(|axis| axis.data.as_deref());
            let y_sample = spec
                .y_axis
                .as_ref()
                .and_then(|axis| axis.data.as_deref())
                .or_else(|| first_series_data(spec));

            let x_formatter = match x_sample {
                Some(sample) => formatter_for_series(sample, ctx),
                None => ValueFormatter::Text(TextFormatter::new(ctx)),
            };
            let y_formatter = match y_sample {
                Some(sample) => formatter_for_series(sample, ctx),
                None => ValueFormatter::Number(NumberFormatter::new(ctx, FormatMode::Auto)),
            };
            (x_formatter, y_formatter)
        }
    }
}

fn declared_formatter(axis: &AxisFormat, ctx: &LocaleContext) -> ValueFormatter {
    match &axis.axis_type {
        Some(axis_type) => formatter_for_type(axis_type, axis.mode, ctx),
        // A declared-strategy payload missing one axis type (possible in a
        // future or hand-edited structure) degrades to opaque text.
        None => ValueFormatter::Text(TextFormatter::new(ctx)),
    }
}

fn first_series_data(spec: &ChartSpec) -> Option<&[Value]> {
    spec.series.as_ref()?.first()?.data.as_deref()
}

fn attach_axis_formatter(axis: &mut Axis, formatter: &ValueFormatter) {
    axis.axis_label
        .get_or_insert_with(AxisLabel::default)
        .formatter = Some(formatter.clone());
}
