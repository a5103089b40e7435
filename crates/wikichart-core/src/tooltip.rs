//! Tooltip specification.
//!
//! Proportion charts (pie) trigger per item and annotate each value with its
//! share; everything else triggers per axis position with the hovered axis
//! value echoed through the x formatter.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::format::{PercentFormatter, ValueFormatter};
use crate::locale::LocaleContext;
use crate::spec::ChartSpec;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TooltipTrigger {
    #[default]
    Axis,
    Item,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Tooltip {
    #[serde(default)]
    pub trigger: TooltipTrigger,
    /// Formats the hovered value; applied by the drawing surface.
    #[serde(skip)]
    pub value_formatter: Option<ValueFormatter>,
    /// Item-triggered label builder for proportion charts.
    #[serde(skip)]
    pub item_formatter: Option<ItemTooltipFormatter>,
    #[serde(rename = "axisPointer", default, skip_serializing_if = "Option::is_none")]
    pub axis_pointer: Option<AxisPointer>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AxisPointer {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<AxisPointerLabel>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AxisPointerLabel {
    /// Formats the hovered axis value; applied by the drawing surface.
    #[serde(skip)]
    pub formatter: Option<ValueFormatter>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// The hovered item as reported by the drawing surface's tooltip callback.
#[derive(Debug, Clone, Default)]
pub struct TooltipItem {
    /// Series marker glyph (usually a colored dot span).
    pub marker: String,
    pub name: String,
    pub value: Value,
    /// Share of the whole, in percent points. `None` when the surface
    /// reports no percentage (distinct from a genuine `0`).
    pub percent: Option<f64>,
}

/// Builds item-triggered tooltip labels for proportion charts.
#[derive(Debug, Clone)]
pub struct ItemTooltipFormatter {
    value: ValueFormatter,
    percent: PercentFormatter,
}

impl ItemTooltipFormatter {
    pub fn new(value: ValueFormatter, percent: PercentFormatter) -> Self {
        Self { value, percent }
    }

    pub fn format(&self, item: &TooltipItem) -> String {
        let mut label = format!(
            "{}{}: {}",
            item.marker,
            item.name,
            self.value.format(&item.value)
        );
        if let Some(percent) = item.percent {
            label.push_str(&format!(" ({})", self.percent.format_percent(percent)));
        }
        label
    }
}

/// Sets the tooltip on the spec. No-op when there are no series to describe.
pub fn add_tooltip(
    spec: &mut ChartSpec,
    x_formatter: &ValueFormatter,
    y_formatter: &ValueFormatter,
    ctx: &LocaleContext,
) {
    let Some(series) = spec.series.as_ref() else {
        return;
    };
    if series.is_empty() {
        return;
    }

    let tooltip = if spec.first_series_type() == Some("pie") {
        Tooltip {
            trigger: TooltipTrigger::Item,
            item_formatter: Some(ItemTooltipFormatter::new(
                y_formatter.clone(),
                PercentFormatter::new(ctx),
            )),
            ..Tooltip::default()
        }
    } else {
        Tooltip {
            trigger: TooltipTrigger::Axis,
            value_formatter: Some(y_formatter.clone()),
            axis_pointer: Some(AxisPointer {
                label: Some(AxisPointerLabel {
                    formatter: Some(x_formatter.clone()),
                    extra: Map::new(),
                }),
                extra: Map::new(),
            }),
            ..Tooltip::default()
        }
    };
    spec.tooltip = Some(tooltip);
}
