//! Direction-aware legend placement.

use serde_json::Value;

use crate::spec::ChartSpec;

/// Anchors the legend to the text-direction start edge and makes it
/// scrollable, since entry count is unbounded and must not overflow the
/// chart's bounding box. No-op when the spec declares no legend.
pub fn position_legend(spec: &mut ChartSpec, is_rtl: bool) {
    let Some(legend) = spec.legend.as_mut() else {
        return;
    };
    if is_rtl {
        legend.right = Some(Value::from(0));
        legend.align = Some("right".to_string());
    } else {
        legend.left = Some(Value::from(0));
        legend.align = Some("left".to_string());
    }
    legend.kind = Some("scroll".to_string());
}
