#![forbid(unsafe_code)]

//! Chart-spec formatting and localization (headless).
//!
//! Takes a normalized chart specification plus tabular data and produces a
//! fully-formatted, locale- and direction-aware rendering specification:
//! axis label and tooltip formatters, magnitude-dependent numeric precision,
//! date-series detection, bidirectional-text safe titles, and
//! direction-aware legend placement. SVG generation and chart layout belong
//! to the external drawing surface; this crate only shapes what it is told
//! to draw.

pub mod assemble;
pub mod bidi;
pub mod error;
pub mod format;
pub mod legend;
pub mod locale;
pub mod payload;
pub mod render;
pub mod resolve;
pub mod series;
pub mod spec;
pub mod surface;
pub mod tooltip;

pub use assemble::{adjust_title_width, assemble, resolve_formatters};
pub use bidi::fix_bidi_title;
pub use error::{Error, Result};
pub use format::{
    DateFormatter, FormatMode, NumberFormatter, PercentFormatter, TextFormatter, ValueFormatter,
    parse_date_str,
};
pub use legend::position_legend;
pub use locale::{LocaleContext, TextDirection};
pub use payload::{
    AxisFormat, ChartData, FormatterPlan, decode_chart_attribute, decode_chart_attributes,
};
pub use render::{ChartRenderer, RenderedChart};
pub use resolve::{AxisType, FormatterStrategy, formatter_for_series, formatter_for_type};
pub use series::{is_date_series, is_number_series};
pub use spec::{Axis, AxisLabel, ChartSpec, Legend, Series, TextStyle, Title};
pub use surface::{ChartHost, DrawingSurface, RendererKind, SurfaceOptions};
pub use tooltip::{
    AxisPointer, AxisPointerLabel, ItemTooltipFormatter, Tooltip, TooltipItem, TooltipTrigger,
    add_tooltip,
};

#[cfg(test)]
mod tests;
