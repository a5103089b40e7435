//! Host-facing render orchestration.
//!
//! One `ChartRenderer` serves every chart element on a page. A failed decode
//! aborts only the element it came from: the error is logged and returned,
//! never propagated as a panic.

use serde_json::Value;

use crate::assemble::{adjust_title_width, assemble};
use crate::error::Result;
use crate::locale::{DEFAULT_NO_DATA_TEXT, LocaleContext};
use crate::payload::{ChartData, decode_chart_attribute};
use crate::spec::ChartSpec;
use crate::surface::{ChartHost, DrawingSurface, RendererKind, SurfaceOptions};

#[derive(Debug, Clone)]
pub struct ChartRenderer {
    view_language: String,
    no_data_text: String,
}

impl ChartRenderer {
    /// `view_language` is the page's view language, used when the host
    /// element declares none of its own.
    pub fn new(view_language: impl Into<String>) -> Self {
        Self {
            view_language: view_language.into(),
            no_data_text: DEFAULT_NO_DATA_TEXT.to_string(),
        }
    }

    /// Supplies the host-localized "no data" message.
    pub fn with_no_data_text(mut self, text: impl Into<String>) -> Self {
        self.no_data_text = text.into();
        self
    }

    /// Decodes a raw data-attribute payload and renders it into the host.
    pub fn render(&self, host: &mut dyn ChartHost, payload: &str) -> Result<RenderedChart> {
        let value = decode_chart_attribute(payload).map_err(|err| {
            tracing::error!(target: "wikichart", error = %err, "unable to read chart data payload");
            err
        })?;
        self.render_value(host, value)
    }

    /// Renders an already-decoded payload value into the host.
    pub fn render_value(&self, host: &mut dyn ChartHost, value: Value) -> Result<RenderedChart> {
        let data = ChartData::from_value(value).map_err(|err| {
            tracing::error!(target: "wikichart", error = %err, "discarding malformed chart payload");
            err
        })?;

        let ctx = self.locale_for(&*host);
        let options = SurfaceOptions {
            renderer: RendererKind::Svg,
            height: host.client_height(),
        };
        let mut surface = host.init_surface(data.theme.as_ref(), &options);

        let spec = assemble(data.spec, &data.plan, &ctx, Some(surface.width()));
        surface.apply(&spec);
        host.remove_static_image();

        Ok(RenderedChart { spec, surface })
    }

    pub fn locale_for(&self, host: &dyn ChartHost) -> LocaleContext {
        let language = host
            .language()
            .unwrap_or_else(|| self.view_language.clone());
        LocaleContext::new(language).with_no_data_text(self.no_data_text.clone())
    }
}

/// A chart that has been handed to its drawing surface.
///
/// The embedding layer calls `handle_resize` from its resize events for the
/// lifetime of the host element; hosts are page-lifetime singletons, so the
/// hookup is never torn down.
pub struct RenderedChart {
    spec: ChartSpec,
    surface: Box<dyn DrawingSurface>,
}

impl RenderedChart {
    /// Re-triggers the surface resize and re-applies the title wrap width.
    pub fn handle_resize(&mut self) {
        self.surface.resize();
        let has_title_style = self
            .spec
            .title
            .as_ref()
            .is_some_and(|title| title.text_style.is_some() || title.subtext_style.is_some());
        if has_title_style {
            let width = self.surface.width();
            adjust_title_width(&mut self.spec, width);
            self.surface.apply(&self.spec);
        }
    }

    pub fn spec(&self) -> &ChartSpec {
        &self.spec
    }

    pub fn surface(&self) -> &dyn DrawingSurface {
        self.surface.as_ref()
    }
}

impl std::fmt::Debug for RenderedChart {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RenderedChart")
            .field("spec", &self.spec)
            .finish_non_exhaustive()
    }
}
