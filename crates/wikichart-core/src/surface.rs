//! Boundary traits for the external drawing surface.
//!
//! The charting library that actually draws pixels is an external
//! collaborator: the core hands it a fully-formatted spec and otherwise only
//! needs its pixel dimensions. Hosts are the page elements charts render
//! into.

use serde_json::Value;

use crate::spec::ChartSpec;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RendererKind {
    #[default]
    Svg,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceOptions {
    pub renderer: RendererKind,
    pub height: f64,
}

/// The element a chart renders into.
pub trait ChartHost {
    /// Language declared on the host element, if any. Falls back to the
    /// page's view language when absent.
    fn language(&self) -> Option<String>;

    fn client_height(&self) -> f64;

    fn init_surface(&mut self, theme: Option<&Value>, options: &SurfaceOptions)
    -> Box<dyn DrawingSurface>;

    /// Removes the previously rendered static image. Called exactly once per
    /// render, after the interactive spec has been applied; this is a
    /// one-time replacement, not a diff.
    fn remove_static_image(&mut self);
}

/// An initialized, renderable chart instance.
pub trait DrawingSurface {
    fn width(&self) -> f64;

    fn apply(&mut self, spec: &ChartSpec);

    fn resize(&mut self);
}
