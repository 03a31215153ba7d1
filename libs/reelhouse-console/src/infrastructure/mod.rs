//! Port adapters

mod json_renderer;
mod recording_sink;
mod text_renderer;
mod tracing_sink;

pub use json_renderer::JsonRenderer;
pub use recording_sink::RecordingEventSink;
pub use text_renderer::TextRenderer;
pub use tracing_sink::TracingEventSink;

use std::fmt;
use std::str::FromStr;

use reelhouse_domain::catalog::{Recommendations, RevenueReport, TopWatchedReport};
use reelhouse_domain::ports::{RenderError, ReportRenderer};

/// Output format selected at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

impl ReportFormat {
    /// Build the renderer for this format
    pub fn renderer(&self) -> AnyRenderer {
        match self {
            ReportFormat::Text => AnyRenderer::Text(TextRenderer::default()),
            ReportFormat::Json => AnyRenderer::Json(JsonRenderer::default()),
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportFormat::Text => f.write_str("text"),
            ReportFormat::Json => f.write_str("json"),
        }
    }
}

impl FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" | "txt" => Ok(ReportFormat::Text),
            "json" => Ok(ReportFormat::Json),
            other => Err(format!("unknown report format '{}', expected text or json", other)),
        }
    }
}

/// Renderer chosen at runtime from a `ReportFormat`
#[derive(Debug, Clone)]
pub enum AnyRenderer {
    Text(TextRenderer),
    Json(JsonRenderer),
}

impl ReportRenderer for AnyRenderer {
    fn render_top_watched(&self, report: &TopWatchedReport) -> Result<String, RenderError> {
        match self {
            AnyRenderer::Text(r) => r.render_top_watched(report),
            AnyRenderer::Json(r) => r.render_top_watched(report),
        }
    }

    fn render_revenue(&self, report: &RevenueReport) -> Result<String, RenderError> {
        match self {
            AnyRenderer::Text(r) => r.render_revenue(report),
            AnyRenderer::Json(r) => r.render_revenue(report),
        }
    }

    fn render_recommendations(
        &self,
        recommendations: &Recommendations,
    ) -> Result<String, RenderError> {
        match self {
            AnyRenderer::Text(r) => r.render_recommendations(recommendations),
            AnyRenderer::Json(r) => r.render_recommendations(recommendations),
        }
    }
}
