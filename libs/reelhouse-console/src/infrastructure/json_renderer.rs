//! JSON report encoding

use serde::Serialize;

use reelhouse_domain::catalog::{Recommendations, RevenueReport, TopWatchedReport};
use reelhouse_domain::ports::{RenderError, ReportRenderer};

/// Renders reports as JSON documents
#[derive(Debug, Clone, Default)]
pub struct JsonRenderer {
    /// Emit indented output instead of a single line
    pub pretty: bool,
}

impl JsonRenderer {
    pub fn pretty() -> Self {
        Self { pretty: true }
    }

    fn encode<T: Serialize>(&self, report: &'static str, value: &T) -> Result<String, RenderError> {
        let encoded = if self.pretty {
            serde_json::to_string_pretty(value)
        } else {
            serde_json::to_string(value)
        };
        encoded
            .map(|mut s| {
                s.push('\n');
                s
            })
            .map_err(|e| RenderError::encoding(report, e))
    }
}

impl ReportRenderer for JsonRenderer {
    fn render_top_watched(&self, report: &TopWatchedReport) -> Result<String, RenderError> {
        self.encode("top-watched", report)
    }

    fn render_revenue(&self, report: &RevenueReport) -> Result<String, RenderError> {
        self.encode("revenue", report)
    }

    fn render_recommendations(
        &self,
        recommendations: &Recommendations,
    ) -> Result<String, RenderError> {
        self.encode("recommendations", recommendations)
    }
}
