//! Plain-text report layout for terminals

use std::fmt::Write;

use reelhouse_domain::catalog::{Recommendations, RevenueReport, TopWatchedReport};
use reelhouse_domain::ports::{RenderError, ReportRenderer};

/// Renders reports as indented plain text
#[derive(Debug, Clone)]
pub struct TextRenderer {
    /// Prefix of each list item
    pub bullet: String,
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self {
            bullet: " - ".to_string(),
        }
    }
}

impl ReportRenderer for TextRenderer {
    fn render_top_watched(&self, report: &TopWatchedReport) -> Result<String, RenderError> {
        let mut out = String::from("Top Watched Content:\n");
        if report.is_empty() {
            out.push_str("(no content tracked)\n");
        }
        for entry in &report.entries {
            let unit = if entry.views == 1 { "view" } else { "views" };
            let _ = writeln!(out, "{}{} → {} {}", self.bullet, entry.title, entry.views, unit);
        }
        Ok(out)
    }

    fn render_revenue(&self, report: &RevenueReport) -> Result<String, RenderError> {
        Ok(format!(
            "Total Monthly Revenue: ${} ({} paying, {} without plan)\n",
            report.total, report.paying_users, report.unsubscribed_users
        ))
    }

    fn render_recommendations(
        &self,
        recommendations: &Recommendations,
    ) -> Result<String, RenderError> {
        let mut out = format!("{}:\n", recommendations.filter);
        if recommendations.items.is_empty() {
            out.push_str("(nothing to recommend)\n");
        }
        for item in &recommendations.items {
            let _ = writeln!(
                out,
                "{}{} ({}, {}/5)",
                self.bullet, item.title, item.kind, item.rating
            );
        }
        Ok(out)
    }
}
