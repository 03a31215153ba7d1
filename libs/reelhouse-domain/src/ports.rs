//! Ports (trait definitions) for output adapters
//!
//! The domain never prints. Events go to an `EventSink` and reports are
//! turned into text by a `ReportRenderer`; both are implemented by adapter
//! crates.

use std::rc::Rc;

use thiserror::Error;

use crate::catalog::{DomainEvent, Recommendations, RevenueReport, TopWatchedReport};

/// Port for publishing domain events
///
/// Publishing cannot fail from the domain's point of view. An adapter that
/// talks to something fallible is expected to log and drop.
#[cfg_attr(test, mockall::automock)]
pub trait EventSink {
    /// Publish a single event
    fn publish(&self, event: &DomainEvent);
}

impl<T: EventSink + ?Sized> EventSink for &T {
    fn publish(&self, event: &DomainEvent) {
        (**self).publish(event)
    }
}

impl<T: EventSink + ?Sized> EventSink for Rc<T> {
    fn publish(&self, event: &DomainEvent) {
        (**self).publish(event)
    }
}

/// Sink that discards every event
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

impl EventSink for NoopSink {
    fn publish(&self, _event: &DomainEvent) {}
}

/// Errors raised while rendering a report
#[derive(Error, Debug)]
pub enum RenderError {
    /// The report could not be encoded in the target format
    #[error("Failed to encode {report} report: {reason}")]
    Encoding { report: &'static str, reason: String },
}

impl RenderError {
    pub fn encoding(report: &'static str, reason: impl ToString) -> Self {
        Self::Encoding {
            report,
            reason: reason.to_string(),
        }
    }
}

/// Port for turning reports into displayable output
#[cfg_attr(test, mockall::automock)]
pub trait ReportRenderer {
    fn render_top_watched(&self, report: &TopWatchedReport) -> Result<String, RenderError>;

    fn render_revenue(&self, report: &RevenueReport) -> Result<String, RenderError>;

    fn render_recommendations(
        &self,
        recommendations: &Recommendations,
    ) -> Result<String, RenderError>;
}
