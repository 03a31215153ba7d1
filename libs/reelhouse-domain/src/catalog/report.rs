//! Report data produced by the streaming service
//!
//! Reports are plain data. Turning them into text or JSON is the job of a
//! `ReportRenderer` adapter.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::rc::Rc;

use crate::catalog::content::{Content, ContentKind};
use crate::catalog::ids::ContentId;

/// One line of the top-watched report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WatchTally {
    pub content_id: ContentId,
    pub title: String,
    pub views: u64,
}

/// Every tracked title with its view count, most watched first
///
/// Titles with equal counts keep their catalog registration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopWatchedReport {
    pub entries: Vec<WatchTally>,
}

impl TopWatchedReport {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn titles(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.title.as_str()).collect()
    }
}

/// Monthly revenue summed over the active plans of all users
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevenueReport {
    /// Exact sum of monthly prices, serialized as a decimal string
    pub total: Decimal,
    /// Users with an active plan
    pub paying_users: usize,
    /// Users without a plan, contributing nothing
    pub unsubscribed_users: usize,
}

/// Criterion for a recommendation query
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "filter", content = "value", rename_all = "snake_case")]
pub enum RecommendationFilter {
    /// The first few registered titles
    Top,
    /// Titles whose kind matches the label, ignoring case
    ByKind(String),
    /// Titles rated at least this high
    MinRating(u8),
}

impl RecommendationFilter {
    pub fn by_kind(kind: impl Into<String>) -> Self {
        Self::ByKind(kind.into())
    }
}

impl From<ContentKind> for RecommendationFilter {
    fn from(kind: ContentKind) -> Self {
        Self::ByKind(kind.label().to_string())
    }
}

impl fmt::Display for RecommendationFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecommendationFilter::Top => write!(f, "Recommended for you"),
            RecommendationFilter::ByKind(kind) => write!(f, "Recommended {}", kind),
            RecommendationFilter::MinRating(min) => write!(f, "Rated {} and above", min),
        }
    }
}

/// A recommended title
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendedTitle {
    pub content_id: ContentId,
    pub title: String,
    pub kind: ContentKind,
    pub rating: u8,
}

impl From<&Content> for RecommendedTitle {
    fn from(content: &Content) -> Self {
        Self {
            content_id: content.id(),
            title: content.title().to_string(),
            kind: content.kind(),
            rating: content.rating(),
        }
    }
}

/// The result of a recommendation query, ready for rendering
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendations {
    pub filter: RecommendationFilter,
    pub items: Vec<RecommendedTitle>,
}

impl Recommendations {
    pub fn new(filter: RecommendationFilter, contents: &[Rc<Content>]) -> Self {
        Self {
            filter,
            items: contents.iter().map(|c| RecommendedTitle::from(c.as_ref())).collect(),
        }
    }
}
