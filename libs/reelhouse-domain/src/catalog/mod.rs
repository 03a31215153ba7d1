//! Catalog domain module
//!
//! This module contains the entities of the streaming catalog (plans,
//! content, users), the events they emit and the service that aggregates
//! them into reports and recommendations.

mod content;
mod error;
mod event;
mod ids;
mod plan;
mod report;
mod service;
mod user;

pub use content::{Content, ContentKind, Format, Playback, RATING_RANGE};
pub use error::{CatalogError, Result};
pub use event::{DomainEvent, EventKind};
pub use ids::{ContentId, EventId, PlanId, UserId};
pub use plan::{Plan, Quality};
pub use report::{
    RecommendationFilter, RecommendedTitle, Recommendations, RevenueReport, TopWatchedReport,
    WatchTally,
};
pub use service::{CatalogConfig, StreamingService};
pub use user::User;
