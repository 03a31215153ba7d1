//! # Reelhouse Domain Layer
//!
//! This crate contains the pure business logic of the Reelhouse streaming
//! catalog. It follows hexagonal architecture principles:
//!
//! - **Entities**: Plans, content (movies and series) and users
//! - **Ports**: Trait definitions for output adapters (EventSink, ReportRenderer)
//! - **Services**: Catalog bookkeeping, reports and recommendations
//!
//! ## Architecture
//!
//! This layer never prints. User-facing actions produce `DomainEvent`s that
//! are handed to an `EventSink`, and reports are plain data that a
//! `ReportRenderer` adapter turns into text.
//!
//! Everything is single-threaded: entities are shared through `Rc` and the
//! few mutable fields (plan price, content rating) use `Cell`.
//!
//! ## Example
//!
//! ```rust
//! use std::rc::Rc;
//! use reelhouse_domain::catalog::{Content, ContentId, StreamingService};
//!
//! let mut service: StreamingService = StreamingService::default();
//! let movie = Rc::new(Content::movie(ContentId::new(101), "Inception", 148, 5).unwrap());
//! service.add_content(movie.clone()).unwrap();
//! service.record_watch(&movie);
//!
//! assert_eq!(service.top_watched().entries[0].views, 1);
//! ```

pub mod catalog;
pub mod ports;

// Re-export commonly used types
pub use catalog::{CatalogError, Content, Plan, StreamingService, User};
pub use ports::{EventSink, ReportRenderer};
