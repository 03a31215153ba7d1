//! # Reelhouse Console Adapters
//!
//! Implementations of the domain ports for a terminal session:
//!
//! - `TextRenderer` / `JsonRenderer` implement `ReportRenderer`
//! - `TracingEventSink` logs every domain event through `tracing`
//! - `RecordingEventSink` keeps events in memory for transcripts and tests

pub mod infrastructure;

pub use infrastructure::{
    AnyRenderer, JsonRenderer, RecordingEventSink, ReportFormat, TextRenderer, TracingEventSink,
};
