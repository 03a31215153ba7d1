//! Event sink backed by `tracing`

use tracing::info;

use reelhouse_domain::catalog::{DomainEvent, EventKind};
use reelhouse_domain::ports::EventSink;

/// Logs every published event at INFO level with structured fields
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingEventSink;

impl EventSink for TracingEventSink {
    fn publish(&self, event: &DomainEvent) {
        match event.kind() {
            EventKind::Subscribed { user, plan } => {
                info!(event_id = %event.id(), user = %user, plan = %plan, "{}", event);
            }
            EventKind::WatchlistAdded { user, title } => {
                info!(event_id = %event.id(), user = %user, title = %title, "{}", event);
            }
            EventKind::Played { user, playback } => {
                info!(
                    event_id = %event.id(),
                    user = %user,
                    title = %playback.title(),
                    "{}",
                    event
                );
            }
        }
    }
}
