//! Domain events emitted by user-facing actions

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::catalog::content::Playback;
use crate::catalog::ids::EventId;

/// What happened
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EventKind {
    /// A user switched to a plan
    Subscribed { user: String, plan: String },

    /// A title was saved to a user's watchlist
    WatchlistAdded { user: String, title: String },

    /// A user started playing a title
    Played { user: String, playback: Playback },
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventKind::Subscribed { user, plan } => write!(f, "{} subscribed to {}", user, plan),
            EventKind::WatchlistAdded { user, title } => {
                write!(f, "{} added to {}'s watchlist.", title, user)
            }
            EventKind::Played { playback, .. } => write!(f, "{}", playback),
        }
    }
}

/// An event stamped with its identity and creation time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainEvent {
    id: EventId,
    occurred_at: DateTime<Utc>,
    kind: EventKind,
}

impl DomainEvent {
    /// Stamp a new event happening now
    pub fn new(kind: EventKind) -> Self {
        Self {
            id: EventId::new(),
            occurred_at: Utc::now(),
            kind,
        }
    }

    pub fn id(&self) -> &EventId {
        &self.id
    }

    pub fn occurred_at(&self) -> &DateTime<Utc> {
        &self.occurred_at
    }

    pub fn kind(&self) -> &EventKind {
        &self.kind
    }

    /// Short machine name of the event kind, used as a log field
    pub fn name(&self) -> &'static str {
        match self.kind {
            EventKind::Subscribed { .. } => "subscribed",
            EventKind::WatchlistAdded { .. } => "watchlist_added",
            EventKind::Played { .. } => "played",
        }
    }
}

impl fmt::Display for DomainEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.kind.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subscribed_display() {
        let event = DomainEvent::new(EventKind::Subscribed {
            user: "Alice".to_string(),
            plan: "Premium".to_string(),
        });

        assert_eq!(event.to_string(), "Alice subscribed to Premium");
        assert_eq!(event.name(), "subscribed");
    }

    #[test]
    fn test_watchlist_added_display() {
        let kind = EventKind::WatchlistAdded {
            user: "Bob".to_string(),
            title: "Stranger Things".to_string(),
        };

        assert_eq!(kind.to_string(), "Stranger Things added to Bob's watchlist.");
    }

    #[test]
    fn test_event_serializes_with_type_tag() {
        let event = DomainEvent::new(EventKind::Played {
            user: "Bob".to_string(),
            playback: Playback::Series {
                title: "Stranger Things".to_string(),
                episodes: 25,
            },
        });

        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["kind"]["type"], "played");
        assert_eq!(json["kind"]["playback"]["kind"], "series");
        assert_eq!(json["kind"]["playback"]["episodes"], 25);
    }
}
