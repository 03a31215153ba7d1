//! In-memory event sink

use std::cell::RefCell;

use reelhouse_domain::catalog::DomainEvent;
use reelhouse_domain::ports::EventSink;

/// Keeps every published event, in publication order
///
/// Used to print the session transcript after the fact and to assert on
/// emitted events in tests.
#[derive(Debug, Default)]
pub struct RecordingEventSink {
    events: RefCell<Vec<DomainEvent>>,
}

impl RecordingEventSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the recorded events
    pub fn events(&self) -> Vec<DomainEvent> {
        self.events.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.events.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.borrow().is_empty()
    }

    /// Remove and return all recorded events
    pub fn drain(&self) -> Vec<DomainEvent> {
        self.events.take()
    }
}

impl EventSink for RecordingEventSink {
    fn publish(&self, event: &DomainEvent) {
        self.events.borrow_mut().push(event.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    use reelhouse_domain::catalog::{Content, ContentId, StreamingService, User, UserId};

    #[test]
    fn test_records_in_order() {
        let sink = RecordingEventSink::new();
        let mut service = StreamingService::with_sink(&sink);

        let movie = Rc::new(Content::movie(ContentId::new(1), "Heat", 170, 4).unwrap());
        service.add_content(movie.clone()).unwrap();
        service.add_user(User::new(UserId::new(1), "Alice", "alice@mail.com")).unwrap();

        service.add_to_watchlist(UserId::new(1), &movie).unwrap();
        service.watch(UserId::new(1), &movie).unwrap();

        let events = sink.events();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].name(), "watchlist_added");
        assert_eq!(events[1].to_string(), "▶ Playing Movie: Heat [170 mins]");
    }

    #[test]
    fn test_drain_empties_sink() {
        let sink = RecordingEventSink::new();
        let mut service = StreamingService::with_sink(&sink);
        service.add_user(User::new(UserId::new(1), "Bob", "bob@mail.com")).unwrap();
        let movie = Rc::new(Content::movie(ContentId::new(1), "Ronin", 122, 3).unwrap());

        service.play(UserId::new(1), &movie).unwrap();

        assert_eq!(sink.drain().len(), 1);
        assert!(sink.is_empty());
    }
}
