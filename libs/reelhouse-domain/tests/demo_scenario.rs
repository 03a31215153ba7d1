//! Integration test replaying the demo session
//!
//! These tests verify that:
//! 1. The full driver sequence produces the expected watch counts
//! 2. Revenue sums the two subscribed plans exactly
//! 3. Every routed action emits exactly one event, in order
//! 4. Recommendations keep catalog order

use std::cell::RefCell;
use std::rc::Rc;

use reelhouse_domain::catalog::{
    Content, ContentId, DomainEvent, EventKind, Plan, PlanId, Quality, RecommendationFilter,
    StreamingService, User, UserId,
};
use reelhouse_domain::ports::EventSink;
use rust_decimal_macros::dec;

/// Collects events in memory
#[derive(Default)]
struct CollectingSink {
    events: RefCell<Vec<DomainEvent>>,
}

impl EventSink for CollectingSink {
    fn publish(&self, event: &DomainEvent) {
        self.events.borrow_mut().push(event.clone());
    }
}

struct Session {
    service: StreamingService<Rc<CollectingSink>>,
    sink: Rc<CollectingSink>,
    inception: Rc<Content>,
    stranger_things: Rc<Content>,
    interstellar: Rc<Content>,
}

const ALICE: UserId = UserId::new(1);
const BOB: UserId = UserId::new(2);

fn run_session() -> Session {
    let sink = Rc::new(CollectingSink::default());
    let mut service = StreamingService::with_sink(Rc::clone(&sink));

    let basic = Rc::new(Plan::new(PlanId::new(1), "Basic", dec!(8.99), 1, Quality::Sd).unwrap());
    let premium =
        Rc::new(Plan::new(PlanId::new(2), "Premium", dec!(15.99), 4, Quality::UltraHd).unwrap());
    service.add_plan(basic.clone()).unwrap();
    service.add_plan(premium.clone()).unwrap();

    let inception = Rc::new(Content::movie(ContentId::new(101), "Inception", 148, 5).unwrap());
    let stranger_things =
        Rc::new(Content::series(ContentId::new(201), "Stranger Things", 25, 4).unwrap());
    let interstellar =
        Rc::new(Content::movie(ContentId::new(102), "Interstellar", 169, 5).unwrap());
    for content in [&inception, &stranger_things, &interstellar] {
        service.add_content(Rc::clone(content)).unwrap();
    }

    service.add_user(User::new(ALICE, "Alice", "alice@mail.com")).unwrap();
    service.add_user(User::new(BOB, "Bob", "bob@mail.com")).unwrap();

    service.subscribe(ALICE, &premium).unwrap();
    service.subscribe(BOB, &basic).unwrap();

    service.add_to_watchlist(ALICE, &inception).unwrap();
    service.play(ALICE, &inception).unwrap();
    service.record_watch(&inception);

    service.add_to_watchlist(BOB, &stranger_things).unwrap();
    service.play(BOB, &stranger_things).unwrap();
    service.record_watch(&stranger_things);
    service.play(BOB, &interstellar).unwrap();
    service.record_watch(&interstellar);

    Session {
        service,
        sink,
        inception,
        stranger_things,
        interstellar,
    }
}

#[test]
fn test_session_watch_counts() {
    let session = run_session();
    let service = &session.service;

    for content in [&session.inception, &session.stranger_things, &session.interstellar] {
        assert_eq!(service.watch_count(content.id()), Some(1));
    }

    // All tied at one view: registration order is kept
    let report = service.top_watched();
    assert_eq!(
        report.titles(),
        vec!["Inception", "Stranger Things", "Interstellar"]
    );
}

#[test]
fn test_session_revenue() {
    let session = run_session();
    let report = session.service.revenue();

    assert_eq!(report.total, dec!(24.98));
    assert_eq!(report.total.to_string(), "24.98");
    assert_eq!(report.paying_users, 2);
}

#[test]
fn test_session_events_in_order() {
    let session = run_session();
    let events = session.sink.events.borrow();

    let names: Vec<&str> = events.iter().map(|e| e.name()).collect();
    assert_eq!(
        names,
        vec![
            "subscribed",
            "subscribed",
            "watchlist_added",
            "played",
            "watchlist_added",
            "played",
            "played",
        ]
    );

    assert_eq!(events[0].to_string(), "Alice subscribed to Premium");
    assert_eq!(events[1].to_string(), "Bob subscribed to Basic");
    assert_eq!(events[3].to_string(), "▶ Playing Movie: Inception [148 mins]");
    assert_eq!(
        events[5].to_string(),
        "▶ Playing Series: Stranger Things [Episodes: 25]"
    );
    assert!(matches!(
        events[6].kind(),
        EventKind::Played { user, .. } if user == "Bob"
    ));
}

#[test]
fn test_session_histories() {
    let session = run_session();
    let service = &session.service;

    let alice = service.user(ALICE).unwrap();
    let bob = service.user(BOB).unwrap();

    assert_eq!(alice.history().len(), 1);
    assert_eq!(bob.history().len(), 2);
    assert_eq!(bob.watchlist().len(), 1);
    assert_eq!(bob.active_plan().unwrap().name(), "Basic");
}

#[test]
fn test_session_movie_recommendations() {
    let session = run_session();
    let recs = session
        .service
        .recommendations(RecommendationFilter::by_kind("Movie"));

    let titles: Vec<&str> = recs.items.iter().map(|i| i.title.as_str()).collect();
    assert_eq!(titles, vec!["Inception", "Interstellar"]);
}

#[test]
fn test_repeated_plays_grow_history_and_counts() {
    let mut session = run_session();

    for _ in 0..2 {
        session.service.watch(ALICE, &session.interstellar).unwrap();
    }

    let service = &session.service;
    assert_eq!(service.user(ALICE).unwrap().history().len(), 3);
    assert_eq!(service.watch_count(session.interstellar.id()), Some(3));
    assert_eq!(service.top_watched().entries[0].title, "Interstellar");
}

#[test]
fn test_price_change_is_reflected_in_revenue() {
    let session = run_session();
    let premium = session.service.plan(PlanId::new(2)).unwrap();

    premium.set_monthly_price(dec!(17.99));
    assert_eq!(session.service.revenue().total, dec!(26.98));

    premium.set_monthly_price(dec!(-0.01));
    assert_eq!(session.service.revenue().total, dec!(26.98));
}
