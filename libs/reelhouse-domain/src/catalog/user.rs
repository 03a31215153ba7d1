//! User accounts

use std::rc::Rc;

use crate::catalog::content::Content;
use crate::catalog::event::{DomainEvent, EventKind};
use crate::catalog::ids::UserId;
use crate::catalog::plan::Plan;

/// A viewer with an optional plan, a watchlist and a play history
///
/// The plan and every content entry are shared references. The history is
/// an append-only log: replaying a title appends it again.
#[derive(Debug, Clone)]
pub struct User {
    id: UserId,
    name: String,
    email: String,
    active_plan: Option<Rc<Plan>>,
    watchlist: Vec<Rc<Content>>,
    history: Vec<Rc<Content>>,
}

impl User {
    pub fn new(id: UserId, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            active_plan: None,
            watchlist: Vec::new(),
            history: Vec::new(),
        }
    }

    pub fn id(&self) -> UserId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn active_plan(&self) -> Option<&Rc<Plan>> {
        self.active_plan.as_ref()
    }

    pub fn watchlist(&self) -> &[Rc<Content>] {
        &self.watchlist
    }

    pub fn history(&self) -> &[Rc<Content>] {
        &self.history
    }

    /// Switch to `plan`, replacing any previous subscription
    #[must_use = "the subscription event should be published"]
    pub fn subscribe(&mut self, plan: Rc<Plan>) -> DomainEvent {
        let event = DomainEvent::new(EventKind::Subscribed {
            user: self.name.clone(),
            plan: plan.name().to_string(),
        });
        self.active_plan = Some(plan);
        event
    }

    /// Save `content` for later; duplicates are kept
    #[must_use = "the watchlist event should be published"]
    pub fn add_to_watchlist(&mut self, content: Rc<Content>) -> DomainEvent {
        let event = DomainEvent::new(EventKind::WatchlistAdded {
            user: self.name.clone(),
            title: content.title().to_string(),
        });
        self.watchlist.push(content);
        event
    }

    /// Play `content` and log it in the history
    #[must_use = "the playback event should be published"]
    pub fn play(&mut self, content: Rc<Content>) -> DomainEvent {
        let playback = content.play();
        self.history.push(content);
        DomainEvent::new(EventKind::Played {
            user: self.name.clone(),
            playback,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::content::Playback;
    use crate::catalog::ids::{ContentId, PlanId};
    use crate::catalog::plan::Quality;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn alice() -> User {
        User::new(UserId::new(1), "Alice", "alice@mail.com")
    }

    fn plan(id: u32, name: &str, price: Decimal) -> Rc<Plan> {
        Rc::new(Plan::new(PlanId::new(id), name, price, 1, Quality::Sd).unwrap())
    }

    fn inception() -> Rc<Content> {
        Rc::new(Content::movie(ContentId::new(101), "Inception", 148, 5).unwrap())
    }

    #[test]
    fn test_new_user_has_no_plan() {
        let user = alice();

        assert_eq!(user.id(), UserId::new(1));
        assert_eq!(user.name(), "Alice");
        assert_eq!(user.email(), "alice@mail.com");
        assert!(user.active_plan().is_none());
        assert!(user.watchlist().is_empty());
        assert!(user.history().is_empty());
    }

    #[test]
    fn test_subscribe_replaces_plan() {
        let mut user = alice();
        let basic = plan(1, "Basic", dec!(8.99));
        let premium = plan(2, "Premium", dec!(15.99));

        let _ = user.subscribe(basic);
        let event = user.subscribe(premium.clone());

        assert!(Rc::ptr_eq(user.active_plan().unwrap(), &premium));
        assert_eq!(
            event.kind(),
            &EventKind::Subscribed {
                user: "Alice".to_string(),
                plan: "Premium".to_string()
            }
        );
    }

    #[test]
    fn test_plan_price_change_is_shared() {
        let mut user = alice();
        let basic = plan(1, "Basic", dec!(8.99));
        let _ = user.subscribe(basic.clone());

        basic.set_monthly_price(dec!(9.99));

        assert_eq!(user.active_plan().unwrap().monthly_price(), dec!(9.99));
    }

    #[test]
    fn test_watchlist_keeps_duplicates() {
        let mut user = alice();
        let movie = inception();

        let first = user.add_to_watchlist(movie.clone());
        let _ = user.add_to_watchlist(movie);

        assert_eq!(user.watchlist().len(), 2);
        assert_eq!(first.to_string(), "Inception added to Alice's watchlist.");
    }

    #[test]
    fn test_play_appends_to_history_every_time() {
        let mut user = alice();
        let movie = inception();

        for _ in 0..3 {
            let _ = user.play(movie.clone());
        }

        assert_eq!(user.history().len(), 3);
        assert!(user.history().iter().all(|c| c.id() == ContentId::new(101)));
    }

    #[test]
    fn test_play_event_carries_playback() {
        let mut user = alice();
        let event = user.play(inception());

        match event.kind() {
            EventKind::Played { user, playback } => {
                assert_eq!(user, "Alice");
                assert!(matches!(playback, Playback::Movie { minutes: 148, .. }));
            }
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[test]
    fn test_play_does_not_touch_watchlist() {
        let mut user = alice();
        let _ = user.play(inception());
        assert!(user.watchlist().is_empty());
    }
}
