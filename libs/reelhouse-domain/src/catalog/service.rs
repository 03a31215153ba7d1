//! Streaming service - Catalog bookkeeping and reporting
//!
//! The service owns the registries of users, plans and content, tracks how
//! often each catalog entry has been watched and builds the reports.

use std::collections::HashMap;
use std::rc::Rc;

use tracing::debug;

use super::{
    CatalogError, Content, ContentId, DomainEvent, Plan, PlanId, RecommendationFilter,
    Recommendations, Result, RevenueReport, TopWatchedReport, User, UserId, WatchTally,
};
use crate::ports::{EventSink, NoopSink, RenderError, ReportRenderer};

/// Configuration for the streaming service
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Number of titles returned by `recommend_top` (default: 3)
    pub recommend_limit: usize,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self { recommend_limit: 3 }
    }
}

/// Service aggregating users, plans and the content catalog
///
/// The service is generic over the `EventSink` that receives the events of
/// the user-facing operations routed through it (`subscribe`,
/// `add_to_watchlist`, `play`, `watch`).
///
/// Collections keep registration order. Watch counts are keyed by
/// `ContentId` and every registered entry starts at zero.
pub struct StreamingService<S = NoopSink> {
    sink: S,
    config: CatalogConfig,
    users: Vec<User>,
    plans: Vec<Rc<Plan>>,
    catalog: Vec<Rc<Content>>,
    watch_count: HashMap<ContentId, u64>,
}

impl Default for StreamingService<NoopSink> {
    fn default() -> Self {
        Self::with_sink(NoopSink)
    }
}

impl<S> StreamingService<S>
where
    S: EventSink,
{
    /// Create a new service with the given sink and configuration
    pub fn new(sink: S, config: CatalogConfig) -> Self {
        Self {
            sink,
            config,
            users: Vec::new(),
            plans: Vec::new(),
            catalog: Vec::new(),
            watch_count: HashMap::new(),
        }
    }

    /// Create a new service with default configuration
    pub fn with_sink(sink: S) -> Self {
        Self::new(sink, CatalogConfig::default())
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    // --- Registration ---

    /// Register a user
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::DuplicateUser` if the id is already taken
    pub fn add_user(&mut self, user: User) -> Result<()> {
        if self.user(user.id()).is_some() {
            return Err(CatalogError::DuplicateUser(user.id()));
        }
        debug!(user_id = %user.id(), name = user.name(), "User registered");
        self.users.push(user);
        Ok(())
    }

    /// Register a plan
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::DuplicatePlan` if the id is already taken
    pub fn add_plan(&mut self, plan: Rc<Plan>) -> Result<()> {
        if self.plan(plan.id()).is_some() {
            return Err(CatalogError::DuplicatePlan(plan.id()));
        }
        debug!(plan_id = %plan.id(), name = plan.name(), "Plan registered");
        self.plans.push(plan);
        Ok(())
    }

    /// Register a catalog entry and start its watch count at zero
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::DuplicateContent` if the id is already taken
    pub fn add_content(&mut self, content: Rc<Content>) -> Result<()> {
        if self.watch_count.contains_key(&content.id()) {
            return Err(CatalogError::DuplicateContent(content.id()));
        }
        debug!(content_id = %content.id(), title = content.title(), "Content registered");
        self.watch_count.insert(content.id(), 0);
        self.catalog.push(content);
        Ok(())
    }

    // --- Lookups ---

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn plans(&self) -> &[Rc<Plan>] {
        &self.plans
    }

    pub fn catalog(&self) -> &[Rc<Content>] {
        &self.catalog
    }

    pub fn user(&self, id: UserId) -> Option<&User> {
        self.users.iter().find(|u| u.id() == id)
    }

    pub fn plan(&self, id: PlanId) -> Option<&Rc<Plan>> {
        self.plans.iter().find(|p| p.id() == id)
    }

    pub fn content(&self, id: ContentId) -> Option<&Rc<Content>> {
        self.catalog.iter().find(|c| c.id() == id)
    }

    /// Get the number of recorded views, `None` if the entry is not registered
    pub fn watch_count(&self, id: ContentId) -> Option<u64> {
        self.watch_count.get(&id).copied()
    }

    // --- User-facing operations ---

    /// Subscribe a registered user to `plan`
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::UnknownUser` if no user has this id
    pub fn subscribe(&mut self, user_id: UserId, plan: &Rc<Plan>) -> Result<()> {
        let event = self.user_mut(user_id)?.subscribe(Rc::clone(plan));
        self.publish(event);
        Ok(())
    }

    /// Add `content` to a registered user's watchlist
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::UnknownUser` if no user has this id
    pub fn add_to_watchlist(&mut self, user_id: UserId, content: &Rc<Content>) -> Result<()> {
        let event = self.user_mut(user_id)?.add_to_watchlist(Rc::clone(content));
        self.publish(event);
        Ok(())
    }

    /// Let a registered user play `content` without counting a view
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::UnknownUser` if no user has this id
    pub fn play(&mut self, user_id: UserId, content: &Rc<Content>) -> Result<()> {
        let event = self.user_mut(user_id)?.play(Rc::clone(content));
        self.publish(event);
        Ok(())
    }

    /// Let a registered user play `content` and count the view
    ///
    /// Returns the updated watch count.
    ///
    /// # Errors
    ///
    /// - `CatalogError::UnknownUser` if no user has this id
    /// - `CatalogError::UnregisteredContent` if `content` is not in the catalog
    pub fn watch(&mut self, user_id: UserId, content: &Rc<Content>) -> Result<u64> {
        if !self.watch_count.contains_key(&content.id()) {
            return Err(CatalogError::UnregisteredContent(content.id()));
        }
        self.play(user_id, content)?;
        self.try_record_watch(content.id())
    }

    fn user_mut(&mut self, id: UserId) -> Result<&mut User> {
        self.users
            .iter_mut()
            .find(|u| u.id() == id)
            .ok_or(CatalogError::UnknownUser(id))
    }

    fn publish(&self, event: DomainEvent) {
        debug!(event_id = %event.id(), event = event.name(), "Publishing event");
        self.sink.publish(&event);
    }

    // --- Watch counts ---

    /// Count one view of a registered entry and return the new count
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::UnregisteredContent` if the entry was never
    /// passed to `add_content`
    pub fn try_record_watch(&mut self, id: ContentId) -> Result<u64> {
        let count = self
            .watch_count
            .get_mut(&id)
            .ok_or(CatalogError::UnregisteredContent(id))?;
        *count += 1;
        debug!(content_id = %id, views = *count, "Watch recorded");
        Ok(*count)
    }

    /// Count one view of a registered entry
    ///
    /// # Panics
    ///
    /// Panics if `content` was never registered with `add_content`.
    /// Recording a view for an unknown entry is a caller bug.
    pub fn record_watch(&mut self, content: &Content) -> u64 {
        self.try_record_watch(content.id()).unwrap_or_else(|err| panic!("{err}"))
    }

    // --- Recommendations ---

    /// Run a recommendation query, preserving catalog order
    pub fn recommend(&self, filter: &RecommendationFilter) -> Vec<Rc<Content>> {
        match filter {
            RecommendationFilter::Top => self
                .catalog
                .iter()
                .take(self.config.recommend_limit)
                .cloned()
                .collect(),
            RecommendationFilter::ByKind(kind) => self
                .catalog
                .iter()
                .filter(|c| c.kind().matches(kind))
                .cloned()
                .collect(),
            RecommendationFilter::MinRating(min) => self
                .catalog
                .iter()
                .filter(|c| c.rating() >= *min)
                .cloned()
                .collect(),
        }
    }

    /// The first registered titles, up to `recommend_limit`
    ///
    /// This is a fixed prefix of the catalog, not a ranking.
    pub fn recommend_top(&self) -> Vec<Rc<Content>> {
        self.recommend(&RecommendationFilter::Top)
    }

    /// Titles of the given kind ("movie", "Series", ...), ignoring case
    pub fn recommend_by_type(&self, kind: &str) -> Vec<Rc<Content>> {
        self.recommend(&RecommendationFilter::by_kind(kind))
    }

    /// Titles rated at least `min_rating`
    pub fn recommend_by_min_rating(&self, min_rating: u8) -> Vec<Rc<Content>> {
        self.recommend(&RecommendationFilter::MinRating(min_rating))
    }

    /// Run a query and package the result for a renderer
    pub fn recommendations(&self, filter: RecommendationFilter) -> Recommendations {
        let contents = self.recommend(&filter);
        Recommendations::new(filter, &contents)
    }

    // --- Reports ---

    /// Every registered title with its view count, most watched first
    ///
    /// The sort is stable over catalog order, so equal counts are listed in
    /// registration order.
    pub fn top_watched(&self) -> TopWatchedReport {
        let mut entries: Vec<WatchTally> = self
            .catalog
            .iter()
            .map(|c| WatchTally {
                content_id: c.id(),
                title: c.title().to_string(),
                views: self.watch_count.get(&c.id()).copied().unwrap_or_default(),
            })
            .collect();

        entries.sort_by(|a, b| b.views.cmp(&a.views));

        TopWatchedReport { entries }
    }

    /// Monthly revenue from the active plans of all registered users
    pub fn revenue(&self) -> RevenueReport {
        let paying_users = self.users.iter().filter(|u| u.active_plan().is_some()).count();

        RevenueReport {
            total: self
                .users
                .iter()
                .filter_map(|u| u.active_plan())
                .map(|p| p.monthly_price())
                .sum(),
            paying_users,
            unsubscribed_users: self.users.len() - paying_users,
        }
    }

    /// Build and render the top-watched report
    pub fn render_top_watched<R: ReportRenderer>(
        &self,
        renderer: &R,
    ) -> std::result::Result<String, RenderError> {
        renderer.render_top_watched(&self.top_watched())
    }

    /// Build and render the revenue report
    pub fn render_revenue<R: ReportRenderer>(
        &self,
        renderer: &R,
    ) -> std::result::Result<String, RenderError> {
        renderer.render_revenue(&self.revenue())
    }
}
