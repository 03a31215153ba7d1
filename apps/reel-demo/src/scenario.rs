//! The fixed demo session

use std::rc::Rc;

use anyhow::Result;
use reelhouse_domain::catalog::{
    Content, ContentId, Plan, PlanId, Quality, StreamingService, User, UserId,
};
use reelhouse_domain::ports::EventSink;
use rust_decimal_macros::dec;
use tracing::info;

const ALICE: UserId = UserId::new(1);
const BOB: UserId = UserId::new(2);

/// Populate the service and replay the demo viewing session
///
/// Plans and content are registered first, then Alice (Premium) and Bob
/// (Basic) subscribe, save titles and watch them.
pub fn run<S: EventSink>(service: &mut StreamingService<S>) -> Result<()> {
    let basic = Rc::new(Plan::new(PlanId::new(1), "Basic", dec!(8.99), 1, Quality::Sd)?);
    let premium = Rc::new(Plan::new(PlanId::new(2), "Premium", dec!(15.99), 4, Quality::UltraHd)?);
    service.add_plan(Rc::clone(&basic))?;
    service.add_plan(Rc::clone(&premium))?;
    info!(plans = service.plans().len(), "Plans registered");

    let inception = Rc::new(Content::movie(ContentId::new(101), "Inception", 148, 5)?);
    let stranger_things = Rc::new(Content::series(ContentId::new(201), "Stranger Things", 25, 4)?);
    let interstellar = Rc::new(Content::movie(ContentId::new(102), "Interstellar", 169, 5)?);
    for content in [&inception, &stranger_things, &interstellar] {
        service.add_content(Rc::clone(content))?;
    }
    info!(titles = service.catalog().len(), "Catalog populated");

    service.add_user(User::new(ALICE, "Alice", "alice@mail.com"))?;
    service.add_user(User::new(BOB, "Bob", "bob@mail.com"))?;

    service.subscribe(ALICE, &premium)?;
    service.subscribe(BOB, &basic)?;

    service.add_to_watchlist(ALICE, &inception)?;
    service.watch(ALICE, &inception)?;

    service.add_to_watchlist(BOB, &stranger_things)?;
    service.watch(BOB, &stranger_things)?;
    service.watch(BOB, &interstellar)?;

    info!(users = service.users().len(), "Session replayed");
    Ok(())
}
