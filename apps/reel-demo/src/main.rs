//! ReelDemo - Streaming catalog walkthrough
//!
//! Builds a small catalog, replays a fixed viewing session and prints the
//! top-watched, revenue and recommendation reports.

mod config;
mod scenario;

use std::rc::Rc;

use anyhow::{Context, Result};
use reelhouse_console::{RecordingEventSink, ReportFormat, TracingEventSink};
use reelhouse_domain::catalog::{RecommendationFilter, StreamingService};
use reelhouse_domain::ports::{EventSink, ReportRenderer};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use config::DemoConfig;

fn main() -> Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    info!("Starting ReelDemo");

    let config = DemoConfig::from_env().context("Failed to load configuration")?;
    info!(
        format = %config.report_format,
        recommend_kind = %config.recommend_kind,
        recommend_limit = config.catalog.recommend_limit,
        "Configuration loaded"
    );

    // Text mode prints the session transcript; JSON mode keeps stdout for
    // the reports and sends events to the log instead.
    let transcript = Rc::new(RecordingEventSink::new());
    let sink: Rc<dyn EventSink> = match config.report_format {
        ReportFormat::Text => transcript.clone(),
        ReportFormat::Json => Rc::new(TracingEventSink),
    };
    let mut service = StreamingService::new(sink, config.catalog.clone());

    scenario::run(&mut service).context("Demo session failed")?;

    let renderer = config.report_format.renderer();

    if !transcript.is_empty() {
        for event in transcript.drain() {
            debug!(event_id = %event.id(), event = event.name(), "Replaying event");
            println!("{}", event);
        }
        println!();
    }

    let top = service
        .render_top_watched(&renderer)
        .context("Failed to render top-watched report")?;
    print!("{}", top);

    let revenue = service
        .render_revenue(&renderer)
        .context("Failed to render revenue report")?;
    print!("{}", revenue);

    let recommendations =
        service.recommendations(RecommendationFilter::from(config.recommend_kind));
    let rendered = renderer
        .render_recommendations(&recommendations)
        .context("Failed to render recommendations")?;
    print!("{}", rendered);

    info!("ReelDemo finished");
    Ok(())
}
