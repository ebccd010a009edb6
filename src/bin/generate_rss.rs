use std::{env, fs, path::PathBuf};

use anyhow::Context;
use chrono::Utc;
use sqlx::PgPool;

use portfolio_api::{
    repositories::{project::ProjectRepository, sqlx_repo::SqlxProjectRepo},
    settings::AppConfig,
    sitegen::rss::{RSS_ITEM_LIMIT, render_rss},
    telemetry,
};

/// Writes `feed.xml` with the most recent projects. A failing project query
/// is logged and the feed is still emitted without items.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::new().context("failed to load configuration")?;
    telemetry::init(&config.log_level);

    let output_path = env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("static/feed.xml"));

    let pool = PgPool::connect_lazy(&config.database_url()).context("invalid database URL")?;
    let repo = SqlxProjectRepo::new(pool);

    let projects = match repo.list_recent_projects(RSS_ITEM_LIMIT).await {
        Ok(projects) => projects,
        Err(e) => {
            tracing::error!("Failed to query projects: {e}; emitting the feed without items");
            Vec::new()
        }
    };

    let feed = render_rss(&projects, Utc::now());

    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).context("failed to create output directory")?;
        }
    }
    fs::write(&output_path, &feed)
        .with_context(|| format!("failed to write {}", output_path.display()))?;

    println!(
        "RSS feed written to {} ({} items)",
        output_path.display(),
        feed.matches("<item>").count()
    );

    Ok(())
}
