use std::{env, fs, path::PathBuf};

use anyhow::Context;
use chrono::Utc;
use sqlx::PgPool;

use portfolio_api::{
    repositories::{project::ProjectRepository, sqlx_repo::SqlxProjectRepo},
    settings::AppConfig,
    sitegen::sitemap::render_sitemap,
    telemetry,
};

/// Writes `sitemap.xml` for the static pages plus every project. A failing
/// project query is logged and the sitemap is still emitted with the static
/// entries only.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::new().context("failed to load configuration")?;
    telemetry::init(&config.log_level);

    let output_path = env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("static/sitemap.xml"));

    let pool = PgPool::connect_lazy(&config.database_url()).context("invalid database URL")?;
    let repo = SqlxProjectRepo::new(pool);

    let projects = match repo.list_projects(None).await {
        Ok(projects) => projects,
        Err(e) => {
            tracing::error!("Failed to query projects: {e}; emitting static pages only");
            Vec::new()
        }
    };

    let sitemap = render_sitemap(&projects, Utc::now());

    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).context("failed to create output directory")?;
        }
    }
    fs::write(&output_path, &sitemap)
        .with_context(|| format!("failed to write {}", output_path.display()))?;

    println!(
        "Sitemap written to {} ({} URLs)",
        output_path.display(),
        sitemap.matches("<url>").count()
    );

    Ok(())
}
