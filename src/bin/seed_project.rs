use std::{env, fs};

use anyhow::{Context, bail};

use portfolio_api::{
    db::postgres::create_pool,
    entities::project::NewProject,
    repositories::{project::ProjectRepository, sqlx_repo::SqlxProjectRepo},
    settings::AppConfig,
    telemetry,
};

/// Inserts one project from a JSON payload file and prints the generated id.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let Some(path) = env::args().nth(1) else {
        bail!("usage: seed_project <project.json>");
    };

    let config = AppConfig::new().context("failed to load configuration")?;
    telemetry::init(&config.log_level);

    let raw = fs::read_to_string(&path).with_context(|| format!("failed to read {path}"))?;
    let project: NewProject = serde_json::from_str(&raw).context("invalid project payload")?;

    let pool = create_pool(&config.database_url())
        .await
        .context("failed to connect to database")?;
    let repo = SqlxProjectRepo::new(pool);

    let id = repo.create_project(&project).await?;
    println!("Created project '{}' with id {id}", project.title);

    Ok(())
}
