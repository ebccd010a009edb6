use std::env;

use anyhow::{Context, bail};

use portfolio_api::{
    db::postgres::create_pool,
    repositories::{project::ProjectRepository, sqlx_repo::SqlxProjectRepo},
    settings::AppConfig,
    storage::{
        images::{DEFAULT_LIST_LIMIT, get_storage_images},
        supabase::SupabaseStorage,
    },
    telemetry,
};

const DEFAULT_BUCKET: &str = "screenshots";

/// Copies the image URLs of the storage folder `project{n}` into the
/// screenshots of the project whose priority is `n`.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let mut args = env::args().skip(1);

    let project_number: i32 = match args.next() {
        Some(raw) => raw
            .parse()
            .with_context(|| format!("invalid project number: {raw}"))?,
        None => bail!("usage: sync_screenshots <project_number> [bucket]"),
    };
    if project_number < 1 {
        bail!("project number must be 1 or greater");
    }
    let bucket = args.next().unwrap_or_else(|| DEFAULT_BUCKET.to_string());

    let config = AppConfig::new().context("failed to load configuration")?;
    telemetry::init(&config.log_level);

    let Some(storage) = SupabaseStorage::from_config(&config) else {
        bail!("storage endpoint or access key is not configured");
    };

    let folder = format!("project{project_number}");
    tracing::info!("Fetching images from bucket '{bucket}', folder '{folder}'");

    let image_urls = get_storage_images(&storage, &bucket, &folder, DEFAULT_LIST_LIMIT).await;
    if image_urls.is_empty() {
        tracing::warn!("No image URLs were returned. Check that:");
        tracing::warn!("  1. the '{bucket}' bucket exists");
        tracing::warn!("  2. the '{folder}/' folder contains files");
        tracing::warn!("  3. the bucket is set to public");
        tracing::warn!("  4. the storage endpoint and access key are configured correctly");
        bail!("no images found in folder '{folder}'");
    }
    tracing::info!("Found {} images", image_urls.len());

    let pool = create_pool(&config.database_url())
        .await
        .context("failed to connect to database")?;
    let repo = SqlxProjectRepo::new(pool);

    let project = match repo.get_project_by_priority(project_number).await? {
        Some(project) => project,
        None => bail!(
            "no project with priority {project_number}; create the project and set its priority first"
        ),
    };
    tracing::info!("Updating screenshots for project '{}' ({})", project.title, project.id);

    let updated = repo
        .update_project_screenshots(&project.id, &image_urls)
        .await?;
    tracing::info!(
        "Project '{}' now has {} screenshots",
        updated.title,
        image_urls.len()
    );

    for (i, url) in image_urls.iter().take(3).enumerate() {
        tracing::info!("  {}. {url}", i + 1);
    }
    if image_urls.len() > 3 {
        tracing::info!("  ... and {} more", image_urls.len() - 3);
    }

    Ok(())
}
