use std::sync::Arc;

use anyhow::Context;
use common::storage::FilesystemBlobStore;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use seeder::config::SeederAppConfig;
use seeder::database::init_db;
use seeder::roles::ensure_default_roles;
use seeder::seed::{self, SeedContext, SeedData, SeedOutcome};
use seeder::store::DatabaseStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let config = SeederAppConfig::load().context("Failed to load config")?;
    info!(environment = %config.seed.environment, "Seeder starting");

    let db = init_db(&config.database.url)
        .await
        .context("Failed to initialize database")?;

    if config.seed.ensure_roles {
        ensure_default_roles(&db)
            .await
            .context("Failed to seed default roles")?;
    }

    let blobs = FilesystemBlobStore::new(
        config.storage.data_dir.clone(),
        config.storage.max_blob_size,
    )
    .await
    .context("Failed to initialize blob storage")?;

    let store = Arc::new(DatabaseStore::new(db, Arc::new(blobs)));
    let ctx = SeedContext {
        state: store.clone(),
        content: store.clone(),
        permissions: store.clone(),
        media: store,
        environment: config.seed.environment.clone(),
        assets_dir: config.seed.assets_path(),
    };

    // Seeding is best-effort: a failed import is logged, never fatal.
    let data_path = config.seed.data_path();
    match SeedData::load(&data_path).await {
        Ok(data) => {
            if let SeedOutcome::Succeeded(report) = seed::bootstrap(&ctx, &data).await {
                info!(?report, "Seed data imported");
            }
        }
        Err(e) => {
            error!(path = %data_path.display(), error = %e, "Could not read seed data");
        }
    }

    Ok(())
}
