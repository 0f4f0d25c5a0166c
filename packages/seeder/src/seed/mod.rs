//! First-run seeding of tags, authors and blog posts.
//!
//! [`bootstrap`] is called once at startup. It checks the first-run flag and,
//! on the very first start of an environment, grants public read access and
//! imports the seed document through [`SeedImporter`].

pub mod content_type;
pub mod data;
pub mod entries;
pub mod first_run;
pub mod importer;
pub mod media;
pub mod permissions;
pub mod store;

#[cfg(test)]
mod memory;

use std::path::PathBuf;
use std::sync::Arc;

use tracing::{error, info};

pub use data::SeedData;
pub use importer::{ImportReport, SeedImporter};
pub use store::{ContentStore, MediaLibrary, PermissionStore, StateStore};

use crate::error::Result;
use first_run::is_first_run;

/// Stores and settings the seed workflow runs against.
#[derive(Clone)]
pub struct SeedContext {
    pub state: Arc<dyn StateStore>,
    pub content: Arc<dyn ContentStore>,
    pub permissions: Arc<dyn PermissionStore>,
    pub media: Arc<dyn MediaLibrary>,
    /// Deployment environment the first-run flag belongs to.
    pub environment: String,
    /// Directory the seed document's media filenames are relative to.
    pub assets_dir: PathBuf,
}

/// How a bootstrap call ended.
#[derive(Debug)]
pub enum SeedOutcome {
    /// The flag was already set; nothing was written.
    AlreadySeeded,
    Succeeded(ImportReport),
    /// The import stopped early. Entries written before the error remain.
    Failed(String),
}

/// Seed the stores if this is the environment's first start.
///
/// Never fails: errors are logged and reported through [`SeedOutcome::Failed`]
/// so startup continues either way.
pub async fn bootstrap(ctx: &SeedContext, data: &SeedData) -> SeedOutcome {
    match run(ctx, data).await {
        Ok(None) => {
            info!("Seed data has already been imported, skipping");
            SeedOutcome::AlreadySeeded
        }
        Ok(Some(report)) => {
            info!("Ready to go");
            SeedOutcome::Succeeded(report)
        }
        Err(e) => {
            error!(error = %e, "Could not import seed data");
            SeedOutcome::Failed(e.to_string())
        }
    }
}

async fn run(ctx: &SeedContext, data: &SeedData) -> Result<Option<ImportReport>> {
    if !is_first_run(&*ctx.state, &ctx.environment).await? {
        return Ok(None);
    }

    info!(environment = %ctx.environment, "First run, importing seed data");
    let report = SeedImporter::new(ctx).import(data).await?;
    Ok(Some(report))
}
