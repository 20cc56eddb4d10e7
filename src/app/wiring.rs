use std::sync::Arc;

use crate::{
    context::{self, Database},
    storage::SqliteStore,
};
use anyhow::{Context, Result};

pub fn init_data_dir(ctx: &context::Context) -> Result<()> {
    if let Database::File(path) = &ctx.database {
        if let Some(dir) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("creating data dir {}", dir.display()))?;
        }
    }
    Ok(())
}

pub fn init_storage(ctx: &context::Context) -> Result<Arc<SqliteStore>> {
    let store = match &ctx.database {
        Database::InMemory => SqliteStore::open_in_memory(),
        Database::File(path) => SqliteStore::open(path),
    }
    .context("connecting to the catalog database")?;
    log::info!("🔌 Database connection established");
    Ok(Arc::new(store))
}
