//! Catalog cache commands.

use crate::cli::context::AppContext;
use crate::core::store::CATALOG_CACHE_SLOT;
use anyhow::Result;
use colored::Colorize;

/// Delete the cached catalog.
pub fn clear_cache(ctx: &AppContext) -> Result<()> {
    ctx.catalog.clear_cache()?;
    println!("{}", "Catalog cache cleared".green());
    Ok(())
}

/// Report whether a cached catalog exists.
pub fn cache_status(ctx: &AppContext) -> Result<()> {
    let path = ctx.config.data_dir.join(CATALOG_CACHE_SLOT);
    if ctx.catalog.has_cache() {
        println!("{} {}", "Cached:".bold(), path.display());
    } else {
        println!("{}", "No cached catalog. It will be downloaded on next use.".yellow());
        println!("  Source: {}", ctx.config.catalog.url);
        println!("  Timeout: {}s", ctx.catalog.timeout().as_secs());
    }
    Ok(())
}
