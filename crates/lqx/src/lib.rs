//! 🍾 lqx — official liquor rate lists, flattened, searched, sorted.
//!
//! Pick a state, get its bundled rate list as a flat index of products,
//! filter it by category, search it, sort it by MRP, and look up every pack
//! size of a single product. Read-only from start to finish.
//!
//! ```text
//!   AppConfig ─▶ backends ─▶ Catalog ─┬─▶ flat_products    (memoized per state)
//!                                     ├─▶ filter_products  (query engine)
//!                                     ├─▶ product_variants (pack-size scale)
//!                                     └─▶ categories
//! ```

pub mod app_config;
pub(crate) mod backends;
pub mod catalog;
pub mod categories;
pub mod common;
pub mod query;
pub mod render;
pub mod variants;

use anyhow::{Context, Result};

pub use backends::{FileSourceConfig, InMemorySourceConfig};
pub use catalog::{Catalog, FILTER_CATEGORIES, StateInfo};
pub use categories::{Canonical, Category, normalize_category};
pub use common::{Product, SourceDocument};
pub use query::{CategoryFilter, QueryDescriptor, SortOrder};
pub use variants::{PackScale, VariantSummary};

/// 🚀 Config in, ready-to-query catalog out.
pub async fn load_catalog(app_config: &app_config::AppConfig) -> Result<Catalog> {
    Catalog::from_config(app_config)
        .await
        .context("💀 Failed to assemble the catalog from the configured states")
}
