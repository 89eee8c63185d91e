//! 📚 Catalog — the application context that owns every loaded rate list
//! and the flattened index derived from each.
//!
//! 🏗️ Flattening walks manufacturers, then each manufacturer's products, in
//! source order, minting one [`Product`] per row with ids `"{state}_{n}"`.
//!
//! 🔒 The cache: every registered state gets a `OnceLock` slot at construction.
//! The map of slots never changes after that, so lookups need no lock, and
//! `get_or_init` builds each state's index at most once even when several
//! threads ask for it at the same moment. Everyone after that gets a clone of
//! the same `Arc`. Read-only, forever, no invalidation. Rate lists don't
//! change mid-process and neither do we. 🦆

use std::collections::{BTreeSet, HashMap};
use std::sync::{Arc, OnceLock};

use anyhow::{Context, Result, bail};
use futures::future::try_join_all;
use tracing::{debug, info};

use crate::app_config::{AppConfig, StateEntry};
use crate::backends::{Source, SourceBackend};
use crate::categories::{Canonical, normalize_category};
use crate::common::{Product, SourceDocument};
use crate::variants::PackScale;

/// 🎯 Used when nothing is configured at all.
pub const FALLBACK_STATE: &str = "jharkhand";

/// 🏷️ The category filter list: "All" first, then the canonical set in
/// filter-bar order. Independent of what any particular state stocks.
pub const FILTER_CATEGORIES: [&str; 12] = [
    "All",
    Canonical::Whisky.name(),
    Canonical::Beer.name(),
    Canonical::Rum.name(),
    Canonical::Vodka.name(),
    Canonical::Wine.name(),
    Canonical::Gin.name(),
    Canonical::Cl.name(),
    Canonical::Brandy.name(),
    Canonical::Lab.name(),
    Canonical::Tequila.name(),
    Canonical::Liqueur.name(),
];

/// 🏛️ What the catalog knows about a state, minus the data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateInfo {
    pub key: String,
    pub label: String,
    pub authority: Option<String>,
}

impl From<&StateEntry> for StateInfo {
    fn from(entry: &StateEntry) -> Self {
        Self {
            key: entry.key.clone(),
            label: entry.label.clone(),
            authority: entry.authority.clone(),
        }
    }
}

/// 📦 A loaded document plus its lazily built flat index.
#[derive(Debug)]
struct StateSlot {
    document: SourceDocument,
    flat: OnceLock<Arc<[Product]>>,
}

/// 📚 The catalog. Build it once, share it by reference, query it forever.
#[derive(Debug)]
pub struct Catalog {
    default_state: String,
    states: Vec<StateInfo>,
    slots: HashMap<String, StateSlot>,
    pack_scale: PackScale,
}

impl Catalog {
    /// 🏗️ Assemble a catalog from already-loaded documents.
    ///
    /// 💀 Fails only on a duplicate state key.
    pub fn new(
        default_state: Option<String>,
        loaded: Vec<(StateInfo, SourceDocument)>,
        pack_scale: PackScale,
    ) -> Result<Self> {
        let default_state = default_state
            .or_else(|| loaded.first().map(|(info, _)| info.key.clone()))
            .unwrap_or_else(|| FALLBACK_STATE.to_string());

        let mut states = Vec::with_capacity(loaded.len());
        let mut slots = HashMap::with_capacity(loaded.len());
        for (mut info, document) in loaded {
            if slots.contains_key(&info.key) {
                bail!(
                    "💀 State '{}' is registered twice. One key, one rate list.",
                    info.key
                );
            }
            if info.authority.is_none() {
                info.authority = document.document.authority.clone();
            }
            slots.insert(
                info.key.clone(),
                StateSlot {
                    document,
                    flat: OnceLock::new(),
                },
            );
            states.push(info);
        }

        if !slots.contains_key(&default_state) {
            debug!(
                "⚠️ default state '{}' has no rate list; unqualified queries come back empty",
                default_state
            );
        }

        Ok(Self {
            default_state,
            states,
            slots,
            pack_scale,
        })
    }

    /// 🚀 Load every configured state concurrently, then assemble.
    pub async fn from_config(config: &AppConfig) -> Result<Self> {
        let loads = config.states.iter().map(|entry| async move {
            let mut backend = SourceBackend::from_config(&entry.source);
            let document = backend
                .load_document()
                .await
                .context(format!("💀 Failed to load the rate list for state '{}'", entry.key))?;
            info!(
                "📜 loaded '{}' ({} manufacturers, {} products)",
                entry.key,
                document.manufacturers.len(),
                document.product_count()
            );
            anyhow::Ok((StateInfo::from(entry), document))
        });
        let loaded = try_join_all(loads).await?;

        Catalog::new(
            config.default_state.clone(),
            loaded,
            PackScale::new(&config.pack_scale),
        )
    }

    pub fn default_state(&self) -> &str {
        &self.default_state
    }

    /// 🏛️ Registered states, in registration order.
    pub fn states(&self) -> &[StateInfo] {
        &self.states
    }

    pub fn state(&self, state_key: &str) -> Option<&StateInfo> {
        self.states.iter().find(|s| s.key == state_key)
    }

    pub fn pack_scale(&self) -> &PackScale {
        &self.pack_scale
    }

    /// `None` → the default state.
    pub fn resolve_state<'a>(&'a self, state_key: Option<&'a str>) -> &'a str {
        state_key.unwrap_or(&self.default_state)
    }

    /// 📋 The flattened index for a state, built on first use and cached.
    ///
    /// Unknown state → empty. Not an error, not a panic, just nothing.
    /// Repeated calls for the same state return the same `Arc`.
    pub fn flat_products(&self, state_key: Option<&str>) -> Arc<[Product]> {
        let state_key = self.resolve_state(state_key);
        let Some(slot) = self.slots.get(state_key) else {
            debug!("🤷 no rate list for state '{}', returning nothing", state_key);
            return Arc::from(Vec::new());
        };

        if let Some(cached) = slot.flat.get() {
            debug!("♻️ flat index cache hit for '{}'", state_key);
            return Arc::clone(cached);
        }

        Arc::clone(slot.flat.get_or_init(|| {
            let flat = flatten(state_key, &slot.document);
            info!("🏗️ flattened {} products for '{}'", flat.len(), state_key);
            Arc::from(flat)
        }))
    }

    /// 🏷️ `"All"` then every category present in the state's data, sorted by name.
    pub fn categories(&self, state_key: Option<&str>) -> Vec<String> {
        let present: BTreeSet<String> = self
            .flat_products(state_key)
            .iter()
            .map(|p| p.category.to_string())
            .collect();

        std::iter::once("All".to_string()).chain(present).collect()
    }
}

/// 🔄 The flattener proper: nested document in, flat records out.
///
/// Pure. Source order preserved. Ids count from 0 across the whole document,
/// not per manufacturer.
pub fn flatten(state_key: &str, source: &SourceDocument) -> Vec<Product> {
    let meta = &source.document;
    let authority = meta.authority.clone().unwrap_or_default();

    source
        .manufacturers
        .iter()
        .flat_map(|manufacturer| {
            manufacturer
                .products
                .iter()
                .map(move |product| (manufacturer, product))
        })
        .enumerate()
        .map(|(n, (manufacturer, product))| Product {
            id: format!("{state_key}_{n}"),
            brand_name: manufacturer.name.clone(),
            label_name: product.label_name.clone(),
            category: normalize_category(product.category.as_deref()),
            pack_size: product.pack_size.clone(),
            mrp: product.mrp,
            effective_date: product.effective_date.clone(),
            state: meta.state.clone(),
            authority: authority.clone(),
            year: meta.financial_year.clone(),
            state_key: state_key.to_string(),
        })
        .collect()
}
