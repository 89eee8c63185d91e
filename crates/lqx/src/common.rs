//! 📦 Common data structures — the nouns of lqx.
//!
//! 🎬 Two shapes live here. The nested one, exactly as the excise department
//! published it (`SourceDocument` → `Manufacturer` → `SourceProduct`), and the
//! flat one every screen actually wants (`Product`). The flattener in
//! [`crate::catalog`] walks the first to produce the second.
//!
//! ⚠️ Both are read-only once loaded. Nobody edits a government rate list.
//! Not even the government, until next financial year. 🦆

use serde::{Deserialize, Serialize};

use crate::categories::Category;

/// 📜 One state's bundled rate list, nested the way it was published.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceDocument {
    pub document: DocumentMeta,
    #[serde(default)]
    pub manufacturers: Vec<Manufacturer>,
}

/// 🏛️ Document-level metadata. Copied onto every flattened record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentMeta {
    #[serde(default)]
    pub state: String,
    /// 🔒 Older single-state lists don't name the authority at all.
    #[serde(default)]
    pub authority: Option<String>,
    #[serde(default)]
    pub financial_year: String,
}

/// 🏭 A manufacturer and everything it bottles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Manufacturer {
    pub name: String,
    #[serde(default)]
    pub products: Vec<SourceProduct>,
}

/// 🍾 One (label, pack size, price) row straight from the source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceProduct {
    pub label_name: String,
    /// Free text. "IMFL Whisky", "BEER STRONG", "cl", null. Anything goes.
    #[serde(default)]
    pub category: Option<String>,
    pub pack_size: String,
    pub mrp: f64,
    #[serde(default)]
    pub effective_date: String,
}

impl SourceDocument {
    /// 📊 Total products across all manufacturers.
    pub fn product_count(&self) -> usize {
        self.manufacturers.iter().map(|m| m.products.len()).sum()
    }
}

/// 🎯 A flattened, denormalized product record: one product in one pack size.
///
/// `(brand_name, label_name, state_key)` names a variant group. The records
/// of a group differ by `pack_size` (usually; the source data is trusted, not
/// checked).
///
/// Serializes with camelCase field names (`brandName`, `packSize`, ...)
/// because that is the shape every consumer of the rate list already speaks.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// `"{state_key}_{n}"`, n counting from 0 in source order.
    pub id: String,
    pub brand_name: String,
    pub label_name: String,
    pub category: Category,
    /// Raw, as published. "180ML", "750 ML", "1LTR". Not canonicalized.
    pub pack_size: String,
    pub mrp: f64,
    /// Opaque date label. Never parsed.
    pub effective_date: String,
    pub state: String,
    /// Empty when the source document names no authority.
    pub authority: String,
    pub year: String,
    pub state_key: String,
}

impl Product {
    /// 🔍 Case-insensitive substring match over brand, label, and category.
    ///
    /// `needle` must already be lower-cased and trimmed; the query engine does
    /// that once per query instead of once per record.
    pub fn matches_search(&self, needle: &str) -> bool {
        self.brand_name.to_lowercase().contains(needle)
            || self.label_name.to_lowercase().contains(needle)
            || self.category.as_str().to_lowercase().contains(needle)
    }
}
