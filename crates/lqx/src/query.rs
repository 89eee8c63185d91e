//! 🔎 Query Engine — category filter, text search, price sort.
//!
//! ```text
//!   flat index ─▶ category == c? ─▶ brand|label|category ∋ q? ─▶ sort by mrp ─▶ Vec
//! ```
//!
//! Never mutates the cached index, never fails. A descriptor with a garbage
//! field gets that field's default instead of an error; an unknown state gets
//! an empty list. The "no results" screen is someone else's problem.

use std::convert::Infallible;
use std::str::FromStr;

use serde::{Deserialize, Deserializer};
use tracing::trace;

use crate::catalog::Catalog;
use crate::categories::Category;
use crate::common::Product;

/// ↕️ Price ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// keep flattened order
    #[default]
    None,
    Asc,
    Desc,
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" | "" => Ok(SortOrder::None),
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            other => Err(format!("unknown sort order '{other}', expected none|asc|desc")),
        }
    }
}

/// 🏷️ `All`, or exactly one category (compared by name, case-sensitive).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn admits(&self, category: &Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => wanted.as_str() == category.as_str(),
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "" | "All" => Ok(CategoryFilter::All),
            name => Ok(CategoryFilter::Only(Category::from_name(name))),
        }
    }
}

/// 📋 What the list screen asks for. Every field optional, every field defaulted.
///
/// Deserializes from the camelCase shape (`searchQuery`, `sortOrder`,
/// `stateKey`); a field of the wrong type or an unknown value falls back to
/// its default rather than failing the whole descriptor.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct QueryDescriptor {
    #[serde(deserialize_with = "lenient_string")]
    pub search_query: String,
    #[serde(deserialize_with = "lenient_parse")]
    pub category: CategoryFilter,
    #[serde(deserialize_with = "lenient_parse")]
    pub sort_order: SortOrder,
    #[serde(deserialize_with = "lenient_state_key")]
    pub state_key: Option<String>,
}

fn lenient_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(value.as_str().map(str::to_string).unwrap_or_default())
}

fn lenient_state_key<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<String>, D::Error> {
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(value
        .as_str()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string))
}

fn lenient_parse<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr + Default,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(value
        .as_str()
        .and_then(|s| s.parse().ok())
        .unwrap_or_default())
}

/// 🔎 Filter, search, sort a slice of records into a fresh `Vec`.
///
/// Steps, in order: category (exact), search (trimmed, lower-cased substring
/// over brand, label, category), then a stable sort by mrp if asked.
pub fn apply_query(products: &[Product], descriptor: &QueryDescriptor) -> Vec<Product> {
    let needle = descriptor.search_query.trim().to_lowercase();

    let mut hits: Vec<Product> = products
        .iter()
        .filter(|p| descriptor.category.admits(&p.category))
        .filter(|p| needle.is_empty() || p.matches_search(&needle))
        .cloned()
        .collect();

    match descriptor.sort_order {
        SortOrder::None => {}
        SortOrder::Asc => hits.sort_by(|a, b| a.mrp.total_cmp(&b.mrp)),
        SortOrder::Desc => hits.sort_by(|a, b| b.mrp.total_cmp(&a.mrp)),
    }
    hits
}

impl Catalog {
    /// 🔎 Run a descriptor against the cached index of its state.
    pub fn filter_products(&self, descriptor: &QueryDescriptor) -> Vec<Product> {
        let index = self.flat_products(descriptor.state_key.as_deref());
        let hits = apply_query(&index, descriptor);
        trace!(
            "🔎 {:?} matched {} of {} products",
            descriptor,
            hits.len(),
            index.len()
        );
        hits
    }
}
