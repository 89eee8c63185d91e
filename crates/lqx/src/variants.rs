//! 🧬 Variant Resolver — every pack size of one product, smallest first.
//!
//! A variant group is every record sharing `(brand, label, state)`. The
//! detail view lists them along a fixed pack-size scale:
//!
//! ```text
//!   60ML < 90ML < 180ML < 200ML < ... < 750ML < 1000ML < 1LTR < (off-scale, by mrp)
//! ```
//!
//! A pack size's rank is the index of the first scale token it contains.
//! Off-scale sizes go after everything on the scale, cheapest first.

use std::cmp::Ordering;
use std::collections::HashSet;

use tracing::{debug, trace};

use crate::catalog::Catalog;
use crate::common::Product;

/// 📏 The default pack-size scale, smallest first.
pub const DEFAULT_PACK_SCALE: [&str; 12] = [
    "60ML", "90ML", "180ML", "200ML", "275ML", "300ML", "375ML", "500ML", "650ML", "750ML",
    "1000ML", "1LTR",
];

/// 📏 An ordered list of pack-size tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackScale {
    tokens: Vec<String>,
}

impl Default for PackScale {
    fn default() -> Self {
        Self::new(&DEFAULT_PACK_SCALE)
    }
}

impl PackScale {
    /// Tokens are trimmed and kept as written. Matching is case-sensitive:
    /// `"750ml"` is off-scale under the default `"750ML"` token.
    pub fn new<S: AsRef<str>>(tokens: &[S]) -> Self {
        Self {
            tokens: tokens
                .iter()
                .map(|t| t.as_ref().trim().to_string())
                .filter(|t| !t.is_empty())
                .collect(),
        }
    }

    /// 🔢 Index of the first token contained in `pack_size`, if any.
    pub fn rank(&self, pack_size: &str) -> Option<usize> {
        self.tokens
            .iter()
            .position(|token| pack_size.contains(token.as_str()))
    }

    /// ⚖️ Both on the scale → by rank. One on → it goes first. Neither → by mrp.
    pub fn compare(&self, a: &Product, b: &Product) -> Ordering {
        match (self.rank(&a.pack_size), self.rank(&b.pack_size)) {
            (Some(x), Some(y)) => x.cmp(&y),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => a.mrp.total_cmp(&b.mrp),
        }
    }

    /// Stable: equal ranks keep their flattened order.
    pub fn sort(&self, variants: &mut [Product]) {
        variants.sort_by(|a, b| self.compare(a, b));
    }
}

/// 💰 The price summary shown above a variant list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VariantSummary {
    pub cheapest: f64,
    pub most_expensive: f64,
    pub pack_sizes: usize,
}

impl VariantSummary {
    /// `None` for an empty group. There is no cheapest of nothing.
    pub fn from_variants(variants: &[Product]) -> Option<Self> {
        let first = variants.first()?;
        let (cheapest, most_expensive) = variants
            .iter()
            .fold((first.mrp, first.mrp), |(lo, hi), v| (lo.min(v.mrp), hi.max(v.mrp)));
        Some(Self {
            cheapest,
            most_expensive,
            pack_sizes: variants.len(),
        })
    }
}

impl Catalog {
    /// 🔍 Records matching brand and label exactly (case-sensitive), in flattened order.
    pub fn matching_variants(
        &self,
        brand_name: &str,
        label_name: &str,
        state_key: Option<&str>,
    ) -> Vec<Product> {
        self.flat_products(state_key)
            .iter()
            .filter(|p| p.brand_name == brand_name && p.label_name == label_name)
            .cloned()
            .collect()
    }

    /// 🧬 The variant group for `(brand, label)` in a state, ordered along the
    /// catalog's pack-size scale. Empty when nothing matches.
    pub fn product_variants(
        &self,
        brand_name: &str,
        label_name: &str,
        state_key: Option<&str>,
    ) -> Vec<Product> {
        let mut variants = self.matching_variants(brand_name, label_name, state_key);

        let mut seen = HashSet::with_capacity(variants.len());
        for variant in &variants {
            if !seen.insert(variant.pack_size.as_str()) {
                debug!(
                    "👯 '{} / {}' lists pack size '{}' more than once; keeping both",
                    brand_name, label_name, variant.pack_size
                );
            }
        }

        self.pack_scale().sort(&mut variants);
        trace!(
            "🧬 {} variants for '{} / {}'",
            variants.len(),
            brand_name,
            label_name
        );
        variants
    }
}
