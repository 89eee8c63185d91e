//! 🍽️ render.rs — tables for humans.
//!
//! The core hands back plain records. This module turns them into
//! comfy-tables for the terminal. No logic lives here that a test of the core
//! would miss; it only arranges cells.

use comfy_table::{Cell, CellAlignment, ContentArrangement, Table, presets::UTF8_FULL_CONDENSED};

use crate::catalog::StateInfo;
use crate::common::Product;
use crate::variants::VariantSummary;

/// 💰 `₹640` for whole rupees, `₹512.50` otherwise.
pub fn format_mrp(mrp: f64) -> String {
    if mrp.fract() == 0.0 {
        format!("₹{mrp:.0}")
    } else {
        format!("₹{mrp:.2}")
    }
}

fn base_table(header: Vec<&str>) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(header);
    table
}

/// 📋 The product list.
pub fn product_table(products: &[Product]) -> Table {
    let mut table = base_table(vec!["Label", "Brand", "Category", "Pack", "MRP", "State"]);
    for p in products {
        table.add_row(vec![
            Cell::new(&p.label_name),
            Cell::new(&p.brand_name),
            Cell::new(p.category.as_str()),
            Cell::new(&p.pack_size),
            Cell::new(format_mrp(p.mrp)).set_alignment(CellAlignment::Right),
            Cell::new(&p.state),
        ]);
    }
    table
}

/// 🧬 The variant list. Row 1 is flagged "Best Value" when there is a choice.
pub fn variant_table(variants: &[Product]) -> Table {
    let mut table = base_table(vec!["#", "Pack", "Effective", "MRP", ""]);
    let has_choice = variants.len() > 1;
    for (i, v) in variants.iter().enumerate() {
        let badge = if i == 0 && has_choice { "Best Value" } else { "" };
        table.add_row(vec![
            Cell::new(i + 1).set_alignment(CellAlignment::Right),
            Cell::new(&v.pack_size),
            Cell::new(format!("Eff. {}", v.effective_date)),
            Cell::new(format_mrp(v.mrp)).set_alignment(CellAlignment::Right),
            Cell::new(badge),
        ]);
    }
    table
}

/// 💰 "Starting From ₹160 · Up To ₹640 · Pack Sizes 3"
pub fn summary_line(summary: &VariantSummary) -> String {
    format!(
        "Starting From {} · Up To {} · Pack Sizes {}",
        format_mrp(summary.cheapest),
        format_mrp(summary.most_expensive),
        summary.pack_sizes
    )
}

/// 🏛️ Registered states, default marked.
pub fn state_table(states: &[StateInfo], default_state: &str) -> Table {
    let mut table = base_table(vec!["Key", "State", "Authority", ""]);
    for s in states {
        table.add_row(vec![
            Cell::new(&s.key),
            Cell::new(&s.label),
            Cell::new(s.authority.as_deref().unwrap_or("-")),
            Cell::new(if s.key == default_state { "default" } else { "" }),
        ]);
    }
    table
}

/// ⚠️ Shown under every price list.
pub fn disclaimer(state: &str) -> String {
    format!(
        "⚠️ Prices are official MRP as per {state} excise authority. \
         Actual prices may vary at retail outlets. 18+ only."
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::tests::a_two_state_catalog;

    #[test]
    fn the_one_where_rupees_lose_their_paise_only_when_there_are_none() {
        assert_eq!(format_mrp(640.0), "₹640");
        assert_eq!(format_mrp(512.5), "₹512.50");
        assert_eq!(format_mrp(0.0), "₹0");
    }

    #[test]
    fn the_one_where_the_product_table_has_a_row_per_product() {
        let catalog = a_two_state_catalog();
        let flat = catalog.flat_products(None);
        let table = product_table(&flat);

        assert_eq!(table.row_iter().count(), flat.len());
        let rendered = table.to_string();
        assert!(rendered.contains("Royal Stag"));
        assert!(rendered.contains("₹640"));
    }

    #[test]
    fn the_one_where_only_a_real_choice_gets_a_best_value_badge() {
        let catalog = a_two_state_catalog();
        let three = catalog.product_variants("United Spirits", "Royal Stag", None);
        assert!(variant_table(&three).to_string().contains("Best Value"));

        let one = catalog.product_variants("Mohan Meakin", "Old Monk", None);
        assert!(!variant_table(&one).to_string().contains("Best Value"));
    }

    #[test]
    fn the_one_where_the_summary_reads_like_the_detail_screen() {
        let summary = VariantSummary {
            cheapest: 160.0,
            most_expensive: 640.0,
            pack_sizes: 3,
        };
        assert_eq!(
            summary_line(&summary),
            "Starting From ₹160 · Up To ₹640 · Pack Sizes 3"
        );
    }

    #[test]
    fn the_one_where_the_default_state_is_marked() {
        let catalog = a_two_state_catalog();
        let rendered = state_table(catalog.states(), catalog.default_state()).to_string();
        assert!(rendered.contains("jharkhand"));
        assert!(rendered.contains("default"));
        assert!(rendered.contains("TASMAC"));
    }
}
