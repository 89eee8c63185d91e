//! 🏎️ How fast is a search over a state-sized rate list?

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use lqx::common::{DocumentMeta, Manufacturer, SourceProduct};
use lqx::{
    Catalog, Category, CategoryFilter, PackScale, QueryDescriptor, SortOrder, SourceDocument,
    StateInfo,
};

const PACKS: [&str; 6] = ["180ML", "375ML", "750ML", "650ML", "500ML CAN", "2LTR"];
const CATEGORIES: [&str; 5] = ["IMFL Whisky", "Beer Strong", "Dark Rum", "Vodka", "Red Wine"];

/// 🧪 `manufacturers` brands, each with `labels` labels in every pack size.
fn synthetic_document(manufacturers: usize, labels: usize) -> SourceDocument {
    SourceDocument {
        document: DocumentMeta {
            state: "Benchland".into(),
            authority: Some("BSBCL".into()),
            financial_year: "2025-26".into(),
        },
        manufacturers: (0..manufacturers)
            .map(|m| Manufacturer {
                name: format!("Distillery {m}"),
                products: (0..labels)
                    .flat_map(|l| {
                        PACKS.iter().enumerate().map(move |(i, pack)| SourceProduct {
                            label_name: format!("Label {m}-{l}"),
                            category: Some(CATEGORIES[(m + l) % CATEGORIES.len()].into()),
                            pack_size: (*pack).into(),
                            mrp: 100.0 + ((m * 31 + l * 17 + i * 7) % 900) as f64,
                            effective_date: "01.04.2025".into(),
                        })
                    })
                    .collect(),
            })
            .collect(),
    }
}

fn synthetic_catalog(manufacturers: usize, labels: usize) -> Catalog {
    let state = StateInfo {
        key: "benchland".into(),
        label: "Benchland".into(),
        authority: None,
    };
    Catalog::new(
        None,
        vec![(state, synthetic_document(manufacturers, labels))],
        PackScale::default(),
    )
    .expect("💀 a single state can't collide with itself")
}

fn bench_filter_products(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter_products");

    for manufacturers in [10usize, 100, 500] {
        let catalog = synthetic_catalog(manufacturers, 10);
        // 🔥 warm the memoized index so we time the query, not the flatten
        let _ = catalog.flat_products(None);

        let descriptor = QueryDescriptor {
            search_query: "label 4".into(),
            category: CategoryFilter::Only(Category::from_name("Whisky")),
            sort_order: SortOrder::Asc,
            state_key: None,
        };

        group.bench_with_input(
            BenchmarkId::from_parameter(manufacturers * 10 * PACKS.len()),
            &descriptor,
            |b, descriptor| b.iter(|| catalog.filter_products(black_box(descriptor))),
        );
    }

    group.finish();
}

fn bench_product_variants(c: &mut Criterion) {
    let catalog = synthetic_catalog(100, 10);
    let _ = catalog.flat_products(None);

    c.bench_function("product_variants", |b| {
        b.iter(|| {
            catalog.product_variants(black_box("Distillery 42"), black_box("Label 42-7"), None)
        })
    });
}

fn bench_first_flatten(c: &mut Criterion) {
    c.bench_function("flatten_6000", |b| {
        let document = synthetic_document(100, 10);
        b.iter(|| lqx::catalog::flatten("benchland", black_box(&document)))
    });
}

criterion_group!(
    benches,
    bench_filter_products,
    bench_product_variants,
    bench_first_flatten
);
criterion_main!(benches);
