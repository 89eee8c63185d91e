//! 🚀 lqx-cli — the front door.
//!
//! 📦 Thin wrapper: parse args, set up logging, load config, load the
//! catalog, run one command, print tables. The real work lives in `lqx`. 🦆

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use lqx::{Catalog, CategoryFilter, QueryDescriptor, SortOrder, VariantSummary, render};
use tracing::error;
use tracing_subscriber::EnvFilter;

/// 🍾 Browse official liquor rate lists by state.
#[derive(Debug, Parser)]
#[command(name = "lqx", version, about)]
struct Cli {
    /// Config file. Defaults to ./lqx.toml when it exists, env vars (LQX_*) otherwise.
    #[arg(long, short)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List the registered states.
    States,
    /// List categories present in a state's rate list.
    Categories {
        #[arg(long)]
        state: Option<String>,
        /// Show the fixed filter list instead of what the state stocks.
        #[arg(long)]
        all_filters: bool,
    },
    /// Search, filter, and sort a state's products.
    List {
        #[arg(long)]
        state: Option<String>,
        #[arg(long, short, default_value = "")]
        search: String,
        #[arg(long, short, default_value = "All")]
        category: String,
        /// none | asc | desc
        #[arg(long, default_value = "none")]
        sort: String,
        #[arg(long)]
        json: bool,
    },
    /// Every pack size of one product, smallest first.
    Variants {
        #[arg(long)]
        brand: String,
        #[arg(long)]
        label: String,
        #[arg(long)]
        state: Option<String>,
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if let Err(err) = run(cli).await {
        error!("💀 error: {}", err);
        let mut smells_like_a_missing_file = false;
        for cause in err.chain().skip(1) {
            error!("⚠️  cause: {}", cause);
            let cause_str = cause.to_string();
            if cause_str.contains("No such file")
                || cause_str.contains("cannot find the file")
                || cause_str.contains("would not open")
            {
                smells_like_a_missing_file = true;
            }
        }

        if smells_like_a_missing_file {
            error!(
                "🔧 hint: a rate list file is missing. Paths in the config are relative to \
                 the directory you run from, not to the config file. Try an absolute path."
            );
        }

        std::process::exit(1);
    }

    Ok(())
}

async fn run(cli: Cli) -> Result<()> {
    let config_path = resolve_config_path(cli.config.as_deref())?;
    let app_config = lqx::app_config::load_config(config_path.as_deref())
        .context("💀 Couldn't load the config. Check the file, check the LQX_* env vars.")?;
    let catalog = lqx::load_catalog(&app_config).await?;

    match cli.command {
        Command::States => {
            println!("{}", render::state_table(catalog.states(), catalog.default_state()));
        }
        Command::Categories { state, all_filters } => {
            if all_filters {
                lqx::FILTER_CATEGORIES.iter().for_each(|c| println!("{c}"));
            } else {
                catalog
                    .categories(state.as_deref())
                    .iter()
                    .for_each(|c| println!("{c}"));
            }
        }
        Command::List {
            state,
            search,
            category,
            sort,
            json,
        } => {
            let descriptor = QueryDescriptor {
                search_query: search,
                category: category.parse().unwrap_or(CategoryFilter::All),
                sort_order: sort.parse().unwrap_or_else(|why| {
                    tracing::warn!("🔀 {why}; keeping source order");
                    SortOrder::None
                }),
                state_key: state,
            };
            let products = catalog.filter_products(&descriptor);
            if json {
                println!("{}", serde_json::to_string_pretty(&products)?);
            } else {
                print_product_list(&catalog, &descriptor, &products);
            }
        }
        Command::Variants {
            brand,
            label,
            state,
            json,
        } => {
            let variants = catalog.product_variants(&brand, &label, state.as_deref());
            if json {
                println!("{}", serde_json::to_string_pretty(&variants)?);
            } else {
                print_variants(&brand, &label, &variants);
            }
        }
    }

    Ok(())
}

/// 🔧 Explicit path must exist; the implicit `lqx.toml` is optional.
fn resolve_config_path(explicit: Option<&Path>) -> Result<Option<PathBuf>> {
    match explicit {
        Some(path) => {
            let exists = path.try_exists().context(format!(
                "💀 Couldn't check whether '{}' exists",
                path.display()
            ))?;
            anyhow::ensure!(
                exists,
                "💀 Config file '{}' does not exist. Relative paths resolve against the \
                 current directory.",
                path.display()
            );
            Ok(Some(path.to_path_buf()))
        }
        None => {
            let default = PathBuf::from("lqx.toml");
            Ok(default.is_file().then_some(default))
        }
    }
}

fn print_product_list(catalog: &Catalog, descriptor: &QueryDescriptor, products: &[lqx::Product]) {
    let state_key = catalog.resolve_state(descriptor.state_key.as_deref());
    let state_label = catalog
        .state(state_key)
        .map(|s| s.label.as_str())
        .unwrap_or(state_key);

    if products.is_empty() {
        println!("🔍 No products found in {state_label}. Try another search or category.");
        return;
    }

    println!("{}", render::product_table(products));
    let noun = if products.len() == 1 { "product" } else { "products" };
    println!("{} {noun} · {state_label}", products.len());
    println!("{}", render::disclaimer(state_label));
}

fn print_variants(brand: &str, label: &str, variants: &[lqx::Product]) {
    let Some(summary) = VariantSummary::from_variants(variants) else {
        println!("🔍 No pack sizes found for '{label}' by '{brand}'.");
        return;
    };

    let first = &variants[0];
    println!("{label} · {brand} · {} · {} · {}", first.category, first.state, first.year);
    if summary.pack_sizes > 1 {
        println!("{}", render::summary_line(&summary));
    }
    println!("{}", render::variant_table(variants));
    println!("{}", render::disclaimer(&first.state));
}
