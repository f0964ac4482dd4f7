//! Edible nutrition evaluator
//!
//! Reads a product (or bare nutriments) JSON document and prints the
//! evaluated nutrition panel as JSON.

use std::io::Read;
use std::path::PathBuf;

use tracing_subscriber::EnvFilter;

use edible::build_info;
use edible::models::{Product, ProductReport};

/// Input path from the first argument or `EDIBLE_NUTRIMENTS_PATH`; `None` reads stdin
fn get_input_path() -> Option<PathBuf> {
    std::env::args()
        .nth(1)
        .or_else(|| std::env::var("EDIBLE_NUTRIMENTS_PATH").ok())
        .filter(|p| p != "-")
        .map(PathBuf::from)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs go to stderr, stdout carries the report
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("edible=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    build_info::print_startup_banner();

    let input = match get_input_path() {
        Some(path) => {
            tracing::info!("Reading product from {}", path.display());
            std::fs::read_to_string(&path)?
        }
        None => {
            tracing::info!("Reading product from stdin");
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let product = Product::from_json_str(&input)?;
    tracing::debug!("Decoded {} nutriments", product.nutriments.len());
    let report = ProductReport::evaluate(&product);
    tracing::info!(
        "Evaluated {} nutrients ({} with a daily value)",
        report.panel.rows.len(),
        report.panel.with_daily_value().count()
    );

    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
