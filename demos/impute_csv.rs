//! Fill missing numeric values in a CSV file with end-of-tail values.
//!
//! Run with: cargo run --example impute_csv -- data.csv [gaussian|iqr|max] [left|right] [fold]

use std::error::Error;
use tail_imputer::frame::csv::read_csv_path;
use tail_imputer::preprocessing::{EndTailImputer, Transformer};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let path = args.first().ok_or("usage: impute_csv <file.csv> [method] [tail] [fold]")?;
    let method = args.get(1).map(String::as_str).unwrap_or("gaussian");
    let tail = args.get(2).map(String::as_str).unwrap_or("right");
    let fold = args.get(3).map(|s| s.parse::<f64>()).transpose()?.unwrap_or(3.0);

    let df = read_csv_path(path)?;
    println!("Loaded {} rows x {} columns, {} missing", df.n_rows(), df.n_columns(), df.null_count());

    let mut imputer = EndTailImputer::from_strs(method, tail, fold, None)?;
    let filled = imputer.fit_transform(&df)?;

    println!("\nFill values ({method}, {tail} tail, fold {fold}):");
    for (name, value) in imputer.imputer_dict()? {
        println!("  {name:<20} {value:.6}");
    }
    println!("\nMissing after imputation: {}", filled.null_count());

    Ok(())
}
