//! CSV loading into a [`DataFrame`].
//!
//! Column types are inferred: a column whose every non-empty cell parses as
//! `f64` becomes [`Column::Numeric`]; anything else becomes [`Column::Text`].
//! Empty cells and the markers `NA`, `NaN`, `null` are treated as missing.

use super::{Column, DataFrame};
use crate::preprocessing::error::PreprocessingError;
use csv::ReaderBuilder;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

const MISSING_MARKERS: [&str; 5] = ["", "NA", "NaN", "nan", "null"];

fn is_missing(cell: &str) -> bool {
    MISSING_MARKERS.contains(&cell.trim())
}

/// Reads a CSV with a header row from any reader.
pub fn read_csv<R: Read>(reader: R) -> Result<DataFrame, PreprocessingError> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers: Vec<String> = rdr.headers()?.iter().map(str::to_string).collect();
    let mut cells: Vec<Vec<String>> = vec![Vec::new(); headers.len()];

    for (line, result) in rdr.records().enumerate() {
        let record = result?;
        if record.len() != headers.len() {
            return Err(PreprocessingError::Csv(format!(
                "record {} has {} fields, expected {}",
                line + 1,
                record.len(),
                headers.len()
            )));
        }
        for (col, field) in record.iter().enumerate() {
            cells[col].push(field.to_string());
        }
    }

    let mut df = DataFrame::new();
    for (name, raw) in headers.into_iter().zip(cells) {
        df.add_column(name, infer_column(raw))?;
    }
    Ok(df)
}

/// Reads a CSV file from disk.
pub fn read_csv_path<P: AsRef<Path>>(path: P) -> Result<DataFrame, PreprocessingError> {
    let file = File::open(path)?;
    read_csv(BufReader::new(file))
}

fn infer_column(raw: Vec<String>) -> Column {
    let parsed: Option<Vec<f64>> = raw
        .iter()
        .map(|cell| {
            if is_missing(cell) {
                Some(f64::NAN)
            } else {
                cell.trim().parse::<f64>().ok()
            }
        })
        .collect();

    match parsed {
        Some(values) => Column::Numeric(values),
        None => Column::Text(
            raw.into_iter()
                .map(|cell| if is_missing(&cell) { None } else { Some(cell) })
                .collect(),
        ),
    }
}
