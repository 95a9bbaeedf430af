use anyhow::{bail, Context, Result};
use csv::ReaderBuilder;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::info;

use crate::data::payment::Payment;

/// Load payment rows from a `.csv` or `.json` file
pub fn load_payments<P: AsRef<Path>>(path: P) -> Result<Vec<Payment>> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    let payments = match extension.as_deref() {
        Some("csv") => load_csv(path)?,
        Some("json") => load_json(path)?,
        _ => bail!("Unsupported data file (expected .csv or .json): {:?}", path),
    };

    info!(target: "table", "Loaded {} payments from {:?}", payments.len(), path);
    Ok(payments)
}

/// Load a CSV file whose header names match the payment fields
pub fn load_csv<P: AsRef<Path>>(path: P) -> Result<Vec<Payment>> {
    let file = File::open(&path)
        .with_context(|| format!("Failed to open CSV file: {:?}", path.as_ref()))?;

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(file);

    let mut payments = Vec::new();
    for (line, record) in reader.deserialize::<Payment>().enumerate() {
        // +2: header line and 1-based numbering
        let payment = record.with_context(|| format!("Invalid payment on line {}", line + 2))?;
        payments.push(payment);
    }
    Ok(payments)
}

/// Load a JSON array of payments
pub fn load_json<P: AsRef<Path>>(path: P) -> Result<Vec<Payment>> {
    let file = File::open(&path)
        .with_context(|| format!("Failed to open JSON file: {:?}", path.as_ref()))?;
    let payments: Vec<Payment> = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Failed to parse JSON file: {:?}", path.as_ref()))?;
    Ok(payments)
}
