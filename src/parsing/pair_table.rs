
use anyhow::{bail, Context};
use log::{debug, warn};
use std::collections::BTreeSet;
use std::path::Path;

use crate::data_types::signature_pair::SignaturePair;
use crate::util::json_io::open_reader;

/// Returns the delimiter to use for a delimited file, ignoring any trailing ".gz".
/// ".csv" files are comma-delimited, everything else is tab-delimited.
/// # Arguments
/// * `filename` - the path to check
pub fn delimiter_for(filename: &Path) -> u8 {
    let inner = if filename.extension().unwrap_or_default() == "gz" {
        filename.file_stem().map(Path::new).unwrap_or(filename)
    } else {
        filename
    };
    if inner.extension().unwrap_or_default() == "csv" {
        b','
    } else {
        b'\t'
    }
}

/// Loads a table of signature pairs.
/// The file has no header, and each row is `label`, `from`, `to`.
/// Empty `from`/`to` fields are absent signatures; gzip input is detected by a ".gz" extension.
/// Fields are taken verbatim, quote characters included.
/// # Arguments
/// * `filename` - the pair table to load
/// # Errors
/// * if the file cannot be opened or parsed
/// * if a row has fewer than three fields
/// * if a label shows up more than once
pub fn load_pair_table(filename: &Path) -> anyhow::Result<Vec<SignaturePair>> {
    let reader = open_reader(filename)?;
    let mut csv_reader = csv::ReaderBuilder::new()
        .delimiter(delimiter_for(filename))
        .has_headers(false) // no headers in the file, disable so we do not skip first row
        .flexible(true) // we check the field counts ourselves so the error can name the row
        .quoting(false) // signatures are raw bytes, a leading '"' is part of the signature
        .from_reader(reader);

    let mut labels: BTreeSet<String> = Default::default();
    let mut pairs = vec![];
    for (row_index, result) in csv_reader.byte_records().enumerate() {
        let row = result.with_context(|| format!("Error while reading {filename:?}"))?;
        if row.len() < 3 {
            bail!("Row {} of {filename:?} has {} fields, expected 3 (label, from, to)", row_index + 1, row.len());
        }
        if row.len() > 3 {
            warn!("Row {} of {filename:?} has {} fields, ignoring everything after the third", row_index + 1, row.len());
        }

        let label = String::from_utf8_lossy(&row[0]).into_owned();
        if !labels.insert(label.clone()) {
            bail!("Duplicate label found: {label}");
        }

        let from = Some(row[1].to_vec());
        let to = Some(row[2].to_vec());
        pairs.push(SignaturePair::new(pairs.len() as u64, label, from, to));
    }

    debug!("Loaded {} signature pairs from {filename:?}", pairs.len());
    Ok(pairs)
}
