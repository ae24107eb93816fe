use anyhow::Context;
use std::io::{BufReader, BufWriter, Read, Write};
use std::fs::File;
use std::path::Path;

/// True if the path ends in ".gz"
fn is_gzipped(filename: &Path) -> bool {
    filename.extension().unwrap_or_default() == "gz"
}

/// Opens a file for reading, transparently decompressing ".gz" paths
/// # Arguments
/// * `filename` - the file path to open
/// # Errors
/// * if the file does not open
pub fn open_reader(filename: &Path) -> anyhow::Result<Box<dyn Read>> {
    let file = File::open(filename)
        .with_context(|| format!("Error while opening {filename:?}:"))?;
    let reader: Box<dyn Read> = if is_gzipped(filename) {
        Box::new(flate2::read::MultiGzDecoder::new(BufReader::new(file)))
    } else {
        Box::new(BufReader::new(file))
    };
    Ok(reader)
}

/// Loads a JSON file into some type, e.g. a `CostModel`
/// # Arguments
/// * `filename` - the file path to open and parse
/// # Errors
/// * if the file does not open properly
/// * if the deserialization throws errors
pub fn load_json<T: serde::de::DeserializeOwned>(filename: &Path) -> anyhow::Result<T> {
    let reader = open_reader(filename)?;
    let result: T = serde_json::from_reader(reader)
        .with_context(|| format!("Error while deserializing {filename:?}:"))?;
    Ok(result)
}

/// Saves a serializable struct as pretty JSON, gzip compressed if the path ends in ".gz"
/// # Arguments
/// * `data` - the data in memory
/// * `out_filename` - user provided path to write to
/// # Errors
/// * if opening or writing to the file throw errors
/// * if JSON serialization throws errors
pub fn save_json<T: serde::Serialize>(data: &T, out_filename: &Path) -> anyhow::Result<()> {
    let file = File::create(out_filename)
        .with_context(|| format!("Error while creating {out_filename:?}:"))?;
    let file: Box<dyn Write> = if is_gzipped(out_filename) {
        Box::new(flate2::write::GzEncoder::new(file, flate2::Compression::best()))
    } else {
        Box::new(file)
    };
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, data)
        .with_context(|| format!("Error while serializing {out_filename:?}:"))?;
    writer.flush()
        .with_context(|| format!("Error while flushing output to {out_filename:?}:"))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::costs::CostModel;

    #[test]
    fn test_round_trip_gz() {
        let out_fn = std::env::temp_dir().join(format!("sigdist_json_io_{}.json.gz", std::process::id()));
        let costs = CostModel::new(2, 3, 4, 6);
        save_json(&costs, &out_fn).unwrap();
        let loaded: CostModel = load_json(&out_fn).unwrap();
        assert_eq!(loaded, costs);
        std::fs::remove_file(&out_fn).unwrap();
    }

    #[test]
    fn test_load_cost_file() {
        let costs: CostModel = load_json(Path::new("test_data/costs/indel_heavy.json")).unwrap();
        assert_eq!(costs, CostModel::new(10, 10, 3, 5));
    }

    #[test]
    fn test_load_bad_json() {
        let result: anyhow::Result<CostModel> = load_json(Path::new("test_data/costs/not_json.json"));
        assert!(result.is_err());
    }
}
