use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::data_types::pair_result::PairResult;
use crate::parsing::pair_table::delimiter_for;

/// Writes one row per scored pair to a delimited file
pub struct DistanceTableWriter {
    /// Handle on the writer
    csv_writer: csv::Writer<Box<dyn Write>>,
}

/// Contains all the data written to each row of the distance table
#[derive(Serialize)]
struct DistanceTableRow<'a> {
    /// Unique pair identifier
    pair_id: u64,
    /// User-provided label
    label: &'a str,
    /// Length of the `from` signature
    from_len: Option<usize>,
    /// Length of the `to` signature
    to_len: Option<usize>,
    /// The computed distance
    distance: Option<u64>,
    /// If true, the distance is only known to be above the ceiling
    terminated_early: Option<bool>,
    /// If true, the engine traded `from` and `to` to bound memory
    swapped: Option<bool>,
    /// Amount of DP work done
    cells_computed: Option<u64>,
    /// Error message for pairs that failed
    error: Option<&'a str>,
}

impl<'a> DistanceTableRow<'a> {
    /// Creates a new row from a single pair result; failed pairs leave the report columns empty
    fn new(result: &'a PairResult) -> Self {
        let report = result.report();
        Self {
            pair_id: result.pair_id(),
            label: result.label(),
            from_len: report.map(|r| r.from_len),
            to_len: report.map(|r| r.to_len),
            distance: report.map(|r| r.distance),
            terminated_early: report.map(|r| r.terminated_early),
            swapped: report.map(|r| r.swapped),
            cells_computed: report.map(|r| r.cells_computed),
            error: result.error(),
        }
    }
}

impl DistanceTableWriter {
    /// Creates a new table writer
    /// # Arguments
    /// * `filename` - path to the filename that will get opened, ".csv" is comma-delimited and anything else is tab-delimited; a trailing ".gz" gzip compresses the output
    pub fn new(filename: &Path) -> csv::Result<Self> {
        let file = File::create(filename)?;
        let file: Box<dyn Write> = if filename.extension().unwrap_or_default() == "gz" {
            Box::new(flate2::write::GzEncoder::new(file, flate2::Compression::best()))
        } else {
            Box::new(file)
        };
        let csv_writer = csv::WriterBuilder::new()
            .delimiter(delimiter_for(filename))
            .quote_style(csv::QuoteStyle::Never) // labels are written exactly as they were read
            .from_writer(file);
        Ok(Self {
            csv_writer
        })
    }

    /// Writes a single result row
    /// # Arguments
    /// * `result` - the scored pair
    pub fn write_result(&mut self, result: &PairResult) -> csv::Result<()> {
        let row = DistanceTableRow::new(result);
        self.csv_writer.serialize(&row)?;
        Ok(())
    }

    /// Flushes any buffered rows to disk
    pub fn flush(&mut self) -> std::io::Result<()> {
        self.csv_writer.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::report::DistanceReport;
    use crate::util::json_io::open_reader;
    use std::io::Read;

    #[test]
    fn test_write_rows() {
        let out_fn = std::env::temp_dir().join(format!("sigdist_distance_table_{}.tsv", std::process::id()));
        let results = vec![
            PairResult::solved(0, "close".to_string(), DistanceReport {
                distance: 2,
                from_len: 2,
                to_len: 2,
                cells_computed: 4,
                rows_computed: 2,
                terminated_early: false,
                swapped: false
            }),
            PairResult::failed(1, "broken".to_string(), "too big".to_string()),
        ];

        let mut writer = DistanceTableWriter::new(&out_fn).unwrap();
        for result in results.iter() {
            writer.write_result(result).unwrap();
        }
        writer.flush().unwrap();
        drop(writer);

        let contents = std::fs::read_to_string(&out_fn).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines, vec![
            "pair_id\tlabel\tfrom_len\tto_len\tdistance\tterminated_early\tswapped\tcells_computed\terror",
            "0\tclose\t2\t2\t2\tfalse\tfalse\t4\t",
            "1\tbroken\t\t\t\t\t\t\ttoo big",
        ]);
        std::fs::remove_file(&out_fn).unwrap();
    }

    #[test]
    fn test_write_gz_unquoted() {
        let out_fn = std::env::temp_dir().join(format!("sigdist_distance_table_{}.csv.gz", std::process::id()));
        let result = PairResult::failed(0, "\"odd\"".to_string(), "too big".to_string());

        let mut writer = DistanceTableWriter::new(&out_fn).unwrap();
        writer.write_result(&result).unwrap();
        writer.flush().unwrap();
        drop(writer);

        let mut contents = String::new();
        open_reader(&out_fn).unwrap().read_to_string(&mut contents).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines, vec![
            "pair_id,label,from_len,to_len,distance,terminated_early,swapped,cells_computed,error",
            "0,\"odd\",,,,,,,too big",
        ]);
        std::fs::remove_file(&out_fn).unwrap();
    }
}
