//! CSV export of calculation history.
//!
//! ```csv
//! timestamp,calculation_type,result
//! 2025-03-01T09:00:00Z,labour,5.0
//! 2025-03-01T09:00:05Z,eoq,223.60679774997897
//! ```
//!
//! Timestamps are RFC 3339 in UTC and `calculation_type` is the kind's short
//! code. Results are the raw values, not the formatted display strings.

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use productivity_core::CalculationRecord;
use thiserror::Error;
use tracing::info;

pub const EXPORT_HEADERS: [&str; 3] = ["timestamp", "calculation_type", "result"];

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Writes `records` to `writer` with a header row, returning the number of
/// records written.
///
/// The header is written even when there are no records.
pub fn write_records<'a, W, I>(
    writer: W,
    records: I,
) -> Result<usize, ExportError>
where
    W: Write,
    I: IntoIterator<Item = &'a CalculationRecord>,
{
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    csv_writer.write_record(EXPORT_HEADERS)?;

    let mut written = 0;
    for record in records {
        csv_writer.serialize(record)?;
        written += 1;
    }
    csv_writer.flush()?;

    Ok(written)
}

/// Creates (or truncates) `path` and writes `records` to it.
pub fn export_to_file<'a, I>(
    path: &Path,
    records: I,
) -> Result<usize, ExportError>
where
    I: IntoIterator<Item = &'a CalculationRecord>,
{
    let file = File::create(path)?;
    let written = write_records(file, records)?;
    info!(path = %path.display(), records = written, "exported history");
    Ok(written)
}

/// Reads records previously written by [`write_records`].
pub fn read_records<R: Read>(reader: R) -> Result<Vec<CalculationRecord>, ExportError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut records = Vec::new();

    for result in csv_reader.deserialize() {
        let record: CalculationRecord = result?;
        records.push(record);
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, Utc};
    use pretty_assertions::assert_eq;
    use productivity_core::CalculationKind;

    use super::*;

    fn at(ts: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(ts).unwrap().with_timezone(&Utc)
    }

    fn sample_records() -> Vec<CalculationRecord> {
        vec![
            CalculationRecord::new(at("2025-03-01T09:00:00Z"), CalculationKind::Labour, 5.0),
            CalculationRecord::new(
                at("2025-03-01T09:00:05Z"),
                CalculationKind::EconomicOrderQuantity,
                223.5,
            ),
        ]
    }

    #[test]
    fn write_records_emits_header_and_rows() {
        let mut buf = Vec::new();

        let written = write_records(&mut buf, &sample_records()).unwrap();

        assert_eq!(written, 2);
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "timestamp,calculation_type,result\n\
             2025-03-01T09:00:00Z,labour,5.0\n\
             2025-03-01T09:00:05Z,eoq,223.5\n"
        );
    }

    #[test]
    fn write_records_with_no_records_writes_header_only() {
        let mut buf = Vec::new();

        let written = write_records(&mut buf, &[]).unwrap();

        assert_eq!(written, 0);
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "timestamp,calculation_type,result\n"
        );
    }

    #[test]
    fn read_records_restores_written_history() {
        let records = sample_records();
        let mut buf = Vec::new();
        write_records(&mut buf, &records).unwrap();

        let restored = read_records(buf.as_slice()).unwrap();

        assert_eq!(restored, records);
    }

    #[test]
    fn read_records_rejects_unknown_kind() {
        let csv = "timestamp,calculation_type,result\n2025-03-01T09:00:00Z,velocity,1.0\n";

        assert!(read_records(csv.as_bytes()).is_err());
    }
}
