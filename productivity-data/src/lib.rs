//! File formats for the productivity calculator: batch input CSV and
//! history export CSV.

pub mod export;
pub mod input_loader;

pub use export::{EXPORT_HEADERS, ExportError, export_to_file, read_records, write_records};
pub use input_loader::{InputLoadError, KIND_COLUMN, load_from_file, load_from_reader, load_from_str};
