use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::{ConversionError, ConversionResult};

/// Serializes `records` as a single compact JSON array and writes it to
/// `output_path`, overwriting any existing file at that path.
pub fn write_json_array<T: Serialize>(records: &[T], output_path: &Path) -> ConversionResult<()> {
    let write_failed = |message: String| ConversionError::WriteFailed {
        path: output_path.to_path_buf(),
        message,
    };

    let file = File::create(output_path).map_err(|e| write_failed(e.to_string()))?;
    let mut writer = BufWriter::new(file);

    serde_json::to_writer(&mut writer, records).map_err(|e| write_failed(e.to_string()))?;
    writer.flush().map_err(|e| write_failed(e.to_string()))?;

    Ok(())
}
