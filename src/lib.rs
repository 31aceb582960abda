pub mod error;
pub mod output;
pub mod parser;

// Re-export commonly used items for convenience
pub use error::{ConversionError, ConversionResult};
pub use output::write_json_array;
pub use parser::{parse_reader, parse_records, Record};

use std::path::{Path, PathBuf};

/// High-level function to convert a CSV file into a JSON array of records.
///
/// The output file takes the input's base name with a `.json` extension and
/// is written into the process current working directory (not the input
/// file's directory), overwriting any existing file of that name. No output
/// file is created or modified on any failure path.
pub fn convert(input_path: &Path) -> ConversionResult<()> {
    let output_path = output_path_for(input_path)?;
    convert_to_path(input_path, &output_path)
}

/// Converts a CSV file, writing the JSON array to an explicit output path.
///
/// The input path must still carry the `.csv` extension.
pub fn convert_to_path(input_path: &Path, output_path: &Path) -> ConversionResult<()> {
    ensure_csv_extension(input_path)?;

    let records = parser::parse_records(input_path)?;
    output::write_json_array(&records, output_path)
}

/// Derives the output path for an input file: the input's base name with
/// `.json` appended, as a bare relative path so it resolves against the
/// current working directory.
pub fn output_path_for(input_path: &Path) -> ConversionResult<PathBuf> {
    ensure_csv_extension(input_path)?;

    let stem = input_path
        .file_stem()
        .ok_or_else(|| ConversionError::InvalidExtension {
            path: input_path.to_path_buf(),
        })?;

    // Append rather than set_extension: `archive.tar.csv` becomes
    // `archive.tar.json`, not `archive.json`.
    let mut name = stem.to_os_string();
    name.push(".json");
    Ok(PathBuf::from(name))
}

/// Requires the literal extension `csv`, case-sensitive. Checked before any
/// file I/O, so a rejected path never touches the filesystem.
fn ensure_csv_extension(path: &Path) -> ConversionResult<()> {
    match path.extension() {
        Some(ext) if ext == "csv" => Ok(()),
        _ => Err(ConversionError::InvalidExtension {
            path: path.to_path_buf(),
        }),
    }
}
