use csv::ReaderBuilder;
use serde_json::{Map, Value};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::error::{ConversionError, ConversionResult};

/// One parsed data row: header name mapped to field value, in header order.
///
/// Values are always JSON strings; nothing is coerced to numbers or
/// booleans.
pub type Record = Map<String, Value>;

/// Parses a CSV file into one [`Record`] per data row.
pub fn parse_records(input_path: &Path) -> ConversionResult<Vec<Record>> {
    let file = File::open(input_path).map_err(|e| {
        ConversionError::ParseFailed(format!("cannot open {}: {}", input_path.display(), e))
    })?;

    parse_reader(BufReader::with_capacity(32 * 1024, file))
}

/// Parses CSV text from any reader.
///
/// The first row is the header; field *i* of every subsequent row maps to
/// header name *i*. Fields may be wrapped in double quotes to embed commas,
/// with `""` inside a quoted field decoding to a literal quote (RFC 4180).
///
/// Field counts are strict: a row with more or fewer fields than the header
/// fails the whole parse. A header that repeats a name keeps the last
/// occurrence. Input with no header row at all is an error; a header row
/// with no data rows yields an empty vec.
pub fn parse_reader<R: Read>(reader: R) -> ConversionResult<Vec<Record>> {
    let mut csv_reader = ReaderBuilder::new()
        .delimiter(b',')
        .quote(b'"')
        .double_quote(true)
        .flexible(false)
        .has_headers(true)
        .from_reader(reader);

    let headers = csv_reader
        .headers()
        .map_err(|e| ConversionError::ParseFailed(e.to_string()))?
        .clone();

    if headers.is_empty() {
        return Err(ConversionError::ParseFailed(
            "input contains no header row".to_string(),
        ));
    }

    let mut records = Vec::new();
    for row in csv_reader.records() {
        let row = row.map_err(|e| ConversionError::ParseFailed(e.to_string()))?;

        let mut record = Record::new();
        for (name, field) in headers.iter().zip(row.iter()) {
            record.insert(name.to_string(), Value::String(field.to_string()));
        }
        records.push(record);
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_maps_fields_to_headers_in_order() {
        let records = parse_reader("name,age\nAlice,30\nBob,25\n".as_bytes()).unwrap();

        assert_eq!(records.len(), 2);
        let keys: Vec<&String> = records[0].keys().collect();
        assert_eq!(keys, ["name", "age"]);
        assert_eq!(records[0]["name"], Value::String("Alice".to_string()));
        assert_eq!(records[1]["age"], Value::String("25".to_string()));
    }

    #[test]
    fn test_parse_keeps_values_as_strings() {
        let records = parse_reader("count,active\n42,true\n".as_bytes()).unwrap();

        assert_eq!(records[0]["count"], Value::String("42".to_string()));
        assert_eq!(records[0]["active"], Value::String("true".to_string()));
    }

    #[test]
    fn test_parse_quoted_field_with_embedded_comma() {
        let records = parse_reader("name,note\n\"a,b\",plain\n".as_bytes()).unwrap();

        assert_eq!(records[0]["name"], Value::String("a,b".to_string()));
        assert_eq!(records[0]["note"], Value::String("plain".to_string()));
    }

    #[test]
    fn test_parse_doubled_quote_decodes_to_literal_quote() {
        let records = parse_reader("quote\n\"He said \"\"hi\"\"\"\n".as_bytes()).unwrap();

        assert_eq!(
            records[0]["quote"],
            Value::String("He said \"hi\"".to_string())
        );
    }

    #[test]
    fn test_parse_duplicate_header_keeps_last_value() {
        let records = parse_reader("id,id\n1,2\n".as_bytes()).unwrap();

        assert_eq!(records[0].len(), 1);
        assert_eq!(records[0]["id"], Value::String("2".to_string()));
    }

    #[test]
    fn test_parse_empty_field_stays_empty_string() {
        let records = parse_reader("a,b\nx,\n".as_bytes()).unwrap();

        assert_eq!(records[0]["b"], Value::String(String::new()));
    }

    #[test]
    fn test_parse_accepts_missing_trailing_newline() {
        let records = parse_reader("a,b\n1,2".as_bytes()).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0]["b"], Value::String("2".to_string()));
    }

    #[test]
    fn test_parse_header_only_yields_no_records() {
        let records = parse_reader("name,age\n".as_bytes()).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_parse_ragged_row_fails() {
        let result = parse_reader("a,b\n1\n".as_bytes());
        assert!(matches!(result, Err(ConversionError::ParseFailed(_))));
    }

    #[test]
    fn test_parse_empty_input_fails() {
        let result = parse_reader("".as_bytes());
        assert!(matches!(result, Err(ConversionError::ParseFailed(_))));
    }
}
