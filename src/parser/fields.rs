//! Field tokenizing helpers shared by the GPS and sensor record parsers

use crate::error::ConvertError;
use crate::Result;
use csv::{ReaderBuilder, StringRecord, Trim};
use std::str::FromStr;

/// Split one CSV line into trimmed fields
pub fn tokenize_line(line: &str) -> Result<StringRecord> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(line.as_bytes());

    let mut record = StringRecord::new();
    if !reader.read_record(&mut record)? {
        return Err(ConvertError::Parse("empty line".to_string()));
    }
    Ok(record)
}

/// Parse a single numeric field, naming the field on failure
pub fn parse_field<T: FromStr>(value: &str, name: &str) -> Result<T> {
    value
        .trim()
        .parse::<T>()
        .map_err(|_| ConvertError::Parse(format!("invalid {name} '{value}'")))
}

/// Fetch field `index` or report how many fields were actually present
pub fn required_field<'a>(record: &'a StringRecord, index: usize, name: &str) -> Result<&'a str> {
    record.get(index).ok_or_else(|| {
        ConvertError::Parse(format!(
            "missing {name}: expected field {} but line has {}",
            index + 1,
            record.len()
        ))
    })
}

/// Fetch and parse field `index`
pub fn parse_required<T: FromStr>(record: &StringRecord, index: usize, name: &str) -> Result<T> {
    parse_field(required_field(record, index, name)?, name)
}

/// Split a compound field such as `01/02/24` into exactly `N` integers
pub fn split_ints<const N: usize>(value: &str, sep: char, name: &str) -> Result<[i32; N]> {
    let parts: Vec<&str> = value.split(sep).collect();
    if parts.len() != N {
        return Err(ConvertError::Parse(format!(
            "invalid {name} '{value}': expected {} parts",
            N
        )));
    }

    let mut out = [0i32; N];
    for (slot, part) in out.iter_mut().zip(parts) {
        *slot = parse_field(part, name)?;
    }
    Ok(out)
}
