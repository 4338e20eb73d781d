use thiserror::Error;

use crate::cigar_parser::{decode_cigar, DecodedCigar};

/// Zero-based column of the CIGAR field in a SAM record.
pub const CIGAR_COLUMN: usize = 5;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    #[error("SAM record has only {tabs_found} tab(s), expected at least 5 before the CIGAR field")]
    MalformedRecord { tabs_found: usize },
}

/// Finds the CIGAR substring inside a raw record.
pub trait FieldLocator {
    fn locate<'a>(&self, record: &'a str) -> Result<&'a str, RecordError>;
}

/// Locates a field by counting the tabs that precede it.
///
/// The field runs up to the next tab, or to the end of the record when no
/// tab follows it.
#[derive(Debug, Clone, Copy)]
pub struct TabFieldLocator {
    pub column: usize,
}

impl Default for TabFieldLocator {
    fn default() -> Self {
        TabFieldLocator {
            column: CIGAR_COLUMN,
        }
    }
}

impl FieldLocator for TabFieldLocator {
    fn locate<'a>(&self, record: &'a str) -> Result<&'a str, RecordError> {
        let mut start = 0;
        for tabs_found in 0..self.column {
            match record[start..].find('\t') {
                Some(pos) => start += pos + 1,
                None => return Err(RecordError::MalformedRecord { tabs_found }),
            }
        }
        let rest = &record[start..];
        let end = rest.find('\t').unwrap_or(rest.len());
        Ok(&rest[..end])
    }
}

pub fn decode_record_with<L: FieldLocator + ?Sized>(
    locator: &L,
    record: &str,
) -> Result<DecodedCigar, RecordError> {
    locator.locate(record).map(decode_cigar)
}

/// Decodes the CIGAR column of a tab-delimited SAM record.
pub fn decode_record(record: &str) -> Result<DecodedCigar, RecordError> {
    decode_record_with(&TabFieldLocator::default(), record)
}
