use thiserror::Error;

use crate::cigar_parser::DecodedCigar;

/// Largest total of skipped (N) bases a passing CIGAR may carry.
pub const MAX_SKIPPED_BASES: u64 = 1000;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    #[error("CIGAR unavailable (*)")]
    Unavailable,
    #[error("CIGAR malformed: {invalid_groups} unrecognised operation(s)")]
    Malformed { invalid_groups: usize },
    #[error("CIGAR skips {skipped} reference bases, more than the allowed {max}")]
    TooManySkippedBases { skipped: u64, max: u64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CigarFilter {
    pub max_skipped_bases: u64,
}

impl Default for CigarFilter {
    fn default() -> Self {
        CigarFilter {
            max_skipped_bases: MAX_SKIPPED_BASES,
        }
    }
}

impl CigarFilter {
    pub fn new(max_skipped_bases: u64) -> Self {
        CigarFilter { max_skipped_bases }
    }

    /// Returns the first reason `cigar` fails the filter, if any.
    pub fn check(&self, cigar: &DecodedCigar) -> Result<(), Rejection> {
        if cigar.is_unavailable() {
            return Err(Rejection::Unavailable);
        }
        if cigar.is_malformed() {
            return Err(Rejection::Malformed {
                invalid_groups: cigar.invalid_groups().len(),
            });
        }
        let skipped = cigar.skipped();
        if skipped > self.max_skipped_bases {
            return Err(Rejection::TooManySkippedBases {
                skipped,
                max: self.max_skipped_bases,
            });
        }
        Ok(())
    }

    pub fn passes(&self, cigar: &DecodedCigar) -> bool {
        self.check(cigar).is_ok()
    }
}

/// Applies the default policy: valid, available, and at most
/// [`MAX_SKIPPED_BASES`] skipped bases.
pub fn passes(cigar: &DecodedCigar) -> bool {
    CigarFilter::default().passes(cigar)
}
