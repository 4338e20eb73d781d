pub mod cigar_parser;
pub mod filter;
pub mod pipeline;
pub mod sam_record;

pub use cigar_parser::{decode_cigar, CigarElement, CigarOp, DecodedCigar, InvalidGroup};
pub use filter::{passes, CigarFilter, Rejection, MAX_SKIPPED_BASES};
pub use pipeline::{filter_sam, filter_sam_file, FilterOptions, FilterSummary};
pub use sam_record::{decode_record, decode_record_with, FieldLocator, RecordError, TabFieldLocator};
