use cigarfilter::cigar_parser::decode_cigar;
use cigarfilter::filter::{passes, CigarFilter, Rejection, MAX_SKIPPED_BASES};
use cigarfilter::sam_record::decode_record;

#[test]
fn test_spliced_record_passes() {
    let cigar = decode_record("read1\t0\tchr1\t100\t60\t9M32N8M\t*\t0\t0\t*\t*").unwrap();
    assert!(passes(&cigar));
}

#[test]
fn test_skip_threshold_boundary() {
    assert_eq!(MAX_SKIPPED_BASES, 1000);
    assert!(passes(&decode_cigar("50M1000N50M")));
    assert!(passes(&decode_cigar("50M500N10M500N50M")));
    assert!(!passes(&decode_cigar("50M1001N50M")));
    assert!(!passes(&decode_cigar("50M500N10M501N50M")));
}

#[test]
fn test_unavailable_fails() {
    let cigar = decode_cigar("*");
    assert!(!passes(&cigar));
    assert_eq!(CigarFilter::default().check(&cigar), Err(Rejection::Unavailable));
}

#[test]
fn test_malformed_fails_regardless_of_skip() {
    let cigar = decode_cigar("5M3Q2M");
    assert_eq!(cigar.skipped(), 0);
    assert!(!passes(&cigar));
    assert_eq!(
        CigarFilter::default().check(&cigar),
        Err(Rejection::Malformed { invalid_groups: 1 })
    );
}

#[test]
fn test_custom_threshold() {
    let cigar = decode_cigar("10M20N10M");
    let strict = CigarFilter::new(10);
    assert!(!strict.passes(&cigar));
    assert_eq!(
        strict.check(&cigar),
        Err(Rejection::TooManySkippedBases { skipped: 20, max: 10 })
    );
    assert!(CigarFilter::new(20).passes(&cigar));
}

#[test]
fn test_rejection_messages() {
    let rejection = Rejection::TooManySkippedBases { skipped: 1500, max: 1000 };
    assert_eq!(
        rejection.to_string(),
        "CIGAR skips 1500 reference bases, more than the allowed 1000"
    );
    assert_eq!(Rejection::Unavailable.to_string(), "CIGAR unavailable (*)");
}
