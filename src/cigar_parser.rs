use std::fmt;

/// The nine SAM CIGAR operation kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CigarOp {
    /// Alignment match or mismatch (M).
    Match,
    /// Sequence match (=).
    Equal,
    /// Insertion to the reference (I).
    Insertion,
    /// Deletion from the reference (D).
    Deletion,
    /// Sequence mismatch (X).
    Mismatch,
    /// Hard clip, bases absent from SEQ (H).
    HardClip,
    /// Soft clip, bases present in SEQ (S).
    SoftClip,
    /// Silent deletion from the padded reference (P).
    Padding,
    /// Skipped reference region, e.g. an intron (N).
    Skip,
}

impl CigarOp {
    pub const ALL: [CigarOp; 9] = [
        CigarOp::Match,
        CigarOp::Equal,
        CigarOp::Insertion,
        CigarOp::Deletion,
        CigarOp::Mismatch,
        CigarOp::HardClip,
        CigarOp::SoftClip,
        CigarOp::Padding,
        CigarOp::Skip,
    ];

    pub fn from_code(c: char) -> Option<Self> {
        match c {
            'M' => Some(CigarOp::Match),
            '=' => Some(CigarOp::Equal),
            'I' => Some(CigarOp::Insertion),
            'D' => Some(CigarOp::Deletion),
            'X' => Some(CigarOp::Mismatch),
            'H' => Some(CigarOp::HardClip),
            'S' => Some(CigarOp::SoftClip),
            'P' => Some(CigarOp::Padding),
            'N' => Some(CigarOp::Skip),
            _ => None,
        }
    }

    pub fn code(self) -> char {
        match self {
            CigarOp::Match => 'M',
            CigarOp::Equal => '=',
            CigarOp::Insertion => 'I',
            CigarOp::Deletion => 'D',
            CigarOp::Mismatch => 'X',
            CigarOp::HardClip => 'H',
            CigarOp::SoftClip => 'S',
            CigarOp::Padding => 'P',
            CigarOp::Skip => 'N',
        }
    }

    /// Slot of this kind in the per-operation totals table.
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for CigarOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CigarElement {
    pub op: CigarOp,
    pub len: u64,
}

impl fmt::Display for CigarElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.len, self.op)
    }
}

/// A CIGAR group whose operation code was not recognised.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidGroup {
    /// Byte offset of the offending code within the CIGAR field.
    pub offset: usize,
    pub code: char,
}

/// The result of decoding one CIGAR field.
///
/// Groups with an unknown operation code are left out of both `ops` and the
/// totals; they only show up through `is_malformed` and `invalid_groups`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecodedCigar {
    ops: Vec<CigarElement>,
    totals: [u64; 9],
    is_unavailable: bool,
    is_malformed: bool,
    invalid_groups: Vec<InvalidGroup>,
    raw: String,
}

impl DecodedCigar {
    /// Recognised groups, in the order they appear in the field.
    pub fn ops(&self) -> &[CigarElement] {
        &self.ops
    }

    /// True when the field was the SAM `*` placeholder.
    pub fn is_unavailable(&self) -> bool {
        self.is_unavailable
    }

    /// True when at least one group ended in an unknown operation code.
    pub fn is_malformed(&self) -> bool {
        self.is_malformed
    }

    pub fn invalid_groups(&self) -> &[InvalidGroup] {
        &self.invalid_groups
    }

    /// The CIGAR field as it appeared in the record.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Summed run length of every operation of kind `op`.
    pub fn total(&self, op: CigarOp) -> u64 {
        self.totals[op.index()]
    }

    pub fn skipped(&self) -> u64 {
        self.total(CigarOp::Skip)
    }

    /// Sum of all per-kind totals.
    ///
    /// Totals saturate at `u64::MAX`, so for absurd run lengths this can be
    /// smaller than the sum of `ops()` lengths.
    pub fn total_len(&self) -> u64 {
        self.totals.iter().fold(0, |acc, &t| acc.saturating_add(t))
    }

    fn push(&mut self, op: CigarOp, len: u64) {
        self.ops.push(CigarElement { op, len });
        let slot = &mut self.totals[op.index()];
        *slot = slot.saturating_add(len);
    }
}

impl fmt::Display for DecodedCigar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_unavailable {
            return write!(f, "*");
        }
        for op in &self.ops {
            write!(f, "{}", op)?;
        }
        Ok(())
    }
}

/// Decodes a bare CIGAR field.
///
/// Never fails. Only unknown operation codes are flagged; empty digit groups
/// decode to a zero length and trailing digits without a code are ignored.
pub fn decode_cigar(field: &str) -> DecodedCigar {
    let mut cigar = DecodedCigar::default();

    if field.starts_with('*') {
        cigar.is_unavailable = true;
        cigar.raw.push('*');
        return cigar;
    }

    cigar.raw.push_str(field);
    let mut len: u64 = 0;

    for (offset, c) in field.char_indices() {
        if let Some(digit) = c.to_digit(10) {
            len = len.saturating_mul(10).saturating_add(u64::from(digit));
            continue;
        }
        match CigarOp::from_code(c) {
            Some(op) => cigar.push(op, len),
            None => {
                cigar.is_malformed = true;
                cigar.invalid_groups.push(InvalidGroup { offset, code: c });
            }
        }
        len = 0;
    }
    cigar
}
