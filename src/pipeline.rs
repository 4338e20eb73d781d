use anyhow::{Context, Result};
use log::{debug, warn};
use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};

use crate::filter::{CigarFilter, Rejection};
use crate::sam_record::decode_record;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterOptions {
    pub filter: CigarFilter,
    pub keep_header: bool,
}

impl Default for FilterOptions {
    fn default() -> Self {
        FilterOptions {
            filter: CigarFilter::default(),
            keep_header: true,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterSummary {
    pub headers: usize,
    pub records: usize,
    pub kept: usize,
    pub unavailable: usize,
    pub malformed_cigar: usize,
    pub too_many_skipped: usize,
    /// Lines that are not UTF-8 or too short to contain a CIGAR column.
    pub malformed_records: usize,
}

impl FilterSummary {
    pub fn dropped(&self) -> usize {
        self.records - self.kept
    }

    fn count_rejection(&mut self, rejection: &Rejection) {
        match rejection {
            Rejection::Unavailable => self.unavailable += 1,
            Rejection::Malformed { .. } => self.malformed_cigar += 1,
            Rejection::TooManySkippedBases { .. } => self.too_many_skipped += 1,
        }
    }
}

impl fmt::Display for FilterSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Processed {} records ({} header lines): kept {}, dropped {} \
             (unavailable CIGAR: {}, malformed CIGAR: {}, too many skipped bases: {}, malformed records: {})",
            self.records,
            self.headers,
            self.kept,
            self.dropped(),
            self.unavailable,
            self.malformed_cigar,
            self.too_many_skipped,
            self.malformed_records
        )
    }
}

/// Streams SAM text from `reader`, writing header lines and passing records to `writer`.
pub fn filter_sam<R: BufRead, W: Write>(
    reader: R,
    writer: &mut W,
    options: &FilterOptions,
) -> Result<FilterSummary> {
    let mut summary = FilterSummary::default();

    for (line_number, line) in reader.split(b'\n').enumerate() {
        let mut line = line.context(format!("Failed to read SAM line {}", line_number + 1))?;
        if line.last() == Some(&b'\r') {
            line.pop();
        }
        if line.is_empty() {
            continue;
        }

        if line.starts_with(b"@") {
            summary.headers += 1;
            if options.keep_header {
                write_line(writer, &line).context("Failed to write SAM header line")?;
            }
            continue;
        }

        summary.records += 1;
        let text = match std::str::from_utf8(&line) {
            Ok(text) => text,
            Err(e) => {
                warn!("Skipping line {}: not valid UTF-8 ({})", line_number + 1, e);
                summary.malformed_records += 1;
                continue;
            }
        };
        let cigar = match decode_record(text) {
            Ok(cigar) => cigar,
            Err(e) => {
                warn!("Skipping line {}: {}", line_number + 1, e);
                summary.malformed_records += 1;
                continue;
            }
        };

        match options.filter.check(&cigar) {
            Ok(()) => {
                summary.kept += 1;
                write_line(writer, &line)
                    .context(format!("Failed to write SAM record from line {}", line_number + 1))?;
            }
            Err(rejection) => {
                debug!("Line {} ({}): {}", line_number + 1, cigar.raw(), rejection);
                summary.count_rejection(&rejection);
            }
        }
    }

    writer.flush().context("Failed to flush output")?;
    Ok(summary)
}

fn write_line<W: Write>(writer: &mut W, line: &[u8]) -> io::Result<()> {
    writer.write_all(line)?;
    writer.write_all(b"\n")
}

/// Runs [`filter_sam`] between two paths; `-` stands for stdin or stdout.
pub fn filter_sam_file(input: &str, output: &str, options: &FilterOptions) -> Result<FilterSummary> {
    let reader: Box<dyn BufRead> = if input == "-" {
        Box::new(BufReader::new(io::stdin()))
    } else {
        let file = File::open(input).context(format!("Failed to open SAM file: {}", input))?;
        Box::new(BufReader::new(file))
    };

    let mut writer: Box<dyn Write> = if output == "-" {
        Box::new(BufWriter::new(io::stdout()))
    } else {
        let file = File::create(output).context(format!("Failed to create output file: {}", output))?;
        Box::new(BufWriter::new(file))
    };

    filter_sam(reader, &mut writer, options)
}
