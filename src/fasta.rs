//! In-memory FASTA parsing
//!
//! # Format
//!
//! FASTA format consists of:
//! - Header line starting with '>' followed by sequence identifier
//! - One or more sequence lines (can be wrapped)
//!
//! Example:
//! ```text
//! >Rosalind_6404
//! CCTGCGGAAGATCGGCACTAGAATAGCCAGAACCGTTTCTCTGAGGCTTCCGGCCTTCCC
//! TCCCACTAATAATTCTGAGG
//! >Rosalind_5959
//! CCATCGGTAGCGCATCCTTAGTCCAATTAAGTCCCTATCCAGGCGCTCCGCCGAAGGTCT
//! ```
//!
//! Problem inputs are bounded (at most 10 records of at most 1 kbp each),
//! so the parser takes the whole dataset as one string and returns an eager
//! `Vec` of records in input order. The '>' delimiter is assumed reserved
//! for record boundaries and never appears inside sequence data.

use crate::error::{Result, RosalibError};
use crate::types::FastaRecord;

/// Parse a FASTA-formatted string into records
///
/// Segments the input on '>'. Within each segment, the first line is the
/// record identifier and all remaining lines are concatenated (line breaks
/// stripped, surrounding whitespace trimmed) to form the sequence body.
/// Text before the first '>' is discarded, so both `">id\nACGT"` and
/// `"\n>id\nACGT"` parse identically.
///
/// # Errors
///
/// Returns [`RosalibError::MalformedRecord`] if a non-empty segment has an
/// empty identifier line.
///
/// # Examples
///
/// ```
/// use rosalib::fasta::parse;
///
/// let records = parse(">seq1\nGATT\nACA\n>seq2\nACGT\n").unwrap();
/// assert_eq!(records.len(), 2);
/// assert_eq!(records[0].id, "seq1");
/// assert_eq!(records[0].sequence, b"GATTACA");
///
/// // Empty input is not an error
/// assert!(parse("").unwrap().is_empty());
/// ```
pub fn parse(raw: &str) -> Result<Vec<FastaRecord>> {
    let mut records = Vec::new();

    // skip(1): text before the first '>' is not a record
    for segment in raw.split('>').skip(1) {
        let mut lines = segment.lines();
        let id = lines.next().unwrap_or("").trim();

        let body: String = lines.collect();
        let sequence = body.trim().as_bytes().to_vec();

        if id.is_empty() {
            if segment.trim().is_empty() {
                // A bare trailing '>' carries no record
                continue;
            }
            return Err(RosalibError::MalformedRecord {
                msg: "record has no identifier line".to_string(),
            });
        }

        records.push(FastaRecord::new(id.to_string(), sequence));
    }

    Ok(records)
}
