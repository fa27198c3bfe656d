//! GC-content calculation and ranking
//!
//! GC-content here reproduces the reference solver's classification: a
//! byte counts toward GC unless it is 'A' or 'T'. That means non-ACGT
//! bytes are silently counted as GC rather than rejected. Callers that
//! need strict alphabet validation run
//! [`count_bases`](crate::operations::count_bases) first.

use crate::error::{Result, RosalibError};
use crate::types::{FastaRecord, GcReport};

/// Calculate GC-content of a sequence as a percentage in [0, 100]
///
/// Classifies each byte as AT ('A' or 'T') versus everything else; the
/// "everything else" bucket is counted as GC. An empty sequence yields
/// 0.0 rather than NaN.
///
/// # Examples
///
/// ```
/// use rosalib::operations::gc_content;
///
/// let gc = gc_content(b"AGCTATAG");
/// assert!((gc - 37.5).abs() < 0.001);
/// ```
pub fn gc_content(seq: &[u8]) -> f64 {
    if seq.is_empty() {
        return 0.0;
    }

    let gc = seq
        .iter()
        .filter(|&&base| !matches!(base, b'A' | b'T'))
        .count();

    gc as f64 / seq.len() as f64 * 100.0
}

/// Select the record with the highest GC-content
///
/// Ties favor the record appearing later in the input, matching the
/// reference behavior of a stable ascending sort followed by taking the
/// last element.
///
/// # Errors
///
/// Returns [`RosalibError::EmptyInput`] if `records` is empty.
///
/// # Examples
///
/// ```
/// use rosalib::fasta::parse;
/// use rosalib::operations::highest_gc;
///
/// let records = parse(">low\nATAT\n>high\nGCGC\n").unwrap();
/// let report = highest_gc(&records).unwrap();
/// assert_eq!(report.id, "high");
/// assert!((report.gc_percent - 100.0).abs() < 0.001);
/// ```
pub fn highest_gc(records: &[FastaRecord]) -> Result<GcReport> {
    let mut best: Option<GcReport> = None;

    for record in records {
        let gc_percent = gc_content(&record.sequence);
        // >= so that later records win ties
        if best.as_ref().map_or(true, |b| gc_percent >= b.gc_percent) {
            best = Some(GcReport {
                id: record.id.clone(),
                gc_percent,
            });
        }
    }

    best.ok_or(RosalibError::EmptyInput)
}
