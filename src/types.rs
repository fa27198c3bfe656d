//! Common types used throughout rosalib

use std::fmt;

/// A FASTA record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FastaRecord {
    /// Sequence identifier (without '>' prefix)
    pub id: String,
    /// DNA sequence
    pub sequence: Vec<u8>,
}

impl FastaRecord {
    /// Create a new FASTA record
    pub fn new(id: String, sequence: Vec<u8>) -> Self {
        Self { id, sequence }
    }
}

/// Per-base occurrence counts over the DNA alphabet
///
/// Produced by [`count_bases`](crate::operations::count_bases). The counts
/// always sum to the length of the counted sequence.
///
/// # Examples
///
/// ```
/// use rosalib::operations::count_bases;
///
/// let comp = count_bases(b"ACGTAC").unwrap();
/// assert_eq!(comp.a, 2);
/// assert_eq!(comp.total(), 6);
/// assert_eq!(comp.to_string(), "2 2 1 1");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BaseComposition {
    /// Count of 'A'
    pub a: usize,
    /// Count of 'C'
    pub c: usize,
    /// Count of 'G'
    pub g: usize,
    /// Count of 'T'
    pub t: usize,
}

impl BaseComposition {
    /// Total number of counted bases
    pub fn total(&self) -> usize {
        self.a + self.c + self.g + self.t
    }
}

impl fmt::Display for BaseComposition {
    /// Four space-separated integers in fixed A C G T order
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} {}", self.a, self.c, self.g, self.t)
    }
}

/// GC-content of a single record, as returned by
/// [`highest_gc`](crate::operations::highest_gc)
#[derive(Debug, Clone, PartialEq)]
pub struct GcReport {
    /// Record identifier
    pub id: String,
    /// GC-content as a percentage in [0, 100]
    pub gc_percent: f64,
}

impl fmt::Display for GcReport {
    /// Two lines: identifier, then the percentage with six decimals
    /// (matches the reference answer format, e.g. `60.919540`)
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n{:.6}", self.id, self.gc_percent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_composition_display_order() {
        let comp = BaseComposition { a: 20, c: 12, g: 17, t: 21 };
        assert_eq!(comp.to_string(), "20 12 17 21");
        assert_eq!(comp.total(), 70);
    }

    #[test]
    fn test_gc_report_display() {
        let report = GcReport {
            id: "Rosalind_0808".to_string(),
            gc_percent: 60.91954022988506,
        };
        assert_eq!(report.to_string(), "Rosalind_0808\n60.919540");
    }
}
