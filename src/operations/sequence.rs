//! Core sequence transformations
//!
//! Provides the fundamental DNA transformations for the introductory
//! problems:
//! - Transcription (DNA → RNA, T replaced by U)
//! - Reverse complement
//! - Complement only
//!
//! All transformations are strict over the uppercase DNA alphabet
//! {A, C, G, T}: any other byte fails with
//! [`RosalibError::InvalidSymbol`]. Problem inputs are uppercase DNA, so
//! lowercase and IUPAC ambiguity codes are out of alphabet here.
//!
//! # Examples
//!
//! ```
//! use rosalib::operations::{transcribe, reverse_complement, complement};
//!
//! # fn main() -> rosalib::Result<()> {
//! let seq = b"ATGC";
//! assert_eq!(transcribe(seq)?, b"AUGC");
//! assert_eq!(reverse_complement(seq)?, b"GCAT");
//! assert_eq!(complement(seq)?, b"TACG");
//! # Ok(())
//! # }
//! ```

use crate::error::{Result, RosalibError};

/// Lookup table for the strict DNA complement
///
/// A↔T, G↔C only. Every other byte maps to 0, the sentinel for an
/// out-of-alphabet symbol.
const COMPLEMENT_TABLE: [u8; 256] = {
    let mut table = [0u8; 256];
    table[b'A' as usize] = b'T';
    table[b'T' as usize] = b'A';
    table[b'G' as usize] = b'C';
    table[b'C' as usize] = b'G';
    table
};

/// Transcribe a DNA sequence into RNA
///
/// Replaces every 'T' with 'U'; A, C, and G pass through unchanged. The
/// output has the same length as the input.
///
/// # Errors
///
/// Returns [`RosalibError::InvalidSymbol`] for any byte outside
/// {A, C, G, T}.
///
/// # Examples
///
/// ```
/// use rosalib::operations::transcribe;
///
/// let rna = transcribe(b"GATGGAACTTGACTACGTAAATT").unwrap();
/// assert_eq!(rna, b"GAUGGAACUUGACUACGUAAAUU");
/// ```
pub fn transcribe(seq: &[u8]) -> Result<Vec<u8>> {
    seq.iter()
        .enumerate()
        .map(|(position, &base)| match base {
            b'T' => Ok(b'U'),
            b'A' | b'C' | b'G' => Ok(base),
            symbol => Err(RosalibError::InvalidSymbol { position, symbol }),
        })
        .collect()
}

/// Reverse complement a DNA sequence
///
/// Reverses the symbol order, then maps each base through the pairing
/// A↔T, G↔C. Applying the operation twice returns the original sequence.
///
/// # Errors
///
/// Returns [`RosalibError::InvalidSymbol`] for any byte outside
/// {A, C, G, T}. The reported position refers to the input sequence.
///
/// # Examples
///
/// ```
/// use rosalib::operations::reverse_complement;
///
/// let rc = reverse_complement(b"AAAACCCGGT").unwrap();
/// assert_eq!(rc, b"ACCGGGTTTT");
///
/// // Involutive: RC(RC(x)) = x
/// let back = reverse_complement(&rc).unwrap();
/// assert_eq!(back, b"AAAACCCGGT");
/// ```
pub fn reverse_complement(seq: &[u8]) -> Result<Vec<u8>> {
    let len = seq.len();
    seq.iter()
        .rev()
        .enumerate()
        .map(|(i, &base)| match COMPLEMENT_TABLE[base as usize] {
            0 => Err(RosalibError::InvalidSymbol {
                position: len - 1 - i,
                symbol: base,
            }),
            mapped => Ok(mapped),
        })
        .collect()
}

/// Complement a DNA sequence without reversing
///
/// Maps each base through A↔T, G↔C in place order. Together with a plain
/// reverse this decomposes [`reverse_complement`]:
/// `RC(x) = reverse(complement(x))`.
///
/// # Errors
///
/// Returns [`RosalibError::InvalidSymbol`] for any byte outside
/// {A, C, G, T}.
pub fn complement(seq: &[u8]) -> Result<Vec<u8>> {
    seq.iter()
        .enumerate()
        .map(|(position, &base)| match COMPLEMENT_TABLE[base as usize] {
            0 => Err(RosalibError::InvalidSymbol {
                position,
                symbol: base,
            }),
            mapped => Ok(mapped),
        })
        .collect()
}
