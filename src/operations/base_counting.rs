//! Per-base counting over the DNA alphabet
//!
//! Single scalar pass; the inputs are bounded at 1 kbp, so there is
//! nothing to vectorize here.

use crate::error::{Result, RosalibError};
use crate::types::BaseComposition;

/// Count occurrences of each DNA base in a sequence
///
/// Strict over the uppercase alphabet {A, C, G, T}. The returned counts
/// always sum to the input length.
///
/// # Errors
///
/// Returns [`RosalibError::InvalidSymbol`] for any byte outside
/// {A, C, G, T}.
///
/// # Examples
///
/// ```
/// use rosalib::operations::count_bases;
///
/// let comp = count_bases(b"AGCTTTTCATTCTGACTGCA").unwrap();
/// assert_eq!(comp.total(), 20);
/// assert_eq!(comp.t, 8);
/// ```
pub fn count_bases(seq: &[u8]) -> Result<BaseComposition> {
    let mut comp = BaseComposition::default();

    for (position, &base) in seq.iter().enumerate() {
        match base {
            b'A' => comp.a += 1,
            b'C' => comp.c += 1,
            b'G' => comp.g += 1,
            b'T' => comp.t += 1,
            symbol => return Err(RosalibError::InvalidSymbol { position, symbol }),
        }
    }

    Ok(comp)
}
