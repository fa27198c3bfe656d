//! Sequence operations
//!
//! # Organization
//!
//! - `base_counting`: per-base tallies over the DNA alphabet
//! - `sequence`: transcription, complement, reverse complement
//! - `gc_content`: GC percentage and record ranking

pub mod base_counting;
pub mod gc_content;
pub mod sequence;

pub use base_counting::count_bases;
pub use gc_content::{gc_content, highest_gc};
pub use sequence::{complement, reverse_complement, transcribe};
