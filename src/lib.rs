//! rosalib: sequence-transformation primitives for the introductory
//! ROSALIND problems
//!
//! # Overview
//!
//! A pure computation library behind the classic warm-up exercises:
//! per-base counting (DNA), transcription (RNA), reverse complement
//! (REVC), GC-content ranking over FASTA records (GC), and the rabbit
//! population recurrence (FIB).
//!
//! Inputs are small (at most 1 kbp per sequence, at most 10 records), so
//! everything is single-pass, synchronous, and in-memory. The crate
//! exposes no CLI or file surface; a thin driver supplies the raw dataset
//! text and renders the typed results.
//!
//! ## Quick Start
//!
//! ```
//! use rosalib::fasta;
//! use rosalib::operations::{count_bases, highest_gc, transcribe};
//!
//! # fn main() -> rosalib::Result<()> {
//! let comp = count_bases(b"AGCTTTTCA")?;
//! println!("{}", comp); // "2 2 1 4" — A C G T
//!
//! let rna = transcribe(b"GATGGAACT")?;
//! assert_eq!(rna, b"GAUGGAACU");
//!
//! let records = fasta::parse(">Rosalind_0001\nGCGCGC\n")?;
//! let best = highest_gc(&records)?;
//! assert_eq!(best.id, "Rosalind_0001");
//! # Ok(())
//! # }
//! ```
//!
//! ## Module Organization
//!
//! - [`fasta`]: in-memory FASTA parsing
//! - [`operations`]: base counting, transcription, reverse complement,
//!   GC-content ranking
//! - [`population`]: memoized population-growth recurrence

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod fasta;
pub mod operations;
pub mod population;
pub mod types;

// Re-export commonly used types
pub use error::{Result, RosalibError};
pub use population::PopulationModel;
pub use types::{BaseComposition, FastaRecord, GcReport};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
