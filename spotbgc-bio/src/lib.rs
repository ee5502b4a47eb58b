//! Sequence and alignment handling for the SPOT-BGC pipeline helpers

pub mod filter;
pub mod formats;
pub mod mask;

// Re-export commonly used types
pub use filter::{filter_contigs, ExclusionSet, FilterOptions, FilterSummary};
pub use formats::blast::{read_blast_tabular, BlastRecord};
pub use formats::fasta::{read_collection, SequenceCollection, SequenceRecord};
pub use mask::{hard_mask, hard_mask_file, MaskOptions, MaskSummary};
