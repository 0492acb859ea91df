//! # chrom-remap
//!
//! Rename reference sequences in BAM/SAM headers.
//!
//! Reference sources disagree on contig names (`chr1` in UCSC, `1` in Ensembl,
//! `NC_000001.11` in RefSeq). `chrom-remap` rewrites the `SN:` tag of each `@SQ`
//! header line using a tab-separated mapping file, such as those from the
//! `ChromosomeMappings` project, leaving every other line and field untouched.
//!
//! ## Example
//!
//! ```rust
//! use chrom_remap::{HeaderRemapper, parsing::mapping::parse_mapping_text};
//!
//! let table = parse_mapping_text("chr1\t1\nchrM\tMT\n");
//! let remapper = HeaderRemapper::new(table);
//!
//! assert_eq!(
//!     remapper.transform("@SQ\tSN:chr1\tLN:248956422"),
//!     "@SQ\tSN:1\tLN:248956422"
//! );
//! assert_eq!(remapper.transform("@HD\tVN:1.6"), "@HD\tVN:1.6");
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Mapping table and line remapper
//! - [`parsing`]: Mapping file parser
//! - [`remap`]: Streaming driver over header text
//! - [`cli`]: Command-line interface implementation

pub mod cli;
pub mod core;
pub mod parsing;
pub mod remap;

// Re-export commonly used types for convenience
pub use core::mapping::MappingTable;
pub use core::remapper::{HeaderRemapper, LineOutcome};
pub use remap::{remap_stream, RemapSummary, StreamError};
