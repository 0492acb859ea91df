//! Parsers for chromosome mapping files.
//!
//! A mapping file has one record per line, tab-separated:
//!
//! ```text
//! chr1	1
//! chrM	MT
//! chrUn_KI270302v1	KI270302.1
//! chrEBV
//! ```
//!
//! | Column | Description | Required |
//! |--------|-------------|----------|
//! | 1 | Original contig name | Yes |
//! | 2 | Remapped contig name | No (defaults to the original) |
//!
//! Fields are trimmed. Blank lines and lines with an empty first column are skipped.

pub mod mapping;
