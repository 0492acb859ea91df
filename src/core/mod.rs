//! Core types for contig name remapping.
//!
//! - [`MappingTable`](mapping::MappingTable): original contig name to remapped name
//! - [`HeaderRemapper`](remapper::HeaderRemapper): rewrites the SN tag of `@SQ` lines
//!
//! ## Contig Naming
//!
//! Different reference sources use different naming conventions:
//!
//! | Source | Chromosome 1 | Mitochondrial |
//! |--------|--------------|---------------|
//! | UCSC   | chr1         | chrM          |
//! | NCBI   | NC_000001.11 | NC_012920.1   |
//! | Ensembl| 1            | MT            |
//!
//! Remapping uses **exact names**: a contig is renamed only when its full SN value
//! is a key in the table.

pub mod mapping;
pub mod remapper;
