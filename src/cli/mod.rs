//! Command-line interface for chrom-remap.
//!
//! ## Usage
//!
//! ```text
//! # Rename UCSC contigs to Ensembl names and reheader the BAM
//! samtools view -H in.bam | chrom-remap GRCh38_UCSC2ensembl.txt | samtools reheader - in.bam > out.bam
//!
//! # Log a summary of what was remapped
//! samtools view -H in.bam | chrom-remap --verbose GRCh38_UCSC2ensembl.txt > header.sam
//! ```

use std::io;
use std::path::PathBuf;

use clap::Parser;
use tracing::{info, warn};

use crate::core::remapper::HeaderRemapper;
use crate::parsing::mapping::parse_mapping_file;
use crate::remap::remap_stream;

#[derive(Parser)]
#[command(name = "chrom-remap")]
#[command(author = "Fulcrum Genomics")]
#[command(version)]
#[command(about = "Remap chromosome names in BAM/SAM header @SQ lines")]
#[command(
    long_about = "chrom-remap reads a BAM/SAM header from stdin, renames the SN tag of each @SQ line using a mapping file, and writes the header to stdout.\n\nThe mapping file has one contig per line: <original>[TAB<remapped>]. Names without a mapping are left unchanged.\n\nUsage:\n  samtools view -H <input.bam> | chrom-remap <mapping_file> | samtools reheader - <input.bam> > <output.bam>"
)]
pub struct Cli {
    /// Path to the chromosome mapping file
    pub mapping_file: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Load the mapping file, then remap stdin to stdout.
///
/// # Errors
///
/// Returns an error if the mapping file cannot be loaded, or if reading stdin
/// or writing stdout fails.
pub fn run(cli: &Cli) -> anyhow::Result<()> {
    let table = parse_mapping_file(&cli.mapping_file)?;
    if table.is_empty() {
        warn!(
            path = %cli.mapping_file.display(),
            "Mapping file has no entries, header will pass through unchanged"
        );
    }

    let remapper = HeaderRemapper::new(table);
    let summary = remap_stream(&remapper, io::stdin().lock(), io::stdout().lock())?;

    info!(
        lines = summary.lines,
        sq_lines = summary.sq_lines,
        remapped = summary.remapped,
        unmapped = summary.unmapped,
        "Finished remapping header"
    );
    if summary.sq_lines > 0 && summary.remapped == 0 {
        warn!("No @SQ sequence names matched the mapping file");
    }

    Ok(())
}
