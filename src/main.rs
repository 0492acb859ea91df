use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod core;
mod parsing;
mod remap;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("chrom_remap=debug,info")
    } else {
        EnvFilter::new("chrom_remap=warn")
    };

    // stdout carries the header, so logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    cli::run(&cli)
}
