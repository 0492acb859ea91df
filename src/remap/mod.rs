//! Streaming header remapping.
//!
//! Reads header text line by line, remaps each line with a [`HeaderRemapper`],
//! and writes it out immediately so the output can be piped straight into
//! `samtools reheader -`.
//!
//! ```rust,no_run
//! use chrom_remap::{remap_stream, HeaderRemapper, MappingTable};
//! use std::io;
//!
//! let table: MappingTable = [("chr1", "1"), ("chrM", "MT")].into_iter().collect();
//! let remapper = HeaderRemapper::new(table);
//!
//! let summary = remap_stream(&remapper, io::stdin().lock(), io::stdout().lock()).unwrap();
//! eprintln!("{} @SQ lines remapped", summary.remapped);
//! ```

use std::io::{self, BufRead, Write};

use thiserror::Error;
use tracing::debug;

use crate::core::remapper::{HeaderRemapper, LineOutcome};

#[derive(Error, Debug)]
pub enum StreamError {
    #[error("Error reading header input at line {line}: {source}")]
    Read {
        line: usize,
        #[source]
        source: io::Error,
    },

    #[error("Error writing header output at line {line}: {source}")]
    Write {
        line: usize,
        #[source]
        source: io::Error,
    },
}

/// Counts collected over one pass of [`remap_stream`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RemapSummary {
    /// All lines read
    pub lines: usize,
    /// `@SQ` lines with an SN tag
    pub sq_lines: usize,
    /// `@SQ` lines whose name was rewritten
    pub remapped: usize,
    /// `@SQ` lines whose name had no mapping
    pub unmapped: usize,
}

impl RemapSummary {
    fn record(&mut self, outcome: LineOutcome) {
        self.lines += 1;
        match outcome {
            LineOutcome::Passthrough => {}
            LineOutcome::Remapped => {
                self.sq_lines += 1;
                self.remapped += 1;
            }
            LineOutcome::Unmapped => {
                self.sq_lines += 1;
                self.unmapped += 1;
            }
        }
    }
}

/// Remap every line of `reader` into `writer`, one output line per input line.
///
/// Only the trailing `\n` is stripped before remapping; every output line is
/// written with a `\n` and flushed before the next line is read.
///
/// # Errors
///
/// Returns `StreamError::Read` if input cannot be read (including invalid UTF-8),
/// or `StreamError::Write` if output cannot be written. Lines before the failure
/// have already been written.
pub fn remap_stream<R, W>(
    remapper: &HeaderRemapper,
    mut reader: R,
    mut writer: W,
) -> Result<RemapSummary, StreamError>
where
    R: BufRead,
    W: Write,
{
    let mut summary = RemapSummary::default();
    let mut buf = String::new();

    loop {
        let line_num = summary.lines + 1;

        buf.clear();
        let n = reader
            .read_line(&mut buf)
            .map_err(|source| StreamError::Read {
                line: line_num,
                source,
            })?;
        if n == 0 {
            break;
        }

        let line = buf.strip_suffix('\n').unwrap_or(&buf);
        let (remapped, outcome) = remapper.remap_line(line);

        if outcome == LineOutcome::Unmapped {
            debug!(line = line_num, "No mapping for @SQ sequence name, left unchanged");
        }

        writer
            .write_all(remapped.as_bytes())
            .and_then(|()| writer.write_all(b"\n"))
            .and_then(|()| writer.flush())
            .map_err(|source| StreamError::Write {
                line: line_num,
                source,
            })?;

        summary.record(outcome);
    }

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::mapping::MappingTable;

    fn run(pairs: &[(&str, &str)], input: &str) -> (String, RemapSummary) {
        let remapper = HeaderRemapper::new(pairs.iter().copied().collect::<MappingTable>());
        let mut out = Vec::new();
        let summary = remap_stream(&remapper, input.as_bytes(), &mut out).unwrap();
        (String::from_utf8(out).unwrap(), summary)
    }

    #[test]
    fn test_remap_header() {
        let header = "@HD\tVN:1.6\tSO:coordinate
@SQ\tSN:chr1\tLN:248956422
@SQ\tSN:chrM\tLN:16569
@SQ\tSN:chrUn_gl000220\tLN:161802
@RG\tID:sample1\tSM:sample1
@PG\tID:bwa\tPN:bwa\tCL:bwa mem ref.fa
";
        let (out, summary) = run(&[("chr1", "1"), ("chrM", "MT")], header);

        assert_eq!(
            out,
            "@HD\tVN:1.6\tSO:coordinate
@SQ\tSN:1\tLN:248956422
@SQ\tSN:MT\tLN:16569
@SQ\tSN:chrUn_gl000220\tLN:161802
@RG\tID:sample1\tSM:sample1
@PG\tID:bwa\tPN:bwa\tCL:bwa mem ref.fa
"
        );
        assert_eq!(
            summary,
            RemapSummary {
                lines: 6,
                sq_lines: 3,
                remapped: 2,
                unmapped: 1,
            }
        );
    }

    #[test]
    fn test_empty_input() {
        let (out, summary) = run(&[("chr1", "1")], "");
        assert!(out.is_empty());
        assert_eq!(summary, RemapSummary::default());
    }

    #[test]
    fn test_missing_final_newline() {
        let (out, summary) = run(&[("chr1", "1")], "@HD\tVN:1.6\n@SQ\tSN:chr1\tLN:10");
        assert_eq!(out, "@HD\tVN:1.6\n@SQ\tSN:1\tLN:10\n");
        assert_eq!(summary.lines, 2);
    }

    #[test]
    fn test_blank_lines_preserved() {
        let (out, _) = run(&[], "\n\n@CO\tcomment\n\n");
        assert_eq!(out, "\n\n@CO\tcomment\n\n");
    }

    #[test]
    fn test_crlf_preserved() {
        let (out, _) = run(&[("chr1", "1")], "@SQ\tSN:chr1\tLN:10\r\n@HD\tVN:1.6\r\n");
        assert_eq!(out, "@SQ\tSN:1\tLN:10\r\n@HD\tVN:1.6\r\n");
    }

    #[test]
    fn test_invalid_utf8_is_read_error() {
        let remapper = HeaderRemapper::new(MappingTable::new());
        let input: &[u8] = b"@HD\tVN:1.6\n@SQ\tSN:\xff\n";
        let mut out = Vec::new();

        let err = remap_stream(&remapper, input, &mut out).unwrap_err();
        assert!(matches!(err, StreamError::Read { line: 2, .. }));
        assert_eq!(out, b"@HD\tVN:1.6\n");
    }

    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_error() {
        let remapper = HeaderRemapper::new(MappingTable::new());
        let err = remap_stream(&remapper, "@HD\tVN:1.6\n".as_bytes(), FailingWriter).unwrap_err();
        assert!(matches!(err, StreamError::Write { line: 1, .. }));
    }
}
