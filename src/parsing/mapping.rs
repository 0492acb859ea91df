use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::core::mapping::MappingTable;

#[derive(Error, Debug)]
pub enum MappingError {
    #[error("Mapping file '{}' not found", .path.display())]
    NotFound { path: PathBuf },

    #[error("Error reading mapping file '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl MappingError {
    fn from_io(path: &Path, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::NotFound {
            MappingError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            MappingError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    }
}

/// Load a chromosome mapping file: `original[TAB remapped]` per line
///
/// # Errors
///
/// Returns `MappingError::NotFound` if the file does not exist, or
/// `MappingError::Io` if it cannot be opened or read (including invalid UTF-8).
pub fn parse_mapping_file(path: &Path) -> Result<MappingTable, MappingError> {
    let file = File::open(path).map_err(|e| MappingError::from_io(path, e))?;
    let table =
        parse_mapping_reader(BufReader::new(file)).map_err(|e| MappingError::from_io(path, e))?;

    debug!(
        path = %path.display(),
        entries = table.len(),
        "Loaded chromosome mappings"
    );

    Ok(table)
}

/// Parse mapping records from a buffered reader
///
/// # Errors
///
/// Returns the underlying `io::Error` if a line cannot be read.
pub fn parse_mapping_reader<R: BufRead>(reader: R) -> io::Result<MappingTable> {
    let mut table = MappingTable::new();

    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        add_mapping_line(&mut table, &line, i + 1);
    }

    Ok(table)
}

/// Parse mapping records from text
///
/// Blank lines and lines with an empty first field are skipped. A missing or
/// empty second field maps the name to itself.
#[must_use]
pub fn parse_mapping_text(text: &str) -> MappingTable {
    let mut table = MappingTable::new();

    for (i, line) in text.lines().enumerate() {
        add_mapping_line(&mut table, line, i + 1);
    }

    table
}

fn add_mapping_line(table: &mut MappingTable, line: &str, line_num: usize) {
    let mut fields = line.split('\t');

    let original = fields.next().map(str::trim).unwrap_or_default();
    if original.is_empty() {
        return;
    }

    let remapped = fields
        .next()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or(original);

    if let Some(previous) = table.insert(original, remapped) {
        debug!(
            line = line_num,
            contig = %original,
            previous = %previous,
            remapped = %remapped,
            "Duplicate mapping, later entry wins"
        );
    }
}
