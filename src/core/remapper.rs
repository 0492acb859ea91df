use std::borrow::Cow;

use regex::Regex;

use crate::core::mapping::MappingTable;

/// Prefix identifying reference sequence header lines
pub const SQ_PREFIX: &str = "@SQ";

/// SN tag anchored at a word boundary; the name runs to the next whitespace
const SN_TAG_PATTERN: &str = r"\bSN:(\S+)";

/// What happened to a single header line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineOutcome {
    /// Not an `@SQ` line, or an `@SQ` line without an SN tag
    Passthrough,
    /// The SN name was found in the table and rewritten
    Remapped,
    /// The SN name has no entry in the table and was left as is
    Unmapped,
}

/// Rewrites the `SN:` tag of `@SQ` header lines using a [`MappingTable`].
#[derive(Debug, Clone)]
pub struct HeaderRemapper {
    table: MappingTable,
    sn_tag: Regex,
}

impl HeaderRemapper {
    #[must_use]
    pub fn new(table: MappingTable) -> Self {
        let sn_tag = Regex::new(SN_TAG_PATTERN).expect("SN tag pattern is valid");
        Self { table, sn_tag }
    }

    #[must_use]
    pub fn table(&self) -> &MappingTable {
        &self.table
    }

    /// Remap a single header line (without its line terminator).
    ///
    /// Lines that are not `@SQ` lines, and `@SQ` lines whose name is not in the
    /// table, are returned borrowed and unchanged.
    #[must_use]
    pub fn transform<'a>(&self, line: &'a str) -> Cow<'a, str> {
        self.remap_line(line).0
    }

    /// Like [`transform`](Self::transform), also reporting what was done to the line.
    #[must_use]
    pub fn remap_line<'a>(&self, line: &'a str) -> (Cow<'a, str>, LineOutcome) {
        if !line.starts_with(SQ_PREFIX) {
            return (Cow::Borrowed(line), LineOutcome::Passthrough);
        }

        // Only the first SN tag is considered; @SQ lines carry exactly one
        let Some(name) = self.sn_tag.captures(line).and_then(|caps| caps.get(1)) else {
            return (Cow::Borrowed(line), LineOutcome::Passthrough);
        };

        let Some(remapped) = self.table.get(name.as_str()) else {
            return (Cow::Borrowed(line), LineOutcome::Unmapped);
        };

        let mut out = String::with_capacity(line.len() - name.len() + remapped.len());
        out.push_str(&line[..name.start()]);
        out.push_str(remapped);
        out.push_str(&line[name.end()..]);
        (Cow::Owned(out), LineOutcome::Remapped)
    }
}
