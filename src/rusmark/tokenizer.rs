//! Dump tokenization
//!
//! Splits a raw catalog dump into record blocks and each block into tagged
//! lines. Pure and total: malformed input never fails, it just yields fewer
//! usable lines.

use once_cell::sync::Lazy;
use regex::Regex;

/// Literal sequence separating record blocks in a dump.
pub const BLOCK_DELIMITER: &str = "*****";

/// Tagged lines look like `#200: ^AКосмос^EИстория`.
static TAG_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^#(\d+):\s*(.*)$").unwrap());

/// A line split into its numeric tag and raw value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaggedLine<'a> {
    pub tag: &'a str,
    pub value: &'a str,
}

/// Split a dump into candidate record blocks.
///
/// Every chunk between delimiters is a candidate; chunks without usable
/// lines simply produce no record downstream.
pub fn blocks(dump: &str) -> impl Iterator<Item = &str> {
    dump.split(BLOCK_DELIMITER)
}

/// Usable lines of one block: trimmed, with empty lines discarded.
pub fn lines(block: &str) -> impl Iterator<Item = &str> {
    block.lines().map(str::trim).filter(|line| !line.is_empty())
}

/// Match a line against the `#<tag>: <value>` shape.
///
/// Non-matching lines are not an error; callers skip them.
pub fn tagged(line: &str) -> Option<TaggedLine<'_>> {
    let caps = TAG_LINE.captures(line)?;
    Some(TaggedLine {
        tag: caps.get(1)?.as_str(),
        value: caps.get(2)?.as_str(),
    })
}
