//! Rusmark tagged-text parsing
//!
//! Converts catalog dumps in the Rusmark pseudo-MARC format into
//! [`BibliographicRecord`]s. Parsing is pure and total: malformed lines are
//! ignored and blocks that yield nothing are simply not emitted.

pub mod assembler;
pub mod subfields;
pub mod title;
pub mod tokenizer;

pub use assembler::{assemble, group_tags, TaggedGroups};
pub use tokenizer::BLOCK_DELIMITER;

use rayon::prelude::*;

use crate::models::BibliographicRecord;

/// Parse a full catalog dump.
///
/// Blocks are independent, so they are parsed in parallel; the output keeps
/// input block order. At most one record per `*****`-delimited chunk.
pub fn parse(dump: &str) -> Vec<BibliographicRecord> {
    let blocks: Vec<&str> = tokenizer::blocks(dump).collect();
    blocks
        .par_iter()
        .map(|block| assembler::assemble(block))
        .filter(|record| !record.is_empty())
        .collect()
}

/// Single-threaded parse, for callers that already parallelize per file.
pub fn parse_sequential(dump: &str) -> Vec<BibliographicRecord> {
    tokenizer::blocks(dump)
        .map(assembler::assemble)
        .filter(|record| !record.is_empty())
        .collect()
}
