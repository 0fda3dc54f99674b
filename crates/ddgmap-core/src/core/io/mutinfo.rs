use crate::core::models::position::Position;
use crate::core::models::token::{MutationToken, TokenError};
use std::collections::BTreeSet;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// A line whose first field failed token parsing and was excluded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRecord {
    /// 1-based line number in the input.
    pub line: usize,
    /// The raw line text, as read.
    pub content: String,
    pub reason: TokenError,
}

/// The result of normalizing one mutinfo log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MutinfoSummary {
    /// Unique positions, sorted by chain and then numeric residue number.
    pub positions: Vec<Position>,
    /// Records that were excluded, in input order.
    pub skipped: Vec<SkippedRecord>,
}

impl MutinfoSummary {
    /// The position identifiers, one per unique position, in sorted order.
    pub fn identifiers(&self) -> Vec<String> {
        self.positions.iter().map(Position::identifier).collect()
    }
}

pub struct MutinfoFile;

impl MutinfoFile {
    /// Reads a mutinfo log and normalizes it into unique, ordered positions.
    ///
    /// Each non-empty line not starting with `#` is one record; its first
    /// comma-delimited field is parsed as a mutation token. Malformed
    /// records never abort the read: they are collected in
    /// [`MutinfoSummary::skipped`] with their line number and parse reason.
    /// Records mutating the same position (any mutant residue) collapse to
    /// a single entry.
    pub fn read_from(reader: &mut impl BufRead) -> io::Result<MutinfoSummary> {
        let mut positions: BTreeSet<Position> = BTreeSet::new();
        let mut skipped = Vec::new();

        for (line_num, line_res) in reader.lines().enumerate() {
            let line = line_res?;
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            // split never yields an empty iterator, so this is the whole
            // line when no comma is present.
            let first_field = line.split(',').next().unwrap_or(line);
            match first_field.parse::<MutationToken>() {
                Ok(token) => {
                    positions.insert(token.position());
                }
                Err(reason) => skipped.push(SkippedRecord {
                    line: line_num + 1,
                    content: line.to_string(),
                    reason,
                }),
            }
        }

        Ok(MutinfoSummary {
            positions: positions.into_iter().collect(),
            skipped,
        })
    }

    pub fn read_from_path<P: AsRef<Path>>(path: P) -> io::Result<MutinfoSummary> {
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);
        Self::read_from(&mut reader)
    }
}
