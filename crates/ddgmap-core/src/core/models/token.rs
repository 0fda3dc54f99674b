use super::position::{Position, ResidueNumber};
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TokenError {
    #[error("Expected at least 3 dot-separated parts in '{0}' (chain.wt.resnum[.mutant])")]
    TooFewParts(String),

    #[error("Chain identifier is empty in '{0}'")]
    EmptyChain(String),

    #[error("Wild-type residue '{0}' is not a single uppercase letter")]
    InvalidWildType(String),

    #[error("Invalid residue number: {0}")]
    InvalidResidueNumber(#[from] super::position::ResidueNumberError),
}

/// One point-mutation record, as encoded in the first comma-delimited field
/// of a mutinfo line: `<chain>.<wild-type>.<residue-number>.<mutant>`.
///
/// The mutant part is carried through untouched when present; it plays no
/// role in position identifiers or deduplication.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MutationToken {
    pub chain: String,
    pub wild_type: char,
    pub residue: ResidueNumber,
    pub mutant: Option<String>,
}

impl MutationToken {
    /// Projects the token onto the structural position it mutates.
    pub fn position(&self) -> Position {
        Position::new(self.chain.clone(), self.wild_type, self.residue.clone())
    }
}

impl FromStr for MutationToken {
    type Err = TokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split('.').collect();
        if parts.len() < 3 {
            return Err(TokenError::TooFewParts(s.to_string()));
        }

        let chain = parts[0];
        if chain.is_empty() {
            return Err(TokenError::EmptyChain(s.to_string()));
        }

        let wild_type = match parts[1].as_bytes() {
            [letter] if letter.is_ascii_uppercase() => *letter as char,
            _ => return Err(TokenError::InvalidWildType(parts[1].to_string())),
        };

        let residue: ResidueNumber = parts[2].parse()?;

        Ok(Self {
            chain: chain.to_string(),
            wild_type,
            residue,
            mutant: parts.get(3).map(|m| m.to_string()),
        })
    }
}
