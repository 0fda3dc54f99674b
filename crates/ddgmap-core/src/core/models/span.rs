use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SpanError {
    #[error("Invalid span '{0}'. Expected 'CHAIN:START-END' (e.g. 'A:30-37').")]
    MissingChainSeparator(String),

    #[error("Chain identifier cannot be empty in span '{0}'.")]
    EmptyChain(String),

    #[error("Invalid range in span '{0}'. Expected 'START-END' with integer bounds.")]
    InvalidRange(String),

    #[error("Span '{0}' is reversed: start must not exceed end.")]
    ReversedRange(String),
}

/// An inclusive residue-number range on one chain, written `A:30-37`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResidueSpan {
    pub chain: String,
    pub start: i64,
    pub end: i64,
}

impl ResidueSpan {
    pub fn contains(&self, serial: i64) -> bool {
        self.start <= serial && serial <= self.end
    }
}

impl FromStr for ResidueSpan {
    type Err = SpanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (chain, range) = s
            .split_once(':')
            .ok_or_else(|| SpanError::MissingChainSeparator(s.to_string()))?;
        if chain.is_empty() {
            return Err(SpanError::EmptyChain(s.to_string()));
        }

        // split_once on '-' would mis-read a negative start; take the last
        // separator so 'A:-5-10' parses as -5..=10.
        let (start_str, end_str) = range
            .rsplit_once('-')
            .filter(|(start, _)| !start.is_empty())
            .ok_or_else(|| SpanError::InvalidRange(s.to_string()))?;

        let start: i64 = start_str
            .parse()
            .map_err(|_| SpanError::InvalidRange(s.to_string()))?;
        let end: i64 = end_str
            .parse()
            .map_err(|_| SpanError::InvalidRange(s.to_string()))?;

        if start > end {
            return Err(SpanError::ReversedRange(s.to_string()));
        }

        Ok(Self {
            chain: chain.to_string(),
            start,
            end,
        })
    }
}
