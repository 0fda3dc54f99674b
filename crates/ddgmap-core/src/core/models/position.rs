use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ResidueNumberError {
    #[error("Residue number '{0}' is empty or has no numeric prefix")]
    MissingDigits(String),

    #[error("Residue number '{0}' must be digits followed by at most one uppercase insertion code")]
    TrailingGarbage(String),

    #[error("Numeric prefix of residue number '{0}' is out of range")]
    Overflow(String),
}

/// A residue sequence number with an optional single-letter insertion code.
///
/// Keeps both the numeric prefix (for ordering) and the exact string form it
/// was parsed from (for output), so e.g. `25A` sorts with `25` but is written
/// back verbatim.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ResidueNumber {
    // Field order defines the derived ordering: numeric prefix first,
    // string form as the tie-breaker among shared prefixes.
    number: i64,
    raw: String,
}

impl ResidueNumber {
    /// Builds a residue number from a bare sequence number, as found in
    /// structure files. The string form is the decimal rendering.
    pub fn from_serial(serial: i64) -> Self {
        Self {
            number: serial,
            raw: serial.to_string(),
        }
    }

    pub fn number(&self) -> i64 {
        self.number
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl FromStr for ResidueNumber {
    type Err = ResidueNumberError;

    /// Parses the mutinfo form: one or more ASCII digits optionally followed
    /// by exactly one ASCII uppercase insertion code (`25`, `25A`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits_end = s.bytes().take_while(|b| b.is_ascii_digit()).count();
        if digits_end == 0 {
            return Err(ResidueNumberError::MissingDigits(s.to_string()));
        }

        let suffix = &s[digits_end..];
        let suffix_ok = match suffix.as_bytes() {
            [] => true,
            [code] => code.is_ascii_uppercase(),
            _ => false,
        };
        if !suffix_ok {
            return Err(ResidueNumberError::TrailingGarbage(s.to_string()));
        }

        let number: i64 = s[..digits_end]
            .parse()
            .map_err(|_| ResidueNumberError::Overflow(s.to_string()))?;

        Ok(Self {
            number,
            raw: s.to_string(),
        })
    }
}

impl fmt::Display for ResidueNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// A single structural position: one residue on one chain together with its
/// wild-type identity.
///
/// Equality is the deduplication contract: two mutation records that differ
/// only in their mutant residue map to the same `Position`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    // Field order defines the derived ordering: chain lexicographically,
    // then residue number (numeric, then string form), then wild type.
    pub chain: String,
    pub residue: ResidueNumber,
    pub wild_type: char,
}

impl Position {
    pub fn new(chain: impl Into<String>, wild_type: char, residue: ResidueNumber) -> Self {
        Self {
            chain: chain.into(),
            residue,
            wild_type,
        }
    }

    /// The MutateX position identifier, e.g. `AA25` for wild-type `A` at
    /// residue 25 of chain `A`.
    pub fn identifier(&self) -> String {
        format!("{}{}{}", self.wild_type, self.chain, self.residue)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.wild_type, self.chain, self.residue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resnum(s: &str) -> ResidueNumber {
        s.parse().unwrap()
    }

    #[test]
    fn residue_number_parses_plain_digits() {
        let n = resnum("25");
        assert_eq!(n.number(), 25);
        assert_eq!(n.as_str(), "25");
    }

    #[test]
    fn residue_number_parses_insertion_code_suffix() {
        let n = resnum("25A");
        assert_eq!(n.number(), 25);
        assert_eq!(n.as_str(), "25A");
    }

    #[test]
    fn residue_number_display_preserves_original_form() {
        assert_eq!(resnum("025").to_string(), "025");
        assert_eq!(resnum("100B").to_string(), "100B");
    }

    #[test]
    fn residue_number_rejects_missing_digits() {
        assert_eq!(
            "A".parse::<ResidueNumber>(),
            Err(ResidueNumberError::MissingDigits("A".into()))
        );
        assert_eq!(
            "".parse::<ResidueNumber>(),
            Err(ResidueNumberError::MissingDigits("".into()))
        );
    }

    #[test]
    fn residue_number_rejects_lowercase_or_long_suffix() {
        assert_eq!(
            "25a".parse::<ResidueNumber>(),
            Err(ResidueNumberError::TrailingGarbage("25a".into()))
        );
        assert_eq!(
            "25AB".parse::<ResidueNumber>(),
            Err(ResidueNumberError::TrailingGarbage("25AB".into()))
        );
        assert_eq!(
            "2 5".parse::<ResidueNumber>(),
            Err(ResidueNumberError::TrailingGarbage("2 5".into()))
        );
    }

    #[test]
    fn residue_number_from_serial_handles_negative_numbers() {
        let n = ResidueNumber::from_serial(-4);
        assert_eq!(n.number(), -4);
        assert_eq!(n.as_str(), "-4");
    }

    #[test]
    fn identifier_concatenates_wild_type_chain_and_residue() {
        let pos = Position::new("A", 'A', resnum("25"));
        assert_eq!(pos.identifier(), "AA25");

        let pos = Position::new("B", 'W', resnum("102C"));
        assert_eq!(pos.identifier(), "WB102C");
    }

    #[test]
    fn ordering_is_chain_then_numeric_residue() {
        let mut positions = vec![
            Position::new("B", 'G', resnum("2")),
            Position::new("A", 'K', resnum("100")),
            Position::new("A", 'W', resnum("9")),
            Position::new("B", 'L', resnum("10")),
        ];
        positions.sort();
        let ids: Vec<String> = positions.iter().map(Position::identifier).collect();
        assert_eq!(ids, ["WA9", "KA100", "GB2", "LB10"]);
    }

    #[test]
    fn ordering_breaks_numeric_ties_on_string_form() {
        let mut positions = vec![
            Position::new("A", 'G', resnum("25B")),
            Position::new("A", 'G', resnum("25")),
            Position::new("A", 'G', resnum("25A")),
        ];
        positions.sort();
        let ids: Vec<String> = positions.iter().map(Position::identifier).collect();
        assert_eq!(ids, ["GA25", "GA25A", "GA25B"]);
    }

    #[test]
    fn positions_differing_only_in_mutant_free_fields_are_equal() {
        let a = Position::new("A", 'A', resnum("25"));
        let b = Position::new("A", 'A', resnum("25"));
        assert_eq!(a, b);
    }
}
