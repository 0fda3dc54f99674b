use crate::core::models::position::{Position, ResidueNumber};
use crate::core::models::residue::one_letter_code;
use crate::core::models::span::ResidueSpan;
use pdbtbx::PDB;
use tracing::warn;

/// A residue that fell inside a requested span but could not be converted
/// to a position entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedResidue {
    pub name: String,
    pub chain: String,
    pub serial: i64,
}

/// The outcome of extracting positions from a structure.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ExtractionReport {
    /// Position entries in span order, then structure order within a span.
    /// Not deduplicated: overlapping spans repeat their shared residues.
    pub positions: Vec<Position>,
    /// Span chains absent from the structure's first model.
    pub missing_chains: Vec<String>,
    /// In-span residues whose name has no one-letter code.
    pub skipped_residues: Vec<SkippedResidue>,
}

/// Derives position entries from the first model of a parsed structure.
///
/// For every span, walks the matching chain and emits one entry per
/// polymer residue whose sequence number falls inside the span. Hetero
/// residues (waters, ligands) are passed over silently; a missing chain or
/// a residue name outside the amino-acid table is reported with a warning
/// and skipped.
pub fn extract_positions(pdb: &PDB, spans: &[ResidueSpan]) -> ExtractionReport {
    let mut report = ExtractionReport::default();

    let Some(model) = pdb.models().next() else {
        warn!("Structure contains no models; nothing to extract.");
        report.missing_chains = spans.iter().map(|s| s.chain.clone()).collect();
        return report;
    };

    for span in spans {
        let Some(chain) = model.chains().find(|c| c.id() == span.chain) else {
            warn!("Chain {} not found in structure.", span.chain);
            report.missing_chains.push(span.chain.clone());
            continue;
        };

        for residue in chain.residues() {
            if residue.atoms().all(|atom| atom.hetero()) {
                continue;
            }
            let serial = residue.serial_number() as i64;
            if !span.contains(serial) {
                continue;
            }

            let name = residue.name().unwrap_or("");
            match one_letter_code(name) {
                Some(code) => {
                    report.positions.push(Position::new(
                        span.chain.clone(),
                        code,
                        ResidueNumber::from_serial(serial),
                    ));
                }
                None => {
                    warn!(
                        "Skipping unknown residue {} at {}{}",
                        name, span.chain, serial
                    );
                    report.skipped_residues.push(SkippedResidue {
                        name: name.to_string(),
                        chain: span.chain.clone(),
                        serial,
                    });
                }
            }
        }
    }

    report
}
