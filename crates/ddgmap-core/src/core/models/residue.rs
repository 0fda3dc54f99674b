use phf::{Map, phf_map};

static THREE_TO_ONE: Map<&'static str, char> = phf_map! {
    "ALA" => 'A', "ARG" => 'R', "ASN" => 'N', "ASP" => 'D', "CYS" => 'C',
    "GLN" => 'Q', "GLU" => 'E', "GLY" => 'G', "HIS" => 'H', "ILE" => 'I',
    "LEU" => 'L', "LYS" => 'K', "MET" => 'M', "PHE" => 'F', "PRO" => 'P',
    "SER" => 'S', "THR" => 'T', "TRP" => 'W', "TYR" => 'Y', "VAL" => 'V',
    // CHARMM-style histidine protonation states
    "HSD" => 'H', "HSE" => 'H', "HSP" => 'H',
};

/// Maps a three-letter residue name to its one-letter code.
///
/// Lookup trims whitespace and is case-insensitive. Returns `None` for
/// residue names outside the standard amino acids (ligands, waters,
/// modified residues).
pub fn one_letter_code(residue_name: &str) -> Option<char> {
    let normalized = residue_name.trim().to_ascii_uppercase();
    THREE_TO_ONE.get(normalized.as_str()).copied()
}
