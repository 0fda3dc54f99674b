use std::path::Path;

/// A position list split by energy-file availability.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PositionPartition {
    /// Identifiers whose energy file exists in the data directory.
    pub available: Vec<String>,
    /// Identifiers with no matching energy file.
    pub missing: Vec<String>,
}

impl PositionPartition {
    pub fn nothing_missing(&self) -> bool {
        self.missing.is_empty()
    }
}

/// Partitions `positions` by whether a regular file named after each
/// identifier exists in `data_dir`.
///
/// MutateX writes one energy file per position, named exactly like the
/// position identifier; a position without one would make `ddg2heatmap`
/// abort. Input order is preserved within both halves.
pub fn partition_by_energy_files<S: AsRef<str>>(
    positions: &[S],
    data_dir: &Path,
) -> PositionPartition {
    let mut partition = PositionPartition::default();
    for position in positions {
        let position = position.as_ref();
        if data_dir.join(position).is_file() {
            partition.available.push(position.to_string());
        } else {
            partition.missing.push(position.to_string());
        }
    }
    partition
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn splits_positions_by_energy_file_presence() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("AA25"), "energies").unwrap();
        fs::write(dir.path().join("GB2"), "energies").unwrap();

        let partition =
            partition_by_energy_files(&["AA25", "WA9", "GB2", "LB10"], dir.path());
        assert_eq!(partition.available, ["AA25", "GB2"]);
        assert_eq!(partition.missing, ["WA9", "LB10"]);
        assert!(!partition.nothing_missing());
    }

    #[test]
    fn all_positions_available_reports_nothing_missing() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("AA25"), "").unwrap();

        let partition = partition_by_energy_files(&["AA25"], dir.path());
        assert_eq!(partition.available, ["AA25"]);
        assert!(partition.nothing_missing());
    }

    #[test]
    fn directory_entry_with_matching_name_does_not_count_as_energy_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("AA25")).unwrap();

        let partition = partition_by_energy_files(&["AA25"], dir.path());
        assert_eq!(partition.missing, ["AA25"]);
    }

    #[test]
    fn empty_position_list_yields_empty_partition() {
        let dir = tempfile::tempdir().unwrap();
        let partition = partition_by_energy_files::<&str>(&[], dir.path());
        assert!(partition.available.is_empty());
        assert!(partition.missing.is_empty());
    }
}
