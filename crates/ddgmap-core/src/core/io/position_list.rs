use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

pub struct PositionListFile;

impl PositionListFile {
    /// Reads a MutateX position list: one identifier per line.
    ///
    /// Surrounding whitespace is trimmed and blank lines are skipped.
    /// Identifiers are opaque at this layer; no format validation is applied.
    pub fn read_from(reader: &mut impl BufRead) -> io::Result<Vec<String>> {
        let mut entries = Vec::new();
        for line_res in reader.lines() {
            let line = line_res?;
            let entry = line.trim();
            if !entry.is_empty() {
                entries.push(entry.to_string());
            }
        }
        Ok(entries)
    }

    /// Writes a position list: one entry per line, newline-terminated.
    pub fn write_to<S: AsRef<str>>(entries: &[S], writer: &mut impl Write) -> io::Result<()> {
        for entry in entries {
            writeln!(writer, "{}", entry.as_ref())?;
        }
        Ok(())
    }

    pub fn read_from_path<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);
        Self::read_from(&mut reader)
    }

    pub fn write_to_path<S: AsRef<str>, P: AsRef<Path>>(entries: &[S], path: P) -> io::Result<()> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        Self::write_to(entries, &mut writer)?;
        writer.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_skips_blank_lines_and_trims_entries() {
        let input = "AA25\n\n  GB2 \nLB10\n";
        let entries = PositionListFile::read_from(&mut input.as_bytes()).unwrap();
        assert_eq!(entries, ["AA25", "GB2", "LB10"]);
    }

    #[test]
    fn write_emits_one_entry_per_line_with_trailing_newline() {
        let mut buf = Vec::new();
        PositionListFile::write_to(&["AA25", "GB2"], &mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "AA25\nGB2\n");
    }

    #[test]
    fn write_of_empty_list_produces_empty_output() {
        let mut buf = Vec::new();
        let entries: [&str; 0] = [];
        PositionListFile::write_to(&entries, &mut buf).unwrap();
        assert!(buf.is_empty());
    }

    #[test]
    fn path_roundtrip_preserves_entries_and_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("position_list.txt");
        PositionListFile::write_to_path(&["WA9", "KA100", "GB2"], &path).unwrap();
        let entries = PositionListFile::read_from_path(&path).unwrap();
        assert_eq!(entries, ["WA9", "KA100", "GB2"]);
    }

    #[test]
    fn read_from_path_propagates_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = PositionListFile::read_from_path(dir.path().join("absent.txt")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
