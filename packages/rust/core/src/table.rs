//! Two-column CSV acronym tables.
//!
//! Files have no header row. Each record is `acronym,expansion`; quoting
//! follows the usual CSV rules so expansions may contain commas.

use std::fs::File;
use std::path::Path;

use tracing::{debug, instrument, warn};

use acrofilter_shared::{AcronymTable, AcrofilterError, Result};

/// Read a supplied acronym table.
///
/// Every record must have exactly two fields. When a key repeats, the last
/// row wins; an acronym cannot carry two expansions.
#[instrument(skip_all, fields(path = %path.display()))]
pub fn read_table(path: &Path) -> Result<AcronymTable> {
    let file = File::open(path).map_err(|e| AcrofilterError::io(path, e))?;
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(file);

    let mut table = AcronymTable::new();
    let mut rows = 0usize;

    for record in reader.records() {
        let record = record.map_err(|e| csv_error(path, e))?;
        let line = record.position().map_or(rows as u64 + 1, |p| p.line());

        if record.len() != 2 {
            return Err(AcrofilterError::table(format!(
                "{}: line {line}: expected 2 fields, found {}",
                path.display(),
                record.len()
            )));
        }

        let (key, expansion) = (&record[0], &record[1]);
        if table.contains_key(key) {
            warn!(key, line, "duplicate acronym in table, keeping the later row");
        }
        table.insert(key, expansion);
        rows += 1;
    }

    debug!(rows, entries = table.len(), "acronym table read");
    Ok(table)
}

/// Write `table` sorted by acronym, replacing any existing file.
#[instrument(skip_all, fields(path = %path.display(), entries = table.len()))]
pub fn write_table(path: &Path, table: &AcronymTable) -> Result<()> {
    let file = File::create(path).map_err(|e| AcrofilterError::io(path, e))?;
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(file);

    for (key, expansion) in table.iter() {
        writer
            .write_record([key, expansion])
            .map_err(|e| csv_error(path, e))?;
    }
    writer.flush().map_err(|e| AcrofilterError::io(path, e))?;

    debug!("acronym table written");
    Ok(())
}

fn csv_error(path: &Path, err: csv::Error) -> AcrofilterError {
    let position = err.position().map(|p| p.line());
    match err.into_kind() {
        csv::ErrorKind::Io(source) => AcrofilterError::io(path, source),
        kind => {
            let at = position.map(|l| format!(" line {l}:")).unwrap_or_default();
            AcrofilterError::table(format!("{}:{at} {kind:?}", path.display()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_file(dir: &tempfile::TempDir, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, content).expect("write fixture");
        path
    }

    #[test]
    fn reads_quoted_expansions() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = write_file(
            &dir,
            "dict.csv",
            "GNC,\"Guidance, Navigation, and Control\"\nIMU,Inertial Measurement Unit\n",
        );

        let table = read_table(&path).expect("read");
        assert_eq!(table.len(), 2);
        assert_eq!(table.get("GNC"), Some("Guidance, Navigation, and Control"));
        assert_eq!(table.get("IMU"), Some("Inertial Measurement Unit"));
    }

    #[test]
    fn empty_expansion_is_allowed() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = write_file(&dir, "dict.csv", "ACS-2,\nGNC,Guidance\n");

        let table = read_table(&path).expect("read");
        assert_eq!(table.get("ACS-2"), Some(""));
    }

    #[test]
    fn duplicate_keys_last_wins() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = write_file(&dir, "dict.csv", "CM,Command Module\nCM,Crew Module\n");

        let table = read_table(&path).expect("read");
        assert_eq!(table.len(), 1);
        assert_eq!(table.get("CM"), Some("Crew Module"));
    }

    #[test]
    fn single_field_row_rejected() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = write_file(&dir, "dict.csv", "GNC,Guidance\nIMU\n");

        let err = read_table(&path).unwrap_err();
        assert!(matches!(err, AcrofilterError::Table { .. }));
        assert!(err.to_string().contains("line 2"), "{err}");
    }

    #[test]
    fn three_field_row_rejected() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = write_file(&dir, "dict.csv", "GNC,Guidance,extra\n");

        let err = read_table(&path).unwrap_err();
        assert!(err.to_string().contains("expected 2 fields, found 3"));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = read_table(Path::new("/nonexistent/dict.csv")).unwrap_err();
        assert!(matches!(err, AcrofilterError::Io { .. }));
    }

    #[test]
    fn written_file_is_sorted_and_rereadable() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("out.csv");

        let mut table = AcronymTable::from_keys(["IMU", "ACS-2"]);
        table.insert("GNC", "Guidance, Navigation, and Control");
        write_table(&path, &table).expect("write");

        let text = std::fs::read_to_string(&path).expect("read text");
        let keys: Vec<_> = text
            .lines()
            .map(|l| l.split(',').next().unwrap_or_default())
            .collect();
        assert_eq!(keys, vec!["ACS-2", "GNC", "IMU"]);
        assert!(text.contains("\"Guidance, Navigation, and Control\""));

        assert_eq!(read_table(&path).expect("reread"), table);
    }

    #[test]
    fn write_overwrites_existing_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = write_file(&dir, "out.csv", "OLD,stale\nXYZ,gone\n");

        write_table(&path, &AcronymTable::from_keys(["NEW"])).expect("write");

        let table = read_table(&path).expect("reread");
        assert_eq!(table.len(), 1);
        assert!(table.contains_key("NEW"));
    }
}
