//! CSV file I/O with atomic rewrites
//!
//! Every function opens the file, does its work and drops the handle before
//! returning. Nothing keeps a file open between calls.

use std::fs::{self, File, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::Path;

use csv::{QuoteStyle, ReaderBuilder, StringRecord, Terminator, WriterBuilder};

use crate::error::{LedgerError, LedgerResult};

/// A data row together with the file line it came from
#[derive(Debug, Clone)]
pub struct CsvRow {
    /// 1-based line number in the file
    pub line: u64,
    /// Raw fields
    pub record: StringRecord,
}

fn csv_writer<W: Write>(inner: W) -> csv::Writer<W> {
    // CRLF matches the files the tool has always produced.
    WriterBuilder::new()
        .has_headers(false)
        .quote_style(QuoteStyle::Necessary)
        .terminator(Terminator::CRLF)
        .from_writer(inner)
}

/// Read every row after the header
///
/// Returns `StoreAbsent` if the file does not exist. Blank lines are
/// skipped; rows of any width are accepted and left for the caller to
/// validate.
pub fn read_rows<P: AsRef<Path>>(path: P) -> LedgerResult<Vec<CsvRow>> {
    let path = path.as_ref();

    let contents = match fs::read(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(LedgerError::store_absent(path));
        }
        Err(e) => {
            return Err(LedgerError::Storage(format!(
                "Failed to read {}: {}",
                path.display(),
                e
            )))
        }
    };

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(contents.as_slice());

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result.map_err(|e| {
            LedgerError::Csv(format!("Failed to read {}: {}", path.display(), e))
        })?;
        let offset = record.position().map(|p| p.byte()).unwrap_or_default();
        let line = line_at(&contents, offset);
        rows.push(CsvRow { line, record });
    }

    Ok(rows)
}

/// 1-based line of the first record byte at or after `offset`
///
/// The reader reports a record's start before any pending line break (the
/// `\n` of a CRLF, or skipped blank lines), so those are stepped over first.
fn line_at(contents: &[u8], offset: u64) -> u64 {
    let start = usize::try_from(offset)
        .unwrap_or(contents.len())
        .min(contents.len());
    let start = start
        + contents[start..]
            .iter()
            .take_while(|&&b| b == b'\r' || b == b'\n')
            .count();
    contents[..start].iter().filter(|&&b| b == b'\n').count() as u64 + 1
}

/// Create the file with a header row, leaving any existing file untouched
///
/// Returns `true` if the file was created by this call.
pub fn create_with_header<P, H>(path: P, header: H) -> LedgerResult<bool>
where
    P: AsRef<Path>,
    H: IntoIterator,
    H::Item: AsRef<[u8]>,
{
    let path = path.as_ref();

    let file = match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::AlreadyExists => return Ok(false),
        Err(e) => {
            return Err(LedgerError::Storage(format!(
                "Failed to create {}: {}",
                path.display(),
                e
            )))
        }
    };

    let mut writer = csv_writer(file);
    writer.write_record(header)?;
    writer
        .flush()
        .map_err(|e| LedgerError::Storage(format!("Failed to flush header: {}", e)))?;

    Ok(true)
}

/// Append a single row to the end of the file
pub fn append_row<P, R>(path: P, row: R) -> LedgerResult<()>
where
    P: AsRef<Path>,
    R: IntoIterator,
    R::Item: AsRef<[u8]>,
{
    let path = path.as_ref();

    let file = OpenOptions::new().append(true).open(path).map_err(|e| {
        if e.kind() == ErrorKind::NotFound {
            LedgerError::store_absent(path)
        } else {
            LedgerError::Storage(format!("Failed to open {}: {}", path.display(), e))
        }
    })?;

    let mut writer = csv_writer(file);
    writer.write_record(row)?;
    writer
        .flush()
        .map_err(|e| LedgerError::Storage(format!("Failed to flush row: {}", e)))?;

    Ok(())
}

/// Rewrite the whole file atomically (write to temp, then rename)
///
/// The file is either completely replaced or not modified at all.
pub fn write_rows_atomic<P, T, H, I, R>(path: P, temp_path: T, header: H, rows: I) -> LedgerResult<()>
where
    P: AsRef<Path>,
    T: AsRef<Path>,
    H: IntoIterator,
    H::Item: AsRef<[u8]>,
    I: IntoIterator<Item = R>,
    R: IntoIterator,
    R::Item: AsRef<[u8]>,
{
    let path = path.as_ref();
    let temp_path = temp_path.as_ref();

    let file = File::create(temp_path)
        .map_err(|e| LedgerError::Storage(format!("Failed to create temp file: {}", e)))?;

    let mut writer = csv_writer(file);
    writer.write_record(header)?;
    for row in rows {
        writer.write_record(row)?;
    }

    let file = writer
        .into_inner()
        .map_err(|e| LedgerError::Storage(format!("Failed to flush data: {}", e)))?;

    // Sync to disk before rename
    file.sync_all()
        .map_err(|e| LedgerError::Storage(format!("Failed to sync data: {}", e)))?;
    drop(file);

    fs::rename(temp_path, path).map_err(|e| {
        let _ = fs::remove_file(temp_path);
        LedgerError::Storage(format!("Failed to rename temp file: {}", e))
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const HEADER: [&str; 2] = ["Name", "Value"];

    #[test]
    fn test_read_nonexistent_is_store_absent() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nonexistent.csv");

        let err = read_rows(&path).unwrap_err();
        assert!(err.is_store_absent());
    }

    #[test]
    fn test_create_with_header() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("test.csv");

        assert!(create_with_header(&path, HEADER).unwrap());
        assert_eq!(fs::read_to_string(&path).unwrap(), "Name,Value\r\n");
        assert!(read_rows(&path).unwrap().is_empty());
    }

    #[test]
    fn test_create_does_not_truncate() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("test.csv");
        fs::write(&path, "Name,Value\r\na,1\r\n").unwrap();

        assert!(!create_with_header(&path, HEADER).unwrap());
        assert_eq!(fs::read_to_string(&path).unwrap(), "Name,Value\r\na,1\r\n");
    }

    #[test]
    fn test_append_and_read() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("test.csv");
        create_with_header(&path, HEADER).unwrap();

        append_row(&path, ["a", "1"]).unwrap();
        append_row(&path, ["b, with comma", "say \"hi\""]).unwrap();

        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "Name,Value\r\na,1\r\n\"b, with comma\",\"say \"\"hi\"\"\"\r\n"
        );

        let rows = read_rows(&path).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].line, 2);
        assert_eq!(&rows[1].record[0], "b, with comma");
        assert_eq!(&rows[1].record[1], "say \"hi\"");
    }

    #[test]
    fn test_append_to_missing_file_is_store_absent() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing.csv");

        let err = append_row(&path, ["a", "1"]).unwrap_err();
        assert!(err.is_store_absent());
        assert!(!path.exists());
    }

    #[test]
    fn test_read_skips_blank_lines_and_accepts_short_rows() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("test.csv");
        fs::write(&path, "Name,Value\n\na,1\n\nshort\n").unwrap();

        let rows = read_rows(&path).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].record.len(), 1);
    }

    #[test]
    fn test_row_lines_match_file_lines() {
        let temp_dir = TempDir::new().unwrap();

        for (name, contents) in [
            ("crlf.csv", "Name,Value\r\na,1\r\n\r\nb,2\r\n"),
            ("lf.csv", "Name,Value\na,1\n\nb,2\n"),
        ] {
            let path = temp_dir.path().join(name);
            fs::write(&path, contents).unwrap();

            let lines: Vec<u64> = read_rows(&path).unwrap().iter().map(|r| r.line).collect();
            assert_eq!(lines, vec![2, 4], "{}", name);
        }
    }

    #[test]
    fn test_atomic_write_no_temp_file_left() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("test.csv");
        let temp_path = temp_dir.path().join("test.csv.tmp");
        fs::write(&path, "Name,Value\r\nold,0\r\n").unwrap();

        let rows = vec![vec!["a".to_string(), "1".to_string()]];
        write_rows_atomic(&path, &temp_path, HEADER, &rows).unwrap();

        assert!(path.exists());
        assert!(!temp_path.exists());
        assert_eq!(fs::read_to_string(&path).unwrap(), "Name,Value\r\na,1\r\n");
    }
}
