use std::{
    io::{self, Write},
    path::{Path, PathBuf},
};

use _model::{Record, HEADER};
use csv::{Terminator, WriterBuilder};
use tempfile::NamedTempFile;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EmitError {
    #[error("failed to write {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Writes `records` to `path` as a `Name,Address` CSV, replacing whatever was
/// there.
///
/// The rows go to a temporary file in the same directory which is renamed over
/// `path` once complete. A failed write leaves the old file untouched and no
/// partial file behind.
pub fn emit(records: &[Record], path: &Path) -> Result<(), EmitError> {
    let io_error = |source| EmitError::Io {
        path: path.to_path_buf(),
        source,
    };

    let output = render(records).map_err(io_error)?;
    let dir = match path.parent() {
        Some(x) if !x.as_os_str().is_empty() => x,
        _ => Path::new("."),
    };
    let mut file = NamedTempFile::new_in(dir).map_err(io_error)?;
    file.write_all(&output).map_err(io_error)?;
    file.as_file().sync_all().map_err(io_error)?;
    file.persist(path).map_err(|e| io_error(e.error))?;
    Ok(())
}

fn render(records: &[Record]) -> io::Result<Vec<u8>> {
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    // written by hand so an empty list still gets a header
    writer.write_record(HEADER)?;
    for record in records {
        writer.serialize(record)?;
    }

    writer.into_inner().map_err(|e| e.into_error())
}

#[cfg(test)]
mod tests {
    use std::fs::{self, read_dir, read_to_string};

    use csv::ReaderBuilder;
    use tempfile::tempdir;

    use super::*;

    fn parse(path: &Path) -> Vec<(String, String)> {
        let mut reader = ReaderBuilder::new().from_path(path).unwrap();
        let headers: Vec<_> = reader.headers().unwrap().iter().collect();
        assert_eq!(headers, ["Name", "Address"]);
        reader.deserialize().map(|x| x.unwrap()).collect()
    }

    #[test]
    fn empty_list_is_header_only() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.csv");
        emit(&[], &path).unwrap();
        assert_eq!(read_to_string(&path).unwrap(), "Name,Address\n");
    }

    #[test]
    fn unicode_passes_through_unquoted() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.csv");
        emit(&[Record::new("Toyota Motor", "トヨタ自動車 本社 東京")], &path).unwrap();
        assert_eq!(
            read_to_string(&path).unwrap(),
            "Name,Address\nToyota Motor,トヨタ自動車 本社 東京\n"
        );
    }

    #[test]
    fn quotes_fields_that_need_it() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.csv");
        let records = [
            Record::new("Acme", "Tokyo, Japan"),
            Record::new("The \"Best\" Co", "Osaka"),
            Record::new("Two\nLines", "Kyoto"),
        ];
        emit(&records, &path).unwrap();
        assert_eq!(
            read_to_string(&path).unwrap(),
            "Name,Address\n\
             Acme,\"Tokyo, Japan\"\n\
             \"The \"\"Best\"\" Co\",Osaka\n\
             \"Two\nLines\",Kyoto\n"
        );
    }

    #[test]
    fn round_trip_keeps_order() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.csv");
        let records = [
            Record::new("Sony Group", "ソニーグループ 本社"),
            Record::new("Acme", "Tokyo, Japan"),
            Record::new("Sony Group", "ソニーグループ 本社"),
            Record::new("Apple", "Apple 東京オフィス"),
        ];
        emit(&records, &path).unwrap();

        let content = read_to_string(&path).unwrap();
        assert_eq!(content.lines().count(), records.len() + 1);
        assert_eq!(content.lines().next(), Some("Name,Address"));

        let expected: Vec<_> = records
            .iter()
            .map(|x| (x.name.to_string(), x.address_query.to_string()))
            .collect();
        assert_eq!(parse(&path), expected);
    }

    #[test]
    fn overwrites_and_is_idempotent() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.csv");
        fs::write(&path, "stale content that is much longer than the output\n").unwrap();

        let records = [Record::new("Nintendo", "任天堂 本社")];
        emit(&records, &path).unwrap();
        let first = fs::read(&path).unwrap();
        emit(&records, &path).unwrap();
        let second = fs::read(&path).unwrap();

        assert_eq!(first, second);
        assert_eq!(first, "Name,Address\nNintendo,任天堂 本社\n".as_bytes());
    }

    #[test]
    fn leaves_no_temporary_files() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.csv");
        emit(&[Record::new("Kao", "花王 本社")], &path).unwrap();
        emit(&[Record::new("Kao", "花王 本社")], &path).unwrap();

        let names: Vec<_> = read_dir(dir.path())
            .unwrap()
            .map(|x| x.unwrap().file_name())
            .collect();
        assert_eq!(names, ["out.csv"]);
    }

    #[cfg(unix)]
    #[test]
    fn read_only_directory_fails_and_keeps_old_file() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempdir().unwrap();
        let path = dir.path().join("out.csv");
        fs::write(&path, "old\n").unwrap();
        fs::set_permissions(dir.path(), fs::Permissions::from_mode(0o555)).unwrap();

        // root ignores directory permissions
        let writable = fs::File::create(dir.path().join("canary")).is_ok();
        if !writable {
            let err = emit(&[Record::new("Kao", "花王 本社")], &path).unwrap_err();
            let EmitError::Io { path: failed, .. } = &err;
            assert_eq!(failed, &path);
            assert_eq!(read_to_string(&path).unwrap(), "old\n");
            let names: Vec<_> = read_dir(dir.path())
                .unwrap()
                .map(|x| x.unwrap().file_name())
                .collect();
            assert_eq!(names, ["out.csv"]);
        }

        fs::set_permissions(dir.path(), fs::Permissions::from_mode(0o755)).unwrap();
    }

    #[test]
    fn missing_directory_fails_without_creating_anything() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join("out.csv");

        let err = emit(&[Record::new("Kao", "花王 本社")], &path).unwrap_err();
        let EmitError::Io { path: failed, .. } = &err;
        assert_eq!(failed, &path);
        assert!(err.to_string().contains("out.csv"));
        assert!(!path.exists());
        assert!(!dir.path().join("missing").exists());
    }
}
