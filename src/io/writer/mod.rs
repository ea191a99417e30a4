/*!
# JSON output writing

Output files are written in one go: the whole array is serialized into a buffered file handle.
Output folders are created with [ensure_dir], which does not fail on existing folders.
!*/
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use log::debug;
use serde::Serialize;

use crate::error::Error;

/// Create `dst` and its parents if needed.
///
/// Existing folders (including ones created concurrently by another worker) are not an error.
pub fn ensure_dir(dst: &Path) -> Result<(), Error> {
    if dst.as_os_str().is_empty() {
        return Ok(());
    }
    std::fs::create_dir_all(dst)?;
    Ok(())
}

/// Write `items` as a pretty-printed JSON array at `dst`, truncating any existing file.
pub fn write_json<T: Serialize>(dst: &Path, items: &[T]) -> Result<(), Error> {
    debug!("writing {} items to {:?}", items.len(), dst);
    let mut w = BufWriter::new(File::create(dst)?);
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut w, formatter);
    items.serialize(&mut ser)?;
    w.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::{io::load_records, record::PageRecord};

    use super::*;

    #[test]
    fn test_format() {
        let dir = tempfile::tempdir().unwrap();
        let dst = dir.path().join("out.json");
        let records = vec![PageRecord::new(
            Some("u1".to_string()),
            None,
            "مهاجرت".to_string(),
        )];

        write_json(&dst, &records).unwrap();
        let written = std::fs::read_to_string(&dst).unwrap();

        let expected = "[\n    {\n        \"url\": \"u1\",\n        \"title\": null,\n        \"content\": \"مهاجرت\"\n    }\n]";
        assert_eq!(written, expected);
    }

    #[test]
    fn test_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let dst = dir.path().join("out.json");
        let records = vec![
            PageRecord::new(Some("u1".to_string()), Some("t1".to_string()), "a".into()),
            PageRecord::new(None, Some("عنوان".to_string()), String::new()),
        ];

        write_json(&dst, &records).unwrap();
        assert_eq!(load_records(&dst).unwrap(), records);
    }

    #[test]
    fn test_ensure_dir_twice() {
        let dir = tempfile::tempdir().unwrap();
        let dst = dir.path().join("cleaned").join("canada");
        ensure_dir(&dst).unwrap();
        ensure_dir(&dst).unwrap();
        assert!(dst.is_dir());
    }
}
