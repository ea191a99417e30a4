/*! Crawled data reading utilities

[load_records] reads a single crawled file, [Corpus] lists the crawled files laid out under a root folder.
!*/
pub mod corpus;

use std::{fs::File, io::BufReader, path::Path};

use log::debug;

use crate::{error::Error, record::PageRecord};

pub use corpus::Corpus;

/// Read a JSON array of [PageRecord] from `src`.
///
/// The whole file is loaded in memory.
/// Missing files and malformed JSON are returned as errors.
pub fn load_records(src: &Path) -> Result<Vec<PageRecord>, Error> {
    debug!("loading records from {:?}", src);
    let f = File::open(src)?;
    let records: Vec<PageRecord> = serde_json::from_reader(BufReader::new(f))?;
    debug!("{:?}: {} records", src, records.len());
    Ok(records)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::load_records;
    use crate::error::Error;

    #[test]
    fn test_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pages.json");
        let mut f = std::fs::File::create(&path).unwrap();
        write!(
            f,
            r#"[{{"url": "u1", "title": "t1", "content": "<p>سلام</p>"}}, {{"title": null}}]"#
        )
        .unwrap();

        let records = load_records(&path).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].content, "<p>سلام</p>");
        assert_eq!(records[1].url, None);
        assert_eq!(records[1].content, "");
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let r = load_records(&dir.path().join("nope.json"));
        assert!(matches!(r, Err(Error::Io(_))));
    }

    #[test]
    fn test_malformed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "[{\"url\": ").unwrap();
        assert!(matches!(load_records(&path), Err(Error::Serde(_))));
    }
}
