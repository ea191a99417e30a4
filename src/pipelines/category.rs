//! Topical bucketing of a crawled file.
//!
//! Records are bucketed by [Categorizer] and each bucket is written to `<dst>/<label>.json`.
//! Only encountered categories get a file. Content is written as is, markup included.
use std::path::PathBuf;

use log::info;

use crate::classify::Categorizer;
use crate::error::Error;
use crate::io::{ensure_dir, load_records, write_json};

use super::Pipeline;

pub struct CategoryPipeline {
    src: PathBuf,
    dst: PathBuf,
    categorizer: Categorizer,
}

impl CategoryPipeline {
    pub fn new(src: PathBuf, dst: PathBuf, categorizer: Categorizer) -> Self {
        Self {
            src,
            dst,
            categorizer,
        }
    }
}

impl Pipeline<Vec<PathBuf>> for CategoryPipeline {
    /// Returns the written files, in order of first appearance of their category.
    fn run(&self) -> Result<Vec<PathBuf>, Error> {
        let records = load_records(&self.src)?;
        info!("{} records to categorize from {:?}", records.len(), self.src);

        ensure_dir(&self.dst)?;

        let mut written = Vec::new();
        for (label, records) in self.categorizer.group(records) {
            let dst = self.dst.join(format!("{}.json", label));
            info!("[{}] {} records", label, records.len());
            write_json(&dst, &records)?;
            written.push(dst);
        }

        Ok(written)
    }
}

#[cfg(test)]
mod tests {
    use super::CategoryPipeline;
    use crate::{
        classify::Categorizer, io::load_records, pipelines::Pipeline, record::PageRecord,
    };

    #[test]
    fn test_buckets() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("crawled.json");
        std::fs::write(
            &src,
            r#"[
                {"url": "u1", "title": "t1", "content": "دانشگاه تهران"},
                {"url": "u2", "title": "t2", "content": "nothing"},
                {"url": "u3", "title": "t3", "content": "تحصیل"}
            ]"#,
        )
        .unwrap();

        let dst = dir.path().join("out");
        let p = CategoryPipeline::new(src, dst.clone(), Categorizer::default());
        let written = p.run().unwrap();

        assert_eq!(written, vec![dst.join("study.json"), dst.join("other.json")]);

        let study = load_records(&dst.join("study.json")).unwrap();
        let urls: Vec<Option<String>> = study.into_iter().map(|r: PageRecord| r.url).collect();
        assert_eq!(urls, vec![Some("u1".to_string()), Some("u3".to_string())]);
        assert!(!dst.join("immigration.json").exists());
    }

    #[test]
    fn test_missing_source() {
        let dir = tempfile::tempdir().unwrap();
        let p = CategoryPipeline::new(
            dir.path().join("missing.json"),
            dir.path().to_path_buf(),
            Categorizer::default(),
        );
        assert!(p.run().is_err());
    }
}
