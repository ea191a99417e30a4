//! Record cleaning chain.
//!
//! 1. Style blocks and markup are removed ([ContentCleaner]).
//! 1. Persian text is normalized ([PersianNormalizer]).
//! 1. Chars outside of the Arabic block are deleted ([ScriptFilter]).
//! 1. Remaining text is split into sentences ([Segment]).
//!
//! Normalization has to happen before script filtering, since it moves some chars into the block.
use std::path::Path;

use log::debug;

use crate::error::Error;
use crate::filtering::ScriptFilter;
use crate::io::{ensure_dir, load_records, write_json};
use crate::record::{CleanedRecord, PageRecord};
use crate::segmenter::{PunctuationSegmenter, Segment};
use crate::transformers::{ContentCleaner, PersianNormalizer, Transform};

pub struct CleaningChain {
    cleaner: ContentCleaner,
    normalizer: PersianNormalizer,
    script: ScriptFilter,
    segmenter: Box<dyn Segment + Sync + Send>,
}

impl CleaningChain {
    pub fn new(
        cleaner: ContentCleaner,
        normalizer: PersianNormalizer,
        script: ScriptFilter,
        segmenter: Box<dyn Segment + Sync + Send>,
    ) -> Self {
        Self {
            cleaner,
            normalizer,
            script,
            segmenter,
        }
    }

    /// Default chain with a custom segmenter.
    pub fn with_segmenter(segmenter: Box<dyn Segment + Sync + Send>) -> Self {
        Self {
            segmenter,
            ..Default::default()
        }
    }

    /// Clean raw content into sentences.
    pub fn clean_text(&self, content: &str) -> Vec<String> {
        let text = self.cleaner.transform_own(content.to_string());
        let text = self.normalizer.transform_own(text);
        let text = self.script.restrict(&text);
        self.segmenter.segment(&text)
    }

    pub fn clean_record(&self, record: &PageRecord) -> CleanedRecord {
        CleanedRecord::new(
            record.url.clone(),
            record.title.clone(),
            self.clean_text(&record.content),
        )
    }

    /// Clean every record of `src` and write them to `dst`, creating the parent folder if needed.
    /// Returns the number of written records.
    pub fn clean_file(&self, src: &Path, dst: &Path) -> Result<usize, Error> {
        let records = load_records(src)?;
        let cleaned: Vec<CleanedRecord> = records.iter().map(|r| self.clean_record(r)).collect();

        if let Some(parent) = dst.parent() {
            ensure_dir(parent)?;
        }
        write_json(dst, &cleaned)?;
        debug!("{:?}: {} cleaned records written to {:?}", src, cleaned.len(), dst);

        Ok(cleaned.len())
    }
}

impl Default for CleaningChain {
    fn default() -> Self {
        Self::new(
            ContentCleaner::default(),
            PersianNormalizer::default(),
            ScriptFilter::default(),
            Box::new(PunctuationSegmenter::default()),
        )
    }
}
