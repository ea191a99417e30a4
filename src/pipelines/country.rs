//! Country-routed cleaning.
//!
//! Every `.json` file found under the source folder is cleaned on its own,
//! and written into a folder named after the country found in its file name:
//!
//! ```text
//! crawled/category_canada_immigration-to-canada.json
//!   -> cleaned/canada/cleaned_category_canada_immigration-to-canada.json
//! ```
//!
//! The country is the second `_`-separated token of the file stem.
//! Files without one are skipped.
//!
//! Files are independent: a file that can't be read or written is reported and
//! the remaining ones are still processed. Two files with the same name in
//! different subfolders can't share an output file: only the first one is cleaned,
//! the other one is reported.
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use log::{error, info, warn};
use rayon::prelude::*;

use crate::error::Error;
use crate::io::Corpus;

use super::{CleaningChain, Pipeline};

/// Get the group (country) key of a crawled file name.
///
/// `category_canada_immigration-to-canada.json` has `canada` as its group key.
pub fn group_key(path: &Path) -> Option<String> {
    let stem = path.file_stem()?.to_str()?;
    match stem.split('_').nth(1) {
        Some(key) if !key.is_empty() => Some(key.to_string()),
        _ => None,
    }
}

/// What happened to each discovered file.
#[derive(Debug, Default)]
pub struct CountryReport {
    /// Written output files.
    pub written: Vec<PathBuf>,
    /// Input files that had no group key.
    pub skipped: Vec<PathBuf>,
}

/// A file to clean, with its group key and output location.
struct Job<'a> {
    src: &'a Path,
    key: String,
    dst: PathBuf,
}

pub struct CountryPipeline {
    src: PathBuf,
    dst: PathBuf,
    chain: CleaningChain,
    parallel: bool,
}

impl CountryPipeline {
    pub fn new(src: PathBuf, dst: PathBuf, chain: CleaningChain, parallel: bool) -> Self {
        Self {
            src,
            dst,
            chain,
            parallel,
        }
    }

    /// Output location of a crawled file.
    fn output_path(&self, src: &Path, key: &str) -> Result<PathBuf, Error> {
        let filename = src
            .file_name()
            .ok_or_else(|| Error::Custom(format!("invalid file name: {:?}", src)))?;

        let mut dst = self.dst.join(key);
        dst.push(format!("cleaned_{}", filename.to_string_lossy()));
        Ok(dst)
    }

    fn process_file(&self, job: &Job) -> Result<PathBuf, Error> {
        let nb_records = self.chain.clean_file(job.src, &job.dst)?;
        info!("[{}] {:?}: {} records cleaned", job.key, job.src, nb_records);
        Ok(job.dst.clone())
    }
}

impl Pipeline<CountryReport> for CountryPipeline {
    fn run(&self) -> Result<CountryReport, Error> {
        let corpus = Corpus::new(&self.src)?;
        info!(
            "{} files to clean from {:?}",
            corpus.files().len(),
            corpus.root()
        );

        let mut report = CountryReport::default();
        let mut nb_errors = 0;

        // files sharing a name in different subfolders share an output path:
        // the first one (in path order) gets it, the others are failures.
        let mut claimed: HashMap<PathBuf, &Path> = HashMap::new();
        let mut jobs = Vec::new();
        for src in corpus.files() {
            let key = match group_key(src) {
                Some(key) => key,
                None => {
                    warn!("skipping {:?}: no country in file name", src);
                    report.skipped.push(src.clone());
                    continue;
                }
            };

            let dst = match self.output_path(src, &key) {
                Ok(dst) => dst,
                Err(e) => {
                    error!("{:?}: {}", src, e);
                    nb_errors += 1;
                    continue;
                }
            };

            if let Some(first) = claimed.get(&dst) {
                error!(
                    "{:?}: output {:?} is already used by {:?}",
                    src, dst, first
                );
                nb_errors += 1;
                continue;
            }
            claimed.insert(dst.clone(), src);
            jobs.push(Job { src, key, dst });
        }

        let results: Vec<(&Path, Result<PathBuf, Error>)> = if self.parallel {
            jobs.par_iter()
                .map(|job| (job.src, self.process_file(job)))
                .collect()
        } else {
            jobs.iter()
                .map(|job| (job.src, self.process_file(job)))
                .collect()
        };

        for (src, result) in results {
            match result {
                Ok(dst) => report.written.push(dst),
                Err(e) => {
                    error!("{:?}: {}", src, e);
                    nb_errors += 1;
                }
            }
        }

        if nb_errors > 0 {
            return Err(Error::Custom(format!(
                "{} files could not be cleaned: see previous messages.",
                nb_errors
            )));
        }

        Ok(report)
    }
}
