//! Single file cleaning.
use std::path::PathBuf;

use log::info;

use crate::error::Error;

use super::{CleaningChain, Pipeline};

pub struct FilePipeline {
    src: PathBuf,
    dst: PathBuf,
    chain: CleaningChain,
}

impl FilePipeline {
    pub fn new(src: PathBuf, dst: PathBuf, chain: CleaningChain) -> Self {
        Self { src, dst, chain }
    }
}

impl Pipeline<usize> for FilePipeline {
    /// Returns the number of cleaned records.
    fn run(&self) -> Result<usize, Error> {
        let nb_records = self.chain.clean_file(&self.src, &self.dst)?;
        info!("{:?}: {} records cleaned", self.src, nb_records);
        Ok(nb_records)
    }
}
