//! Pipelines.
//!
//! Each command is backed by a pipeline implementing the light [pipeline::Pipeline] trait:
//!
//! - [CategoryPipeline] buckets the records of a crawled file by topic.
//! - [CountryPipeline] cleans every crawled file found under a folder, routing outputs by country.
//! - [FilePipeline] cleans a single crawled file.
//!
//! The cleaning itself is done by a [CleaningChain].
mod category;
mod chain;
mod country;
mod file;
#[allow(clippy::module_inception)]
pub mod pipeline;

pub use category::CategoryPipeline;
pub use chain::CleaningChain;
pub use country::{group_key, CountryPipeline, CountryReport};
pub use file::FilePipeline;
pub use pipeline::Pipeline;
