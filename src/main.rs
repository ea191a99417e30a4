//! # crawlclean
//!
//! Cleaning, categorization and sentence segmentation of crawled web pages.
//!
//! Crawled pages are JSON arrays of `{url, title, content}` objects.
//!
//! ## Getting started
//!
//! ```sh
//! crawlclean 0.1.0
//! crawled pages cleaning tool.
//!
//! USAGE:
//!     crawlclean <SUBCOMMAND>
//!
//! FLAGS:
//!     -h, --help       Prints help information
//!     -V, --version    Prints version information
//!
//! SUBCOMMANDS:
//!     categorize    Bucket the pages of a crawled file by topic
//!     clean         Clean and segment every crawled file, grouped by country
//!     clean-file    Clean and segment a single crawled file
//!     help          Prints this message or the help of the given subcommand(s)
//! ```
//!
use crawlclean::classify::Categorizer;
use crawlclean::error::Error;
use crawlclean::filtering::Length;
use crawlclean::pipelines::{CategoryPipeline, CleaningChain, CountryPipeline, FilePipeline, Pipeline};
use structopt::StructOpt;

#[macro_use]
extern crate log;

mod cli;

fn cleaning_chain(segmentation: &cli::Segmentation) -> CleaningChain {
    let filter = Length::with_min_size(segmentation.min_sentence_length);
    CleaningChain::with_segmenter(segmentation.segmenter.build(filter))
}

fn main() -> Result<(), Error> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let opt = cli::Crawlclean::from_args();
    debug!("cli args\n{:#?}", opt);

    match opt {
        cli::Crawlclean::Categorize(c) => {
            let categorizer = match &c.categories {
                Some(path) => Categorizer::from_file(path)?,
                None => Categorizer::default(),
            };
            let p = CategoryPipeline::new(c.src, c.dst, categorizer);
            let written = p.run()?;
            println!(
                "Content categorized and exported successfully ({} category files).",
                written.len()
            );
        }

        cli::Crawlclean::Clean(c) => {
            let chain = cleaning_chain(&c.segmentation);
            let p = CountryPipeline::new(c.src, c.dst.clone(), chain, c.parallel);
            let report = p.run()?;
            println!(
                "Cleaned and segmented {} files into {:?} ({} skipped).",
                report.written.len(),
                c.dst,
                report.skipped.len()
            );
        }

        cli::Crawlclean::CleanFile(c) => {
            let chain = cleaning_chain(&c.segmentation);
            let p = FilePipeline::new(c.src, c.dst.clone(), chain);
            p.run()?;
            println!("Cleaned and segmented JSON file is saved at {:?}", c.dst);
        }
    };
    Ok(())
}
