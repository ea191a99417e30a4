//! Command line arguments and parameters management/parsing.
use std::path::PathBuf;

use crawlclean::segmenter::SegmenterKind;
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(name = "crawlclean", about = "crawled pages cleaning tool.")]
/// Holds every command that is callable by the `crawlclean` command.
pub enum Crawlclean {
    #[structopt(about = "Bucket the pages of a crawled file by topic")]
    Categorize(Categorize),
    #[structopt(about = "Clean and segment every crawled file, grouped by country")]
    Clean(Clean),
    #[structopt(about = "Clean and segment a single crawled file")]
    CleanFile(CleanFile),
}

#[derive(Debug, StructOpt)]
/// Categorize command and parameters.
///
/// ```sh
/// crawlclean-categorize 0.1.0
/// Bucket the pages of a crawled file by topic
///
/// USAGE:
///     crawlclean categorize [OPTIONS] <src>
///
/// OPTIONS:
///     -c, --categories <categories>    category file (json). Default is immigration-related categories.
///     -d, --dst <dst>                  destination folder [default: .]
///
/// ARGS:
///     <src>    crawled file
/// ```
pub struct Categorize {
    #[structopt(parse(from_os_str), help = "crawled file")]
    pub src: PathBuf,
    #[structopt(
        parse(from_os_str),
        short = "d",
        long = "dst",
        help = "destination folder",
        default_value = "."
    )]
    pub dst: PathBuf,
    #[structopt(
        parse(from_os_str),
        short = "c",
        long = "categories",
        help = "category file (json). Default is immigration-related categories."
    )]
    pub categories: Option<PathBuf>,
}

#[derive(Debug, StructOpt)]
/// Segmentation parameters, shared by cleaning commands.
pub struct Segmentation {
    #[structopt(
        long = "segmenter",
        help = "sentence segmenter (punctuation or unicode)",
        default_value = "punctuation"
    )]
    pub segmenter: SegmenterKind,
    #[structopt(
        long = "min-sentence-length",
        help = "sentences of this many codepoints or less are discarded",
        default_value = "0"
    )]
    pub min_sentence_length: usize,
}

#[derive(Debug, StructOpt)]
/// Clean command and parameters.
pub struct Clean {
    #[structopt(
        parse(from_os_str),
        short = "s",
        long = "src",
        help = "crawled files location",
        default_value = "crawled"
    )]
    pub src: PathBuf,
    #[structopt(
        parse(from_os_str),
        short = "d",
        long = "dst",
        help = "cleaned files location",
        default_value = "cleaned"
    )]
    pub dst: PathBuf,
    #[structopt(flatten)]
    pub segmentation: Segmentation,
    #[structopt(short = "p", long = "parallel", help = "clean files concurrently")]
    pub parallel: bool,
}

#[derive(Debug, StructOpt)]
/// Single file clean command and parameters.
pub struct CleanFile {
    #[structopt(parse(from_os_str), help = "crawled file")]
    pub src: PathBuf,
    #[structopt(parse(from_os_str), help = "cleaned file")]
    pub dst: PathBuf,
    #[structopt(flatten)]
    pub segmentation: Segmentation,
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use crawlclean::segmenter::SegmenterKind;
    use structopt::StructOpt;

    use super::Crawlclean;

    #[test]
    fn test_clean_defaults() {
        let opt = Crawlclean::from_iter(vec!["crawlclean", "clean"]);
        match opt {
            Crawlclean::Clean(c) => {
                assert_eq!(c.src, PathBuf::from("crawled"));
                assert_eq!(c.dst, PathBuf::from("cleaned"));
                assert_eq!(c.segmentation.segmenter, SegmenterKind::Punctuation);
                assert_eq!(c.segmentation.min_sentence_length, 0);
                assert!(!c.parallel);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_categorize() {
        let opt = Crawlclean::from_iter(vec!["crawlclean", "categorize", "in.json", "-d", "out"]);
        match opt {
            Crawlclean::Categorize(c) => {
                assert_eq!(c.src, PathBuf::from("in.json"));
                assert_eq!(c.dst, PathBuf::from("out"));
                assert!(c.categories.is_none());
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_clean_file() {
        let opt = Crawlclean::from_iter(vec![
            "crawlclean",
            "clean-file",
            "a.json",
            "b.json",
            "--segmenter",
            "unicode",
        ]);
        match opt {
            Crawlclean::CleanFile(c) => {
                assert_eq!(c.dst, PathBuf::from("b.json"));
                assert_eq!(c.segmentation.segmenter, SegmenterKind::Unicode);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_bad_segmenter() {
        let r = Crawlclean::from_iter_safe(vec!["crawlclean", "clean", "--segmenter", "hazm"]);
        assert!(r.is_err());
    }
}
