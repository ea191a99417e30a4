/*!
# IO utilities

Loading of crawled page records and saving of transformed records.

Both directions use JSON arrays: input files hold one array of page objects,
output files hold one pretty-printed array (4 spaces of indentation, non-ASCII kept as is).
!*/
pub mod reader;
pub mod writer;

pub use reader::{load_records, Corpus};
pub use writer::{ensure_dir, write_json};
