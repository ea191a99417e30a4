/*! Text transformers.

Transforms page content by removing markup or canonicalizing characters.

!*/

mod cleaner;
mod normalizer;
mod transform;

pub use cleaner::ContentCleaner;
pub use normalizer::PersianNormalizer;
pub use transform::Transform;
