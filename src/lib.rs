pub mod classify;
pub mod error;
pub mod filtering;
pub mod io;
pub mod pipelines;
pub mod record;
pub mod segmenter;
pub mod transformers;
