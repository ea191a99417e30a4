/*! Filtering utilities

Filters operate on char or sentence level, and implement [filter::Filter]:
they are pure, two equal inputs always get the same answer.

- [script::ScriptFilter] keeps chars of a given Unicode block (and whitespace).
- [sentence::Length] keeps sentences longer than a minimum number of codepoints.
! */
mod filter;
pub mod script;
pub mod sentence;

pub use filter::Filter;
pub use script::ScriptFilter;
pub use sentence::Length;
