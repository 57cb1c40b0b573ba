//! Text normalization and sentence splitting.

mod clean;
mod sentences;

pub use clean::clean_paragraph;
pub use sentences::split_sentences;
