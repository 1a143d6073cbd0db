//! Prelude exports the most commonly-used types and traits.

pub use crate::error::{Error, Result};

pub use crate::indices::{reviews_word_indices, word_indices, WordIndexSet, WordIndices};

pub use crate::mapping::{read_mapping, MappingFormat, WordIndexMapping};

pub use crate::reviews::{load_reviews, load_reviews_lossy, read_reviews, read_reviews_lossy};
