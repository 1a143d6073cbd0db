//! A library for mapping reviews to vocabulary word indices.
//!
//! reviewidx loads reviews from text files, one review per line, and
//! maps each review to the set of indices of the vocabulary words it
//! contains. The vocabulary is given as a word index mapping, which
//! can be any associative container from words to indices or a
//! mapping that is read from a text or TOML file.

pub mod error;

pub mod indices;

pub mod mapping;

pub mod prelude;

pub mod reviews;
