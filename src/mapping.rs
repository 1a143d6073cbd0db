//! Word index mappings.
//!
//! A word index mapping associates vocabulary words with numeric
//! identifiers. Mappings are built upstream of this crate; this module
//! provides the `WordIndexMapping` trait that abstracts over the
//! associative containers a mapping can be stored in, and readers for
//! mappings that were saved to disk.
//!
//! Two file formats are supported:
//!
//! 1. `MappingFormat::Text`: one entry per line, consisting of the word
//!    and its index separated by a tab.
//! 2. `MappingFormat::Toml`: a `[words]` table from words to indices.

use std::borrow::Borrow;
use std::collections::hash_map::Entry;
use std::collections::{BTreeMap, HashMap};
use std::fs::File;
use std::hash::{BuildHasher, Hash};
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use fnv::FnvHashMap;
use log::debug;
use serde::Deserialize;

use crate::error::{Error, Result};

/// Lookup of word indices.
pub trait WordIndexMapping {
    /// The index type.
    type Index;

    /// Get the index of a word.
    fn word_index(&self, word: &str) -> Option<Self::Index>;
}

impl<K, I, S> WordIndexMapping for HashMap<K, I, S>
where
    K: Borrow<str> + Eq + Hash,
    I: Copy,
    S: BuildHasher,
{
    type Index = I;

    fn word_index(&self, word: &str) -> Option<I> {
        self.get(word).copied()
    }
}

impl<K, I> WordIndexMapping for BTreeMap<K, I>
where
    K: Borrow<str> + Ord,
    I: Copy,
{
    type Index = I;

    fn word_index(&self, word: &str) -> Option<I> {
        self.get(word).copied()
    }
}

impl<M> WordIndexMapping for &M
where
    M: WordIndexMapping + ?Sized,
{
    type Index = M::Index;

    fn word_index(&self, word: &str) -> Option<Self::Index> {
        (**self).word_index(word)
    }
}

/// Formats of word index mapping files.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MappingFormat {
    Text,
    Toml,
}

impl TryFrom<&str> for MappingFormat {
    type Error = Error;

    fn try_from(format: &str) -> Result<Self> {
        use MappingFormat::*;

        match format {
            "text" => Ok(Text),
            "toml" => Ok(Toml),
            unknown => Err(Error::Format(format!(
                "Unknown mapping format: {}",
                unknown
            ))),
        }
    }
}

/// Read a word index mapping from a file.
pub fn read_mapping(
    path: impl AsRef<Path>,
    format: MappingFormat,
) -> Result<FnvHashMap<String, usize>> {
    let path = path.as_ref();
    let f = File::open(path).map_err(|e| Error::file_access(path, e))?;
    let mut reader = BufReader::new(f);

    let mapping = match format {
        MappingFormat::Text => read_mapping_text(&mut reader),
        MappingFormat::Toml => read_mapping_toml(&mut reader),
    }?;

    debug!(
        "Read mapping with {} words from {}",
        mapping.len(),
        path.display()
    );

    Ok(mapping)
}

/// Read a word index mapping in text format.
///
/// Each line contains a word and its index, separated by a tab:
///
/// *word\tindex*
///
/// The word is everything before the last tab, so the empty word can
/// be written as a line that starts with a tab.
pub fn read_mapping_text<R>(reader: &mut R) -> Result<FnvHashMap<String, usize>>
where
    R: BufRead,
{
    let mut mapping = FnvHashMap::default();

    let mut line_no = 0;
    loop {
        let mut buf = Vec::new();
        if reader
            .read_until(b'\n', &mut buf)
            .map_err(|e| Error::read_error("Cannot read line from mapping file", e))?
            == 0
        {
            break;
        }
        line_no += 1;

        if buf.last() == Some(&b'\n') {
            buf.pop();
            if buf.last() == Some(&b'\r') {
                buf.pop();
            }
        }

        let line = String::from_utf8(buf).map_err(|e| {
            Error::Format(format!("Line {} contains invalid UTF-8: {}", line_no, e))
        })?;

        let (word, index) = line
            .rsplit_once('\t')
            .ok_or_else(|| Error::Format(format!("Line {} lacks a tab separator", line_no)))?;
        let index = index.parse().map_err(|e| {
            Error::Format(format!(
                "Cannot parse index '{}' on line {}: {}",
                index, line_no, e
            ))
        })?;

        match mapping.entry(word.to_owned()) {
            Entry::Occupied(_) => {
                return Err(Error::Format(format!(
                    "Duplicate word '{}' on line {}",
                    word, line_no
                )))
            }
            Entry::Vacant(entry) => {
                entry.insert(index);
            }
        }
    }

    Ok(mapping)
}

#[derive(Deserialize)]
struct TomlMapping {
    words: FnvHashMap<String, usize>,
}

/// Read a word index mapping in TOML format.
///
/// The mapping is stored in the `words` table:
///
/// ```toml
/// [words]
/// great = 0
/// awful = 1
/// ```
pub fn read_mapping_toml<R>(reader: &mut R) -> Result<FnvHashMap<String, usize>>
where
    R: Read,
{
    let mut data = String::new();
    reader
        .read_to_string(&mut data)
        .map_err(|e| Error::read_error("Cannot read TOML mapping", e))?;

    let mapping: TomlMapping = toml::from_str(&data)
        .map_err(|e| Error::Format(format!("Cannot deserialize TOML mapping: {}", e)))?;

    Ok(mapping.words)
}
