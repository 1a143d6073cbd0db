//! Loading reviews from text files.
//!
//! Reviews are stored one per line. Lines are returned verbatim: the
//! line terminator is kept, so that the reviews can be processed
//! exactly as they were stored.
//!
//! ```no_run
//! use reviewidx::reviews::load_reviews;
//!
//! let reviews = load_reviews("reviews.txt").unwrap();
//! for review in &reviews {
//!     print!("{}", review);
//! }
//! ```

use std::borrow::Cow;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::{debug, warn};

use crate::error::{Error, Result};

/// Load the lines of a file.
///
/// Every line keeps its terminator. A last line without terminator is
/// returned as-is; a file that ends in a terminator does not produce a
/// trailing empty line.
///
/// Fails with `Error::FileAccess` when the file cannot be opened and
/// with `Error::Format` when the file is not valid UTF-8.
pub fn load_reviews(path: impl AsRef<Path>) -> Result<Vec<String>> {
    load(path.as_ref(), false)
}

/// Load the lines of a file, replacing invalid UTF-8.
///
/// In contrast to `load_reviews`, this function does not fail if a
/// line contains invalid UTF-8. Instead, invalid sequences are replaced
/// by the replacement character.
pub fn load_reviews_lossy(path: impl AsRef<Path>) -> Result<Vec<String>> {
    load(path.as_ref(), true)
}

fn load(path: &Path, lossy: bool) -> Result<Vec<String>> {
    let f = File::open(path).map_err(|e| Error::file_access(path, e))?;
    let reviews = read_lines(&mut BufReader::new(f), lossy)?;
    debug!("Loaded {} reviews from {}", reviews.len(), path.display());
    Ok(reviews)
}

/// Read the lines of a buffered reader.
///
/// This has the same line semantics as `load_reviews`.
pub fn read_reviews<R>(reader: &mut R) -> Result<Vec<String>>
where
    R: BufRead,
{
    read_lines(reader, false)
}

/// Read the lines of a buffered reader, replacing invalid UTF-8.
pub fn read_reviews_lossy<R>(reader: &mut R) -> Result<Vec<String>>
where
    R: BufRead,
{
    read_lines(reader, true)
}

fn read_lines<R>(reader: &mut R, lossy: bool) -> Result<Vec<String>>
where
    R: BufRead,
{
    let mut lines = Vec::new();

    loop {
        let mut buf = Vec::new();
        if reader
            .read_until(b'\n', &mut buf)
            .map_err(|e| Error::read_error("Cannot read review", e))?
            == 0
        {
            break;
        }

        let line = if lossy {
            let line = String::from_utf8_lossy(&buf);
            if let Cow::Owned(_) = line {
                warn!("Replaced invalid UTF-8 in line {}", lines.len() + 1);
            }
            line.into_owned()
        } else {
            String::from_utf8(buf).map_err(|e| {
                Error::Format(format!(
                    "Line {} contains invalid UTF-8: {}",
                    lines.len() + 1,
                    e
                ))
            })?
        };

        lines.push(line);
    }

    Ok(lines)
}
