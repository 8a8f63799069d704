//! Word concordances built on [`quad_table::QuadTable`].
//!
//! A concordance maps every word of a text to the lines it appears on. Words are runs of ASCII
//! letters, compared after lower-casing, and words listed in a separate stop word file are left
//! out.
//!
//! ```no_run
//! use concord::ConcordanceOptions;
//!
//! let concordance = concord::build("stop_words.txt", "input.txt", &ConcordanceOptions::default())?;
//! concordance.write_file("input_con.txt")?;
//! # Ok::<(), concord::ConcordanceError>(())
//! ```
#![deny(unsafe_code)]
#![warn(missing_docs)]

use std::path::Path;

pub mod concordance;
pub mod error;
pub mod stop_words;
pub mod words;

pub use concordance::{Concordance, ConcordanceBuilder, ConcordanceOptions, DEFAULT_CAPACITY};
pub use error::ConcordanceError;
pub use stop_words::StopWords;

/// Loads the stop words at `stop_words` and builds the concordance of the text at `source`.
///
/// The stop word file is read first, so a missing stop word file is reported even if `source` is
/// missing as well.
pub fn build(
    stop_words: impl AsRef<Path>,
    source: impl AsRef<Path>,
    options: &ConcordanceOptions,
) -> Result<Concordance, ConcordanceError> {
    let stop_words = StopWords::load(stop_words, options)?;
    Concordance::load(source, &stop_words, options)
}
