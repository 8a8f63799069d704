//! The set of words left out of a concordance.
use std::{fs::File, io, io::BufRead, io::BufReader, path::Path};

use quad_table::QuadTable;

use crate::{words::for_each_line, ConcordanceError, ConcordanceOptions};

/// A set of stop words, stored as the keys of a [`QuadTable`].
#[derive(Clone, Debug)]
pub struct StopWords {
    table: QuadTable,
}

impl StopWords {
    /// Returns an empty set of stop words.
    pub fn new(options: &ConcordanceOptions) -> Self {
        StopWords {
            table: QuadTable::new(options.initial_capacity),
        }
    }

    /// Reads stop words from the file at `path`, one word per line.
    pub fn load(
        path: impl AsRef<Path>,
        options: &ConcordanceOptions,
    ) -> Result<Self, ConcordanceError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|err| ConcordanceError::read(path, err))?;
        let stop_words = Self::from_reader(BufReader::new(file), options)
            .map_err(|err| ConcordanceError::read(path, err))?;
        log::info!(
            "loaded {} stop words from {}",
            stop_words.len(),
            path.display()
        );
        Ok(stop_words)
    }

    /// Reads stop words from `reader`, one word per line.
    ///
    /// Only the line break is removed from each line. Words are neither trimmed nor case folded,
    /// and an empty line adds the empty word.
    pub fn from_reader(reader: impl BufRead, options: &ConcordanceOptions) -> io::Result<Self> {
        let mut stop_words = Self::new(options);
        for_each_line(reader, |line| stop_words.insert(&String::from_utf8_lossy(line)))?;
        Ok(stop_words)
    }

    /// Adds a stop word.
    pub fn insert(&mut self, word: &str) {
        self.table.insert(word, 0);
    }
    /// Returns `true` if `word` is a stop word.
    pub fn contains(&self, word: &str) -> bool {
        self.table.contains_key(word)
    }
    /// Returns the number of distinct stop words.
    pub fn len(&self) -> usize {
        self.table.len()
    }
    /// Returns `true` if there are no stop words.
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
    /// Returns the table holding the stop words.
    pub fn table(&self) -> &QuadTable {
        &self.table
    }
}

impl<'a> FromIterator<&'a str> for StopWords {
    fn from_iter<T: IntoIterator<Item = &'a str>>(iter: T) -> Self {
        let mut stop_words = Self::new(&ConcordanceOptions::default());
        for word in iter {
            stop_words.insert(word);
        }
        stop_words
    }
}
