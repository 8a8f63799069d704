//! Building and rendering concordances.
use std::{
    fmt,
    fs::File,
    hash::BuildHasherDefault,
    io::{self, BufRead, BufReader, BufWriter, Write},
    path::Path,
};

use quad_table::QuadTable;
use zwohash::ZwoHasher;

use crate::{
    words::{for_each_line, words},
    ConcordanceError, StopWords,
};

/// Initial capacity of the stop word and concordance tables.
pub const DEFAULT_CAPACITY: usize = 191;

/// Settings shared by [`StopWords`] and [`Concordance`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ConcordanceOptions {
    /// Number of slots each table starts with. Must not be zero.
    pub initial_capacity: usize,
}

impl Default for ConcordanceOptions {
    fn default() -> Self {
        ConcordanceOptions {
            initial_capacity: DEFAULT_CAPACITY,
        }
    }
}

/// A mapping from each word of a text to the numbers of the lines it appears on.
///
/// Line numbers start at 1. A word appearing several times on a line is recorded once for that
/// line, so the line numbers of every word are strictly increasing.
#[derive(Clone, Debug)]
pub struct Concordance {
    table: QuadTable,
}

impl Concordance {
    /// Builds the concordance of the file at `path`, leaving out `stop_words`.
    pub fn load(
        path: impl AsRef<Path>,
        stop_words: &StopWords,
        options: &ConcordanceOptions,
    ) -> Result<Self, ConcordanceError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|err| ConcordanceError::read(path, err))?;
        let concordance = Self::from_reader(BufReader::new(file), stop_words, options)
            .map_err(|err| ConcordanceError::read(path, err))?;
        log::info!(
            "indexed {} words from {}",
            concordance.len(),
            path.display()
        );
        Ok(concordance)
    }

    /// Builds the concordance of the text read from `reader`, leaving out `stop_words`.
    pub fn from_reader(
        reader: impl BufRead,
        stop_words: &StopWords,
        options: &ConcordanceOptions,
    ) -> io::Result<Self> {
        let mut builder = ConcordanceBuilder::new(stop_words, options);
        for_each_line(reader, |line| builder.push_line(line))?;
        Ok(builder.finish())
    }

    /// Returns the line numbers of `word`, if it appears in the text.
    pub fn get(&self, word: &str) -> Option<&[usize]> {
        self.table.get(word)
    }
    /// Returns the number of distinct words.
    pub fn len(&self) -> usize {
        self.table.len()
    }
    /// Returns `true` if no words were recorded.
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
    /// Returns the table holding the concordance.
    pub fn table(&self) -> &QuadTable {
        &self.table
    }

    /// Returns all words with their line numbers, sorted by word.
    pub fn entries(&self) -> Vec<(&str, &[usize])> {
        let mut entries = Vec::from_iter(self.table.iter());
        entries.sort_unstable_by_key(|&(word, _)| word);
        entries
    }

    /// Writes the concordance to `writer`.
    ///
    /// See the [`Display`](fmt::Display) implementation for the format.
    pub fn write_to(&self, mut writer: impl Write) -> io::Result<()> {
        write!(writer, "{self}")
    }

    /// Writes the concordance to the file at `path`, replacing its contents.
    pub fn write_file(&self, path: impl AsRef<Path>) -> Result<(), ConcordanceError> {
        let path = path.as_ref();
        let mut writer = BufWriter::new(
            File::create(path).map_err(|err| ConcordanceError::io(path, err))?,
        );
        self.write_to(&mut writer)
            .and_then(|()| writer.flush())
            .map_err(|err| ConcordanceError::io(path, err))?;
        log::debug!("wrote {} entries to {}", self.len(), path.display());
        Ok(())
    }
}

/// Formats one line per word, `"<word>: <line> <line> ..."`, in sorted word order.
///
/// Lines are separated by `\n` and the last line has no line break.
impl fmt::Display for Concordance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (word, lines)) in self.entries().into_iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{word}:")?;
            for line in lines {
                write!(f, " {line}")?;
            }
        }
        Ok(())
    }
}

/// Builds a [`Concordance`] from lines of text fed in order.
pub struct ConcordanceBuilder<'a> {
    stop_words: &'a StopWords,
    table: QuadTable,
    line_number: usize,
    seen: hashbrown::HashSet<String, BuildHasherDefault<ZwoHasher>>,
}

impl<'a> ConcordanceBuilder<'a> {
    /// Returns a builder for an empty concordance that leaves out `stop_words`.
    pub fn new(stop_words: &'a StopWords, options: &ConcordanceOptions) -> Self {
        ConcordanceBuilder {
            stop_words,
            table: QuadTable::new(options.initial_capacity),
            line_number: 0,
            seen: Default::default(),
        }
    }

    /// Records the words of the next line.
    pub fn push_line(&mut self, line: &[u8]) {
        self.line_number += 1;
        self.seen.clear();
        for word in words(line) {
            if self.stop_words.contains(&word) || self.seen.contains(&word) {
                continue;
            }
            self.table.insert(&word, self.line_number);
            self.seen.insert(word);
        }
    }

    /// Returns the number of lines pushed so far.
    pub fn line_count(&self) -> usize {
        self.line_number
    }

    /// Finishes building.
    pub fn finish(self) -> Concordance {
        log::debug!(
            "{} words on {} lines, load factor {}",
            self.table.len(),
            self.line_number,
            self.table.load_factor()
        );
        Concordance { table: self.table }
    }
}
