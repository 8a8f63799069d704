//! Splitting lines of text into words.
use std::{io, io::BufRead, slice};

/// Returns an iterator over the lower-cased words of `line`.
///
/// A word is a maximal run of ASCII letters. Apostrophes are skipped without ending a word, so
/// `"dog's"` yields `"dogs"`. Every other byte, including all bytes of non-ASCII characters, ends
/// the current word. The end of the line also ends a word.
pub fn words(line: &[u8]) -> Words<'_> {
    Words { bytes: line.iter() }
}

/// An iterator over the words of a line.
///
/// This struct is created by the [`words`] function.
#[derive(Clone, Debug)]
pub struct Words<'a> {
    bytes: slice::Iter<'a, u8>,
}

impl Iterator for Words<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let mut word = String::new();
        for &byte in self.bytes.by_ref() {
            if byte.is_ascii_alphabetic() {
                word.push(byte.to_ascii_lowercase() as char);
            } else if byte != b'\'' && !word.is_empty() {
                return Some(word);
            }
        }
        (!word.is_empty()).then_some(word)
    }
}

/// Calls `f` with every line of `reader` with its line break removed.
///
/// Lines end at `\n`, at `\r\n` or at a lone `\r`. A final line without a line break is passed
/// on as well. The bytes are passed on unchecked, so input that is not valid UTF-8 is not an
/// error.
pub(crate) fn for_each_line(
    mut reader: impl BufRead,
    mut f: impl FnMut(&[u8]),
) -> io::Result<()> {
    let mut line = Vec::new();
    let mut after_cr = false;
    loop {
        let buf = reader.fill_buf()?;
        if buf.is_empty() {
            if !line.is_empty() {
                f(&line);
            }
            return Ok(());
        }

        let start = usize::from(after_cr && buf[0] == b'\n');
        let rest = &buf[start..];
        match rest.iter().position(|&byte| byte == b'\n' || byte == b'\r') {
            Some(end) => {
                line.extend_from_slice(&rest[..end]);
                after_cr = rest[end] == b'\r';
                reader.consume(start + end + 1);
                f(&line);
                line.clear();
            }
            None => {
                line.extend_from_slice(rest);
                after_cr = false;
                let len = buf.len();
                reader.consume(len);
            }
        }
    }
}
