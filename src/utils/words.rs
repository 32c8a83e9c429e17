//! Word extraction from text streams.
//!
//! A word is a run of ASCII letters and digits, lowercased. Apostrophes
//! inside a run are dropped without splitting it, so `don't` reads as
//! `dont`. Every other character separates words.

use std::io::{self, BufRead, Bytes, Read};

/// Longest word produced; longer runs continue as the next word.
pub const MAX_WORD_LEN: usize = 255;

/// Iterator over the words of a byte stream.
///
/// # Examples
///
/// ```
/// use mauka_wordfreq_lib::utils::words::WordReader;
///
/// let words: Vec<String> = WordReader::new("Don't PANIC, it's 42!".as_bytes())
///     .collect::<std::io::Result<_>>()
///     .unwrap();
/// assert_eq!(words, ["dont", "panic", "its", "42"]);
/// ```
#[derive(Debug)]
pub struct WordReader<R> {
    bytes: Bytes<R>,
    max_len: usize,
}

impl<R: BufRead> WordReader<R> {
    /// Creates a reader producing words of at most [`MAX_WORD_LEN`] characters.
    pub fn new(reader: R) -> Self {
        Self::with_max_len(reader, MAX_WORD_LEN)
    }

    /// Creates a reader producing words of at most `max_len` characters.
    pub fn with_max_len(reader: R, max_len: usize) -> Self {
        Self {
            bytes: reader.bytes(),
            max_len: max_len.max(1),
        }
    }

    fn read_word(&mut self) -> io::Result<Option<String>> {
        let mut word = String::new();

        // Skip to the start of the next word.
        loop {
            match self.bytes.next().transpose()? {
                None => return Ok(None),
                Some(b) if b.is_ascii_alphanumeric() => {
                    word.push(char::from(b.to_ascii_lowercase()));
                    break;
                }
                Some(_) => {}
            }
        }

        while word.len() < self.max_len {
            match self.bytes.next().transpose()? {
                Some(b) if b.is_ascii_alphanumeric() => {
                    word.push(char::from(b.to_ascii_lowercase()))
                }
                Some(b'\'') => {}
                _ => break,
            }
        }

        Ok(Some(word))
    }
}

impl<R: BufRead> Iterator for WordReader<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        self.read_word().transpose()
    }
}
