//! Word sources for the generator pool.
//!
//! The driver does not care where key names come from; it takes any
//! [`WordSource`]. Two suppliers exist: a newline-delimited dictionary
//! file, and random synthesis for hosts without one.

use rand::Rng;
use std::fs;
use std::io;
use std::path::PathBuf;
use tracing::debug;

/// Default system word list consulted before falling back to synthesis.
pub const SYSTEM_WORD_LIST: &str = "/usr/share/dict/words";

/// Length of synthesized words.
const SYNTHETIC_WORD_LEN: usize = 6;

const ASCII_LETTERS: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// A supplier of key names for generated transactions.
pub trait WordSource {
    /// Produce up to `count` words.
    fn words(&mut self, count: usize) -> io::Result<Vec<String>>;
}

/// Words read from the first lines of a newline-delimited file.
pub struct DictionaryWords {
    path: PathBuf,
}

impl DictionaryWords {
    /// The system dictionary at [`SYSTEM_WORD_LIST`].
    pub fn system() -> Self {
        Self::at(SYSTEM_WORD_LIST)
    }

    /// A dictionary at an arbitrary path.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl WordSource for DictionaryWords {
    fn words(&mut self, count: usize) -> io::Result<Vec<String>> {
        let contents = fs::read_to_string(&self.path)?;
        Ok(contents
            .lines()
            .take(count)
            .map(|line| line.trim().to_string())
            .collect())
    }
}

/// Randomly synthesized words of [`SYNTHETIC_WORD_LEN`] ASCII letters.
///
/// Words are not deduplicated: collisions are possible and accepted
/// for load-test data.
pub struct SyntheticWords<R: Rng = rand::rngs::ThreadRng> {
    rng: R,
}

impl SyntheticWords {
    /// Synthesize from the thread RNG.
    pub fn new() -> Self {
        Self {
            rng: rand::thread_rng(),
        }
    }
}

impl Default for SyntheticWords {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> SyntheticWords<R> {
    /// Synthesize from a caller-supplied RNG (seedable in tests).
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> WordSource for SyntheticWords<R> {
    fn words(&mut self, count: usize) -> io::Result<Vec<String>> {
        Ok((0..count).map(|_| synthesize(&mut self.rng)).collect())
    }
}

fn synthesize<R: Rng>(rng: &mut R) -> String {
    (0..SYNTHETIC_WORD_LEN)
        .map(|_| ASCII_LETTERS[rng.gen_range(0..ASCII_LETTERS.len())] as char)
        .collect()
}

/// Dictionary words when the file is readable, synthesized words
/// otherwise. The unreadable-dictionary case is the one recovered
/// failure in the whole generator.
pub struct FallbackWords {
    dictionary: DictionaryWords,
    synthetic: SyntheticWords,
}

impl FallbackWords {
    /// Fall back from the system dictionary.
    pub fn system() -> Self {
        Self::at(SYSTEM_WORD_LIST)
    }

    /// Fall back from a dictionary at an arbitrary path.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self {
            dictionary: DictionaryWords::at(path),
            synthetic: SyntheticWords::new(),
        }
    }
}

impl WordSource for FallbackWords {
    fn words(&mut self, count: usize) -> io::Result<Vec<String>> {
        match self.dictionary.words(count) {
            Ok(words) => Ok(words),
            Err(err) => {
                debug!(error = %err, "dictionary unavailable, synthesizing words");
                self.synthetic.words(count)
            }
        }
    }
}
