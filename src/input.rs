//! Line-oriented numeric input
//!
//! Values for a bulk load come from any [`BufRead`] source: a data file or an
//! interactive stream. Integers are separated by arbitrary whitespace,
//! including newlines. Reading stops at the first token that is not an
//! integer, the same way formatted stream extraction stops.

use std::collections::VecDeque;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors produced while reading numeric input
#[derive(Debug, Error)]
pub enum InputError {
    /// The input file could not be opened
    #[error("cannot open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// Reading from the underlying source failed
    #[error("read failed: {0}")]
    Io(#[from] io::Error),
}

/// Whitespace-separated tokens pulled lazily from a reader
#[derive(Debug)]
pub struct Tokens<R> {
    reader: R,
    pending: VecDeque<String>,
    line: usize,
}

impl<R: BufRead> Tokens<R> {
    /// Wraps `reader`; nothing is read until the first token is requested
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
            line: 0,
        }
    }

    /// Number of lines consumed so far
    pub fn line(&self) -> usize {
        self.line
    }

    /// Returns the next token, reading more lines as needed.
    /// `Ok(None)` means the input is exhausted.
    pub fn next_token(&mut self) -> io::Result<Option<String>> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }
            let mut buf = String::new();
            if self.reader.read_line(&mut buf)? == 0 {
                return Ok(None);
            }
            self.line += 1;
            self.pending.extend(buf.split_whitespace().map(str::to_owned));
        }
    }

    /// Returns the next token parsed as an integer.
    ///
    /// `Ok(Err(token))` hands back a token that is not an integer.
    pub fn next_integer(&mut self) -> io::Result<Option<Result<i64, String>>> {
        Ok(self
            .next_token()?
            .map(|token| token.parse::<i64>().map_err(|_| token)))
    }
}

/// Reads integers from `reader` into a FIFO queue, in input order
pub fn read_values<R: BufRead>(reader: R) -> Result<VecDeque<i64>, InputError> {
    let mut tokens = Tokens::new(reader);
    let mut values = VecDeque::new();
    while let Some(parsed) = tokens.next_integer()? {
        match parsed {
            Ok(value) => values.push_back(value),
            Err(token) => {
                tracing::warn!(
                    line = tokens.line(),
                    %token,
                    read = values.len(),
                    "stopped reading at non-integer token"
                );
                break;
            }
        }
    }
    tracing::debug!(count = values.len(), "read values");
    Ok(values)
}

/// Opens `path` and reads its integers
pub fn read_values_from_path(path: impl AsRef<Path>) -> Result<VecDeque<i64>, InputError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| InputError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    read_values(BufReader::new(file))
}
