//! Line-oriented file access shared by counters and replacers.
//!
//! Files are read as a sequence of lines ended by `\n`, `\r\n` or a lone
//! `\r`. Bytes that are not valid UTF-8 are replaced with U+FFFD rather
//! than failing the read.

use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind};
use std::path::Path;

use crate::error::{Result, SrcAnaError};

/// Iterator over the lines of a buffered reader, without terminators.
pub struct Lines<R> {
    reader: R,
    buf: Vec<u8>,
    /// The previous line ended with `\r`; a `\n` right after it belongs to
    /// the same terminator.
    after_cr: bool,
}

impl<R: BufRead> Iterator for Lines<R> {
    type Item = std::io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        self.buf.clear();
        let mut partial = false;
        loop {
            let available = match self.reader.fill_buf() {
                Ok(available) => available,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Some(Err(e)),
            };
            if available.is_empty() {
                return partial.then(|| Ok(self.decode()));
            }
            if self.after_cr {
                self.after_cr = false;
                if available[0] == b'\n' {
                    self.reader.consume(1);
                    continue;
                }
            }
            match available.iter().position(|&b| b == b'\n' || b == b'\r') {
                Some(end) => {
                    self.buf.extend_from_slice(&available[..end]);
                    self.after_cr = available[end] == b'\r';
                    self.reader.consume(end + 1);
                    return Some(Ok(self.decode()));
                }
                None => {
                    let len = available.len();
                    self.buf.extend_from_slice(available);
                    self.reader.consume(len);
                    partial = true;
                }
            }
        }
    }
}

impl<R> Lines<R> {
    fn decode(&self) -> String {
        String::from_utf8_lossy(&self.buf).into_owned()
    }
}

/// Split a buffered reader into lines.
pub const fn lines<R: BufRead>(reader: R) -> Lines<R> {
    Lines {
        reader,
        buf: Vec::new(),
        after_cr: false,
    }
}

/// Join every line of `reader` into one text, each line followed by `\n`.
///
/// The last line always gets a newline, even when the input had none.
///
/// # Errors
/// Returns an I/O error if reading fails.
pub fn normalize<R: BufRead>(reader: R) -> std::io::Result<String> {
    let mut text = String::new();
    for line in lines(reader) {
        text.push_str(&line?);
        text.push('\n');
    }
    Ok(text)
}

/// Read a whole file as normalized text (see [`normalize`]).
///
/// # Errors
/// Returns [`SrcAnaError::FileRead`] if the file cannot be opened or read.
pub fn read_normalized(path: &Path) -> Result<String> {
    let to_error = |source: std::io::Error| SrcAnaError::FileRead {
        path: path.to_path_buf(),
        source,
    };
    let file = File::open(path).map_err(to_error)?;
    normalize(BufReader::new(file)).map_err(to_error)
}

/// Replace the entire content of `path` with `text`.
///
/// # Errors
/// Returns [`SrcAnaError::FileWrite`] if the file cannot be written.
pub fn write_text(path: &Path, text: &str) -> Result<()> {
    std::fs::write(path, text).map_err(|source| SrcAnaError::FileWrite {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
