//! Streaming line reader that yields split rows.

use std::collections::VecDeque;
use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind};
use std::path::{Path, PathBuf};

use rowparse_model::RawRow;

use crate::error::{IngestError, Result};

/// Field delimiter. Not configurable.
pub const DELIMITER: char = ',';

const BOM: char = '\u{feff}';

/// Splits a line on commas and trims every field.
///
/// Quotes are not interpreted: `"a, b"` yields two fields.
pub fn split_line(line: &str) -> RawRow {
    line.split(DELIMITER)
        .map(|field| field.trim().to_string())
        .collect()
}

/// Iterator over the rows of a line-oriented source.
///
/// Lines may end in `\n`, `\r\n` or a lone `\r`. Bytes that are not valid
/// UTF-8 are replaced with U+FFFD. The reader owns its source, so the file
/// handle is released when the reader is dropped.
pub struct RowReader<R> {
    reader: R,
    buf: Vec<u8>,
    pending: VecDeque<String>,
    source: PathBuf,
    line_number: usize,
}

impl RowReader<BufReader<File>> {
    /// Opens `path` for sequential reading.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| IngestError::io(path.to_path_buf(), e))?;
        tracing::debug!(path = %path.display(), "opened file for row parsing");
        Ok(Self::new(BufReader::new(file), path))
    }
}

impl<R: BufRead> RowReader<R> {
    /// Wraps any buffered reader. `source` names it in errors.
    pub fn new(reader: R, source: impl Into<PathBuf>) -> Self {
        Self {
            reader,
            buf: Vec::new(),
            pending: VecDeque::new(),
            source: source.into(),
            line_number: 0,
        }
    }

    /// 1-based number of the last line yielded, 0 before the first.
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    fn next_line(&mut self) -> Option<std::io::Result<String>> {
        loop {
            if let Some(line) = self.pending.pop_front() {
                return Some(Ok(line));
            }

            self.buf.clear();
            match self.reader.read_until(b'\n', &mut self.buf) {
                Ok(0) => return None,
                Ok(_) => {}
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Some(Err(e)),
            }

            // One chunk ends at `\n` or EOF and may hold lone `\r` breaks.
            let mut chunk = self.buf.as_slice();
            if let Some(rest) = chunk.strip_suffix(b"\n") {
                chunk = rest;
            }
            if let Some(rest) = chunk.strip_suffix(b"\r") {
                chunk = rest;
            }
            self.pending.extend(
                chunk
                    .split(|&byte| byte == b'\r')
                    .map(|line| String::from_utf8_lossy(line).into_owned()),
            );
        }
    }
}

impl<R: BufRead> Iterator for RowReader<R> {
    type Item = Result<RawRow>;

    fn next(&mut self) -> Option<Self::Item> {
        let line = match self.next_line()? {
            Ok(line) => line,
            Err(e) => return Some(Err(IngestError::io(self.source.clone(), e))),
        };
        self.line_number += 1;

        let text = if self.line_number == 1 {
            line.strip_prefix(BOM).unwrap_or(&line)
        } else {
            &line
        };
        Some(Ok(split_line(text)))
    }
}
