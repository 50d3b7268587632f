use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use tracing::debug;

/// Lazy sequence of cache entries read from a newline-delimited path list
///
/// Streams one line at a time so memory stays proportional to the caller's
/// result set, not the cache size. Blank lines are skipped, `\r\n` endings are
/// accepted and lines that are not valid UTF-8 are decoded lossily.
pub struct CacheReader<R> {
    reader: R,
    buf: Vec<u8>,
}

impl<R: BufRead> CacheReader<R> {
    pub fn new(reader: R) -> Self {
        Self { reader, buf: Vec::new() }
    }
}

impl<R: BufRead> Iterator for CacheReader<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            self.buf.clear();
            match self.reader.read_until(b'\n', &mut self.buf) {
                Ok(0) => return None,
                Ok(_) => {}
                Err(e) => return Some(Err(e)),
            }

            let mut line = self.buf.as_slice();
            if let Some(rest) = line.strip_suffix(b"\n") {
                line = rest;
            }
            if let Some(rest) = line.strip_suffix(b"\r") {
                line = rest;
            }
            if line.is_empty() {
                continue;
            }

            return Some(Ok(String::from_utf8_lossy(line).into_owned()));
        }
    }
}

/// Open a cache file for streaming
pub fn open_cache(path: &Path) -> io::Result<CacheReader<BufReader<File>>> {
    let file = File::open(path)?;
    debug!(path = %path.display(), "opened cache");
    Ok(CacheReader::new(BufReader::new(file)))
}
