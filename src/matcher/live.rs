use std::fs;
use std::io;
use std::path::MAIN_SEPARATOR;

use tracing::debug;

/// Answers whether a path currently names an existing directory
///
/// The filesystem implementation is [`FsProbe`]. Any `Fn(&str) -> bool` is a
/// probe too, which is how tests describe a filesystem without touching disk.
pub trait DirectoryProbe {
    fn is_directory(&self, path: &str) -> bool;
}

/// Probe backed by a fresh `stat` of the host filesystem
#[derive(Debug, Clone, Copy, Default)]
pub struct FsProbe;

impl DirectoryProbe for FsProbe {
    fn is_directory(&self, path: &str) -> bool {
        fs::metadata(path).map(|m| m.is_dir()).unwrap_or(false)
    }
}

impl<F> DirectoryProbe for F
where
    F: Fn(&str) -> bool,
{
    fn is_directory(&self, path: &str) -> bool {
        self(path)
    }
}

/// Strip a single trailing separator, leaving a bare root untouched
pub fn strip_trailing_separator(path: &str) -> &str {
    match path.strip_suffix(MAIN_SEPARATOR) {
        Some(stripped) if !stripped.is_empty() => stripped,
        _ => path,
    }
}

/// Pattern-then-stat filter shared by every matching and completion site
///
/// Each entry has its trailing separator stripped and is passed to `select`.
/// When `select` yields a value, the stripped entry is checked with `probe` and
/// the value is emitted only if the entry is still a directory. Stale entries
/// are skipped without error. Stream errors pass through unchanged.
pub fn live_survivors<I, P, F, T>(
    entries: I,
    probe: &P,
    mut select: F,
) -> impl Iterator<Item = io::Result<T>>
where
    I: IntoIterator<Item = io::Result<String>>,
    P: DirectoryProbe + ?Sized,
    F: FnMut(&str) -> Option<T>,
{
    entries.into_iter().filter_map(move |entry| {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => return Some(Err(e)),
        };
        let path = strip_trailing_separator(&entry);
        let candidate = select(path)?;
        if probe.is_directory(path) {
            Some(Ok(candidate))
        } else {
            debug!(path, "skipping stale cache entry");
            None
        }
    })
}
