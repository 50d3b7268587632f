use std::collections::HashSet;
use std::io;
use std::path::MAIN_SEPARATOR;

use super::live::{DirectoryProbe, live_survivors};
use crate::error::LcdError;

/// Knobs for [`complete`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CompletionOptions {
    /// Complete an empty fragment to the last segment of every live entry.
    /// Off by default: an empty fragment completes to nothing.
    pub allow_empty_fragment: bool,
}

/// Completion candidate contributed by one entry, if any
///
/// The candidate starts right after the separator of the last `SEP + fragment`
/// occurrence and may not hold more separators than the fragment does.
fn candidate_for(path: &str, needle: &str, depth: usize) -> Option<String> {
    let start = path.rfind(needle)? + MAIN_SEPARATOR.len_utf8();
    let candidate = &path[start..];

    if candidate.is_empty() || candidate.matches(MAIN_SEPARATOR).count() > depth {
        return None;
    }
    Some(candidate.to_string())
}

/// Next-segment completions for a partial path fragment
///
/// Results are deduplicated and keep first-seen cache order. An empty result
/// is not an error; shell completion expects silence.
///
/// # Errors
///
/// Only [`LcdError::Io`] when the cache stream fails.
pub fn complete<I, P>(
    fragment: &str,
    entries: I,
    probe: &P,
    options: CompletionOptions,
) -> Result<Vec<String>, LcdError>
where
    I: IntoIterator<Item = io::Result<String>>,
    P: DirectoryProbe + ?Sized,
{
    if fragment.is_empty() && !options.allow_empty_fragment {
        return Ok(Vec::new());
    }

    let depth = fragment.matches(MAIN_SEPARATOR).count();
    let needle = format!("{MAIN_SEPARATOR}{fragment}");

    let mut seen = HashSet::new();
    let mut completions = Vec::new();
    for candidate in live_survivors(entries, probe, |path| candidate_for(path, &needle, depth)) {
        let candidate = candidate?;
        if seen.insert(candidate.clone()) {
            completions.push(candidate);
        }
    }

    Ok(completions)
}
