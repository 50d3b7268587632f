use std::io;
use std::path::MAIN_SEPARATOR;

use super::live::{DirectoryProbe, live_survivors, strip_trailing_separator};
use crate::error::LcdError;
use crate::models::MatchSet;

/// Segment-aligned suffix predicate for a normalized word
///
/// An empty word accepts everything; otherwise the entry must end with
/// `SEP + word`, so `c` matches `/a/b/c` but not `/a/b/cmd` or `/a/bc`.
fn suffix_predicate(word: &str) -> impl Fn(&str) -> bool {
    let suffix = if word.is_empty() { String::new() } else { format!("{MAIN_SEPARATOR}{word}") };
    move |path: &str| path.ends_with(&suffix)
}

/// Iterator over the live entries matching `word`
fn matching_entries<I, P>(
    word: &str,
    entries: I,
    probe: &P,
) -> impl Iterator<Item = io::Result<String>>
where
    I: IntoIterator<Item = io::Result<String>>,
    P: DirectoryProbe + ?Sized,
{
    let matches = suffix_predicate(word);
    live_survivors(entries, probe, move |path| matches(path).then(|| path.to_string()))
}

/// Collect every live cache entry whose trailing segments equal `word`
///
/// `word` loses a single trailing separator before matching, so `lcd/` and
/// `lcd` are the same query. Entries are returned without their trailing
/// separator, in cache order.
///
/// # Errors
///
/// - [`LcdError::NotFound`] when nothing survives
/// - [`LcdError::Io`] when the cache stream fails
pub fn match_word<I, P>(word: &str, entries: I, probe: &P) -> Result<MatchSet, LcdError>
where
    I: IntoIterator<Item = io::Result<String>>,
    P: DirectoryProbe + ?Sized,
{
    let word = strip_trailing_separator(word);
    let survivors = matching_entries(word, entries, probe).collect::<io::Result<Vec<_>>>()?;

    if survivors.is_empty() {
        return Err(LcdError::not_found(word));
    }
    Ok(MatchSet::new(word, survivors))
}

/// Return the `index`-th (1-based) survivor of [`match_word`]
///
/// Scanning stops as soon as the requested survivor is found.
///
/// # Errors
///
/// - [`LcdError::NotFound`] without a position when nothing survives at all
/// - [`LcdError::NotFound`] with `position: Some(index)` when fewer than
///   `index` entries survive (`index == 0` always lands here)
pub fn match_at<I, P>(word: &str, index: usize, entries: I, probe: &P) -> Result<String, LcdError>
where
    I: IntoIterator<Item = io::Result<String>>,
    P: DirectoryProbe + ?Sized,
{
    let word = strip_trailing_separator(word);
    let mut seen = 0;

    for survivor in matching_entries(word, entries, probe) {
        let survivor = survivor?;
        seen += 1;
        if seen == index {
            return Ok(survivor);
        }
    }

    if seen == 0 {
        Err(LcdError::not_found(word))
    } else {
        Err(LcdError::not_found_at(word, index))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn sep(path: &str) -> String {
        path.replace('/', &MAIN_SEPARATOR.to_string())
    }

    fn cache(paths: &[&str]) -> Vec<io::Result<String>> {
        paths.iter().map(|p| Ok(sep(p))).collect()
    }

    /// Probe that treats the given paths as the only existing directories
    fn live_dirs(paths: &[&str]) -> impl Fn(&str) -> bool + use<> {
        let live: HashSet<String> = paths.iter().map(|p| sep(p)).collect();
        move |p: &str| live.contains(p)
    }

    #[test]
    fn test_match_is_segment_aligned() {
        let probe = live_dirs(&["/a/b/c", "/a/b/c/cmd"]);
        let set = match_word("c", cache(&["/a/b/c", "/a/b/c/cmd"]), &probe).unwrap();
        assert_eq!(set.entries(), [sep("/a/b/c")]);
    }

    #[test]
    fn test_match_does_not_match_partial_segment() {
        let probe = live_dirs(&["/src/abc"]);
        let result = match_word("bc", cache(&["/src/abc"]), &probe);
        assert!(matches!(result, Err(LcdError::NotFound { position: None, .. })));
    }

    #[test]
    fn test_match_skips_stale_entries() {
        let probe = live_dirs(&["/x/glpk"]);
        let set = match_word("glpk", cache(&["/x/glpk", "/y/glpk"]), &probe).unwrap();
        assert_eq!(set.entries(), [sep("/x/glpk")]);
    }

    #[test]
    fn test_match_strips_trailing_separators() {
        let probe = live_dirs(&["/home/user/lukpank"]);
        let set = match_word(&sep("lukpank/"), cache(&["/home/user/lukpank/"]), &probe).unwrap();
        assert_eq!(set.word(), "lukpank");
        assert_eq!(set.first(), sep("/home/user/lukpank"));
    }

    #[test]
    fn test_match_multi_segment_word() {
        let probe = live_dirs(&["/go/lcd/cmd/lcd", "/go/lcd"]);
        let set =
            match_word(&sep("cmd/lcd"), cache(&["/go/lcd", "/go/lcd/cmd/lcd"]), &probe).unwrap();
        assert_eq!(set.entries(), [sep("/go/lcd/cmd/lcd")]);
    }

    #[test]
    fn test_match_preserves_cache_order() {
        let probe = live_dirs(&["/z/lcd", "/a/lcd", "/m/lcd"]);
        let set = match_word("lcd", cache(&["/z/lcd", "/a/lcd", "/m/lcd"]), &probe).unwrap();
        assert_eq!(set.entries(), [sep("/z/lcd"), sep("/a/lcd"), sep("/m/lcd")]);
        assert_eq!(set.first(), sep("/z/lcd"));
    }

    #[test]
    fn test_match_empty_word_lists_live_directories() {
        let probe = live_dirs(&["/a", "/a/b"]);
        let set = match_word("", cache(&["/a", "/gone", "/a/b/"]), &probe).unwrap();
        assert_eq!(set.entries(), [sep("/a"), sep("/a/b")]);
    }

    #[test]
    fn test_match_not_found_when_everything_is_stale() {
        let probe = live_dirs(&[]);
        let err = match_word("glpk", cache(&["/y/glpk"]), &probe).unwrap_err();
        assert_eq!(err.to_string(), "no directory matching 'glpk'");
    }

    #[test]
    fn test_match_propagates_io_errors() {
        let entries = vec![Ok(sep("/a/lcd")), Err(io::Error::other("disk gone"))];
        let result = match_word("lcd", entries, &live_dirs(&["/a/lcd"]));
        assert!(matches!(result, Err(LcdError::Io(_))));
    }

    #[test]
    fn test_match_is_idempotent() {
        let probe = live_dirs(&["/a/lcd", "/b/lcd"]);
        let paths = ["/a/lcd", "/b/lcd", "/c/lcd"];
        let first = match_word("lcd", cache(&paths), &probe).unwrap();
        let second = match_word("lcd", cache(&paths), &probe).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_match_at_picks_nth_survivor() {
        let probe = live_dirs(&["/go/lcd", "/go/lcd/cmd/lcd"]);
        let paths = ["/go/lcd", "/stale/lcd", "/go/lcd/cmd/lcd"];

        assert_eq!(match_at("lcd", 1, cache(&paths), &probe).unwrap(), sep("/go/lcd"));
        assert_eq!(match_at("lcd", 2, cache(&paths), &probe).unwrap(), sep("/go/lcd/cmd/lcd"));
    }

    #[test]
    fn test_match_at_agrees_with_match_word() {
        let probe = live_dirs(&["/1/x", "/2/x", "/3/x"]);
        let paths = ["/1/x", "/0/x", "/2/x", "/3/x"];
        let all = match_word("x", cache(&paths), &probe).unwrap();

        for (i, expected) in all.entries().iter().enumerate() {
            assert_eq!(&match_at("x", i + 1, cache(&paths), &probe).unwrap(), expected);
        }
    }

    #[test]
    fn test_match_at_out_of_range_is_distinct() {
        let probe = live_dirs(&["/go/lcd", "/go/lcd/cmd/lcd"]);
        let paths = ["/go/lcd", "/go/lcd/cmd/lcd"];

        let out_of_range = match_at("lcd", 3, cache(&paths), &probe).unwrap_err();
        let missing = match_at("zzz", 1, cache(&paths), &probe).unwrap_err();

        assert!(matches!(out_of_range, LcdError::NotFound { position: Some(3), .. }));
        assert!(matches!(missing, LcdError::NotFound { position: None, .. }));
        assert_ne!(out_of_range.to_string(), missing.to_string());
    }

    #[test]
    fn test_match_at_zero_never_succeeds() {
        let probe = live_dirs(&["/go/lcd"]);
        let err = match_at("lcd", 0, cache(&["/go/lcd"]), &probe).unwrap_err();
        assert!(matches!(err, LcdError::NotFound { position: Some(0), .. }));
    }

    #[test]
    fn test_match_at_stops_scanning_after_hit() {
        let probe = live_dirs(&["/a/lcd"]);
        // The error after the hit is never reached
        let entries = vec![Ok(sep("/a/lcd")), Err(io::Error::other("unreachable"))];
        assert_eq!(match_at("lcd", 1, entries, &probe).unwrap(), sep("/a/lcd"));
    }
}
