/// Survivors of a match, in cache order
///
/// Only the matcher builds one and it never builds an empty one: zero
/// survivors is reported as [`crate::LcdError::NotFound`] instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchSet {
    word: String,
    entries: Vec<String>,
}

impl MatchSet {
    pub(crate) fn new(word: impl Into<String>, entries: Vec<String>) -> Self {
        debug_assert!(!entries.is_empty());
        Self { word: word.into(), entries }
    }

    /// The normalized word that produced this set
    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// The default candidate (first in cache order)
    pub fn first(&self) -> &str {
        &self.entries[0]
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_ambiguous(&self) -> bool {
        self.entries.len() > 1
    }

    pub fn into_entries(self) -> Vec<String> {
        self.entries
    }
}

/// What a query resolved to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// Exactly one directory: the shell integration changes into it
    Single(String),
    /// Several directories printed for the caller to disambiguate
    Ambiguous(Vec<String>),
}

impl Selection {
    /// Lines to print on stdout
    pub fn lines(&self) -> &[String] {
        match self {
            Selection::Single(path) => std::slice::from_ref(path),
            Selection::Ambiguous(paths) => paths,
        }
    }
}
