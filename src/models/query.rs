/// How the result of a query is consumed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Resolve to one directory, falling back to a list when ambiguous
    Match,
    /// Print every survivor
    List,
    /// Print next-segment completions for a fragment
    Complete,
    /// Resolve ambiguous matches through the interactive menu
    Interactive,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    pub word: String,
    /// 1-based position among the survivors
    pub index: Option<usize>,
    pub mode: Mode,
}

impl Query {
    pub fn new(word: impl Into<String>, mode: Mode) -> Self {
        Self { word: word.into(), index: None, mode }
    }

    pub fn with_index(mut self, index: usize) -> Self {
        self.index = Some(index);
        self
    }
}
