/// A single whitespace-separated filter token
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterTerm {
    /// Candidate must contain the substring
    Include(String),
    /// Candidate must not contain the substring
    Exclude(String),
}

impl FilterTerm {
    pub fn matches(&self, candidate: &str) -> bool {
        match self {
            FilterTerm::Include(needle) => candidate.contains(needle.as_str()),
            FilterTerm::Exclude(needle) => !candidate.contains(needle.as_str()),
        }
    }
}

/// Conjunction of filter terms: a candidate survives only if every term holds
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterExpr {
    pub terms: Vec<FilterTerm>,
}

impl FilterExpr {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_term(&mut self, term: FilterTerm) {
        self.terms.push(term);
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}
