use super::ast::FilterExpr;
use super::parser::parse_filter;

/// Whether `candidate` satisfies every term of `filter`
///
/// An empty filter keeps everything.
pub fn evaluate_filter(candidate: &str, filter: &FilterExpr) -> bool {
    filter.terms.iter().all(|term| term.matches(candidate))
}

/// Indices of the candidates surviving `filter`, in their original order
pub fn apply_filter<S: AsRef<str>>(candidates: &[S], filter: &FilterExpr) -> Vec<usize> {
    candidates
        .iter()
        .enumerate()
        .filter(|(_, candidate)| evaluate_filter(candidate.as_ref(), filter))
        .map(|(idx, _)| idx)
        .collect()
}

/// Parse raw menu input and test one candidate against it
///
/// This is the default [`crate::selector::FilterPredicate`].
pub fn matches_input(input: &str, candidate: &str) -> bool {
    evaluate_filter(candidate, &parse_filter(input))
}
