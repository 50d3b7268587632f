//! Menu filter parser.
//!
//! The menu query is split on whitespace and every token becomes one
//! [`FilterTerm`]:
//!
//! ```text
//! src       keep candidates containing "src"
//! !vendor   drop candidates containing "vendor"
//! !!bang    keep candidates containing "!bang"
//! ```
//!
//! A lone `!` is an unfinished negation (the user is still typing) and is
//! ignored, otherwise it would exclude every candidate.
//!
//! ```rust
//! # use lcd::filters::{FilterTerm, parse_filter};
//! let expr = parse_filter("go !vendor");
//! assert_eq!(
//!     expr.terms,
//!     vec![FilterTerm::Include("go".into()), FilterTerm::Exclude("vendor".into())]
//! );
//! ```

use super::ast::{FilterExpr, FilterTerm};

fn parse_token(token: &str) -> Option<FilterTerm> {
    match token.strip_prefix('!') {
        Some("") => None,
        Some(literal) if literal.starts_with('!') => Some(FilterTerm::Include(literal.to_string())),
        Some(negated) => Some(FilterTerm::Exclude(negated.to_string())),
        None => Some(FilterTerm::Include(token.to_string())),
    }
}

/// Parse menu input into a filter expression; never fails
pub fn parse_filter(input: &str) -> FilterExpr {
    let mut expr = FilterExpr::new();
    for term in input.split_whitespace().filter_map(parse_token) {
        expr.add_term(term);
    }
    expr
}
