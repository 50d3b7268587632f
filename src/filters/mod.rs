pub mod apply;
pub mod ast;
pub mod parser;

pub use apply::{apply_filter, evaluate_filter, matches_input};
pub use ast::{FilterExpr, FilterTerm};
pub use parser::parse_filter;
