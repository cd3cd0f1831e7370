//! Formula and axiom file parsing

pub mod axioms;
pub mod formula;

pub use axioms::{load_axioms, parse_axioms};
pub use formula::{parse_formula, parse_formula_with_limit, ParseLimits};
