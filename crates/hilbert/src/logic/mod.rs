//! Propositional logic data structures
//!
//! Formulas over implication and negation, and the term universe built
//! from a goal.

pub mod formula;
pub mod terms;


pub use formula::{
    Formula, FormulaError, FormulaKind, MAX_ATOM_LEN, MAX_FORMULA_DEPTH, META_VARIABLE_NAMES,
};
pub use terms::{build_terms, TermUniverse};
