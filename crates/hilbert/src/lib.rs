//! Hilbert: a propositional prover for Hilbert-style axiom systems
//!
//! This library instantiates axiom schemas over the subformulas of a goal,
//! closes the resulting facts under modus ponens, and can fall back to a
//! depth-bounded backward search with a deduction rule. Every fact carries
//! its provenance so a derivation of the goal can be printed and checked.

pub mod config;
pub mod error;
pub mod inference;
pub mod json;
pub mod logic;
pub mod parser;
pub mod pool;
pub mod prover;
pub mod saturation;
pub mod trace;
pub mod verify;

pub use config::ProverConfig;
pub use error::{ParseError, ProverError, Result};

// Re-export commonly used types from logic
pub use logic::{build_terms, Formula, FormulaError, FormulaKind, TermUniverse};

pub use inference::{instantiate, substitute, InstantiationReport, MetaVariable, Substitution};

pub use parser::{load_axioms, parse_axioms, parse_formula, parse_formula_with_limit, ParseLimits};

pub use pool::{Fact, FactId, Pool, Provenance};

// Re-export saturation types
pub use saturation::{
    saturate, Assumptions, BackwardProver, BackwardStats, SaturationConfig, SaturationResult,
};

pub use json::{StepJson, TraceJson};
pub use prover::{ProofMethod, ProofOutcome, Prover};
pub use trace::History;
pub use verify::{verify_history, VerificationError};
