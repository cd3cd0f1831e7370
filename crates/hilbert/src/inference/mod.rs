//! Axiom instantiation
//!
//! Turns axiom templates into concrete facts by substituting candidate terms
//! for the meta-variables `A`, `B` and `C`.

pub mod instantiate;
pub mod substitution;

pub use instantiate::{instantiate, InstantiationReport};
pub use substitution::{substitute, MetaVariable, Substitution};
