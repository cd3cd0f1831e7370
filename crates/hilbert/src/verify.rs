//! Independent check of a reconstructed history
//!
//! Re-derives every step from its recorded justification: axiom steps are
//! re-instantiated, modus ponens steps must cite earlier steps whose shapes
//! fit `(X => Y), X |- Y`.

use crate::inference::{substitute, Substitution};
use crate::pool::{Pool, Provenance};
use crate::trace::History;
use std::collections::HashSet;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VerificationError {
    #[error("step {step_idx}: fact {fact} is not an instance of its axiom template")]
    NotAnInstance { step_idx: usize, fact: usize },

    #[error("step {step_idx}: premise {premise} of fact {fact} does not appear earlier in the history")]
    PremiseNotBefore {
        step_idx: usize,
        fact: usize,
        premise: usize,
    },

    #[error("step {step_idx}: fact {fact} does not follow by modus ponens from its premises")]
    InvalidModusPonens { step_idx: usize, fact: usize },

    #[error("step {step_idx}: fact {fact} appears more than once")]
    Repeated { step_idx: usize, fact: usize },

    #[error("history is empty")]
    Empty,
}

/// Check every step of `history` against the facts in `pool`.
pub fn verify_history(pool: &Pool, history: &History) -> Result<(), VerificationError> {
    if history.is_empty() {
        return Err(VerificationError::Empty);
    }

    let mut seen = HashSet::new();
    for (step_idx, &id) in history.steps().iter().enumerate() {
        let fact = pool.fact(id);
        let fact_idx = id.as_usize();

        match &fact.provenance {
            Provenance::Axiom { template, bindings } => {
                let [a, b, c] = bindings.clone();
                match substitute(template, &Substitution::full(a, b, c)) {
                    Ok(instance) if instance == fact.formula => {}
                    _ => {
                        return Err(VerificationError::NotAnInstance {
                            step_idx,
                            fact: fact_idx,
                        })
                    }
                }
            }
            Provenance::ModusPonens {
                implication,
                antecedent,
            } => {
                for premise in [antecedent, implication] {
                    if !seen.contains(premise) || premise >= &id {
                        return Err(VerificationError::PremiseNotBefore {
                            step_idx,
                            fact: fact_idx,
                            premise: premise.as_usize(),
                        });
                    }
                }
                let fits = match pool.fact(*implication).formula.as_implies() {
                    Some((x, y)) => {
                        *x == pool.fact(*antecedent).formula && *y == fact.formula
                    }
                    None => false,
                };
                if !fits {
                    return Err(VerificationError::InvalidModusPonens {
                        step_idx,
                        fact: fact_idx,
                    });
                }
            }
            Provenance::Deduction => {}
        }

        if !seen.insert(id) {
            return Err(VerificationError::Repeated {
                step_idx,
                fact: fact_idx,
            });
        }
    }
    Ok(())
}
