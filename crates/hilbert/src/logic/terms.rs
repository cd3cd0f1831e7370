//! Candidate substitution terms derived from the goal
//!
//! Every subformula of the goal becomes a term. Negations are never "flipped"
//! while descending through a `!` node: the operand of `!p` is `p`, and with
//! negated terms enabled both `p` and `!p` (and `!!p`) are admitted.

use super::formula::Formula;
use indexmap::IndexSet;

/// Insertion-ordered, duplicate-free set of candidate terms.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TermUniverse {
    terms: IndexSet<Formula>,
}

impl TermUniverse {
    pub fn new() -> Self {
        TermUniverse {
            terms: IndexSet::new(),
        }
    }

    /// Add a term; returns false if it was already present
    pub fn insert(&mut self, term: Formula) -> bool {
        self.terms.insert(term)
    }

    pub fn contains(&self, term: &Formula) -> bool {
        self.terms.contains(term)
    }

    pub fn get(&self, index: usize) -> Option<&Formula> {
        self.terms.get_index(index)
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Formula> + '_ {
        self.terms.iter()
    }
}

impl FromIterator<Formula> for TermUniverse {
    fn from_iter<I: IntoIterator<Item = Formula>>(iter: I) -> Self {
        TermUniverse {
            terms: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a TermUniverse {
    type Item = &'a Formula;
    type IntoIter = indexmap::set::Iter<'a, Formula>;

    fn into_iter(self) -> Self::IntoIter {
        self.terms.iter()
    }
}

/// Decompose `goal` into the term universe.
///
/// Subformulas are added in post-order. With `include_negations` a second
/// pass adds `!s` for every subformula `s`. With `include_self_implication`
/// the term `(goal => goal)` is added last.
pub fn build_terms(
    goal: &Formula,
    include_negations: bool,
    include_self_implication: bool,
) -> TermUniverse {
    let subformulas = goal.subformulas();
    let mut terms: TermUniverse = subformulas.iter().cloned().collect();

    if include_negations {
        for sub in subformulas {
            terms.insert(Formula::not(sub));
        }
    }

    if include_self_implication {
        terms.insert(Formula::implies(goal.clone(), goal.clone()));
    }

    terms
}
