//! Prover configuration types.

use crate::logic::{MAX_ATOM_LEN, MAX_FORMULA_DEPTH};
use crate::parser::ParseLimits;
use crate::saturation::{SaturationConfig, DEFAULT_MAX_DEPTH};

/// Configuration for a proof attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProverConfig {
    /// Print every admitted axiom instance
    pub print_axioms: bool,
    /// Print the derivation of the goal once proved
    pub print_history: bool,
    /// Add the negation of every goal subformula to the term universe
    pub negated_terms: bool,
    /// Add `(goal => goal)` to the term universe
    pub self_implication: bool,
    /// Fall back to backward search when saturation misses the goal
    pub backward_search: bool,
    /// Print the derivation as JSON
    pub json: bool,
    /// Recursion bound for backward search
    pub max_depth: usize,
    /// Saturation pass cap (0 means no limit)
    pub max_passes: usize,
    /// Fact store capacity (0 means no limit)
    pub max_facts: usize,
    /// Longest accepted atom name
    pub max_atom_len: usize,
    /// Deepest accepted nesting of a goal or axiom template
    pub max_formula_depth: usize,
}

impl Default for ProverConfig {
    fn default() -> Self {
        ProverConfig {
            print_axioms: false,
            print_history: true,
            negated_terms: false,
            self_implication: false,
            backward_search: false,
            json: false,
            max_depth: DEFAULT_MAX_DEPTH,
            max_passes: 0, // 0 means no limit
            max_facts: 0,  // 0 means no limit
            max_atom_len: MAX_ATOM_LEN,
            max_formula_depth: MAX_FORMULA_DEPTH,
        }
    }
}

impl ProverConfig {
    /// Apply a `+name` / `-name` toggle. Returns false for anything that is
    /// not a known toggle.
    pub fn apply_toggle(&mut self, toggle: &str) -> bool {
        let (value, name) = if let Some(name) = toggle.strip_prefix('+') {
            (true, name)
        } else if let Some(name) = toggle.strip_prefix('-') {
            (false, name)
        } else {
            return false;
        };
        let flag = match name {
            "axioms" => &mut self.print_axioms,
            "history" => &mut self.print_history,
            "neg" => &mut self.negated_terms,
            "self_impl" => &mut self.self_implication,
            "backward" => &mut self.backward_search,
            "json" => &mut self.json,
            _ => return false,
        };
        *flag = value;
        true
    }

    /// Limits for parsing goals and axiom templates
    pub fn parse_limits(&self) -> ParseLimits {
        ParseLimits {
            max_atom_len: self.max_atom_len,
            max_depth: self.max_formula_depth,
        }
    }

    pub fn saturation(&self) -> SaturationConfig {
        SaturationConfig {
            max_passes: self.max_passes,
        }
    }
}
