//! Meta-variable substitutions for axiom templates

use crate::error::{ProverError, Result};
use crate::logic::{Formula, FormulaKind};

/// One of the reserved template atoms
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum MetaVariable {
    A,
    B,
    C,
}

impl MetaVariable {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "A" => Some(MetaVariable::A),
            "B" => Some(MetaVariable::B),
            "C" => Some(MetaVariable::C),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            MetaVariable::A => "A",
            MetaVariable::B => "B",
            MetaVariable::C => "C",
        }
    }

    fn slot(self) -> usize {
        self as usize
    }
}

/// A (possibly partial) binding of `A`, `B`, `C` to terms
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Substitution {
    bindings: [Option<Formula>; 3],
}

impl Substitution {
    /// Create a new empty substitution
    pub fn new() -> Self {
        Substitution::default()
    }

    /// Substitution binding all three meta-variables
    pub fn full(a: Formula, b: Formula, c: Formula) -> Self {
        Substitution {
            bindings: [Some(a), Some(b), Some(c)],
        }
    }

    pub fn insert(&mut self, var: MetaVariable, term: Formula) {
        self.bindings[var.slot()] = Some(term);
    }

    pub fn get(&self, var: MetaVariable) -> Option<&Formula> {
        self.bindings[var.slot()].as_ref()
    }

    /// Apply to a template. Atoms other than `A`, `B`, `C` are kept as-is.
    pub fn apply(&self, template: &Formula) -> Result<Formula> {
        match template.kind() {
            FormulaKind::Atom(name) => match MetaVariable::from_name(name) {
                Some(var) => self.get(var).cloned().ok_or_else(|| {
                    ProverError::UnboundMetaVariable {
                        name: var.name().to_string(),
                    }
                }),
                None => Ok(template.clone()),
            },
            FormulaKind::Not(inner) => Ok(Formula::not(self.apply(inner)?)),
            FormulaKind::Implies(left, right) => {
                Ok(Formula::implies(self.apply(left)?, self.apply(right)?))
            }
        }
    }
}

/// Instantiate `template` under `subst`
pub fn substitute(template: &Formula, subst: &Substitution) -> Result<Formula> {
    subst.apply(template)
}
