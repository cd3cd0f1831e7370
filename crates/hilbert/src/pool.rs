//! The fact store
//!
//! A deduplicating map from formula to proof record. Facts are appended and
//! never removed, so a fact's index (its insertion position) is stable for
//! the lifetime of the pool and doubles as its identifier.
//!
//! Besides the main map the pool keeps a consequent index: for every fact
//! `(X => Y)` it records the fact under `Y`. The backward prover uses it to
//! find the implications that conclude a given goal.

use crate::error::{ProverError, Result};
use crate::logic::Formula;
use indexmap::IndexMap;
use std::cell::Cell;
use std::collections::HashMap;
use std::fmt;

/// Position of a fact in the pool
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FactId(pub(crate) usize);

impl FactId {
    pub fn as_usize(self) -> usize {
        self.0
    }
}

impl fmt::Display for FactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// How a fact entered the pool
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Provenance {
    /// Instance of `template` with meta-variables `A`, `B`, `C` bound in order
    Axiom {
        template: Formula,
        bindings: [Formula; 3],
    },
    /// From `implication = (antecedent => this)` and `antecedent`
    ModusPonens {
        implication: FactId,
        antecedent: FactId,
    },
    /// Proved by the backward prover
    Deduction,
}

impl Provenance {
    pub fn rule_name(&self) -> &'static str {
        match self {
            Provenance::Axiom { .. } => "axiom",
            Provenance::ModusPonens { .. } => "modus_ponens",
            Provenance::Deduction => "deduction",
        }
    }

    /// Premise facts, antecedent first
    pub fn premises(&self) -> Vec<FactId> {
        match self {
            Provenance::ModusPonens {
                implication,
                antecedent,
            } => vec![*antecedent, *implication],
            _ => vec![],
        }
    }
}

/// A formula known to be derivable, with its justification
#[derive(Debug, Clone)]
pub struct Fact {
    pub formula: Formula,
    pub index: FactId,
    pub provenance: Provenance,
    printed: bool,
    visited: Cell<bool>,
}

impl Fact {
    /// Already emitted by the current history reconstruction
    pub fn is_printed(&self) -> bool {
        self.printed
    }

    /// Currently on the backward prover's exploration path
    pub fn is_visited(&self) -> bool {
        self.visited.get()
    }

    pub(crate) fn set_visited(&self, visited: bool) {
        self.visited.set(visited);
    }
}

/// Deduplicating, append-only fact store
#[derive(Debug, Clone, Default)]
pub struct Pool {
    facts: IndexMap<Formula, Fact>,
    by_consequent: HashMap<Formula, Vec<FactId>>,
    /// Maximum number of facts (0 means no limit)
    max_facts: usize,
}

impl Pool {
    pub fn new() -> Self {
        Self::with_limit(0)
    }

    /// Pool that refuses to grow beyond `max_facts` entries (0 means no limit)
    pub fn with_limit(max_facts: usize) -> Self {
        Pool {
            facts: IndexMap::new(),
            by_consequent: HashMap::new(),
            max_facts,
        }
    }

    pub fn len(&self) -> usize {
        self.facts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.facts.is_empty()
    }

    pub fn contains(&self, formula: &Formula) -> bool {
        self.facts.contains_key(formula)
    }

    pub fn get(&self, formula: &Formula) -> Option<&Fact> {
        self.facts.get(formula)
    }

    pub fn id_of(&self, formula: &Formula) -> Option<FactId> {
        self.facts.get_index_of(formula).map(FactId)
    }

    /// Look up a fact by id.
    ///
    /// # Panics
    /// If `id` was not issued by this pool.
    pub fn fact(&self, id: FactId) -> &Fact {
        &self.facts[id.0]
    }

    /// Insert a new fact.
    ///
    /// Returns `Ok(None)` without touching the pool if the formula is already
    /// present, and `CapacityExceeded` if the pool is full.
    pub fn insert(&mut self, formula: Formula, provenance: Provenance) -> Result<Option<FactId>> {
        if self.facts.contains_key(&formula) {
            return Ok(None);
        }
        if self.max_facts != 0 && self.facts.len() >= self.max_facts {
            return Err(ProverError::CapacityExceeded {
                limit: self.max_facts,
            });
        }

        let id = FactId(self.facts.len());
        if let Some((_, consequent)) = formula.as_implies() {
            self.by_consequent
                .entry(consequent.clone())
                .or_default()
                .push(id);
        }
        let fact = Fact {
            formula: formula.clone(),
            index: id,
            provenance,
            printed: false,
            visited: Cell::new(false),
        };
        self.facts.insert(formula, fact);
        Ok(Some(id))
    }

    /// Facts of the form `(X => consequent)`, in ascending index order
    pub fn facts_with_consequent(&self, consequent: &Formula) -> &[FactId] {
        self.by_consequent
            .get(consequent)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn iter(&self) -> impl Iterator<Item = &Fact> + '_ {
        self.facts.values()
    }

    /// Mark a fact printed; returns false if it already was
    pub(crate) fn mark_printed(&mut self, id: FactId) -> bool {
        let fact = &mut self.facts[id.0];
        !std::mem::replace(&mut fact.printed, true)
    }

    /// Start a new history reconstruction pass
    pub fn reset_printed(&mut self) {
        for fact in self.facts.values_mut() {
            fact.printed = false;
        }
    }

    /// True if any fact is still marked visited
    pub fn any_visited(&self) -> bool {
        self.facts.values().any(|f| f.is_visited())
    }
}
