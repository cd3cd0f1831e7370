//! Depth-bounded backward search with assume-and-discharge
//!
//! `prove(goal)` succeeds if the goal is a fact, is currently assumed, is the
//! consequent of a fact `(X => goal)` whose antecedent `X` is provable, or is
//! an implication `(P => Q)` such that `Q` is provable once `P` is assumed.
//!
//! The pool is never modified. Implications on the current exploration path
//! are flagged `visited` so the search cannot loop through them; flags and
//! assumptions are restored on every return path.

use crate::logic::Formula;
use crate::pool::Pool;
use indexmap::IndexSet;
use tracing::debug;

/// Default recursion bound
pub const DEFAULT_MAX_DEPTH: usize = 50;

/// Formulas assumed true on the current search path (stack discipline)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Assumptions {
    stack: IndexSet<Formula>,
}

impl Assumptions {
    pub fn new() -> Self {
        Assumptions::default()
    }

    pub fn contains(&self, formula: &Formula) -> bool {
        self.stack.contains(formula)
    }

    /// Push an assumption; returns false (and pushes nothing) if it is
    /// already assumed
    pub fn push(&mut self, formula: Formula) -> bool {
        self.stack.insert(formula)
    }

    /// Pop the most recent assumption
    pub fn pop(&mut self) -> Option<Formula> {
        self.stack.pop()
    }

    pub fn len(&self) -> usize {
        self.stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Formula> + '_ {
        self.stack.iter()
    }
}

/// Search counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BackwardStats {
    pub calls: usize,
    pub deepest: usize,
    pub depth_cutoffs: usize,
}

pub struct BackwardProver<'p> {
    pool: &'p Pool,
    assumptions: Assumptions,
    max_depth: usize,
    stats: BackwardStats,
}

impl<'p> BackwardProver<'p> {
    pub fn new(pool: &'p Pool, max_depth: usize) -> Self {
        BackwardProver {
            pool,
            assumptions: Assumptions::new(),
            max_depth,
            stats: BackwardStats::default(),
        }
    }

    /// Start from an existing set of assumptions
    pub fn with_assumptions(mut self, assumptions: Assumptions) -> Self {
        self.assumptions = assumptions;
        self
    }

    pub fn assumptions(&self) -> &Assumptions {
        &self.assumptions
    }

    pub fn stats(&self) -> BackwardStats {
        self.stats
    }

    pub fn prove(&mut self, goal: &Formula) -> bool {
        let proved = self.prove_at(goal, 0);
        debug!(
            %goal,
            proved,
            calls = self.stats.calls,
            deepest = self.stats.deepest,
            cutoffs = self.stats.depth_cutoffs,
            "backward search finished"
        );
        proved
    }

    fn prove_at(&mut self, goal: &Formula, depth: usize) -> bool {
        self.stats.calls += 1;
        self.stats.deepest = self.stats.deepest.max(depth);

        if depth > self.max_depth {
            self.stats.depth_cutoffs += 1;
            return false;
        }
        if self.pool.contains(goal) || self.assumptions.contains(goal) {
            return true;
        }

        let pool = self.pool;
        for &id in pool.facts_with_consequent(goal) {
            let fact = pool.fact(id);
            if fact.is_visited() {
                continue;
            }
            let antecedent = match fact.formula.as_implies() {
                Some((x, _)) => x,
                None => continue,
            };

            fact.set_visited(true);
            let proved = self.prove_at(antecedent, depth + 1);
            fact.set_visited(false);
            if proved {
                return true;
            }
        }

        if let Some((premise, conclusion)) = goal.as_implies() {
            if self.assumptions.contains(premise) {
                return self.prove_at(conclusion, depth + 1);
            }
            self.assumptions.push(premise.clone());
            let proved = self.prove_at(conclusion, depth + 1);
            self.assumptions.pop();
            return proved;
        }

        false
    }
}
