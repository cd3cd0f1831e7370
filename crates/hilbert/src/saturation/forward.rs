//! Modus ponens saturation
//!
//! Each pass scans the facts that existed when the pass started. Pool
//! indices are append-only, so facts inserted during the pass never disturb
//! the scan; they are picked up by the next pass. Saturation stops at the
//! first pass that adds nothing, or as soon as the goal is inserted.

use crate::error::Result;
use crate::logic::Formula;
use crate::pool::{FactId, Pool, Provenance};
use tracing::{debug, info};

/// Configuration for the saturation loop
#[derive(Debug, Clone, Default)]
pub struct SaturationConfig {
    /// Maximum number of passes (0 means no limit)
    pub max_passes: usize,
}

/// Result of saturation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaturationResult {
    /// The goal is in the pool. `passes` is 0 if it was there before
    /// saturation started.
    GoalFound { fact: FactId, passes: usize },
    /// A full pass added no new fact
    Saturated { passes: usize },
    /// `max_passes` reached before a fixed point
    PassLimit { passes: usize },
}

impl SaturationResult {
    pub fn goal(&self) -> Option<FactId> {
        match self {
            SaturationResult::GoalFound { fact, .. } => Some(*fact),
            _ => None,
        }
    }

    pub fn passes(&self) -> usize {
        match self {
            SaturationResult::GoalFound { passes, .. }
            | SaturationResult::Saturated { passes }
            | SaturationResult::PassLimit { passes } => *passes,
        }
    }
}

/// Outcome of one pass
#[derive(Debug, Default)]
struct PassOutcome {
    added: usize,
    goal: Option<FactId>,
}

/// Saturate `pool` under modus ponens until a fixed point or `goal` appears.
pub fn saturate(pool: &mut Pool, goal: &Formula, config: &SaturationConfig) -> Result<SaturationResult> {
    if let Some(fact) = pool.id_of(goal) {
        info!(%goal, "goal already in pool");
        return Ok(SaturationResult::GoalFound { fact, passes: 0 });
    }

    let mut passes = 0;
    loop {
        if config.max_passes != 0 && passes >= config.max_passes {
            info!(passes, facts = pool.len(), "saturation pass limit reached");
            return Ok(SaturationResult::PassLimit { passes });
        }
        passes += 1;

        let outcome = run_pass(pool, goal)?;
        debug!(pass = passes, added = outcome.added, facts = pool.len(), "saturation pass");

        if let Some(fact) = outcome.goal {
            info!(passes, facts = pool.len(), %goal, "goal derived");
            return Ok(SaturationResult::GoalFound { fact, passes });
        }
        if outcome.added == 0 {
            info!(passes, facts = pool.len(), "saturated without reaching goal");
            return Ok(SaturationResult::Saturated { passes });
        }
    }
}

fn run_pass(pool: &mut Pool, goal: &Formula) -> Result<PassOutcome> {
    let mut outcome = PassOutcome::default();
    let end = pool.len();

    for i in 0..end {
        let implication = FactId(i);
        let (antecedent, consequent) = match pool.fact(implication).formula.as_implies() {
            Some((a, b)) => (a.clone(), b.clone()),
            None => continue,
        };
        if pool.contains(&consequent) {
            continue;
        }
        let antecedent = match pool.id_of(&antecedent) {
            Some(id) => id,
            None => continue,
        };

        let is_goal = consequent == *goal;
        let provenance = Provenance::ModusPonens {
            implication,
            antecedent,
        };
        if let Some(id) = pool.insert(consequent, provenance)? {
            outcome.added += 1;
            if is_goal {
                outcome.goal = Some(id);
                return Ok(outcome);
            }
        }
    }

    Ok(outcome)
}
