//! Proof pipeline: terms, instantiation, saturation, backward search, history.
//!
//! The `Prover` owns the goal, its term universe and the fact store for one
//! proof attempt. Output meant for the user (term list, instantiation trace,
//! derivation) goes to the writer passed to each call; diagnostics go through
//! `tracing`.

use crate::config::ProverConfig;
use crate::error::Result;
use crate::inference::{instantiate, InstantiationReport};
use crate::json::TraceJson;
use crate::logic::{build_terms, Formula, TermUniverse};
use crate::pool::{FactId, Pool, Provenance};
use crate::saturation::{saturate, BackwardProver, SaturationResult};
use crate::trace::{write_axiom_step, History};
use std::io::Write;
use tracing::{debug, info};

/// Which strategy established the goal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProofMethod {
    /// The goal is in the pool after instantiation and saturation
    Forward,
    /// Backward search succeeded and the goal was added as a deduction
    Backward,
}

/// Result of a proof attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProofOutcome {
    Proved { fact: FactId, method: ProofMethod },
    Unproved,
}

impl ProofOutcome {
    pub fn is_proved(&self) -> bool {
        matches!(self, ProofOutcome::Proved { .. })
    }

    pub fn fact(&self) -> Option<FactId> {
        match self {
            ProofOutcome::Proved { fact, .. } => Some(*fact),
            ProofOutcome::Unproved => None,
        }
    }
}

pub struct Prover {
    goal: Formula,
    config: ProverConfig,
    terms: TermUniverse,
    pool: Pool,
    history: Option<History>,
}

impl Prover {
    /// Set up a proof attempt; builds the term universe from `goal`.
    pub fn new(goal: Formula, config: ProverConfig) -> Self {
        let terms = build_terms(&goal, config.negated_terms, config.self_implication);
        debug!(%goal, terms = terms.len(), "built term universe");
        Prover {
            pool: Pool::with_limit(config.max_facts),
            goal,
            config,
            terms,
            history: None,
        }
    }

    pub fn goal(&self) -> &Formula {
        &self.goal
    }

    pub fn config(&self) -> &ProverConfig {
        &self.config
    }

    pub fn terms(&self) -> &TermUniverse {
        &self.terms
    }

    pub fn pool(&self) -> &Pool {
        &self.pool
    }

    /// Derivation of the goal, available after a successful `prove`
    pub fn history(&self) -> Option<&History> {
        self.history.as_ref()
    }

    /// Write the `TERMS:` block
    pub fn write_terms<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out, "TERMS:")?;
        for term in &self.terms {
            writeln!(out, "    {}", term)?;
        }
        writeln!(out)?;
        Ok(())
    }

    /// Instantiate one template over the term universe. With `print_axioms`
    /// the template and every admitted instance are written to `out`.
    pub fn add_axiom<W: Write>(&mut self, template: &Formula, out: &mut W) -> Result<InstantiationReport> {
        if self.config.print_axioms {
            writeln!(out, "Axiom: {}", template)?;
        }
        let report = instantiate(template, &self.terms, &mut self.pool)?;
        if self.config.print_axioms {
            for &id in &report.admitted {
                write_axiom_step(out, self.pool.fact(id))?;
            }
        }
        Ok(report)
    }

    /// Run the whole pipeline over `templates`.
    pub fn prove<W: Write>(&mut self, templates: &[Formula], out: &mut W) -> Result<ProofOutcome> {
        for template in templates {
            self.add_axiom(template, out)?;
        }
        info!(templates = templates.len(), facts = self.pool.len(), "axioms instantiated");

        let outcome = self.search(out)?;

        if let Some(fact) = outcome.fact() {
            let history = History::reconstruct(&mut self.pool, fact);
            if self.config.print_history {
                history.write_to(&self.pool, out)?;
            }
            self.history = Some(history);
        }
        Ok(outcome)
    }

    /// Saturate, then fall back to backward search if enabled
    fn search<W: Write>(&mut self, out: &mut W) -> Result<ProofOutcome> {
        let result = saturate(&mut self.pool, &self.goal, &self.config.saturation())?;
        if let SaturationResult::GoalFound { fact, passes } = result {
            if passes > 0 {
                writeln!(out, "GOAL FOUND!")?;
            }
            return Ok(ProofOutcome::Proved {
                fact,
                method: ProofMethod::Forward,
            });
        }

        if !self.config.backward_search {
            return Ok(ProofOutcome::Unproved);
        }

        let proved = BackwardProver::new(&self.pool, self.config.max_depth).prove(&self.goal);
        if !proved {
            info!(goal = %self.goal, "backward search failed");
            return Ok(ProofOutcome::Unproved);
        }

        info!(goal = %self.goal, "goal proved by backward search");
        match self.pool.insert(self.goal.clone(), Provenance::Deduction)? {
            Some(fact) => Ok(ProofOutcome::Proved {
                fact,
                method: ProofMethod::Backward,
            }),
            // saturation would have returned GoalFound if the goal were present
            None => Ok(ProofOutcome::Unproved),
        }
    }

    /// Summary of the attempt for JSON export
    pub fn to_json(&self) -> TraceJson {
        TraceJson::new(&self.goal, &self.terms, &self.pool, self.history.as_ref())
    }
}
