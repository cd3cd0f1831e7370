//! Derivation history
//!
//! Walks provenance backwards from a fact and lists every fact it depends on
//! exactly once, premises before conclusions. The justification graph is a
//! DAG (one fact may support several later ones), so the walk uses the
//! pool's `printed` flags to skip facts it has already emitted.

use crate::pool::{Fact, FactId, Pool, Provenance};
use std::io::{self, Write};

/// Dependency-ordered list of the facts behind a conclusion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct History {
    steps: Vec<FactId>,
}

impl History {
    /// Reconstruct the history of `fact`. Starts a fresh pass: `printed`
    /// flags left over from earlier reconstructions are cleared first.
    pub fn reconstruct(pool: &mut Pool, fact: FactId) -> Self {
        pool.reset_printed();
        let mut steps = Vec::new();
        visit(pool, fact, &mut steps);
        History { steps }
    }

    pub fn steps(&self) -> &[FactId] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// The fact whose history this is
    pub fn conclusion(&self) -> Option<FactId> {
        self.steps.last().copied()
    }

    /// Number of modus ponens steps
    pub fn inference_count(&self, pool: &Pool) -> usize {
        self.steps
            .iter()
            .filter(|id| matches!(pool.fact(**id).provenance, Provenance::ModusPonens { .. }))
            .count()
    }

    pub fn write_to<W: Write>(&self, pool: &Pool, out: &mut W) -> io::Result<()> {
        for &id in &self.steps {
            write_step(out, pool, pool.fact(id))?;
        }
        Ok(())
    }
}

fn visit(pool: &mut Pool, id: FactId, steps: &mut Vec<FactId>) {
    if !pool.mark_printed(id) {
        return;
    }
    let premises = match pool.fact(id).provenance {
        Provenance::ModusPonens {
            implication,
            antecedent,
        } => Some((antecedent, implication)),
        _ => None,
    };
    if let Some((antecedent, implication)) = premises {
        visit(pool, antecedent, steps);
        visit(pool, implication, steps);
    }
    steps.push(id);
}

/// Render one step in the trace layout
pub fn write_step<W: Write>(out: &mut W, pool: &Pool, fact: &Fact) -> io::Result<()> {
    match &fact.provenance {
        Provenance::Axiom { .. } => write_axiom_step(out, fact),
        Provenance::ModusPonens {
            implication,
            antecedent,
        } => {
            let implication = pool.fact(*implication);
            let antecedent = pool.fact(*antecedent);
            let (antecedent_text, width) = antecedent.formula.render();

            writeln!(out, "{:>5} {},", implication.index.as_usize(), implication.formula)?;
            writeln!(out, "{:>5}  {}", antecedent.index.as_usize(), antecedent_text)?;
            writeln!(
                out,
                "{:>5} {:width$}  |- {}",
                fact.index.as_usize(),
                "",
                fact.formula,
                width = width
            )?;
            writeln!(out)
        }
        Provenance::Deduction => {
            writeln!(out, "{:>5} DEDUCTED {}", fact.index.as_usize(), fact.formula)
        }
    }
}

/// Render an axiom instance: the template, its three bindings and the result.
/// Non-axiom facts are written as a bare indexed formula.
pub fn write_axiom_step<W: Write>(out: &mut W, fact: &Fact) -> io::Result<()> {
    if let Provenance::Axiom { template, bindings } = &fact.provenance {
        writeln!(out, "   Axiom = {}", template)?;
        writeln!(out, "       A = {}", bindings[0])?;
        writeln!(out, "       B = {}", bindings[1])?;
        writeln!(out, "       C = {}", bindings[2])?;
    }
    writeln!(out, "  {:>3} {}", fact.index.as_usize(), fact.formula)?;
    writeln!(out)
}
