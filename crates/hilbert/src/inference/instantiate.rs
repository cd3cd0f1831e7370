//! Axiom schema instantiation
//!
//! Every ordered triple of terms is substituted for `A`, `B`, `C`, so a
//! single template costs |terms|^3 substitutions. That cubic growth is what
//! keeps the term universe small in practice.

use super::substitution::{substitute, Substitution};
use crate::error::Result;
use crate::logic::{Formula, TermUniverse};
use crate::pool::{FactId, Pool, Provenance};
use tracing::debug;

/// Outcome of instantiating one template
#[derive(Debug, Clone)]
pub struct InstantiationReport {
    pub template: Formula,
    /// Number of substitutions tried
    pub substitutions: usize,
    /// Facts that were new to the pool, in insertion order
    pub admitted: Vec<FactId>,
}

impl InstantiationReport {
    pub fn duplicates(&self) -> usize {
        self.substitutions - self.admitted.len()
    }
}

/// Instantiate `template` over all triples from `terms`, adding novel
/// instances to `pool`. Instances already in the pool are dropped.
pub fn instantiate(
    template: &Formula,
    terms: &TermUniverse,
    pool: &mut Pool,
) -> Result<InstantiationReport> {
    let mut report = InstantiationReport {
        template: template.clone(),
        substitutions: 0,
        admitted: Vec::new(),
    };

    for a in terms {
        for b in terms {
            for c in terms {
                let subst = Substitution::full(a.clone(), b.clone(), c.clone());
                let instance = substitute(template, &subst)?;
                report.substitutions += 1;

                if pool.contains(&instance) {
                    continue;
                }
                let provenance = Provenance::Axiom {
                    template: template.clone(),
                    bindings: [a.clone(), b.clone(), c.clone()],
                };
                if let Some(id) = pool.insert(instance, provenance)? {
                    report.admitted.push(id);
                }
            }
        }
    }

    debug!(
        template = %template,
        substitutions = report.substitutions,
        admitted = report.admitted.len(),
        "instantiated axiom template"
    );
    Ok(report)
}
