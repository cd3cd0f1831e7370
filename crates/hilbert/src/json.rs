//! JSON serialization types for derivations

use crate::logic::{Formula, TermUniverse};
use crate::pool::{Fact, Pool, Provenance};
use crate::trace::History;
use serde::{Deserialize, Serialize};

/// JSON representation of one derivation step
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum StepJson {
    Axiom {
        index: usize,
        formula: String,
        template: String,
        a: String,
        b: String,
        c: String,
    },
    ModusPonens {
        index: usize,
        formula: String,
        implication: usize,
        antecedent: usize,
    },
    Deduction {
        index: usize,
        formula: String,
    },
}

impl StepJson {
    pub fn from_fact(fact: &Fact) -> Self {
        let index = fact.index.as_usize();
        let formula = fact.formula.to_string();
        match &fact.provenance {
            Provenance::Axiom { template, bindings } => StepJson::Axiom {
                index,
                formula,
                template: template.to_string(),
                a: bindings[0].to_string(),
                b: bindings[1].to_string(),
                c: bindings[2].to_string(),
            },
            Provenance::ModusPonens {
                implication,
                antecedent,
            } => StepJson::ModusPonens {
                index,
                formula,
                implication: implication.as_usize(),
                antecedent: antecedent.as_usize(),
            },
            Provenance::Deduction => StepJson::Deduction { index, formula },
        }
    }
}

/// JSON representation of a proof attempt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceJson {
    pub goal: String,
    pub proved: bool,
    pub terms: Vec<String>,
    pub facts: usize,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub steps: Vec<StepJson>,
}

impl TraceJson {
    pub fn new(goal: &Formula, terms: &TermUniverse, pool: &Pool, history: Option<&History>) -> Self {
        TraceJson {
            goal: goal.to_string(),
            proved: history.is_some(),
            terms: terms.iter().map(|t| t.to_string()).collect(),
            facts: pool.len(),
            steps: history
                .map(|h| {
                    h.steps()
                        .iter()
                        .map(|&id| StepJson::from_fact(pool.fact(id)))
                        .collect()
                })
                .unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_formula;
    use crate::pool::FactId;

    fn f(s: &str) -> Formula {
        parse_formula(s).unwrap()
    }

    #[test]
    fn test_step_serialization() {
        let mut pool = Pool::new();
        let p = pool.insert(f("p"), Provenance::Deduction).unwrap().unwrap();
        let pq = pool
            .insert(
                f("(p => q)"),
                Provenance::Axiom {
                    template: f("(A => B)"),
                    bindings: [f("p"), f("q"), f("p")],
                },
            )
            .unwrap()
            .unwrap();
        let q = pool
            .insert(f("q"), Provenance::ModusPonens { implication: pq, antecedent: p })
            .unwrap()
            .unwrap();

        let json = serde_json::to_value(StepJson::from_fact(pool.fact(q))).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "rule": "modus_ponens",
                "index": 2,
                "formula": "q",
                "implication": 1,
                "antecedent": 0,
            })
        );

        let json = serde_json::to_value(StepJson::from_fact(pool.fact(pq))).unwrap();
        assert_eq!(json["rule"], "axiom");
        assert_eq!(json["template"], "(A => B)");
        assert_eq!(json["b"], "q");
        assert_eq!(q, FactId(2));
    }

    #[test]
    fn test_trace_round_trip() {
        let mut pool = Pool::new();
        let id = pool.insert(f("p"), Provenance::Deduction).unwrap().unwrap();
        let history = History::reconstruct(&mut pool, id);
        let terms: TermUniverse = [f("p")].into_iter().collect();

        let trace = TraceJson::new(&f("p"), &terms, &pool, Some(&history));
        let text = serde_json::to_string(&trace).unwrap();
        let parsed: TraceJson = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed, trace);
        assert!(parsed.proved);
        assert_eq!(parsed.steps.len(), 1);
    }

    #[test]
    fn test_unproved_trace_omits_steps() {
        let pool = Pool::new();
        let terms: TermUniverse = [f("Q")].into_iter().collect();
        let trace = TraceJson::new(&f("Q"), &terms, &pool, None);
        let json = serde_json::to_value(&trace).unwrap();
        assert_eq!(json["proved"], false);
        assert!(json.get("steps").is_none());
    }
}
