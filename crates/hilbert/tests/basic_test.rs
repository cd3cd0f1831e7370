//! Integration tests for the prover pipeline

use hilbert::{
    parse_axioms, parse_formula, verify_history, ParseLimits, ProofMethod, ProofOutcome, Prover,
    ProverConfig, ProverError, Provenance,
};

const HILBERT_KS: &str = "\
# K
(A => (B => A))
# S
((A => (B => C)) => ((A => B) => (A => C)))
";

fn prove(goal: &str, axioms: &str, config: ProverConfig) -> (ProofOutcome, Prover, String) {
    let templates = parse_axioms(axioms, config.parse_limits()).unwrap();
    let mut prover = Prover::new(parse_formula(goal).unwrap(), config);
    let mut out = Vec::new();
    prover.write_terms(&mut out).unwrap();
    let outcome = prover.prove(&templates, &mut out).unwrap();
    (outcome, prover, String::from_utf8(out).unwrap())
}

#[test]
fn test_identity_from_k_and_s() {
    let (outcome, prover, out) = prove("(A => A)", HILBERT_KS, ProverConfig::default());
    assert!(outcome.is_proved(), "expected proof, got {:?}", outcome);

    let terms: Vec<String> = prover.terms().iter().map(|t| t.to_string()).collect();
    assert_eq!(terms, vec!["A", "(A => A)"]);
    assert!(out.starts_with("TERMS:\n    A\n    (A => A)\n\nGOAL FOUND!\n"));

    let history = prover.history().expect("history recorded");
    verify_history(prover.pool(), history).expect("history verification failed");
    assert_eq!(history.inference_count(prover.pool()), 2);

    // Both schemas are used
    let templates: Vec<String> = history
        .steps()
        .iter()
        .filter_map(|&id| match &prover.pool().fact(id).provenance {
            Provenance::Axiom { template, .. } => Some(template.to_string()),
            _ => None,
        })
        .collect();
    assert!(templates.contains(&"(A => (B => A))".to_string()));
    assert!(templates.contains(&"((A => (B => C)) => ((A => B) => (A => C)))".to_string()));
}

#[test]
fn test_k_alone_cannot_prove_identity() {
    let (outcome, prover, out) = prove("(p => p)", "(A => (B => A))\n", ProverConfig::default());
    assert_eq!(outcome, ProofOutcome::Unproved);
    assert!(prover.history().is_none());
    assert!(!out.contains("GOAL FOUND!"));
    // Four K instances over {p, (p => p)}, nothing derivable
    assert_eq!(prover.pool().len(), 4);
}

#[test]
fn test_k_alone_with_backward_search() {
    let mut config = ProverConfig::default();
    config.backward_search = true;
    let (outcome, prover, out) = prove("(p => p)", "(A => (B => A))\n", config);
    match outcome {
        ProofOutcome::Proved {
            method: ProofMethod::Backward,
            fact,
        } => {
            assert_eq!(prover.pool().fact(fact).provenance, Provenance::Deduction);
        }
        other => panic!("Expected backward proof, got {:?}", other),
    }
    assert!(out.ends_with("DEDUCTED (p => p)\n"));
}

#[test]
fn test_no_axioms() {
    let (outcome, prover, out) = prove("Q", "", ProverConfig::default());
    assert_eq!(outcome, ProofOutcome::Unproved);
    assert!(prover.pool().is_empty());
    assert_eq!(out, "TERMS:\n    Q\n\n");
}

#[test]
fn test_no_axioms_backward_cannot_prove_atom() {
    let mut config = ProverConfig::default();
    config.backward_search = true;
    let (outcome, _, _) = prove("Q", "# nothing here\n", config);
    assert_eq!(outcome, ProofOutcome::Unproved);
}

#[test]
fn test_history_can_be_suppressed() {
    let mut config = ProverConfig::default();
    config.print_history = false;
    let (outcome, prover, out) = prove("(A => A)", HILBERT_KS, config);
    assert!(outcome.is_proved());
    assert!(prover.history().is_some());
    assert!(out.ends_with("GOAL FOUND!\n"));
}

#[test]
fn test_pass_limit_stops_search() {
    let mut config = ProverConfig::default();
    config.max_passes = 1;
    let (outcome, _, _) = prove("(A => A)", HILBERT_KS, config);
    assert_eq!(outcome, ProofOutcome::Unproved);
}

#[test]
fn test_capacity_is_an_error() {
    let mut config = ProverConfig::default();
    config.max_facts = 3;
    let templates = parse_axioms(HILBERT_KS, config.parse_limits()).unwrap();
    let mut prover = Prover::new(parse_formula("(A => A)").unwrap(), config);
    let err = prover.prove(&templates, &mut Vec::new()).unwrap_err();
    assert!(matches!(err, ProverError::CapacityExceeded { limit: 3 }));
}

#[test]
fn test_axiom_file_error_reports_line() {
    let err = parse_axioms("# K\n(A => (B => A))\n(A => B\n", ParseLimits::default()).unwrap_err();
    match err {
        ProverError::AxiomLine { line, .. } => assert_eq!(line, 3),
        other => panic!("Expected AxiomLine error, got {:?}", other),
    }
}

#[test]
fn test_json_summary() {
    let (_, prover, _) = prove("(A => A)", HILBERT_KS, ProverConfig::default());
    let json = serde_json::to_value(prover.to_json()).unwrap();
    assert_eq!(json["goal"], "(A => A)");
    assert_eq!(json["proved"], true);
    let steps = json["steps"].as_array().unwrap();
    assert_eq!(steps.last().unwrap()["rule"], "modus_ponens");
    assert_eq!(steps.last().unwrap()["formula"], "(A => A)");
}
