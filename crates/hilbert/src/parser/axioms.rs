//! Axiom schema files
//!
//! One template per line. Lines whose first character is `#` are comments;
//! blank lines are skipped. Atoms named `A`, `B` and `C` are meta-variables.

use super::formula::{parse_formula_with_limit, ParseLimits};
use crate::error::{ProverError, Result};
use crate::logic::Formula;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Parse axiom templates from text
pub fn parse_axioms(text: &str, limits: ParseLimits) -> Result<Vec<Formula>> {
    let mut templates = Vec::new();
    for (i, line) in text.lines().enumerate() {
        if line.starts_with('#') || line.trim().is_empty() {
            continue;
        }
        let template =
            parse_formula_with_limit(line, limits).map_err(|e| ProverError::AxiomLine {
                line: i + 1,
                source: Box::new(e),
            })?;
        templates.push(template);
    }
    Ok(templates)
}

/// Read and parse an axiom file
pub fn load_axioms(path: impl AsRef<Path>, limits: ParseLimits) -> Result<Vec<Formula>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    let templates = parse_axioms(&text, limits)?;
    debug!(path = %path.display(), count = templates.len(), "loaded axiom templates");
    Ok(templates)
}
