//! Error types for the prover

use crate::logic::FormulaError;
use std::io;
use thiserror::Error;

/// A syntax error in formula text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("parse error at offset {offset}: {message} (in `{input}`)")]
pub struct ParseError {
    pub input: String,
    pub offset: usize,
    pub message: String,
}

#[derive(Error, Debug)]
pub enum ProverError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Formula(#[from] FormulaError),

    #[error("axiom file line {line}: {source}")]
    AxiomLine {
        line: usize,
        #[source]
        source: Box<ProverError>,
    },

    #[error("meta-variable `{name}` has no binding")]
    UnboundMetaVariable { name: String },

    #[error("fact store capacity of {limit} facts exceeded")]
    CapacityExceeded { limit: usize },

    #[error("no goal formula on standard input")]
    EmptyGoal,

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, ProverError>;
