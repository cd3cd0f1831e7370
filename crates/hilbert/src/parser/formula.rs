//! Formula grammar
//!
//! ```text
//! formula := atom | '!' formula | '(' formula '=>' formula ')'
//! atom    := letters+
//! ```
//!
//! Whitespace is insignificant between tokens. Once a `!` or `(` has been
//! read the parser commits (`cut`), so errors point at the offending token
//! rather than at the start of the enclosing formula.
//!
//! The grammar is recursive, so nesting is capped by [`ParseLimits`]; input
//! nested deeper than `max_depth` is rejected before the parser descends.

use crate::error::{ParseError, ProverError, Result};
use crate::logic::{Formula, FormulaError, MAX_ATOM_LEN, MAX_FORMULA_DEPTH};
use nom::{
    branch::alt,
    bytes::complete::tag,
    character::complete::{alpha1, char, multispace0},
    combinator::{all_consuming, cut, map, map_res},
    error::{ErrorKind, FromExternalError},
    sequence::{preceded, terminated, tuple},
    IResult,
};

/// Caps applied while parsing a formula
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseLimits {
    /// Longest accepted atom name
    pub max_atom_len: usize,
    /// Deepest accepted nesting, counted like [`Formula::depth`]
    pub max_depth: usize,
}

impl Default for ParseLimits {
    fn default() -> Self {
        ParseLimits {
            max_atom_len: MAX_ATOM_LEN,
            max_depth: MAX_FORMULA_DEPTH,
        }
    }
}

#[derive(Debug)]
enum GrammarError<'a> {
    Syntax(&'a str, ErrorKind),
    Atom(FormulaError),
    TooDeep(&'a str, usize),
}

impl<'a> nom::error::ParseError<&'a str> for GrammarError<'a> {
    fn from_error_kind(input: &'a str, kind: ErrorKind) -> Self {
        GrammarError::Syntax(input, kind)
    }

    fn append(_input: &'a str, _kind: ErrorKind, other: Self) -> Self {
        other
    }

    fn or(self, other: Self) -> Self {
        match self {
            GrammarError::Syntax(..) => other,
            _ => self,
        }
    }
}

impl<'a> FromExternalError<&'a str, FormulaError> for GrammarError<'a> {
    fn from_external_error(_input: &'a str, _kind: ErrorKind, e: FormulaError) -> Self {
        GrammarError::Atom(e)
    }
}

type PResult<'a, O> = IResult<&'a str, O, GrammarError<'a>>;

/// Parse a complete formula with the default limits.
pub fn parse_formula(input: &str) -> Result<Formula> {
    parse_formula_with_limit(input, ParseLimits::default())
}

/// Parse a complete formula; trailing whitespace is allowed, anything else
/// after the formula is an error.
pub fn parse_formula_with_limit(input: &str, limits: ParseLimits) -> Result<Formula> {
    let result = all_consuming(terminated(
        move |i| formula(i, limits, 1),
        multispace0,
    ))(input);

    match result {
        Ok((_, parsed)) => Ok(parsed),
        Err(nom::Err::Error(e)) | Err(nom::Err::Failure(e)) => Err(to_prover_error(input, e)),
        Err(nom::Err::Incomplete(_)) => Err(ProverError::Parse(ParseError {
            input: input.trim_end().to_string(),
            offset: input.len(),
            message: "unexpected end of input".into(),
        })),
    }
}

fn to_prover_error(input: &str, error: GrammarError<'_>) -> ProverError {
    let (rest, message) = match error {
        GrammarError::Atom(e) => return ProverError::Formula(e),
        GrammarError::TooDeep(rest, max) => {
            (rest, format!("formula nested deeper than {}", max))
        }
        GrammarError::Syntax(rest, kind) => {
            let expected = match kind {
                ErrorKind::Tag => "expected `=>`",
                ErrorKind::Char => "expected `)`",
                ErrorKind::Alpha => "expected `!`, `(` or an atom",
                ErrorKind::Eof => "expected end of formula",
                _ => "unexpected token",
            };
            let found = match rest.trim_start().chars().next() {
                Some(c) => format!("`{}`", c),
                None => "end of input".to_string(),
            };
            (rest, format!("{}, found {}", expected, found))
        }
    };
    ProverError::Parse(ParseError {
        input: input.trim_end().to_string(),
        offset: input.len() - rest.trim_start().len(),
        message,
    })
}

/// `depth` is the nesting level of the formula about to be read; the root
/// is at level 1.
fn formula(input: &str, limits: ParseLimits, depth: usize) -> PResult<'_, Formula> {
    if depth > limits.max_depth {
        return Err(nom::Err::Failure(GrammarError::TooDeep(
            input,
            limits.max_depth,
        )));
    }
    preceded(
        multispace0,
        alt((
            move |i| negation(i, limits, depth),
            move |i| implication(i, limits, depth),
            move |i| atom(i, limits),
        )),
    )(input)
}

fn negation(input: &str, limits: ParseLimits, depth: usize) -> PResult<'_, Formula> {
    map(
        preceded(char('!'), cut(move |i| formula(i, limits, depth + 1))),
        Formula::not,
    )(input)
}

fn implication(input: &str, limits: ParseLimits, depth: usize) -> PResult<'_, Formula> {
    map(
        preceded(
            char('('),
            cut(tuple((
                move |i| formula(i, limits, depth + 1),
                preceded(multispace0, tag("=>")),
                move |i| formula(i, limits, depth + 1),
                preceded(multispace0, char(')')),
            ))),
        ),
        |(left, _, right, _)| Formula::implies(left, right),
    )(input)
}

fn atom(input: &str, limits: ParseLimits) -> PResult<'_, Formula> {
    map_res(alpha1, move |name: &str| {
        Formula::atom_with_limit(name, limits.max_atom_len)
    })(input)
}
