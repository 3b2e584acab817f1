//! Error types used in the library.
//!
//! - Lexing and parsing errors are user errors, and are returned to the caller without any attempt at recovery.
//! - A [CNFError] is a violation of the contract between [to_cnf](crate::transform::cnf::to_cnf) and [extract_clauses](crate::transform::clauses::extract_clauses), and so is a defect rather than a user error.
//! - A [ContextError] is a failure of the context outside of a proof attempt proper.
//!
//! An aborted proof attempt is *not* an error, and is instead noted in the [report](crate::reports::Report) of the attempt.
//!
//! Names of the error enums overlap with corresponding structs.
//  As such, throughout the library err::{self} is often used to prefix use of the types with `err::`.

use crate::{db::ClauseKey, structures::variable::Variable};

/// The kinds of error returned by the library.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    /// Illegal characters in some input, in order of occurrence (and never empty).
    Lex(Vec<LexError>),

    /// Malformed syntax in some input.
    Parse(ParseError),

    /// A formula which was expected to be in conjunctive normal form was not.
    CNF(CNFError),

    /// Some issue with the context.
    Context(ContextError),

    /// Some issue with the clause database.
    ClauseDB(ClauseDBError),
}

impl From<Vec<LexError>> for ErrorKind {
    fn from(e: Vec<LexError>) -> Self {
        ErrorKind::Lex(e)
    }
}

impl From<ParseError> for ErrorKind {
    fn from(e: ParseError) -> Self {
        ErrorKind::Parse(e)
    }
}

impl From<CNFError> for ErrorKind {
    fn from(e: CNFError) -> Self {
        ErrorKind::CNF(e)
    }
}

impl From<ContextError> for ErrorKind {
    fn from(e: ContextError) -> Self {
        ErrorKind::Context(e)
    }
}

impl From<ClauseDBError> for ErrorKind {
    fn from(e: ClauseDBError) -> Self {
        ErrorKind::ClauseDB(e)
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lex(errors) => {
                let errors = errors.iter().map(|e| e.to_string()).collect::<Vec<_>>();
                write!(f, "{}", errors.join("; "))
            }
            Self::Parse(e) => write!(f, "{e}"),
            Self::CNF(e) => write!(f, "{e}"),
            Self::Context(e) => write!(f, "{e}"),
            Self::ClauseDB(e) => write!(f, "{e}"),
        }
    }
}

/// An illegal character, or the first character of a malformed symbol.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct LexError {
    /// The (character, not byte) offset of the character in the input.
    pub position: usize,

    /// The character.
    pub character: char,
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Invalid character '{}' at position {}",
            self.character, self.position
        )
    }
}

/// Noted errors during parsing.
///
/// Each error carries the (character) position of the offending token.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ParseError {
    /// A variable or '(' was required, but something else was found.
    ExpectedOperand(usize),

    /// A '(' without a matching ')', or a ')' without a matching '('.
    UnbalancedParens(usize),

    /// Tokens remain after a complete formula.
    TrailingInput(usize),

    /// Parentheses, negations, or operators nested past the [limit](crate::parse::parser::MAX_DEPTH).
    NestingTooDeep(usize),
}

impl ParseError {
    /// The position of the offending token.
    pub fn position(&self) -> usize {
        match self {
            Self::ExpectedOperand(position)
            | Self::UnbalancedParens(position)
            | Self::TrailingInput(position)
            | Self::NestingTooDeep(position) => *position,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ExpectedOperand(p) => write!(f, "Expected an operand at position {p}"),
            Self::UnbalancedParens(p) => write!(f, "Unbalanced parenthesis at position {p}"),
            Self::TrailingInput(p) => write!(f, "Unexpected input at position {p}"),
            Self::NestingTooDeep(p) => write!(f, "Nesting too deep at position {p}"),
        }
    }
}

/// Errors when reading clauses from a formula.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CNFError {
    /// The formula is not in conjunctive normal form.
    ///
    /// As formulas are converted before extraction, this is unexpected.
    MalformedCNF,
}

impl std::fmt::Display for CNFError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MalformedCNF => write!(f, "Internal error: formula is not in cnf"),
        }
    }
}

/// Errors from a context.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ContextError {
    /// A variable outside of 'A'..='Z' was used.
    InvalidVariable(Variable),
}

impl std::fmt::Display for ContextError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidVariable(v) => write!(f, "Invalid variable '{v}'"),
        }
    }
}

/// Errors in the clause database.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ClauseDBError {
    /// The clause is already stored, with the given key.
    Duplicate(ClauseKey),

    /// There is no clause stored with the given key.
    Missing,

    /// There are no more keys available to store a clause.
    StorageExhausted,
}

impl std::fmt::Display for ClauseDBError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Duplicate(key) => write!(f, "Clause already stored as {key}"),
            Self::Missing => write!(f, "Missing clause"),
            Self::StorageExhausted => write!(f, "Clause storage exhausted"),
        }
    }
}
