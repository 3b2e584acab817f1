//! A library for deciding whether a propositional formula follows from a collection of premises.
//!
//! clausal takes formulas as text, such as `(A -> B) & ~C`, and passes them through a short pipeline:
//!
//! ```none
//! string --[lexer]--> tokens --[parser]--> formula --[cnf]--> formula in cnf --[extract]--> clause set
//! ```
//!
//! Clause sets are then given to a [context](crate::context), which holds the premises of a session and attempts [proofs](crate::procedures::prove) of goals by resolution refutation.
//!
//! # Orientation
//!
//! - [parse] contains the [lexer](parse::lexer) and [parser](parse::parser), and shortcuts for running the two together.
//! - [structures] contains the abstract elements of the pipeline: [formulas](structures::formula), [literals](structures::literal), [clauses](structures::clause), and [clause sets](structures::clause_set).
//! - [transform] rewrites a formula to conjunctive normal form and extracts clauses from the result.
//! - [context] holds premises across proof attempts, and [procedures] contains the resolution procedure itself.
//! - [reports] contains the results of a proof attempt, including the log of resolution steps taken.
//! - [format] writes formulas back out as text.
//!
//! # Examples
//!
//! + Modus ponens.
//!
//! ```rust
//! # use clausal::context::{CancelToken, Context};
//! # use clausal::reports::Report;
//! let mut the_context = Context::default();
//!
//! assert!(the_context.add_premise_str("A -> B").is_ok());
//! assert!(the_context.add_premise_str("A").is_ok());
//!
//! let result = the_context.prove_str("B", &CancelToken::default()).unwrap();
//! assert_eq!(result.report, Report::Proved);
//! ```
//!
//! + Conversion to conjunctive normal form.
//!
//! ```rust
//! # use clausal::format::{format, Format};
//! # use clausal::parse::formula_from_str;
//! # use clausal::transform::{cnf::to_cnf, clauses::extract_clauses};
//! let formula = formula_from_str("A <-> B").unwrap();
//! let cnf = to_cnf(&formula);
//!
//! assert_eq!(format(&cnf, Format::Plain), "(~A | B) & (~B | A)");
//! assert_eq!(extract_clauses(&cnf).unwrap().to_string(), "{ {~A, B}, {A, ~B} }");
//! ```
//!
//! # Logs
//!
//! Calls to [log!](log) are made throughout the library, with targets listed in [misc::log].
//! No logger is provided by the library.
//! For example, with [env_logger](https://docs.rs/env_logger/latest/env_logger/) each resolution step may be seen with `RUST_LOG=resolution=trace …`.

#![allow(clippy::single_match)]
#![allow(clippy::collapsible_else_if)]

pub mod config;
pub mod context;
pub mod db;
pub mod format;
pub mod misc;
pub mod parse;
pub mod procedures;
pub mod reports;
pub mod structures;
pub mod transform;
pub mod types;
