//! Transformations of formulas.
//!
//! - [cnf] rewrites a formula to an equivalent formula in conjunctive normal form.
//! - [clauses] reads the clauses from a formula in conjunctive normal form.

pub mod clauses;
pub mod cnf;
