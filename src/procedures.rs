//! Procedures on a context, and related procedures on formulas.
//!
//! - [prove] attempts a proof of a goal from the premises of a [context](crate::context), by resolution refutation.
//! - [truth_table] decides entailment, equivalence, and satisfiability by enumeration of valuations, and is used to check the results of [prove] on small formulas.

pub mod prove;
pub mod truth_table;
