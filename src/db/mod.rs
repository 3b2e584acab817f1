//! Databases for holding information relevant to a proof attempt.
//!
//! - [The clause database](crate::db::clause)
//!   + The working set of a proof attempt: every clause from the premises and the negated goal, together with every resolvent derived.
//!     Each clause is indexed by a [ClauseKey] and noted with its [source](crate::db::clause::ClauseSource).

pub mod clause;
mod keys;
pub use keys::*;
