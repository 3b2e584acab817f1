//! Key structures, such as formulas, literals, and clauses.
//!
//! # Formulas
//!
//! A [formula](formula::Formula) is a tree built from [variables](variable) by negation, conjunction, disjunction, implication, and equivalence.
//!
//! A formula is in *conjunctive normal form* when negation applies only to variables, and no disjunction has a conjunction as a part.
//! Such a formula is a conjunction of [clauses](clause), and the [transform](crate::transform) module rewrites formulas to this shape.
//!
//! # Clauses
//!
//! A [literal](literal) is a variable paired with a polarity, and a clause is a set of literals, interpreted as the disjunction of those literals.
//! A [clause set](clause_set) is a collection of clauses, interpreted as the conjunction of those clauses.
//!
//! # Valuations
//!
//! A [valuation](valuation) assigns a (boolean) value to each variable, and is used to determine the value of formulas and clause sets by truth table.

pub mod clause;
pub mod clause_set;
pub mod formula;
pub mod literal;
pub mod valuation;
pub mod variable;
