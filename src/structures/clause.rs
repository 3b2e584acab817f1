//! Clauses, aka. a collection of literals, interpreted as the disjunction of those literals.
//!
//! The canonical representation of a clause is as a vector of literals, sorted and without duplicates.
//! Canonical clauses are equal exactly when they contain the same literals, and so equality of clauses is decided by comparison of vectors.
//!
//! ```rust
//! # use clausal::structures::literal::Literal;
//! # use clausal::structures::clause::Clause;
//! let clause = vec![Literal::new('B', true),
//!                   Literal::new('A', false),
//!                   Literal::new('B', true)].canonical();
//!
//! assert_eq!(clause.size(), 2);
//! assert_eq!(clause.as_string(), "{~A, B}");
//!
//! let other = vec![Literal::new('A', true), Literal::new('C', true)];
//! assert_eq!(clause.complementary_variables(&other), vec!['A']);
//!
//! let resolvent = clause.resolve_on(&other, 'A');
//! assert_eq!(resolvent.as_string(), "{B, C}");
//! ```
//!
//! - The empty clause is always false (never true).
//! - A clause containing some literal and its negation is a *tautology*, and is always true.

use std::collections::BTreeSet;

use crate::structures::{literal::Literal, valuation::Valuation, variable::Variable};

/// The canonical implementation of a clause.
pub type CClause = Vec<Literal>;

/// The clause trait.
pub trait Clause {
    /// The clause in its canonical form: sorted, without duplicate literals.
    fn canonical(self) -> CClause;

    /// A string representation of the clause.
    fn as_string(&self) -> String;

    /// An iterator over all literals in the clause.
    fn literals(&self) -> impl Iterator<Item = Literal>;

    /// The number of literals in the clause.
    fn size(&self) -> usize;

    /// The variables of the clause, in order and without duplicates.
    fn variables(&self) -> BTreeSet<Variable>;

    /// Whether the clause contains some literal and its negation.
    fn is_tautology(&self) -> bool;

    /// The variables *v* such that some literal of *v* in the clause is the negation of some literal in `other`, in order.
    fn complementary_variables(&self, other: &impl Clause) -> Vec<Variable>;

    /// The resolvent of the clause and `other` on `variable`, in canonical form.
    ///
    /// The literal of `variable` in the clause and its negation in `other` are removed, and all other literals of both clauses are kept.
    /// If `variable` is not a complementary variable of the two clauses, the result is simply the union of the clauses.
    fn resolve_on(&self, other: &impl Clause, variable: Variable) -> CClause;

    /// The value of the clause on a valuation.
    fn evaluate(&self, valuation: &Valuation) -> bool;
}

impl Clause for CClause {
    fn canonical(mut self) -> CClause {
        self.sort_unstable();
        self.dedup();
        self
    }

    fn as_string(&self) -> String {
        let literals = self.iter().map(|l| l.to_string()).collect::<Vec<_>>();
        format!("{{{}}}", literals.join(", "))
    }

    fn literals(&self) -> impl Iterator<Item = Literal> {
        self.iter().copied()
    }

    fn size(&self) -> usize {
        self.len()
    }

    fn variables(&self) -> BTreeSet<Variable> {
        self.iter().map(|literal| literal.variable()).collect()
    }

    fn is_tautology(&self) -> bool {
        self.iter()
            .any(|literal| self.contains(&literal.negate()))
    }

    fn complementary_variables(&self, other: &impl Clause) -> Vec<Variable> {
        let mut the_variables = self
            .iter()
            .filter(|literal| other.literals().any(|o| literal.is_complementary(&o)))
            .map(|literal| literal.variable())
            .collect::<Vec<_>>();
        the_variables.sort_unstable();
        the_variables.dedup();
        the_variables
    }

    fn resolve_on(&self, other: &impl Clause, variable: Variable) -> CClause {
        // The pivot of the clause, if the clause contains either literal of the variable and other contains the negation.
        let pivot = self
            .iter()
            .find(|literal| {
                literal.variable() == variable
                    && other.literals().any(|o| o == literal.negate())
            })
            .copied();

        let mut the_resolvent = Vec::with_capacity(self.len() + other.size());
        match pivot {
            Some(pivot) => {
                the_resolvent.extend(self.iter().filter(|l| **l != pivot));
                the_resolvent.extend(other.literals().filter(|l| *l != pivot.negate()));
            }
            None => {
                the_resolvent.extend(self.iter());
                the_resolvent.extend(other.literals());
            }
        }
        the_resolvent.canonical()
    }

    fn evaluate(&self, valuation: &Valuation) -> bool {
        self.iter()
            .any(|literal| valuation.value_of(literal.variable()) == literal.polarity())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clause(literals: &[(char, bool)]) -> CClause {
        literals
            .iter()
            .map(|(v, p)| Literal::new(*v, *p))
            .collect::<CClause>()
            .canonical()
    }

    #[test]
    fn canonical_order() {
        let c = clause(&[('C', true), ('A', true), ('A', false), ('C', true)]);
        assert_eq!(c.as_string(), "{~A, A, C}");
        assert_eq!(c.size(), 3);
    }

    #[test]
    fn empty_clause() {
        let c: CClause = vec![];
        assert_eq!(c.as_string(), "{}");
        assert!(!c.is_tautology());
        assert!(!c.evaluate(&Valuation::default()));
    }

    #[test]
    fn tautology() {
        assert!(clause(&[('A', true), ('B', false), ('A', false)]).is_tautology());
        assert!(!clause(&[('A', true), ('B', false)]).is_tautology());
    }

    #[test]
    fn resolution_removes_pair() {
        let a = clause(&[('A', false), ('B', true)]);
        let b = clause(&[('A', true)]);
        assert_eq!(b.complementary_variables(&a), vec!['A']);
        assert_eq!(a.resolve_on(&b, 'A'), clause(&[('B', true)]));
        assert_eq!(b.resolve_on(&a, 'A'), clause(&[('B', true)]));
    }

    #[test]
    fn resolution_to_empty() {
        let a = clause(&[('A', true)]);
        let b = clause(&[('A', false)]);
        assert!(a.resolve_on(&b, 'A').is_empty());
    }

    #[test]
    fn resolution_on_two_pairs_is_tautology() {
        let a = clause(&[('A', true), ('B', true)]);
        let b = clause(&[('A', false), ('B', false)]);
        assert_eq!(a.complementary_variables(&b), vec!['A', 'B']);
        assert!(a.resolve_on(&b, 'A').is_tautology());
        assert!(a.resolve_on(&b, 'B').is_tautology());
    }

    #[test]
    fn duplicates_collapse() {
        let a = clause(&[('A', true), ('C', true)]);
        let b = clause(&[('A', false), ('C', true)]);
        assert_eq!(a.resolve_on(&b, 'A'), clause(&[('C', true)]));
    }
}
