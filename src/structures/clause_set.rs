/*!
Clause sets, aka. a collection of clauses, interpreted as the conjunction of those clauses.

A clause set is the result of [extracting](crate::transform::clauses::extract_clauses) clauses from a formula in conjunctive normal form, and is what a [context](crate::context) works with.

Clauses are stored in their [canonical](crate::structures::clause::Clause::canonical) form and in order of insertion, with repeated clauses dropped.
Order is irrelevant to the interpretation of a clause set, though it fixes the order in which clauses are considered during a proof.

```rust
# use clausal::structures::{clause_set::ClauseSet, literal::Literal};
let mut set = ClauseSet::default();

assert!(set.insert(vec![Literal::new('B', true), Literal::new('A', false)]));
assert!(set.insert(vec![Literal::new('A', true)]));
assert!(!set.insert(vec![Literal::new('A', false), Literal::new('B', true), Literal::new('B', true)]));

assert_eq!(set.to_string(), "{ {~A, B}, {A} }");
```
*/

use std::collections::{BTreeSet, HashSet};

use serde::Serialize;

use crate::{
    structures::{
        clause::{CClause, Clause},
        formula::Formula,
        literal::Literal,
        valuation::Valuation,
        variable::Variable,
    },
    transform::{clauses::extract_clauses, cnf::to_cnf},
    types::err::{self},
};

/// A collection of clauses, without repetition.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ClauseSet {
    /// The clauses, in canonical form.
    clauses: Vec<CClause>,

    #[serde(skip)]
    seen: HashSet<CClause>,
}

impl ClauseSet {
    /// Adds `clause` to the set, in canonical form.
    ///
    /// Returns true if the clause was not already part of the set.
    pub fn insert(&mut self, clause: CClause) -> bool {
        let clause = clause.canonical();
        match self.seen.insert(clause.clone()) {
            true => {
                self.clauses.push(clause);
                true
            }
            false => false,
        }
    }

    /// Adds each clause of `other` to the set, returning the count of clauses which were not already part of the set.
    pub fn extend_from(&mut self, other: &ClauseSet) -> usize {
        other
            .iter()
            .filter(|clause| self.insert((*clause).clone()))
            .count()
    }

    /// Whether `clause` (in any order, and with any repetition) is part of the set.
    pub fn contains(&self, clause: &CClause) -> bool {
        self.seen.contains(&clause.clone().canonical())
    }

    /// An iterator over the clauses of the set, in order of insertion.
    pub fn iter(&self) -> std::slice::Iter<'_, CClause> {
        self.clauses.iter()
    }

    /// The count of clauses in the set.
    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    /// Whether the set has no clauses (and so is true on every valuation).
    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    /// Whether the set contains the empty clause (and so is false on every valuation).
    pub fn has_empty_clause(&self) -> bool {
        self.clauses.iter().any(|clause| clause.is_empty())
    }

    /// The variables of the clauses of the set, in order and without duplicates.
    pub fn variables(&self) -> BTreeSet<Variable> {
        self.clauses
            .iter()
            .flat_map(|clause| clause.variables())
            .collect()
    }

    /// The value of the set on a valuation.
    pub fn evaluate(&self, valuation: &Valuation) -> bool {
        self.clauses.iter().all(|clause| clause.evaluate(valuation))
    }

    /// The set with the clauses sorted, so sets with the same clauses are equal regardless of insertion order.
    pub fn canonical(mut self) -> Self {
        self.clauses.sort_unstable();
        self
    }

    /// The set without any tautological clause.
    pub fn without_tautologies(self) -> Self {
        self.clauses
            .into_iter()
            .filter(|clause| !clause.is_tautology())
            .collect()
    }

    /// The set as a formula: a left-grouped conjunction of left-grouped disjunctions.
    ///
    /// A formula requires at least one variable, and so there is no formula for the empty set or for any set containing the empty clause.
    pub fn to_formula(&self) -> Option<Formula> {
        let mut conjuncts = self.clauses.iter().map(clause_formula);
        let first = conjuncts.next()??;
        conjuncts.try_fold(first, |acc, conjunct| Some(Formula::and(acc, conjunct?)))
    }

    /// The negation of the set, as a set.
    ///
    /// The set is written as a formula, negated, and converted to conjunctive normal form, from which clauses are extracted.
    /// Edge cases are handled directly:
    /// - The empty set is true, so its negation is the set containing only the empty clause.
    /// - A set containing the empty clause is false, so its negation is the empty set.
    pub fn negation(&self) -> Result<ClauseSet, err::CNFError> {
        if self.is_empty() {
            return Ok(ClauseSet::from_iter([CClause::new()]));
        }
        match self.to_formula() {
            None => Ok(ClauseSet::default()),
            Some(formula) => extract_clauses(&to_cnf(&Formula::not(formula))),
        }
    }
}

/// A clause as a left-grouped disjunction of literals, if the clause is not empty.
fn clause_formula(clause: &CClause) -> Option<Formula> {
    let mut disjuncts = clause.iter().map(literal_formula);
    let first = disjuncts.next()?;
    Some(disjuncts.fold(first, Formula::or))
}

fn literal_formula(literal: &Literal) -> Formula {
    match literal.polarity() {
        true => Formula::prop(literal.variable()),
        false => Formula::not(Formula::prop(literal.variable())),
    }
}

impl FromIterator<CClause> for ClauseSet {
    fn from_iter<I: IntoIterator<Item = CClause>>(iter: I) -> Self {
        let mut the_set = ClauseSet::default();
        for clause in iter {
            the_set.insert(clause);
        }
        the_set
    }
}

impl<'a> IntoIterator for &'a ClauseSet {
    type Item = &'a CClause;
    type IntoIter = std::slice::Iter<'a, CClause>;

    fn into_iter(self) -> Self::IntoIter {
        self.clauses.iter()
    }
}

impl std::fmt::Display for ClauseSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.clauses.is_empty() {
            return write!(f, "{{ }}");
        }
        let clauses = self.clauses.iter().map(|c| c.as_string()).collect::<Vec<_>>();
        write!(f, "{{ {} }}", clauses.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lit(v: char, p: bool) -> Literal {
        Literal::new(v, p)
    }

    #[test]
    fn duplicate_clauses_dropped() {
        let mut set = ClauseSet::default();
        assert!(set.insert(vec![lit('A', true), lit('B', true)]));
        assert!(!set.insert(vec![lit('B', true), lit('A', true)]));
        assert_eq!(set.len(), 1);
        assert!(set.contains(&vec![lit('B', true), lit('A', true), lit('A', true)]));
    }

    #[test]
    fn canonical_ignores_order() {
        let a = ClauseSet::from_iter([vec![lit('B', true)], vec![lit('A', true)]]);
        let b = ClauseSet::from_iter([vec![lit('A', true)], vec![lit('B', true)]]);
        assert_ne!(a, b);
        assert_eq!(a.canonical(), b.canonical());
    }

    #[test]
    fn display_empty() {
        assert_eq!(ClauseSet::default().to_string(), "{ }");
        assert_eq!(ClauseSet::from_iter([CClause::new()]).to_string(), "{ {} }");
    }

    #[test]
    fn negation_of_unit() {
        let set = ClauseSet::from_iter([vec![lit('B', true)]]);
        let negation = set.negation().unwrap();
        assert_eq!(negation.to_string(), "{ {~B} }");
    }

    #[test]
    fn negation_of_conjunction() {
        // ~(A & B) is ~A | ~B
        let set = ClauseSet::from_iter([vec![lit('A', true)], vec![lit('B', true)]]);
        assert_eq!(set.negation().unwrap().to_string(), "{ {~A, ~B} }");
    }

    #[test]
    fn negation_of_disjunction() {
        // ~(A | B) is ~A & ~B
        let set = ClauseSet::from_iter([vec![lit('A', true), lit('B', true)]]);
        assert_eq!(set.negation().unwrap().to_string(), "{ {~A}, {~B} }");
    }

    #[test]
    fn negation_edge_cases() {
        let top = ClauseSet::default();
        assert!(top.negation().unwrap().has_empty_clause());

        let bottom = ClauseSet::from_iter([CClause::new(), vec![lit('A', true)]]);
        assert!(bottom.negation().unwrap().is_empty());
    }

    #[test]
    fn without_tautologies() {
        let set = ClauseSet::from_iter([
            vec![lit('A', true), lit('A', false)],
            vec![lit('B', true)],
        ]);
        assert_eq!(set.without_tautologies().to_string(), "{ {B} }");
    }
}
