/*!
Decisions by truth table, aka. enumeration of every valuation over the variables of some formulas.

The count of valuations is exponential in the count of variables, and so these procedures are intended for small formulas.
In particular, to check the results of [conversion](crate::transform::cnf) and [proof](crate::procedures::prove).

```rust
# use clausal::parse::formula_from_str;
# use clausal::procedures::truth_table::{entails, equivalent, satisfiable};
let premises = [formula_from_str("A -> B").unwrap(), formula_from_str("A").unwrap()];

assert!(entails(&premises, &formula_from_str("B").unwrap()));
assert!(!entails(&premises, &formula_from_str("~B").unwrap()));

assert!(equivalent(&formula_from_str("A -> B").unwrap(), &formula_from_str("~A | B").unwrap()));
assert!(!satisfiable(&formula_from_str("A & ~A").unwrap()));
```
*/

use std::collections::BTreeSet;

use crate::structures::{
    clause_set::ClauseSet, formula::Formula, valuation::Valuation, variable::Variable,
};

/// Whether `goal` is true on every valuation on which each of `premises` is true.
pub fn entails(premises: &[Formula], goal: &Formula) -> bool {
    let mut variables = goal.variables();
    for premise in premises {
        variables.extend(premise.variables());
    }

    every_valuation(&variables, |valuation| {
        !premises.iter().all(|premise| premise.evaluate(valuation)) || goal.evaluate(valuation)
    })
}

/// Whether `goal` is true on every valuation on which `premises` is true.
pub fn clauses_entail(premises: &ClauseSet, goal: &ClauseSet) -> bool {
    let mut variables = goal.variables();
    variables.extend(premises.variables());

    every_valuation(&variables, |valuation| {
        !premises.evaluate(valuation) || goal.evaluate(valuation)
    })
}

/// Whether `a` and `b` have the same value on every valuation.
pub fn equivalent(a: &Formula, b: &Formula) -> bool {
    let mut variables = a.variables();
    variables.extend(b.variables());

    every_valuation(&variables, |valuation| {
        a.evaluate(valuation) == b.evaluate(valuation)
    })
}

/// Whether `formula` is true on some valuation.
pub fn satisfiable(formula: &Formula) -> bool {
    !every_valuation(&formula.variables(), |valuation| {
        !formula.evaluate(valuation)
    })
}

/// Whether `property` holds of every valuation over `variables`.
fn every_valuation(variables: &BTreeSet<Variable>, property: impl Fn(&Valuation) -> bool) -> bool {
    let variables = variables.iter().copied().collect::<Vec<_>>();
    let holds = Valuation::all_over(&variables).all(|valuation| property(&valuation));
    holds
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::{clauses_from_str, formula_from_str};

    fn f(input: &str) -> Formula {
        formula_from_str(input).unwrap()
    }

    #[test]
    fn entailment() {
        assert!(entails(&[f("A & B")], &f("A")));
        assert!(!entails(&[f("A | B")], &f("A")));
        assert!(entails(&[], &f("A | ~A")));
        assert!(entails(&[f("A"), f("~A")], &f("B")));
    }

    #[test]
    fn clause_entailment() {
        let premises = clauses_from_str("(A -> B) & (B -> C)").unwrap();
        assert!(clauses_entail(&premises, &clauses_from_str("A -> C").unwrap()));
        assert!(!clauses_entail(&premises, &clauses_from_str("C -> A").unwrap()));
    }

    #[test]
    fn equivalence() {
        assert!(equivalent(&f("~(A & B)"), &f("~A | ~B")));
        assert!(equivalent(&f("A <-> B"), &f("(A -> B) & (B -> A)")));
        assert!(!equivalent(&f("A -> B"), &f("B -> A")));
    }

    #[test]
    fn satisfiability() {
        assert!(satisfiable(&f("A & ~B")));
        assert!(!satisfiable(&f("(A | B) & ~A & ~B")));
    }
}
