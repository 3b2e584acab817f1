/*!
Extraction of [clauses](crate::structures::clause) from a formula in conjunctive normal form.

The conjuncts of the formula are found by walking through the conjunctions at the top of the formula, and the literals of each conjunct by walking through the disjunctions of the conjunct.

Any other shape is a [MalformedCNF](err::CNFError::MalformedCNF) error.
As formulas are [converted](crate::transform::cnf::to_cnf) before extraction, such an error indicates a defect in conversion rather than an issue with the input.

```rust
# use clausal::parse::formula_from_str;
# use clausal::transform::{clauses::extract_clauses, cnf::to_cnf};
# use clausal::types::err::CNFError;
let cnf = to_cnf(&formula_from_str("(A & ~A)").unwrap());
assert_eq!(extract_clauses(&cnf).unwrap().to_string(), "{ {A}, {~A} }");

let not_cnf = formula_from_str("A -> B").unwrap();
assert_eq!(extract_clauses(&not_cnf), Err(CNFError::MalformedCNF));
```
*/

use crate::{
    misc::log::targets::{self},
    structures::{
        clause::CClause,
        clause_set::ClauseSet,
        formula::{Binary, Formula, Unary},
        literal::Literal,
    },
    types::err::{self},
};

/// The clauses of a formula in conjunctive normal form, in order from left to right.
pub fn extract_clauses(formula: &Formula) -> Result<ClauseSet, err::CNFError> {
    let mut conjuncts = Vec::new();
    collect_conjuncts(formula, &mut conjuncts);

    let mut the_clauses = ClauseSet::default();
    for conjunct in conjuncts {
        let mut clause = CClause::new();
        collect_literals(conjunct, &mut clause)?;
        the_clauses.insert(clause);
    }
    Ok(the_clauses)
}

fn collect_conjuncts<'f>(formula: &'f Formula, conjuncts: &mut Vec<&'f Formula>) {
    match formula {
        Formula::BinaryOp(Binary::And, left, right) => {
            collect_conjuncts(left, conjuncts);
            collect_conjuncts(right, conjuncts);
        }
        _ => conjuncts.push(formula),
    }
}

fn collect_literals(formula: &Formula, clause: &mut CClause) -> Result<(), err::CNFError> {
    match formula {
        Formula::Prop(v) => clause.push(Literal::new(*v, true)),

        Formula::UnaryOp(Unary::Not, child) => match **child {
            Formula::Prop(v) => clause.push(Literal::new(v, false)),
            _ => {
                log::error!(target: targets::CNF, "Negation of a compound formula: {formula}");
                return Err(err::CNFError::MalformedCNF);
            }
        },

        Formula::BinaryOp(Binary::Or, left, right) => {
            collect_literals(left, clause)?;
            collect_literals(right, clause)?;
        }

        Formula::BinaryOp(_, _, _) => {
            log::error!(target: targets::CNF, "Operator inside a clause: {formula}");
            return Err(err::CNFError::MalformedCNF);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{parse::formula_from_str, transform::cnf::to_cnf};

    fn clauses(input: &str) -> String {
        extract_clauses(&to_cnf(&formula_from_str(input).unwrap()))
            .unwrap()
            .to_string()
    }

    #[test]
    fn implication() {
        assert_eq!(clauses("A->B"), "{ {~A, B} }");
    }

    #[test]
    fn literals_are_ordered() {
        assert_eq!(clauses("C | ~A | B"), "{ {~A, B, C} }");
    }

    #[test]
    fn duplicate_literals_collapse() {
        assert_eq!(clauses("A | B | A"), "{ {A, B} }");
    }

    #[test]
    fn duplicate_clauses_dropped() {
        assert_eq!(clauses("(A | B) & C & (B | A)"), "{ {A, B}, {C} }");
    }

    #[test]
    fn tautologies_kept() {
        assert_eq!(clauses("A | ~A"), "{ {~A, A} }");
    }

    #[test]
    fn malformed() {
        let and_in_or = Formula::or(
            Formula::prop('A'),
            Formula::and(Formula::prop('B'), Formula::prop('C')),
        );
        assert_eq!(extract_clauses(&and_in_or), Err(err::CNFError::MalformedCNF));

        let double_negation = Formula::not(Formula::not(Formula::prop('A')));
        assert_eq!(
            extract_clauses(&double_negation),
            Err(err::CNFError::MalformedCNF)
        );

        let equivalence = Formula::iff(Formula::prop('A'), Formula::prop('B'));
        assert_eq!(extract_clauses(&equivalence), Err(err::CNFError::MalformedCNF));
    }
}
