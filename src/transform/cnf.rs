/*!
Conversion of a formula to an equivalent formula in conjunctive normal form.

The conversion is a fixed sequence of passes, each of which builds a new formula:

1. [eliminate_iff]: `P <-> Q` to `(P -> Q) & (Q -> P)`.
2. [eliminate_implies]: `P -> Q` to `~P | Q`.
3. [push_negation]: `~(P & Q)` to `~P | ~Q`, `~(P | Q)` to `~P & ~Q`, and `~~P` to `P`.
4. [distribute]: `P | (Q & R)` to `(P | Q) & (P | R)`, and `(Q & R) | P` to `(Q | P) & (R | P)`.

Each pass relies on the previous passes:
- After the first pass, no equivalence remains, so the second pass leaves only negation, conjunction, and disjunction.
- After the third pass negation applies only to propositions, so distribution over the conjunctions of the formula gives a conjunction of clauses.

Every formula has a form in conjunctive normal form, so conversion never fails.
Though, note distribution may give a formula exponentially larger than the original formula.

Conversion of a formula already in conjunctive normal form returns the same formula.

```rust
# use clausal::parse::formula_from_str;
# use clausal::transform::cnf::to_cnf;
# use clausal::structures::formula::Formula;
let formula = formula_from_str("A -> B").unwrap();
let expected = Formula::or(Formula::not(Formula::prop('A')), Formula::prop('B'));
assert_eq!(to_cnf(&formula), expected);

let cnf = to_cnf(&formula_from_str("~(A & (B | ~C))").unwrap());
assert_eq!(cnf.to_string(), "(~A | ~B) & (~A | C)");
assert_eq!(to_cnf(&cnf), cnf);
```
*/

use crate::{
    misc::log::targets::{self},
    structures::formula::{Binary, Formula, Unary},
};

/// The formula in conjunctive normal form.
pub fn to_cnf(formula: &Formula) -> Formula {
    let without_iff = eliminate_iff(formula);
    let without_implies = eliminate_implies(&without_iff);
    let nnf = push_negation(&without_implies);
    let cnf = distribute(nnf);

    log::trace!(target: targets::CNF, "{formula} in cnf is {cnf}");
    cnf
}

/// The formula with every equivalence replaced by a conjunction of implications.
pub fn eliminate_iff(formula: &Formula) -> Formula {
    match formula {
        Formula::Prop(v) => Formula::Prop(*v),

        Formula::UnaryOp(op, child) => Formula::UnaryOp(*op, Box::new(eliminate_iff(child))),

        Formula::BinaryOp(Binary::Iff, left, right) => {
            let left = eliminate_iff(left);
            let right = eliminate_iff(right);
            Formula::and(
                Formula::implies(left.clone(), right.clone()),
                Formula::implies(right, left),
            )
        }

        Formula::BinaryOp(op, left, right) => {
            Formula::binary(*op, eliminate_iff(left), eliminate_iff(right))
        }
    }
}

/// The formula with every implication replaced by a disjunction.
///
/// Equivalences are untouched, and so should be eliminated first.
pub fn eliminate_implies(formula: &Formula) -> Formula {
    match formula {
        Formula::Prop(v) => Formula::Prop(*v),

        Formula::UnaryOp(op, child) => {
            Formula::UnaryOp(*op, Box::new(eliminate_implies(child)))
        }

        Formula::BinaryOp(Binary::Implies, left, right) => Formula::or(
            Formula::not(eliminate_implies(left)),
            eliminate_implies(right),
        ),

        Formula::BinaryOp(op, left, right) => {
            Formula::binary(*op, eliminate_implies(left), eliminate_implies(right))
        }
    }
}

/// The formula with negation applied only to propositions.
///
/// Implications and equivalences are treated as opaque, and so should be eliminated first.
pub fn push_negation(formula: &Formula) -> Formula {
    match formula {
        Formula::Prop(v) => Formula::Prop(*v),

        Formula::UnaryOp(Unary::Not, child) => negate(child),

        Formula::BinaryOp(op, left, right) => {
            Formula::binary(*op, push_negation(left), push_negation(right))
        }
    }
}

/// The negation of `formula`, with negation applied only to propositions.
fn negate(formula: &Formula) -> Formula {
    match formula {
        Formula::Prop(v) => Formula::not(Formula::Prop(*v)),

        Formula::UnaryOp(Unary::Not, child) => push_negation(child),

        Formula::BinaryOp(Binary::And, left, right) => Formula::or(negate(left), negate(right)),

        Formula::BinaryOp(Binary::Or, left, right) => Formula::and(negate(left), negate(right)),

        Formula::BinaryOp(op @ (Binary::Implies | Binary::Iff), left, right) => {
            log::warn!(target: targets::CNF, "Negation over {op} before elimination");
            Formula::not(Formula::binary(*op, push_negation(left), push_negation(right)))
        }
    }
}

/// The formula with disjunction distributed over conjunction.
///
/// The formula should contain only conjunction, disjunction, and negated propositions.
pub fn distribute(formula: Formula) -> Formula {
    match formula {
        Formula::BinaryOp(Binary::And, left, right) => {
            Formula::and(distribute(*left), distribute(*right))
        }

        Formula::BinaryOp(Binary::Or, left, right) => {
            distribute_or(distribute(*left), distribute(*right))
        }

        other => other,
    }
}

/// The disjunction of two formulas in conjunctive normal form, in conjunctive normal form.
fn distribute_or(left: Formula, right: Formula) -> Formula {
    match (left, right) {
        (Formula::BinaryOp(Binary::And, a, b), right) => Formula::and(
            distribute_or(*a, right.clone()),
            distribute_or(*b, right),
        ),

        (left, Formula::BinaryOp(Binary::And, a, b)) => Formula::and(
            distribute_or(left.clone(), *a),
            distribute_or(left, *b),
        ),

        (left, right) => Formula::or(left, right),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::formula_from_str;

    fn cnf(input: &str) -> String {
        to_cnf(&formula_from_str(input).unwrap()).to_string()
    }

    #[test]
    fn implication() {
        assert_eq!(cnf("A -> B"), "~A | B");
    }

    #[test]
    fn equivalence() {
        assert_eq!(cnf("A <-> B"), "(~A | B) & (~B | A)");
    }

    #[test]
    fn de_morgan() {
        assert_eq!(cnf("~(A & B)"), "~A | ~B");
        assert_eq!(cnf("~(A | B)"), "~A & ~B");
        assert_eq!(cnf("~~~A"), "~A");
    }

    #[test]
    fn negated_implication() {
        assert_eq!(cnf("~(A -> B)"), "A & ~B");
    }

    #[test]
    fn distribution() {
        assert_eq!(cnf("A | (B & C)"), "(A | B) & (A | C)");
        assert_eq!(cnf("(B & C) | A"), "(B | A) & (C | A)");
        assert_eq!(
            cnf("(A & B) | (C & D)"),
            "(A | C) & (A | D) & ((B | C) & (B | D))"
        );
    }

    #[test]
    fn passes_in_order() {
        let formula = formula_from_str("A <-> ~B").unwrap();

        let without_iff = eliminate_iff(&formula);
        assert_eq!(without_iff.to_string(), "(A -> ~B) & (~B -> A)");

        let without_implies = eliminate_implies(&without_iff);
        assert_eq!(without_implies.to_string(), "(~A | ~B) & (~~B | A)");

        let nnf = push_negation(&without_implies);
        assert_eq!(nnf.to_string(), "(~A | ~B) & (B | A)");

        assert_eq!(distribute(nnf.clone()), nnf);
    }

    #[test]
    fn contradiction() {
        assert_eq!(cnf("(A&~A)"), "A & ~A");
    }

    #[test]
    fn idempotent() {
        for input in [
            "A",
            "~A",
            "A -> B -> C",
            "(A <-> B) <-> C",
            "~((A | B) & (C -> ~D))",
            "(A & B) | (C & D) | (A & ~C)",
        ] {
            let once = to_cnf(&formula_from_str(input).unwrap());
            assert!(once.is_cnf(), "{input}");
            assert_eq!(to_cnf(&once), once, "{input}");
        }
    }
}
