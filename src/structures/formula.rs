/*!
Formulas, as trees.

A formula is one of:
- A proposition, i.e. a [variable](crate::structures::variable).
- A [unary](Unary) operation applied to a formula. The only unary operation is negation.
- A [binary](Binary) operation applied to a pair of formulas.

Each formula owns its parts, and so formulas are finite trees without shared parts.
Formulas are never revised in place, and [transformations](crate::transform) build new formulas.

```rust
# use clausal::structures::formula::{Binary, Formula};
# use clausal::structures::valuation::Valuation;
let formula = Formula::implies(Formula::prop('A'), Formula::prop('B'));

assert!(matches!(formula, Formula::BinaryOp(Binary::Implies, _, _)));
assert_eq!(formula.to_string(), "A -> B");
assert!(formula.evaluate(&Valuation::default()));
```
*/

use std::collections::BTreeSet;

use crate::structures::{valuation::Valuation, variable::Variable};

/// Unary operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Unary {
    /// Negation, '~'.
    Not,
}

/// Binary operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Binary {
    /// Conjunction, '&'.
    And,

    /// Disjunction, '|'.
    Or,

    /// Implication, '->'.
    Implies,

    /// Equivalence, '<->'.
    Iff,
}

/// A formula.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Formula {
    /// A proposition.
    Prop(Variable),

    /// A unary operation applied to a formula.
    UnaryOp(Unary, Box<Formula>),

    /// A binary operation applied to a (left, right) pair of formulas.
    BinaryOp(Binary, Box<Formula>, Box<Formula>),
}

impl Unary {
    /// The symbol used for the operation.
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Not => "~",
        }
    }
}

impl Binary {
    /// The symbol used for the operation.
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::And => "&",
            Self::Or => "|",
            Self::Implies => "->",
            Self::Iff => "<->",
        }
    }

    /// How tightly the operation binds, higher is tighter.
    pub fn precedence(&self) -> u8 {
        match self {
            Self::Iff => 1,
            Self::Implies => 2,
            Self::Or => 3,
            Self::And => 4,
        }
    }

    /// Whether chains of the operation group to the right.
    ///
    /// Implication is right-associative, all other operations are left-associative.
    pub fn is_right_associative(&self) -> bool {
        matches!(self, Self::Implies)
    }

    /// The value of the operation on a pair of values.
    pub fn apply(&self, left: bool, right: bool) -> bool {
        match self {
            Self::And => left && right,
            Self::Or => left || right,
            Self::Implies => !left || right,
            Self::Iff => left == right,
        }
    }
}

impl Formula {
    /// The proposition of `variable`.
    pub fn prop(variable: Variable) -> Self {
        Self::Prop(variable)
    }

    /// The negation of `formula`.
    #[allow(clippy::should_implement_trait)]
    pub fn not(formula: Formula) -> Self {
        Self::UnaryOp(Unary::Not, Box::new(formula))
    }

    /// The binary operation `op` applied to `left` and `right`.
    pub fn binary(op: Binary, left: Formula, right: Formula) -> Self {
        Self::BinaryOp(op, Box::new(left), Box::new(right))
    }

    /// The conjunction of `left` and `right`.
    pub fn and(left: Formula, right: Formula) -> Self {
        Self::binary(Binary::And, left, right)
    }

    /// The disjunction of `left` and `right`.
    pub fn or(left: Formula, right: Formula) -> Self {
        Self::binary(Binary::Or, left, right)
    }

    /// The implication from `left` to `right`.
    pub fn implies(left: Formula, right: Formula) -> Self {
        Self::binary(Binary::Implies, left, right)
    }

    /// The equivalence of `left` and `right`.
    pub fn iff(left: Formula, right: Formula) -> Self {
        Self::binary(Binary::Iff, left, right)
    }

    /// The variables of the formula, in order and without duplicates.
    pub fn variables(&self) -> BTreeSet<Variable> {
        let mut the_variables = BTreeSet::new();
        self.collect_variables(&mut the_variables);
        the_variables
    }

    fn collect_variables(&self, variables: &mut BTreeSet<Variable>) {
        match self {
            Self::Prop(v) => {
                variables.insert(*v);
            }
            Self::UnaryOp(_, child) => child.collect_variables(variables),
            Self::BinaryOp(_, left, right) => {
                left.collect_variables(variables);
                right.collect_variables(variables);
            }
        }
    }

    /// The value of the formula on a valuation.
    pub fn evaluate(&self, valuation: &Valuation) -> bool {
        match self {
            Self::Prop(v) => valuation.value_of(*v),
            Self::UnaryOp(Unary::Not, child) => !child.evaluate(valuation),
            Self::BinaryOp(op, left, right) => {
                op.apply(left.evaluate(valuation), right.evaluate(valuation))
            }
        }
    }

    /// Whether the formula is a proposition or the negation of a proposition.
    pub fn is_literal(&self) -> bool {
        match self {
            Self::Prop(_) => true,
            Self::UnaryOp(Unary::Not, child) => matches!(**child, Self::Prop(_)),
            Self::BinaryOp(..) => false,
        }
    }

    /// Whether the formula is a disjunction of literals.
    pub fn is_clause(&self) -> bool {
        match self {
            Self::BinaryOp(Binary::Or, left, right) => left.is_clause() && right.is_clause(),
            _ => self.is_literal(),
        }
    }

    /// Whether the formula is in conjunctive normal form, i.e. a conjunction of clauses.
    pub fn is_cnf(&self) -> bool {
        match self {
            Self::BinaryOp(Binary::And, left, right) => left.is_cnf() && right.is_cnf(),
            _ => self.is_clause(),
        }
    }
}

impl std::fmt::Display for Unary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl std::fmt::Display for Binary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl std::fmt::Display for Formula {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", crate::format::format(self, crate::format::Format::Plain))
    }
}
