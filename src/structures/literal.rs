//! Literals are variables paired with a (boolean) polarity.
//!
//! A literal with positive polarity is the variable itself, and a literal with negative polarity is the negation of the variable.
//!
//! ```rust
//! # use clausal::structures::literal::Literal;
//! let literal = Literal::new('P', true);
//!
//! assert!(literal.polarity());
//! assert_eq!(literal.variable(), 'P');
//! assert!(literal.negate().is_negated());
//!
//! assert!(literal.is_complementary(&Literal::new('P', false)));
//! assert_eq!(literal.negate().to_string(), "~P");
//! ```
//!
//! Literals are ordered by variable and then polarity, with the (Rust default) ordering of 'false' being (strictly) less than 'true'.
//! So, in a sorted clause `~P` comes before `P`, which comes before `~Q`.

use serde::Serialize;

use crate::structures::variable::Variable;

/// A variable paired with a polarity.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct Literal {
    /// The variable of the literal.
    variable: Variable,

    /// The polarity of the literal.
    polarity: bool,
}

impl Literal {
    /// A literal, specified by pairing a variable with a boolean.
    pub fn new(variable: Variable, polarity: bool) -> Self {
        Self { variable, polarity }
    }

    /// The negation of the literal.
    pub fn negate(&self) -> Self {
        Self {
            variable: self.variable,
            polarity: !self.polarity,
        }
    }

    /// The variable of the literal.
    pub fn variable(&self) -> Variable {
        self.variable
    }

    /// The polarity of the literal.
    pub fn polarity(&self) -> bool {
        self.polarity
    }

    /// Whether the literal is the negation of its variable.
    pub fn is_negated(&self) -> bool {
        !self.polarity
    }

    /// Whether the literal and `other` have the same variable and opposite polarity.
    pub fn is_complementary(&self, other: &Self) -> bool {
        self.variable == other.variable && self.polarity != other.polarity
    }
}

impl PartialOrd for Literal {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Literal {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        if self.variable == other.variable {
            self.polarity.cmp(&other.polarity)
        } else {
            self.variable.cmp(&other.variable)
        }
    }
}

impl PartialEq for Literal {
    fn eq(&self, other: &Self) -> bool {
        self.variable == other.variable && self.polarity == other.polarity
    }
}

impl Eq for Literal {}

impl std::hash::Hash for Literal {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.variable.hash(state);
        self.polarity.hash(state);
    }
}

impl std::fmt::Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.polarity {
            true => write!(f, "{}", self.variable),
            false => write!(f, "~{}", self.variable),
        }
    }
}
