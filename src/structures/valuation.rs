/*!
Valuations, aka. assignments of a (boolean) value to each variable.

As there are only 26 variables, a valuation is stored as a bitmask, with bit *i* set exactly when the *i*th variable (counting from 'A') is true.

```rust
# use clausal::structures::valuation::Valuation;
let mut valuation = Valuation::default();
valuation.set('B', true);

assert!(valuation.value_of('B'));
assert!(!valuation.value_of('A'));

// Every valuation over A and B.
assert_eq!(Valuation::all_over(&['A', 'B']).count(), 4);
```
*/

use crate::structures::variable::{variable_index, Variable};

/// A total valuation, defaulting to false.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Valuation {
    bits: u32,
}

impl Valuation {
    /// The value of `variable`.
    ///
    /// Anything other than a variable is false.
    pub fn value_of(&self, variable: Variable) -> bool {
        match variable_index(variable) {
            Some(index) => self.bits & (1 << index) != 0,
            None => false,
        }
    }

    /// Sets the value of `variable`, if `variable` is a variable.
    pub fn set(&mut self, variable: Variable, value: bool) {
        if let Some(index) = variable_index(variable) {
            match value {
                true => self.bits |= 1 << index,
                false => self.bits &= !(1 << index),
            }
        }
    }

    /// An iterator over every valuation which differs from the default valuation only on `variables`.
    ///
    /// The iterator is over 2<sup>n</sup> valuations, for *n* the count of `variables`.
    pub fn all_over(variables: &[Variable]) -> impl Iterator<Item = Valuation> + '_ {
        let count: u64 = 1 << variables.len();
        (0..count).map(move |mask| {
            let mut valuation = Valuation::default();
            for (index, variable) in variables.iter().enumerate() {
                valuation.set(*variable, mask & (1 << index) != 0);
            }
            valuation
        })
    }
}

impl std::fmt::Display for Valuation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let true_variables = ('A'..='Z')
            .filter(|v| self.value_of(*v))
            .map(String::from)
            .collect::<Vec<_>>();
        write!(f, "{{{}}}", true_variables.join(", "))
    }
}
