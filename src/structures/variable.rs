/*!
Variables, aka. propositions.

Each variable is a single uppercase letter, from 'A' to 'Z'.
The grammar admits no longer identifiers, and so the language of any formula contains at most 26 variables.

```rust
# use clausal::structures::variable::{is_variable, variable_index};
assert!(is_variable('P'));
assert!(!is_variable('p'));
assert_eq!(variable_index('C'), Some(2));
```
*/

/// The representation of a variable.
pub type Variable = char;

/// Whether `character` is a variable.
pub fn is_variable(character: char) -> bool {
    character.is_ascii_uppercase()
}

/// The index of a variable, counting from 'A' as zero, if `variable` is a variable.
pub fn variable_index(variable: Variable) -> Option<usize> {
    match is_variable(variable) {
        true => Some(variable as usize - 'A' as usize),
        false => None,
    }
}
