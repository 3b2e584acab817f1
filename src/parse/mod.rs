/*!
Tools for reading formulas from strings.

Reading is in two stages:
- The [lexer] turns a string into a sequence of tokens.
- The [parser] turns a sequence of tokens into a [formula](crate::structures::formula::Formula).

Each stage may be used on its own, though [formula_from_str] runs both stages and [clauses_from_str] further converts the formula to a [clause set](crate::structures::clause_set::ClauseSet).

```rust
# use clausal::parse::{clauses_from_str, formula_from_str};
# use clausal::types::err::{ErrorKind, ParseError};
assert!(formula_from_str("~(A & B)").is_ok());

assert_eq!(clauses_from_str("A -> B").unwrap().to_string(), "{ {~A, B} }");

assert!(matches!(formula_from_str("A & b"), Err(ErrorKind::Lex(_))));
assert_eq!(formula_from_str("A &"), Err(ErrorKind::Parse(ParseError::ExpectedOperand(3))));
```
*/

pub mod lexer;
pub mod parser;

use crate::{
    structures::{clause_set::ClauseSet, formula::Formula},
    transform::{clauses::extract_clauses, cnf::to_cnf},
    types::err::{self},
};

/// Tokenizes and parses `input`.
pub fn formula_from_str(input: &str) -> Result<Formula, err::ErrorKind> {
    let tokens = lexer::tokenize(input)?;
    let formula = parser::parse(&tokens)?;
    Ok(formula)
}

/// Tokenizes and parses `input`, and extracts the clauses of the formula in conjunctive normal form.
pub fn clauses_from_str(input: &str) -> Result<ClauseSet, err::ErrorKind> {
    let formula = formula_from_str(input)?;
    let clauses = extract_clauses(&to_cnf(&formula))?;
    Ok(clauses)
}
