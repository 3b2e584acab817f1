/*!
A recursive descent parser, from a sequence of [tokens](crate::parse::lexer::Token) to a [formula](Formula).

The grammar, from loosest to tightest binding:

```none
formula   := iff
iff       := implies ( '<->' implies )*      left-associative
implies   := or ( '->' implies )?            right-associative
or        := and ( '|' and )*                left-associative
and       := unary ( '&' unary )*            left-associative
unary     := '~' unary | primary
primary   := VARIABLE | '(' formula ')'
```

So, `A <-> B <-> C` is `(A <-> B) <-> C` while `A -> B -> C` is `A -> (B -> C)`.

Parsing either returns a formula built from every token up to the terminating [End](TokenKind::End) token, or a single error.

```rust
# use clausal::parse::{lexer::tokenize, parser::parse};
# use clausal::structures::formula::Formula;
# use clausal::types::err::ParseError;
let formula = parse(&tokenize("A & B").unwrap()).unwrap();
assert_eq!(formula, Formula::and(Formula::prop('A'), Formula::prop('B')));

let error = parse(&tokenize("A &").unwrap()).unwrap_err();
assert_eq!(error, ParseError::ExpectedOperand(3));
```
*/

use crate::{
    misc::log::targets::{self},
    parse::lexer::{Token, TokenKind},
    structures::formula::{Binary, Formula},
    types::err::ParseError,
};

/// The greatest nesting of parentheses and operators accepted.
///
/// Past this, [NestingTooDeep](ParseError::NestingTooDeep) is returned, positioned at the token which exceeded the limit.
pub const MAX_DEPTH: usize = 512;

/// Parses `tokens` to a formula.
///
/// If `tokens` does not end with an [End](TokenKind::End) token, the end of the slice is treated as the end of input.
pub fn parse(tokens: &[Token]) -> Result<Formula, ParseError> {
    let mut parser = Parser {
        tokens,
        index: 0,
        depth: 0,
    };

    let Parsed { formula, .. } = parser.formula()?;

    let next = parser.peek();
    match next.kind {
        TokenKind::End => {
            log::trace!(target: targets::PARSER, "Parsed {formula}");
            Ok(formula)
        }
        TokenKind::RParen => Err(ParseError::UnbalancedParens(next.position)),
        _ => Err(ParseError::TrailingInput(next.position)),
    }
}

/// A formula, together with the count of operators on its longest branch.
struct Parsed {
    formula: Formula,
    height: usize,
}

struct Parser<'t> {
    tokens: &'t [Token<'t>],
    index: usize,

    /// The count of open parentheses, negations, and right operands of implications.
    depth: usize,
}

impl<'t> Parser<'t> {
    /// The current token, or an end token after the last token.
    fn peek(&self) -> Token<'t> {
        match self.tokens.get(self.index) {
            Some(token) => *token,
            None => {
                let position = self
                    .tokens
                    .last()
                    .map_or(0, |t| t.position + t.lexeme.chars().count());
                Token {
                    kind: TokenKind::End,
                    lexeme: "",
                    position,
                }
            }
        }
    }

    fn advance(&mut self) {
        if self.index < self.tokens.len() {
            self.index += 1;
        }
    }

    /// Consumes the current token if it is of kind `kind`, and returns the position of the token.
    fn eat(&mut self, kind: TokenKind) -> Option<usize> {
        let token = self.peek();
        match token.kind == kind {
            true => {
                self.advance();
                Some(token.position)
            }
            false => None,
        }
    }

    /// Notes a nested parse, at `position`.
    fn descend(&mut self, position: usize) -> Result<(), ParseError> {
        self.depth += 1;
        match self.depth > MAX_DEPTH {
            true => {
                log::trace!(target: targets::PARSER, "Nesting too deep at {position}");
                Err(ParseError::NestingTooDeep(position))
            }
            false => Ok(()),
        }
    }

    fn ascend(&mut self) {
        self.depth -= 1;
    }

    /// The binary formula of `op`, for an operator at `position`.
    fn binary(
        &self,
        op: Binary,
        left: Parsed,
        right: Parsed,
        position: usize,
    ) -> Result<Parsed, ParseError> {
        let height = left.height.max(right.height) + 1;
        match height > MAX_DEPTH {
            true => Err(ParseError::NestingTooDeep(position)),
            false => Ok(Parsed {
                formula: Formula::binary(op, left.formula, right.formula),
                height,
            }),
        }
    }

    fn formula(&mut self) -> Result<Parsed, ParseError> {
        self.iff()
    }

    fn iff(&mut self) -> Result<Parsed, ParseError> {
        let mut left = self.implies()?;
        while let Some(position) = self.eat(TokenKind::Iff) {
            let right = self.implies()?;
            left = self.binary(Binary::Iff, left, right, position)?;
        }
        Ok(left)
    }

    fn implies(&mut self) -> Result<Parsed, ParseError> {
        let left = self.or()?;
        match self.eat(TokenKind::Implies) {
            Some(position) => {
                self.descend(position)?;
                let right = self.implies()?;
                self.ascend();
                self.binary(Binary::Implies, left, right, position)
            }
            None => Ok(left),
        }
    }

    fn or(&mut self) -> Result<Parsed, ParseError> {
        let mut left = self.and()?;
        while let Some(position) = self.eat(TokenKind::Or) {
            let right = self.and()?;
            left = self.binary(Binary::Or, left, right, position)?;
        }
        Ok(left)
    }

    fn and(&mut self) -> Result<Parsed, ParseError> {
        let mut left = self.unary()?;
        while let Some(position) = self.eat(TokenKind::And) {
            let right = self.unary()?;
            left = self.binary(Binary::And, left, right, position)?;
        }
        Ok(left)
    }

    fn unary(&mut self) -> Result<Parsed, ParseError> {
        match self.eat(TokenKind::Not) {
            Some(position) => {
                self.descend(position)?;
                let Parsed { formula, height } = self.unary()?;
                self.ascend();
                match height + 1 > MAX_DEPTH {
                    true => Err(ParseError::NestingTooDeep(position)),
                    false => Ok(Parsed {
                        formula: Formula::not(formula),
                        height: height + 1,
                    }),
                }
            }
            None => self.primary(),
        }
    }

    fn primary(&mut self) -> Result<Parsed, ParseError> {
        let token = self.peek();
        match token.kind {
            TokenKind::Variable(variable) => {
                self.advance();
                Ok(Parsed {
                    formula: Formula::prop(variable),
                    height: 0,
                })
            }

            TokenKind::LParen => {
                self.advance();
                self.descend(token.position)?;
                let parsed = self.formula()?;
                self.ascend();
                let next = self.peek();
                match next.kind {
                    TokenKind::RParen => {
                        self.advance();
                        Ok(parsed)
                    }
                    TokenKind::End => Err(ParseError::UnbalancedParens(token.position)),
                    _ => Err(ParseError::TrailingInput(next.position)),
                }
            }

            _ => {
                log::trace!(target: targets::PARSER, "Expected operand, found {token}");
                Err(ParseError::ExpectedOperand(token.position))
            }
        }
    }
}
