/*!
The lexer, from a string to a sequence of [tokens](Token).

The input is scanned left to right, skipping whitespace:

| Input            | Token kind              |
|------------------|-------------------------|
| 'A' ..= 'Z'      | [Variable](TokenKind::Variable) |
| `~`              | [Not](TokenKind::Not)   |
| `&`              | [And](TokenKind::And)   |
| `\|`             | [Or](TokenKind::Or)     |
| `->`             | [Implies](TokenKind::Implies) |
| `<->`            | [Iff](TokenKind::Iff)   |
| `(`, `)`         | [LParen](TokenKind::LParen), [RParen](TokenKind::RParen) |

Any other character is an error, as is the first character of an incomplete symbol (e.g. a `-` not followed by `>`).
Errors do not stop the scan, and every error in the input is returned together.

On success, the sequence of tokens ends with an [End](TokenKind::End) token, positioned at the length of the input.

```rust
# use clausal::parse::lexer::{tokenize, TokenKind};
let tokens = tokenize("A & B").unwrap();
let kinds = tokens.iter().map(|token| token.kind).collect::<Vec<_>>();

assert_eq!(kinds, vec![TokenKind::Variable('A'), TokenKind::And, TokenKind::Variable('B'), TokenKind::End]);

let errors = tokenize("a & b").unwrap_err();
assert_eq!(errors.len(), 2);
assert_eq!((errors[1].position, errors[1].character), (4, 'b'));
```
*/

use crate::{
    misc::log::targets::{self},
    structures::variable::{is_variable, Variable},
    types::err::LexError,
};

/// Kinds of token.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenKind {
    Variable(Variable),
    Not,
    And,
    Or,
    Implies,
    Iff,
    LParen,
    RParen,
    End,
}

/// A token, together with the text it was read from and the (character) position of that text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub lexeme: &'a str,
    pub position: usize,
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Variable(v) => write!(f, "VARIABLE {v}"),
            Self::Not => write!(f, "NOT"),
            Self::And => write!(f, "AND"),
            Self::Or => write!(f, "OR"),
            Self::Implies => write!(f, "IMPLIES"),
            Self::Iff => write!(f, "IFF"),
            Self::LParen => write!(f, "LPAREN"),
            Self::RParen => write!(f, "RPAREN"),
            Self::End => write!(f, "END"),
        }
    }
}

impl std::fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}@{}", self.kind, self.position)
    }
}

/// Tokenizes `input`, or returns every illegal character found.
pub fn tokenize(input: &str) -> Result<Vec<Token<'_>>, Vec<LexError>> {
    // Characters, paired with their byte offset in the input.
    let characters = input.char_indices().collect::<Vec<_>>();

    // The byte offset of the character at `index`, or the length of the input.
    let offset = |index: usize| characters.get(index).map_or(input.len(), |(offset, _)| *offset);

    let mut tokens = Vec::new();
    let mut errors = Vec::new();

    let mut index = 0;
    while let Some(&(_, character)) = characters.get(index) {
        // The kind of token read, and the count of characters read.
        let read = match character {
            c if c.is_whitespace() => None,

            c if is_variable(c) => Some((TokenKind::Variable(c), 1)),

            '~' => Some((TokenKind::Not, 1)),
            '&' => Some((TokenKind::And, 1)),
            '|' => Some((TokenKind::Or, 1)),
            '(' => Some((TokenKind::LParen, 1)),
            ')' => Some((TokenKind::RParen, 1)),

            '-' if follows(&characters, index, "->") => Some((TokenKind::Implies, 2)),
            '<' if follows(&characters, index, "<->") => Some((TokenKind::Iff, 3)),

            _ => {
                log::trace!(target: targets::LEXER, "Invalid character '{character}' at {index}");
                errors.push(LexError {
                    position: index,
                    character,
                });
                None
            }
        };

        match read {
            Some((kind, length)) => {
                tokens.push(Token {
                    kind,
                    lexeme: &input[offset(index)..offset(index + length)],
                    position: index,
                });
                index += length;
            }
            None => index += 1,
        }
    }

    match errors.is_empty() {
        true => {
            tokens.push(Token {
                kind: TokenKind::End,
                lexeme: "",
                position: characters.len(),
            });
            log::trace!(target: targets::LEXER, "Tokenized {} tokens", tokens.len());
            Ok(tokens)
        }
        false => Err(errors),
    }
}

/// Whether `symbol` occurs in `characters` from `index`.
fn follows(characters: &[(usize, char)], index: usize, symbol: &str) -> bool {
    let mut offset = index;
    for expected in symbol.chars() {
        match characters.get(offset) {
            Some((_, found)) if *found == expected => offset += 1,
            _ => return false,
        }
    }
    true
}
