/*!
Formulas as text.

Two formats are supported:

- [Plain](Format::Plain), infix notation with the fewest parentheses needed to read the formula back as the same tree.
  Binary operators are written with a space on either side, and negation is written directly before its operand.
- [Nested](Format::Nested), infix notation with every negation and binary operation in parentheses, so the structure of the formula is explicit.

Both formats use the same symbols as the [lexer](crate::parse::lexer), and so any formatted formula may be parsed to the same formula.

```rust
# use clausal::format::{format, Format};
# use clausal::parse::formula_from_str;
let formula = formula_from_str("~(A | B) & C -> D").unwrap();

assert_eq!(format(&formula, Format::Plain), "~(A | B) & C -> D");
assert_eq!(format(&formula, Format::Nested), "(((~(A | B)) & C) -> D)");
```

The plain format of a formula is also its [Display](std::fmt::Display).
*/

use crate::structures::formula::{Binary, Formula};

/// Formats for writing a formula.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Format {
    /// Minimal parentheses.
    #[default]
    Plain,

    /// Full parentheses.
    Nested,
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Plain => write!(f, "plain"),
            Self::Nested => write!(f, "nested"),
        }
    }
}

/// The formula as a string, in the given format.
pub fn format(formula: &Formula, format: Format) -> String {
    let mut the_string = String::new();
    match format {
        Format::Plain => write_plain(formula, &mut the_string),
        Format::Nested => write_nested(formula, &mut the_string),
    }
    the_string
}

fn write_plain(formula: &Formula, out: &mut String) {
    match formula {
        Formula::Prop(v) => out.push(*v),

        Formula::UnaryOp(op, child) => {
            out.push_str(op.symbol());
            let parens = matches!(**child, Formula::BinaryOp(..));
            write_plain_grouped(child, parens, out);
        }

        Formula::BinaryOp(op, left, right) => {
            write_plain_grouped(left, needs_parens(op, left, Side::Left), out);
            out.push(' ');
            out.push_str(op.symbol());
            out.push(' ');
            write_plain_grouped(right, needs_parens(op, right, Side::Right), out);
        }
    }
}

fn write_plain_grouped(formula: &Formula, parens: bool, out: &mut String) {
    if parens {
        out.push('(');
        write_plain(formula, out);
        out.push(')');
    } else {
        write_plain(formula, out);
    }
}

enum Side {
    Left,
    Right,
}

/// Whether the operand on `side` of a binary operation `op` must be written in parentheses.
///
/// Operands which bind more loosely than `op` always require parentheses.
/// An operand with the same operation as `op` requires parentheses only if written on the side opposite to that in which `op` groups.
fn needs_parens(op: &Binary, operand: &Formula, side: Side) -> bool {
    match operand {
        Formula::BinaryOp(operand_op, _, _) => {
            match operand_op.precedence().cmp(&op.precedence()) {
                std::cmp::Ordering::Less => true,
                std::cmp::Ordering::Greater => false,
                std::cmp::Ordering::Equal => match side {
                    Side::Left => op.is_right_associative(),
                    Side::Right => !op.is_right_associative(),
                },
            }
        }
        _ => false,
    }
}

fn write_nested(formula: &Formula, out: &mut String) {
    match formula {
        Formula::Prop(v) => out.push(*v),

        Formula::UnaryOp(op, child) => {
            out.push('(');
            out.push_str(op.symbol());
            write_nested(child, out);
            out.push(')');
        }

        Formula::BinaryOp(op, left, right) => {
            out.push('(');
            write_nested(left, out);
            out.push(' ');
            out.push_str(op.symbol());
            out.push(' ');
            write_nested(right, out);
            out.push(')');
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::formula_from_str;

    fn plain(input: &str) -> String {
        format(&formula_from_str(input).unwrap(), Format::Plain)
    }

    fn nested(input: &str) -> String {
        format(&formula_from_str(input).unwrap(), Format::Nested)
    }

    #[test]
    fn plain_spacing() {
        assert_eq!(plain("A&B"), "A & B");
        assert_eq!(plain("~  A"), "~A");
        assert_eq!(plain("A<->B"), "A <-> B");
    }

    #[test]
    fn plain_drops_redundant_parentheses() {
        assert_eq!(plain("((A))"), "A");
        assert_eq!(plain("(A & B) | C"), "A & B | C");
        assert_eq!(plain("A -> (B -> C)"), "A -> B -> C");
        assert_eq!(plain("(A <-> B) <-> C"), "A <-> B <-> C");
        assert_eq!(plain("(A & B) & C"), "A & B & C");
    }

    #[test]
    fn plain_keeps_required_parentheses() {
        assert_eq!(plain("(A | B) & C"), "(A | B) & C");
        assert_eq!(plain("(A -> B) -> C"), "(A -> B) -> C");
        assert_eq!(plain("A <-> (B <-> C)"), "A <-> (B <-> C)");
        assert_eq!(plain("A & (B & C)"), "A & (B & C)");
        assert_eq!(plain("~(A & B)"), "~(A & B)");
        assert_eq!(plain("~~A"), "~~A");
    }

    #[test]
    fn nested_brackets_everything() {
        assert_eq!(nested("A"), "A");
        assert_eq!(nested("~A"), "(~A)");
        assert_eq!(nested("A & B | C"), "((A & B) | C)");
        assert_eq!(nested("A -> B -> C"), "(A -> (B -> C))");
    }

    #[test]
    fn formats_read_back() {
        for input in [
            "A",
            "~~A",
            "A & B | C & D",
            "(A | B) & (C | D)",
            "A -> (B -> C) -> D",
            "((A -> B) -> C) -> D",
            "A <-> (B <-> ~C)",
            "~(A <-> B) | ~(C -> D)",
        ] {
            let formula = formula_from_str(input).unwrap();
            for the_format in [Format::Plain, Format::Nested] {
                let written = format(&formula, the_format);
                assert_eq!(formula_from_str(&written), Ok(formula.clone()), "{written}");
            }
        }
    }
}
