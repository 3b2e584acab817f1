use clausal::{
    parse::{formula_from_str, lexer::tokenize, parser::parse},
    structures::formula::{Binary, Formula, Unary},
    transform::{clauses::extract_clauses, cnf::to_cnf},
    types::err::{ErrorKind, ParseError},
};

mod pipeline {
    use clausal::parse::lexer::TokenKind;

    use super::*;

    #[test]
    fn conjunction() {
        let tokens = tokenize("A&B").unwrap();
        let kinds = tokens.iter().map(|token| token.kind).collect::<Vec<_>>();
        assert_eq!(
            kinds,
            vec![
                TokenKind::Variable('A'),
                TokenKind::And,
                TokenKind::Variable('B'),
                TokenKind::End
            ]
        );

        let formula = parse(&tokens).unwrap();
        assert_eq!(
            formula,
            Formula::BinaryOp(
                Binary::And,
                Box::new(Formula::Prop('A')),
                Box::new(Formula::Prop('B'))
            )
        );
    }

    #[test]
    fn implication() {
        let cnf = to_cnf(&formula_from_str("A->B").unwrap());
        assert_eq!(
            cnf,
            Formula::BinaryOp(
                Binary::Or,
                Box::new(Formula::UnaryOp(Unary::Not, Box::new(Formula::Prop('A')))),
                Box::new(Formula::Prop('B'))
            )
        );
        assert_eq!(extract_clauses(&cnf).unwrap().to_string(), "{ {~A, B} }");
    }

    #[test]
    fn contradiction() {
        let cnf = to_cnf(&formula_from_str("(A&~A)").unwrap());
        assert_eq!(extract_clauses(&cnf).unwrap().to_string(), "{ {A}, {~A} }");
    }

    #[test]
    fn trailing_operator() {
        assert_eq!(
            formula_from_str("A&"),
            Err(ErrorKind::Parse(ParseError::ExpectedOperand(2)))
        );
    }
}

mod errors {
    use clausal::types::err::LexError;

    use super::*;

    #[test]
    fn every_illegal_character() {
        match formula_from_str("A & b | 2") {
            Err(ErrorKind::Lex(errors)) => assert_eq!(
                errors,
                vec![
                    LexError {
                        position: 4,
                        character: 'b'
                    },
                    LexError {
                        position: 8,
                        character: '2'
                    }
                ]
            ),
            other => panic!("Unexpected {other:?}"),
        }
    }

    #[test]
    fn unbalanced() {
        assert_eq!(
            formula_from_str("(A | B"),
            Err(ErrorKind::Parse(ParseError::UnbalancedParens(0)))
        );
        assert_eq!(
            formula_from_str("A | B)"),
            Err(ErrorKind::Parse(ParseError::UnbalancedParens(5)))
        );
    }

    #[test]
    fn messages() {
        let error = formula_from_str("A ? B").unwrap_err();
        assert_eq!(error.to_string(), "Invalid character '?' at position 2");

        let error = formula_from_str("A B").unwrap_err();
        assert_eq!(error.to_string(), "Unexpected input at position 2");
    }

    #[test]
    fn deep_nesting() {
        use clausal::parse::{clauses_from_str, parser::MAX_DEPTH};

        let parens = format!("{}A{}", "(".repeat(5_000), ")".repeat(5_000));
        let error = formula_from_str(&parens).unwrap_err();
        assert_eq!(error, ErrorKind::Parse(ParseError::NestingTooDeep(MAX_DEPTH)));
        assert_eq!(
            error.to_string(),
            format!("Nesting too deep at position {MAX_DEPTH}")
        );

        let negations = format!("{}A", "~".repeat(MAX_DEPTH));
        assert_eq!(clauses_from_str(&negations).unwrap().to_string(), "{ {A} }");
    }
}

mod clause_sets {
    use clausal::parse::clauses_from_str;

    #[test]
    fn equivalence() {
        let clauses = clauses_from_str("A <-> B").unwrap();
        assert_eq!(clauses.to_string(), "{ {~A, B}, {A, ~B} }");
    }

    #[test]
    fn negation_of_goal() {
        let goal = clauses_from_str("A -> B").unwrap();
        assert_eq!(goal.negation().unwrap().to_string(), "{ {A}, {~B} }");
    }
}
