use clausal::{
    context::{CancelToken, Context},
    format::{format, Format},
    parse::formula_from_str,
    procedures::truth_table,
    structures::{
        clause::Clause,
        formula::{Binary, Formula},
        valuation::Valuation,
    },
    transform::{clauses::extract_clauses, cnf::to_cnf},
};

use rand::{rngs::StdRng, Rng, SeedableRng};

const VARIABLES: [char; 4] = ['A', 'B', 'C', 'D'];

/// A random formula over at most four variables, with at most `depth` nested operations.
fn random_formula(rng: &mut StdRng, depth: usize) -> Formula {
    if depth == 0 || rng.random_bool(0.25) {
        return Formula::prop(VARIABLES[rng.random_range(0..VARIABLES.len())]);
    }

    match rng.random_range(0..5) {
        0 => Formula::not(random_formula(rng, depth - 1)),
        op => {
            let op = match op {
                1 => Binary::And,
                2 => Binary::Or,
                3 => Binary::Implies,
                _ => Binary::Iff,
            };
            Formula::binary(
                op,
                random_formula(rng, depth - 1),
                random_formula(rng, depth - 1),
            )
        }
    }
}

mod cnf {
    use super::*;

    #[test]
    fn equivalent() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..250 {
            let formula = random_formula(&mut rng, 4);
            let cnf = to_cnf(&formula);
            assert!(truth_table::equivalent(&formula, &cnf), "{formula}");
        }
    }

    #[test]
    fn idempotent() {
        let mut rng = StdRng::seed_from_u64(2);
        for _ in 0..250 {
            let formula = random_formula(&mut rng, 4);
            let cnf = to_cnf(&formula);
            assert!(cnf.is_cnf(), "{formula}");
            assert_eq!(to_cnf(&cnf), cnf, "{formula}");
        }
    }

    #[test]
    fn clause_shape() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..250 {
            let formula = random_formula(&mut rng, 4);
            let variables = formula.variables();
            let clauses = extract_clauses(&to_cnf(&formula)).unwrap();

            for clause in &clauses {
                assert!(!clause.is_empty(), "{formula}");
                for literal in clause.literals() {
                    assert!(variables.contains(&literal.variable()), "{formula}");
                }
            }

            let over = variables.iter().copied().collect::<Vec<_>>();
            for valuation in Valuation::all_over(&over) {
                assert_eq!(
                    clauses.evaluate(&valuation),
                    formula.evaluate(&valuation),
                    "{formula} on {valuation}"
                );
            }
        }
    }
}

mod formats {
    use super::*;

    #[test]
    fn read_back() {
        let mut rng = StdRng::seed_from_u64(4);
        for _ in 0..250 {
            let formula = random_formula(&mut rng, 5);
            for the_format in [Format::Plain, Format::Nested] {
                let written = format(&formula, the_format);
                assert_eq!(formula_from_str(&written), Ok(formula.clone()), "{written}");
            }
        }
    }
}

mod resolution {
    use super::*;

    #[test]
    fn sound_and_complete() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut proved = 0;

        for _ in 0..120 {
            let premises = (0..rng.random_range(1..=3))
                .map(|_| random_formula(&mut rng, 3))
                .collect::<Vec<_>>();
            let goal = random_formula(&mut rng, 3);

            let mut ctx = Context::default();
            for premise in &premises {
                assert!(ctx.add_premise_formula(premise).is_ok());
            }

            let result = ctx.prove_formula(&goal, &CancelToken::default()).unwrap();
            let entailed = truth_table::entails(&premises, &goal);

            let description = premises
                .iter()
                .map(|premise| premise.to_string())
                .collect::<Vec<_>>()
                .join(", ");
            assert_eq!(result.proved(), entailed, "{description} |- {goal}");
            assert!(!result.report.is_aborted());

            if entailed {
                proved += 1;
            }
        }

        // Some attempts of each kind.
        assert!(proved > 0);
        assert!(proved < 120);
    }

    #[test]
    fn proof_ends_with_empty_clause() {
        let mut rng = StdRng::seed_from_u64(6);
        for _ in 0..60 {
            let premise = random_formula(&mut rng, 3);
            let goal = random_formula(&mut rng, 2);

            let mut ctx = Context::default();
            assert!(ctx.add_premise_formula(&premise).is_ok());
            let result = ctx.prove_formula(&goal, &CancelToken::default()).unwrap();

            if result.proved() {
                if let Some(last) = result.log.last() {
                    assert!(last.resolvent.is_empty());
                }
            } else {
                assert!(result.log.iter().all(|step| !step.resolvent.is_empty()));
            }
        }
    }
}
