use clap::Parser;

use clausal::{
    config::Config,
    context::{CancelToken, Context},
    format::format,
    parse::formula_from_str,
    procedures::truth_table,
    reports::{ProofStep, Report},
    structures::formula::Formula,
    transform::{clauses::extract_clauses, cnf::to_cnf},
    types::err::{self},
};

mod args;
mod misc;

use args::Args;
use misc::{exit_code, status, JsonReport};

fn main() {
    #[cfg(feature = "log")]
    env_logger::init();

    let args = Args::parse();

    let mut config = Config::default();
    if let Some(seconds) = args.time_limit {
        if let Err(e) = config
            .time_limit
            .set(std::time::Duration::from_secs(seconds))
        {
            println!("c {e}");
            std::process::exit(1);
        }
    }
    config.tautology_elimination.value = args.tautology_elimination;

    let mut ctx = Context::from_config(config);
    let the_format = args.format.into();
    let quiet = args.json;

    for (index, premise) in args.premise.iter().enumerate() {
        let formula = read_formula(premise, &format!("premise {index}"));
        let cnf = to_cnf(&formula);

        if !quiet {
            println!("c Premise {index}: {}", format(&formula, the_format));
            println!("c   cnf: {}", format(&cnf, the_format));
        }

        let clauses = match extract_clauses(&cnf) {
            Ok(clauses) => clauses,
            Err(e) => {
                println!("c {e}");
                std::process::exit(1);
            }
        };

        if !quiet {
            println!("c   clauses: {clauses}");
        }

        if let Err(e) = ctx.add_premise(clauses) {
            println!("c Error adding premise {index}: {e}");
            std::process::exit(1);
        }
    }

    let goal = match &args.goal {
        Some(goal) => read_formula(goal, "goal"),
        None => {
            if !quiet {
                println!("c No goal given");
            }
            std::process::exit(0);
        }
    };

    let goal_clauses = match extract_clauses(&to_cnf(&goal)) {
        Ok(clauses) => clauses,
        Err(e) => {
            println!("c {e}");
            std::process::exit(1);
        }
    };

    if !quiet {
        println!("c Goal: {}", format(&goal, the_format));
        println!("c   clauses: {goal_clauses}");

        ctx.set_callback_step(Box::new(|step: &ProofStep| println!("c {step}")));
    }

    let result = match ctx.prove(&goal_clauses, &CancelToken::default()) {
        Ok(result) => result,
        Err(e) => {
            println!("c Proof error: {e}");
            std::process::exit(1);
        }
    };

    let entailed = match args.check {
        true => Some(truth_table::clauses_entail(ctx.premises(), &goal_clauses)),
        false => None,
    };

    match quiet {
        true => {
            let report = JsonReport {
                premises: ctx.premises(),
                goal: &goal_clauses,
                result: &result,
                entailed,
            };
            match serde_json::to_string_pretty(&report) {
                Ok(json) => println!("{json}"),
                Err(e) => {
                    println!("c {e}");
                    std::process::exit(1);
                }
            }
        }

        false => {
            println!("c Pairs examined: {}", ctx.counters.pairs_examined);
            println!("c Resolvents: {}", ctx.counters.resolvents);
            println!("c Time: {:.2?}", ctx.counters.time);
            if let Some(entailed) = entailed {
                println!("c Entailed by truth table: {entailed}");
            }
            println!("s {}", status(result.report));
        }
    }

    if let Some(entailed) = entailed {
        let mismatch = match result.report {
            Report::Proved => !entailed,
            Report::NotProved => entailed,
            _ => false,
        };
        if mismatch {
            println!("c Truth table disagrees with the proof attempt");
            std::process::exit(1);
        }
    }

    std::process::exit(exit_code(result.report));
}

/// Parses `input`, or exits after noting any errors.
fn read_formula(input: &str, name: &str) -> Formula {
    match formula_from_str(input) {
        Ok(formula) => formula,
        Err(err::ErrorKind::Lex(errors)) => {
            for error in errors {
                println!("c Error in {name}: {error}");
            }
            std::process::exit(1);
        }
        Err(err::ErrorKind::Parse(error)) => {
            println!("c Error in {name}: {error}");
            println!("c   {input}");
            println!("c   {}^", " ".repeat(error.position()));
            std::process::exit(1);
        }
        Err(e) => {
            println!("c Error in {name}: {e}");
            std::process::exit(1);
        }
    }
}
