//! Attempts a proof of a goal from the premises of a context, by resolution refutation.
//!
//! # Overview
//!
//! A goal follows from the premises exactly when the premises together with the negation of the goal are unsatisfiable.
//! And, a clause set is unsatisfiable exactly when the empty clause may be derived from the clause set by resolution.
//!
//! So, [prove](crate::context::Context::prove):
//!
//! 1. Negates the goal, as a [clause set](crate::structures::clause_set::ClauseSet::negation).
//! 2. Stores the premises, followed by the negated goal, in a fresh [clause database](crate::db::clause::ClauseDB).
//! 3. Derives resolvents until either:
//!    - The empty clause is derived, and the goal is [proved](crate::reports::Report::Proved).
//!    - Every pair of stored clauses has been examined without storing the empty clause, and the goal is [not proved](crate::reports::Report::NotProved).
//!
//! A resolvent is discarded if it is a tautology or if it is already stored.
//! Otherwise, the resolvent is stored after every other clause, and noted as a [step](crate::reports::ProofStep).
//!
//! # Selection
//!
//! Pairs of clauses are examined in a fixed order, and so the steps of a proof are the same across runs:
//!
//! ```rust,ignore
//! 'proof_loop: for j in 0.. {
//!     if j == clause_db.count() {
//!         break 'proof_loop ContextState::NotProved;
//!     }
//!     for i in 0..j {
//!         for pivot in clause[i].complementary_variables(clause[j]) {
//!             // resolve clause[i] and clause[j] on pivot
//!         }
//!     }
//! }
//! ```
//!
//! Every resolvent is stored at the end of the database, and so is paired with each earlier clause once the loop reaches the resolvent.
//! As there are finitely many clauses over the variables of the premises and goal, the loop always ends.
//!
//! Cancellation and the time limit are checked before each pair of clauses is examined.
//! If either applies, the attempt ends with the steps taken so far, and a report of [Cancelled](crate::reports::Report::Cancelled) or [TimeUp](crate::reports::Report::TimeUp).
//!
//! # Example
//!
//! ```rust
//! # use clausal::context::{CancelToken, Context};
//! # use clausal::reports::Report;
//! let mut the_context = Context::default();
//! the_context.add_premise_str("A -> B").unwrap();
//! the_context.add_premise_str("A").unwrap();
//!
//! let result = the_context.prove_str("B", &CancelToken::default()).unwrap();
//! assert_eq!(result.report, Report::Proved);
//!
//! let steps = result.log.iter().map(|step| step.to_string()).collect::<Vec<_>>();
//! assert_eq!(
//!     steps,
//!     vec![
//!         "{~A, B}, {A} -> {B}",
//!         "{~A, B}, {~B} -> {~A}",
//!         "{~B}, {B} -> {}",
//!     ]
//! );
//! ```

use std::time::{Duration, Instant};

use crate::{
    context::{CancelToken, Context, ContextState, Counters},
    db::{
        clause::{ClauseDB, ClauseSource},
        ClauseIndex, ClauseKey,
    },
    misc::log::targets::{self},
    parse::formula_from_str,
    reports::{ProofResult, ProofStep},
    structures::{
        clause::Clause,
        clause_set::ClauseSet,
        formula::Formula,
        variable::is_variable,
    },
    transform::{clauses::extract_clauses, cnf::to_cnf},
    types::err::{self},
};

impl Context {
    /// Attempts a proof of `goal` from the premises of the context.
    ///
    /// The attempt may be aborted by cancelling `cancel` (or some clone of `cancel`), or by the time limit of the context.
    ///
    /// On an error the state of the context is [Failed](ContextState::Failed), and the premises of the context are unchanged.
    pub fn prove(
        &mut self,
        goal: &ClauseSet,
        cancel: &CancelToken,
    ) -> Result<ProofResult, err::ErrorKind> {
        match self.attempt(goal, cancel) {
            Ok(result) => Ok(result),
            Err(e) => {
                log::error!(target: targets::RESOLUTION, "Proof attempt failed: {e}");
                self.state = ContextState::Failed(e.clone());
                Err(e)
            }
        }
    }

    /// Attempts a proof of `goal` (in conjunctive normal form) from the premises of the context.
    pub fn prove_formula(
        &mut self,
        goal: &Formula,
        cancel: &CancelToken,
    ) -> Result<ProofResult, err::ErrorKind> {
        let goal = extract_clauses(&to_cnf(goal))?;
        self.prove(&goal, cancel)
    }

    /// Parses `goal` and attempts a proof of the formula from the premises of the context.
    ///
    /// If `goal` cannot be parsed, no attempt is made and the state of the context is unchanged.
    pub fn prove_str(
        &mut self,
        goal: &str,
        cancel: &CancelToken,
    ) -> Result<ProofResult, err::ErrorKind> {
        let goal = formula_from_str(goal)?;
        self.prove_formula(&goal, cancel)
    }

    fn attempt(
        &mut self,
        goal: &ClauseSet,
        cancel: &CancelToken,
    ) -> Result<ProofResult, err::ErrorKind> {
        let total_time = Instant::now();
        self.counters = Counters::default();
        self.state = ContextState::Proving;

        if let Some(literal) = goal
            .iter()
            .flat_map(|clause| clause.literals())
            .find(|literal| !is_variable(literal.variable()))
        {
            return Err(err::ContextError::InvalidVariable(literal.variable()).into());
        }

        let negated_goal = goal.negation()?;
        log::info!(target: targets::RESOLUTION, "Goal {goal} negated to {negated_goal}");

        let mut clause_db = ClauseDB::default();
        let eliminate_tautologies = self.config.tautology_elimination.value;

        for (clauses, source) in [
            (&self.premises, ClauseSource::Premise),
            (&negated_goal, ClauseSource::Goal),
        ] {
            for clause in clauses {
                if eliminate_tautologies && clause.is_tautology() {
                    log::trace!(target: targets::RESOLUTION, "Eliminated {}", clause.as_string());
                    self.counters.tautologies += 1;
                    continue;
                }

                match clause_db.store(clause.clone(), source) {
                    Ok(_) | Err(err::ClauseDBError::Duplicate(_)) => {}
                    Err(e) => return Err(e.into()),
                }
            }
        }

        let mut log = Vec::new();

        self.state = match self.abort_check(cancel, total_time) {
            Some(aborted) => aborted,
            None => match clause_db.empty_clause() {
                Some(key) => {
                    let given = clause_db.get(&key)?;
                    log::info!(target: targets::RESOLUTION, "Empty clause {} given as {:?}", given.key(), given.source());
                    ContextState::Proved
                }
                None => self.resolve(&mut clause_db, &mut log, cancel, total_time)?,
            },
        };
        self.counters.time = total_time.elapsed();
        let report = self.report();

        log::info!(
            target: targets::RESOLUTION,
            "{report} after {} pairs and {} resolvents in {:?}",
            self.counters.pairs_examined,
            self.counters.resolvents,
            self.counters.time
        );

        Ok(ProofResult { report, log })
    }

    /// Resolves pairs of stored clauses, in order, until the empty clause is stored or every pair has been examined.
    ///
    /// Returns the state the attempt ends in.
    fn resolve(
        &mut self,
        clause_db: &mut ClauseDB,
        log: &mut Vec<ProofStep>,
        cancel: &CancelToken,
        total_time: Instant,
    ) -> Result<ContextState, err::ErrorKind> {
        let record_steps = self.config.record_steps.value;

        let mut j: ClauseIndex = 0;

        let state = 'proof_loop: loop {
            if j as usize >= clause_db.count() {
                log::info!(target: targets::RESOLUTION, "Saturated with {} clauses", clause_db.count());
                break 'proof_loop ContextState::NotProved;
            }

            let right_key = ClauseKey(j);

            for i in 0..j {
                if let Some(aborted) = self.abort_check(cancel, total_time) {
                    break 'proof_loop aborted;
                }
                self.counters.pairs_examined += 1;

                let left_key = ClauseKey(i);

                // Resolvents are built from borrowed clauses, as most pairs have no resolvent.
                let resolvents = {
                    let left = clause_db.get(&left_key)?.clause();
                    let right = clause_db.get(&right_key)?.clause();
                    left.complementary_variables(right)
                        .into_iter()
                        .map(|pivot| (pivot, left.resolve_on(right, pivot)))
                        .collect::<Vec<_>>()
                };

                for (pivot, resolvent) in resolvents {
                    if resolvent.is_tautology() {
                        log::trace!(target: targets::RESOLUTION, "Tautology {}", resolvent.as_string());
                        self.counters.tautologies += 1;
                        continue;
                    }

                    let source = ClauseSource::Resolution {
                        left: left_key,
                        right: right_key,
                        pivot,
                    };

                    let key = match clause_db.store(resolvent.clone(), source) {
                        Ok(key) => key,
                        Err(err::ClauseDBError::Duplicate(_)) => {
                            self.counters.duplicates += 1;
                            continue;
                        }
                        Err(e) => return Err(e.into()),
                    };
                    self.counters.resolvents += 1;

                    let step = ProofStep {
                        left: left_key,
                        right: right_key,
                        left_clause: clause_db.get(&left_key)?.clause().clone(),
                        right_clause: clause_db.get(&right_key)?.clause().clone(),
                        pivot,
                        key,
                        resolvent,
                    };
                    log::trace!(target: targets::RESOLUTION, "{key}: {step}");

                    self.make_callback_step(&step);

                    let refuted = step.resolvent.is_empty();
                    if record_steps {
                        log.push(step);
                    }

                    if refuted {
                        break 'proof_loop ContextState::Proved;
                    }
                }
            }

            j += 1;
        };

        Ok(state)
    }

    /// The state to abort in, if cancellation was requested or the time limit has passed.
    fn abort_check(&mut self, cancel: &CancelToken, total_time: Instant) -> Option<ContextState> {
        if cancel.is_cancelled() {
            log::info!(target: targets::RESOLUTION, "Cancelled");
            return Some(ContextState::Cancelled);
        }

        self.counters.time = total_time.elapsed();
        let time_limit: Option<Duration> = self.config.time_limit();
        if time_limit.is_some_and(|limit| self.counters.time > limit) {
            log::info!(target: targets::RESOLUTION, "Time limit reached");
            return Some(ContextState::TimeUp);
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        reports::Report,
        structures::{clause::CClause, literal::Literal},
    };

    #[test]
    fn contradiction_proves_anything() {
        let mut the_context = Context::default();
        the_context.add_premise_str("(A&~A)").unwrap();

        let result = the_context
            .prove_str("B", &CancelToken::default())
            .unwrap();
        assert_eq!(result.report, Report::Proved);
        assert_eq!(result.log.len(), 1);
        assert_eq!(result.log[0].to_string(), "{A}, {~A} -> {}");
        assert_eq!(result.log[0].pivot, 'A');
        assert_eq!(the_context.state, ContextState::Proved);
    }

    #[test]
    fn steps_carry_their_clauses() {
        let mut the_context = Context::default();
        the_context.add_premise_str("A -> B").unwrap();
        the_context.add_premise_str("A").unwrap();

        let result = the_context
            .prove_str("B", &CancelToken::default())
            .unwrap();
        assert!(result.proved());

        let first = &result.log[0];
        assert_eq!((first.left.index(), first.right.index()), (0, 1));
        assert_eq!(first.left_clause, vec![Literal::new('A', false), Literal::new('B', true)]);
        assert_eq!(first.right_clause, vec![Literal::new('A', true)]);
        assert_eq!(first.resolvent, vec![Literal::new('B', true)]);

        for step in &result.log {
            assert_eq!(
                step.left_clause.resolve_on(&step.right_clause, step.pivot),
                step.resolvent
            );
        }
    }

    #[test]
    fn report_follows_state() {
        let mut the_context = Context::default();
        the_context.add_premise_str("A -> B").unwrap();

        let result = the_context.prove_str("~A | B", &CancelToken::default()).unwrap();
        assert_eq!(the_context.state, ContextState::Proved);
        assert_eq!(result.report, the_context.report());

        let result = the_context.prove_str("A", &CancelToken::default()).unwrap();
        assert_eq!(the_context.state, ContextState::NotProved);
        assert_eq!(result.report, the_context.report());

        let token = CancelToken::default();
        token.cancel();
        let result = the_context.prove_str("A", &token).unwrap();
        assert_eq!(the_context.state, ContextState::Cancelled);
        assert_eq!(result.report, Report::Cancelled);
    }

    #[test]
    fn saturation() {
        let mut the_context = Context::default();
        the_context.add_premise_str("A").unwrap();

        let result = the_context
            .prove_str("B", &CancelToken::default())
            .unwrap();
        assert_eq!(result.report, Report::NotProved);
        assert!(result.log.is_empty());
        assert_eq!(the_context.counters.pairs_examined, 1);
    }

    #[test]
    fn given_empty_clause() {
        let mut the_context = Context::default();
        the_context
            .add_premise(ClauseSet::from_iter([CClause::new()]))
            .unwrap();

        let result = the_context
            .prove_str("A", &CancelToken::default())
            .unwrap();
        assert!(result.proved());
        assert!(result.log.is_empty());
    }

    #[test]
    fn tautological_resolvents_discarded() {
        let mut the_context = Context::default();
        the_context.add_premise_str("A | B").unwrap();
        the_context.add_premise_str("~A | ~B").unwrap();

        let result = the_context
            .prove_str("C", &CancelToken::default())
            .unwrap();
        assert_eq!(result.report, Report::NotProved);
        assert_eq!(the_context.counters.tautologies, 2);
        assert!(result.log.is_empty());
    }

    #[test]
    fn invalid_goal_fails() {
        let mut the_context = Context::default();
        let goal = ClauseSet::from_iter([vec![Literal::new('1', true)]]);

        let error = the_context.prove(&goal, &CancelToken::default());
        assert_eq!(
            error,
            Err(err::ErrorKind::Context(err::ContextError::InvalidVariable('1')))
        );
        assert!(matches!(the_context.state, ContextState::Failed(_)));
    }
}
