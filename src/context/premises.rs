use crate::{
    misc::log::targets::{self},
    parse::formula_from_str,
    structures::{clause::Clause, clause_set::ClauseSet, formula::Formula, variable::is_variable},
    transform::{clauses::extract_clauses, cnf::to_cnf},
    types::err::{self},
};

use super::{Context, ContextState, Counters};

impl Context {
    /// Adds the clauses of `premise` to the premises of the context, returning the count of clauses which were not already premises.
    ///
    /// If any clause contains something other than a variable, no clause is added and an error is returned.
    ///
    /// ```rust
    /// # use clausal::context::Context;
    /// # use clausal::parse::clauses_from_str;
    /// let mut the_context = Context::default();
    ///
    /// assert_eq!(the_context.add_premise(clauses_from_str("A & B").unwrap()), Ok(2));
    /// assert_eq!(the_context.add_premise(clauses_from_str("B & C").unwrap()), Ok(1));
    /// assert_eq!(the_context.premises().len(), 3);
    /// ```
    pub fn add_premise(&mut self, premise: ClauseSet) -> Result<usize, err::ErrorKind> {
        for clause in &premise {
            if let Some(literal) = clause.literals().find(|l| !is_variable(l.variable())) {
                log::error!(target: targets::CONTEXT, "Premise with invalid variable: {literal}");
                return Err(err::ContextError::InvalidVariable(literal.variable()).into());
            }
        }

        let fresh = self.premises.extend_from(&premise);
        log::info!(target: targets::CONTEXT, "Added premise {premise}, with {fresh} fresh clauses");

        self.state = match self.premises.is_empty() {
            true => ContextState::Idle,
            false => ContextState::HasPremises,
        };
        Ok(fresh)
    }

    /// Adds the clauses of `formula` (in conjunctive normal form) to the premises of the context.
    pub fn add_premise_formula(&mut self, formula: &Formula) -> Result<usize, err::ErrorKind> {
        let premise = extract_clauses(&to_cnf(formula))?;
        self.add_premise(premise)
    }

    /// Parses `premise` and adds the clauses of the formula (in conjunctive normal form) to the premises of the context.
    ///
    /// If `premise` cannot be parsed, the premises of the context are unchanged.
    pub fn add_premise_str(&mut self, premise: &str) -> Result<usize, err::ErrorKind> {
        let formula = formula_from_str(premise)?;
        self.add_premise_formula(&formula)
    }

    /// Removes all premises and returns the context to [Idle](ContextState::Idle).
    ///
    /// Configuration and callbacks are kept.
    pub fn clear(&mut self) {
        log::info!(target: targets::CONTEXT, "Cleared");
        self.premises = ClauseSet::default();
        self.counters = Counters::default();
        self.state = ContextState::Idle;
    }
}
