/*!
A database of the clauses of a proof attempt.

Clauses are stored in order, and are never removed or revised.
So, the [key](ClauseKey) of a clause is fixed for the duration of a proof attempt, and the order of keys is the order in which clauses were stored.

Each clause is stored in [canonical](crate::structures::clause::Clause::canonical) form, and a clause is stored at most once.
An attempt to store a clause already in the database returns the key of the stored clause as an error.

```rust
# use clausal::db::clause::{ClauseDB, ClauseSource};
# use clausal::structures::literal::Literal;
# use clausal::types::err::ClauseDBError;
let mut clause_db = ClauseDB::default();

let p = clause_db.store(vec![Literal::new('P', true)], ClauseSource::Premise).unwrap();
let not_p = clause_db.store(vec![Literal::new('P', false)], ClauseSource::Goal).unwrap();

assert_eq!(clause_db.store(vec![Literal::new('P', true)], ClauseSource::Premise), Err(ClauseDBError::Duplicate(p)));
assert_eq!(clause_db.count(), 2);
assert!(clause_db.get(&not_p).is_ok());
```
*/

use std::collections::HashMap;

use serde::Serialize;

use crate::{
    db::keys::{ClauseIndex, ClauseKey},
    misc::log::targets::{self},
    structures::{
        clause::{CClause, Clause},
        variable::Variable,
    },
    types::err::{self},
};

/// The source of a clause.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ClauseSource {
    /// A clause from the premises.
    Premise,

    /// A clause from the negation of the goal.
    Goal,

    /// The resolvent of two stored clauses on a variable.
    Resolution {
        left: ClauseKey,
        right: ClauseKey,
        pivot: Variable,
    },
}

/// A clause, together with its key and source.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DBClause {
    key: ClauseKey,
    clause: CClause,
    source: ClauseSource,
}

impl DBClause {
    pub fn key(&self) -> ClauseKey {
        self.key
    }

    pub fn clause(&self) -> &CClause {
        &self.clause
    }

    pub fn source(&self) -> ClauseSource {
        self.source
    }
}

/// A database of clauses.
///
/// Fields of the database are private to ensure clauses are stored only through [store](ClauseDB::store).
#[derive(Debug, Default)]
pub struct ClauseDB {
    /// Clauses in order of storage, so the index of a clause is the index of its key.
    clauses: Vec<DBClause>,

    /// A map from the canonical form of each stored clause to its key.
    keys: HashMap<CClause, ClauseKey>,
}

impl ClauseDB {
    /// Stores `clause`, in canonical form, and returns the key of the clause.
    ///
    /// If the clause is already stored, the clause is not stored again and the key of the stored clause is returned as an error.
    pub fn store(
        &mut self,
        clause: CClause,
        source: ClauseSource,
    ) -> Result<ClauseKey, err::ClauseDBError> {
        let clause = clause.canonical();

        if let Some(key) = self.keys.get(&clause) {
            log::trace!(target: targets::CLAUSE_DB, "{} already stored as {key}", clause.as_string());
            return Err(err::ClauseDBError::Duplicate(*key));
        }

        let index = match ClauseIndex::try_from(self.clauses.len()) {
            Ok(index) => index,
            Err(_) => {
                log::error!(target: targets::CLAUSE_DB, "Clause keys exhausted");
                return Err(err::ClauseDBError::StorageExhausted);
            }
        };
        let key = ClauseKey(index);

        log::trace!(target: targets::CLAUSE_DB, "Stored {} as {key}", clause.as_string());

        self.keys.insert(clause.clone(), key);
        self.clauses.push(DBClause {
            key,
            clause,
            source,
        });

        Ok(key)
    }

    /// The stored clause with key `key`.
    pub fn get(&self, key: &ClauseKey) -> Result<&DBClause, err::ClauseDBError> {
        match self.clauses.get(key.index()) {
            Some(stored) => Ok(stored),
            None => {
                log::error!(target: targets::CLAUSE_DB, "Missing clause {key}");
                Err(err::ClauseDBError::Missing)
            }
        }
    }

    /// A count of stored clauses.
    pub fn count(&self) -> usize {
        self.clauses.len()
    }

    /// The key of the first stored empty clause, if any.
    pub fn empty_clause(&self) -> Option<ClauseKey> {
        self.keys.get(&CClause::new()).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structures::literal::Literal;

    #[test]
    fn keys_in_order() {
        let mut clause_db = ClauseDB::default();
        let a = clause_db
            .store(vec![Literal::new('A', true)], ClauseSource::Premise)
            .unwrap();
        let b = clause_db
            .store(vec![Literal::new('B', true)], ClauseSource::Premise)
            .unwrap();
        assert!(a < b);
        assert_eq!(a.index(), 0);
        assert_eq!(b.to_string(), "#1");
    }

    #[test]
    fn duplicates_by_canonical_form() {
        let mut clause_db = ClauseDB::default();
        let key = clause_db
            .store(
                vec![Literal::new('B', true), Literal::new('A', false)],
                ClauseSource::Premise,
            )
            .unwrap();

        let again = clause_db.store(
            vec![
                Literal::new('A', false),
                Literal::new('B', true),
                Literal::new('A', false),
            ],
            ClauseSource::Goal,
        );
        assert_eq!(again, Err(err::ClauseDBError::Duplicate(key)));
        assert_eq!(clause_db.count(), 1);
        let stored = clause_db.get(&key).unwrap();
        assert_eq!(
            stored.clause(),
            &vec![Literal::new('A', false), Literal::new('B', true)]
        );
        assert_eq!(stored.source(), ClauseSource::Premise);
    }

    #[test]
    fn empty_clause() {
        let mut clause_db = ClauseDB::default();
        assert_eq!(clause_db.empty_clause(), None);

        let p = clause_db
            .store(vec![Literal::new('P', true)], ClauseSource::Premise)
            .unwrap();
        let not_p = clause_db
            .store(vec![Literal::new('P', false)], ClauseSource::Goal)
            .unwrap();
        let empty = clause_db
            .store(
                CClause::new(),
                ClauseSource::Resolution {
                    left: p,
                    right: not_p,
                    pivot: 'P',
                },
            )
            .unwrap();
        assert_eq!(clause_db.empty_clause(), Some(empty));
        assert_eq!(clause_db.count(), 3);
        assert_eq!(clause_db.get(&empty).unwrap().key(), empty);
    }

    #[test]
    fn missing_key() {
        let clause_db = ClauseDB::default();
        assert_eq!(
            clause_db.get(&ClauseKey(3)).map(|stored| stored.key()),
            Err(err::ClauseDBError::Missing)
        );
    }
}
