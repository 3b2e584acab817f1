use serde::Serialize;

/// The index to a clause in the [clause database](crate::db::clause::ClauseDB).
pub type ClauseIndex = u32;

/// A key to access a clause stored in the clause database.
///
/// Clauses are never removed from the database during a proof attempt, and so a key is the index of the clause in order of storage.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct ClauseKey(pub(crate) ClauseIndex);

impl ClauseKey {
    /// Extracts the index from a key.
    pub fn index(&self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for ClauseKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}
