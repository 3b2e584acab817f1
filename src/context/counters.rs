use std::time::Duration;

/// Counts for various things which count, roughly.
///
/// Counters are reset at the start of each proof attempt.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Counters {
    /// A count of every pair of clauses examined.
    pub pairs_examined: usize,

    /// A count of resolvents stored.
    pub resolvents: usize,

    /// A count of tautological resolvents discarded.
    pub tautologies: usize,

    /// A count of resolvents discarded as already stored.
    pub duplicates: usize,

    /// The time taken during a proof attempt.
    pub time: Duration,
}
