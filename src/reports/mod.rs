/*!
Reports for the context.

A proof attempt returns a [ProofResult], which pairs a [Report] on the outcome of the attempt with the log of [steps](ProofStep) taken.

Note, a [Report] distinguishes three kinds of outcome:
- [Proved](Report::Proved), the goal follows from the premises.
- [NotProved](Report::NotProved), the goal does not follow from the premises.
  This is a result, and not an error.
- [Cancelled](Report::Cancelled) or [TimeUp](Report::TimeUp), the attempt was aborted before either of the above could be determined.
*/

use serde::Serialize;

use crate::{
    context::ContextState,
    db::ClauseKey,
    structures::{
        clause::{CClause, Clause},
        variable::Variable,
    },
};

/// High-level reports regarding a proof attempt.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Report {
    /// The empty clause was derived, so the goal follows from the premises.
    Proved,

    /// No new resolvent could be derived without the empty clause, so the goal does not follow from the premises.
    NotProved,

    /// The attempt was cancelled by the caller.
    Cancelled,

    /// The attempt exceeded the time limit of the context.
    TimeUp,

    /// Whether the goal follows is unknown, for some reason.
    Unknown,
}

impl Report {
    /// Whether the attempt was aborted before an outcome was found.
    pub fn is_aborted(&self) -> bool {
        matches!(self, Self::Cancelled | Self::TimeUp)
    }
}

impl From<&ContextState> for Report {
    fn from(value: &ContextState) -> Self {
        match value {
            ContextState::Idle
            | ContextState::HasPremises
            | ContextState::Proving
            | ContextState::Failed(_) => Self::Unknown,
            ContextState::Proved => Self::Proved,
            ContextState::NotProved => Self::NotProved,
            ContextState::Cancelled => Self::Cancelled,
            ContextState::TimeUp => Self::TimeUp,
        }
    }
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Proved => write!(f, "Proved"),
            Self::NotProved => write!(f, "Not proved"),
            Self::Cancelled => write!(f, "Cancelled"),
            Self::TimeUp => write!(f, "Time up"),
            Self::Unknown => write!(f, "Unknown"),
        }
    }
}

/// A resolution step, from a pair of stored clauses to their resolvent.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ProofStep {
    /// The key of the earlier clause of the pair.
    pub left: ClauseKey,

    /// The key of the later clause of the pair.
    pub right: ClauseKey,

    pub left_clause: CClause,

    pub right_clause: CClause,

    /// The variable resolved on.
    pub pivot: Variable,

    /// The key of the resolvent, as stored.
    pub key: ClauseKey,

    pub resolvent: CClause,
}

impl std::fmt::Display for ProofStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}, {} -> {}",
            self.left_clause.as_string(),
            self.right_clause.as_string(),
            self.resolvent.as_string()
        )
    }
}

/// The result of a proof attempt.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ProofResult {
    pub report: Report,

    /// Each resolution step taken, in order.
    ///
    /// If the attempt was aborted, the steps taken before the attempt was aborted.
    pub log: Vec<ProofStep>,
}

impl ProofResult {
    /// Whether the goal was proved.
    pub fn proved(&self) -> bool {
        self.report == Report::Proved
    }
}
