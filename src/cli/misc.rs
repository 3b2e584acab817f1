use serde::Serialize;

use clausal::{
    reports::{ProofResult, Report},
    structures::clause_set::ClauseSet,
};

/// The output of `--json`.
#[derive(Serialize)]
pub struct JsonReport<'a> {
    pub premises: &'a ClauseSet,
    pub goal: &'a ClauseSet,
    pub result: &'a ProofResult,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub entailed: Option<bool>,
}

/// The status line for a report.
pub fn status(report: Report) -> &'static str {
    match report {
        Report::Proved => "PROVED",
        Report::NotProved => "NOT PROVED",
        Report::Cancelled => "CANCELLED",
        Report::TimeUp => "TIMEUP",
        Report::Unknown => "UNKNOWN",
    }
}

pub fn exit_code(report: Report) -> i32 {
    match report {
        Report::Proved => 0,
        Report::NotProved => 2,
        Report::Cancelled | Report::TimeUp | Report::Unknown => 3,
    }
}
