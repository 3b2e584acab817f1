use clap::{Parser, ValueEnum};

use clausal::format::Format;

/// Decide whether a goal follows from some premises, by resolution refutation.
///
/// Formulas are written with variables 'A' to 'Z', '~', '&', '|', '->', '<->', and parentheses.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// A premise, may be given any number of times.
    #[arg(short, long)]
    pub premise: Vec<String>,

    /// The goal to prove from the premises.
    #[arg(short, long)]
    pub goal: Option<String>,

    /// How to write formulas.
    #[arg(short, long, value_enum, default_value_t = FormatArg::Plain)]
    pub format: FormatArg,

    /// A time limit for the proof attempt, in seconds.
    #[arg(short, long)]
    pub time_limit: Option<u64>,

    /// Remove tautological clauses before the proof attempt.
    #[arg(long)]
    pub tautology_elimination: bool,

    /// Check the result of the proof attempt by truth table.
    #[arg(long)]
    pub check: bool,

    /// Write the result as json.
    #[arg(long)]
    pub json: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum FormatArg {
    Plain,
    Nested,
}

impl From<FormatArg> for Format {
    fn from(value: FormatArg) -> Self {
        match value {
            FormatArg::Plain => Format::Plain,
            FormatArg::Nested => Format::Nested,
        }
    }
}
