/*!
Miscelanous items related to [logging](log).

Calls to the log macro are made throughout the library.
These are intended to provide useful information for extending the library and/or fixing issues.

Note, no log implementation is provided.
For more details, see [log].
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to the [lexer](crate::parse::lexer)
    pub const LEXER: &str = "lexer";

    /// Logs related to the [parser](crate::parse::parser)
    pub const PARSER: &str = "parser";

    /// Logs related to [conversion to cnf](crate::transform)
    pub const CNF: &str = "cnf";

    /// Logs related to the [clause database](crate::db::clause)
    pub const CLAUSE_DB: &str = "clause_db";

    /// Logs related to [resolution](crate::procedures::prove)
    pub const RESOLUTION: &str = "resolution";

    /// Logs related to the [context](crate::context)
    pub const CONTEXT: &str = "context";
}
