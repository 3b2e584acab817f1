/*!
The context, to which premises are added and within which proof attempts take place.

A context holds the premises of a session, as a [clause set](ClauseSet).
Premises persist across proof attempts, and each [proof attempt](crate::procedures::prove) starts from the premises together with the negation of a fresh goal.

The state of a context follows the outcome of each action:

```none
Idle --add_premise--> HasPremises --prove--> Proving --+--> Proved
                                                       +--> NotProved
                                                       +--> Cancelled / TimeUp
                                                       +--> Failed(error)
```

From any state other than [Proving](ContextState::Proving), further premises may be added and further proofs attempted, while [clear](Context::clear) returns the context to [Idle](ContextState::Idle).

# Example
```rust
# use clausal::context::{CancelToken, Context, ContextState};
# use clausal::reports::Report;
let mut the_context = Context::default();
assert_eq!(the_context.state, ContextState::Idle);

assert!(the_context.add_premise_str("A").is_ok());
assert_eq!(the_context.state, ContextState::HasPremises);

let result = the_context.prove_str("B", &CancelToken::default()).unwrap();
assert_eq!(result.report, Report::NotProved);
assert_eq!(the_context.state, ContextState::NotProved);

// The premise A persists.
let result = the_context.prove_str("A | B", &CancelToken::default()).unwrap();
assert!(result.proved());
```

A context is not shared between threads during a proof attempt, though a [CancelToken] may be.
*/

pub mod callbacks;
mod cancel;
pub use cancel::CancelToken;
mod counters;
pub use counters::Counters;
mod premises;

use crate::{
    config::Config,
    reports::Report,
    structures::clause_set::ClauseSet,
    types::err::{self},
};

use callbacks::CallbackStep;

/// The state of a context.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ContextState {
    /// The context has no premises.
    Idle,

    /// The context has some premise, and no proof has been attempted since the last premise was added.
    HasPremises,

    /// A proof attempt is in progress.
    Proving,

    /// The goal of the last proof attempt was proved.
    Proved,

    /// The goal of the last proof attempt was not proved.
    NotProved,

    /// The last proof attempt was cancelled.
    Cancelled,

    /// The last proof attempt exceeded the time limit.
    TimeUp,

    /// The last proof attempt failed, with the given error.
    Failed(err::ErrorKind),
}

impl std::fmt::Display for ContextState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Idle => write!(f, "Idle"),
            Self::HasPremises => write!(f, "HasPremises"),
            Self::Proving => write!(f, "Proving"),
            Self::Proved => write!(f, "Proved"),
            Self::NotProved => write!(f, "NotProved"),
            Self::Cancelled => write!(f, "Cancelled"),
            Self::TimeUp => write!(f, "TimeUp"),
            Self::Failed(e) => write!(f, "Failed({e})"),
        }
    }
}

/// A context.
pub struct Context {
    /// The configuration of a context.
    pub config: Config,

    /// Counters related to the last proof attempt.
    pub counters: Counters,

    /// The accumulated premises.
    pub(crate) premises: ClauseSet,

    /// The status of the context.
    pub state: ContextState,

    /// Each step of a proof attempt is passed in, as taken.
    pub(crate) callback_step: Option<Box<CallbackStep>>,
}

impl Context {
    /// Creates a context from some given configuration.
    pub fn from_config(config: Config) -> Self {
        Self {
            config,
            counters: Counters::default(),
            premises: ClauseSet::default(),
            state: ContextState::Idle,
            callback_step: None,
        }
    }

    /// The state of the context.
    pub fn state(&self) -> &ContextState {
        &self.state
    }

    /// A report on the state of the context.
    pub fn report(&self) -> Report {
        Report::from(&self.state)
    }

    /// The accumulated premises of the context.
    pub fn premises(&self) -> &ClauseSet {
        &self.premises
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::from_config(Config::default())
    }
}
