use std::fmt::Display;

use thiserror::Error;

/// The first structural defect found by [`Evaluator::validate`](crate::Evaluator::validate). The
/// `Display` output is meant to be shown to a user as is.
#[derive(Error, Debug, Clone, PartialEq, Eq, Hash)]
pub enum Invalidity {
    /// No state is designated as start state.
    #[error("Invalid DFA. No start state found.")]
    MissingStartState,
    /// The state has no transition on a symbol of the alphabet.
    #[error("Invalid DFA. \u{03B4}({state}, {symbol}) does not have a defined transition.")]
    MissingTransition {
        /// Name of the offending state.
        state: String,
        /// The symbol it has no transition on.
        symbol: char,
    },
    /// The state has a transition on a symbol that is not part of the alphabet.
    #[error("Invalid DFA. {state} has a transition on '{symbol}', but '{symbol}' is not in the alphabet.")]
    SymbolOutsideAlphabet {
        /// Name of the offending state.
        state: String,
        /// The symbol outside the alphabet.
        symbol: char,
    },
}

impl Invalidity {
    /// Name of the state the defect was found at, if it concerns a particular state.
    pub fn state(&self) -> Option<&str> {
        match self {
            Invalidity::MissingStartState => None,
            Invalidity::MissingTransition { state, .. }
            | Invalidity::SymbolOutsideAlphabet { state, .. } => Some(state),
        }
    }

    /// The symbol the defect concerns, if any.
    pub fn symbol(&self) -> Option<char> {
        match self {
            Invalidity::MissingStartState => None,
            Invalidity::MissingTransition { symbol, .. }
            | Invalidity::SymbolOutsideAlphabet { symbol, .. } => Some(*symbol),
        }
    }
}

/// Outcome of validating an automaton.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Validity {
    /// There is a start state and every state has exactly one transition on every symbol of the
    /// alphabet and no transition on any other symbol.
    Valid,
    /// The first defect that was found.
    Invalid(Invalidity),
}

impl Validity {
    /// Returns true iff `self` is [`Validity::Valid`].
    pub fn is_valid(&self) -> bool {
        matches!(self, Validity::Valid)
    }

    /// Gives the reason of invalidity, if there is one.
    pub fn reason(&self) -> Option<&Invalidity> {
        match self {
            Validity::Valid => None,
            Validity::Invalid(reason) => Some(reason),
        }
    }

    /// Converts `self` into a `Result`, which allows the use of `?`.
    pub fn into_result(self) -> Result<(), Invalidity> {
        match self {
            Validity::Valid => Ok(()),
            Validity::Invalid(reason) => Err(reason),
        }
    }
}

impl From<Result<(), Invalidity>> for Validity {
    fn from(value: Result<(), Invalidity>) -> Self {
        match value {
            Ok(()) => Validity::Valid,
            Err(reason) => Validity::Invalid(reason),
        }
    }
}

impl Display for Validity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Validity::Valid => write!(f, "Valid DFA."),
            Validity::Invalid(reason) => write!(f, "{reason}"),
        }
    }
}
