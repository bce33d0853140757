#![allow(missing_docs)]

use thiserror::Error;

/// Reasons for which a mutation of an [`Automaton`](crate::Automaton) is rejected. A rejected
/// mutation never changes the automaton.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AutomatonError {
    #[error("a start state already exists: {0}")]
    DuplicateStartState(String),
    #[error("a state needs a non-empty name")]
    EmptyName,
    #[error("a state named {0} already exists")]
    DuplicateState(String),
    #[error("\u{03B4}({src}, {symbol}) already exists")]
    DuplicateTransition { src: String, symbol: char },
    #[error("no state named {0}")]
    UnknownState(String),
    #[error("no transition \u{03B4}({src}, {symbol}) -> {dst}")]
    UnknownTransition {
        src: String,
        symbol: char,
        dst: String,
    },
}

/// Integer view on the outcome of a mutation, for front ends that only pass plain numbers around.
/// `Success` is `0`, every kind of rejection maps to its own nonzero code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Status {
    Success = 0,
    DuplicateStartState = 1,
    DuplicateState = 2,
    DuplicateTransition = 3,
    UnknownState = 4,
    UnknownTransition = 5,
    EmptyName = 6,
}

impl Status {
    /// Returns the numeric code.
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Returns true iff `self` is [`Status::Success`].
    pub fn is_success(self) -> bool {
        self == Status::Success
    }
}

impl From<&AutomatonError> for Status {
    fn from(value: &AutomatonError) -> Self {
        match value {
            AutomatonError::DuplicateStartState(_) => Status::DuplicateStartState,
            AutomatonError::EmptyName => Status::EmptyName,
            AutomatonError::DuplicateState(_) => Status::DuplicateState,
            AutomatonError::DuplicateTransition { .. } => Status::DuplicateTransition,
            AutomatonError::UnknownState(_) => Status::UnknownState,
            AutomatonError::UnknownTransition { .. } => Status::UnknownTransition,
        }
    }
}

impl<T> From<&Result<T, AutomatonError>> for Status {
    fn from(value: &Result<T, AutomatonError>) -> Self {
        match value {
            Ok(_) => Status::Success,
            Err(e) => e.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes() {
        let ok: Result<(), AutomatonError> = Ok(());
        assert_eq!(Status::from(&ok).code(), 0);
        assert!(Status::from(&ok).is_success());

        let err: Result<(), _> = Err(AutomatonError::DuplicateStartState("q1".into()));
        assert_eq!(Status::from(&err).code(), 1);

        let dup = AutomatonError::DuplicateTransition {
            src: "q1".into(),
            symbol: '0',
        };
        assert_eq!(Status::from(&dup), Status::DuplicateTransition);
        assert_eq!(dup.to_string(), "\u{03B4}(q1, 0) already exists");
        assert_eq!(Status::from(&AutomatonError::EmptyName).code(), 6);
    }
}
