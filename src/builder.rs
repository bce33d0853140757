use thiserror::Error;
use tracing::trace;

use crate::{
    alphabet::CharAlphabet,
    automaton::Automaton,
    error::AutomatonError,
    evaluator::{Invalidity, Mode},
    math::Set,
    show::Show,
};

/// Reasons for which [`DfaBuilder::build`] refuses to produce an automaton.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
    /// A transition is labeled with a symbol that is not in the alphabet.
    #[error("invalid symbol '{symbol}' in \u{03B4}({src}, {symbol}) -> {dst}, not in alphabet {alphabet}")]
    SymbolNotInAlphabet {
        /// Source of the transition.
        src: String,
        /// The offending symbol.
        symbol: char,
        /// Target of the transition.
        dst: String,
        /// The alphabet, rendered as `{a, b, ...}`.
        alphabet: String,
    },
    /// A transition, the start state or an accepting state refers to a state that was not declared.
    #[error("{0} refers to an undefined state")]
    UndefinedState(String),
    /// More than one state was designated as start state.
    #[error("more than one start state: {0} and {1}")]
    MultipleStartStates(String, String),
    /// Adding a state or transition to the automaton failed.
    #[error(transparent)]
    Automaton(#[from] AutomatonError),
    /// The automaton could be assembled but is not a valid DFA.
    #[error(transparent)]
    Invalid(#[from] Invalidity),
}

/// Helper struct for building an [`Automaton`] in one go from a fixed alphabet, a list of state
/// names, a start state, accepting states and a list of transitions. In contrast to the
/// incremental interface of [`Automaton`], a transition on a symbol outside the alphabet is
/// rejected right away, and the result is only handed out if it passes validation. The built
/// automaton evaluates in [`Mode::Strict`].
///
/// # Example
/// ```
/// use dfa_engine::prelude::*;
///
/// let dfa = DfaBuilder::new("01")
///     .with_states(["q1", "q2", "q3"])
///     .with_start("q1")
///     .with_accepting(["q2"])
///     .with_transitions([
///         ("q1", '0', "q1"),
///         ("q1", '1', "q2"),
///         ("q2", '0', "q3"),
///         ("q2", '1', "q2"),
///         ("q3", '0', "q2"),
///         ("q3", '1', "q2"),
///     ])
///     .build()
///     .unwrap();
/// assert!(dfa.accepts("0101010101"));
/// assert!(!dfa.accepts("0"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct DfaBuilder {
    alphabet: CharAlphabet,
    states: Vec<String>,
    start: Vec<String>,
    accepting: Vec<String>,
    transitions: Vec<(String, char, String)>,
}

impl DfaBuilder {
    /// Creates a builder for automata over the given alphabet.
    pub fn new<A: Into<CharAlphabet>>(alphabet: A) -> Self {
        Self {
            alphabet: alphabet.into(),
            ..Default::default()
        }
    }

    /// Declares states, in the order in which they should be created.
    pub fn with_states<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.states.extend(names.into_iter().map(Into::into));
        self
    }

    /// Designates the start state.
    pub fn with_start<S: Into<String>>(mut self, name: S) -> Self {
        self.start.push(name.into());
        self
    }

    /// Marks the given states as accepting.
    pub fn with_accepting<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.accepting.extend(names.into_iter().map(Into::into));
        self
    }

    /// Adds a list of transitions, each given as a triple of source, symbol and target.
    pub fn with_transitions<I, S, T>(mut self, transitions: I) -> Self
    where
        I: IntoIterator<Item = (S, char, T)>,
        S: Into<String>,
        T: Into<String>,
    {
        self.transitions.extend(
            transitions
                .into_iter()
                .map(|(p, a, q)| (p.into(), a, q.into())),
        );
        self
    }

    /// Assembles the automaton and validates it.
    pub fn build(self) -> Result<Automaton, BuildError> {
        let declared: Set<&str> = self.states.iter().map(String::as_str).collect();
        if let [first, second, ..] = self.start.as_slice() {
            return Err(BuildError::MultipleStartStates(
                first.clone(),
                second.clone(),
            ));
        }
        if let Some(undefined) = self
            .start
            .iter()
            .chain(&self.accepting)
            .find(|name| !declared.contains(name.as_str()))
        {
            return Err(BuildError::UndefinedState(undefined.clone()));
        }

        let mut dfa = Automaton::with_mode(Mode::Strict);
        dfa.set_alphabet(self.alphabet.clone());
        for name in &self.states {
            dfa.add_state(
                name.as_str(),
                self.start.contains(name),
                self.accepting.contains(name),
            )?;
        }

        for (src, symbol, dst) in &self.transitions {
            if !self.alphabet.contains(*symbol) {
                return Err(BuildError::SymbolNotInAlphabet {
                    src: src.clone(),
                    symbol: *symbol,
                    dst: dst.clone(),
                    alphabet: self.alphabet.show(),
                });
            }
            if let Some(undefined) = [src, dst]
                .into_iter()
                .find(|name| !declared.contains(name.as_str()))
            {
                return Err(BuildError::UndefinedState(undefined.clone()));
            }
            dfa.add_transition(src, *symbol, dst)?;
        }

        dfa.validate().into_result()?;
        trace!(
            "built automaton with {} states and {} transitions",
            dfa.size(),
            self.transitions.len()
        );
        Ok(dfa)
    }
}
