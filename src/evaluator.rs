use itertools::Itertools;
use tracing::{debug, trace};

use crate::{automaton::Automaton, id::StateId};

mod validation;
pub use validation::{Invalidity, Validity};

mod run;
pub use run::{TraceStep, Verdict, Walkthrough};

/// Determines how acceptance queries treat automata that are not structurally valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    /// Inputs are evaluated without validating first. A symbol outside the alphabet or a missing
    /// transition rejects the input at the point where it is encountered. This suits an editor,
    /// where inputs are tried out on automata under construction.
    #[default]
    Interactive,
    /// Every input is rejected as long as [`Evaluator::validate`] reports a defect.
    Strict,
}

/// Reasons for which a single step cannot be taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Halt {
    NotInAlphabet,
    Undefined,
}

/// Read-only queries on an [`Automaton`]: validation, acceptance and single steps. None of the
/// queries modify the automaton, so evaluating the same input on the same automaton always
/// gives the same answer.
#[derive(Clone, Copy)]
pub struct Evaluator<'a> {
    automaton: &'a Automaton,
    mode: Mode,
}

impl<'a> Evaluator<'a> {
    /// Creates an evaluator for `automaton` that answers acceptance queries in the given `mode`.
    pub fn new(automaton: &'a Automaton, mode: Mode) -> Self {
        Self { automaton, mode }
    }

    /// The mode in which acceptance queries are answered.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Checks the structure of the automaton and reports the first defect. The checks are done
    /// in the following order:
    /// 1. a start state must be designated,
    /// 2. every state (in creation order) must have a transition on every symbol of the
    ///    alphabet (in ascending order),
    /// 3. no state may have a transition on a symbol outside the alphabet.
    pub fn validate(&self) -> Validity {
        let dfa = self.automaton;
        if dfa.start().is_none() {
            return Validity::Invalid(Invalidity::MissingStartState);
        }

        let alphabet = dfa.alphabet();
        let missing = dfa
            .states()
            .cartesian_product(alphabet.universe().collect_vec())
            .find(|(state, symbol)| state.successor(*symbol).is_none());
        if let Some((state, symbol)) = missing {
            return Validity::Invalid(Invalidity::MissingTransition {
                state: dfa.name_of(state.id()).unwrap_or_default().to_string(),
                symbol,
            });
        }

        let outside = dfa.states().find_map(|state| {
            state
                .edges()
                .find(|(symbol, _)| !alphabet.contains(*symbol))
                .map(|(symbol, _)| (state.id(), symbol))
        });
        if let Some((id, symbol)) = outside {
            return Validity::Invalid(Invalidity::SymbolOutsideAlphabet {
                state: dfa.name_of(id).unwrap_or_default().to_string(),
                symbol,
            });
        }

        Validity::Valid
    }

    /// Decides whether `input` is accepted, i.e. whether reading it symbol by symbol from the
    /// start state ends in an accepting state.
    ///
    /// The input is rejected if there is no start state, if it contains a symbol outside the
    /// alphabet, or if a transition that is needed is missing. In [`Mode::Strict`] it is also
    /// rejected whenever [`Evaluator::validate`] reports a defect.
    pub fn accepts(&self, input: &str) -> bool {
        if self.mode == Mode::Strict {
            if let Validity::Invalid(reason) = self.validate() {
                debug!("rejecting \"{input}\" as the automaton is invalid: {reason}");
                return false;
            }
        }

        let Some(mut current) = self.automaton.start() else {
            debug!("rejecting \"{input}\", no start state is designated");
            return false;
        };
        for (position, symbol) in input.chars().enumerate() {
            match self.advance(current, symbol) {
                Ok(next) => current = next,
                Err(halt) => {
                    debug!("rejecting \"{input}\" at position {position} on {symbol}: {halt:?}");
                    return false;
                }
            }
        }
        self.automaton.is_accepting_id(current)
    }

    /// Takes a single step from the state called `current` on `symbol` and returns the name of
    /// the state that is reached. Returns `None` if `current` is not the name of a state, if
    /// `symbol` is not in the alphabet or if no transition exists.
    ///
    /// This is meant to drive a trace that is paced by the caller, one symbol at a time.
    pub fn step(&self, current: &str, symbol: char) -> Option<&'a str> {
        let Some(from) = self.automaton.state_id(current) else {
            debug!("cannot step from unknown state {current}");
            return None;
        };
        self.advance(from, symbol)
            .ok()
            .and_then(|to| self.automaton.name_of(to))
    }

    /// Reads the whole `input` and records every step that was taken as well as the outcome.
    /// Unlike [`Evaluator::accepts`] this does not stop at a boolean, the returned [`Walkthrough`]
    /// can be replayed by a front end at its own pace.
    pub fn walkthrough(&self, input: &str) -> Walkthrough {
        run::record(self, input)
    }

    pub(crate) fn automaton(&self) -> &'a Automaton {
        self.automaton
    }

    pub(crate) fn advance(&self, from: StateId, symbol: char) -> Result<StateId, Halt> {
        if !self.automaton.is_in_alphabet(symbol) {
            return Err(Halt::NotInAlphabet);
        }
        let to = self
            .automaton
            .state(from)
            .and_then(|state| state.successor(symbol))
            .ok_or(Halt::Undefined)?;
        trace!("stepping {from:?} --{symbol}--> {to:?}");
        Ok(to)
    }
}

#[cfg(test)]
mod tests {
    use crate::{automaton::tests::d1, prelude::*};

    #[test_log::test]
    fn d1_acceptance() {
        let dfa = d1();
        assert!(dfa.validate().is_valid());
        for (input, expected) in [
            ("1", true),
            ("01", true),
            ("11", true),
            ("0101010101", true),
            ("0", false),
            ("100", true),
            ("1000", false),
            ("10", false),
            ("", false),
        ] {
            assert_eq!(dfa.accepts(input), expected, "wrong answer for \"{input}\"");
        }
    }

    #[test]
    fn symbols_outside_alphabet_reject() {
        let dfa = d1();
        assert!(!dfa.accepts("1a"));
        assert!(!dfa.accepts("a"));
        assert_eq!(dfa.step("q1", 'a'), None);
    }

    #[test]
    fn single_steps() {
        let dfa = d1();
        assert_eq!(dfa.step("q1", '1'), Some("q2"));
        assert_eq!(dfa.step("q2", '1'), Some("q2"));
        assert_eq!(dfa.step("q2", '0'), Some("q3"));
        assert_eq!(dfa.step("q9", '0'), None);
    }

    #[test]
    fn stepping_on_missing_transition() {
        let mut dfa = d1();
        dfa.delete_transition("q2", '0', "q3").unwrap();
        assert_eq!(dfa.step("q2", '0'), None);
    }

    #[test]
    fn empty_automaton() {
        let dfa = Automaton::new();
        assert_eq!(
            dfa.validate(),
            Validity::Invalid(Invalidity::MissingStartState)
        );
        assert!(!dfa.accepts(""));
        assert!(!dfa.accepts("0"));
    }

    #[test]
    fn single_accepting_start_state_with_empty_alphabet() {
        let mut dfa = Automaton::new();
        dfa.add_state("only", true, true).unwrap();
        assert!(dfa.validate().is_valid());
        assert!(dfa.accepts(""));
        assert!(!dfa.accepts("0"));
    }

    #[test_log::test]
    fn deleting_q3_breaks_totality_at_q2() {
        let mut dfa = d1();
        dfa.delete_state("q3").unwrap();
        let validity = dfa.validate();
        assert_eq!(
            validity,
            Validity::Invalid(Invalidity::MissingTransition {
                state: "q2".into(),
                symbol: '0'
            })
        );
        assert_eq!(validity.reason().and_then(Invalidity::state), Some("q2"));
    }

    #[test]
    fn missing_start_state_is_reported_first() {
        let mut dfa = d1();
        dfa.delete_state("q1").unwrap();
        assert_eq!(
            dfa.validate(),
            Validity::Invalid(Invalidity::MissingStartState)
        );
    }

    #[test]
    fn transitions_outside_alphabet_are_invalid() {
        let mut dfa = d1();
        dfa.add_transition("q3", 'x', "q1").unwrap();
        assert_eq!(
            dfa.validate(),
            Validity::Invalid(Invalidity::SymbolOutsideAlphabet {
                state: "q3".into(),
                symbol: 'x'
            })
        );

        dfa.set_alphabet("01x".chars());
        assert_eq!(
            dfa.validate(),
            Validity::Invalid(Invalidity::MissingTransition {
                state: "q1".into(),
                symbol: 'x'
            })
        );
    }

    #[test]
    fn shrinking_the_alphabet_invalidates() {
        let mut dfa = d1();
        dfa.set_alphabet(['1']);
        assert_eq!(
            dfa.validate(),
            Validity::Invalid(Invalidity::SymbolOutsideAlphabet {
                state: "q1".into(),
                symbol: '0'
            })
        );
        // the interactive mode still follows the transitions on known symbols
        assert!(dfa.accepts("11"));
        assert!(!dfa.accepts("10"));
    }

    #[test_log::test]
    fn interactive_and_strict_modes_differ_on_invalid_automata() {
        let mut dfa = d1();
        dfa.delete_transition("q3", '1', "q2").unwrap();
        assert!(!dfa.validate().is_valid());

        assert_eq!(dfa.mode(), Mode::Interactive);
        assert!(dfa.accepts("1"));
        assert!(!dfa.accepts("101"));

        dfa.set_mode(Mode::Strict);
        assert!(!dfa.accepts("1"));
        assert!(Evaluator::new(&dfa, Mode::Interactive).accepts("1"));
    }

    #[test]
    fn queries_do_not_mutate() {
        let dfa = d1();
        let before = format!("{dfa:?}");
        for input in ["", "1", "0a", "0101"] {
            let first = dfa.accepts(input);
            let _ = dfa.validate();
            let _ = dfa.walkthrough(input);
            assert_eq!(dfa.accepts(input), first);
        }
        assert_eq!(format!("{dfa:?}"), before);
    }
}
