use std::fmt::Display;

use owo_colors::OwoColorize;
use tracing::trace;

use super::{Evaluator, Halt, Invalidity, Mode, Validity};
use crate::show::Show;

/// A single transition taken while reading an input.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TraceStep {
    /// Name of the state the step started in.
    pub from: String,
    /// The symbol that was read.
    pub symbol: char,
    /// Name of the state that was reached.
    pub to: String,
}

impl Show for TraceStep {
    fn show(&self) -> String {
        format!("\u{03B4}({}, '{}') -> {}", self.from, self.symbol, self.to)
    }
}

/// How reading an input ended.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Verdict {
    /// The whole input was read and the run ended in the given accepting state.
    Accepted(String),
    /// The whole input was read and the run ended in the given non-accepting state.
    Rejected(String),
    /// The symbol at `position` is not part of the alphabet, reading stopped in `state`.
    SymbolNotInAlphabet {
        /// Name of the state in which reading stopped.
        state: String,
        /// The offending symbol.
        symbol: char,
        /// Position of the symbol in the input, counted in chars.
        position: usize,
    },
    /// The state has no transition on the symbol at `position`.
    UndefinedTransition {
        /// Name of the state in which reading stopped.
        state: String,
        /// The symbol without transition.
        symbol: char,
        /// Position of the symbol in the input, counted in chars.
        position: usize,
    },
    /// Validation failed before anything was read, only produced in [`Mode::Strict`].
    Invalid(Invalidity),
    /// There is no start state to begin reading in.
    NoStartState,
}

impl Verdict {
    /// Returns true iff the input was accepted.
    pub fn is_accepted(&self) -> bool {
        matches!(self, Verdict::Accepted(_))
    }
}

impl Show for Verdict {
    fn show(&self) -> String {
        match self {
            Verdict::Accepted(q) => format!("{} in {}", "accepted".green(), q.bold()),
            Verdict::Rejected(q) => format!("{} in {}", "rejected".red(), q.bold()),
            Verdict::SymbolNotInAlphabet { symbol, .. } => {
                format!("{} on '{}'", "not in alphabet".red(), symbol)
            }
            Verdict::UndefinedTransition { state, symbol, .. } => {
                format!("{} \u{03B4}({}, '{}')", "undefined".red(), state, symbol)
            }
            Verdict::Invalid(reason) => reason.to_string().red().to_string(),
            Verdict::NoStartState => "no start state".red().to_string(),
        }
    }
}

/// The recorded run of an automaton on an input. It is detached from the automaton, so it
/// stays usable when the automaton is changed afterwards.
///
/// # Example
/// ```
/// use dfa_engine::prelude::*;
///
/// let dfa = DfaBuilder::new("01")
///     .with_states(["q1", "q2"])
///     .with_start("q1")
///     .with_accepting(["q2"])
///     .with_transitions([("q1", '0', "q1"), ("q1", '1', "q2"), ("q2", '0', "q1"), ("q2", '1', "q2")])
///     .build()
///     .unwrap();
///
/// let run = dfa.walkthrough("011");
/// assert!(run.is_accepted());
/// assert_eq!(run.visited().collect::<Vec<_>>(), vec!["q1", "q1", "q2", "q2"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Walkthrough {
    input: String,
    mode: Mode,
    start: Option<String>,
    steps: Vec<TraceStep>,
    verdict: Verdict,
}

impl Walkthrough {
    /// The input that was read.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// The mode the input was evaluated in.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Name of the state reading began in, `None` if there was no start state or, in strict
    /// mode, if validation failed.
    pub fn start(&self) -> Option<&str> {
        self.start.as_deref()
    }

    /// All steps that were taken, in order.
    pub fn steps(&self) -> &[TraceStep] {
        &self.steps
    }

    /// How reading ended.
    pub fn verdict(&self) -> &Verdict {
        &self.verdict
    }

    /// Returns true iff the input was accepted. This agrees with [`Evaluator::accepts`] for the
    /// same automaton, input and mode.
    pub fn is_accepted(&self) -> bool {
        self.verdict.is_accepted()
    }

    /// The sequence of visited states, beginning with the start state.
    pub fn visited(&self) -> impl Iterator<Item = &str> + '_ {
        self.start
            .as_deref()
            .into_iter()
            .chain(self.steps.iter().map(|step| step.to.as_str()))
    }

    /// Name of the state reading stopped in.
    pub fn final_state(&self) -> Option<&str> {
        self.visited().last()
    }
}

impl Display for Walkthrough {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Processing \"{}\":", self.input)?;
        if let Verdict::Invalid(reason) = &self.verdict {
            writeln!(f, "{reason}")?;
            return write!(f, "Terminating.");
        }
        let Some(start) = &self.start else {
            return write!(f, "No start state, \"{}\" is rejected.", self.input);
        };
        writeln!(f, "Start state is {start}.")?;
        for step in &self.steps {
            writeln!(f, "{}", step.show())?;
        }
        match &self.verdict {
            Verdict::Accepted(q) => write!(
                f,
                "Machine ended on state {q}, which is an accept state. \"{}\" is accepted.",
                self.input
            ),
            Verdict::Rejected(q) => write!(
                f,
                "Machine ended on state {q}, which is not an accept state. \"{}\" is rejected.",
                self.input
            ),
            Verdict::SymbolNotInAlphabet {
                symbol, position, ..
            } => write!(
                f,
                "Symbol '{symbol}' at position {position} is not in the alphabet. \"{}\" is rejected.",
                self.input
            ),
            Verdict::UndefinedTransition {
                state,
                symbol,
                position,
            } => write!(
                f,
                "\u{03B4}({state}, '{symbol}') at position {position} is not defined. \"{}\" is rejected.",
                self.input
            ),
            Verdict::Invalid(_) | Verdict::NoStartState => Ok(()),
        }
    }
}

pub(super) fn record(evaluator: &Evaluator<'_>, input: &str) -> Walkthrough {
    let dfa = evaluator.automaton();
    let mut walkthrough = Walkthrough {
        input: input.to_string(),
        mode: evaluator.mode(),
        start: None,
        steps: vec![],
        verdict: Verdict::NoStartState,
    };

    if evaluator.mode() == Mode::Strict {
        if let Validity::Invalid(reason) = evaluator.validate() {
            walkthrough.verdict = Verdict::Invalid(reason);
            return walkthrough;
        }
    }
    let Some(mut current) = dfa.start() else {
        return walkthrough;
    };
    let name = |id| dfa.name_of(id).unwrap_or_default().to_string();
    walkthrough.start = Some(name(current));

    for (position, symbol) in input.chars().enumerate() {
        match evaluator.advance(current, symbol) {
            Ok(next) => {
                walkthrough.steps.push(TraceStep {
                    from: name(current),
                    symbol,
                    to: name(next),
                });
                current = next;
            }
            Err(halt) => {
                let state = name(current);
                walkthrough.verdict = match halt {
                    Halt::NotInAlphabet => Verdict::SymbolNotInAlphabet {
                        state,
                        symbol,
                        position,
                    },
                    Halt::Undefined => Verdict::UndefinedTransition {
                        state,
                        symbol,
                        position,
                    },
                };
                return walkthrough;
            }
        }
    }

    walkthrough.verdict = if dfa.is_accepting_id(current) {
        Verdict::Accepted(name(current))
    } else {
        Verdict::Rejected(name(current))
    };
    trace!(
        "walkthrough of \"{input}\" took {} steps: {}",
        walkthrough.steps.len(),
        walkthrough.verdict.show()
    );
    walkthrough
}

#[cfg(test)]
mod tests {
    use crate::{automaton::tests::d1, prelude::*};

    #[test_log::test]
    fn records_every_step() {
        let dfa = d1();
        let run = dfa.walkthrough("1000");
        assert_eq!(run.start(), Some("q1"));
        assert_eq!(
            run.visited().collect::<Vec<_>>(),
            vec!["q1", "q2", "q3", "q2", "q3"]
        );
        assert_eq!(run.verdict(), &Verdict::Rejected("q3".into()));
        assert!(!run.is_accepted());
        assert_eq!(run.steps()[0].show(), "\u{03B4}(q1, '1') -> q2");
        println!("{run}");
    }

    #[test]
    fn agrees_with_accepts() {
        let dfa = d1();
        for input in ["", "1", "01", "0", "00101", "1000", "01a1", "0101010101"] {
            assert_eq!(dfa.walkthrough(input).is_accepted(), dfa.accepts(input));
        }
    }

    #[test]
    fn stops_on_symbol_outside_alphabet() {
        let dfa = d1();
        let run = dfa.walkthrough("01a1");
        assert_eq!(
            run.verdict(),
            &Verdict::SymbolNotInAlphabet {
                state: "q2".into(),
                symbol: 'a',
                position: 2
            }
        );
        assert_eq!(run.steps().len(), 2);
        assert_eq!(run.final_state(), Some("q2"));
        assert!(run
            .to_string()
            .contains("Symbol 'a' at position 2 is not in the alphabet."));
    }

    #[test]
    fn stops_on_undefined_transition() {
        let mut dfa = d1();
        dfa.delete_transition("q2", '0', "q3").unwrap();
        let run = dfa.walkthrough("100");
        assert_eq!(
            run.verdict(),
            &Verdict::UndefinedTransition {
                state: "q2".into(),
                symbol: '0',
                position: 1
            }
        );
    }

    #[test]
    fn strict_mode_validates_first() {
        let mut dfa = d1();
        dfa.delete_state("q3").unwrap();
        dfa.set_mode(Mode::Strict);
        let run = dfa.walkthrough("1");
        assert_eq!(run.mode(), Mode::Strict);
        assert_eq!(run.start(), None);
        assert!(matches!(run.verdict(), Verdict::Invalid(_)));
        assert!(run.to_string().ends_with("Terminating."));
    }

    #[test]
    fn no_start_state() {
        let mut dfa = d1();
        dfa.delete_state("q1").unwrap();
        let run = dfa.walkthrough("1");
        assert_eq!(run.verdict(), &Verdict::NoStartState);
        assert_eq!(run.final_state(), None);
    }
}
