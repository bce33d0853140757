use std::fmt::{Debug, Display};

use itertools::Itertools;
use tracing::{trace, warn};

use crate::{
    alphabet::CharAlphabet,
    error::AutomatonError,
    evaluator::{Evaluator, Mode, Validity, Walkthrough},
    id::{IdGenerator, StateId},
    math::{Bijection, OrderedMap, Set},
    show::Show,
};

mod state;
pub use state::AutomatonState;

/// A transition as seen from the outside: names of source and target together with the symbol.
pub type TransitionTuple<'a> = (&'a str, char, &'a str);

/// The automaton store. It owns the states (keyed by their unique name), the alphabet, the
/// transition relation, the designated start state and the set of accepting states.
///
/// The following is maintained after every call, successful or not:
/// - names are unique and each name belongs to precisely one [`StateId`],
/// - there is at most one start state,
/// - the start state and all accepting states are states of this automaton,
/// - every transition leads between two states of this automaton.
///
/// Totality of the transition function and agreement of the transitions with the alphabet are
/// *not* maintained, they are checked on demand by [`Automaton::validate`]. This allows a front end
/// to build the automaton piece by piece and to change the alphabet at any point.
///
/// # Example
/// ```
/// use dfa_engine::prelude::*;
///
/// let mut dfa = Automaton::new();
/// dfa.set_alphabet("ab".chars());
/// dfa.add_state("even", true, true).unwrap();
/// dfa.add_state("odd", false, false).unwrap();
/// dfa.add_transition("even", 'a', "odd").unwrap();
/// dfa.add_transition("even", 'b', "even").unwrap();
/// dfa.add_transition("odd", 'a', "even").unwrap();
/// dfa.add_transition("odd", 'b', "odd").unwrap();
///
/// assert!(dfa.validate().is_valid());
/// assert!(dfa.accepts("abba"));
/// assert!(!dfa.accepts("ab"));
/// assert_eq!(dfa.step("even", 'a'), Some("odd"));
/// ```
#[derive(Clone)]
pub struct Automaton {
    alphabet: CharAlphabet,
    states: OrderedMap<StateId, AutomatonState>,
    names: Bijection<String, StateId>,
    start: Option<StateId>,
    accepting: Set<StateId>,
    ids: IdGenerator,
    mode: Mode,
}

impl Default for Automaton {
    fn default() -> Self {
        Self::new()
    }
}

impl Automaton {
    /// Creates an empty automaton with an empty alphabet, evaluating in [`Mode::Interactive`].
    pub fn new() -> Self {
        Self::with_mode(Mode::Interactive)
    }

    /// Creates an empty automaton that evaluates in the given [`Mode`].
    pub fn with_mode(mode: Mode) -> Self {
        Self {
            alphabet: CharAlphabet::empty(),
            states: OrderedMap::default(),
            names: Bijection::new(),
            start: None,
            accepting: Set::default(),
            ids: IdGenerator::default(),
            mode,
        }
    }

    /// Returns the [`Mode`] in which acceptance queries are answered.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Changes the [`Mode`] in which acceptance queries are answered.
    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
    }

    /// Clears all states, the alphabet, the transitions and the start/accepting designations.
    /// The mode is kept. Identities handed out before the reset are never reused.
    pub fn reset(&mut self) {
        trace!("resetting automaton with {} states", self.states.len());
        self.alphabet = CharAlphabet::empty();
        self.states.clear();
        self.names.clear();
        self.start = None;
        self.accepting.clear();
    }

    /// Replaces the alphabet as a whole. Existing transitions are left untouched, even if their
    /// symbol is no longer part of the alphabet; [`Automaton::validate`] reports such transitions.
    /// Any collection of symbols works, a string is passed through [`str::chars`]. Duplicates
    /// collapse into a single symbol.
    pub fn set_alphabet<I: IntoIterator<Item = char>>(&mut self, symbols: I) {
        self.alphabet = CharAlphabet::from_iter(symbols);
        trace!("alphabet set to {}", self.alphabet.show());
    }

    /// Gives a reference to the current alphabet.
    pub fn alphabet(&self) -> &CharAlphabet {
        &self.alphabet
    }

    /// Checks whether `symbol` belongs to the current alphabet.
    pub fn is_in_alphabet(&self, symbol: char) -> bool {
        self.alphabet.contains(symbol)
    }

    /// Adds a state called `name`, designating it as start state if `is_start` and marking it
    /// accepting if `is_accepting`. Returns the identity of the new state.
    ///
    /// Fails without creating anything if `name` is empty, if a state called `name` already
    /// exists, or if `is_start` is set while another state is already the start state. An empty
    /// name is refused so that a start state name is never the empty string.
    pub fn add_state<N: Into<String>>(
        &mut self,
        name: N,
        is_start: bool,
        is_accepting: bool,
    ) -> Result<StateId, AutomatonError> {
        let name = name.into();
        if name.is_empty() {
            warn!("refusing to add a state without name");
            return Err(AutomatonError::EmptyName);
        }
        if self.names.contains_left(&name) {
            warn!("refusing to add state {name}, the name is taken");
            return Err(AutomatonError::DuplicateState(name));
        }
        if is_start {
            if let Some(existing) = self.start_state_name() {
                warn!("refusing to add {name} as start state, {existing} is the start state");
                return Err(AutomatonError::DuplicateStartState(existing.to_string()));
            }
        }

        let id = self.ids.fresh();
        self.states.insert(id, AutomatonState::new(id));
        if is_start {
            self.start = Some(id);
        }
        if is_accepting {
            self.accepting.insert(id);
        }
        trace!(
            "added state {name} as {id:?} (start: {}, accepting: {})",
            is_start.show(),
            is_accepting.show()
        );
        self.names.insert(name, id);
        Ok(id)
    }

    /// Removes the state called `name` together with every transition that leaves or enters it.
    /// If the state was the start state, no start state is designated afterwards; if it was
    /// accepting, it is removed from the accepting states.
    pub fn delete_state(&mut self, name: &str) -> Result<(), AutomatonError> {
        let id = self.resolve(name)?;
        self.states.remove(&id);
        let mut removed = 0;
        for state in self.states.values_mut() {
            removed += state.remove_outgoing_edges_to(id).len();
        }
        if self.start == Some(id) {
            self.start = None;
        }
        self.accepting.remove(&id);
        self.names.remove_by_right(&id);
        trace!("deleted state {name} and {removed} incoming transitions");
        Ok(())
    }

    /// Adds the transition `δ(src, symbol) = dst`.
    ///
    /// Fails with [`AutomatonError::UnknownState`] if either endpoint does not exist, and with
    /// [`AutomatonError::DuplicateTransition`] if `src` already has a transition on `symbol`. In the
    /// latter case the existing transition is kept. The symbol does not have to be part of the
    /// alphabet.
    pub fn add_transition(
        &mut self,
        src: &str,
        symbol: char,
        dst: &str,
    ) -> Result<(), AutomatonError> {
        let from = self.resolve(src)?;
        let to = self.resolve(dst)?;
        let state = self
            .states
            .get_mut(&from)
            .ok_or_else(|| AutomatonError::UnknownState(src.to_string()))?;
        match state.add_edge(symbol, to) {
            Ok(()) => {
                trace!("added transition \u{03B4}({src}, {symbol}) -> {dst}");
                Ok(())
            }
            Err(existing) => {
                warn!(
                    "transition \u{03B4}({src}, {symbol}) already leads to {}",
                    self.name_of(existing).unwrap_or("?")
                );
                Err(AutomatonError::DuplicateTransition {
                    src: src.to_string(),
                    symbol,
                })
            }
        }
    }

    /// Removes the transition `δ(src, symbol) = dst`. All three components have to match.
    pub fn delete_transition(
        &mut self,
        src: &str,
        symbol: char,
        dst: &str,
    ) -> Result<(), AutomatonError> {
        let from = self.resolve(src)?;
        let to = self.resolve(dst)?;
        let removed = self
            .states
            .get_mut(&from)
            .map(|state| state.remove_edge(symbol, to))
            .unwrap_or(false);
        if removed {
            trace!("deleted transition \u{03B4}({src}, {symbol}) -> {dst}");
            Ok(())
        } else {
            Err(AutomatonError::UnknownTransition {
                src: src.to_string(),
                symbol,
                dst: dst.to_string(),
            })
        }
    }

    /// Returns the name of the start state, or `None` if no start state is designated.
    pub fn start_state_name(&self) -> Option<&str> {
        self.start.and_then(|id| self.name_of(id))
    }

    /// Returns the identity of the start state, if there is one.
    pub fn start(&self) -> Option<StateId> {
        self.start
    }

    /// Looks up the identity of the state called `name`.
    pub fn state_id(&self, name: &str) -> Option<StateId> {
        self.names.get_by_left(name).copied()
    }

    /// Looks up the name of the state with identity `id`.
    pub fn name_of(&self, id: StateId) -> Option<&str> {
        self.names.get_by_right(&id).map(String::as_str)
    }

    /// Gives access to the state with identity `id`.
    pub fn state(&self, id: StateId) -> Option<&AutomatonState> {
        self.states.get(&id)
    }

    /// Returns true if a state called `name` exists.
    pub fn contains_state(&self, name: &str) -> bool {
        self.names.contains_left(name)
    }

    /// Returns true if the state `id` is accepting.
    pub fn is_accepting_id(&self, id: StateId) -> bool {
        self.accepting.contains(&id)
    }

    /// Returns true if a state called `name` exists and is accepting.
    pub fn is_accepting(&self, name: &str) -> bool {
        self.state_id(name)
            .is_some_and(|id| self.is_accepting_id(id))
    }

    /// The number of states.
    pub fn size(&self) -> usize {
        self.states.len()
    }

    /// Returns true if the automaton has no states.
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Iterates over all states in the order in which they were created.
    pub fn states(&self) -> impl Iterator<Item = &AutomatonState> + '_ {
        self.states.values()
    }

    /// Names of all states in the order in which they were created.
    pub fn state_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.states.keys().filter_map(|id| self.name_of(*id))
    }

    /// Names of all accepting states in the order in which they were created.
    pub fn accepting_state_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.states
            .keys()
            .filter(|id| self.accepting.contains(*id))
            .filter_map(|id| self.name_of(*id))
    }

    /// Returns the name of the state that `δ(src, symbol)` leads to, if the transition exists.
    /// This does not consult the alphabet, use [`Automaton::step`] for that.
    pub fn transition(&self, src: &str, symbol: char) -> Option<&str> {
        let from = self.state_id(src)?;
        let to = self.states.get(&from)?.successor(symbol)?;
        self.name_of(to)
    }

    /// Iterates over all transitions, grouped by source in creation order and ordered by symbol.
    pub fn transitions(&self) -> impl Iterator<Item = TransitionTuple<'_>> + '_ {
        self.states.values().flat_map(move |state| {
            let src = self.name_of(state.id()).unwrap_or_default();
            state
                .edges()
                .filter_map(move |(sym, to)| Some((src, sym, self.name_of(to)?)))
        })
    }

    /// Returns an [`Evaluator`] that answers queries about `self` in the mode of `self`.
    pub fn evaluator(&self) -> Evaluator<'_> {
        Evaluator::new(self, self.mode)
    }

    /// Checks the structure of the automaton, see [`Evaluator::validate`].
    pub fn validate(&self) -> Validity {
        self.evaluator().validate()
    }

    /// Decides whether `input` is accepted, see [`Evaluator::accepts`].
    pub fn accepts(&self, input: &str) -> bool {
        self.evaluator().accepts(input)
    }

    /// Performs a single step, see [`Evaluator::step`].
    pub fn step(&self, current: &str, symbol: char) -> Option<&str> {
        self.evaluator().step(current, symbol)
    }

    /// Records the complete run on `input`, see [`Evaluator::walkthrough`].
    pub fn walkthrough(&self, input: &str) -> Walkthrough {
        self.evaluator().walkthrough(input)
    }

    fn resolve(&self, name: &str) -> Result<StateId, AutomatonError> {
        self.state_id(name).ok_or_else(|| {
            warn!("no state named {name}");
            AutomatonError::UnknownState(name.to_string())
        })
    }

    /// Renders the transition function as a table, one row per state and one column per symbol.
    /// Start states are marked with `->`, accepting states with `*`. Columns for symbols that are
    /// used by some transition but are not in the alphabet are included as well.
    pub fn transition_table(&self) -> String {
        let symbols = self
            .alphabet
            .universe()
            .chain(self.states.values().flat_map(|q| q.edges().map(|(sym, _)| sym)))
            .unique()
            .sorted()
            .collect_vec();

        let mut b = tabled::builder::Builder::default();
        b.push_record(
            std::iter::once(String::new()).chain(symbols.iter().map(|sym| sym.show())),
        );
        for (id, state) in &self.states {
            let mut row = vec![format!(
                "{}{}{}",
                if self.start == Some(*id) { "->" } else { "" },
                if self.accepting.contains(id) { "*" } else { "" },
                self.name_of(*id).unwrap_or_default()
            )];
            row.extend(symbols.iter().map(|sym| {
                state
                    .successor(*sym)
                    .and_then(|q| self.name_of(q))
                    .unwrap_or("-")
                    .to_string()
            }));
            b.push_record(row);
        }
        b.build().with(tabled::settings::Style::ascii()).to_string()
    }
}

impl Debug for Automaton {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Alphabet: {}", self.alphabet.show())?;
        for state in self.states.values() {
            writeln!(
                f,
                "{}{:?}[start: {}, accepting: {}] {}",
                self.name_of(state.id()).unwrap_or_default(),
                state.id(),
                (self.start == Some(state.id())).show(),
                self.is_accepting_id(state.id()).show(),
                state
                    .edges()
                    .map(|(sym, q)| format!("{}->{}", sym, self.name_of(q).unwrap_or("?")))
                    .join(", ")
            )?;
        }
        Ok(())
    }
}

impl Display for Automaton {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "DFA(States: [{}], Alphabet: [{}])",
            self.state_names().join(", "),
            self.alphabet.universe().join(", ")
        )?;
        write!(f, "{}", self.transition_table())
    }
}

impl<'a> Show for TransitionTuple<'a> {
    fn show(&self) -> String {
        format!("\u{03B4}({}, {}) -> {}", self.0, self.1, self.2)
    }
}
