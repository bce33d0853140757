//! Engine for building deterministic finite automata (DFA) piece by piece and evaluating them.
//!
//! The central type is [`Automaton`], which owns the states, the alphabet and the transition
//! function of a DFA. States are created and destroyed by name, transitions are added and removed
//! one at a time, and the alphabet can be replaced at any point. Structural properties that only
//! hold once construction is finished (there is a start state, every state has exactly one
//! transition on every symbol of the alphabet) are not enforced on every mutation but checked on
//! demand by [`Automaton::validate`]. This is what an interactive editor needs, where the user is
//! free to add states and edges in any order.
//!
//! Queries go through an [`Evaluator`]: [`Evaluator::validate`] reports the first structural
//! defect, [`Evaluator::accepts`] decides membership of a word and [`Evaluator::step`] takes a
//! single transition, which lets a front end replay a run at its own pace.
//! [`Evaluator::walkthrough`] records a complete run at once. Whether acceptance queries on an
//! invalid automaton are answered at all is governed by the [`Mode`].
//!
//! Where all parts of an automaton are known up front, [`builder::DfaBuilder`] assembles and
//! validates it in one go.
//!
//! All operations are synchronous and purely in memory. An [`Automaton`] is meant to be owned by
//! a single session, there is no internal locking.
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

/// The prelude is supposed to make using this package easier. Including everything, i.e.
/// `use dfa_engine::prelude::*;` should be enough to use the package.
pub mod prelude {
    pub use super::{
        alphabet::CharAlphabet,
        automaton::{Automaton, AutomatonState, TransitionTuple},
        builder::{BuildError, DfaBuilder},
        error::{AutomatonError, Status},
        evaluator::{Evaluator, Invalidity, Mode, TraceStep, Validity, Verdict, Walkthrough},
        id::StateId,
        math,
        show::Show,
    };
}

/// This module contains type aliases for the collections which are used throughout the crate.
pub mod math;

/// Helper trait for human readable output.
pub mod show;

/// Module that contains definitions for dealing with alphabets.
pub mod alphabet;

/// Identities of states.
pub mod id;

/// Errors reported by mutations of an automaton.
pub mod error;

/// The automaton store, see [`Automaton`].
pub mod automaton;
pub use automaton::Automaton;

/// Validation, acceptance and stepping.
pub mod evaluator;
pub use evaluator::{Evaluator, Mode};

/// Construction of a complete automaton in one go.
pub mod builder;
