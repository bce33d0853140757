use crate::{id::StateId, math::OrderedMap};

/// A state in an [`Automaton`](crate::Automaton). This stores the identity of the state and its
/// outgoing edges, keyed by symbol so that there is at most one edge per symbol. Start and
/// accepting membership are tracked by the automaton, not here.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct AutomatonState {
    id: StateId,
    edges: OrderedMap<char, StateId>,
}

impl AutomatonState {
    /// Creates a new state without outgoing edges.
    pub(crate) fn new(id: StateId) -> Self {
        Self {
            id,
            edges: Default::default(),
        }
    }

    /// The identity of this state.
    pub fn id(&self) -> StateId {
        self.id
    }

    /// Returns the target of the edge leaving on `symbol`, if one exists.
    pub fn successor(&self, symbol: char) -> Option<StateId> {
        self.edges.get(&symbol).copied()
    }

    /// Iterates over all outgoing edges as pairs of symbol and target, ordered by symbol.
    pub fn edges(&self) -> impl Iterator<Item = (char, StateId)> + '_ {
        self.edges.iter().map(|(sym, q)| (*sym, *q))
    }

    /// Returns the number of outgoing edges.
    pub fn out_degree(&self) -> usize {
        self.edges.len()
    }

    /// Inserts the edge on `symbol` to `to` unless an edge on `symbol` already exists, in which
    /// case the existing target is returned and nothing changes.
    pub(crate) fn add_edge(&mut self, symbol: char, to: StateId) -> Result<(), StateId> {
        match self.edges.entry(symbol) {
            std::collections::btree_map::Entry::Occupied(existing) => Err(*existing.get()),
            std::collections::btree_map::Entry::Vacant(slot) => {
                slot.insert(to);
                Ok(())
            }
        }
    }

    /// Removes the edge on `symbol` if it leads to `to`.
    pub(crate) fn remove_edge(&mut self, symbol: char, to: StateId) -> bool {
        if self.edges.get(&symbol) == Some(&to) {
            self.edges.remove(&symbol);
            true
        } else {
            false
        }
    }

    /// Removes all edges leading to `target`, returning the symbols they were labeled with.
    pub(crate) fn remove_outgoing_edges_to(&mut self, target: StateId) -> Vec<char> {
        let symbols: Vec<_> = self
            .edges
            .iter()
            .filter_map(|(sym, q)| (*q == target).then_some(*sym))
            .collect();
        for sym in &symbols {
            self.edges.remove(sym);
        }
        symbols
    }
}
