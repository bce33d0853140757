use std::fmt::Debug;

/// The integer type backing a [`StateId`].
pub type DefaultIdType = u32;

/// Stable identity of a state inside one [`Automaton`](crate::Automaton). Identities are handed
/// out by the store in increasing order and never reused during its lifetime, not even after a
/// state is deleted or the store is reset. Equality and hashing of states go through this
/// identity, never through the name of the state.
#[derive(Clone, Copy, Eq, PartialEq, PartialOrd, Ord, Hash)]
pub struct StateId(pub(crate) DefaultIdType);

impl Debug for StateId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Monotonic source of [`StateId`]s, scoped to a single store.
#[derive(Clone, Debug, Default)]
pub(crate) struct IdGenerator {
    next: DefaultIdType,
}

impl IdGenerator {
    pub(crate) fn fresh(&mut self) -> StateId {
        let id = StateId(self.next);
        self.next += 1;
        id
    }
}
