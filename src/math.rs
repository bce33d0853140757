/// Type alias for sets, we use this to hide which type of `HashSet` we are actually using.
pub type Set<S> = fxhash::FxHashSet<S>;
/// Type alias for maps whose iteration order must be stable, e.g. the outgoing edges of a state.
pub type OrderedMap<K, V> = std::collections::BTreeMap<K, V>;

/// Represents a bijective mapping between `L` and `R`, that is a mapping which associates
/// each `L` with precisely one `R` and vice versa. The automaton uses this to relate state
/// names to state identities.
pub type Bijection<L, R> = bimap::BiBTreeMap<L, R>;
