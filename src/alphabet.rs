use itertools::Itertools;

use crate::show::Show;

/// Represents an alphabet where a symbol is just a single `char`.
///
/// # Example
/// Assume we have a [`CharAlphabet`] over the symbols '0' and '1'. Then a **symbol** would be just
/// one of these characters, e.g. '0'. This is what labels a transition of an
/// [`Automaton`](crate::Automaton) and what an input string is consumed in.
/// ```
/// use dfa_engine::prelude::*;
///
/// let alphabet = CharAlphabet::from("1001");
/// assert_eq!(alphabet.size(), 2);
/// assert!(alphabet.contains('0'));
/// assert!(!alphabet.contains('a'));
/// ```
///
/// The symbols are kept sorted and free of duplicates, so two alphabets over the same symbols
/// compare equal regardless of the order in which the symbols were given.
#[derive(Clone, Hash, PartialEq, Eq, Debug, PartialOrd, Ord, Default)]
pub struct CharAlphabet(pub(crate) Vec<char>);

impl CharAlphabet {
    /// Creates an empty alphabet.
    pub fn empty() -> Self {
        Self(vec![])
    }

    /// Returns the number of symbols in the alphabet.
    pub fn size(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the alphabet has no symbols.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Checks whether `symbol` is one of the symbols of this alphabet.
    pub fn contains(&self, symbol: char) -> bool {
        self.0.binary_search(&symbol).is_ok()
    }

    /// Returns an iterator over all symbols in ascending order.
    pub fn universe(&self) -> impl Iterator<Item = char> + '_ {
        self.0.iter().copied()
    }
}

impl IntoIterator for CharAlphabet {
    type Item = char;
    type IntoIter = std::vec::IntoIter<char>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl From<Vec<char>> for CharAlphabet {
    fn from(value: Vec<char>) -> Self {
        Self::from_iter(value)
    }
}

impl From<&str> for CharAlphabet {
    fn from(value: &str) -> Self {
        Self::from_iter(value.chars())
    }
}

impl<const N: usize> From<[char; N]> for CharAlphabet {
    fn from(value: [char; N]) -> Self {
        Self::from_iter(value)
    }
}

impl FromIterator<char> for CharAlphabet {
    fn from_iter<T: IntoIterator<Item = char>>(iter: T) -> Self {
        Self(iter.into_iter().unique().sorted().collect())
    }
}

impl Show for CharAlphabet {
    fn show(&self) -> String {
        char::show_collection(self.0.iter())
    }
}
