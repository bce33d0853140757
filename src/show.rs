use itertools::Itertools;

/// Helper trait which can be used to display states, symbols, transitions and such.
pub trait Show {
    /// Returns a human readable representation of `self`. For a state that is its name, for a
    /// transition (q0, a, q1) it should be `δ(q0, a) -> q1`. This is what validation messages
    /// and walkthrough narrations are assembled from.
    fn show(&self) -> String;

    /// Show a collection of the thing, for a collection of states this should be {q0, q1, q2, ...}
    /// and for a collection of symbols it should be {a, b, ...}.
    fn show_collection<'a, I>(iter: I) -> String
    where
        Self: 'a,
        I: IntoIterator<Item = &'a Self>,
    {
        format!("{{{}}}", iter.into_iter().map(Show::show).join(", "))
    }
}

impl Show for char {
    fn show(&self) -> String {
        self.to_string()
    }
}

impl Show for str {
    fn show(&self) -> String {
        self.to_string()
    }
}

impl Show for String {
    fn show(&self) -> String {
        self.clone()
    }
}

impl Show for bool {
    fn show(&self) -> String {
        match self {
            true => "+",
            false => "-",
        }
        .to_string()
    }
}

impl<S: Show + ?Sized> Show for &S {
    fn show(&self) -> String {
        S::show(*self)
    }
}

impl<S: Show> Show for Vec<S> {
    fn show(&self) -> String {
        S::show_collection(self.iter())
    }
}

impl<S: Show, T: Show> Show for (S, T) {
    fn show(&self) -> String {
        format!("({}, {})", self.0.show(), self.1.show())
    }
}

#[cfg(test)]
mod tests {
    use super::Show;

    #[test]
    fn show_collections() {
        assert_eq!(vec!['0', '1'].show(), "{0, 1}");
        assert_eq!(("q1", '0').show(), "(q1, 0)");
        assert_eq!(Vec::<char>::new().show(), "{}");
    }
}
