/// Applies `f` to every element of `xs` and returns the results in the same order.
pub fn map<T, U>(xs: &[T], f: impl FnMut(&T) -> U) -> Vec<U> {
    xs.iter().map(f).collect()
}

/// Returns the elements of `xs` for which `predicate` returns `true`, keeping their order.
pub fn filter<T: Clone>(xs: &[T], mut predicate: impl FnMut(&T) -> bool) -> Vec<T> {
    xs.iter().filter(|x| predicate(x)).cloned().collect()
}

/// Left fold of `xs`: `folder` is called with the accumulated value and each element in turn,
/// starting from `initial`.
///
/// Returns `initial` for an empty slice.
pub fn fold<T, A>(xs: &[T], folder: impl FnMut(A, &T) -> A, initial: A) -> A {
    xs.iter().fold(initial, folder)
}

/// Calls `f` on every element of `xs` in order.
pub fn for_each<T>(xs: &[T], f: impl FnMut(&T)) {
    xs.iter().for_each(f)
}
