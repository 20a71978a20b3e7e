//! Base trait for reducer-owned state.

/// Marker trait for state folded by a [`crate::flow::Reducer`].
///
/// State is immutable from the outside: reducers consume a state and
/// produce the next one, and `PartialEq` lets callers detect whether a
/// transition actually changed anything.
pub trait FlowState: Clone + PartialEq + Default + Send + 'static {}
