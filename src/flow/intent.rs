//! Base trait for flow intents.

/// Marker trait for the inputs a reducer folds: user actions and the
/// terminal events of timed sequences.
pub trait Intent: Clone + Send + 'static {}
