//! Unidirectional data-flow primitives.
//!
//! The screen flow is driven the same way everywhere: an intent arrives, a
//! pure reducer folds it into the state, and the view is derived from the
//! result. Side effects (provider calls, timers) happen outside the
//! reducer and feed back in as new intents.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ derived Screen
//!    ↑                                  │
//!    └──────────────────────────────────┘
//! ```

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::FlowState;
