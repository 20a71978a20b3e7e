//! Session state machine.
//!
//! One [`SessionState`] exists per process, owned by [`SessionStore`] and
//! mutated only through [`SessionController`] completion handlers. The
//! store publishes every confirmed transition on the event channel.

mod controller;
mod state;
mod store;

pub use controller::SessionController;
pub use state::{Credentials, SessionState};
pub use store::SessionStore;
