//! Screen-flow navigation.
//!
//! The active screen is never stored: [`screen_for`] derives it from the
//! session state plus the local [`NavState`], and `NavState` only changes
//! through [`NavReducer`]. Sequence hand-offs arrive as intents
//! (`SplashFinished`, `CelebrationFinished`); everything else is plain
//! stack navigation.

mod intent;
mod reducer;
mod state;

pub use intent::NavIntent;
pub use reducer::NavReducer;
pub use state::{screen_for, AreaScreen, AuthSurface, NavState, Screen, SubScreenKind};
