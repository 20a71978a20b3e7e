//! Splash and celebration timelines.
//!
//! The original flow chained these as nested delayed callbacks; here each
//! hand-off is one declarative [`Sequence`]. Interior phases exist only so
//! the presentation layer can drive its animations — navigation observes
//! nothing but the terminal event of each sequence.

use std::sync::mpsc::Sender;
use std::time::Duration;

use crate::events::AuthEvent;
use crate::sequencer::Sequence;

/// Total splash duration before the login surface is shown.
pub const SPLASH_DURATION: Duration = Duration::from_millis(3000);

/// How long the post-login celebration holds the login surface.
pub const CELEBRATION_DURATION: Duration = Duration::from_millis(2000);

/// Pause on the signup surface after success before handing back to login.
pub const SIGNUP_HANDBACK_DELAY: Duration = Duration::from_millis(2000);

/// Interior splash animation phases, in firing order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplashPhase {
    /// Title and subtitle slide into place (500 ms).
    TextSlideIn,
    /// Icon springs up past its resting size (800 ms).
    IconBounce,
    /// Icon settles back to resting size (1100 ms).
    IconSettle,
    /// Icon tilts one way (1200 ms).
    WiggleLeft,
    /// Icon tilts back the other way (1700 ms).
    WiggleRight,
    /// Icon returns upright (2200 ms).
    WiggleSettle,
}

/// The splash timeline: six cosmetic phases, then the gating hand-off to
/// the login surface at [`SPLASH_DURATION`].
pub fn splash_sequence(events: Sender<AuthEvent>) -> Sequence {
    let cosmetic = |tx: &Sender<AuthEvent>, phase: SplashPhase| {
        let tx = tx.clone();
        move || {
            let _ = tx.send(AuthEvent::SplashCosmetic(phase));
        }
    };
    let terminal = events.clone();
    Sequence::new()
        .then(Duration::from_millis(500), cosmetic(&events, SplashPhase::TextSlideIn))
        .then(Duration::from_millis(300), cosmetic(&events, SplashPhase::IconBounce))
        .then(Duration::from_millis(300), cosmetic(&events, SplashPhase::IconSettle))
        .then(Duration::from_millis(100), cosmetic(&events, SplashPhase::WiggleLeft))
        .then(Duration::from_millis(500), cosmetic(&events, SplashPhase::WiggleRight))
        .then(Duration::from_millis(500), cosmetic(&events, SplashPhase::WiggleSettle))
        .then(Duration::from_millis(800), move || {
            let _ = terminal.send(AuthEvent::SplashFinished);
        })
}

/// The post-login celebration: confetti renders immediately from the
/// session state; the only scheduled action is the gating hand-off into
/// the authenticated area.
pub fn celebration_sequence(events: Sender<AuthEvent>) -> Sequence {
    Sequence::new().then(CELEBRATION_DURATION, move || {
        let _ = events.send(AuthEvent::CelebrationFinished);
    })
}

/// The post-signup hand-back to the login surface.
pub fn signup_handback_sequence(events: Sender<AuthEvent>) -> Sequence {
    Sequence::new().then(SIGNUP_HANDBACK_DELAY, move || {
        let _ = events.send(AuthEvent::SignupReturnToLogin);
    })
}
