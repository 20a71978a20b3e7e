//! End-to-end screen flow: splash, login, celebration, authenticated area,
//! signup hand-back, sign-out.

mod common;

use std::sync::Arc;
use std::time::Duration;

use authflow::events::AuthEvent;
use authflow::nav::{Screen, SubScreenKind};
use authflow::provider::{ProviderError, UserId};
use authflow::runtime::AuthRuntime;
use authflow::session::{Credentials, SessionState};

use common::MockProvider;

fn runtime_with(provider: MockProvider) -> AuthRuntime {
    common::init_tracing();
    AuthRuntime::new(Arc::new(provider))
}

fn creds() -> Credentials {
    Credentials::new("user@example.com", "secret1")
}

#[tokio::test(start_paused = true)]
async fn splash_gates_the_login_surface() {
    let mut runtime = runtime_with(MockProvider::new());
    runtime.start();
    assert_eq!(runtime.screen(), Screen::Splash);

    // Part-way through, cosmetic phases have fired but the gate has not.
    tokio::time::sleep(Duration::from_millis(1500)).await;
    runtime.pump();
    assert_eq!(runtime.screen(), Screen::Splash);

    let splash = runtime.splash_handle().expect("splash started").clone();
    splash.wait().await;
    runtime.pump();
    assert_eq!(runtime.screen(), Screen::Login);
}

#[tokio::test(start_paused = true)]
async fn cancelled_splash_never_hands_off() {
    let mut runtime = runtime_with(MockProvider::new());
    runtime.start();

    let splash = runtime.splash_handle().expect("splash started").clone();
    splash.cancel();
    tokio::time::sleep(Duration::from_secs(10)).await;
    runtime.pump();

    // The completion flag stays down for good on a cancelled sequence.
    assert!(!splash.is_complete());
    assert_eq!(runtime.screen(), Screen::Splash);
}

#[tokio::test(start_paused = true)]
async fn login_celebrates_before_entering_the_authenticated_area() {
    let mut runtime = runtime_with(MockProvider::new().then_sign_in(Ok(UserId::new("u1"))));
    runtime.start();
    runtime.splash_handle().unwrap().clone().wait().await;
    runtime.pump();

    runtime.login(&creds()).await;
    assert_eq!(
        runtime.session(),
        SessionState::Authenticated {
            user_id: UserId::new("u1")
        }
    );
    // Success feedback still playing on the login surface.
    assert_eq!(runtime.screen(), Screen::Login);

    let celebration = runtime.celebration_handle().expect("celebrating").clone();
    celebration.wait().await;
    runtime.pump();
    assert_eq!(runtime.screen(), Screen::Authenticated);
}

#[tokio::test(start_paused = true)]
async fn menu_navigation_and_sign_out() {
    let mut runtime = runtime_with(MockProvider::new());
    runtime.start();
    runtime.splash_handle().unwrap().clone().wait().await;
    runtime.pump();

    runtime.login(&creds()).await;
    runtime.celebration_handle().unwrap().clone().wait().await;
    runtime.pump();

    runtime.open_menu();
    assert_eq!(runtime.screen(), Screen::Menu);
    runtime.open_sub_screen(SubScreenKind::Contact);
    assert_eq!(runtime.screen(), Screen::SubScreen(SubScreenKind::Contact));
    runtime.back();
    assert_eq!(runtime.screen(), Screen::Menu);

    runtime.sign_out().await;
    assert_eq!(runtime.session(), SessionState::Unauthenticated);
    // Back on login; the next login celebrates again.
    assert_eq!(runtime.screen(), Screen::Login);
}

#[tokio::test(start_paused = true)]
async fn sign_out_during_celebration_cancels_it() {
    let mut runtime = runtime_with(MockProvider::new());
    runtime.start();
    runtime.splash_handle().unwrap().clone().wait().await;
    runtime.pump();

    runtime.login(&creds()).await;
    let celebration = runtime.celebration_handle().expect("celebrating").clone();

    runtime.sign_out().await;
    assert!(celebration.is_cancelled());
    assert_eq!(runtime.screen(), Screen::Login);

    // The orphaned hand-off must never arrive.
    tokio::time::sleep(Duration::from_secs(5)).await;
    runtime.pump();
    assert_eq!(runtime.screen(), Screen::Login);
}

#[tokio::test(start_paused = true)]
async fn signup_hands_back_to_login_after_delay() {
    let mut runtime = runtime_with(MockProvider::new().then_create_user(Ok(UserId::new("u2"))));
    runtime.start();
    runtime.splash_handle().unwrap().clone().wait().await;
    runtime.pump();

    runtime.show_signup();
    assert_eq!(runtime.screen(), Screen::SignUp);

    runtime.signup(&creds(), "secret1").await;
    // Account exists but the user is not signed in; the surface holds
    // until the hand-back delay elapses.
    assert_eq!(runtime.session(), SessionState::Unauthenticated);
    assert_eq!(runtime.screen(), Screen::SignUp);

    let handback = runtime.handback_handle().expect("hand-back scheduled").clone();
    handback.wait().await;
    runtime.pump();
    assert_eq!(runtime.screen(), Screen::Login);
}

#[tokio::test(start_paused = true)]
async fn password_reset_surfaces_as_notice_only() {
    let mut runtime = runtime_with(
        MockProvider::new().then_password_reset(Err(ProviderError::TooManyRequests)),
    );
    runtime.start();
    runtime.splash_handle().unwrap().clone().wait().await;
    runtime.pump();

    runtime.request_password_reset("user@example.com").await;
    assert_eq!(runtime.screen(), Screen::Login);
    let notices = runtime.drain_notices();
    assert_eq!(notices.len(), 1);
    assert!(matches!(notices[0], AuthEvent::PasswordResetFailed(_)));
    assert!(runtime.drain_notices().is_empty());
}

#[tokio::test(start_paused = true)]
async fn dropping_the_runtime_cancels_live_sequences() {
    let mut runtime = runtime_with(MockProvider::new());
    runtime.start();
    let splash = runtime.splash_handle().expect("splash started").clone();

    drop(runtime);
    assert!(splash.is_cancelled());
}
