//! Shared test utilities: tracing setup and a scripted identity provider.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::sync::Semaphore;
use tracing_subscriber::EnvFilter;

use authflow::provider::{IdentityProvider, ProviderError, UserId};

/// Install a test subscriber once; later calls are no-ops.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

type Scripted<T> = Mutex<VecDeque<Result<T, ProviderError>>>;

/// Identity provider double with scripted responses and call counters.
///
/// Responses are consumed in order; when a script runs dry the operation
/// succeeds (sign-in/signup yield [`MockProvider::DEFAULT_USER`]). An
/// optional gate holds `sign_in` until the test releases a permit, for
/// exercising the in-flight guard.
#[derive(Default)]
pub struct MockProvider {
    sign_in: Scripted<UserId>,
    create_user: Scripted<UserId>,
    password_reset: Scripted<()>,
    verification: Scripted<()>,
    sign_out: Scripted<()>,
    sign_in_gate: Mutex<Option<Arc<Semaphore>>>,
    pub sign_in_calls: AtomicUsize,
    pub create_user_calls: AtomicUsize,
    pub password_reset_calls: AtomicUsize,
    pub verification_calls: AtomicUsize,
    pub sign_out_calls: AtomicUsize,
}

impl MockProvider {
    pub const DEFAULT_USER: &'static str = "mock-user";

    pub fn new() -> Self {
        Self::default()
    }

    pub fn then_sign_in(self, result: Result<UserId, ProviderError>) -> Self {
        self.sign_in.lock().unwrap().push_back(result);
        self
    }

    pub fn then_create_user(self, result: Result<UserId, ProviderError>) -> Self {
        self.create_user.lock().unwrap().push_back(result);
        self
    }

    pub fn then_password_reset(self, result: Result<(), ProviderError>) -> Self {
        self.password_reset.lock().unwrap().push_back(result);
        self
    }

    pub fn then_verification(self, result: Result<(), ProviderError>) -> Self {
        self.verification.lock().unwrap().push_back(result);
        self
    }

    pub fn then_sign_out(self, result: Result<(), ProviderError>) -> Self {
        self.sign_out.lock().unwrap().push_back(result);
        self
    }

    /// Hold every `sign_in` call until the returned semaphore gets a permit.
    pub fn gated_sign_in(self) -> (Self, Arc<Semaphore>) {
        let gate = Arc::new(Semaphore::new(0));
        *self.sign_in_gate.lock().unwrap() = Some(Arc::clone(&gate));
        (self, gate)
    }

    fn next<T: Clone>(script: &Scripted<T>, ok: T) -> Result<T, ProviderError> {
        script.lock().unwrap().pop_front().unwrap_or(Ok(ok))
    }
}

#[async_trait]
impl IdentityProvider for MockProvider {
    async fn sign_in(&self, _email: &str, _password: &str) -> Result<UserId, ProviderError> {
        self.sign_in_calls.fetch_add(1, Ordering::SeqCst);
        let gate = self.sign_in_gate.lock().unwrap().clone();
        if let Some(gate) = gate {
            gate.acquire().await.expect("gate closed").forget();
        }
        Self::next(&self.sign_in, UserId::new(Self::DEFAULT_USER))
    }

    async fn create_user(&self, _email: &str, _password: &str) -> Result<UserId, ProviderError> {
        self.create_user_calls.fetch_add(1, Ordering::SeqCst);
        Self::next(&self.create_user, UserId::new(Self::DEFAULT_USER))
    }

    async fn send_password_reset(&self, _email: &str) -> Result<(), ProviderError> {
        self.password_reset_calls.fetch_add(1, Ordering::SeqCst);
        Self::next(&self.password_reset, ())
    }

    async fn send_email_verification(&self, _user_id: &UserId) -> Result<(), ProviderError> {
        self.verification_calls.fetch_add(1, Ordering::SeqCst);
        Self::next(&self.verification, ())
    }

    async fn sign_out(&self) -> Result<(), ProviderError> {
        self.sign_out_calls.fetch_add(1, Ordering::SeqCst);
        Self::next(&self.sign_out, ())
    }
}
