//! Client-side authentication and navigation core.
//!
//! Owns the session state machine for a login/signup flow against a remote
//! identity provider: credential validation, the single in-flight
//! authentication request, translation of provider failures into displayable
//! categories, and the timed splash/celebration hand-offs that gate entry
//! into the authenticated area.
//!
//! # Architecture
//!
//! ```text
//! credentials ──→ validate ──→ SessionController ──→ IdentityProvider
//!                                    │
//!                                    ▼
//!                              SessionStore ──→ AuthEvent ──→ NavReducer
//!                                    │                            │
//!                                    └────────── screen_for ◄─────┘
//! ```
//!
//! The presentation layer never mutates state directly: it submits
//! credentials and navigation intents, and re-renders from the derived
//! [`nav::Screen`].

pub mod choreography;
pub mod error;
pub mod events;
pub mod flow;
pub mod nav;
pub mod provider;
pub mod runtime;
pub mod sequencer;
pub mod session;
pub mod validate;
