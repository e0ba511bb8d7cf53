//! Savor — a terminal recipe browser.
//!
//! The application is split into a thin data layer and a UI layer built on
//! unidirectional state updates:
//!
//! - [`api`] talks to the external recipe service and maps responses into
//!   domain records or typed failures.
//! - [`config`] loads and validates the TOML configuration.
//! - [`session`] persists the handful of key-value session flags (login
//!   state, token, username, onboarding marker).
//! - [`ui`] owns the event loop, the per-screen state machines, and the
//!   search coordinator that debounces input and discards stale completions.

pub mod api;
pub mod config;
pub mod session;
pub mod ui;
