//! # LUMEN Security - Abuse Containment
//!
//! The imperative half of the guard subsystem. Widgets call these around
//! business actions (an OTP verification, a search dispatch), not during
//! build.
//!
//! ## Architecture
//!
//! ```text
//! OTP HANDLER                      SEARCH HANDLER
//!     │                                │
//!     │── record_attempt ──► Tracker   │── is_query_allowed ──► Limiter
//!     │◄─ admit/reject ────┘           │◄─ admit/reject ──────┘
//!     │                                │
//!     └── safe_invoke(on_complete) ────┴── safe_invoke(on_result)
//! ```
//!
//! All time-dependent operations sample the monotonic clock at call time and
//! have `_at(now)` twins for deterministic tests. Nothing here blocks, spawns,
//! or schedules.

#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod attempt;
pub mod invoke;
pub mod rate;

pub use attempt::AttemptTracker;
pub use invoke::{safe_invoke, safe_invoke_with};
pub use rate::RateLimiter;
