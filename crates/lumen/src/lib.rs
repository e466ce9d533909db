//! # LUMEN - Guard Subsystem
//!
//! Everything a themed widget needs to defend itself, in one import:
//!
//! - **Bounds registries & clamp engine** ([`guard`]) - numeric style
//!   parameters normalized into configured limits
//! - **Text sanitizers** ([`text`]) - display truncation and one-time-code
//!   character filtering
//! - **Abuse containment** ([`security`]) - attempt lockout, rate limiting,
//!   and the callback panic boundary
//!
//! ## Example
//!
//! ```rust
//! use lumen::{ButtonBounds, Enforce};
//!
//! let bounds = ButtonBounds::default();
//! // A hostile 99999.0 width lands on the configured maximum.
//! let width = bounds.clamp_size(Some(99_999.0), 48.0, Enforce::Inherit);
//! assert_eq!(width, 1000.0);
//! ```

#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub use lumen_guard as guard;
pub use lumen_security as security;
pub use lumen_shared as shared;
pub use lumen_text as text;

pub use lumen_guard::{
    bounded, bounded_count, bounded_non_negative, AppBarBounds, BoundsRegistry, ButtonBounds,
    ConfigError, GuardConfig, OtpBounds, SearchBarBounds, TextBounds, TextFieldBounds,
};
pub use lumen_security::{safe_invoke, safe_invoke_with, AttemptTracker, RateLimiter};
pub use lumen_shared::Enforce;
pub use lumen_text::{sanitize_code, truncate_display, ELLIPSIS};
