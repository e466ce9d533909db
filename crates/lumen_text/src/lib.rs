//! # LUMEN Text - Sanitizers
//!
//! String normalization for widget display and one-time-code entry.
//!
//! ## Design Philosophy
//!
//! Same contract as the clamp engine: every function is total on any input
//! string. Overlong text is truncated, foreign characters are dropped, and
//! nothing is ever rejected. Character counts are Unicode-scalar based, so
//! multi-byte input never causes a mid-character slice.

#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod filter;
pub mod truncate;

pub use filter::sanitize_code;
pub use truncate::{truncate_display, ELLIPSIS};
