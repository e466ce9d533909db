//! # LUMEN Shared - Defaults & Common Types
//!
//! The compiled-in limits every guard registry is born with, plus the
//! tri-state enforcement override used across the workspace.
//!
//! ## Architecture Rules
//!
//! 1. **No dependencies** - every crate in the workspace links this
//! 2. **Constants are the contract** - widgets rely on these exact values
//!    after a `reset_to_defaults()`
//! 3. **No behavior** - clamping and sanitizing live in their own crates

#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod constants;
pub mod enforce;

pub use enforce::Enforce;
