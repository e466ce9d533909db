//! # LUMEN Guard - Bounds Registries & Clamp Engine
//!
//! Normalizes numeric style parameters before they reach a widget tree.
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────────────┐
//! │                    GUARD PIPELINE                      │
//! ├───────────────────────────────────────────────────────┤
//! │  candidate ──► Enforce::resolve ──► clamp ──► widget  │
//! │                      ▲                ▲               │
//! │                 per-call flag    bounds registry      │
//! └───────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Philosophy
//!
//! Guard functions are **total**: malformed or out-of-range input is
//! normalized to a safe value, never rejected. A widget constructor that calls
//! into this crate cannot fail because of a bad style parameter.
//!
//! Registries are plain instances passed by reference. There are no hidden
//! process-wide singletons; whoever owns the registry owns its mutations.

#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod bounds;
pub mod clamp;
pub mod config;

pub use bounds::{
    AppBarBounds, BoundsRegistry, ButtonBounds, OtpBounds, SearchBarBounds, TextBounds,
    TextFieldBounds,
};
pub use clamp::{bounded, bounded_count, bounded_non_negative};
pub use config::{ConfigError, GuardConfig};
pub use lumen_shared::Enforce;
