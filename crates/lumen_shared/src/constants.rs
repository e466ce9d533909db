//! # Guard Defaults
//!
//! Compiled-in limits for every feature area.
//!
//! **CRITICAL:** These values are baked into the binary. A registry's
//! `reset_to_defaults()` restores exactly these numbers, so changing one here
//! changes what "reset" means for every widget.

// =============================================================================
// GLOBAL
// =============================================================================

/// Whether registries enforce their bounds out of the box.
pub const ENFORCE_BY_DEFAULT: bool = true;

// =============================================================================
// BUTTON
// =============================================================================

/// Smallest tappable button edge, logical pixels.
pub const BUTTON_MIN_SIZE: f64 = 8.0;

/// Largest button edge. Anything bigger is a layout bug, not a button.
pub const BUTTON_MAX_SIZE: f64 = 1000.0;

/// Smallest legible button label font.
pub const BUTTON_MIN_FONT_SIZE: f64 = 8.0;

/// Largest button label font.
pub const BUTTON_MAX_FONT_SIZE: f64 = 72.0;

/// Maximum button elevation (shadow depth).
pub const BUTTON_MAX_ELEVATION: f64 = 24.0;

/// Maximum button border stroke width.
pub const BUTTON_MAX_BORDER_WIDTH: f64 = 10.0;

/// Maximum button corner radius.
pub const BUTTON_MAX_BORDER_RADIUS: f64 = 100.0;

/// Maximum padding on any button edge.
pub const BUTTON_MAX_PADDING: f64 = 64.0;

// =============================================================================
// APP BAR
// =============================================================================

/// Smallest usable app bar height.
pub const APP_BAR_MIN_HEIGHT: f64 = 40.0;

/// Largest app bar height (covers expanded/collapsing bars).
pub const APP_BAR_MAX_HEIGHT: f64 = 200.0;

/// Largest app bar title font.
pub const APP_BAR_MAX_FONT_SIZE: f64 = 40.0;

/// Longest app bar title before truncation, characters.
pub const APP_BAR_MAX_TITLE_LENGTH: usize = 100;

/// Maximum app bar elevation.
pub const APP_BAR_MAX_ELEVATION: f64 = 16.0;

/// Most action icons an app bar will render.
pub const APP_BAR_MAX_ACTIONS: u32 = 5;

// =============================================================================
// TEXT
// =============================================================================

/// Smallest renderable text font.
pub const TEXT_MIN_FONT_SIZE: f64 = 6.0;

/// Largest renderable text font.
pub const TEXT_MAX_FONT_SIZE: f64 = 200.0;

/// Longest display text before truncation, characters.
pub const TEXT_MAX_LENGTH: usize = 10_000;

/// Most lines a text block will lay out.
pub const TEXT_MAX_LINES: u32 = 500;

// =============================================================================
// TEXT FIELD
// =============================================================================

/// Smallest text field height.
pub const TEXT_FIELD_MIN_HEIGHT: f64 = 32.0;

/// Largest text field height.
pub const TEXT_FIELD_MAX_HEIGHT: f64 = 300.0;

/// Smallest text field font.
pub const TEXT_FIELD_MIN_FONT_SIZE: f64 = 8.0;

/// Largest text field font.
pub const TEXT_FIELD_MAX_FONT_SIZE: f64 = 48.0;

/// Longest accepted field content, characters.
pub const TEXT_FIELD_MAX_LENGTH: usize = 5_000;

/// Longest hint/placeholder text, characters.
pub const TEXT_FIELD_MAX_HINT_LENGTH: usize = 200;

/// Maximum text field border stroke width.
pub const TEXT_FIELD_MAX_BORDER_WIDTH: f64 = 8.0;

/// Maximum text field corner radius.
pub const TEXT_FIELD_MAX_BORDER_RADIUS: f64 = 50.0;

// =============================================================================
// SEARCH BAR
// =============================================================================

/// Longest search query, characters.
pub const SEARCH_BAR_MAX_QUERY_LENGTH: usize = 256;

/// Most suggestions a search bar will show.
pub const SEARCH_BAR_MAX_SUGGESTIONS: u32 = 20;

/// Largest search bar height.
pub const SEARCH_BAR_MAX_HEIGHT: f64 = 120.0;

/// Largest search bar font.
pub const SEARCH_BAR_MAX_FONT_SIZE: f64 = 32.0;

/// Search queries admitted per rolling minute.
pub const SEARCH_BAR_MAX_QUERIES_PER_MINUTE: u32 = 30;

// =============================================================================
// OTP
// =============================================================================

/// Fewest one-time-code entry fields.
pub const OTP_MIN_FIELDS: u32 = 4;

/// Most one-time-code entry fields.
pub const OTP_MAX_FIELDS: u32 = 8;

/// Smallest OTP field edge.
pub const OTP_MIN_FIELD_SIZE: f64 = 24.0;

/// Largest OTP field edge.
pub const OTP_MAX_FIELD_SIZE: f64 = 96.0;

/// Largest OTP digit font.
pub const OTP_MAX_FONT_SIZE: f64 = 40.0;

/// Consecutive failed verifications before lockout. 0 = unlimited.
pub const OTP_MAX_ATTEMPTS: u32 = 5;

/// How long a triggered lockout lasts, seconds.
pub const OTP_LOCKOUT_SECS: u64 = 300;
