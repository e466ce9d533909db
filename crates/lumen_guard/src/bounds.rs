//! Bounds registries, one per feature area.
//!
//! A registry is a plain struct of public numeric limits plus one
//! `enforce_validation` flag. Fields are public on purpose: the registry
//! trusts its owner, and direct assignment is the supported way to tune a
//! single bound. `Default` yields the compiled-in limits from
//! [`lumen_shared::constants`], and `reset_to_defaults()` restores them at any
//! time.
//!
//! Clamp methods on each registry resolve the per-call [`Enforce`] override
//! against the registry's own flag and delegate to the pure functions in
//! [`crate::clamp`].

use lumen_shared::constants;
use lumen_shared::Enforce;
use serde::{Deserialize, Serialize};

use crate::clamp::{bounded, bounded_count, bounded_non_negative};

/// Operations common to every feature-area registry.
pub trait BoundsRegistry {
    /// Turns enforcement on.
    fn enable_security(&mut self);

    /// Turns enforcement off. Clamp calls become pass-through.
    fn disable_security(&mut self);

    /// Restores every bound and the enforcement flag to compiled-in defaults.
    fn reset_to_defaults(&mut self);

    /// Current state of the global enforcement flag.
    fn is_enforcing(&self) -> bool;
}

// =============================================================================
// BUTTON
// =============================================================================

/// Limits for themed buttons.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ButtonBounds {
    /// Smallest button edge.
    pub min_size: f64,
    /// Largest button edge.
    pub max_size: f64,
    /// Smallest label font.
    pub min_font_size: f64,
    /// Largest label font.
    pub max_font_size: f64,
    /// Largest elevation.
    pub max_elevation: f64,
    /// Largest border stroke width.
    pub max_border_width: f64,
    /// Largest corner radius.
    pub max_border_radius: f64,
    /// Largest padding on any edge.
    pub max_padding: f64,
    /// Whether clamping is applied at all.
    pub enforce_validation: bool,
}

impl Default for ButtonBounds {
    fn default() -> Self {
        Self {
            min_size: constants::BUTTON_MIN_SIZE,
            max_size: constants::BUTTON_MAX_SIZE,
            min_font_size: constants::BUTTON_MIN_FONT_SIZE,
            max_font_size: constants::BUTTON_MAX_FONT_SIZE,
            max_elevation: constants::BUTTON_MAX_ELEVATION,
            max_border_width: constants::BUTTON_MAX_BORDER_WIDTH,
            max_border_radius: constants::BUTTON_MAX_BORDER_RADIUS,
            max_padding: constants::BUTTON_MAX_PADDING,
            enforce_validation: constants::ENFORCE_BY_DEFAULT,
        }
    }
}

impl BoundsRegistry for ButtonBounds {
    fn enable_security(&mut self) {
        self.enforce_validation = true;
    }

    fn disable_security(&mut self) {
        self.enforce_validation = false;
    }

    fn reset_to_defaults(&mut self) {
        *self = Self::default();
    }

    fn is_enforcing(&self) -> bool {
        self.enforce_validation
    }
}

impl ButtonBounds {
    /// Bounds a width or height candidate.
    #[must_use]
    pub fn clamp_size(&self, candidate: Option<f64>, default: f64, enforce: Enforce) -> f64 {
        bounded(candidate, default, self.min_size, self.max_size, enforce.resolve(self.enforce_validation))
    }

    /// Bounds a label font size candidate.
    #[must_use]
    pub fn clamp_font_size(&self, candidate: Option<f64>, default: f64, enforce: Enforce) -> f64 {
        bounded(candidate, default, self.min_font_size, self.max_font_size, enforce.resolve(self.enforce_validation))
    }

    /// Bounds an elevation candidate. Negative elevation floors to zero.
    #[must_use]
    pub fn clamp_elevation(&self, candidate: Option<f64>, default: f64, enforce: Enforce) -> f64 {
        bounded_non_negative(candidate, default, self.max_elevation, enforce.resolve(self.enforce_validation))
    }

    /// Bounds a border stroke width candidate.
    #[must_use]
    pub fn clamp_border_width(&self, candidate: Option<f64>, default: f64, enforce: Enforce) -> f64 {
        bounded_non_negative(candidate, default, self.max_border_width, enforce.resolve(self.enforce_validation))
    }

    /// Bounds a corner radius candidate.
    #[must_use]
    pub fn clamp_border_radius(&self, candidate: Option<f64>, default: f64, enforce: Enforce) -> f64 {
        bounded_non_negative(candidate, default, self.max_border_radius, enforce.resolve(self.enforce_validation))
    }

    /// Bounds a padding candidate.
    #[must_use]
    pub fn clamp_padding(&self, candidate: Option<f64>, default: f64, enforce: Enforce) -> f64 {
        bounded_non_negative(candidate, default, self.max_padding, enforce.resolve(self.enforce_validation))
    }
}

// =============================================================================
// APP BAR
// =============================================================================

/// Limits for app bars.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppBarBounds {
    /// Smallest bar height.
    pub min_height: f64,
    /// Largest bar height.
    pub max_height: f64,
    /// Largest title font.
    pub max_font_size: f64,
    /// Longest title before truncation, characters.
    pub max_title_length: usize,
    /// Largest elevation.
    pub max_elevation: f64,
    /// Most action icons rendered.
    pub max_actions: u32,
    /// Whether clamping is applied at all.
    pub enforce_validation: bool,
}

impl Default for AppBarBounds {
    fn default() -> Self {
        Self {
            min_height: constants::APP_BAR_MIN_HEIGHT,
            max_height: constants::APP_BAR_MAX_HEIGHT,
            max_font_size: constants::APP_BAR_MAX_FONT_SIZE,
            max_title_length: constants::APP_BAR_MAX_TITLE_LENGTH,
            max_elevation: constants::APP_BAR_MAX_ELEVATION,
            max_actions: constants::APP_BAR_MAX_ACTIONS,
            enforce_validation: constants::ENFORCE_BY_DEFAULT,
        }
    }
}

impl BoundsRegistry for AppBarBounds {
    fn enable_security(&mut self) {
        self.enforce_validation = true;
    }

    fn disable_security(&mut self) {
        self.enforce_validation = false;
    }

    fn reset_to_defaults(&mut self) {
        *self = Self::default();
    }

    fn is_enforcing(&self) -> bool {
        self.enforce_validation
    }
}

impl AppBarBounds {
    /// Bounds a bar height candidate.
    #[must_use]
    pub fn clamp_height(&self, candidate: Option<f64>, default: f64, enforce: Enforce) -> f64 {
        bounded(candidate, default, self.min_height, self.max_height, enforce.resolve(self.enforce_validation))
    }

    /// Bounds a title font size candidate.
    #[must_use]
    pub fn clamp_font_size(&self, candidate: Option<f64>, default: f64, enforce: Enforce) -> f64 {
        bounded_non_negative(candidate, default, self.max_font_size, enforce.resolve(self.enforce_validation))
    }

    /// Bounds an elevation candidate.
    #[must_use]
    pub fn clamp_elevation(&self, candidate: Option<f64>, default: f64, enforce: Enforce) -> f64 {
        bounded_non_negative(candidate, default, self.max_elevation, enforce.resolve(self.enforce_validation))
    }

    /// Bounds the number of action icons.
    #[must_use]
    pub fn clamp_actions(&self, candidate: Option<u32>, default: u32, enforce: Enforce) -> u32 {
        bounded_count(candidate, default, 0, self.max_actions, enforce.resolve(self.enforce_validation))
    }
}

// =============================================================================
// TEXT
// =============================================================================

/// Limits for display text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextBounds {
    /// Smallest font.
    pub min_font_size: f64,
    /// Largest font.
    pub max_font_size: f64,
    /// Longest display text before truncation, characters.
    pub max_text_length: usize,
    /// Most lines laid out.
    pub max_lines: u32,
    /// Whether clamping is applied at all.
    pub enforce_validation: bool,
}

impl Default for TextBounds {
    fn default() -> Self {
        Self {
            min_font_size: constants::TEXT_MIN_FONT_SIZE,
            max_font_size: constants::TEXT_MAX_FONT_SIZE,
            max_text_length: constants::TEXT_MAX_LENGTH,
            max_lines: constants::TEXT_MAX_LINES,
            enforce_validation: constants::ENFORCE_BY_DEFAULT,
        }
    }
}

impl BoundsRegistry for TextBounds {
    fn enable_security(&mut self) {
        self.enforce_validation = true;
    }

    fn disable_security(&mut self) {
        self.enforce_validation = false;
    }

    fn reset_to_defaults(&mut self) {
        *self = Self::default();
    }

    fn is_enforcing(&self) -> bool {
        self.enforce_validation
    }
}

impl TextBounds {
    /// Bounds a font size candidate.
    #[must_use]
    pub fn clamp_font_size(&self, candidate: Option<f64>, default: f64, enforce: Enforce) -> f64 {
        bounded(candidate, default, self.min_font_size, self.max_font_size, enforce.resolve(self.enforce_validation))
    }

    /// Bounds a max-lines candidate. A text block renders at least one line.
    #[must_use]
    pub fn clamp_lines(&self, candidate: Option<u32>, default: u32, enforce: Enforce) -> u32 {
        bounded_count(candidate, default, 1, self.max_lines, enforce.resolve(self.enforce_validation))
    }
}

// =============================================================================
// TEXT FIELD
// =============================================================================

/// Limits for text input fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextFieldBounds {
    /// Smallest field height.
    pub min_height: f64,
    /// Largest field height.
    pub max_height: f64,
    /// Smallest font.
    pub min_font_size: f64,
    /// Largest font.
    pub max_font_size: f64,
    /// Longest accepted content, characters.
    pub max_text_length: usize,
    /// Longest hint/placeholder text, characters.
    pub max_hint_length: usize,
    /// Largest border stroke width.
    pub max_border_width: f64,
    /// Largest corner radius.
    pub max_border_radius: f64,
    /// Whether clamping is applied at all.
    pub enforce_validation: bool,
}

impl Default for TextFieldBounds {
    fn default() -> Self {
        Self {
            min_height: constants::TEXT_FIELD_MIN_HEIGHT,
            max_height: constants::TEXT_FIELD_MAX_HEIGHT,
            min_font_size: constants::TEXT_FIELD_MIN_FONT_SIZE,
            max_font_size: constants::TEXT_FIELD_MAX_FONT_SIZE,
            max_text_length: constants::TEXT_FIELD_MAX_LENGTH,
            max_hint_length: constants::TEXT_FIELD_MAX_HINT_LENGTH,
            max_border_width: constants::TEXT_FIELD_MAX_BORDER_WIDTH,
            max_border_radius: constants::TEXT_FIELD_MAX_BORDER_RADIUS,
            enforce_validation: constants::ENFORCE_BY_DEFAULT,
        }
    }
}

impl BoundsRegistry for TextFieldBounds {
    fn enable_security(&mut self) {
        self.enforce_validation = true;
    }

    fn disable_security(&mut self) {
        self.enforce_validation = false;
    }

    fn reset_to_defaults(&mut self) {
        *self = Self::default();
    }

    fn is_enforcing(&self) -> bool {
        self.enforce_validation
    }
}

impl TextFieldBounds {
    /// Bounds a field height candidate.
    #[must_use]
    pub fn clamp_height(&self, candidate: Option<f64>, default: f64, enforce: Enforce) -> f64 {
        bounded(candidate, default, self.min_height, self.max_height, enforce.resolve(self.enforce_validation))
    }

    /// Bounds a font size candidate.
    #[must_use]
    pub fn clamp_font_size(&self, candidate: Option<f64>, default: f64, enforce: Enforce) -> f64 {
        bounded(candidate, default, self.min_font_size, self.max_font_size, enforce.resolve(self.enforce_validation))
    }

    /// Bounds a border stroke width candidate.
    #[must_use]
    pub fn clamp_border_width(&self, candidate: Option<f64>, default: f64, enforce: Enforce) -> f64 {
        bounded_non_negative(candidate, default, self.max_border_width, enforce.resolve(self.enforce_validation))
    }

    /// Bounds a corner radius candidate.
    #[must_use]
    pub fn clamp_border_radius(&self, candidate: Option<f64>, default: f64, enforce: Enforce) -> f64 {
        bounded_non_negative(candidate, default, self.max_border_radius, enforce.resolve(self.enforce_validation))
    }
}

// =============================================================================
// SEARCH BAR
// =============================================================================

/// Limits for search bars.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchBarBounds {
    /// Longest query, characters.
    pub max_query_length: usize,
    /// Most suggestions shown.
    pub max_suggestions: u32,
    /// Largest bar height.
    pub max_height: f64,
    /// Largest font.
    pub max_font_size: f64,
    /// Queries admitted per rolling minute.
    pub max_queries_per_minute: u32,
    /// Whether clamping is applied at all.
    pub enforce_validation: bool,
}

impl Default for SearchBarBounds {
    fn default() -> Self {
        Self {
            max_query_length: constants::SEARCH_BAR_MAX_QUERY_LENGTH,
            max_suggestions: constants::SEARCH_BAR_MAX_SUGGESTIONS,
            max_height: constants::SEARCH_BAR_MAX_HEIGHT,
            max_font_size: constants::SEARCH_BAR_MAX_FONT_SIZE,
            max_queries_per_minute: constants::SEARCH_BAR_MAX_QUERIES_PER_MINUTE,
            enforce_validation: constants::ENFORCE_BY_DEFAULT,
        }
    }
}

impl BoundsRegistry for SearchBarBounds {
    fn enable_security(&mut self) {
        self.enforce_validation = true;
    }

    fn disable_security(&mut self) {
        self.enforce_validation = false;
    }

    fn reset_to_defaults(&mut self) {
        *self = Self::default();
    }

    fn is_enforcing(&self) -> bool {
        self.enforce_validation
    }
}

impl SearchBarBounds {
    /// Bounds a bar height candidate.
    #[must_use]
    pub fn clamp_height(&self, candidate: Option<f64>, default: f64, enforce: Enforce) -> f64 {
        bounded_non_negative(candidate, default, self.max_height, enforce.resolve(self.enforce_validation))
    }

    /// Bounds a font size candidate.
    #[must_use]
    pub fn clamp_font_size(&self, candidate: Option<f64>, default: f64, enforce: Enforce) -> f64 {
        bounded_non_negative(candidate, default, self.max_font_size, enforce.resolve(self.enforce_validation))
    }

    /// Bounds the number of suggestions shown.
    #[must_use]
    pub fn clamp_suggestions(&self, candidate: Option<u32>, default: u32, enforce: Enforce) -> u32 {
        bounded_count(candidate, default, 0, self.max_suggestions, enforce.resolve(self.enforce_validation))
    }
}

// =============================================================================
// OTP
// =============================================================================

/// Limits for one-time-code entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OtpBounds {
    /// Fewest entry fields.
    pub min_fields: u32,
    /// Most entry fields.
    pub max_fields: u32,
    /// Smallest field edge.
    pub min_field_size: f64,
    /// Largest field edge.
    pub max_field_size: f64,
    /// Largest digit font.
    pub max_font_size: f64,
    /// Consecutive failed verifications before lockout. 0 = unlimited.
    pub max_attempts: u32,
    /// How long a triggered lockout lasts, seconds.
    pub lockout_secs: u64,
    /// Whether clamping is applied at all.
    pub enforce_validation: bool,
}

impl Default for OtpBounds {
    fn default() -> Self {
        Self {
            min_fields: constants::OTP_MIN_FIELDS,
            max_fields: constants::OTP_MAX_FIELDS,
            min_field_size: constants::OTP_MIN_FIELD_SIZE,
            max_field_size: constants::OTP_MAX_FIELD_SIZE,
            max_font_size: constants::OTP_MAX_FONT_SIZE,
            max_attempts: constants::OTP_MAX_ATTEMPTS,
            lockout_secs: constants::OTP_LOCKOUT_SECS,
            enforce_validation: constants::ENFORCE_BY_DEFAULT,
        }
    }
}

impl BoundsRegistry for OtpBounds {
    fn enable_security(&mut self) {
        self.enforce_validation = true;
    }

    fn disable_security(&mut self) {
        self.enforce_validation = false;
    }

    fn reset_to_defaults(&mut self) {
        *self = Self::default();
    }

    fn is_enforcing(&self) -> bool {
        self.enforce_validation
    }
}

impl OtpBounds {
    /// Bounds the number of entry fields.
    #[must_use]
    pub fn clamp_field_count(&self, candidate: Option<u32>, default: u32, enforce: Enforce) -> u32 {
        bounded_count(candidate, default, self.min_fields, self.max_fields, enforce.resolve(self.enforce_validation))
    }

    /// Bounds an entry field edge size.
    #[must_use]
    pub fn clamp_field_size(&self, candidate: Option<f64>, default: f64, enforce: Enforce) -> f64 {
        bounded(candidate, default, self.min_field_size, self.max_field_size, enforce.resolve(self.enforce_validation))
    }

    /// Bounds a digit font size candidate.
    #[must_use]
    pub fn clamp_font_size(&self, candidate: Option<f64>, default: f64, enforce: Enforce) -> f64 {
        bounded_non_negative(candidate, default, self.max_font_size, enforce.resolve(self.enforce_validation))
    }
}
