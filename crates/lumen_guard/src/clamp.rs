//! Pure clamp functions.
//!
//! Every function here is total and deterministic given its arguments: bounds
//! and the resolved enforcement flag are passed explicitly, nothing is read
//! from ambient state. An absent candidate always yields the default, and the
//! default is never clamped - defaults are trusted by construction.
//!
//! A clamped value emits a `tracing` event at debug level; a pass-through
//! value emits nothing.

/// Bounds a floating-point style parameter into `[min, max]`.
///
/// - `None` candidate: returns `default` untouched.
/// - Enforcement off: returns the candidate untouched, however far out of
///   range it lies.
/// - NaN candidate with enforcement on: returns `default` (a NaN style
///   parameter is never meaningful, and NaN survives any comparison chain).
/// - Otherwise snaps below-min to `min`, above-max to `max`.
///
/// If the registry owner has set `min > max`, `min` wins; the function stays
/// total rather than panicking on a misconfigured registry.
#[must_use]
pub fn bounded(candidate: Option<f64>, default: f64, min: f64, max: f64, enforced: bool) -> f64 {
    let Some(value) = candidate else {
        return default;
    };
    if !enforced {
        return value;
    }
    if value.is_nan() {
        tracing::debug!(target: "lumen::guard", default, "NaN candidate replaced by default");
        return default;
    }
    let clamped = if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    };
    if clamped != value {
        tracing::debug!(target: "lumen::guard", value, min, max, clamped, "clamped out-of-range value");
    }
    clamped
}

/// Bounds a parameter that can never meaningfully be negative.
///
/// Elevation, border width, spacing and corner radius have no configured
/// minimum, but a negative value is still floored to zero before the upper
/// clamp is applied.
#[must_use]
pub fn bounded_non_negative(candidate: Option<f64>, default: f64, max: f64, enforced: bool) -> f64 {
    bounded(candidate, default, 0.0, max, enforced)
}

/// Bounds an element count into `[min, max]`.
///
/// Integer counterpart of [`bounded`] for things like OTP field counts and
/// app bar action slots.
#[must_use]
pub fn bounded_count(candidate: Option<u32>, default: u32, min: u32, max: u32, enforced: bool) -> u32 {
    let Some(value) = candidate else {
        return default;
    };
    if !enforced {
        return value;
    }
    let clamped = if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    };
    if clamped != value {
        tracing::debug!(target: "lumen::guard", value, min, max, clamped, "clamped out-of-range count");
    }
    clamped
}
