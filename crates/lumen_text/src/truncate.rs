//! Display-text truncation.

use std::borrow::Cow;

/// Marker appended to truncated text.
pub const ELLIPSIS: &str = "...";

/// Truncates display text to at most `max_length` characters.
///
/// The enforcement flag is resolved by the caller against the relevant bounds
/// registry, exactly as with the numeric clamps. With enforcement off, or text
/// already within bounds, the input is returned borrowed and unchanged.
///
/// Truncated output keeps the first `max_length - 3` characters and appends
/// [`ELLIPSIS`]; the result never exceeds `max_length` characters. When
/// `max_length` is smaller than the ellipsis itself, the ellipsis is clipped
/// to fit, so the length guarantee holds for every input.
///
/// Lengths are counted in Unicode scalar values, not bytes, so multi-byte
/// text is never sliced mid-character.
#[must_use]
pub fn truncate_display(text: &str, max_length: usize, enforced: bool) -> Cow<'_, str> {
    if !enforced {
        return Cow::Borrowed(text);
    }
    let char_count = text.chars().count();
    if char_count <= max_length {
        return Cow::Borrowed(text);
    }

    tracing::debug!(target: "lumen::text", char_count, max_length, "truncating overlong display text");

    if max_length < ELLIPSIS.len() {
        // ELLIPSIS is ASCII, byte indexing is safe here.
        return Cow::Borrowed(&ELLIPSIS[..max_length]);
    }

    let keep = max_length - ELLIPSIS.len();
    let mut out = String::with_capacity(max_length);
    out.extend(text.chars().take(keep));
    out.push_str(ELLIPSIS);
    Cow::Owned(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn within_bounds_is_borrowed_unchanged() {
        let result = truncate_display("hello", 10, true);
        assert_eq!(result, "hello");
        assert!(matches!(result, Cow::Borrowed(_)));
    }

    #[test]
    fn exactly_at_bound_is_unchanged() {
        assert_eq!(truncate_display("hello", 5, true), "hello");
    }

    #[test]
    fn overlong_text_ends_with_ellipsis_and_fits() {
        let result = truncate_display("hello world, this runs long", 10, true);
        assert_eq!(result, "hello w...");
        assert_eq!(result.chars().count(), 10);
        assert!(result.ends_with(ELLIPSIS));
    }

    #[test]
    fn enforcement_off_never_touches_text() {
        let long = "x".repeat(5000);
        assert_eq!(truncate_display(&long, 10, false), long.as_str());
    }

    #[test]
    fn multibyte_text_is_sliced_on_char_boundaries() {
        let text = "héllö wörld étc étc";
        let result = truncate_display(text, 10, true);
        assert_eq!(result.chars().count(), 10);
        assert!(result.ends_with(ELLIPSIS));
        assert_eq!(result, "héllö w...");
    }

    #[test]
    fn tiny_max_length_clips_the_ellipsis() {
        assert_eq!(truncate_display("hello", 2, true), "..");
        assert_eq!(truncate_display("hello", 0, true), "");
        // max_length == 3 keeps zero characters of the input.
        assert_eq!(truncate_display("hello", 3, true), "...");
    }

    #[test]
    fn empty_input_is_untouched() {
        assert_eq!(truncate_display("", 10, true), "");
    }
}
