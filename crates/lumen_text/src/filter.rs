//! Character-class filtering for one-time-code entry.

/// Strips everything but code characters from pasted or typed input.
///
/// Numeric mode keeps ASCII decimal digits only; relaxed mode keeps ASCII
/// alphanumerics. Order is preserved and the result may be empty. This runs on
/// every OTP field change, so pasted text like `"12-34-56"` lands as
/// `"123456"` without bothering the user.
#[must_use]
pub fn sanitize_code(input: &str, numeric_only: bool) -> String {
    let sanitized: String = input
        .chars()
        .filter(|c| {
            if numeric_only {
                c.is_ascii_digit()
            } else {
                c.is_ascii_alphanumeric()
            }
        })
        .collect();

    if sanitized.len() != input.len() {
        tracing::debug!(
            target: "lumen::text",
            dropped = input.chars().count() - sanitized.chars().count(),
            numeric_only,
            "dropped foreign characters from code input"
        );
    }
    sanitized
}
