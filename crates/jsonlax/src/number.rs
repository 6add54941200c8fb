//! Leading-prefix numeric coercion for primitive tokens.

/// Parses the longest leading numeric prefix of `token`.
///
/// This follows the `parseFloat` convention rather than requiring the whole
/// token to be numeric: an optional sign, decimal digits with an optional
/// fraction, and an exponent that is only consumed when at least one digit
/// follows it. Trailing non-numeric characters are ignored. Returns the
/// parsed prefix and its length in bytes, or `None` when the token starts
/// with no digit at all.
///
/// Overflowing prefixes parse to an infinity; callers decide whether a
/// non-finite result counts as a number.
pub(crate) fn numeric_prefix(token: &str) -> Option<(f64, usize)> {
    let bytes = token.as_bytes();
    let mut end = 0;
    let mut digits = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    while bytes.get(end).is_some_and(u8::is_ascii_digit) {
        end += 1;
        digits += 1;
    }
    if bytes.get(end) == Some(&b'.') {
        end += 1;
        while bytes.get(end).is_some_and(u8::is_ascii_digit) {
            end += 1;
            digits += 1;
        }
    }
    if digits == 0 {
        return None;
    }
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exponent = end + 1;
        if matches!(bytes.get(exponent), Some(b'+' | b'-')) {
            exponent += 1;
        }
        let mantissa_end = exponent;
        while bytes.get(exponent).is_some_and(u8::is_ascii_digit) {
            exponent += 1;
        }
        // An exponent marker with no digits stays out of the prefix, the
        // way `parseFloat("1e+")` yields 1.
        if exponent > mantissa_end {
            end = exponent;
        }
    }

    token[..end].parse::<f64>().ok().map(|n| (n, end))
}
