//! Composite phone values: dial code + local digits.

/// Combine a dial code and local digits into the single submitted value.
///
/// An empty number yields an empty composite; the dial code alone is never
/// submitted.
///
/// # Examples
///
/// ```
/// use widget_core::compose;
///
/// assert_eq!(compose("+7", "9123456789"), "+79123456789");
/// assert_eq!(compose("+7", ""), "");
/// ```
pub fn compose(dial_code: &str, digits: &str) -> String {
    if digits.is_empty() {
        return String::new();
    }
    format!("{dial_code}{digits}")
}

/// Split a composite value back into `(dial_code, digits)`.
///
/// The accepted shape is `+`, then one to four code digits, then at least one
/// number digit, and nothing else. The code is the longest leading run of up
/// to four digits that still leaves a number digit behind, so a value
/// exported with a short code and a long number does not split back at the
/// original boundary: `+79123456789` comes back as `+7912` / `3456789`. The
/// widget layer relies on this split being *stable* (the recombined
/// composite is unchanged), not on it recovering the original code.
///
/// # Examples
///
/// ```
/// use widget_core::split_composite;
///
/// // Four code digits are preferred whenever a number digit remains:
/// assert_eq!(split_composite("+79123456789"), Some(("+7912", "3456789")));
/// assert_eq!(split_composite("+12345"), Some(("+1234", "5")));
/// // Shorter values split shorter:
/// assert_eq!(split_composite("+79"), Some(("+7", "9")));
/// // Nothing left for the number:
/// assert_eq!(split_composite("+7"), None);
/// // Not plus-prefixed, or junk after the digits:
/// assert_eq!(split_composite("79123456789"), None);
/// assert_eq!(split_composite("+7912-345"), None);
/// assert_eq!(split_composite(""), None);
/// ```
pub fn split_composite(value: &str) -> Option<(&str, &str)> {
    let rest = value.strip_prefix('+')?;
    if rest.is_empty() || !rest.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    // Up to four digits for the code, leaving at least one for the number.
    let code_digits = rest.len().saturating_sub(1).min(4);
    if code_digits == 0 {
        return None;
    }

    let split_at = 1 + code_digits; // '+' is one byte
    Some((&value[..split_at], &value[split_at..]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn four_digit_codes_round_trip_exactly() {
        for (code, digits) in [("+9991", "234567"), ("+7912", "345")] {
            let composite = compose(code, digits);
            assert_eq!(split_composite(&composite), Some((code, digits)));
        }
    }

    #[test]
    fn split_prefers_longer_codes_up_to_four() {
        // "+7" followed by enough digits re-splits at four code digits.
        let composite = compose("+7", "9123456789");
        assert_eq!(composite, "+79123456789");
        assert_eq!(split_composite(&composite), Some(("+7912", "3456789")));

        // The recombined composite is nevertheless identical.
        let (code, digits) = split_composite(&composite).unwrap();
        assert_eq!(compose(code, digits), composite);
    }

    #[test]
    fn short_values_split_short() {
        assert_eq!(split_composite("+79"), Some(("+7", "9")));
        assert_eq!(split_composite("+791"), Some(("+79", "1")));
        assert_eq!(split_composite("+7912"), Some(("+791", "2")));
        assert_eq!(split_composite("+79123"), Some(("+7912", "3")));
    }

    #[test]
    fn rejects_non_digit_payloads() {
        assert_eq!(split_composite("+7 912"), None);
        assert_eq!(split_composite("++7912345"), None);
        assert_eq!(split_composite("+"), None);
    }
}
