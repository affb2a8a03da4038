//! Input masking: filtering user-entered text down to an allowed set.
//!
//! Both filters are idempotent: re-applying them to already-filtered text
//! returns the input unchanged (and borrowed, on the fast path).

use std::borrow::Cow;

/// Strip every character that is not an ASCII decimal digit.
///
/// Returns `Cow::Borrowed` when the input is already digits-only.
///
/// # Examples
///
/// ```
/// use widget_core::digits_only;
///
/// assert_eq!(digits_only("999 123-45-67"), "9991234567");
/// assert_eq!(digits_only("abc"), "");
/// assert_eq!(digits_only("12345"), "12345");
/// // Idempotent:
/// assert_eq!(digits_only(&digits_only("+7 (912) 345")), digits_only("+7 (912) 345"));
/// ```
pub fn digits_only(s: &str) -> Cow<'_, str> {
    if s.chars().all(|c| c.is_ascii_digit()) {
        return Cow::Borrowed(s);
    }
    Cow::Owned(s.chars().filter(char::is_ascii_digit).collect())
}

/// Returns `true` for characters allowed in a freeform phone field:
/// digits, space, hyphen, parentheses, and `+`.
///
/// # Examples
///
/// ```
/// use widget_core::is_phone_char;
///
/// assert!(is_phone_char('7'));
/// assert!(is_phone_char(' '));
/// assert!(is_phone_char('-'));
/// assert!(is_phone_char('('));
/// assert!(is_phone_char(')'));
/// assert!(is_phone_char('+'));
/// assert!(!is_phone_char('a'));
/// assert!(!is_phone_char('.'));
/// ```
#[inline]
pub fn is_phone_char(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, ' ' | '-' | '(' | ')' | '+')
}

/// Strip every character outside the freeform phone set (see
/// [`is_phone_char`]).
///
/// Returns `Cow::Borrowed` when nothing needs stripping.
///
/// # Examples
///
/// ```
/// use widget_core::phone_charset;
///
/// assert_eq!(phone_charset("+7 (912) 345-67-89"), "+7 (912) 345-67-89");
/// assert_eq!(phone_charset("+7 abc 912"), "+7  912");
/// ```
pub fn phone_charset(s: &str) -> Cow<'_, str> {
    if s.chars().all(is_phone_char) {
        return Cow::Borrowed(s);
    }
    Cow::Owned(s.chars().filter(|c| is_phone_char(*c)).collect())
}

/// Prefix of `s` containing at most `max` characters.
///
/// # Examples
///
/// ```
/// use widget_core::truncate_chars;
///
/// assert_eq!(truncate_chars("123456", 4), "1234");
/// assert_eq!(truncate_chars("123", 4), "123");
/// ```
pub fn truncate_chars(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
