//! Phone number rules for the fixed `+7 (XXX) XXX-XX-XX` pattern.
//!
//! The formatter is applied to the whole input value after every keystroke,
//! so it must be idempotent on its own output.

use std::sync::LazyLock;

use regex::Regex;

pub const COUNTRY_PREFIX: &str = "+7";
pub const SUBSCRIBER_DIGITS: usize = 10;

static PHONE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+7 \([0-9]{3}\) [0-9]{3}-[0-9]{2}-[0-9]{2}$").unwrap());

pub fn is_valid_phone(value: &str) -> bool {
    PHONE_PATTERN.is_match(value)
}

/// The (at most 10) digits after the country code.
///
/// A value already carrying the `+7` prefix treats its 7 as the country code.
/// Raw input treats every digit as a subscriber digit, except that a lone
/// 7 or 8 (the first key of a typed number) or a full 11-digit number
/// starting with 7 or 8 loses that leading trunk digit.
pub fn subscriber_digits(input: &str) -> String {
    let digits: String = input.chars().filter(char::is_ascii_digit).collect();
    let subscriber = if has_country_code(input, &digits) {
        &digits[1..]
    } else {
        &digits[..]
    };
    subscriber.chars().take(SUBSCRIBER_DIGITS).collect()
}

fn has_country_code(input: &str, digits: &str) -> bool {
    if input.trim_start().starts_with(COUNTRY_PREFIX) {
        return true;
    }
    matches!(digits.len(), 1 | 11) && (digits.starts_with('7') || digits.starts_with('8'))
}

/// Rebuild the pattern progressively from whatever digits the input holds.
///
/// A country code with no subscriber digits yet renders as the open prefix
/// `+7 (` so the next keystroke continues after it.
pub fn format_phone(input: &str) -> String {
    let digits: String = input.chars().filter(char::is_ascii_digit).collect();
    let subscriber = subscriber_digits(input);
    if subscriber.is_empty() && has_country_code(input, &digits) {
        return format!("{} (", COUNTRY_PREFIX);
    }
    render(&subscriber)
}

/// Formatted value with its last subscriber digit removed.
pub fn pop_digit(formatted: &str) -> String {
    let mut digits = subscriber_digits(formatted);
    digits.pop();
    render(&digits)
}

fn render(d: &str) -> String {
    match d.len() {
        0 => String::new(),
        1..=3 => format!("{} ({}", COUNTRY_PREFIX, d),
        4..=6 => format!("{} ({}) {}", COUNTRY_PREFIX, &d[..3], &d[3..]),
        7..=8 => format!("{} ({}) {}-{}", COUNTRY_PREFIX, &d[..3], &d[3..6], &d[6..]),
        _ => format!(
            "{} ({}) {}-{}-{}",
            COUNTRY_PREFIX,
            &d[..3],
            &d[3..6],
            &d[6..8],
            &d[8..]
        ),
    }
}
