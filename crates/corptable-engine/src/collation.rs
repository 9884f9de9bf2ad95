//! Locale-aware string ordering at base strength.
//!
//! Letters compare by base form: case and diacritics are ignored, so
//! "ёлка", "Елка" and "елка" are equal and "Émile" sorts with "emile".
//! The Cyrillic short i (й) is a letter of its own and is not folded into и.

use std::cmp::Ordering;

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Collation key for `text`. Keys compare with plain `Ord`.
pub fn fold(text: &str) -> String {
    let mut key = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, 'й' | 'Й') {
            key.push('й');
            continue;
        }
        for base in std::iter::once(c).nfd().filter(|d| !is_combining_mark(*d)) {
            key.extend(base.to_lowercase());
        }
    }
    key
}

pub fn compare(a: &str, b: &str) -> Ordering {
    fold(a).cmp(&fold(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_is_ignored() {
        assert_eq!(compare("Иванов", "иванов"), Ordering::Equal);
        assert_eq!(compare("ACME", "acme"), Ordering::Equal);
    }

    #[test]
    fn test_diacritics_are_ignored() {
        assert_eq!(compare("Ёлкин", "Елкин"), Ordering::Equal);
        assert_eq!(compare("Émile", "emile"), Ordering::Equal);
    }

    #[test]
    fn test_short_i_stays_distinct() {
        assert_ne!(compare("Йошкар-Ола", "Иваново"), Ordering::Equal);
        assert_eq!(compare("Иваново", "Йошкар-Ола"), Ordering::Less);
    }

    #[test]
    fn test_cyrillic_alphabetical_order() {
        assert_eq!(compare("Абрамов", "Борисов"), Ordering::Less);
        assert_eq!(compare("яковлев", "Андреев"), Ordering::Greater);
    }
}
