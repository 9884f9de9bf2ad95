//! Character-width helpers for column layout.
//!
//! Widths count `char`s, which is right for the Cyrillic and Latin text this
//! table holds.

pub fn width(text: &str) -> usize {
    text.chars().count()
}

/// Shorten to at most `max` chars, marking the cut with `…`.
pub fn truncate(text: &str, max: usize) -> String {
    if width(text) <= max {
        return text.to_string();
    }
    if max == 0 {
        return String::new();
    }
    let mut cut: String = text.chars().take(max - 1).collect();
    cut.push('…');
    cut
}

pub fn pad_right(text: &str, target: usize) -> String {
    let mut padded = text.to_string();
    let fill = target.saturating_sub(width(text));
    padded.extend(std::iter::repeat_n(' ', fill));
    padded
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_counts_chars_not_bytes() {
        assert_eq!(truncate("Ромашка", 10), "Ромашка");
        assert_eq!(truncate("Ромашка", 4), "Ром…");
        assert_eq!(truncate("Ромашка", 0), "");
    }

    #[test]
    fn test_pad_right_uses_char_width() {
        assert_eq!(pad_right("Омск", 6), "Омск  ");
        assert_eq!(pad_right("Новосибирск", 4), "Новосибирск");
    }
}
