//! Small text helpers for table cells.

/// Truncate to at most `max_chars` characters, ellipsis included.
pub fn truncate(value: &str, max_chars: usize) -> String {
    if value.chars().count() <= max_chars {
        return value.to_string();
    }
    let kept: String = value.chars().take(max_chars.saturating_sub(1)).collect();
    format!("{kept}…")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_values_pass_through() {
        assert_eq!(truncate("Asha", 10), "Asha");
        assert_eq!(truncate("", 4), "");
    }

    #[test]
    fn long_values_get_an_ellipsis_within_budget() {
        let out = truncate("A very long company name", 10);
        assert_eq!(out.chars().count(), 10);
        assert!(out.ends_with('…'));
    }

    #[test]
    fn multibyte_names_count_chars_not_bytes() {
        let out = truncate("Çağla Yıldız Properties", 8);
        assert_eq!(out.chars().count(), 8);
    }
}
