/// Truncate to `max_len` characters, appending "..." when cut.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let chars: Vec<char> = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", chars.iter().collect::<String>())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_strings_pass_through() {
        assert_eq!(truncate("Tilbud", 10), "Tilbud");
    }

    #[test]
    fn long_strings_are_cut_with_ellipsis() {
        assert_eq!(truncate("Rehabilitering av kaianlegg", 10), "Rehabil...");
    }
}
