use bento_core::MAX_CONTENT_CHARS;

/// The first `max_chars` characters of `text`. Cuts mid-sentence if need be.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// Article text as handed to the model.
pub fn truncate_content(text: &str) -> &str {
    truncate_chars(text, MAX_CONTENT_CHARS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_text_is_untouched() {
        assert_eq!(truncate_content("今天天气很好"), "今天天气很好");
        assert_eq!(truncate_chars("", 3), "");
    }

    #[test]
    fn test_cuts_on_char_boundaries() {
        assert_eq!(truncate_chars("今天天气很好", 2), "今天");
        assert_eq!(truncate_chars("abc", 3), "abc");
        assert_eq!(truncate_chars("abcd", 3), "abc");
    }

    #[test]
    fn test_content_budget() {
        let text = "字".repeat(MAX_CONTENT_CHARS + 10);
        let truncated = truncate_content(&text);
        assert_eq!(truncated.chars().count(), MAX_CONTENT_CHARS);
        assert_eq!(truncate_content(truncated), truncated);
    }
}
