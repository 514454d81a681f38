//! Word, character and line counts for generated text.

use seoscribe_types::content::ContentStats;

/// Compute statistics for `text`.
///
/// Words are whitespace-separated tokens, characters are Unicode scalar
/// values, and lines are `\n`-separated segments (an empty string counts as
/// one line, a trailing newline adds an empty last line).
pub fn content_stats(text: &str) -> ContentStats {
    ContentStats {
        words: text.split_whitespace().count(),
        characters: text.chars().count(),
        lines: text.split('\n').count(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_string() {
        let text = "one two three\nfour five";
        let stats = content_stats(text);
        assert_eq!(stats.words, 5);
        assert_eq!(stats.lines, 2);
        assert_eq!(stats.characters, text.len());
    }

    #[test]
    fn test_empty_string() {
        let stats = content_stats("");
        assert_eq!(stats, ContentStats { words: 0, characters: 0, lines: 1 });
    }

    #[test]
    fn test_trailing_newline_counts_extra_line() {
        assert_eq!(content_stats("a\n").lines, 2);
    }

    #[test]
    fn test_characters_are_scalar_values() {
        let stats = content_stats("saúde é vida");
        assert_eq!(stats.characters, 12);
        assert_eq!(stats.words, 3);
    }

    #[test]
    fn test_runs_of_whitespace() {
        assert_eq!(content_stats("  spaced \t out\n\nwords ").words, 3);
    }
}
