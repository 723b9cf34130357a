//! Builds the status line posted for a push:
//! `{sha1} by {pusher}: {summary}\n{url}`.

use std::borrow::Cow;

// 40 (sha1) + 4 (" by ") + 12 (pusher) + 2 (": ") + 58 + 1 ("\n") + 23 (url) = 140
const SUMMARY_BUDGET: usize = 58;

/// First line of the commit message, cut to `SUMMARY_BUDGET` characters with
/// a trailing ellipsis when it runs over.
pub fn summarize(message: &str) -> Cow<'_, str> {
    let first_line = message.lines().next().unwrap_or("");
    if first_line.chars().count() <= SUMMARY_BUDGET {
        return Cow::Borrowed(first_line);
    }

    let mut summary: String = first_line.chars().take(SUMMARY_BUDGET - 1).collect();
    summary.push('\u{2026}');
    Cow::Owned(summary)
}

pub fn compose(sha1: &str, pusher: &str, message: &str, url: &str) -> String {
    format!("{} by {}: {}\n{}", sha1, pusher, summarize(message), url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_short_single_line_verbatim() {
        assert_eq!(summarize("fix bug"), "fix bug");
    }

    #[test]
    fn drops_everything_after_the_first_line_break() {
        let summary = summarize("Add frobnicator\n\nLong explanation\nwith details");
        assert_eq!(summary, "Add frobnicator");
        assert!(!summary.contains('\n'));
    }

    #[test]
    fn handles_crlf_line_breaks() {
        assert_eq!(summarize("Add frobnicator\r\nbody"), "Add frobnicator");
    }

    #[test]
    fn empty_message_yields_empty_summary() {
        assert_eq!(summarize(""), "");
    }

    #[test]
    fn line_of_exactly_58_characters_is_untouched() {
        let line = "a".repeat(58);
        assert_eq!(summarize(&line), line);
    }

    #[test]
    fn longer_line_is_cut_to_58_with_ellipsis() {
        let line = "a".repeat(59);
        let summary = summarize(&line);
        assert_eq!(summary.chars().count(), 58);
        assert_eq!(summary, format!("{}\u{2026}", "a".repeat(57)));
    }

    #[test]
    fn truncation_counts_characters_not_bytes() {
        let line = "é".repeat(60);
        let summary = summarize(&line);
        assert_eq!(summary.chars().count(), 58);
        assert!(summary.ends_with('\u{2026}'));
        assert_eq!(summary.matches('\u{2026}').count(), 1);
    }

    #[test]
    fn truncation_is_idempotent() {
        let line = "x".repeat(100);
        let once = summarize(&line).into_owned();
        assert_eq!(summarize(&once), once);
    }

    #[test]
    fn composes_exact_layout() {
        let sha1 = format!("{:0<40}", "abc123");
        let composed = compose(&sha1, "alice", "fix bug", "https://example.com/c/abc123");
        assert_eq!(
            composed,
            format!("{} by alice: fix bug\nhttps://example.com/c/abc123", sha1)
        );
    }

    #[test]
    fn composed_message_fits_the_budget() {
        let sha1 = "a".repeat(40);
        let url = "https://t.co/aaaaaaaaaa"; // 23 characters
        let composed = compose(&sha1, "twelve-chars", &"m".repeat(500), url);
        assert!(composed.chars().count() <= 140);
    }
}
