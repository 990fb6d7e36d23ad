//! Output line folding.

use kontakt_core::constants::DEFAULT_MAX_LINE_OCTETS;

/// Folds a line to at most `max_octets` octets per physical line.
///
/// Continuation lines start with CRLF + space, and the space counts towards
/// the limit. Folds happen at UTF-8 character boundaries, so a character
/// wider than the limit still gets a line of its own. Limits below 2 are
/// raised to 2.
#[must_use]
pub fn fold_line(line: &str, max_octets: usize) -> String {
    let max_octets = max_octets.max(2);
    if line.len() <= max_octets {
        return line.to_string();
    }

    let mut result = String::with_capacity(line.len() + line.len() / (max_octets - 1) * 3);
    let mut current_len = 0;
    // Octets of the continuation prefix on the current physical line
    let mut prefix_len = 0;

    for c in line.chars() {
        let char_len = c.len_utf8();

        if current_len > prefix_len && current_len + char_len > max_octets {
            result.push_str("\r\n ");
            current_len = 1;
            prefix_len = 1;
        }

        result.push(c);
        current_len += char_len;
    }

    result
}

/// Folds a line at the RFC 6350 limit of 75 octets.
#[must_use]
pub fn fold_line_default(line: &str) -> String {
    fold_line(line, DEFAULT_MAX_LINE_OCTETS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rfc::vcard::parse::unfold_str;

    #[test]
    fn short_line_unchanged() {
        let line = "FN:John Doe";
        assert_eq!(fold_line_default(line), line);
    }

    #[test]
    fn fold_at_75_octets() {
        let line = "X".repeat(80);
        let folded = fold_line_default(&line);
        assert!(folded.contains("\r\n "));

        let first_line: String = folded.chars().take_while(|&c| c != '\r').collect();
        assert_eq!(first_line.len(), 75);
    }

    #[test]
    fn physical_lines_respect_limit() {
        let line = format!("NOTE:{}", "日".repeat(30));
        let folded = fold_line(&line, 20);
        for part in folded.split("\r\n") {
            assert!(part.len() <= 20, "{part:?} is too long");
        }
    }

    #[test]
    fn folded_line_unfolds_to_original() {
        let line = format!("NOTE:{}", "日本語 text ".repeat(20));
        let folded = fold_line(&line, 30);
        let unfolded: Vec<String> = unfold_str(&folded).collect();
        assert_eq!(unfolded, vec![line]);
    }

    #[test]
    fn tiny_limit_is_clamped() {
        let folded = fold_line("ABC", 0);
        assert_eq!(folded, "AB\r\n C");
    }

    #[test]
    fn wide_char_gets_own_line() {
        let folded = fold_line("a日b", 2);
        let unfolded: Vec<String> = unfold_str(&folded).collect();
        assert_eq!(unfolded, vec!["a日b"]);
    }
}
