use std::sync::LazyLock;

use regex::Regex;

/// One line terminator (`\n`, `\r`, or `\r\n`) followed by any run of
/// whitespace. Splitting on this defines a paragraph boundary; every
/// wrapper below shares it so output stays consistent across formats.
static PARAGRAPH_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\r\n|\r|\n)\s*").expect("valid regex"));

/// Two or more consecutive line terminators: a hard paragraph break
/// for the collapse mode.
static MULTI_NEWLINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\r\n|\r|\n){2,}").expect("valid regex"));

/// A run of two or more space characters. Spaces only; tabs pass through.
static SPACE_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"( )+").expect("valid regex"));

/// Split raw comment text into paragraphs on line-terminator boundaries.
/// Empty input yields a single empty paragraph.
fn split_paragraphs(text: &str) -> Vec<&str> {
    PARAGRAPH_BOUNDARY.split(text).collect()
}

/// Wrap each paragraph of `text` in the given tag pair. Tags already
/// present in the text are not recognized as structure, so applying
/// this twice re-wraps rather than round-trips.
pub fn wrap_paragraphs(text: &str, open: &str, close: &str) -> String {
    let paragraphs = split_paragraphs(text);
    format!("{open}{}{close}", paragraphs.join(&format!("{close}{open}")))
}

/// Wrap each paragraph in `<p>` tags for HTML-bearing templates.
pub fn html_paragraphs(text: &str) -> String {
    wrap_paragraphs(text, "<p>", "</p>")
}

/// Wrap each paragraph in `<para>` tags for XML-like help formats.
pub fn para_paragraphs(text: &str) -> String {
    wrap_paragraphs(text, "<para>", "</para>")
}

/// Collapse single line breaks inside paragraphs into spaces.
///
/// Runs of two or more line terminators are the true paragraph
/// separators and are rejoined with exactly one blank line. Within a
/// paragraph, remaining CR and LF become single spaces and runs of
/// spaces collapse to one.
pub fn collapse_line_breaks(text: &str) -> String {
    let normalized = text.replace("\r\n", "\n");
    let paragraphs: Vec<String> = MULTI_NEWLINE
        .split(&normalized)
        .map(|p| {
            let unbroken = p.replace(['\r', '\n'], " ");
            SPACE_RUN.replace_all(&unbroken, " ").into_owned()
        })
        .collect();
    paragraphs.join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_paragraph_html() {
        assert_eq!(html_paragraphs("hello"), "<p>hello</p>");
    }

    #[test]
    fn two_paragraphs_html() {
        assert_eq!(html_paragraphs("a\nb"), "<p>a</p><p>b</p>");
    }

    #[test]
    fn boundary_eats_following_whitespace() {
        assert_eq!(html_paragraphs("a\n   b"), "<p>a</p><p>b</p>");
    }

    #[test]
    fn crlf_boundary() {
        assert_eq!(html_paragraphs("a\r\nb"), "<p>a</p><p>b</p>");
    }

    #[test]
    fn empty_input_yields_one_empty_paragraph() {
        assert_eq!(html_paragraphs(""), "<p></p>");
        assert_eq!(para_paragraphs(""), "<para></para>");
    }

    #[test]
    fn para_matches_html_splitting() {
        let text = "first\r\nsecond\n  third";
        assert_eq!(
            para_paragraphs(text).matches("<para>").count(),
            html_paragraphs(text).matches("<p>").count()
        );
    }

    #[test]
    fn para_tags() {
        assert_eq!(para_paragraphs("a\nb"), "<para>a</para><para>b</para>");
    }

    #[test]
    fn collapse_keeps_hard_breaks() {
        assert_eq!(collapse_line_breaks("a\r\n\r\nb"), "a\n\nb");
    }

    #[test]
    fn collapse_joins_soft_breaks() {
        assert_eq!(collapse_line_breaks("a\r\nb   c"), "a b c");
    }

    #[test]
    fn collapse_mixed_terminators() {
        assert_eq!(collapse_line_breaks("a\rb\nc"), "a b c");
    }

    #[test]
    fn collapse_empty_input() {
        assert_eq!(collapse_line_breaks(""), "");
    }

    #[test]
    fn wrapping_is_not_idempotent() {
        // Tags are not recognized as structure; a second pass re-wraps.
        let once = html_paragraphs("a");
        assert_eq!(html_paragraphs(&once), "<p><p>a</p></p>");
    }
}
