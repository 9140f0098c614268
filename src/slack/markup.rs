//! Markdown to Slack mrkdwn conversion and message truncation.
//!
//! The conversion is an ordered pipeline of text substitutions; later
//! rules operate on the output of earlier ones, so the order is part of
//! the contract. Bold markers are escaped to a placeholder up front so the
//! bullet and heading rules cannot reinterpret lines that start with `**`.

use regex::Regex;
use std::sync::LazyLock;

/// Default character budget for a Slack section block.
pub const MAX_MESSAGE_LENGTH: usize = 3000;

/// Reversible stand-in for `**` while the line rules run. Starts with a
/// backslash so the bullet rule's `*` never matches a bold marker.
const BOLD_PLACEHOLDER: &str = r"\*\*";

/// Leading bullet runs: `·`, `•`, `●`, `-`, `*`, or `➤`, possibly repeated.
static BULLET_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^ *[·•●\-\*➤]+\s*(.*)").unwrap());

/// ATX/Setext-style heading lines with surrounding newlines.
static HEADING_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^\n*[#=_]+ *(.*?) *[#=_]* *\n*$").unwrap()
});

/// Contiguous runs of lines indented by exactly 4 spaces.
static CODE_BLOCK_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"((?:\n {4}.*)+)").unwrap());

/// The 4-space indent stripped after fencing.
static INDENT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^ {4}").unwrap());

/// Two or more spaces after a period (wrap-quality cleanup).
static PERIOD_SPACING_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\. {2,}").unwrap());

/// Backslash-escaped brackets inside link text.
static ESCAPED_BRACKET_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\\([\[\]])").unwrap());

/// Transform markdown into Slack mrkdwn.
pub fn transform_markdown(text: &str) -> String {
    let text = text.replace("\r\n", "\n");
    // preserve **markdown bold**
    let text = text.replace("**", BOLD_PLACEHOLDER);
    // convert images and links into slack links
    let text = convert_links(&text);
    // convert lists into bullets
    let text = BULLET_REGEX.replace_all(&text, " *•*  ${1}");
    // convert headings into bold
    let text = HEADING_REGEX.replace_all(&text, "\n*${1}*\n");
    // convert indentation into code blocks
    let text = CODE_BLOCK_REGEX.replace_all(&text, "\n```${1}\n```");
    let text = INDENT_REGEX.replace_all(&text, "");
    // restore **markdown bold** as *slack bold*
    let text = text.replace(BOLD_PLACEHOLDER, "*");
    // single space after periods otherwise sentences can wrap weird
    PERIOD_SPACING_REGEX.replace_all(&text, ". ").into_owned()
}

/// Truncate `message` to `max_length` characters, appending a
/// "+N more" link targeting `changelog_url` when lines are dropped.
///
/// The budget is recomputed on every iteration because the link line grows
/// with the digit count of N. Each iteration removes one line, so the loop
/// terminates after at most the original line count.
pub fn truncate_message(
    message: &str,
    max_length: usize,
    changelog_url: &str,
) -> String {
    let mut lines: Vec<&str> = message.split('\n').collect();
    let mut removed = 0usize;
    let mut more_line = String::new();

    loop {
        // the reserve covers the link line plus the newline joining it on
        let reserve = if more_line.is_empty() {
            0
        } else {
            more_line.chars().count() + 1
        };

        if char_length(&lines) + reserve <= max_length {
            break;
        }

        if lines.pop().is_none() {
            break;
        }

        removed += 1;
        more_line = transform_markdown(&format!(
            "+ [{removed} more]({changelog_url})"
        ));
    }

    let mut output = lines.join("\n");

    if !more_line.is_empty() {
        output.push('\n');
        output.push_str(&more_line);
    }

    output
}

/// Character count of the joined lines without allocating the join.
fn char_length(lines: &[&str]) -> usize {
    let newlines = lines.len().saturating_sub(1);
    lines.iter().map(|line| line.chars().count()).sum::<usize>() + newlines
}

/// Convert markdown links `[text](url)` and images `![text](url)` into
/// slack links `<url|text>`, HTML-escaping the link text.
///
/// Bracket nesting inside the text and parenthesis nesting inside the url
/// are supported to exactly one level. This limit is deliberate: the
/// matching behavior on pathological inputs depends on it.
fn convert_links(text: &str) -> String {
    let mut output = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(offset) = rest.find('[') {
        let candidate = &rest[offset..];

        if let Some((label, label_len)) =
            scan_balanced(candidate, '[', ']', 1)
        {
            let after = &candidate[label_len..];

            if after.starts_with('(')
                && let Some((url, url_len)) =
                    scan_balanced(after, '(', ')', 1)
            {
                // a directly preceding `!` (image syntax) is part of the
                // match and dropped
                let mut lead_end = offset;
                if rest[..offset].ends_with('!') {
                    lead_end -= 1;
                }

                output.push_str(&rest[..lead_end]);
                output.push('<');
                output.push_str(url);
                output.push('|');
                output.push_str(&escape_label(label));
                output.push('>');

                rest = &after[url_len..];
                continue;
            }
        }

        // not a link; emit through the bracket and keep scanning
        output.push_str(&rest[..offset + 1]);
        rest = &rest[offset + 1..];
    }

    output.push_str(rest);
    output
}

/// Scan a non-empty delimited span. `s` must begin with `open`. Returns
/// the inner content and the total consumed length including delimiters.
/// `depth` is the number of nested `open`..`close` levels still allowed.
fn scan_balanced(
    s: &str,
    open: char,
    close: char,
    depth: u8,
) -> Option<(&str, usize)> {
    debug_assert!(s.starts_with(open));

    let inner_start = open.len_utf8();
    let mut i = inner_start;
    let mut empty = true;

    loop {
        let c = s[i..].chars().next()?;

        if c == close {
            if empty {
                return None;
            }
            return Some((&s[inner_start..i], i + close.len_utf8()));
        }

        if c == open {
            if depth == 0 {
                return None;
            }
            let (_, consumed) = scan_balanced(&s[i..], open, close, depth - 1)?;
            i += consumed;
            empty = false;
            continue;
        }

        i += c.len_utf8();
        empty = false;
    }
}

/// Un-escape `\[` / `\]` then HTML-escape the link text. Quotes stay as-is,
/// slack only requires `&`, `<`, and `>` in link labels.
fn escape_label(label: &str) -> String {
    ESCAPED_BRACKET_REGEX
        .replace_all(label, "${1}")
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_line_endings() {
        assert_eq!(transform_markdown("one\r\ntwo"), "one\ntwo");
    }

    /// `**bold**` maps to slack bold, not escaped asterisks.
    #[test]
    fn converts_bold_markers() {
        assert_eq!(transform_markdown("**bold**"), "*bold*");
    }

    /// Lines starting with a bold marker are not mistaken for bullets even
    /// though `*` is a bullet character.
    #[test]
    fn bold_at_line_start_is_not_a_bullet() {
        assert_eq!(
            transform_markdown("**important** note"),
            "*important* note"
        );
    }

    #[test]
    fn converts_links() {
        assert_eq!(
            transform_markdown("[See #12](https://github.com/org/repo/pull/12)"),
            "<https://github.com/org/repo/pull/12|See #12>"
        );
    }

    #[test]
    fn converts_images_like_links() {
        assert_eq!(
            transform_markdown("shot: ![screen](https://img.test/s.png)"),
            "shot: <https://img.test/s.png|screen>"
        );
    }

    #[test]
    fn escapes_html_in_link_text() {
        assert_eq!(
            transform_markdown("[a <b> & c](http://x)"),
            "<http://x|a &lt;b&gt; &amp; c>"
        );
    }

    /// One level of nesting is supported in both the label and the url.
    #[test]
    fn supports_one_level_of_nesting() {
        assert_eq!(
            transform_markdown("[[nested] text](http://x/(y))"),
            "<http://x/(y)|[nested] text>"
        );
    }

    /// Two levels of nesting are deliberately not supported; the text
    /// passes through untouched.
    #[test]
    fn rejects_two_levels_of_nesting() {
        assert_eq!(
            transform_markdown("[a [b [c]]](http://x)"),
            "[a [b [c]]](http://x)"
        );
    }

    #[test]
    fn unescapes_escaped_brackets_in_link_text() {
        assert_eq!(
            transform_markdown(r"[\[tag\] fix](http://x)"),
            "<http://x|[tag] fix>"
        );
    }

    #[test]
    fn leaves_bare_brackets_alone() {
        assert_eq!(transform_markdown("see [1] and [2]"), "see [1] and [2]");
    }

    #[test]
    fn converts_bullets() {
        assert_eq!(transform_markdown("- item one"), " *•*  item one");
        assert_eq!(transform_markdown("• item two"), " *•*  item two");
        assert_eq!(transform_markdown("  ➤➤ item three"), " *•*  item three");
    }

    #[test]
    fn converts_headings_to_bold() {
        assert_eq!(transform_markdown("# Release Notes"), "\n*Release Notes*\n");
        assert_eq!(transform_markdown("## Fixes ##"), "\n*Fixes*\n");
    }

    /// Blank lines around a heading collapse into the single newlines of
    /// the replacement.
    #[test]
    fn collapses_newlines_around_headings() {
        assert_eq!(
            transform_markdown("before\n\n# Head\n\nafter"),
            "before\n\n*Head*\n\nafter"
        );
    }

    #[test]
    fn converts_indented_code_blocks() {
        assert_eq!(
            transform_markdown("text\n    let x = 1;\n    let y = 2;\nafter"),
            "text\n```\nlet x = 1;\nlet y = 2;\n```\nafter"
        );
    }

    #[test]
    fn collapses_spaces_after_periods() {
        assert_eq!(
            transform_markdown("First.  Second.   Third."),
            "First. Second. Third."
        );
    }

    #[test]
    fn short_messages_are_untouched() {
        let message = "line one\nline two";
        assert_eq!(
            truncate_message(message, MAX_MESSAGE_LENGTH, "http://x"),
            message
        );
    }

    #[test]
    fn exact_fit_is_untouched() {
        let message = "a".repeat(100);
        assert_eq!(truncate_message(&message, 100, "http://x"), message);
    }

    /// Dropping one line appends a link whose counter reads "1 more".
    #[test]
    fn appends_more_link_for_one_dropped_line() {
        let message = ["x".repeat(40), "y".repeat(40), "z".repeat(40)]
            .join("\n");
        let output = truncate_message(&message, 110, "http://x");

        assert!(output.chars().count() <= 110);
        assert!(output.ends_with("<http://x|1 more>"));
        assert!(output.starts_with(&"x".repeat(40)));
    }

    /// The counter tracks every dropped line, recomputing the budget on
    /// each iteration.
    #[test]
    fn counter_matches_dropped_line_count() {
        let lines: Vec<String> = (0..6).map(|_| "w".repeat(40)).collect();
        let message = lines.join("\n");
        // budget forces three lines out
        let output = truncate_message(&message, 160, "http://x");

        assert!(output.chars().count() <= 160);
        assert!(output.ends_with("<http://x|3 more>"));
    }

    /// A 3100-character message against the default budget stays within
    /// 3000 characters and gains a "more" link.
    #[test]
    fn respects_default_budget() {
        let lines: Vec<String> = (0..31).map(|_| "m".repeat(99)).collect();
        let message = lines.join("\n");
        assert_eq!(message.chars().count(), 3099);

        let url = "https://github.com/org/repo/blob/master/CHANGELOG.md#123-2024-05-01";
        let output = truncate_message(&message, MAX_MESSAGE_LENGTH, url);

        assert!(output.chars().count() <= MAX_MESSAGE_LENGTH);
        assert!(output.contains(" more>"));
    }
}
