//! Content renderer - markdown-flavored text to an HTML string.
//!
//! A fixed sequence of textual substitutions, deliberately not a markdown
//! parser. The contract is best-effort with no validation: a rule that does
//! not match leaves its characters untouched, malformed constructs pass
//! through literally, and the function never fails. Output is deterministic,
//! so callers can snapshot it.

use std::sync::LazyLock;

use regex::{Captures, Regex};

static IMAGE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"!\[([^\]]*)\]\(([^)]+)\)").unwrap());
static LINK_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").unwrap());
static BOLD_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\*([^*]+)\*\*").unwrap());
static ITALIC_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*([^*]+)\*").unwrap());
static H2_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^## (.+)$").unwrap());
static H3_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^### (.+)$").unwrap());
static QUOTE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^> (.+)$").unwrap());
static LIST_ITEM_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^- (.+)$").unwrap());
/// A maximal run of consecutive generated list items, separated only by
/// whitespace. Intervening prose breaks the run.
static LIST_RUN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:<li>.*?</li>\s*)+").unwrap());

/// Render a markdown-flavored text blob as a single HTML string.
///
/// The substitutions are ordered so that later rules never re-match text
/// produced by earlier ones: images before links, bold before italic, list
/// items before the `<ul>` wrap, paragraph splitting last.
pub fn render_markdown(content: &str) -> String {
    let html = IMAGE_RE.replace_all(content, r#"<img src="$2" alt="$1" />"#);
    let html = LINK_RE.replace_all(
        &html,
        r#"<a href="$2" target="_blank" rel="noopener noreferrer">$1</a>"#,
    );
    let html = BOLD_RE.replace_all(&html, "<strong>$1</strong>");
    let html = ITALIC_RE.replace_all(&html, "<em>$1</em>");
    let html = H2_RE.replace_all(&html, "<h2>$1</h2>");
    let html = H3_RE.replace_all(&html, "<h3>$1</h3>");
    let html = QUOTE_RE.replace_all(&html, "<blockquote>$1</blockquote>");
    let html = LIST_ITEM_RE.replace_all(&html, "<li>$1</li>");
    let html = LIST_RUN_RE.replace_all(&html, |caps: &Captures| {
        format!("<ul>{}</ul>", &caps[0])
    });

    // Hard line breaks (two trailing spaces), then paragraph boundaries.
    let html = html.replace("  \n", "<br />");
    let html = html.replace("\n\n", "</p><p>");
    let html = format!("<p>{html}</p>");

    // Drop paragraphs left empty by the boundary splitting.
    html.replace("<p></p>", "")
}
