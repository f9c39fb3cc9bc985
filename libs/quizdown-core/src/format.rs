//! Inline formatting shared by titles, options, answers, and material text.
//!
//! Math spans are swapped for placeholder tokens before the bold and italic
//! substitutions run, then restored verbatim afterwards. The order matters:
//! underscores inside `$...$` would otherwise be eaten by the italic pass.

use regex::{Captures, Regex};
use std::sync::LazyLock;

static RE_DISPLAY_MATH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)\$\$(.*?)\$\$").expect("valid display math regex"));
static RE_INLINE_MATH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$([^$\n]+?)\$").expect("valid inline math regex"));
static RE_BOLD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*(.*?)\*\*").expect("valid bold regex"));
static RE_ITALIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)_(.+?)_").expect("valid italic regex"));

/// Apply inline formatting: `**bold**`, `_italic_`, and `$...$` / `$$...$$`
/// math spans, which pass through untouched.
pub fn apply(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let mut protected: Vec<(String, String)> = Vec::new();
    let mut out = RE_DISPLAY_MATH
        .replace_all(text, |caps: &Captures<'_>| {
            let token = format!("@@MATH{}@@", protected.len());
            let content = format!("<div class=\"math-scroll\">$${}$$</div>", &caps[1]);
            protected.push((token.clone(), content));
            token
        })
        .into_owned();
    out = RE_INLINE_MATH
        .replace_all(&out, |caps: &Captures<'_>| {
            let token = format!("@@MATH{}@@", protected.len());
            protected.push((token.clone(), format!("${}$", &caps[1])));
            token
        })
        .into_owned();

    out = RE_BOLD.replace_all(&out, "<strong>$1</strong>").into_owned();
    out = RE_ITALIC.replace_all(&out, "<i>$1</i>").into_owned();

    for (token, content) in &protected {
        out = out.replacen(token.as_str(), content, 1);
    }
    out
}

/// Escape angle brackets so code content displays literally.
pub fn escape_code(text: &str) -> String {
    text.replace('<', "&lt;").replace('>', "&gt;")
}
