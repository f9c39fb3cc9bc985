//! Header extraction: the optional `---`-fenced metadata prologue.

use crate::types::DEFAULT_TITLE;

/// Document settings carried by the header.
#[derive(Debug, Clone)]
pub struct Header {
    pub title: String,
}

impl Default for Header {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
        }
    }
}

/// Split the newline-normalized input into header settings and body text.
///
/// Without an opening fence, or with an unclosed one, the whole input is
/// body and the settings are defaults.
pub fn extract(text: &str) -> (Header, &str) {
    let mut header = Header::default();
    if !text.starts_with("---\n") {
        return (header, text);
    }
    // The newline ending the opening fence may double as the newline in
    // front of the closing fence (an empty header).
    let Some(end) = text[3..].find("\n---\n").map(|i| i + 3) else {
        return (header, text);
    };
    let lines = if end > 4 { &text[4..end] } else { "" };
    let body = &text[end + 5..];

    for line in lines.split('\n') {
        let Some((key, value)) = line.split_once(':') else {
            continue;
        };
        match key.trim() {
            "title" => header.title = value.trim().to_string(),
            // Historical toggle. Options are always shuffled now.
            "shuffle" => {}
            _ => {}
        }
    }
    (header, body)
}
