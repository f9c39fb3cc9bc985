//! Material extraction: bracketed rich-content regions inside a block.
//!
//! Matched regions are cut out of the block text so they never leak into the
//! question/answer scan; their renderings accumulate in encounter order.
//! Plot-like materials emit only a placeholder container here and push a
//! descriptor onto the caller's side-channel list.

use crate::format;
use crate::types::PlotSpec;
use regex::Regex;
use std::sync::LazyLock;
use uuid::Uuid;

static RE_OPEN_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[(code|quote|table|material|plot|geogebra)([^\]\n]*)\]")
        .expect("valid material tag regex")
});
static RE_ATTR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"([a-z_]+)\s*=\s*"([^"]*)""#).expect("valid attribute regex"));

/// A block with its material regions cut out and rendered.
#[derive(Debug)]
pub struct Extraction {
    /// Remaining block text, regions replaced with nothing.
    pub text: String,
    /// Concatenated material fragments in encounter order.
    pub materials_html: String,
}

/// Extract every `[tag attrs]...[/tag]` region from a block.
///
/// The closing tag name must echo the opening tag name; an opener with no
/// matching closer stays in the text untouched.
pub fn extract(block: &str, plots: &mut Vec<PlotSpec>) -> Extraction {
    let mut text = String::with_capacity(block.len());
    let mut materials_html = String::new();
    let mut cursor = 0;

    while let Some(caps) = RE_OPEN_TAG.captures(&block[cursor..]) {
        let open = caps.get(0).map(|m| (cursor + m.start(), cursor + m.end()));
        let Some((open_start, open_end)) = open else {
            break;
        };
        let tag = &caps[1];
        let closer = format!("[/{tag}]");
        match block[open_end..].find(&closer) {
            Some(rel) => {
                let content = block[open_end..open_end + rel].trim();
                text.push_str(&block[cursor..open_start]);
                render(tag, &caps[2], content, &mut materials_html, plots);
                cursor = open_end + rel + closer.len();
            }
            None => {
                text.push_str(&block[cursor..open_end]);
                cursor = open_end;
            }
        }
    }
    text.push_str(&block[cursor..]);

    Extraction {
        text,
        materials_html,
    }
}

fn render(tag: &str, attrs: &str, content: &str, out: &mut String, plots: &mut Vec<PlotSpec>) {
    match tag {
        "code" => {
            out.push_str("<div class=\"material-box\"><pre><code>");
            out.push_str(&format::escape_code(content));
            out.push_str("</code></pre></div>");
        }
        "quote" => {
            let (body, attribution) = match content.split_once("\n—") {
                Some((body, attribution)) => (body, attribution.trim()),
                None => (content, ""),
            };
            out.push_str("<div class=\"material-box\"><figure><blockquote><p>");
            out.push_str(&format::apply(body.trim()));
            out.push_str("</p></blockquote>");
            if !attribution.is_empty() {
                out.push_str("<figcaption>— ");
                out.push_str(&format::apply(attribution));
                out.push_str("</figcaption>");
            }
            out.push_str("</figure></div>");
        }
        "material" => {
            let paragraphs = format::apply(content).replace("\n\n", "</p><p class=\"content-text\">");
            out.push_str("<div class=\"material-box\"><p class=\"content-text\">");
            out.push_str(&paragraphs);
            out.push_str("</p></div>");
        }
        "table" => render_table(content, out),
        "plot" => {
            let id = format!("plot-{}", Uuid::new_v4().simple());
            out.push_str("<div class=\"material-box\"><div id=\"");
            out.push_str(&id);
            out.push_str("\" style=\"width:100%;height:400px;\"></div></div>");

            let range = attr(attrs, "range")
                .and_then(parse_range)
                .unwrap_or([-10.0, 10.0]);
            let step = attr(attrs, "step").and_then(parse_step);
            let functions = content
                .lines()
                .map(str::trim)
                .filter(|f| !f.is_empty())
                .map(String::from)
                .collect();
            plots.push(PlotSpec::Function {
                id,
                functions,
                range,
                step,
            });
        }
        "geogebra" => match attr(attrs, "id") {
            Some(material_id) if !material_id.is_empty() => {
                let container_id = format!("geogebra-{}", Uuid::new_v4().simple());
                out.push_str("<div class=\"material-box\"><div id=\"");
                out.push_str(&container_id);
                out.push_str("\" class=\"geogebra-container\"></div></div>");
                plots.push(PlotSpec::Geogebra {
                    container_id,
                    material_id: material_id.to_string(),
                });
            }
            _ => out.push_str(
                "<div class=\"material-box error-box\"><p class=\"material-error\">\
                 A geogebra block needs an id attribute, like [geogebra id=\"...\"]</p></div>",
            ),
        },
        _ => {}
    }
}

fn render_table(content: &str, out: &mut String) {
    let rows: Vec<Vec<String>> = content
        .split('\n')
        .map(|line| {
            let line = line.trim();
            let line = line.strip_prefix('|').unwrap_or(line);
            let line = line.strip_suffix('|').unwrap_or(line);
            line.split('|').map(|cell| format::apply(cell.trim())).collect()
        })
        .collect();

    out.push_str("<div class=\"material-box\"><table class=\"data-table\"><thead><tr>");
    if let Some(header) = rows.first() {
        for cell in header {
            out.push_str("<th>");
            out.push_str(cell);
            out.push_str("</th>");
        }
    }
    out.push_str("</tr></thead><tbody>");
    // Row 1 is the conventional dashed separator and is dropped.
    for row in rows.iter().skip(2) {
        out.push_str("<tr>");
        for cell in row {
            out.push_str("<td>");
            out.push_str(cell);
            out.push_str("</td>");
        }
        out.push_str("</tr>");
    }
    out.push_str("</tbody></table></div>");
}

/// Look up one `name="value"` pair in an opening tag's attribute span.
fn attr<'a>(attrs: &'a str, name: &str) -> Option<&'a str> {
    RE_ATTR
        .captures_iter(attrs)
        .find(|caps| caps.get(1).is_some_and(|m| m.as_str() == name))
        .and_then(|caps| caps.get(2))
        .map(|m| m.as_str())
}

fn parse_range(value: &str) -> Option<[f64; 2]> {
    let mut parts = value.split(',');
    let lo: f64 = parts.next()?.trim().parse().ok()?;
    let hi: f64 = parts.next()?.trim().parse().ok()?;
    if parts.next().is_some() || !lo.is_finite() || !hi.is_finite() {
        return None;
    }
    Some([lo, hi])
}

fn parse_step(value: &str) -> Option<f64> {
    let step: f64 = value.trim().parse().ok()?;
    (step.is_finite() && step > 0.0).then_some(step)
}
