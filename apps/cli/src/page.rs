//! HTML assembly for the generated quiz page.
//!
//! Consumes the compiled document: question records become sections, plot
//! descriptors are embedded as JSON for the in-page renderers, and the
//! style/behavior assets are inlined so the page is self-contained.

use anyhow::Context;
use quizdown_core::{option_label, Document, ParsedQuiz, Question, QuestionBody};

const STYLES: &str = include_str!("../assets/styles.css");
const QUIZ_JS: &str = include_str!("../assets/quiz.js");

/// Render the document body: a heading plus one section per question.
pub fn render_body(document: &Document) -> String {
    let mut body = format!("<h1>{}</h1><div class=\"quiz-section\">", document.title);
    for question in &document.questions {
        body.push_str(&render_question(question));
    }
    body.push_str("</div>");
    body
}

fn render_question(question: &Question) -> String {
    let ordinal = question.ordinal;
    let id = format!("q{ordinal}");
    match &question.body {
        QuestionBody::MultipleChoice {
            title_html,
            materials_html,
            options,
            correct_label,
            answer_html,
        } => {
            let mut html = format!(
                "<section class=\"question-block\" id=\"{id}\" \
                 data-correct-answer=\"{correct_label}\" aria-labelledby=\"{id}-title\">"
            );
            html.push_str(&format!(
                "<p class=\"question-number\" id=\"{id}-number\">{ordinal}.</p>\
                 <p class=\"question-title\" id=\"{id}-title\">{title_html}</p>"
            ));
            html.push_str(materials_html);
            html.push_str("<fieldset><div class=\"options\" role=\"radiogroup\">");
            for (index, option) in options.iter().enumerate() {
                let value = option_label(index);
                html.push_str(&format!(
                    "<label><input type=\"radio\" name=\"{id}\" value=\"{value}\"> {}</label>",
                    option.text_html
                ));
            }
            html.push_str(&format!(
                "</div></fieldset>\
                 <button class=\"check-button\" aria-controls=\"{id}-feedback {id}-explanation\">Check</button>\
                 <div class=\"feedback\" id=\"{id}-feedback\" role=\"alert\" aria-live=\"polite\"></div>\
                 <div class=\"explanation\" id=\"{id}-explanation\" aria-live=\"polite\">{answer_html}</div>"
            ));
            html.push_str("</section>");
            html
        }
        QuestionBody::FreeResponse {
            title_html,
            materials_html,
            answer_html,
        } => {
            let mut html =
                format!("<section class=\"question-block\" id=\"{id}\" aria-labelledby=\"{id}-title\">");
            html.push_str(&format!(
                "<p class=\"question-number\" id=\"{id}-number\">{ordinal}.</p>\
                 <p class=\"question-title\" id=\"{id}-title\">{title_html}</p>"
            ));
            html.push_str(materials_html);
            if !answer_html.is_empty() {
                html.push_str(&format!(
                    "<details><summary>Show/Hide</summary><div class=\"answer-box\">{answer_html}</div></details>"
                ));
            }
            html.push_str("</section>");
            html
        }
        QuestionBody::Failed { .. } => format!(
            "<section class=\"question-block error\"><p class=\"question-title\">\
             <strong>{ordinal}.</strong> Error parsing this question.</p></section>"
        ),
    }
}

/// Assemble the full standalone page around the rendered body.
pub fn render_page(quiz: &ParsedQuiz) -> anyhow::Result<String> {
    let plot_data = serde_json::to_string(&quiz.plots).context("failed to serialize plot data")?;
    let body = render_body(&quiz.document);

    let mut page = String::with_capacity(body.len() + STYLES.len() + QUIZ_JS.len() + 2048);
    page.push_str("<!DOCTYPE html><html lang=\"en\"><head><meta charset=\"UTF-8\">");
    page.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">");
    page.push_str("<title>");
    page.push_str(&quiz.document.title);
    page.push_str("</title>\n");
    page.push_str("<script src=\"https://cdn.plot.ly/plotly-latest.min.js\"></script>\n");
    page.push_str(
        "<script src=\"https://cdnjs.cloudflare.com/ajax/libs/mathjs/11.7.0/math.min.js\"></script>\n",
    );
    page.push_str("<script src=\"https://www.geogebra.org/apps/deployggb.js\"></script>\n");
    page.push_str(
        "<script>MathJax = { tex: { inlineMath: [['$', '$']], displayMath: [['$$', '$$']] } };</script>\n",
    );
    page.push_str(
        "<script async src=\"https://cdn.jsdelivr.net/npm/mathjax@3/es5/tex-chtml.js\" defer></script>\n",
    );
    page.push_str("<style>");
    page.push_str(STYLES);
    page.push_str("</style></head>\n<body>\n");
    page.push_str(&body);
    page.push_str("\n<script>window.QUIZ_PLOT_DATA = ");
    page.push_str(&plot_data);
    page.push_str(";</script>\n<script>");
    page.push_str(QUIZ_JS);
    page.push_str("</script>\n</body></html>");
    Ok(page)
}

#[cfg(test)]
mod tests {
    use super::*;
    use quizdown_core::parse;

    #[test]
    fn multiple_choice_section_carries_the_answer_key() {
        let quiz = parse("Q: Pick\n- [x] yes\n- [ ] no");
        let body = render_body(&quiz.document);
        assert!(body.contains("data-correct-answer=\""));
        assert!(body.contains("value=\"a\""));
        assert!(body.contains("value=\"b\""));
        assert!(body.contains("class=\"check-button\""));
    }

    #[test]
    fn free_response_answer_is_behind_details() {
        let quiz = parse("Q: Why?\nA: Because.");
        let body = render_body(&quiz.document);
        assert!(body.contains("<details><summary>Show/Hide</summary>"));
        assert!(body.contains("Because."));
        assert!(!body.contains("data-correct-answer"));
    }

    #[test]
    fn free_response_without_answer_has_no_details() {
        let quiz = parse("Q: Open ended, no key");
        let body = render_body(&quiz.document);
        assert!(!body.contains("<details>"));
    }

    #[test]
    fn failed_blocks_render_the_placeholder() {
        let quiz = parse("Q: broken\n- [ ] a\n- [ ] b");
        let body = render_body(&quiz.document);
        assert!(body.contains("question-block error"));
        assert!(body.contains("<strong>1.</strong> Error parsing this question."));
    }

    #[test]
    fn page_embeds_plot_data_and_assets() {
        let quiz = parse("Q: See plot\n[plot range=\"-1,1\"]\nf(x) = x\n[/plot]\nA: ok");
        let page = render_page(&quiz).unwrap();
        assert!(page.contains("window.QUIZ_PLOT_DATA = [{"));
        assert!(page.contains("\"backend\":\"function\""));
        assert!(page.contains("MathJax"));
        assert!(page.contains("<style>"));
    }

    #[test]
    fn page_title_comes_from_the_header() {
        let quiz = parse("---\ntitle: My Quiz\n---\nQ: ok?\nA: yes");
        let page = render_page(&quiz).unwrap();
        assert!(page.contains("<title>My Quiz</title>"));
        assert!(page.contains("<h1>My Quiz</h1>"));
    }
}
