//! Quizdown parser: header, block segmentation, and per-block compilation.
//!
//! # Format
//! ```text
//! ---
//! title: Algebra Quiz
//! ---
//!
//! Q: What is $2^3$?
//! - [ ] 6
//! - [x] 8
//! A: Two cubed is **eight**.
//!
//! ---
//!
//! Q: Why?
//! A: Because.
//! ```

pub mod assembler;
pub mod header;
pub mod materials;

use crate::error::Result;
use crate::types::{Document, ParsedQuiz, PlotSpec, Question, QuestionBody};

/// Compile quizdown markup into a document plus its plot descriptors.
///
/// This never fails: a malformed header degrades to defaults, and a
/// malformed block degrades to an error placeholder at its ordinal while the
/// remaining blocks parse normally.
pub fn parse(text: &str) -> ParsedQuiz {
    let text = text.replace("\r\n", "\n");
    let (header, body) = header::extract(&text);

    let mut plots: Vec<PlotSpec> = Vec::new();
    let mut questions: Vec<Question> = Vec::new();

    let blocks = body.split("\n---\n").filter(|block| !block.trim().is_empty());
    for (index, block) in blocks.enumerate() {
        let ordinal = index + 1;
        match compile_block(block, &mut plots) {
            Ok(Some(body)) => questions.push(Question { ordinal, body }),
            // No question text: suppressed, but the ordinal stays used.
            Ok(None) => {}
            Err(err) => questions.push(Question {
                ordinal,
                body: QuestionBody::Failed {
                    message: err.to_string(),
                },
            }),
        }
    }

    ParsedQuiz {
        document: Document {
            title: header.title,
            questions,
        },
        plots,
    }
}

fn compile_block(block: &str, plots: &mut Vec<PlotSpec>) -> Result<Option<QuestionBody>> {
    let kept: Vec<&str> = block
        .split('\n')
        .filter(|line| !line.trim().starts_with("//"))
        .collect();
    let stripped = kept.join("\n");
    let extraction = materials::extract(stripped.trim(), plots);
    assembler::assemble(extraction.text.trim(), extraction.materials_html)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn header_round_trip() {
        let quiz = parse("---\ntitle: Algebra Quiz\n---\nQ: 1+1?\nA: 2");
        assert_eq!(quiz.document.title, "Algebra Quiz");
        assert_eq!(quiz.document.questions.len(), 1);
        let QuestionBody::FreeResponse {
            title_html,
            answer_html,
            ..
        } = &quiz.document.questions[0].body
        else {
            panic!("expected free response");
        };
        assert_eq!(title_html, "1+1?");
        assert_eq!(answer_html, "2");
    }

    #[test]
    fn degenerate_inputs_still_produce_a_document() {
        for text in [
            "",
            "\n\n",
            "---",
            "---\n---\n",
            "\n---\n\n---\n",
            "[code]",
            "$ _ ** [",
            "- [x] option with no question",
        ] {
            let quiz = parse(text);
            assert_eq!(quiz.document.title, crate::types::DEFAULT_TITLE, "input: {text:?}");
            assert!(quiz.document.questions.is_empty(), "input: {text:?}");
        }
    }

    #[test]
    fn blocks_are_numbered_and_isolated() {
        let text = "Q: first\nA: ok\n---\nQ: broken\n- [ ] a\n- [ ] b\n---\nQ: third\nA: fine";
        let quiz = parse(text);
        let questions = &quiz.document.questions;
        assert_eq!(questions.len(), 3);
        assert_eq!(questions[0].ordinal, 1);
        assert!(matches!(questions[0].body, QuestionBody::FreeResponse { .. }));
        assert_eq!(questions[1].ordinal, 2);
        assert!(matches!(questions[1].body, QuestionBody::Failed { .. }));
        assert_eq!(questions[2].ordinal, 3);
        assert!(matches!(questions[2].body, QuestionBody::FreeResponse { .. }));
    }

    #[test]
    fn suppressed_blocks_keep_later_ordinals_stable() {
        let text = "[material]\nonly material, no question\n[/material]\n---\nQ: real\nA: yes";
        let quiz = parse(text);
        let questions = &quiz.document.questions;
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].ordinal, 2);
    }

    #[test]
    fn comment_lines_are_stripped() {
        let quiz = parse("// top note\nQ: visible?\n  // indented note\nA: yes");
        let QuestionBody::FreeResponse { title_html, .. } = &quiz.document.questions[0].body
        else {
            panic!("expected free response");
        };
        assert_eq!(title_html, "visible?");
    }

    #[test]
    fn crlf_input_is_normalized() {
        let quiz = parse("---\r\ntitle: T\r\n---\r\nQ: ok?\r\nA: yes");
        assert_eq!(quiz.document.title, "T");
        assert_eq!(quiz.document.questions.len(), 1);
    }

    #[test]
    fn multiple_choice_correct_label_points_at_the_right_text() {
        let quiz = parse("Q: Pick\n- [ ] wrong\n- [x] right");
        let QuestionBody::MultipleChoice {
            options,
            correct_label,
            ..
        } = &quiz.document.questions[0].body
        else {
            panic!("expected multiple choice");
        };
        let index = (*correct_label as u8 - b'a') as usize;
        assert_eq!(options[index].text_html, "right");
    }

    #[test]
    fn shuffle_header_key_is_accepted_and_ignored() {
        let quiz = parse("---\nshuffle: false\n---\nQ: Pick\n- [x] a\n- [ ] b");
        assert!(matches!(
            quiz.document.questions[0].body,
            QuestionBody::MultipleChoice { .. }
        ));
    }

    #[test]
    fn plots_accumulate_across_blocks_in_order() {
        let text = "Q: one\n[plot]\nf(x) = x\n[/plot]\nA: ok\n---\nQ: two\n[plot]\nf(x) = x^2\n[/plot]\nA: ok";
        let quiz = parse(text);
        assert_eq!(quiz.plots.len(), 2);
        let PlotSpec::Function { functions, .. } = &quiz.plots[0] else {
            panic!("expected function plot");
        };
        assert_eq!(functions[0], "f(x) = x");
        let PlotSpec::Function { functions, .. } = &quiz.plots[1] else {
            panic!("expected function plot");
        };
        assert_eq!(functions[0], "f(x) = x^2");
    }

    #[test]
    fn materials_render_between_title_and_options() {
        let text = "Q: Read the code\n[code]\nfn main() {}\n[/code]\n- [x] fine\n- [ ] broken";
        let quiz = parse(text);
        let QuestionBody::MultipleChoice { materials_html, .. } = &quiz.document.questions[0].body
        else {
            panic!("expected multiple choice");
        };
        assert!(materials_html.contains("fn main() {}"));
    }

    #[test]
    fn each_invocation_gets_a_fresh_plot_list() {
        let text = "Q: one\n[plot]\nf(x) = x\n[/plot]\nA: ok";
        assert_eq!(parse(text).plots.len(), 1);
        assert_eq!(parse(text).plots.len(), 1);
    }
}
