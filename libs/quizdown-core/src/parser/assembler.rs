//! Question assembly: the line scan over a material-stripped block.

use crate::error::{BlockError, Result};
use crate::format;
use crate::types::{option_label, Choice, QuestionBody};
use rand::seq::SliceRandom;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Section {
    None,
    Question,
    Options,
    Answer,
}

/// Assemble one block into a question body.
///
/// `Ok(None)` means the block produced no question text and is suppressed.
pub fn assemble(text: &str, materials_html: String) -> Result<Option<QuestionBody>> {
    let mut question_lines: Vec<&str> = Vec::new();
    let mut answer_lines: Vec<&str> = Vec::new();
    let mut options: Vec<Choice> = Vec::new();
    let mut section = Section::None;

    for line in text.lines() {
        if line.starts_with("- [") {
            section = Section::Options;
            options.push(Choice {
                correct: line.starts_with("- [x]"),
                text_html: format::apply(line.get(5..).unwrap_or("").trim()),
            });
        } else if let Some(rest) = line.strip_prefix("A:") {
            section = Section::Answer;
            answer_lines.push(rest.trim());
        } else if section == Section::None {
            // Strict grammar: a block enters the question section only at an
            // explicit `Q:` marker. Stray leading lines are dropped.
            if let Some(rest) = line.trim().strip_prefix("Q:") {
                section = Section::Question;
                let rest = rest.trim();
                if !rest.is_empty() {
                    question_lines.push(rest);
                }
            }
        } else if section == Section::Question {
            question_lines.push(line);
        } else if section == Section::Answer {
            answer_lines.push(line);
        }
        // Plain lines inside the options section are dropped.
    }

    let title_html = format::apply(question_lines.join("\n").trim());
    if title_html.is_empty() {
        return Ok(None);
    }
    let answer_html = format::apply(answer_lines.join("\n").trim()).replace('\n', "<br>");

    if options.is_empty() {
        return Ok(Some(QuestionBody::FreeResponse {
            title_html,
            materials_html,
            answer_html,
        }));
    }

    options.shuffle(&mut rand::thread_rng());
    let correct = options
        .iter()
        .position(|choice| choice.correct)
        .ok_or(BlockError::NoCorrectOption)?;

    Ok(Some(QuestionBody::MultipleChoice {
        title_html,
        materials_html,
        options,
        correct_label: option_label(correct),
        answer_html,
    }))
}
