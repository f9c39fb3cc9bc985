//! Core types for the quizdown compiler.

use serde::{Deserialize, Serialize};

/// Fallback document title when the header is absent or carries no `title`.
pub const DEFAULT_TITLE: &str = "Generated Quiz";

/// A fully parsed quiz document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    pub title: String,
    pub questions: Vec<Question>,
}

/// One question record, numbered by its block's position in the source body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    /// 1-based position of the source block. Stable even when neighbouring
    /// blocks fail or are suppressed.
    pub ordinal: usize,
    #[serde(flatten)]
    pub body: QuestionBody,
}

/// Question payload, tagged by kind.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum QuestionBody {
    MultipleChoice {
        title_html: String,
        materials_html: String,
        /// Presentation order, already shuffled.
        options: Vec<Choice>,
        /// Letter (`a`, `b`, ...) of the correct option after shuffling.
        correct_label: char,
        answer_html: String,
    },
    FreeResponse {
        title_html: String,
        materials_html: String,
        answer_html: String,
    },
    /// Placeholder for a block that failed to parse.
    Failed { message: String },
}

/// A single answer option of a multiple-choice question.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Choice {
    pub correct: bool,
    pub text_html: String,
}

/// Descriptor for an embedded graphic, keyed by the rendering backend that
/// will populate its placeholder container. The core never evaluates
/// expressions or draws anything itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "backend", rename_all = "snake_case")]
pub enum PlotSpec {
    /// `f(x)`-style expressions for the in-page function plotter.
    Function {
        id: String,
        functions: Vec<String>,
        range: [f64; 2],
        #[serde(skip_serializing_if = "Option::is_none")]
        step: Option<f64>,
    },
    /// An embedded GeoGebra applet identified by its material id.
    Geogebra {
        container_id: String,
        material_id: String,
    },
}

/// Result of one parse invocation: the document plus the plot descriptors
/// collected for the external rendering stage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParsedQuiz {
    pub document: Document,
    pub plots: Vec<PlotSpec>,
}

/// Letter addressing an option position (`a`, `b`, ...).
pub fn option_label(index: usize) -> char {
    char::from_u32('a' as u32 + index as u32).unwrap_or('?')
}
