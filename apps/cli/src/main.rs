//! Command line front end: reads a quizdown file and writes a standalone
//! HTML quiz page, or the parsed document as JSON.

mod page;

use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use quizdown_core::QuestionBody;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(
    name = "quizdown",
    about = "Compile quizdown markup into a standalone quiz page"
)]
struct Args {
    /// Quizdown source file.
    input: PathBuf,

    /// Output file. Defaults to the input path with its extension replaced.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Emit the parsed document and plot descriptors as JSON instead of HTML.
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();
    let source = fs::read_to_string(&args.input)
        .with_context(|| format!("failed to read {}", args.input.display()))?;

    let quiz = quizdown_core::parse(&source);
    for question in &quiz.document.questions {
        if let QuestionBody::Failed { message } = &question.body {
            tracing::warn!("question {} failed to parse: {}", question.ordinal, message);
        }
    }
    tracing::info!(
        "parsed {} question(s) and {} plot(s)",
        quiz.document.questions.len(),
        quiz.plots.len()
    );

    let extension = if args.json { "json" } else { "html" };
    let output = args
        .output
        .unwrap_or_else(|| args.input.with_extension(extension));
    let rendered = if args.json {
        serde_json::to_string_pretty(&quiz).context("failed to serialize document")?
    } else {
        page::render_page(&quiz)?
    };
    fs::write(&output, rendered)
        .with_context(|| format!("failed to write {}", output.display()))?;
    tracing::info!("wrote {}", output.display());
    Ok(())
}
