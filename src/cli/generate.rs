use anyhow::{anyhow, bail, Result};
use std::path::Path;

use crate::cli::ai::{CompletionGateway, CompletionOptions};
use crate::cli::export;
use crate::models::{
    parse_questions, sample_questions, topics_or_general, Grade, QuestionSet, Subject,
};

/// Upper bound on questions per request
pub const MAX_QUESTIONS: usize = 100;

const GENERATION_TEMPERATURE: f32 = 0.6;

/// Source tag for questions taken from the offline bank
pub const LOCAL_SOURCE: &str = "local";

/// Execute the generate command
pub fn run_generate(
    gateway: &CompletionGateway,
    grade: Grade,
    subject: Subject,
    topic: Option<&str>,
    count: usize,
    save_dir: Option<&Path>,
) -> Result<()> {
    let topic = match topic.map(str::trim).filter(|t| !t.is_empty()) {
        Some(t) => t.to_string(),
        None => topics_or_general(grade, subject)
            .into_iter()
            .next()
            .ok_or_else(|| anyhow!("No topics for {} {}", grade, subject))?,
    };

    let set = generate_questions(gateway, grade, subject, &topic, count)?;

    println!("{}\n", set.formatted());
    println!(
        "Generated {} {} questions on {} [source: {}]",
        set.questions.len(),
        subject,
        topic,
        set.source
    );

    if let Some(dir) = save_dir {
        let path = export::write_questions_file(dir, &set)?;
        println!("Saved: {}", path.display());
    }

    Ok(())
}

pub fn build_question_prompt(grade: Grade, subject: Subject, topic: &str, count: usize) -> String {
    format!(
        r#"Generate exactly {count} UNEB-style {subject} questions for {grade} students on: "{topic}"

Format your response EXACTLY like this:
Q1. [Question text here]
Q2. [Question text here]
Q3. [Question text here]
... and so on up to Q{count}

Each question should be:
- Clear and exam-like
- Appropriate difficulty for {grade}
- Self-contained (includes all necessary information)
- Solvable in 2-5 minutes for short-answer questions

Start immediately with Q1. Do not include any introduction or explanation.
"#
    )
}

/// Ask the gateway for questions, falling back to the offline bank when no
/// provider answered.
pub fn generate_questions(
    gateway: &CompletionGateway,
    grade: Grade,
    subject: Subject,
    topic: &str,
    count: usize,
) -> Result<QuestionSet> {
    if topic.trim().is_empty() {
        bail!("Please select a topic first.");
    }
    if count == 0 || count > MAX_QUESTIONS {
        bail!("Number of questions must be between 1 and {}.", MAX_QUESTIONS);
    }

    let prompt = build_question_prompt(grade, subject, topic, count);
    let result = gateway.complete(
        &prompt,
        CompletionOptions::default().with_temperature(GENERATION_TEMPERATURE),
    );

    let (text, source) = if result.is_error() || result.text.trim().is_empty() {
        tracing::info!(%subject, topic, "using offline question bank");
        (sample_questions(subject, topic, count), LOCAL_SOURCE.to_string())
    } else {
        (result.text, result.source.to_string())
    };

    let questions = parse_questions(&text, count);
    if questions.is_empty() {
        bail!("Failed to generate questions. Please try again.");
    }

    Ok(QuestionSet {
        grade,
        subject,
        topic: topic.to_string(),
        questions,
        source,
    })
}
