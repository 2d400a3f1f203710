//! Marking student work
//!
//! Typed answers are marked one question at a time. A photo of written
//! work is sent in a single vision request covering every question.

use anyhow::{anyhow, bail, Context, Result};
use std::fs;
use std::path::Path;

use crate::cli::ai::{CompletionGateway, CompletionOptions, ImageAttachment};
use crate::cli::export::{self, FeedbackHeader};
use crate::models::{format_questions, AnswerSheet, Grade, Question, Subject};

const GRADING_TEMPERATURE: f32 = 0.3;
const REPORT_DIVIDER_WIDTH: usize = 60;

/// Where the student's work comes from
pub enum Submission<'a> {
    /// Text file of `Q1. answer` lines
    Typed(&'a Path),
    /// Photo or scan of written work
    Photo(&'a Path),
}

/// Execute the grade command
pub fn run_grade(
    gateway: &CompletionGateway,
    questions_path: &Path,
    submission: Submission<'_>,
    context: &GradingContext,
    student: &str,
    save_dir: Option<&Path>,
) -> Result<()> {
    let questions = export::read_questions_file(questions_path)?;

    let report = match submission {
        Submission::Typed(path) => {
            let input = fs::read_to_string(path)
                .with_context(|| format!("Could not read answers file {}", path.display()))?;
            let answers = AnswerSheet::parse_typed(&input);
            if answers.is_empty() {
                return Err(anyhow!(
                    "Could not parse your answers. Use format: Q1. [answer], Q2. [answer], etc."
                ));
            }
            println!("Received {} typed answers.", answers.len());
            grade_answers(gateway, &questions, &answers, context)?
        }
        Submission::Photo(path) => {
            let image = ImageAttachment::open(path)?;
            println!("Photo received with {} questions.", questions.len());
            grade_image(gateway, &questions, &image, context)?
        }
    };

    println!("{}", report);

    if let Some(dir) = save_dir {
        let grade = context.grade.map(|g| g.label());
        let subject = context.subject.map(|s| s.label());
        let header = FeedbackHeader {
            student,
            grade,
            subject,
            topic: context.topic.as_deref(),
        };
        let path = export::write_feedback_file(dir, &header, &report)?;
        println!("Saved: {}", path.display());
    }

    Ok(())
}

/// Grade, subject and topic the work belongs to; any may be unknown
#[derive(Debug, Clone, Default)]
pub struct GradingContext {
    pub grade: Option<Grade>,
    pub subject: Option<Subject>,
    pub topic: Option<String>,
}

impl GradingContext {
    fn grade_label(&self) -> String {
        self.grade
            .map(|g| g.to_string())
            .unwrap_or_else(|| "primary school".to_string())
    }

    fn subject_label(&self) -> String {
        self.subject
            .map(|s| s.to_string())
            .unwrap_or_else(|| "General".to_string())
    }
}

pub fn build_grading_prompt(context: &GradingContext, question: &Question, answer: &str) -> String {
    format!(
        "You are an experienced UNEB examiner for {grade} students. Subject: {subject}

Question: {question}

Student's Answer: {answer}

Provide:
1. Is this answer correct? (Yes/Partially/No)
2. Score: X/10
3. Explanation: Brief feedback on what's correct and what needs improvement
4. If wrong, provide the correct approach

Keep feedback concise but clear. Be encouraging.",
        grade = context.grade_label(),
        subject = context.subject_label(),
        question = question,
        answer = answer,
    )
}

pub fn build_image_grading_prompt(context: &GradingContext, questions: &[Question]) -> String {
    format!(
        "You are an experienced UNEB examiner for {grade} students. Subject: {subject}

The attached image shows a student's handwritten working and answers to these questions:

{questions}

For each question, give:
1. The answer you can read from the image (or say it is missing or unreadable)
2. Is it correct? (Yes/Partially/No)
3. Score: X/10
4. Brief feedback and, if wrong, the correct approach

Label each part Q1, Q2, ... Keep feedback concise but clear. Be encouraging.",
        grade = context.grade_label(),
        subject = context.subject_label(),
        questions = format_questions(questions),
    )
}

fn divider() -> String {
    "=".repeat(REPORT_DIVIDER_WIDTH)
}

/// Mark typed answers, one gateway call per answered question.
///
/// Unanswered questions are reported as `[NOT ANSWERED]` without calling
/// the gateway. Provider failures show up as sentinel text in the report.
pub fn grade_answers(
    gateway: &CompletionGateway,
    questions: &[Question],
    answers: &AnswerSheet,
    context: &GradingContext,
) -> Result<String> {
    if questions.is_empty() || answers.is_empty() {
        bail!("No questions or answers to grade.");
    }

    let entries: Vec<String> = questions
        .iter()
        .enumerate()
        .map(|(i, question)| match answers.get(i) {
            None => format!("Q{}: [NOT ANSWERED]", i + 1),
            Some(answer) => {
                let prompt = build_grading_prompt(context, question, answer);
                let result = gateway.complete(
                    &prompt,
                    CompletionOptions::default().with_temperature(GRADING_TEMPERATURE),
                );
                format!("Q{}:\n{}\n", i + 1, result.text)
            }
        })
        .collect();

    Ok(format!("{}\n{}", divider(), entries.join("\n")))
}

/// Mark a photo of written work in one vision request
pub fn grade_image(
    gateway: &CompletionGateway,
    questions: &[Question],
    image: &ImageAttachment,
    context: &GradingContext,
) -> Result<String> {
    if questions.is_empty() {
        bail!("No questions to grade.");
    }

    let prompt = build_image_grading_prompt(context, questions);
    let result = gateway.complete(
        &prompt,
        CompletionOptions::default()
            .with_temperature(GRADING_TEMPERATURE)
            .with_image(image),
    );

    if result.is_error() {
        return Ok(result.text);
    }
    Ok(format!("{}\n{}", divider(), result.text))
}
