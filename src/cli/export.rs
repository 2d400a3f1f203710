//! Plain-text exports of question sets and feedback reports.

use anyhow::{anyhow, Context, Result};
use chrono::Local;
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use crate::models::{parse_questions, Question, QuestionSet};

const DIVIDER_WIDTH: usize = 50;

fn divider() -> String {
    "=".repeat(DIVIDER_WIDTH)
}

/// Default export directory: `<downloads>/examprep`, else `./downloads`
pub fn default_export_dir() -> PathBuf {
    dirs::download_dir()
        .map(|d| d.join("examprep"))
        .unwrap_or_else(|| PathBuf::from("downloads"))
}

/// Replace anything outside `[A-Za-z0-9_.()-]` with `_`
pub fn sanitize_filename(name: &str) -> String {
    static UNSAFE: OnceLock<Regex> = OnceLock::new();
    UNSAFE
        .get_or_init(|| Regex::new(r"[^A-Za-z0-9_.()-]").expect("valid filename regex"))
        .replace_all(name, "_")
        .into_owned()
}

fn export_filename(
    kind: &str,
    grade: &str,
    subject: Option<&str>,
    topic: &str,
    stamp: &str,
) -> String {
    let subject_tag = subject
        .map(sanitize_filename)
        .filter(|s| !s.is_empty())
        .map(|s| format!("_{}", s))
        .unwrap_or_default();
    format!(
        "{}_{}{}_{}_{}.txt",
        kind,
        sanitize_filename(grade),
        subject_tag,
        sanitize_filename(topic),
        stamp
    )
}

fn write_export(dir: &Path, filename: &str, content: &str) -> Result<PathBuf> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Could not create export directory {}", dir.display()))?;
    let path = dir.join(filename);
    fs::write(&path, content).with_context(|| format!("Could not write {}", path.display()))?;
    tracing::debug!(path = %path.display(), "export written");
    Ok(path)
}

pub fn render_questions(set: &QuestionSet, generated: &str) -> String {
    let mut content = format!(
        "UNEB EXAM PRACTICE QUESTIONS\n{div}\n\
         Grade Level: {grade}\n\
         Subject: {subject}\n\
         Topic: {topic}\n\
         Generated: {generated}\n\
         Total Questions: {total}\n\
         {div}\n\n",
        div = divider(),
        grade = set.grade,
        subject = set.subject,
        topic = set.topic,
        generated = generated,
        total = set.questions.len(),
    );

    for question in &set.questions {
        content.push_str(&question.to_string());
        content.push_str("\n\n");
    }

    content.push_str(&format!(
        "\n{}\nINSTRUCTIONS:\n\
         1. Write your working clearly for each question\n\
         2. Show all steps in your solution\n\
         3. Once complete, submit to AI for correction\n\
         4. Review the feedback to improve\n\
         \n\
         Good luck!\n",
        divider()
    ));
    content
}

/// Write a question set to `dir` and return the file path
pub fn write_questions_file(dir: &Path, set: &QuestionSet) -> Result<PathBuf> {
    let now = Local::now();
    let filename = export_filename(
        "questions",
        set.grade.label(),
        Some(set.subject.label()),
        &set.topic,
        &now.format("%Y%m%d_%H%M%S").to_string(),
    );
    let content = render_questions(set, &now.format("%Y-%m-%d %H:%M:%S").to_string());
    write_export(dir, &filename, &content)
}

/// Metadata printed at the top of a feedback file
#[derive(Debug, Clone)]
pub struct FeedbackHeader<'a> {
    pub student: &'a str,
    pub grade: Option<&'a str>,
    pub subject: Option<&'a str>,
    pub topic: Option<&'a str>,
}

pub fn render_feedback(header: &FeedbackHeader<'_>, feedback: &str, date: &str) -> String {
    format!(
        "AI CORRECTION & FEEDBACK\n{div}\n\
         Student: {student}\n\
         Grade Level: {grade}\n\
         Subject: {subject}\n\
         Topic: {topic}\n\
         Date: {date}\n\
         {div}\n\n{feedback}\n\n{div}\n\
         Review this feedback carefully to understand where you went wrong.\n\
         Practice similar questions to strengthen this topic.\n",
        div = divider(),
        student = header.student,
        grade = header.grade.unwrap_or("N/A"),
        subject = header.subject.unwrap_or("N/A"),
        topic = header.topic.unwrap_or("N/A"),
        date = date,
        feedback = feedback,
    )
}

/// Write a feedback report to `dir` and return the file path
pub fn write_feedback_file(
    dir: &Path,
    header: &FeedbackHeader<'_>,
    feedback: &str,
) -> Result<PathBuf> {
    if feedback.trim().is_empty() {
        return Err(anyhow!("No feedback to save."));
    }

    let now = Local::now();
    let filename = export_filename(
        "feedback",
        header.grade.unwrap_or("unknown"),
        header.subject,
        header.topic.unwrap_or("general"),
        &now.format("%Y%m%d_%H%M%S").to_string(),
    );
    let content = render_feedback(header, feedback, &now.format("%Y-%m-%d %H:%M:%S").to_string());
    write_export(dir, &filename, &content)
}

/// Read questions from a file.
///
/// Accepts either an export written by [`write_questions_file`] (only the
/// body between the header and the instructions footer is parsed) or a
/// plain list of `Qn.` lines.
pub fn read_questions_file(path: &Path) -> Result<Vec<Question>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Could not read questions file {}", path.display()))?;

    let div = divider();
    let dividers: Vec<usize> = text
        .lines()
        .enumerate()
        .filter(|(_, line)| line.trim() == div)
        .map(|(i, _)| i)
        .collect();

    // header opens with two dividers, footer adds a third
    let body = if dividers.len() >= 3 {
        text.lines()
            .skip(dividers[1] + 1)
            .take(dividers[2] - dividers[1] - 1)
            .collect::<Vec<_>>()
            .join("\n")
    } else {
        text
    };

    let questions = parse_questions(&body, usize::MAX);
    if questions.is_empty() {
        return Err(anyhow!("No questions found in {}", path.display()));
    }
    Ok(questions)
}
