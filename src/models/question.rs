use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

use super::syllabus::{Grade, Subject};

/// A single numbered practice question
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub number: u32,
    pub text: String,
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Q{}. {}", self.number, self.text)
    }
}

/// Questions generated for one grade/subject/topic
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionSet {
    pub grade: Grade,
    pub subject: Subject,
    pub topic: String,
    pub questions: Vec<Question>,
    /// Provider tag, or "local" when the sample bank was used
    pub source: String,
}

impl QuestionSet {
    /// Questions separated by blank lines, as displayed and exported
    pub fn formatted(&self) -> String {
        format_questions(&self.questions)
    }
}

pub fn format_questions(questions: &[Question]) -> String {
    questions
        .iter()
        .map(|q| q.to_string())
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn question_line() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)^Q(\d+)\.?\s*(.*)$").expect("valid question regex"))
}

/// Parse free-form model output into questions.
///
/// A trimmed line starting `Q<n>` (optional dot) opens a question; any other
/// non-blank line continues the current one. Text before the first question
/// is dropped. At most `limit` questions are returned.
pub fn parse_questions(text: &str, limit: usize) -> Vec<Question> {
    let mut questions = Vec::new();
    let mut current: Option<Question> = None;

    for raw_line in text.lines() {
        let line = raw_line.trim();
        if line.is_empty() {
            continue;
        }

        let opened = question_line()
            .captures(line)
            .and_then(|caps| Some((caps[1].parse::<u32>().ok()?, caps[2].trim().to_string())));

        match opened {
            Some((number, rest)) => {
                if let Some(done) = current.take() {
                    questions.push(done);
                }
                current = Some(Question { number, text: rest });
            }
            None => {
                if let Some(q) = current.as_mut() {
                    if !q.text.is_empty() {
                        q.text.push(' ');
                    }
                    q.text.push_str(line);
                }
            }
        }
    }

    if let Some(done) = current {
        questions.push(done);
    }

    questions.truncate(limit);
    questions
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple() {
        let questions = parse_questions("Q1. Add 2 and 3.\nQ2. Subtract 4 from 9.", 10);
        assert_eq!(questions.len(), 2);
        assert_eq!(questions[0].to_string(), "Q1. Add 2 and 3.");
        assert_eq!(questions[1].number, 2);
    }

    #[test]
    fn test_parse_multi_digit_and_case() {
        let text = (1..=12)
            .map(|i| format!("q{} Question {}", i, i))
            .collect::<Vec<_>>()
            .join("\n");
        let questions = parse_questions(&text, 20);
        assert_eq!(questions.len(), 12);
        assert_eq!(questions[11].to_string(), "Q12. Question 12");
    }

    #[test]
    fn test_parse_continuation_and_preamble() {
        let text = "Here are your questions:\n\n\
                    Q1. A farmer has 12 cows.\n   He sells 5.\n\n\
                    How many remain?\nQ2. Name a prime.";
        let questions = parse_questions(text, 10);
        assert_eq!(questions.len(), 2);
        assert_eq!(
            questions[0].text,
            "A farmer has 12 cows. He sells 5. How many remain?"
        );
    }

    #[test]
    fn test_parse_truncates() {
        let questions = parse_questions("Q1. a\nQ2. b\nQ3. c", 2);
        assert_eq!(questions.len(), 2);
    }

    #[test]
    fn test_parse_nothing() {
        assert!(parse_questions("No questions here.", 5).is_empty());
        assert!(parse_questions("", 5).is_empty());
    }

    #[test]
    fn test_format_questions() {
        let questions = vec![
            Question { number: 1, text: "a".into() },
            Question { number: 2, text: "b".into() },
        ];
        assert_eq!(format_questions(&questions), "Q1. a\n\nQ2. b");
    }
}
