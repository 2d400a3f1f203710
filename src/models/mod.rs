pub mod answer;
pub mod question;
pub mod sample_bank;
pub mod syllabus;

pub use answer::AnswerSheet;
pub use question::{format_questions, parse_questions, Question, QuestionSet};
pub use sample_bank::sample_questions;
pub use syllabus::{topics, topics_or_general, Grade, Subject};
