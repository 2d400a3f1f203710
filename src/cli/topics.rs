use anyhow::Result;

use crate::models::{topics_or_general, Grade, Subject};

/// Execute the topics command - list syllabus topics, optionally filtered
pub fn run_topics(grade: Option<Grade>, subject: Option<Subject>) -> Result<()> {
    let grades: Vec<Grade> = grade.map(|g| vec![g]).unwrap_or_else(|| Grade::ALL.to_vec());
    let subjects: Vec<Subject> = subject
        .map(|s| vec![s])
        .unwrap_or_else(|| Subject::ALL.to_vec());

    for grade in &grades {
        for subject in &subjects {
            println!("{} - {}", grade, subject);
            for topic in topics_or_general(*grade, *subject) {
                println!("  {}", topic);
            }
            println!();
        }
    }

    Ok(())
}
