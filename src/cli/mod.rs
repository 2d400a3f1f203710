use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::cli::ai::{DEFAULT_MAX_RETRIES, DEFAULT_TEMPERATURE};
use crate::models::{Grade, Subject};

pub mod ai;
pub mod ask;
pub mod export;
pub mod generate;
pub mod grade;
pub mod providers;
pub mod topics;

pub use ask::run_ask;
pub use generate::run_generate;
pub use grade::{run_grade, GradingContext, Submission};
pub use providers::run_providers;
pub use topics::run_topics;

#[derive(Parser)]
#[command(name = "examprep")]
#[command(about = "Primary exam practice from the command line")]
#[command(version)]
pub struct Cli {
    /// Show debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Send a prompt through the AI provider chain
    Ask(AskArgs),
    /// Show configured AI providers in fallback order
    Providers,
    /// List syllabus topics
    Topics(TopicsArgs),
    /// Generate practice questions
    Generate(GenerateArgs),
    /// Mark answers to a set of questions
    Grade(GradeArgs),
}

#[derive(Args)]
pub struct AskArgs {
    pub prompt: String,
    /// Sampling temperature (0.0 - 1.0)
    #[arg(short, long, default_value_t = DEFAULT_TEMPERATURE)]
    pub temperature: f32,
    /// Attempts per retrying provider
    #[arg(short, long, default_value_t = DEFAULT_MAX_RETRIES)]
    pub max_retries: u32,
    /// Attach an image (requires the vision provider)
    #[arg(short, long)]
    pub image: Option<PathBuf>,
}

#[derive(Args)]
pub struct TopicsArgs {
    /// p6 or p7
    #[arg(short, long)]
    pub grade: Option<Grade>,
    /// mathematics, english, social-studies or science
    #[arg(short, long)]
    pub subject: Option<Subject>,
}

#[derive(Args)]
pub struct GenerateArgs {
    /// p6 or p7
    #[arg(short, long)]
    pub grade: Grade,
    /// mathematics, english, social-studies or science
    #[arg(short, long)]
    pub subject: Subject,
    /// Topic (defaults to the first syllabus topic)
    #[arg(short, long)]
    pub topic: Option<String>,
    /// Number of questions (1-100)
    #[arg(short = 'n', long, default_value_t = 10)]
    pub count: usize,
    /// Save questions to a text file
    #[arg(long)]
    pub save: bool,
    /// Directory for saved files
    #[arg(short, long, value_name = "DIR")]
    pub out: Option<PathBuf>,
}

#[derive(Args)]
pub struct GradeArgs {
    /// Questions file (an export from `generate --save` or `Qn.` lines)
    #[arg(short, long, value_name = "FILE")]
    pub questions: PathBuf,
    /// Typed answers, one `Q1. answer` per line
    #[arg(
        short,
        long,
        value_name = "FILE",
        conflicts_with = "image",
        required_unless_present = "image"
    )]
    pub answers: Option<PathBuf>,
    /// Photo of written work
    #[arg(short, long, value_name = "PATH")]
    pub image: Option<PathBuf>,
    #[arg(short, long)]
    pub grade: Option<Grade>,
    #[arg(short, long)]
    pub subject: Option<Subject>,
    #[arg(short, long)]
    pub topic: Option<String>,
    /// Name printed on saved feedback
    #[arg(long, default_value = "Student")]
    pub student: String,
    /// Save feedback to a text file
    #[arg(long)]
    pub save: bool,
    /// Directory for saved files
    #[arg(short, long, value_name = "DIR")]
    pub out: Option<PathBuf>,
}

impl GenerateArgs {
    pub fn save_dir(&self) -> Option<PathBuf> {
        save_dir(self.save, self.out.as_ref())
    }
}

impl GradeArgs {
    pub fn save_dir(&self) -> Option<PathBuf> {
        save_dir(self.save, self.out.as_ref())
    }

    pub fn context(&self) -> GradingContext {
        GradingContext {
            grade: self.grade,
            subject: self.subject,
            topic: self.topic.clone(),
        }
    }
}

/// `--out` implies saving
fn save_dir(save: bool, out: Option<&PathBuf>) -> Option<PathBuf> {
    match out {
        Some(dir) => Some(dir.clone()),
        None if save => Some(export::default_export_dir()),
        None => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_generate() {
        let cli = Cli::parse_from(["examprep", "generate", "-g", "p7", "-s", "maths", "-n", "5"]);
        let Commands::Generate(args) = cli.command else {
            panic!("expected generate");
        };
        assert_eq!(args.grade, Grade::Primary7);
        assert_eq!(args.subject, Subject::Mathematics);
        assert_eq!(args.count, 5);
        assert!(args.save_dir().is_none());
    }

    #[test]
    fn test_out_implies_save() {
        let cli = Cli::parse_from([
            "examprep", "generate", "-g", "p6", "-s", "science", "-o", "/tmp/x",
        ]);
        let Commands::Generate(args) = cli.command else {
            panic!("expected generate");
        };
        assert_eq!(args.save_dir(), Some(PathBuf::from("/tmp/x")));
    }

    #[test]
    fn test_grade_needs_answers_or_image() {
        let grade = |extra: &[&str]| {
            let args = ["examprep", "grade", "-q", "q.txt"].iter().chain(extra);
            Cli::try_parse_from(args)
        };
        assert!(grade(&[]).is_err());
        assert!(grade(&["-a", "a.txt", "-i", "p.jpg"]).is_err());
        assert!(grade(&["-i", "p.jpg"]).is_ok());
    }

    #[test]
    fn test_ask_defaults() {
        let cli = Cli::parse_from(["examprep", "ask", "hello"]);
        let Commands::Ask(args) = cli.command else {
            panic!("expected ask");
        };
        assert_eq!(args.temperature, DEFAULT_TEMPERATURE);
        assert_eq!(args.max_retries, DEFAULT_MAX_RETRIES);
    }

    #[test]
    fn test_bad_grade_rejected() {
        assert!(Cli::try_parse_from(["examprep", "topics", "-g", "p9"]).is_err());
    }
}
