//! CLI command definitions

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Output format for command results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Colored, human-readable text
    Text,
    /// JSON output
    Json,
}

impl From<OutputFormat> for prep_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Text => prep_domain::OutputFormat::Text,
            OutputFormat::Json => prep_domain::OutputFormat::Json,
        }
    }
}

/// CLI arguments for exam-prep
#[derive(Parser, Debug)]
#[command(name = "exam-prep")]
#[command(author, version, about = "Exam practice: question selection, scoring and performance summaries")]
#[command(long_about = r#"
exam-prep selects practice questions for a subject and topic, scores your
answers, and summarizes your performance.

When the bank has no questions for a topic, questions from the whole subject
are used; when the subject has none at all, placeholder questions are served.

Performance summaries use a Gemini-compatible API when an API key is
available (GEMINI_API_KEY by default) and fall back to a fixed message
otherwise.

Configuration files are loaded from (in priority order):
1. EXAM_PREP_* environment variables
2. --config <path>        Explicit config file
3. ./exam-prep.toml       Project-level config
4. ~/.config/exam-prep/config.toml   Global config

Example:
  exam-prep topics --subject Government
  exam-prep practice --subject Mathematics --topic Calculus --count 5
  exam-prep practice --subject Government --topic Federalism --answers b,c,a
  exam-prep history --student ada
  exam-prep review exam-1
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Output format (overrides [output].format)
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,

    /// Also write logs to a daily-rotated file in this directory
    #[arg(long, value_name = "DIR", global = true)]
    pub log_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List syllabus subjects and topics
    Topics {
        /// Only show this subject
        #[arg(long)]
        subject: Option<String>,
    },

    /// Select practice questions, optionally scoring answers
    Practice(PracticeArgs),

    /// Show a student's recent exams
    History {
        /// Student id in the history store
        #[arg(long)]
        student: String,
    },

    /// Review a stored exam result with a performance summary
    Review {
        /// Exam id
        exam_id: String,
    },
}

#[derive(Args, Debug, Clone)]
pub struct PracticeArgs {
    /// Subject, e.g. "Mathematics"
    #[arg(long)]
    pub subject: String,

    /// Syllabus topic, e.g. "Calculus"
    #[arg(long)]
    pub topic: String,

    /// Number of questions (defaults to [selection].default_count)
    #[arg(short = 'n', long)]
    pub count: Option<usize>,

    /// Exam type: JAMB, WAEC, NECO, POST-UTME or any custom name
    #[arg(long, default_value = "JAMB")]
    pub exam_type: String,

    /// Score the attempt with these answers, in question order
    /// (comma-separated option ids; use `-` to skip a question)
    #[arg(long, value_delimiter = ',', value_name = "IDS")]
    pub answers: Option<Vec<String>>,

    /// Record the attempt as a timed exam
    #[arg(long)]
    pub timed: bool,

    /// Show correct answers and explanations
    #[arg(long)]
    pub reveal: bool,

    /// Seed for a reproducible question order
    #[arg(long)]
    pub seed: Option<u64>,
}

impl PracticeArgs {
    /// Answers as selections, `-` and blanks meaning unanswered
    pub fn selections(&self) -> Option<Vec<Option<String>>> {
        self.answers.as_ref().map(|answers| {
            answers
                .iter()
                .map(|a| a.trim())
                .map(|a| (!a.is_empty() && a != "-").then(|| a.to_string()))
                .collect()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_practice() {
        let cli = Cli::try_parse_from([
            "exam-prep",
            "practice",
            "--subject",
            "Mathematics",
            "--topic",
            "Calculus",
            "-n",
            "5",
            "--answers",
            "a,-,c",
            "-o",
            "json",
        ])
        .unwrap();

        assert_eq!(cli.output, Some(OutputFormat::Json));
        let Some(Command::Practice(args)) = cli.command else {
            panic!("expected practice command");
        };
        assert_eq!(args.count, Some(5));
        assert_eq!(args.exam_type, "JAMB");
        assert_eq!(
            args.selections(),
            Some(vec![Some("a".to_string()), None, Some("c".to_string())])
        );
    }

    #[test]
    fn test_parse_review_and_verbosity() {
        let cli = Cli::try_parse_from(["exam-prep", "-vv", "review", "exam-42"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert!(matches!(cli.command, Some(Command::Review { exam_id }) if exam_id == "exam-42"));
    }

    #[test]
    fn test_show_config_without_command() {
        let cli = Cli::try_parse_from(["exam-prep", "--show-config"]).unwrap();
        assert!(cli.show_config);
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_practice_requires_subject_and_topic() {
        assert!(Cli::try_parse_from(["exam-prep", "practice", "--subject", "Physics"]).is_err());
    }
}
