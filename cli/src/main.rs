//! CLI entrypoint for exam-prep
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use prep_application::{
    GenerateAnalysisUseCase, LlmGateway, LoadDashboardUseCase, NoProgress, ProgressNotifier,
    QuestionBankProvider, RandomSource, RequestTracker, ReviewResultUseCase, ScoreAttemptInput,
    ScoreAttemptUseCase, SelectQuestionsInput, SelectQuestionsUseCase,
};
use prep_domain::{ExamMode, ExamType};
use prep_infrastructure::{
    ConfigLoader, FileConfig, GeminiLlmGateway, JsonExamStore, SeededRandomSource,
    StaticQuestionBank, ThreadRngSource, load_syllabus,
};
use prep_presentation::{
    Cli, Command, ConsoleFormatter, OutputConfig, PracticeArgs, PracticeReport, ProgressReporter,
    SimpleProgress,
};
use std::future::Future;
use std::io::IsTerminal;
use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Keep the guard alive so buffered file logs are flushed on exit
    let _log_guard = init_logging(cli.verbose, cli.log_dir.as_deref())?;

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    info!("Starting exam-prep");

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };
    check_config(&config)?;

    let output = OutputConfig::resolve(
        config.output.format,
        config.output.color,
        cli.output.map(Into::into),
        cli.quiet,
    );
    ConsoleFormatter::set_color(output.color);

    let Some(command) = cli.command else {
        bail!("No command given. Run `exam-prep --help` for usage.");
    };

    let progress: Box<dyn ProgressNotifier> = if !output.show_progress {
        Box::new(NoProgress)
    } else if std::io::stderr().is_terminal() {
        Box::new(ProgressReporter::new())
    } else {
        Box::new(SimpleProgress)
    };

    // === Dependency Injection ===
    let tracker = RequestTracker::new();

    match command {
        Command::Topics { subject } => {
            let syllabus = load_syllabus(config.content.syllabus_path().as_deref())?;
            let bank = StaticQuestionBank::load(config.content.question_bank_path().as_deref())?;
            if output.is_json() {
                println!("{}", ConsoleFormatter::format_json(&syllabus));
            } else {
                println!(
                    "{}",
                    ConsoleFormatter::format_topics(&syllabus, subject.as_deref(), &bank.subjects())
                );
            }
        }

        Command::Practice(args) => {
            practice(&config, &args, &output, progress.as_ref(), &tracker).await?;
        }

        Command::History { student } => {
            let use_case = LoadDashboardUseCase::new(exam_store(&config)?);
            let dashboard = use_case.execute(&student).await?;
            if output.is_json() {
                println!("{}", ConsoleFormatter::format_json(&dashboard));
            } else {
                println!("{}", ConsoleFormatter::format_dashboard(&dashboard));
            }
        }

        Command::Review { exam_id } => {
            let use_case = ReviewResultUseCase::new(exam_store(&config)?, analysis(&config));
            let review = cancellable(
                &tracker,
                &exam_id,
                use_case.execute_with_progress(&exam_id, progress.as_ref()),
            )
            .await??;
            if output.is_json() {
                println!("{}", ConsoleFormatter::format_json(&review));
            } else {
                println!("{}", ConsoleFormatter::format_review(&review));
            }
        }
    }

    Ok(())
}

async fn practice(
    config: &FileConfig,
    args: &PracticeArgs,
    output: &OutputConfig,
    progress: &dyn ProgressNotifier,
    tracker: &RequestTracker,
) -> Result<()> {
    // Reference data is loaded once and shared read-only
    let bank = Arc::new(StaticQuestionBank::load(
        config.content.question_bank_path().as_deref(),
    )?);
    let random: Arc<dyn RandomSource> = match args.seed {
        Some(seed) => Arc::new(SeededRandomSource::new(seed)),
        None => Arc::new(ThreadRngSource),
    };
    let params = config.selection.to_selection_params();
    let count = args.count.unwrap_or(params.default_count);
    let use_case = SelectQuestionsUseCase::new(bank, random).with_params(params);

    let Ok(exam_type) = args.exam_type.parse::<ExamType>();
    let input = SelectQuestionsInput::new(&args.subject, &args.topic, count, exam_type.clone());

    let selection = cancellable(
        tracker,
        &args.subject,
        use_case.execute_with_progress(input, progress),
    )
    .await?;

    let Some(selections) = args.selections() else {
        if output.is_json() {
            let report = PracticeReport {
                selection: &selection,
                result: None,
                narrative: None,
            };
            println!("{}", ConsoleFormatter::format_json(&report));
        } else {
            println!(
                "{}",
                ConsoleFormatter::format_selection(&selection, &args.subject, args.reveal)
            );
        }
        return Ok(());
    };

    let attempt = ScoreAttemptInput {
        attempt_id: attempt_id(),
        exam_type,
        mode: if args.timed {
            ExamMode::Timed
        } else {
            ExamMode::Practice
        },
        subject: Some(args.subject.clone()),
        time_spent_seconds: 0,
        questions: selection.questions.clone(),
        selections,
    };
    let result = ScoreAttemptUseCase::execute(&attempt)
        .context("Could not score the supplied answers")?;

    let narrative = cancellable(
        tracker,
        &result.id,
        analysis(config).execute_with_progress(&result, progress),
    )
    .await?;

    if output.is_json() {
        let report = PracticeReport {
            selection: &selection,
            result: Some(&result),
            narrative: Some(&narrative),
        };
        println!("{}", ConsoleFormatter::format_json(&report));
    } else {
        println!(
            "{}",
            ConsoleFormatter::format_selection(&selection, &args.subject, args.reveal)
        );
        println!("{}", ConsoleFormatter::format_result(&result, &narrative));
    }

    Ok(())
}

/// Narrative use case, with or without a configured gateway
fn analysis(config: &FileConfig) -> GenerateAnalysisUseCase {
    let gateway: Option<Arc<dyn LlmGateway>> = match GeminiLlmGateway::from_config(&config.ai) {
        Ok(gateway) => gateway.map(|g| Arc::new(g) as Arc<dyn LlmGateway>),
        Err(e) => {
            warn!("Text-generation client unavailable: {}", e);
            None
        }
    };
    GenerateAnalysisUseCase::new(gateway).with_params(config.ai.to_narrative_params())
}

fn exam_store(config: &FileConfig) -> Result<Arc<JsonExamStore>> {
    let path = config.history.store_path().ok_or_else(|| {
        anyhow!("No history store configured. Set [history].store or EXAM_PREP_HISTORY__STORE.")
    })?;
    Ok(Arc::new(JsonExamStore::new(path)))
}

/// Run `future` as the live request for `key`; Ctrl-C abandons it.
async fn cancellable<F: Future>(tracker: &RequestTracker, key: &str, future: F) -> Result<F::Output> {
    let ticket = tracker.begin(key);
    let token = ticket.token().clone();
    let watcher = tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            token.cancel();
        }
    });

    let output = tracker.run(&ticket, future).await;
    watcher.abort();
    output.ok_or_else(|| anyhow!("Cancelled"))
}

/// Attempt id from the current time in milliseconds plus a process-wide
/// sequence number.
fn attempt_id() -> String {
    static SEQUENCE: AtomicU64 = AtomicU64::new(0);
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or_default();
    format!("practice-{}-{}", millis, SEQUENCE.fetch_add(1, Ordering::Relaxed))
}

fn check_config(config: &FileConfig) -> Result<()> {
    let issues = config.validate();
    for issue in &issues {
        if issue.is_error() {
            eprintln!("config error: {}", issue.message);
        } else {
            warn!("{}", issue.message);
        }
    }
    if issues.iter().any(|i| i.is_error()) {
        bail!("Invalid configuration");
    }
    Ok(())
}

fn init_logging(verbose: u8, log_dir: Option<&Path>) -> Result<Option<WorkerGuard>> {
    // Initialize logging based on verbosity level
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace", // -vvv or more
    };

    let console = fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    let (file, guard) = match log_dir {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, "exam-prep.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer()
                .with_target(false)
                .with_ansi(false)
                .with_writer(writer);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(EnvFilter::new(level))
        .with(console)
        .with(file)
        .try_init()?;

    Ok(guard)
}
