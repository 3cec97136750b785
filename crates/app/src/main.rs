use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::QuestionBank;
use tracing::info;
use tracing_subscriber::EnvFilter;
use ui::{App, UiApp, build_app_context};

#[derive(Debug, PartialEq, Eq)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidQuestionsPath { raw: String },
    InvalidTitle { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidQuestionsPath { raw } => {
                write!(f, "invalid --questions value: {raw:?}")
            }
            ArgsError::InvalidTitle { raw } => write!(f, "invalid --title value: {raw:?}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

struct DesktopApp {
    title: String,
    question_bank: Arc<QuestionBank>,
}

impl UiApp for DesktopApp {
    fn title(&self) -> String {
        self.title.clone()
    }

    fn question_bank(&self) -> Arc<QuestionBank> {
        Arc::clone(&self.question_bank)
    }
}

#[derive(Debug, Default, PartialEq, Eq)]
struct Args {
    questions: Option<PathBuf>,
    title: Option<String>,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--questions <path.json>] [--title <text>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  built-in arithmetic questions, title from the question bank");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  QUIZ_QUESTIONS, QUIZ_TITLE, QUIZ_LOG (falls back to RUST_LOG)");
}

impl Args {
    fn parse(
        args: &mut impl Iterator<Item = String>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ArgsError> {
        let mut questions = env("QUIZ_QUESTIONS")
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from);
        let mut title = env("QUIZ_TITLE")
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty());

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--questions" => {
                    let value = require_value(args, "--questions")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidQuestionsPath { raw: value });
                    }
                    questions = Some(PathBuf::from(value));
                }
                "--title" => {
                    let value = require_value(args, "--title")?;
                    let trimmed = value.trim();
                    if trimmed.is_empty() {
                        return Err(ArgsError::InvalidTitle { raw: value });
                    }
                    title = Some(trimmed.to_string());
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self { questions, title })
    }
}

fn init_logging() {
    let filter = std::env::var("QUIZ_LOG")
        .ok()
        .and_then(|raw| EnvFilter::try_new(raw).ok())
        .or_else(|| EnvFilter::try_from_default_env().ok())
        .unwrap_or_else(|| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn load_bank(args: Args) -> Result<QuestionBank, Box<dyn std::error::Error>> {
    let bank = match args.questions {
        Some(path) => QuestionBank::from_path(&path)?,
        None => {
            info!("using built-in questions");
            QuestionBank::builtin()?
        }
    };

    Ok(match args.title {
        Some(title) => bank.with_title(title),
        None => bank,
    })
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    let parsed = Args::parse(&mut argv, |key| std::env::var(key).ok())?;

    let bank = load_bank(parsed)?;
    let title = bank.title().to_string();
    info!(title = %title, questions = bank.len(), "starting quiz");

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        title: title.clone(),
        question_bank: Arc::new(bank),
    });
    let context = build_app_context(&app);

    // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title(title)
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

/// The one line printed for a failed run, and whether usage help should follow it.
fn failure_report(err: &(dyn std::error::Error + 'static)) -> (String, bool) {
    (format!("error: {err}"), err.is::<ArgsError>())
}

fn main() {
    init_logging();
    if let Err(err) = run() {
        let (line, show_usage) = failure_report(err.as_ref());
        eprintln!("{line}");
        if show_usage {
            print_usage();
        }
        std::process::exit(2);
    }
}
