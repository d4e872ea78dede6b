use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use exam_core::model::ExamName;
use services::{Clock, ExamService};
use storage::repository::Storage;
use tracing_subscriber::EnvFilter;
use ui::{App, UiApp, build_app_context};

const DEFAULT_DATA_DIR: &str = "data";

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidDataDir { raw: String },
    InvalidExam { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidDataDir { raw } => write!(f, "invalid --data value: {raw:?}"),
            ArgsError::InvalidExam { raw } => write!(f, "invalid --exam value: {raw:?}"),
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
    data_dir: PathBuf,
    preselected_exam: Option<ExamName>,
    exam_service: Arc<ExamService>,
}

impl UiApp for DesktopApp {
    fn catalog_label(&self) -> String {
        self.data_dir.display().to_string()
    }

    fn preselected_exam(&self) -> Option<ExamName> {
        self.preselected_exam.clone()
    }

    fn exam_service(&self) -> Arc<ExamService> {
        Arc::clone(&self.exam_service)
    }
}

#[derive(Debug, PartialEq, Eq)]
struct Args {
    data_dir: PathBuf,
    exam: Option<ExamName>,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- ui   [--data <dir>] [--exam <name>]");
    eprintln!("  cargo run -p app -- list [--data <dir>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --data {DEFAULT_DATA_DIR}");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  CBT_DATA_DIR, CBT_EXAM, RUST_LOG");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Ui,
    List,
}

impl Command {
    fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "ui" => Some(Self::Ui),
            "list" => Some(Self::List),
            _ => None,
        }
    }
}

impl Args {
    fn from_env() -> Self {
        let data_dir = std::env::var("CBT_DATA_DIR")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .map_or_else(|| PathBuf::from(DEFAULT_DATA_DIR), PathBuf::from);
        let exam = std::env::var("CBT_EXAM")
            .ok()
            .and_then(|value| ExamName::new(value).ok());
        Self { data_dir, exam }
    }

    fn parse(mut self, args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--data" => {
                    let value = require_value(args, "--data")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidDataDir { raw: value });
                    }
                    self.data_dir = PathBuf::from(value);
                }
                "--exam" => {
                    let value = require_value(args, "--exam")?;
                    let exam = ExamName::new(value.clone())
                        .map_err(|_| ArgsError::InvalidExam { raw: value })?;
                    self.exam = Some(exam);
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        self.data_dir = absolute_data_dir(&self.data_dir);
        Ok(self)
    }
}

fn absolute_data_dir(path: &Path) -> PathBuf {
    if path.is_absolute() {
        return path.to_path_buf();
    }
    std::env::current_dir()
        .unwrap_or_else(|_| PathBuf::from("."))
        .join(path)
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv: Vec<String> = std::env::args().skip(1).collect();

    // No subcommand launches the UI.
    let cmd = match argv.first().map(String::as_str) {
        None => Command::Ui,
        Some("--help" | "-h") => {
            print_usage();
            return Ok(());
        }
        Some(first) if first.starts_with("--") => Command::Ui,
        Some(first) => Command::from_arg(first).ok_or_else(|| {
            eprintln!("unknown subcommand: {first}");
            print_usage();
            std::io::Error::new(std::io::ErrorKind::InvalidInput, "unknown subcommand")
        })?,
    };

    if !argv.is_empty() && !argv[0].starts_with("--") {
        argv.remove(0);
    }

    let mut iter = argv.into_iter();
    let parsed = Args::from_env().parse(&mut iter).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    init_tracing();
    tracing::debug!(data_dir = %parsed.data_dir.display(), ?cmd, "starting");

    let storage = Storage::filesystem(parsed.data_dir.clone());
    let exam_service = Arc::new(ExamService::new(Clock::system(), Arc::clone(&storage.exams)));

    match cmd {
        Command::Ui => {
            let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
                data_dir: parsed.data_dir,
                preselected_exam: parsed.exam,
                exam_service,
            });
            let context = build_app_context(&app);

            // Some dev setups default to an always-on-top window.
            let desktop_cfg = DesktopConfig::new().with_window(
                WindowBuilder::new()
                    .with_title("CBT")
                    .with_always_on_top(false),
            );

            LaunchBuilder::desktop()
                .with_cfg(desktop_cfg)
                .with_context(context)
                .launch(App);
            Ok(())
        }
        Command::List => {
            let exams = exam_service.list_exams().await;
            if exams.is_empty() {
                eprintln!("no exams found in {}", parsed.data_dir.display());
            }
            for name in exams {
                println!("{name}");
            }
            Ok(())
        }
    }
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("{err}");
        std::process::exit(2);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Args {
        Args {
            data_dir: PathBuf::from("/srv/exams"),
            exam: None,
        }
    }

    fn argv(raw: &[&str]) -> impl Iterator<Item = String> {
        raw.iter()
            .map(|s| (*s).to_string())
            .collect::<Vec<_>>()
            .into_iter()
    }

    #[test]
    fn parses_data_dir_and_exam() {
        let parsed = base()
            .parse(&mut argv(&["--data", "/tmp/cbt", "--exam", "2024-1"]))
            .unwrap();
        assert_eq!(parsed.data_dir, PathBuf::from("/tmp/cbt"));
        assert_eq!(parsed.exam, Some(ExamName::new("2024-1").unwrap()));
    }

    #[test]
    fn relative_data_dir_is_made_absolute() {
        let parsed = base().parse(&mut argv(&["--data", "exams"])).unwrap();
        assert!(parsed.data_dir.is_absolute());
        assert!(parsed.data_dir.ends_with("exams"));
    }

    #[test]
    fn rejects_missing_and_unknown_values() {
        assert!(matches!(
            base().parse(&mut argv(&["--data"])),
            Err(ArgsError::MissingValue { flag: "--data" })
        ));
        assert!(matches!(
            base().parse(&mut argv(&["--exam", "  "])),
            Err(ArgsError::InvalidExam { .. })
        ));
        assert!(matches!(
            base().parse(&mut argv(&["--verbose"])),
            Err(ArgsError::UnknownArg(_))
        ));
    }

    #[test]
    fn subcommands_are_recognised() {
        assert_eq!(Command::from_arg("ui"), Some(Command::Ui));
        assert_eq!(Command::from_arg("list"), Some(Command::List));
        assert_eq!(Command::from_arg("seed"), None);
    }
}
