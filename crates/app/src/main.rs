use std::fmt;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use grammar_core::{BrowserSession, PageSize, PageSizeError};
use services::{LoadError, LoaderConfig, LocationError, RuleLoader, RuleLocation};
use tracing_subscriber::EnvFilter;
use ui::{App, UiApp, build_app_context};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidSource { raw: String, source: LocationError },
    InvalidPageSize { raw: String, source: PageSizeError },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidSource { raw, source } => {
                write!(f, "invalid --source value {raw:?}: {source}")
            }
            ArgsError::InvalidPageSize { raw, source } => {
                write!(f, "invalid --page-size value {raw:?}: {source}")
            }
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
    loader: RuleLoader,
    page_size: PageSize,
}

impl UiApp for DesktopApp {
    fn rule_loader(&self) -> RuleLoader {
        self.loader.clone()
    }

    fn page_size(&self) -> PageSize {
        self.page_size
    }
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- ui    [--source <path-or-url>] [--page-size <n>]");
    eprintln!("  cargo run -p app -- check [--source <path-or-url>] [--page-size <n>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --source {}", services::DEFAULT_RULES_FILE);
    eprintln!("  --page-size {}", PageSize::DEFAULT);
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  {}, {}, RUST_LOG", services::SOURCE_ENV, services::PAGE_SIZE_ENV);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Ui,
    Check,
}

impl Command {
    fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "ui" => Some(Self::Ui),
            "check" => Some(Self::Check),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Parsed {
    Run(LoaderConfig),
    Help,
}

/// Apply flags on top of `config`, which already carries env values.
fn parse_flags(
    args: &mut impl Iterator<Item = String>,
    mut config: LoaderConfig,
) -> Result<Parsed, ArgsError> {
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--source" => {
                let raw = require_value(args, "--source")?;
                config.location = RuleLocation::parse(&raw)
                    .map_err(|source| ArgsError::InvalidSource { raw, source })?;
            }
            "--page-size" => {
                let raw = require_value(args, "--page-size")?;
                config.page_size = raw
                    .parse()
                    .map_err(|source| ArgsError::InvalidPageSize { raw, source })?;
            }
            "--help" | "-h" => return Ok(Parsed::Help),
            _ => return Err(ArgsError::UnknownArg(arg)),
        }
    }
    Ok(Parsed::Run(config))
}

fn split_command(mut argv: Vec<String>) -> Result<(Command, Vec<String>), ArgsError> {
    // No subcommand, or flags only: launch the UI.
    match argv.first().map(String::as_str) {
        None => Ok((Command::Ui, argv)),
        Some(first) if first.starts_with('-') => Ok((Command::Ui, argv)),
        Some(first) => {
            let cmd = Command::from_arg(first)
                .ok_or_else(|| ArgsError::UnknownArg(first.to_string()))?;
            argv.remove(0);
            Ok((cmd, argv))
        }
    }
}

fn launch_ui(config: LoaderConfig) {
    tracing::info!(source = %config.location, page_size = %config.page_size, "launching ui");

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        loader: RuleLoader::from_location(config.location),
        page_size: config.page_size,
    });
    let context = build_app_context(&app);

    // Some window managers default to always-on-top; disable it explicitly.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Grammar Rules")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
}

/// What `check` prints after a successful load.
#[derive(Debug, Clone, PartialEq, Eq)]
struct CheckReport {
    source: RuleLocation,
    rules: usize,
    pages: usize,
    page_size: PageSize,
    quiz_pages: Vec<usize>,
}

impl fmt::Display for CheckReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "source:     {}", self.source)?;
        writeln!(f, "rules:      {}", self.rules)?;
        writeln!(f, "pages:      {} ({} per page)", self.pages, self.page_size)?;
        if self.quiz_pages.is_empty() {
            writeln!(f, "quiz pages: none")
        } else {
            let pages = self
                .quiz_pages
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>();
            writeln!(f, "quiz pages: {}", pages.join(", "))
        }
    }
}

async fn check(config: LoaderConfig) -> Result<CheckReport, LoadError> {
    let loader = RuleLoader::from_location(config.location.clone());
    let rules = loader.load().await?;
    let session = BrowserSession::new(rules, config.page_size);

    Ok(CheckReport {
        source: config.location,
        rules: session.rules().len(),
        pages: session.total_pages(),
        page_size: session.page_size(),
        quiz_pages: session.quiz_pages(),
    })
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let argv: Vec<String> = std::env::args().skip(1).collect();
    let parsed = split_command(argv).and_then(|(cmd, rest)| {
        parse_flags(&mut rest.into_iter(), LoaderConfig::from_env()).map(|parsed| (cmd, parsed))
    });

    let (cmd, config) = match parsed {
        Ok((_, Parsed::Help)) => {
            print_usage();
            return Ok(());
        }
        Ok((cmd, Parsed::Run(config))) => (cmd, config),
        Err(err) => {
            eprintln!("{err}");
            print_usage();
            return Err(err.into());
        }
    };

    match cmd {
        Command::Ui => {
            launch_ui(config);
            Ok(())
        }
        Command::Check => {
            let runtime = tokio::runtime::Builder::new_multi_thread()
                .enable_all()
                .build()?;
            let report = runtime.block_on(check(config))?;
            print!("{report}");
            Ok(())
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_tracing();
    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
