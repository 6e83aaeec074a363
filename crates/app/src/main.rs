use std::fmt;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use tradequest_core::Catalog;
use tradequest_core::catalog::lock_order_warnings;
use tradequest_core::model::{LandingTab, ParseTabError};
use ui::{App, LandingApp, build_app_context};

mod logging;

const DEFAULT_TITLE: &str = "TradeQuest";

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    UnknownCommand(String),
    InvalidTab(ParseTabError),
    InvalidTitle { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::UnknownCommand(cmd) => write!(f, "unknown subcommand: {cmd}"),
            ArgsError::InvalidTab(err) => write!(f, "invalid --tab value: {err}"),
            ArgsError::InvalidTitle { raw } => write!(f, "invalid --title value: {raw:?}"),
        }
    }
}

impl std::error::Error for ArgsError {}

impl From<ParseTabError> for ArgsError {
    fn from(err: ParseTabError) -> Self {
        ArgsError::InvalidTab(err)
    }
}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- ui      [--tab <stages|badges|progress>] [--title <text>]");
    eprintln!("  cargo run -p app -- catalog # print the page content as JSON");
    eprintln!();
    eprintln!("Defaults for ui:");
    eprintln!("  --tab stages");
    eprintln!("  --title {DEFAULT_TITLE}");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  TRADEQUEST_TAB, TRADEQUEST_TITLE, {}", logging::LOG_ENV);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Ui,
    Catalog,
    Help,
}

impl Command {
    fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "ui" => Some(Self::Ui),
            "catalog" => Some(Self::Catalog),
            "help" => Some(Self::Help),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct UiArgs {
    tab: LandingTab,
    title: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Invocation {
    Ui(UiArgs),
    Catalog,
    Help,
}

impl UiArgs {
    /// Env values first, then flags on top.
    fn parse(
        args: &mut impl Iterator<Item = String>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Option<Self>, ArgsError> {
        let mut tab = match env("TRADEQUEST_TAB") {
            Some(raw) => raw.trim().parse::<LandingTab>()?,
            None => LandingTab::default(),
        };
        let mut title = env("TRADEQUEST_TITLE")
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_TITLE.to_string());

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--tab" => {
                    let value = require_value(args, "--tab")?;
                    tab = value.parse()?;
                }
                "--title" => {
                    let value = require_value(args, "--title")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidTitle { raw: value });
                    }
                    title = value;
                }
                "--help" | "-h" => return Ok(None),
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Some(Self { tab, title }))
    }
}

fn parse_invocation(
    argv: Vec<String>,
    env: impl Fn(&str) -> Option<String>,
) -> Result<Invocation, ArgsError> {
    let mut iter = argv.into_iter().peekable();
    let first = iter.peek().cloned();

    // Default behavior: launching UI when no subcommand is provided.
    let cmd = match first.as_deref() {
        None => Command::Ui,
        Some("--help" | "-h") => Command::Help,
        Some(first) if first.starts_with("--") => Command::Ui,
        Some(first) => {
            let cmd = Command::from_arg(first)
                .ok_or_else(|| ArgsError::UnknownCommand(first.to_string()))?;
            iter.next();
            cmd
        }
    };

    match cmd {
        Command::Help => Ok(Invocation::Help),
        Command::Catalog => match iter.next() {
            None => Ok(Invocation::Catalog),
            Some(arg) => Err(ArgsError::UnknownArg(arg)),
        },
        Command::Ui => Ok(match UiArgs::parse(&mut iter, env)? {
            Some(args) => Invocation::Ui(args),
            None => Invocation::Help,
        }),
    }
}

struct DesktopLanding {
    initial_tab: LandingTab,
}

impl LandingApp for DesktopLanding {
    fn initial_tab(&self) -> LandingTab {
        self.initial_tab
    }
}

fn launch_ui(args: UiArgs) {
    let catalog = Catalog::builtin();
    for warning in lock_order_warnings(catalog.lessons) {
        tracing::warn!(%warning, "lesson flags break lock order");
    }

    tracing::info!(tab = %args.tab, title = %args.title, "launching landing page");

    let app: Arc<dyn LandingApp> = Arc::new(DesktopLanding {
        initial_tab: args.tab,
    });
    let context = build_app_context(&app);

    // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title(args.title)
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let argv: Vec<String> = std::env::args().skip(1).collect();
    let invocation = parse_invocation(argv, |key| std::env::var(key).ok()).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    match invocation {
        Invocation::Help => {
            print_usage();
            Ok(())
        }
        Invocation::Catalog => {
            let json = serde_json::to_string_pretty(&Catalog::builtin())?;
            println!("{json}");
            Ok(())
        }
        Invocation::Ui(args) => {
            launch_ui(args);
            Ok(())
        }
    }
}

fn main() {
    logging::init();
    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        tracing::error!(%err, "exiting");
        std::process::exit(2);
    }
}
