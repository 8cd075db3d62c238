use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use formula_core::model::{Catalog, DeckSettings, DeckSettingsError};
use services::{CatalogSource, Clock};
use tracing_subscriber::EnvFilter;
use ui::{App, UiApp, build_app_context};

const ENV_CATALOG: &str = "FORMULA_CARDS_CATALOG";
const ENV_PASS_THRESHOLD: &str = "FORMULA_CARDS_PASS_THRESHOLD";
const ENV_TOAST_MS: &str = "FORMULA_CARDS_TOAST_MS";

#[derive(Debug, PartialEq, Eq)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidNumber { flag: &'static str, raw: String },
    EmptyCatalogPath,
    Settings(DeckSettingsError),
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidNumber { flag, raw } => write!(f, "invalid {flag} value: {raw}"),
            ArgsError::EmptyCatalogPath => write!(f, "--catalog path must not be empty"),
            ArgsError::Settings(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for ArgsError {}

impl From<DeckSettingsError> for ArgsError {
    fn from(err: DeckSettingsError) -> Self {
        Self::Settings(err)
    }
}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

fn parse_number<T: std::str::FromStr>(flag: &'static str, raw: &str) -> Result<T, ArgsError> {
    raw.trim().parse().map_err(|_| ArgsError::InvalidNumber {
        flag,
        raw: raw.to_string(),
    })
}

struct DesktopApp {
    catalog: Catalog,
    deck_settings: DeckSettings,
    clock: Clock,
}

impl UiApp for DesktopApp {
    fn catalog(&self) -> Catalog {
        self.catalog.clone()
    }

    fn deck_settings(&self) -> DeckSettings {
        self.deck_settings
    }

    fn clock(&self) -> Clock {
        self.clock
    }
}

#[derive(Debug, PartialEq, Eq)]
struct Args {
    catalog: CatalogSource,
    settings: DeckSettings,
    show_help: bool,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--catalog <path>] [--pass-threshold <0-100>] [--toast-ms <ms>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --catalog         built-in 8th grade algebra formulas");
    eprintln!("  --pass-threshold  {}", DeckSettings::DEFAULT_PASS_THRESHOLD);
    eprintln!("  --toast-ms        {}", DeckSettings::DEFAULT_TOAST_DURATION_MS);
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  {ENV_CATALOG}, {ENV_PASS_THRESHOLD}, {ENV_TOAST_MS}, RUST_LOG");
}

impl Args {
    /// Flags win over environment values; `env` is injected so tests stay hermetic.
    fn parse(
        args: &mut impl Iterator<Item = String>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ArgsError> {
        let mut catalog = env(ENV_CATALOG)
            .filter(|value| !value.trim().is_empty())
            .map_or_else(CatalogSource::default, CatalogSource::file);
        let mut pass_threshold = match env(ENV_PASS_THRESHOLD) {
            Some(raw) => parse_number::<u32>(ENV_PASS_THRESHOLD, &raw)?,
            None => u32::from(DeckSettings::DEFAULT_PASS_THRESHOLD),
        };
        let mut toast_ms = match env(ENV_TOAST_MS) {
            Some(raw) => parse_number::<u64>(ENV_TOAST_MS, &raw)?,
            None => DeckSettings::DEFAULT_TOAST_DURATION_MS,
        };
        let mut show_help = false;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--catalog" => {
                    let value = require_value(args, "--catalog")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::EmptyCatalogPath);
                    }
                    catalog = CatalogSource::file(PathBuf::from(value));
                }
                "--pass-threshold" => {
                    let value = require_value(args, "--pass-threshold")?;
                    pass_threshold = parse_number("--pass-threshold", &value)?;
                }
                "--toast-ms" => {
                    let value = require_value(args, "--toast-ms")?;
                    toast_ms = parse_number("--toast-ms", &value)?;
                }
                "--help" | "-h" => show_help = true,
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        let settings = DeckSettings::new(pass_threshold, toast_ms)?;
        Ok(Self {
            catalog,
            settings,
            show_help,
        })
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    let parsed = Args::parse(&mut argv, |key| std::env::var(key).ok()).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;
    if parsed.show_help {
        print_usage();
        return Ok(());
    }

    init_tracing();

    let catalog = parsed.catalog.load()?;
    tracing::info!(
        formulas = catalog.len(),
        pass_threshold = parsed.settings.pass_threshold_percent(),
        toast_ms = parsed.settings.toast_duration_ms(),
        "starting flash cards"
    );

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        catalog,
        deck_settings: parsed.settings,
        clock: Clock::system(),
    });
    let context = build_app_context(&app);

    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Math Flash Cards")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

#[tokio::main]
async fn main() {
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
