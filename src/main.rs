//! folio CLI
//!
//! Terminal portfolio. With no command, starts the interactive TUI.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use tracing::{debug, info};

use folio::config::{Config, ThemeMode};
use folio::contact::hire_me;
use folio::logging::{self, LogTarget};
use folio::profile::PROFILE;
use folio::report::{find_category, format_contact, format_experience, format_skills};
use folio::tui::{self, RunOptions};
use folio::tui::theme::ThemeVariant;
use folio::types::OutputFormat;

#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "Terminal portfolio with an interactive skills carousel")]
#[command(version)]
struct Cli {
    /// Config file (default: platform config dir)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Colour scheme, overriding the config file
    #[arg(long, value_enum, global = true)]
    theme: Option<ThemeArg>,

    /// Skill detail dismiss delay in milliseconds
    #[arg(long, global = true)]
    dismiss_delay_ms: Option<u64>,

    /// Horizontal drag distance (columns) that counts as a swipe
    #[arg(long, global = true)]
    swipe_threshold: Option<i32>,

    /// Write logs to this file (the TUI never logs to the terminal)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    /// Verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List skill categories and skills
    Skills {
        /// Output format
        #[arg(long, value_enum, default_value = "human")]
        format: OutputFormatArg,

        /// Only this category (case-insensitive)
        #[arg(long)]
        category: Option<String>,
    },

    /// Show the employment history
    Experience {
        /// Output format
        #[arg(long, value_enum, default_value = "human")]
        format: OutputFormatArg,
    },

    /// Show contact methods and their links
    Contact {
        /// Output format
        #[arg(long, value_enum, default_value = "human")]
        format: OutputFormatArg,
    },

    /// Print the pre-filled hiring email link
    HireMe {
        /// Open it in the default mail client instead of printing
        #[arg(long)]
        open: bool,
    },
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormatArg {
    Human,
    Json,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Human => OutputFormat::Human,
            OutputFormatArg::Json => OutputFormat::Json,
        }
    }
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum ThemeArg {
    Auto,
    Dark,
    Light,
}

impl From<ThemeArg> for ThemeMode {
    fn from(arg: ThemeArg) -> Self {
        match arg {
            ThemeArg::Auto => ThemeMode::Auto,
            ThemeArg::Dark => ThemeMode::Dark,
            ThemeArg::Light => ThemeMode::Light,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let target = match (&cli.command, &cli.log_file) {
        (_, Some(path)) => LogTarget::File(path),
        (None, None) => LogTarget::Off,
        (Some(_), None) => LogTarget::Stderr,
    };
    logging::init(target, cli.verbose)?;

    let config = resolve_config(&cli)?;

    match cli.command {
        None => cmd_tui(&config),
        Some(Commands::Skills { format, category }) => cmd_skills(format.into(), category),
        Some(Commands::Experience { format }) => {
            println!("{}", format_experience(PROFILE.experience, format.into())?);
            Ok(())
        }
        Some(Commands::Contact { format }) => {
            println!("{}", format_contact(&PROFILE, format.into())?);
            Ok(())
        }
        Some(Commands::HireMe { open: launch }) => cmd_hire_me(launch),
    }
}

// ============================================================================
// CONFIG RESOLUTION
// ============================================================================

/// Load the config file, then let flags override it.
fn resolve_config(cli: &Cli) -> Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    if let Some(theme) = cli.theme {
        config.theme.mode = theme.into();
    }
    if let Some(ms) = cli.dismiss_delay_ms {
        config.carousel.dismiss_delay_ms = ms;
    }
    if let Some(threshold) = cli.swipe_threshold {
        config.carousel.swipe_threshold = threshold;
    }

    config.validate().context("Invalid settings")?;
    debug!(?config, "resolved config");
    Ok(config)
}

// ============================================================================
// COMMANDS
// ============================================================================

fn cmd_tui(config: &Config) -> Result<()> {
    let options = RunOptions {
        tuning: config.carousel.tuning(),
        theme: ThemeVariant::resolve(config.theme.mode),
        role_interval: config.role_interval(),
    };
    tui::run(options).context("Terminal UI failed")
}

fn cmd_skills(format: OutputFormat, category: Option<String>) -> Result<()> {
    let categories = PROFILE.categories;
    let output = match category {
        Some(name) => match find_category(categories, &name) {
            Some(found) => format_skills(std::slice::from_ref(found), format)?,
            None => {
                let known: Vec<&str> = categories.iter().map(|c| c.name).collect();
                bail!("Unknown category '{}'. Known: {}", name, known.join(", "));
            }
        },
        None => format_skills(categories, format)?,
    };
    println!("{}", output);
    Ok(())
}

fn cmd_hire_me(launch: bool) -> Result<()> {
    let link = hire_me(&PROFILE);
    if launch {
        open::that(&link.url).with_context(|| format!("Failed to open {}", link.url))?;
        info!(url = %link.url, "opened hire-me link");
    } else {
        println!("{}", link.url);
    }
    Ok(())
}
