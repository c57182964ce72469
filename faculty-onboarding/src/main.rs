use anyhow::{Context, Result};
use clap::Parser;
use std::fs::OpenOptions;

use faculty_onboarding::cli::commands::{steps, validate};
use faculty_onboarding::cli::{Cli, Commands};
use faculty_onboarding::config::{self, Config};
use faculty_onboarding::form::LogSubmitter;
use faculty_onboarding::tui::{self, ViewOptions};
use faculty_onboarding::wizard::Wizard;

/// Where log output goes
enum LogTarget {
    Stderr,
    /// The TUI owns the terminal, so log to a file
    File,
}

fn init_logging(config: &Config, target: LogTarget) -> Result<()> {
    let env = env_logger::Env::default().default_filter_or(config.log_level.as_str());
    let mut builder = env_logger::Builder::from_env(env);

    if let LogTarget::File = target {
        let path = config::log_file_path()?;
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .with_context(|| format!("Failed to open log file: {}", path.display()))?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }

    builder.init();
    Ok(())
}

fn run_wizard(config: &Config) -> Result<()> {
    let mut wizard = Wizard::new(LogSubmitter::new(config.submission.pretty_json));
    let options = ViewOptions {
        show_step_ids: config.ui.show_step_ids,
    };
    log::info!("Starting onboarding wizard");
    tui::run(&mut wizard, options)
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    if cli.no_color {
        colored::control::set_override(false);
    }

    let config = Config::load(cli.config.as_deref())?;

    match cli.command {
        None | Some(Commands::Run) => {
            init_logging(&config, LogTarget::File)?;
            run_wizard(&config)
        }
        Some(Commands::Validate(args)) => {
            init_logging(&config, LogTarget::Stderr)?;
            if !validate::handle_validate_command(&args)? {
                std::process::exit(1);
            }
            Ok(())
        }
        Some(Commands::Steps) => {
            init_logging(&config, LogTarget::Stderr)?;
            steps::handle_steps_command();
            Ok(())
        }
    }
}
