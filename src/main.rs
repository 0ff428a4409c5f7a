//! goto-folder CLI application entry point
//!
//! Collects the folders beneath the workspace roots, lets the user
//! fuzzy-pick one, and reveals it.
//!
//! # Usage
//!
//! ```bash
//! # Pick a folder interactively (default command) and cd into it
//! cd "$(goto-folder)"
//!
//! # Pick across several roots and open the result in the file manager
//! goto-folder -r ~/work -r ~/notes --reveal open
//!
//! # Non-interactive ranking
//! goto-folder search srcapp --limit 5
//!
//! # Every folder the picker would offer, as JSON
//! goto-folder list --json
//! ```
//!
//! # Configuration
//!
//! Defaults are read from the user's config directory
//! (`~/.config/goto-folder/config.toml` on Linux) and from `GOTO_FOLDER_*`
//! environment variables. Command-line flags override both.

use goto_folder::{
    GotoError,
    cli::{self, Cli, Commands, ConfigCommands, OPEN_FOLDER_COMMAND_ID},
    collector::{CollectOptions, LocalFs, WorkspaceRoot},
    config::GotoConfig,
    picker::{self, PickOutcome, PickerSession},
    ui::{OutputWriter, RatatuiFinder, RevealMode, StdoutWriter, revealer_for},
};
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::EnvFilter;

type Result<T> = std::result::Result<T, GotoError>;

/// Install the stderr log subscriber
///
/// `-v` forces debug output; otherwise `GOTO_FOLDER_LOG`, then `RUST_LOG`,
/// then `warn`.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env("GOTO_FOLDER_LOG")
            .or_else(|_| EnvFilter::try_from_default_env())
            .unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn handle_pick_command(
    roots: &[WorkspaceRoot],
    options: CollectOptions,
    reveal: RevealMode,
    output: &dyn OutputWriter,
) -> Result<ExitCode> {
    info!(command = OPEN_FOLDER_COMMAND_ID, "opening folder picker");

    let mut session = PickerSession::new(options);
    let revealer = revealer_for(reveal);
    let outcome = picker::run_picker(
        &mut session,
        &LocalFs,
        roots,
        &RatatuiFinder::new(),
        revealer.as_ref(),
    )?;

    match outcome {
        PickOutcome::Revealed(location) => {
            if reveal == RevealMode::Open {
                output.success(&format!("Opened {}", location.display()));
            }
        }
        PickOutcome::Dismissed => output.info("Dismissed"),
    }
    Ok(ExitCode::SUCCESS)
}

fn handle_config_command(
    mut config: GotoConfig,
    config_path: PathBuf,
    command: &ConfigCommands,
    output: &dyn OutputWriter,
) -> Result<ExitCode> {
    match command {
        ConfigCommands::Path => output.write(&config_path.display().to_string()),
        ConfigCommands::Show => {
            let rendered = toml::to_string_pretty(&config).map_err(|e| {
                ::config::ConfigError::Message(format!("Failed to serialize config: {e}"))
            })?;
            output.write(rendered.trim_end());
        }
        ConfigCommands::Get { key } => output.write(&config.get(key)?),
        ConfigCommands::Set { setting } => {
            let (key, value) = cli::parse_setting(setting).ok_or_else(|| {
                GotoError::InvalidInput("Invalid format. Use: goto-folder config set key=value".into())
            })?;
            config.set(key, value)?;
            config.save_to(&config_path)?;
            output.success(&format!("Set {key} = {}", config.get(key)?));
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn run(cli: &Cli) -> Result<ExitCode> {
    let config_path = match &cli.config {
        Some(path) => path.clone(),
        None => GotoConfig::config_path()?,
    };
    let config = GotoConfig::load_from(&config_path)?;
    let output = StdoutWriter::new(cli.is_quiet(&config));

    let command = cli.get_command();
    match &command {
        Commands::Config { command } => {
            handle_config_command(config, config_path, command, &output)
        }
        Commands::Completions { shell } => {
            cli::generate_completions(*shell, &mut io::stdout());
            Ok(ExitCode::SUCCESS)
        }
        Commands::Pick | Commands::List { .. } | Commands::Search { .. } => {
            let cwd = std::env::current_dir()?;
            let roots = cli::resolve_roots(cli.root_candidates(&config, &cwd), &output)?;
            let options = cli.collect_options(&config);

            match &command {
                Commands::List { json } => {
                    cli::list_folders(&LocalFs, &roots, &options, *json, &output)?;
                    Ok(ExitCode::SUCCESS)
                }
                Commands::Search { query, limit } => {
                    let matched =
                        cli::search_folders(&LocalFs, &roots, &options, query, *limit, &output);
                    Ok(if matched { ExitCode::SUCCESS } else { ExitCode::FAILURE })
                }
                _ => handle_pick_command(&roots, options, cli.reveal_mode(&config), &output),
            }
        }
    }
}

/// Main entry point for goto-folder
///
/// Every error that escapes a command is reported once, prefixed with the
/// feature name, and turns into exit status 1.
fn main() -> ExitCode {
    let cli = Cli::parse_args();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(code) => code,
        Err(e) => {
            StdoutWriter::new(false).error(&format!("Go to Folder: {e}"));
            ExitCode::FAILURE
        }
    }
}
