//! Top-level runner: builds commands from arguments and executes them

use std::io;
use std::path::Path;

use clap::CommandFactory;
use tokio_util::sync::CancellationToken;
use tracing::{debug, instrument};

use crate::application::{ApplicationError, Command, ListWorlds, ShowWorld, WorldCommand};
use crate::cli::args::{Cli, Commands, ConfigCommands, ConnectionArgs};
use crate::cli::output;
use crate::cli::{CliError, CliResult};
use crate::config::{global_config_path, Settings};
use crate::domain::{OutputMode, WorldSelector};
use crate::infrastructure::di::ServiceContainer;
use crate::infrastructure::InfraError;

pub async fn execute_command(cli: Cli) -> CliResult<()> {
    let config_file = cli.config.as_deref();
    match cli.command {
        Commands::ShowWorld(args) => {
            let selector = WorldSelector::from_parts(args.id, args.name)
                .map_err(|e| CliError::InvalidArgs(e.to_string()))?;
            let mode = OutputMode::from_verbose(args.connection.verbose);
            let settings = load_settings(config_file, &args.connection)?;
            run_world_command(WorldCommand::Show(ShowWorld::new(selector, mode)), settings).await
        }
        Commands::ListWorlds(args) => {
            let mode = OutputMode::from_verbose(args.connection.verbose);
            let settings = load_settings(config_file, &args.connection)?;
            run_world_command(WorldCommand::List(ListWorlds::new(mode)), settings).await
        }
        Commands::Config { command } => config_command(command, config_file),
        Commands::Completion { shell } => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            clap_complete::generate(shell, &mut cmd, name, &mut io::stdout());
            Ok(())
        }
    }
}

fn load_settings(config_file: Option<&Path>, connection: &ConnectionArgs) -> CliResult<Settings> {
    let settings = Settings::load(config_file)?
        .with_overrides(connection.server.clone(), connection.port);
    debug!("settings: {:?}", settings);
    Ok(settings)
}

/// Execute a world command with Ctrl-C wired to cancellation.
#[instrument(level = "debug", skip(settings))]
async fn run_world_command(command: WorldCommand, settings: Settings) -> CliResult<()> {
    let services = ServiceContainer::new(settings)?;
    let cancel = CancellationToken::new();

    let watcher = {
        let cancel = cancel.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                debug!("interrupt received, cancelling");
                cancel.cancel();
            }
        })
    };

    let result = command.execute(&services, &cancel).await;
    watcher.abort();
    result.map_err(CliError::from)
}

fn config_command(command: ConfigCommands, config_file: Option<&Path>) -> CliResult<()> {
    match command {
        ConfigCommands::Show => {
            let settings = Settings::load(config_file)?;
            output::info(&settings.to_toml()?);
            Ok(())
        }
        ConfigCommands::Path => {
            match global_config_path() {
                Some(path) => {
                    let state = if path.exists() { "exists" } else { "not created" };
                    output::action("global", &path.display());
                    output::detail(&state);
                }
                None => output::info("global: no config directory available"),
            }
            if let Some(path) = config_file {
                output::action("file", &path.display());
            }
            Ok(())
        }
        ConfigCommands::Init { force } => {
            let path = global_config_path().ok_or_else(|| ApplicationError::Config {
                message: "no config directory available".into(),
            })?;
            if path.exists() && !force {
                return Err(CliError::Usage(format!(
                    "config already exists: {} (use --force to overwrite)",
                    path.display()
                )));
            }
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    ApplicationError::from(InfraError::io(
                        format!("create {}", parent.display()),
                        e,
                    ))
                })?;
            }
            std::fs::write(&path, Settings::template()).map_err(|e| {
                ApplicationError::from(InfraError::io(format!("write {}", path.display()), e))
            })?;
            output::success(&format!("created {}", path.display()));
            Ok(())
        }
    }
}
