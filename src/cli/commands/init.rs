use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// Handle the `init` command: write a default configuration file.
pub fn handle(cli: &Cli) -> AppResult<()> {
    if let Commands::Init { force } = &cli.command {
        let path = cli.config_path();

        if Config::init_at(&path, *force)? {
            success(format!("Config file: {}", path.display()));
            tracing::debug!(path = %path.display(), "default configuration written");
        } else {
            info(format!(
                "Config file already exists: {} (use --force to overwrite)",
                path.display()
            ));
        }
    }
    Ok(())
}
