use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};

/// Write the default configuration file.
pub fn handle(cli: &Cli) -> AppResult<()> {
    let path = Config::resolve_path(cli.config.as_deref());

    if cli.test {
        info(format!("Test mode: configuration not written ({})", path.display()));
        return Ok(());
    }

    if path.exists() {
        warning(format!(
            "Configuration already exists: {} (left untouched)",
            path.display()
        ));
        return Ok(());
    }

    Config::default().save(&path)?;
    success(format!("Config file: {}", path.display()));
    Ok(())
}
