use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{error, success, warning};
use std::path::Path;
use std::process::Command;

/// Handle the `config` subcommand
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
        edit_config,
        editor,
    } = &cli.command
    {
        let path = Config::resolve_path(cli.config.as_deref());

        if *print_config {
            println!("📄 Current configuration ({}):\n", path.display());
            println!("{}", serde_yaml::to_string(cfg)?);
        }

        if *check {
            check_file(&path)?;
        }

        if *edit_config {
            edit_file(&path, editor.as_deref())?;
        }
    }

    Ok(())
}

fn check_file(path: &Path) -> AppResult<()> {
    if !path.exists() {
        warning(format!(
            "No configuration file at {}; defaults are in use",
            path.display()
        ));
        return Ok(());
    }

    let missing = Config::missing_keys(path)?;
    if missing.is_empty() {
        success("Configuration is complete");
    } else {
        warning(format!("Missing fields (defaults used): {}", missing.join(", ")));
    }
    Ok(())
}

fn edit_file(path: &Path, requested: Option<&str>) -> AppResult<()> {
    let default_editor = std::env::var("EDITOR")
        .or_else(|_| std::env::var("VISUAL"))
        .unwrap_or_else(|_| {
            if cfg!(target_os = "windows") {
                "notepad".to_string()
            } else {
                "nano".to_string()
            }
        });
    let editor = requested.map(str::to_string).unwrap_or_else(|| default_editor.clone());

    let edited = |ed: &str| {
        Command::new(ed)
            .arg(path)
            .status()
            .map(|s| s.success())
            .unwrap_or(false)
    };

    if edited(&editor) {
        success(format!("Configuration file edited successfully using '{editor}'"));
        return Ok(());
    }

    warning(format!(
        "Editor '{editor}' not available, falling back to '{default_editor}'"
    ));
    if edited(&default_editor) {
        success(format!(
            "Configuration file edited successfully using fallback '{default_editor}'"
        ));
        Ok(())
    } else {
        error(format!("Failed to edit configuration file using '{default_editor}'"));
        Err(AppError::Config(format!("no usable editor for {}", path.display())))
    }
}
