use crate::cli::commands::{print_lines, read_script};
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::script::run_script;
use crate::core::validation::error_count;
use crate::errors::{AppError, AppResult};
use crate::export::export_submission;
use crate::pages::index::IndexPage;
use crate::ui::messages::{field_error, success, warning};
use std::path::Path;

/// Run the medication form: apply the script, attempt a submit, report.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Form {
        script,
        export,
        format,
        force,
    } = &cli.command
    {
        let width = cli.width.unwrap_or(cfg.terminal_width);
        let mut page = IndexPage::new(cfg.custom_seed(), width, cfg.layout());

        let source = read_script(script.as_deref())?;
        let applied = run_script(&mut page, &source)?;
        tracing::debug!(applied, "script finished");

        // closing the page is a click outside every open selector
        page.form_mut().dismiss_all();
        let errors = page.form_mut().validate_all().clone();
        print_lines(&page.render());

        let submission = page.form().submission();
        if let Some(path) = export {
            export_submission(&submission, Path::new(path), *format, *force)?;
        }

        let count = error_count(&errors);
        if count > 0 {
            for (i, entry) in page.form().entries().iter().enumerate() {
                if let Some(fields) = errors.get(&entry.id) {
                    warning(format!("Medication #{}", i + 1));
                    for (field, msg) in fields {
                        field_error(field.key(), msg);
                    }
                }
            }
            return Err(AppError::ValidationFailed(count));
        }

        success(format!(
            "{} medication(s) ready to submit",
            page.form().entries().len()
        ));
    }
    Ok(())
}
