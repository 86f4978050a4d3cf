use crate::cli::commands::{print_lines, read_script};
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::script::run_script;
use crate::errors::AppResult;
use crate::pages::new_prescription::NewPrescriptionPage;
use crate::ui::messages::info;

/// Run the dashboard demo page.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Prescribe { script } = &cli.command {
        let width = cli.width.unwrap_or(cfg.terminal_width);
        let mut page = NewPrescriptionPage::new(cfg.custom_seed(), width, cfg.layout());

        let source = read_script(script.as_deref())?;
        run_script(&mut page, &source)?;

        print_lines(&page.render());
        info(format!("{} medication(s) logged", page.submitted().len()));
    }
    Ok(())
}
