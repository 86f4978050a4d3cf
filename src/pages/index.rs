//! "Prescription Form" page: a heading around one `MedicationForm`.

use crate::core::duration::CustomDraft;
use crate::core::form::MedicationForm;
use crate::core::script::{ScriptCommand, ScriptTarget};
use crate::errors::{AppError, AppResult};
use crate::models::medication::{EntryId, FieldUpdate};
use crate::ui::layout::LayoutConfig;
use crate::ui::render;
use crate::utils::formatting::bold;
use tracing::debug;

pub const TITLE: &str = "Prescription Form";
pub const SUBTITLE: &str = "Add medications and set dosage instructions";

pub struct IndexPage {
    form: MedicationForm,
    width: u16,
    layout: LayoutConfig,
}

impl IndexPage {
    pub fn new(seed: CustomDraft, width: u16, layout: LayoutConfig) -> Self {
        Self {
            form: MedicationForm::with_seed(seed),
            width,
            layout,
        }
    }

    pub fn form(&self) -> &MedicationForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut MedicationForm {
        &mut self.form
    }

    pub fn render(&self) -> Vec<String> {
        let mut lines = vec![bold(TITLE), SUBTITLE.to_string(), String::new()];
        lines.extend(render::render_form(&self.form, self.width, &self.layout));
        lines
    }

    /// Positional reference, or the expanded entry when none is given.
    fn resolve(&self, entry: Option<usize>) -> AppResult<EntryId> {
        match entry {
            Some(n) => self.form.id_at(n).ok_or(AppError::UnknownEntry(n)),
            None => self.form.expanded().ok_or(AppError::UnknownEntry(0)),
        }
    }
}

impl ScriptTarget for IndexPage {
    fn apply(&mut self, command: ScriptCommand) -> AppResult<()> {
        match command {
            ScriptCommand::Add => {
                self.form.dismiss_all();
                self.form.add_entry();
            }
            ScriptCommand::Set { entry, field, value } => {
                let id = self.resolve(entry)?;
                let update = FieldUpdate::from_text(field, &value)?;
                self.form.update_field(id, update);
            }
            ScriptCommand::Clear { entry, field } => {
                let id = self.resolve(entry)?;
                self.form.update_field(id, FieldUpdate::cleared(field));
            }
            ScriptCommand::Duration { entry, event } => {
                let id = self.resolve(entry)?;
                // the form layout does not depend on the selector mode
                if let Some(t) = self.form.duration_event(id, event) {
                    debug!(
                        entry = %id,
                        committed = ?t.committed.map(|d| d.label()),
                        mode_change = ?t.mode_change,
                        "duration event"
                    );
                }
            }
            ScriptCommand::Expand(n) => {
                let id = self.resolve(Some(n))?;
                self.form.set_expanded(id);
            }
            ScriptCommand::Validate | ScriptCommand::Submit => {
                self.form.validate_all();
            }
            ScriptCommand::Show => {
                for line in self.render() {
                    println!("{line}");
                }
            }
        }
        Ok(())
    }
}
