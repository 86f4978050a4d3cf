//! Medication list container.
//!
//! Owns the ordered entries, one duration selector per entry, and the error
//! map produced by the last validation pass. Entries are append-only.

use crate::core::duration::{CustomDraft, DurationSelector, SelectorEvent, Transition};
use crate::core::validation::{self, FieldErrors, ValidationErrors};
use crate::models::medication::{EntryId, FieldUpdate, MedicationEntry};
use serde::Serialize;
use std::collections::HashMap;
use tracing::{debug, info};

/// What an external submit action reads from the form.
#[derive(Debug, Clone, Serialize)]
pub struct Submission {
    pub entries: Vec<MedicationEntry>,
    pub errors: Vec<EntryErrors>,
}

#[derive(Debug, Clone, Serialize)]
pub struct EntryErrors {
    pub id: EntryId,
    pub fields: FieldErrors,
}

#[derive(Debug, Clone)]
pub struct MedicationForm {
    entries: Vec<MedicationEntry>,
    selectors: HashMap<EntryId, DurationSelector>,
    expanded: Option<EntryId>,
    errors: ValidationErrors,
    seed: CustomDraft,
}

impl Default for MedicationForm {
    fn default() -> Self {
        Self::new()
    }
}

impl MedicationForm {
    /// A form holding one blank, expanded entry.
    pub fn new() -> Self {
        Self::with_seed(CustomDraft::default())
    }

    /// Like `new`, with the custom-duration draft every selector starts from.
    pub fn with_seed(seed: CustomDraft) -> Self {
        let mut form = Self::empty_with_seed(seed);
        form.add_entry();
        form
    }

    pub fn empty() -> Self {
        Self::empty_with_seed(CustomDraft::default())
    }

    fn empty_with_seed(seed: CustomDraft) -> Self {
        Self {
            entries: Vec::new(),
            selectors: HashMap::new(),
            expanded: None,
            errors: ValidationErrors::new(),
            seed,
        }
    }

    /// Appends a blank entry and expands it.
    pub fn add_entry(&mut self) -> EntryId {
        let entry = MedicationEntry::blank();
        let id = entry.id;
        self.entries.push(entry);
        self.selectors.insert(id, DurationSelector::new(self.seed));
        self.expanded = Some(id);
        debug!(%id, count = self.entries.len(), "medication entry added");
        id
    }

    /// Replaces one field. Unknown ids are ignored. Any error recorded for
    /// this field is dropped until the next validation pass.
    pub fn update_field(&mut self, id: EntryId, update: FieldUpdate) {
        let Some(entry) = self.entries.iter_mut().find(|e| e.id == id) else {
            return;
        };

        let field = update.field();
        entry.apply(update);

        if let Some(field_errors) = self.errors.get_mut(&id) {
            field_errors.remove(&field);
            if field_errors.is_empty() {
                self.errors.remove(&id);
            }
        }
    }

    /// Feeds an event to the entry's duration selector and stores any
    /// commit. Returns `None` for unknown ids.
    pub fn duration_event(&mut self, id: EntryId, event: SelectorEvent) -> Option<Transition> {
        let transition = self.selectors.get_mut(&id)?.handle(event);
        if let Some(value) = transition.committed {
            self.update_field(id, FieldUpdate::Duration(Some(value)));
        }
        Some(transition)
    }

    /// Dismisses every open selector, as a click on the page background does.
    pub fn dismiss_all(&mut self) {
        for selector in self.selectors.values_mut() {
            if selector.state().is_open() {
                selector.dismiss();
            }
        }
    }

    /// Submit-attempt pass: recomputes the error map for every entry.
    pub fn validate_all(&mut self) -> &ValidationErrors {
        self.errors = self
            .entries
            .iter()
            .map(|entry| (entry.id, validation::validate_entry(entry)))
            .filter(|(_, errs)| !errs.is_empty())
            .collect();

        info!(
            entries = self.entries.len(),
            invalid_fields = validation::error_count(&self.errors),
            "form validated"
        );
        &self.errors
    }

    pub fn entries(&self) -> &[MedicationEntry] {
        &self.entries
    }

    pub fn entry(&self, id: EntryId) -> Option<&MedicationEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Id of the entry at a 1-based position.
    pub fn id_at(&self, position: usize) -> Option<EntryId> {
        position
            .checked_sub(1)
            .and_then(|i| self.entries.get(i))
            .map(|e| e.id)
    }

    pub fn selector(&self, id: EntryId) -> Option<&DurationSelector> {
        self.selectors.get(&id)
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn errors_for(&self, id: EntryId) -> Option<&FieldErrors> {
        self.errors.get(&id)
    }

    pub fn expanded(&self) -> Option<EntryId> {
        self.expanded
    }

    pub fn set_expanded(&mut self, id: EntryId) {
        if self.entry(id).is_some() {
            self.expanded = Some(id);
        }
    }

    pub fn submission(&self) -> Submission {
        let errors = self
            .entries
            .iter()
            .filter_map(|e| {
                self.errors.get(&e.id).map(|fields| EntryErrors {
                    id: e.id,
                    fields: fields.clone(),
                })
            })
            .collect();

        Submission {
            entries: self.entries.clone(),
            errors,
        }
    }
}
