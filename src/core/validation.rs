//! Presence checks run on a submit attempt.

use crate::models::medication::{EntryId, Field, MedicationEntry};
use std::collections::{BTreeMap, HashMap};

pub type FieldErrors = BTreeMap<Field, String>;
pub type ValidationErrors = HashMap<EntryId, FieldErrors>;

/// Returns one "<Label> is required" message per empty mandatory field.
/// The medicine type is optional.
pub fn validate_entry(entry: &MedicationEntry) -> FieldErrors {
    Field::REQUIRED
        .iter()
        .filter(|field| entry.is_empty(**field))
        .map(|field| (*field, format!("{} is required", field.label())))
        .collect()
}

/// Total number of field messages across all entries.
pub fn error_count(errors: &ValidationErrors) -> usize {
    errors.values().map(BTreeMap::len).sum()
}
