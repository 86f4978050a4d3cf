pub mod catalog;
pub mod duration;
pub mod medication;

pub use duration::{DurationUnit, DurationValue, PRESETS, Preset, RangeError};
pub use medication::{EntryId, Field, FieldUpdate, MedicationEntry};
