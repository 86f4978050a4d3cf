use crate::errors::{AppError, AppResult};
use crate::models::catalog::{self, DOSE_UNITS, FREQUENCIES, MEDICINE_TYPES, TIMINGS};
use crate::models::duration::DurationValue;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Stable identity of a medication row. Never changes once created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(Uuid);

impl EntryId {
    pub fn generate() -> Self {
        EntryId(Uuid::new_v4())
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Editable fields of a medication row, in form order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    MedicineType,
    MedicineName,
    Dose,
    Unit,
    Timing,
    Frequency,
    Duration,
}

impl Field {
    pub const ALL: [Field; 7] = [
        Field::MedicineType,
        Field::MedicineName,
        Field::Dose,
        Field::Unit,
        Field::Timing,
        Field::Frequency,
        Field::Duration,
    ];

    /// Fields that must be filled before submission.
    pub const REQUIRED: [Field; 6] = [
        Field::MedicineName,
        Field::Dose,
        Field::Unit,
        Field::Timing,
        Field::Frequency,
        Field::Duration,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Field::MedicineType => "Medicine type",
            Field::MedicineName => "Medicine name",
            Field::Dose => "Dose",
            Field::Unit => "Unit",
            Field::Timing => "Timing",
            Field::Frequency => "Frequency",
            Field::Duration => "Duration",
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            Field::MedicineType => "type",
            Field::MedicineName => "name",
            Field::Dose => "dose",
            Field::Unit => "unit",
            Field::Timing => "timing",
            Field::Frequency => "frequency",
            Field::Duration => "duration",
        }
    }

    /// Allowed values for select-type fields; `None` means free text.
    pub fn options(&self) -> Option<&'static [&'static str]> {
        match self {
            Field::MedicineType => Some(&MEDICINE_TYPES[..]),
            Field::Unit => Some(&DOSE_UNITS[..]),
            Field::Timing => Some(&TIMINGS[..]),
            Field::Frequency => Some(&FREQUENCIES[..]),
            Field::MedicineName | Field::Dose | Field::Duration => None,
        }
    }
}

impl FromStr for Field {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "type" | "medicinetype" | "medicine_type" => Ok(Field::MedicineType),
            "name" | "medicinename" | "medicine_name" => Ok(Field::MedicineName),
            "dose" => Ok(Field::Dose),
            "unit" => Ok(Field::Unit),
            "timing" => Ok(Field::Timing),
            "frequency" => Ok(Field::Frequency),
            "duration" => Ok(Field::Duration),
            other => Err(AppError::InvalidField(other.to_string())),
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// One field replacement, carrying a value of the field's own type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldUpdate {
    MedicineType(String),
    MedicineName(String),
    Dose(String),
    Unit(String),
    Timing(String),
    Frequency(String),
    Duration(Option<DurationValue>),
}

impl FieldUpdate {
    pub fn field(&self) -> Field {
        match self {
            FieldUpdate::MedicineType(_) => Field::MedicineType,
            FieldUpdate::MedicineName(_) => Field::MedicineName,
            FieldUpdate::Dose(_) => Field::Dose,
            FieldUpdate::Unit(_) => Field::Unit,
            FieldUpdate::Timing(_) => Field::Timing,
            FieldUpdate::Frequency(_) => Field::Frequency,
            FieldUpdate::Duration(_) => Field::Duration,
        }
    }

    /// Builds an update from user text. Select-type fields accept only
    /// catalog values (any case) or the empty string. Durations are set
    /// through the duration selector, not from text.
    pub fn from_text(field: Field, raw: &str) -> AppResult<Self> {
        let text = raw.trim();
        let value = match field.options() {
            Some(_) if text.is_empty() => String::new(),
            Some(options) => catalog::match_option(options, text)
                .ok_or_else(|| AppError::InvalidOption {
                    field: field.key().to_string(),
                    value: text.to_string(),
                })?
                .to_string(),
            None => raw.to_string(),
        };

        Ok(match field {
            Field::MedicineType => FieldUpdate::MedicineType(value),
            Field::MedicineName => FieldUpdate::MedicineName(value),
            Field::Dose => FieldUpdate::Dose(value),
            Field::Unit => FieldUpdate::Unit(value),
            Field::Timing => FieldUpdate::Timing(value),
            Field::Frequency => FieldUpdate::Frequency(value),
            Field::Duration if text.is_empty() => FieldUpdate::Duration(None),
            Field::Duration => {
                return Err(AppError::InvalidOption {
                    field: field.key().to_string(),
                    value: text.to_string(),
                });
            }
        })
    }

    /// The "cleared" value for a field.
    pub fn cleared(field: Field) -> Self {
        match field {
            Field::MedicineType => FieldUpdate::MedicineType(String::new()),
            Field::MedicineName => FieldUpdate::MedicineName(String::new()),
            Field::Dose => FieldUpdate::Dose(String::new()),
            Field::Unit => FieldUpdate::Unit(String::new()),
            Field::Timing => FieldUpdate::Timing(String::new()),
            Field::Frequency => FieldUpdate::Frequency(String::new()),
            Field::Duration => FieldUpdate::Duration(None),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MedicationEntry {
    pub id: EntryId,
    #[serde(default)]
    pub medicine_type: String,
    #[serde(default)]
    pub medicine_name: String,
    #[serde(default)]
    pub dose: String,
    #[serde(default)]
    pub unit: String,
    #[serde(default)]
    pub timing: String,
    #[serde(default)]
    pub frequency: String,
    #[serde(default)]
    pub duration: Option<DurationValue>,
}

impl MedicationEntry {
    /// A new row with a fresh id and every field empty.
    pub fn blank() -> Self {
        Self::with_id(EntryId::generate())
    }

    pub fn with_id(id: EntryId) -> Self {
        Self {
            id,
            medicine_type: String::new(),
            medicine_name: String::new(),
            dose: String::new(),
            unit: String::new(),
            timing: String::new(),
            frequency: String::new(),
            duration: None,
        }
    }

    pub fn apply(&mut self, update: FieldUpdate) {
        match update {
            FieldUpdate::MedicineType(v) => self.medicine_type = v,
            FieldUpdate::MedicineName(v) => self.medicine_name = v,
            FieldUpdate::Dose(v) => self.dose = v,
            FieldUpdate::Unit(v) => self.unit = v,
            FieldUpdate::Timing(v) => self.timing = v,
            FieldUpdate::Frequency(v) => self.frequency = v,
            FieldUpdate::Duration(v) => self.duration = v,
        }
    }

    /// Text value of a field; durations render as their label.
    pub fn text(&self, field: Field) -> String {
        match field {
            Field::MedicineType => self.medicine_type.clone(),
            Field::MedicineName => self.medicine_name.clone(),
            Field::Dose => self.dose.clone(),
            Field::Unit => self.unit.clone(),
            Field::Timing => self.timing.clone(),
            Field::Frequency => self.frequency.clone(),
            Field::Duration => self.duration.map(|d| d.label()).unwrap_or_default(),
        }
    }

    pub fn is_empty(&self, field: Field) -> bool {
        match field {
            Field::Duration => self.duration.is_none(),
            other => self.text(other).trim().is_empty(),
        }
    }
}
