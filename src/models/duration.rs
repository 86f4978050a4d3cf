use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Smallest value accepted for a custom duration.
pub const MIN_VALUE: i64 = 1;
/// Largest value accepted for a custom duration.
pub const MAX_VALUE: i64 = 999;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DurationUnit {
    Days,
    Weeks,
    Months,
}

impl DurationUnit {
    pub const ALL: [DurationUnit; 3] = [DurationUnit::Days, DurationUnit::Weeks, DurationUnit::Months];

    pub fn as_str(&self) -> &'static str {
        match self {
            DurationUnit::Days => "days",
            DurationUnit::Weeks => "weeks",
            DurationUnit::Months => "months",
        }
    }

    /// Capitalized plural label, as shown in the unit picker.
    pub fn label(&self) -> &'static str {
        match self {
            DurationUnit::Days => "Days",
            DurationUnit::Weeks => "Weeks",
            DurationUnit::Months => "Months",
        }
    }

    pub fn singular_label(&self) -> &'static str {
        match self {
            DurationUnit::Days => "Day",
            DurationUnit::Weeks => "Week",
            DurationUnit::Months => "Month",
        }
    }
}

impl FromStr for DurationUnit {
    type Err = crate::errors::AppError;

    /// Accepts singular, plural and one-letter forms in any case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "d" | "day" | "days" => Ok(DurationUnit::Days),
            "w" | "week" | "weeks" => Ok(DurationUnit::Weeks),
            "m" | "month" | "months" => Ok(DurationUnit::Months),
            other => Err(crate::errors::AppError::InvalidUnit(other.to_string())),
        }
    }
}

impl fmt::Display for DurationUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a custom duration was refused.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeError {
    #[error("Value must be at least 1")]
    BelowMinimum,
    #[error("Value must be less than 1000")]
    AboveMaximum,
}

/// A committed duration. Always within `MIN_VALUE..=MAX_VALUE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawDuration")]
pub struct DurationValue {
    value: u16,
    unit: DurationUnit,
}

impl DurationValue {
    pub fn new(value: i64, unit: DurationUnit) -> Result<Self, RangeError> {
        if value < MIN_VALUE {
            return Err(RangeError::BelowMinimum);
        }
        if value > MAX_VALUE {
            return Err(RangeError::AboveMaximum);
        }
        Ok(Self {
            value: value as u16,
            unit,
        })
    }

    pub fn value(&self) -> u16 {
        self.value
    }

    pub fn unit(&self) -> DurationUnit {
        self.unit
    }

    /// "1 Week", "2 Weeks", ...
    pub fn label(&self) -> String {
        let unit = if self.value == 1 {
            self.unit.singular_label()
        } else {
            self.unit.label()
        };
        format!("{} {}", self.value, unit)
    }
}

impl fmt::Display for DurationValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

#[derive(Deserialize)]
struct RawDuration {
    value: i64,
    unit: DurationUnit,
}

impl TryFrom<RawDuration> for DurationValue {
    type Error = RangeError;

    fn try_from(raw: RawDuration) -> Result<Self, Self::Error> {
        DurationValue::new(raw.value, raw.unit)
    }
}

/// A fixed quick-pick option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preset {
    pub label: &'static str,
    pub value: u16,
    pub unit: DurationUnit,
}

impl Preset {
    pub fn duration(&self) -> DurationValue {
        DurationValue {
            value: self.value,
            unit: self.unit,
        }
    }
}

pub const PRESETS: [Preset; 7] = [
    Preset { label: "2 Days", value: 2, unit: DurationUnit::Days },
    Preset { label: "5 Days", value: 5, unit: DurationUnit::Days },
    Preset { label: "1 Week", value: 1, unit: DurationUnit::Weeks },
    Preset { label: "2 Weeks", value: 2, unit: DurationUnit::Weeks },
    Preset { label: "1 Month", value: 1, unit: DurationUnit::Months },
    Preset { label: "3 Months", value: 3, unit: DurationUnit::Months },
    Preset { label: "6 Months", value: 6, unit: DurationUnit::Months },
];

/// True when `value` is one of the quick-pick presets.
pub fn is_preset(value: &DurationValue) -> bool {
    PRESETS.iter().any(|p| p.duration() == *value)
}
