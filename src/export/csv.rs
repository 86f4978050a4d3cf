use crate::core::form::Submission;
use crate::errors::AppResult;
use ::csv::Writer;
use std::path::Path;

/// One row per entry; field errors are joined into the last column.
pub fn write_csv(path: &Path, submission: &Submission) -> AppResult<()> {
    let mut wtr = Writer::from_path(path)?;

    wtr.write_record([
        "id",
        "medicine_type",
        "medicine_name",
        "dose",
        "unit",
        "timing",
        "frequency",
        "duration_value",
        "duration_unit",
        "duration",
        "errors",
    ])?;

    for entry in &submission.entries {
        let errors = submission
            .errors
            .iter()
            .find(|e| e.id == entry.id)
            .map(|e| e.fields.values().cloned().collect::<Vec<_>>().join("; "))
            .unwrap_or_default();

        wtr.write_record(&[
            entry.id.to_string(),
            entry.medicine_type.clone(),
            entry.medicine_name.clone(),
            entry.dose.clone(),
            entry.unit.clone(),
            entry.timing.clone(),
            entry.frequency.clone(),
            entry.duration.map(|d| d.value().to_string()).unwrap_or_default(),
            entry.duration.map(|d| d.unit().to_string()).unwrap_or_default(),
            entry.duration.map(|d| d.label()).unwrap_or_default(),
            errors,
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
