use crate::errors::AppResult;
use crate::models::duration::{DurationUnit, DurationValue};

/// Print the display label for `value unit`, refusing out-of-range values.
pub fn handle(value: i64, unit: &str) -> AppResult<()> {
    let unit: DurationUnit = unit.parse()?;
    let duration = DurationValue::new(value, unit)?;
    println!("{}", duration.label());
    Ok(())
}
