use crate::errors::AppResult;
use crate::models::medication::Field;
use crate::ui::messages::header;

/// Print every select-type field with its allowed values.
pub fn handle() -> AppResult<()> {
    for field in Field::ALL {
        if let Some(options) = field.options() {
            header(field.label());
            for opt in options {
                println!("  - {opt}");
            }
            println!();
        }
    }
    Ok(())
}
