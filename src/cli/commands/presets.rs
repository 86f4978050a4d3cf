use crate::errors::AppResult;
use crate::models::duration::{DurationUnit, MAX_VALUE, MIN_VALUE, PRESETS};
use crate::ui::messages::header;
use serde::Serialize;

#[derive(Serialize)]
struct PresetRow {
    label: &'static str,
    value: u16,
    unit: DurationUnit,
}

pub fn handle(json: bool) -> AppResult<()> {
    if json {
        let rows: Vec<PresetRow> = PRESETS
            .iter()
            .map(|p| PresetRow {
                label: p.label,
                value: p.value,
                unit: p.unit,
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    header("Duration presets");
    for (i, p) in PRESETS.iter().enumerate() {
        println!("{:>2}. {:<10} ({} {})", i + 1, p.label, p.value, p.unit);
    }
    println!();
    let units: Vec<&str> = DurationUnit::ALL.iter().map(|u| u.label()).collect();
    println!("Custom: {MIN_VALUE}–{MAX_VALUE} {}", units.join(" | "));
    Ok(())
}
