//! Text rendering of the selector and the medication form.
//!
//! Every function returns lines instead of printing, so pages decide where
//! output goes.

use crate::core::duration::{Mode, Openness, SelectorState};
use crate::core::form::MedicationForm;
use crate::core::validation::FieldErrors;
use crate::models::duration::{DurationUnit, DurationValue, PRESETS, is_preset};
use crate::models::medication::{Field, MedicationEntry};
use crate::ui::layout::{self, LayoutConfig, PresetVariant};
use crate::utils::colors::{self, RED, RESET};
use crate::utils::formatting::{bold, grid, separator};

const CHIP_WIDTH: usize = 12;
const FIELD_WIDTH: usize = 26;

pub fn placeholder(field: Field) -> &'static str {
    match field {
        Field::MedicineType => "Select type",
        Field::MedicineName => "Enter medicine name",
        Field::Dose => "e.g. 500",
        Field::Unit => "Select unit",
        Field::Timing => "Select timing",
        Field::Frequency => "Select frequency",
        Field::Duration => "Select duration",
    }
}

/// Text on the closed trigger.
pub fn trigger_text(value: Option<DurationValue>) -> String {
    match value {
        Some(v) => v.label(),
        None => placeholder(Field::Duration).to_string(),
    }
}

pub fn render_selector(
    value: Option<DurationValue>,
    state: &SelectorState,
    error: Option<&str>,
    variant: PresetVariant,
) -> Vec<String> {
    let mut lines = Vec::new();
    let arrow = if state.is_open() { "▴" } else { "▾" };
    let border = colors::color_for_error(error.is_some());
    let text = colors::colorize_value(&value.map(|v| v.label()).unwrap_or_default(), placeholder(Field::Duration));
    lines.push(format!("{border}[{RESET} {text} {arrow} {border}]{RESET}"));

    match state.openness {
        Openness::Closed => {}
        Openness::Open(Mode::Preset) => lines.extend(render_presets(value, variant)),
        Openness::Open(Mode::Custom) => lines.extend(render_custom(state)),
    }

    if let Some(msg) = error {
        lines.push(format!("{RED}{msg}{RESET}"));
    }
    lines
}

fn render_presets(value: Option<DurationValue>, variant: PresetVariant) -> Vec<String> {
    let selected = |i: usize| value == Some(PRESETS[i].duration());
    let mut lines = Vec::new();

    match variant {
        PresetVariant::ChipGrid => {
            let chips: Vec<String> = PRESETS
                .iter()
                .enumerate()
                .map(|(i, p)| colors::highlight(&format!("({}) {}", i + 1, p.label), selected(i)))
                .collect();
            lines.extend(grid(&chips, 4, CHIP_WIDTH + 4).into_iter().map(|l| format!("  {l}")));
        }
        PresetVariant::List => {
            for (i, p) in PRESETS.iter().enumerate() {
                let marker = if selected(i) { "•" } else { " " };
                lines.push(format!("  {marker} {}. {}", i + 1, colors::highlight(p.label, selected(i))));
            }
        }
        PresetVariant::NarrowList => {
            for (i, p) in PRESETS.iter().enumerate() {
                lines.push(format!("{}. {}", i + 1, colors::highlight(p.label, selected(i))));
            }
        }
    }

    lines.push(format!("  {}", separator('─', 20)));
    match value {
        Some(v) if !is_preset(&v) => {
            lines.push(format!("  ⚙ Custom... {}", colors::highlight(&format!("({})", v.label()), true)))
        }
        _ => lines.push("  ⚙ Custom...".to_string()),
    }
    lines
}

fn render_custom(state: &SelectorState) -> Vec<String> {
    let mut lines = vec!["  ← Back to presets".to_string()];
    let input = colors::colorize_value(&state.draft.input_text(), "Enter value");
    let input_color = colors::color_for_error(state.error.is_some());
    lines.push(format!(
        "  {input_color}[{RESET} {input} {input_color}]{RESET} [ {} ▾ ] [ Apply ]",
        state.draft.unit.label()
    ));

    if state.unit_menu_open {
        for unit in DurationUnit::ALL {
            lines.push(format!("      {}", colors::highlight(unit.label(), unit == state.draft.unit)));
        }
    }

    if let Some(msg) = state.error_message() {
        lines.push(format!("  {RED}{msg}{RESET}"));
    }
    lines
}

fn field_cell(entry: &MedicationEntry, field: Field, errors: Option<&FieldErrors>) -> Vec<String> {
    let required = if field == Field::MedicineType { "" } else { "*" };
    let error = errors.and_then(|e| e.get(&field));
    let color = colors::color_for_error(error.is_some());
    let mut cell = vec![
        format!("{}{required}", field.label()),
        format!("{color}>{RESET} {}", colors::colorize_value(&entry.text(field), placeholder(field))),
    ];
    if let Some(msg) = error {
        cell.push(format!("{RED}{msg}{RESET}"));
    }
    cell
}

/// Full editor for one entry.
pub fn render_entry(
    form: &MedicationForm,
    position: usize,
    entry: &MedicationEntry,
    width: u16,
    cfg: &LayoutConfig,
) -> Vec<String> {
    let errors = form.errors_for(entry.id);
    let columns = layout::form_columns(width, cfg);
    let mut lines = vec![bold(&format!("Medication #{position}"))];

    // type / name / dose / unit share a row on wide viewports
    let top = [Field::MedicineType, Field::MedicineName, Field::Dose, Field::Unit];
    let cells: Vec<Vec<String>> = top.iter().map(|f| field_cell(entry, *f, errors)).collect();
    for chunk in cells.chunks(columns) {
        let height = chunk.iter().map(Vec::len).max().unwrap_or(0);
        for row in 0..height {
            let parts: Vec<String> = chunk
                .iter()
                .map(|c| c.get(row).cloned().unwrap_or_default())
                .collect();
            lines.extend(grid(&parts, columns, FIELD_WIDTH));
        }
    }

    for field in [Field::Timing, Field::Frequency] {
        lines.extend(field_cell(entry, field, errors));
    }

    lines.push("Duration*".to_string());
    if let Some(selector) = form.selector(entry.id) {
        let error = errors.and_then(|e| e.get(&Field::Duration)).map(String::as_str);
        lines.extend(render_selector(
            entry.duration,
            selector.state(),
            error,
            layout::variant_for(width, cfg),
        ));
    }
    lines
}

/// One-line summary for collapsed entries.
pub fn render_summary(position: usize, entry: &MedicationEntry) -> String {
    let parts: Vec<String> = [Field::MedicineName, Field::Dose, Field::Timing, Field::Frequency, Field::Duration]
        .iter()
        .map(|f| match (*f, entry.text(*f)) {
            (Field::Dose, dose) if !dose.is_empty() => format!("{} {}", dose, entry.unit).trim().to_string(),
            (_, text) => text,
        })
        .filter(|s| !s.is_empty())
        .collect();
    let body = if parts.is_empty() { "(empty)".to_string() } else { parts.join(" · ") };
    format!("#{position} {body}")
}

/// Whole form. Narrow viewports show only the expanded entry in full.
pub fn render_form(form: &MedicationForm, width: u16, cfg: &LayoutConfig) -> Vec<String> {
    let narrow = layout::is_narrow(width, cfg);
    let mut lines = vec![bold("Medications"), String::new()];

    for (i, entry) in form.entries().iter().enumerate() {
        let position = i + 1;
        if narrow && form.expanded() != Some(entry.id) {
            lines.push(render_summary(position, entry));
        } else {
            lines.extend(render_entry(form, position, entry, width, cfg));
        }
        lines.push(String::new());
    }

    lines.push("[ + Add Medication ]".to_string());
    lines
}
