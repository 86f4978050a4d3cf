//! Clinical dashboard demo: patient card, session panel and a single
//! medication composer. The composer listens to the duration selector's
//! mode changes and stacks frequency/duration while in custom mode.

use crate::core::duration::{CustomDraft, DurationSelector, Mode, SelectorEvent};
use crate::core::script::{ScriptCommand, ScriptTarget};
use crate::errors::{AppError, AppResult};
use crate::models::catalog::{self, KeyedOption, PAGE_FREQUENCIES, PAGE_TIMINGS};
use crate::models::duration::DurationValue;
use crate::models::medication::Field;
use crate::ui::layout::{self, LayoutConfig};
use crate::ui::{messages, render};
use crate::utils::colors;
use crate::utils::formatting::{bold, grid, pad_right};
use chrono::NaiveDate;
use serde::Serialize;
use tracing::info;

#[derive(Debug, Clone)]
pub struct WeightReading {
    pub date: NaiveDate,
    pub label: &'static str,
    pub kg: f32,
    pub bmi: f32,
}

#[derive(Debug, Clone)]
pub struct PrescribedMedication {
    pub name: &'static str,
    pub kind: &'static str,
    pub dose: &'static str,
    pub prescribed: NaiveDate,
}

#[derive(Debug, Clone)]
pub struct PatientSummary {
    pub name: &'static str,
    pub age: u8,
    pub gender: &'static str,
    pub start: WeightReading,
    pub current: WeightReading,
    pub goal_kg: f32,
    pub prescribed: Vec<PrescribedMedication>,
    pub doctor: &'static str,
}

impl PatientSummary {
    pub fn initial(&self) -> char {
        self.name.chars().next().unwrap_or('?')
    }

    pub fn lost_kg(&self) -> f32 {
        self.start.kg - self.current.kg
    }

    /// Percent of the planned loss achieved, clamped to 0..=100.
    pub fn progress_pct(&self) -> u8 {
        let planned = self.start.kg - self.goal_kg;
        if planned <= 0.0 {
            return 100;
        }
        ((self.lost_kg() / planned) * 100.0).clamp(0.0, 100.0).round() as u8
    }
}

/// Sample patient shown by the demo dashboard.
pub fn demo_patient() -> PatientSummary {
    let dec28 = NaiveDate::from_ymd_opt(2025, 12, 28).unwrap_or_default();
    PatientSummary {
        name: "Pratik Shroff",
        age: 45,
        gender: "male",
        start: WeightReading {
            date: NaiveDate::from_ymd_opt(2025, 12, 27).unwrap_or_default(),
            label: "Start",
            kg: 124.3,
            bmi: 42.9,
        },
        current: WeightReading {
            date: NaiveDate::from_ymd_opt(2026, 1, 2).unwrap_or_default(),
            label: "Current",
            kg: 124.3,
            bmi: 42.9,
        },
        goal_kg: 105.0,
        prescribed: vec![
            PrescribedMedication {
                name: "Soft Needle Injection Mounjaro 2.5 mg",
                kind: "Injection",
                dose: "2.5 mg",
                prescribed: dec28,
            },
            PrescribedMedication {
                name: "Tablet Methycobalamin (Vitamin B12) 500 mcg",
                kind: "Tablet",
                dose: "500 mcg",
                prescribed: dec28,
            },
        ],
        doctor: "Dr. Saurav Das",
    }
}

/// Payload logged by "Add Medication".
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MedicationDraft {
    pub medication_name: String,
    pub timing: String,
    pub frequency: String,
    pub duration: Option<DurationValue>,
}

pub struct NewPrescriptionPage {
    patient: PatientSummary,
    draft: MedicationDraft,
    selector: DurationSelector,
    duration_mode: Mode,
    submitted: Vec<MedicationDraft>,
    width: u16,
    layout: LayoutConfig,
}

impl NewPrescriptionPage {
    pub fn new(seed: CustomDraft, width: u16, layout: LayoutConfig) -> Self {
        Self {
            patient: demo_patient(),
            draft: MedicationDraft {
                medication_name: String::new(),
                timing: String::new(),
                frequency: String::new(),
                duration: None,
            },
            selector: DurationSelector::new(seed),
            duration_mode: Mode::Preset,
            submitted: Vec::new(),
            width,
            layout,
        }
    }

    pub fn draft(&self) -> &MedicationDraft {
        &self.draft
    }

    pub fn duration_mode(&self) -> Mode {
        self.duration_mode
    }

    pub fn submitted(&self) -> &[MedicationDraft] {
        &self.submitted
    }

    pub fn selector(&self) -> &DurationSelector {
        &self.selector
    }

    pub fn duration_event(&mut self, event: SelectorEvent) {
        let transition = self.selector.handle(event);
        if let Some(value) = transition.committed {
            self.draft.duration = Some(value);
        }
        if let Some(mode) = transition.mode_change {
            self.duration_mode = mode;
        }
    }

    /// "Add Medication": logs the current draft. Nothing is stored beyond
    /// the in-memory log of submitted drafts.
    pub fn add_medication(&mut self) -> MedicationDraft {
        let draft = self.draft.clone();
        info!(
            medication_name = %draft.medication_name,
            timing = %draft.timing,
            frequency = %draft.frequency,
            duration = ?draft.duration.map(|d| d.label()),
            "add medication"
        );
        self.submitted.push(draft.clone());
        draft
    }

    fn set_text(&mut self, field: Field, value: &str) -> AppResult<()> {
        let keyed = |options: &[KeyedOption]| -> AppResult<String> {
            if value.trim().is_empty() {
                return Ok(String::new());
            }
            catalog::match_keyed(options, value)
                .map(str::to_string)
                .ok_or_else(|| AppError::InvalidOption {
                    field: field.key().to_string(),
                    value: value.trim().to_string(),
                })
        };

        match field {
            Field::MedicineName => self.draft.medication_name = value.to_string(),
            Field::Timing => self.draft.timing = keyed(&PAGE_TIMINGS[..])?,
            Field::Frequency => self.draft.frequency = keyed(&PAGE_FREQUENCIES[..])?,
            Field::Duration if value.trim().is_empty() => self.draft.duration = None,
            other => {
                return Err(AppError::InvalidField(format!(
                    "{} is not on the prescription page",
                    other.key()
                )));
            }
        }
        Ok(())
    }

    pub fn render(&self) -> Vec<String> {
        let narrow = layout::is_narrow(self.width, &self.layout);
        let mut lines = vec!["‹ Back".to_string(), String::new()];
        lines.extend(self.render_patient());
        lines.push(String::new());
        lines.extend(self.render_session());
        lines.push(String::new());
        lines.extend(self.render_composer(narrow));
        lines
    }

    fn render_patient(&self) -> Vec<String> {
        let p = &self.patient;
        let reading = |r: &WeightReading| {
            format!(
                "{} ({}): {:.1}kg • BMI {:.1}",
                r.date.format("%d %b %Y"),
                r.label,
                r.kg,
                r.bmi
            )
        };
        let mut lines = vec![
            format!("({}) {}  [ Last Prescription ]", p.initial(), bold(p.name)),
            format!("Age: {}, Gender: {}", p.age, p.gender),
            reading(&p.start),
            reading(&p.current),
            format!("Progress to Goal: {}%", p.progress_pct()),
            format!(
                "{:.1}kg lost • {:.1}kg to goal",
                p.lost_kg(),
                p.goal_kg - p.current.kg
            ),
            String::new(),
            "[Health] Reports Progress".to_string(),
            bold("Current Medications"),
            "  No current medications".to_string(),
            bold("Prescribed Medications"),
        ];
        for med in &p.prescribed {
            lines.push(format!("  {} ({}, {})", med.name, med.kind, med.dose));
            lines.push(format!("    Prescribed: {}", med.prescribed.format("%b %d, %Y")));
        }
        lines
    }

    fn render_session(&self) -> Vec<String> {
        vec![
            format!("{} (doctor)", self.patient.doctor),
            "[ Join Session ]".to_string(),
        ]
    }

    fn render_composer(&self, narrow: bool) -> Vec<String> {
        let mut lines = vec![bold("Medications")];
        lines.push("Medication Name*".to_string());
        lines.push(format!(
            "> {}",
            colors::colorize_value(&self.draft.medication_name, "Search medication...")
        ));

        lines.push("Timing*".to_string());
        let radios: Vec<String> = PAGE_TIMINGS
            .iter()
            .map(|opt| {
                let mark = if self.draft.timing == opt.key { "(•)" } else { "( )" };
                format!("{mark} {}", opt.label)
            })
            .collect();
        lines.extend(grid(&radios, if narrow { 1 } else { 3 }, 24));

        let frequency = catalog::keyed_label(&PAGE_FREQUENCIES, &self.draft.frequency).unwrap_or("");
        let mut freq_cell = vec![
            "Frequency*".to_string(),
            format!("[ {} ▾ ]", colors::colorize_value(frequency, "Select frequency")),
        ];
        let mut dur_cell = vec!["Duration*".to_string()];
        dur_cell.extend(render::render_selector(
            self.draft.duration,
            self.selector.state(),
            None,
            layout::variant_for(self.width, &self.layout),
        ));

        // side by side only while the selector is in preset mode
        if narrow || self.duration_mode == Mode::Custom {
            lines.append(&mut freq_cell);
            lines.append(&mut dur_cell);
        } else {
            let height = freq_cell.len().max(dur_cell.len());
            for row in 0..height {
                let left = freq_cell.get(row).cloned().unwrap_or_default();
                let right = dur_cell.get(row).cloned().unwrap_or_default();
                lines.push(format!("{} {}", pad_right(&left, 30), right).trim_end().to_string());
            }
        }

        lines.push("[ Add Medication ]".to_string());
        lines
    }
}

impl ScriptTarget for NewPrescriptionPage {
    fn apply(&mut self, command: ScriptCommand) -> AppResult<()> {
        match command {
            ScriptCommand::Set { field, value, .. } => self.set_text(field, &value)?,
            ScriptCommand::Clear { field, .. } => self.set_text(field, "")?,
            ScriptCommand::Duration { event, .. } => self.duration_event(event),
            ScriptCommand::Submit => {
                if self.selector.state().is_open() {
                    self.duration_event(SelectorEvent::Dismiss);
                }
                let draft = self.add_medication();
                messages::success(format!("Add Medication: {}", serde_json::to_string(&draft)?));
            }
            ScriptCommand::Show => {
                for line in self.render() {
                    println!("{line}");
                }
            }
            ScriptCommand::Add | ScriptCommand::Expand(_) | ScriptCommand::Validate => {
                messages::warning("The prescription page holds a single medication; command ignored");
            }
        }
        Ok(())
    }
}
