use rxform::core::duration::{CustomDraft, Mode, SelectorEvent};
use rxform::core::script::{ScriptCommand, parse_line, parse_script, run_script};
use rxform::errors::AppError;
use rxform::models::duration::{DurationUnit, DurationValue};
use rxform::models::medication::Field;
use rxform::pages::index::IndexPage;
use rxform::pages::new_prescription::{NewPrescriptionPage, demo_patient};
use rxform::ui::layout::{LayoutConfig, PresetVariant, form_columns, variant_for};

mod common;
use common::fill_entry;

fn index_page() -> IndexPage {
    IndexPage::new(CustomDraft::default(), 100, LayoutConfig::default())
}

#[test]
fn test_parse_set_with_and_without_entry() {
    assert_eq!(
        parse_line("set 2 name \"Vitamin D3\""),
        Ok(Some(ScriptCommand::Set {
            entry: Some(2),
            field: Field::MedicineName,
            value: "Vitamin D3".into()
        }))
    );
    assert_eq!(
        parse_line("set timing After Lunch"),
        Ok(Some(ScriptCommand::Set {
            entry: None,
            field: Field::Timing,
            value: "After Lunch".into()
        }))
    );
}

#[test]
fn test_parse_duration_actions() {
    assert_eq!(
        parse_line("duration 1 preset 7"),
        Ok(Some(ScriptCommand::Duration {
            entry: Some(1),
            event: SelectorEvent::SelectPreset(6)
        }))
    );
    assert_eq!(
        parse_line("duration unit d"),
        Ok(Some(ScriptCommand::Duration {
            entry: None,
            event: SelectorEvent::SelectUnit(DurationUnit::Days)
        }))
    );
    assert_eq!(
        parse_line("duration 3 input \"\""),
        Ok(Some(ScriptCommand::Duration {
            entry: Some(3),
            event: SelectorEvent::Input(String::new())
        }))
    );
    assert!(parse_line("duration 1 preset 8").is_err());
    assert!(parse_line("duration 1 fly").is_err());
}

#[test]
fn test_parse_ignores_comments_and_blank_lines() {
    assert_eq!(parse_line("   "), Ok(None));
    assert_eq!(parse_line("# just a note"), Ok(None));
    assert_eq!(parse_line("add # trailing"), Ok(Some(ScriptCommand::Add)));
}

#[test]
fn test_parse_errors_carry_line_number() {
    let err = parse_script("add\nset 1 name ok\nexplode\n").unwrap_err();
    assert!(matches!(err, AppError::Script { line: 3, .. }));

    let err = parse_script("set 1 name \"unterminated").unwrap_err();
    assert!(matches!(err, AppError::Script { line: 1, .. }));
}

#[test]
fn test_duration_cannot_be_set_as_text() {
    assert!(parse_line("set 1 duration 5").is_err());
}

#[test]
fn test_index_page_script_builds_valid_form() {
    let mut page = index_page();
    let script = format!("{}add\n{}", fill_entry(1, "Amoxicillin"), fill_entry(2, "Cetirizine"));
    let applied = run_script(&mut page, &script).expect("script");
    assert_eq!(applied, 15);

    let form = page.form_mut();
    assert_eq!(form.entries().len(), 2);
    assert!(form.validate_all().is_empty());
    assert_eq!(
        form.entries()[1].duration,
        DurationValue::new(1, DurationUnit::Weeks).ok()
    );
    assert_eq!(form.entries()[0].timing, "After Lunch");
}

#[test]
fn test_index_page_defaults_to_expanded_entry() {
    let mut page = index_page();
    run_script(&mut page, "add\nset name Second\nexpand 1\nset name First\n").expect("script");
    let names: Vec<&str> = page
        .form()
        .entries()
        .iter()
        .map(|e| e.medicine_name.as_str())
        .collect();
    assert_eq!(names, ["First", "Second"]);
}

#[test]
fn test_index_page_custom_duration_commits_to_addressed_entry() {
    let mut page = index_page();
    run_script(
        &mut page,
        "add\nduration 2 open\nduration 2 custom\nduration 2 input 2.5\nduration 2 unit days\nduration 2 apply\n",
    )
    .expect("script");

    let form = page.form();
    let second = form.id_at(2).expect("second entry");
    assert_eq!(form.entries()[0].duration, None);
    assert_eq!(form.entries()[1].duration, DurationValue::new(2, DurationUnit::Days).ok());
    assert!(!form.selector(second).expect("selector").state().is_open());
}

#[test]
fn test_index_page_rejects_unknown_position_and_option() {
    let mut page = index_page();
    let err = run_script(&mut page, "set 4 dose 5").unwrap_err();
    assert!(matches!(err, AppError::Script { line: 1, .. }));

    let err = run_script(&mut page, "add\nset 1 unit litres").unwrap_err();
    assert!(matches!(err, AppError::Script { line: 2, .. }));
}

#[test]
fn test_index_page_render_shows_errors_and_placeholder() {
    let mut page = index_page();
    run_script(&mut page, "validate").expect("script");
    let text = page.render().join("\n");
    assert!(text.contains("Prescription Form"));
    assert!(text.contains("Select duration"));
    assert!(text.contains("Medicine name is required"));
    assert!(text.contains("Add Medication"));
}

#[test]
fn test_prescription_page_tracks_mode_changes() {
    let mut page = NewPrescriptionPage::new(CustomDraft::default(), 100, LayoutConfig::default());
    run_script(&mut page, "duration open\nduration custom\n").expect("script");
    assert_eq!(page.duration_mode(), Mode::Custom);

    run_script(&mut page, "duration input 10\nduration unit days\nduration apply\n").expect("script");
    assert_eq!(page.duration_mode(), Mode::Preset);
    assert_eq!(page.draft().duration, DurationValue::new(10, DurationUnit::Days).ok());
}

#[test]
fn test_prescription_page_dismiss_reverts_layout() {
    let mut page = NewPrescriptionPage::new(CustomDraft::default(), 100, LayoutConfig::default());
    run_script(&mut page, "duration open\nduration custom\nduration dismiss\n").expect("script");
    assert_eq!(page.duration_mode(), Mode::Preset);
    assert!(page.draft().duration.is_none());
}

#[test]
fn test_prescription_page_submit_logs_draft() {
    let mut page = NewPrescriptionPage::new(CustomDraft::default(), 100, LayoutConfig::default());
    run_script(
        &mut page,
        "set name Metformin\nset timing anytime\nset frequency Weekly\nduration open\nduration preset 5\nsubmit\n",
    )
    .expect("script");

    let logged = page.submitted();
    assert_eq!(logged.len(), 1);
    assert_eq!(logged[0].medication_name, "Metformin");
    assert_eq!(logged[0].timing, "anytime");
    assert_eq!(logged[0].frequency, "weekly");
    assert_eq!(logged[0].duration, DurationValue::new(1, DurationUnit::Months).ok());
}

#[test]
fn test_prescription_page_rejects_fields_it_does_not_show() {
    let mut page = NewPrescriptionPage::new(CustomDraft::default(), 100, LayoutConfig::default());
    assert!(run_script(&mut page, "set dose 5").is_err());
    assert!(run_script(&mut page, "set frequency \"Every 6 hours\"").is_err());
}

#[test]
fn test_demo_patient_progress() {
    let p = demo_patient();
    assert_eq!(p.progress_pct(), 0);
    assert_eq!(p.prescribed.len(), 2);
    assert_eq!(p.initial(), 'P');
}

#[test]
fn test_layout_variants() {
    let cfg = LayoutConfig::default();
    assert_eq!(variant_for(60, &cfg), PresetVariant::NarrowList);
    assert_eq!(variant_for(120, &cfg), PresetVariant::ChipGrid);
    let listy = LayoutConfig {
        compact_presets: false,
        ..cfg
    };
    assert_eq!(variant_for(120, &listy), PresetVariant::List);
    assert_eq!(variant_for(79, &listy), PresetVariant::NarrowList);
    assert_eq!(form_columns(60, &cfg), 1);
    assert_eq!(form_columns(80, &cfg), 4);
}
