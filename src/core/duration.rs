//! Duration picker state machine.
//!
//! A control is `Closed`, or open in `Preset` or `Custom` mode. Presets
//! commit immediately; the custom path keeps a draft (value + unit) that is
//! range checked only on `Apply`. The control never owns the committed
//! value: commits are handed back in the `Transition` for the host to store.

use crate::models::duration::{DurationUnit, DurationValue, MAX_VALUE, MIN_VALUE, PRESETS, RangeError};
use serde::Serialize;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Preset,
    Custom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Openness {
    Closed,
    Open(Mode),
}

/// Pending custom input. `value == 0` is the "empty" sentinel left by
/// clearing or non-numeric input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CustomDraft {
    pub value: i64,
    pub unit: DurationUnit,
}

impl Default for CustomDraft {
    fn default() -> Self {
        Self {
            value: 1,
            unit: DurationUnit::Weeks,
        }
    }
}

impl CustomDraft {
    /// Text shown in the number input; the sentinel shows as empty.
    pub fn input_text(&self) -> String {
        if self.value == 0 {
            String::new()
        } else {
            self.value.to_string()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectorEvent {
    /// Trigger button pressed.
    Toggle,
    /// Interaction outside the control.
    Dismiss,
    /// Index into `PRESETS`.
    SelectPreset(usize),
    ChooseCustom,
    Back,
    Input(String),
    Increment,
    Decrement,
    ToggleUnitMenu,
    SelectUnit(DurationUnit),
    Apply,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SelectorState {
    pub openness: Openness,
    pub unit_menu_open: bool,
    pub draft: CustomDraft,
    pub error: Option<RangeErrorKind>,
    /// Draft a fresh custom session starts from.
    #[serde(skip)]
    pub seed: CustomDraft,
}

/// Serializable mirror of `RangeError` for state snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum RangeErrorKind {
    BelowMinimum,
    AboveMaximum,
}

impl From<RangeError> for RangeErrorKind {
    fn from(e: RangeError) -> Self {
        match e {
            RangeError::BelowMinimum => RangeErrorKind::BelowMinimum,
            RangeError::AboveMaximum => RangeErrorKind::AboveMaximum,
        }
    }
}

impl From<RangeErrorKind> for RangeError {
    fn from(e: RangeErrorKind) -> Self {
        match e {
            RangeErrorKind::BelowMinimum => RangeError::BelowMinimum,
            RangeErrorKind::AboveMaximum => RangeError::AboveMaximum,
        }
    }
}

/// Result of feeding one event to a selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub state: SelectorState,
    pub committed: Option<DurationValue>,
    pub mode_change: Option<Mode>,
}

impl Default for SelectorState {
    fn default() -> Self {
        Self::with_seed(CustomDraft::default())
    }
}

impl SelectorState {
    pub fn with_seed(seed: CustomDraft) -> Self {
        Self {
            openness: Openness::Closed,
            unit_menu_open: false,
            draft: seed,
            error: None,
            seed,
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self.openness, Openness::Open(_))
    }

    pub fn mode(&self) -> Option<Mode> {
        match self.openness {
            Openness::Closed => None,
            Openness::Open(mode) => Some(mode),
        }
    }

    pub fn error_message(&self) -> Option<String> {
        self.error.map(|e| RangeError::from(e).to_string())
    }

    /// Pure transition: the receiver is left untouched.
    pub fn step(&self, event: SelectorEvent) -> Transition {
        let mut next = *self;
        let mut committed = None;
        let mut mode_change = None;

        match (self.openness, event) {
            (Openness::Closed, SelectorEvent::Toggle) => {
                next.openness = Openness::Open(Mode::Preset);
            }

            (Openness::Open(mode), SelectorEvent::Toggle | SelectorEvent::Dismiss) => {
                next.close();
                if mode == Mode::Custom {
                    mode_change = Some(Mode::Preset);
                }
            }

            (Openness::Open(Mode::Preset), SelectorEvent::SelectPreset(index)) => {
                if let Some(preset) = PRESETS.get(index) {
                    committed = Some(preset.duration());
                    next.close();
                }
            }

            (Openness::Open(Mode::Preset), SelectorEvent::ChooseCustom) => {
                next.openness = Openness::Open(Mode::Custom);
                next.draft = self.seed;
                next.error = None;
                mode_change = Some(Mode::Custom);
            }

            (Openness::Open(Mode::Custom), SelectorEvent::Back) => {
                next.openness = Openness::Open(Mode::Preset);
                next.draft = self.seed;
                next.error = None;
                next.unit_menu_open = false;
                mode_change = Some(Mode::Preset);
            }

            (Openness::Open(Mode::Custom), SelectorEvent::Input(text)) => {
                match leading_integer(&text) {
                    Some(v) => {
                        next.draft.value = v;
                        next.error = None;
                    }
                    None => next.draft.value = 0,
                }
            }

            (Openness::Open(Mode::Custom), SelectorEvent::Increment) => {
                if self.draft.value < MAX_VALUE {
                    next.draft.value = (self.draft.value + 1).max(MIN_VALUE);
                }
                next.error = None;
            }

            (Openness::Open(Mode::Custom), SelectorEvent::Decrement) => {
                if self.draft.value > MIN_VALUE {
                    next.draft.value = (self.draft.value - 1).min(MAX_VALUE);
                }
                next.error = None;
            }

            (Openness::Open(Mode::Custom), SelectorEvent::ToggleUnitMenu) => {
                next.unit_menu_open = !self.unit_menu_open;
            }

            (Openness::Open(Mode::Custom), SelectorEvent::SelectUnit(unit)) => {
                next.draft.unit = unit;
                next.unit_menu_open = false;
            }

            (Openness::Open(Mode::Custom), SelectorEvent::Apply) => {
                match DurationValue::new(self.draft.value, self.draft.unit) {
                    Ok(value) => {
                        committed = Some(value);
                        next.close();
                        mode_change = Some(Mode::Preset);
                    }
                    Err(e) => next.error = Some(e.into()),
                }
            }

            (_, ignored) => {
                debug!(?ignored, openness = ?self.openness, "selector event ignored");
            }
        }

        Transition {
            state: next,
            committed,
            mode_change,
        }
    }

    fn close(&mut self) {
        self.openness = Openness::Closed;
        self.unit_menu_open = false;
        self.draft = self.seed;
        self.error = None;
    }
}

/// Integer prefix of `text` after leading whitespace: optional sign, then
/// digits ("2.5" → 2, "1e2" → 1). `None` when no digit leads. Overlong
/// digit runs saturate.
fn leading_integer(text: &str) -> Option<i64> {
    let s = text.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    let value = rest[..digits]
        .parse::<i64>()
        .unwrap_or(if negative { i64::MIN } else { i64::MAX });
    Some(if negative { value.saturating_neg() } else { value })
}

/// One duration control instance. Each control owns its own state; controls
/// never observe each other.
#[derive(Debug, Clone, Default)]
pub struct DurationSelector {
    state: SelectorState,
}

impl DurationSelector {
    pub fn new(seed: CustomDraft) -> Self {
        Self {
            state: SelectorState::with_seed(seed),
        }
    }

    pub fn state(&self) -> &SelectorState {
        &self.state
    }

    pub fn handle(&mut self, event: SelectorEvent) -> Transition {
        let transition = self.state.step(event);
        self.state = transition.state;
        if let Some(value) = transition.committed {
            debug!(duration = %value, "duration committed");
        }
        if let Some(mode) = transition.mode_change {
            debug!(?mode, "duration selector mode changed");
        }
        transition
    }

    /// Outside-interaction entry point for the hosting layer.
    pub fn dismiss(&mut self) -> Transition {
        self.handle(SelectorEvent::Dismiss)
    }
}
