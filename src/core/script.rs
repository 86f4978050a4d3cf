//! Line-based event scripts used to drive the pages from the terminal.
//!
//! ```text
//! add
//! set 1 name "Amoxicillin"
//! duration 1 open
//! duration 1 preset 3
//! validate
//! ```
//!
//! Entry numbers are 1-based and optional; without one the command targets
//! the currently expanded entry.

use crate::core::duration::SelectorEvent;
use crate::errors::{AppError, AppResult};
use crate::models::duration::{DurationUnit, PRESETS};
use crate::models::medication::Field;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptCommand {
    Add,
    /// Raw text; each page checks it against its own option lists.
    Set {
        entry: Option<usize>,
        field: Field,
        value: String,
    },
    Clear {
        entry: Option<usize>,
        field: Field,
    },
    Duration {
        entry: Option<usize>,
        event: SelectorEvent,
    },
    Expand(usize),
    Validate,
    Show,
    Submit,
}

/// Something a script can drive.
pub trait ScriptTarget {
    fn apply(&mut self, command: ScriptCommand) -> AppResult<()>;
}

/// Parses the whole script before running anything, so a typo on the last
/// line does not leave a half-applied session.
pub fn parse_script(source: &str) -> AppResult<Vec<(usize, ScriptCommand)>> {
    let mut commands = Vec::new();
    for (index, line) in source.lines().enumerate() {
        let line_no = index + 1;
        if let Some(cmd) = parse_line(line).map_err(|message| AppError::Script { line: line_no, message })? {
            commands.push((line_no, cmd));
        }
    }
    Ok(commands)
}

pub fn run_script<T: ScriptTarget>(target: &mut T, source: &str) -> AppResult<usize> {
    let commands = parse_script(source)?;
    let count = commands.len();
    for (line, cmd) in commands {
        tracing::debug!(line, ?cmd, "script command");
        target.apply(cmd).map_err(|e| match e {
            script @ AppError::Script { .. } => script,
            other => AppError::Script {
                line,
                message: other.to_string(),
            },
        })?;
    }
    Ok(count)
}

/// `Ok(None)` for blank lines and comments.
pub fn parse_line(line: &str) -> Result<Option<ScriptCommand>, String> {
    let tokens = tokenize(line)?;
    let Some((head, rest)) = tokens.split_first() else {
        return Ok(None);
    };

    let cmd = match head.to_lowercase().as_str() {
        "add" => ScriptCommand::Add,
        "validate" => ScriptCommand::Validate,
        "show" => ScriptCommand::Show,
        "submit" => ScriptCommand::Submit,
        "expand" => {
            let n = rest
                .first()
                .and_then(|t| t.parse::<usize>().ok())
                .ok_or("expand needs an entry number")?;
            ScriptCommand::Expand(n)
        }
        "set" => {
            let (entry, rest) = split_entry(rest);
            let (field, value) = rest.split_first().ok_or("set needs a field name")?;
            let field: Field = field.parse().map_err(|e: AppError| e.to_string())?;
            if field == Field::Duration {
                return Err("use the duration command to pick a duration".into());
            }
            ScriptCommand::Set {
                entry,
                field,
                value: value.join(" "),
            }
        }
        "clear" => {
            let (entry, rest) = split_entry(rest);
            let field = rest.first().ok_or("clear needs a field name")?;
            let field: Field = field.parse().map_err(|e: AppError| e.to_string())?;
            ScriptCommand::Clear { entry, field }
        }
        "duration" => {
            let (entry, rest) = split_entry(rest);
            let event = parse_duration_event(rest)?;
            ScriptCommand::Duration { entry, event }
        }
        other => return Err(format!("unknown command '{other}'")),
    };

    Ok(Some(cmd))
}

fn parse_duration_event(args: &[String]) -> Result<SelectorEvent, String> {
    let (action, rest) = args.split_first().ok_or("duration needs an action")?;
    let event = match action.to_lowercase().as_str() {
        "open" | "toggle" => SelectorEvent::Toggle,
        "close" | "dismiss" => SelectorEvent::Dismiss,
        "custom" => SelectorEvent::ChooseCustom,
        "back" => SelectorEvent::Back,
        "apply" => SelectorEvent::Apply,
        "inc" | "+" => SelectorEvent::Increment,
        "dec" | "-" => SelectorEvent::Decrement,
        "units" => SelectorEvent::ToggleUnitMenu,
        "input" => SelectorEvent::Input(rest.join(" ")),
        "unit" => {
            let unit = rest.first().ok_or("unit needs days, weeks or months")?;
            let unit: DurationUnit = unit.parse().map_err(|e: AppError| e.to_string())?;
            SelectorEvent::SelectUnit(unit)
        }
        "preset" => {
            let n = rest
                .first()
                .and_then(|t| t.parse::<usize>().ok())
                .filter(|n| (1..=PRESETS.len()).contains(n))
                .ok_or_else(|| format!("preset needs a number between 1 and {}", PRESETS.len()))?;
            SelectorEvent::SelectPreset(n - 1)
        }
        other => return Err(format!("unknown duration action '{other}'")),
    };
    Ok(event)
}

fn split_entry(tokens: &[String]) -> (Option<usize>, &[String]) {
    match tokens.first().and_then(|t| t.parse::<usize>().ok()) {
        Some(n) => (Some(n), &tokens[1..]),
        None => (None, tokens),
    }
}

/// Whitespace split with double-quoted groups and `#` comments.
fn tokenize(line: &str) -> Result<Vec<String>, String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut quoted = false;

    for ch in line.chars() {
        match ch {
            '"' => {
                in_quotes = !in_quotes;
                quoted = true;
            }
            '#' if !in_quotes => break,
            c if c.is_whitespace() && !in_quotes => {
                if !current.is_empty() || quoted {
                    tokens.push(std::mem::take(&mut current));
                }
                quoted = false;
            }
            c => current.push(c),
        }
    }

    if in_quotes {
        return Err("unterminated quote".into());
    }
    if !current.is_empty() || quoted {
        tokens.push(current);
    }
    Ok(tokens)
}
