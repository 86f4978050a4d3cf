/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const CYAN: &str = "\x1b[36m";

/// Placeholder text ("Select duration", "Select unit") renders grey,
/// filled values render plain.
pub fn colorize_value(value: &str, placeholder: &str) -> String {
    if value.trim().is_empty() {
        format!("{GREY}{placeholder}{RESET}")
    } else {
        value.to_string()
    }
}

/// Highlight for the currently selected option in a list.
pub fn highlight(value: &str, selected: bool) -> String {
    if selected {
        format!("{CYAN}{BOLD}{value}{RESET}")
    } else {
        value.to_string()
    }
}

/// Red for fields carrying an error, reset otherwise.
pub fn color_for_error(has_error: bool) -> &'static str {
    if has_error { RED } else { RESET }
}
