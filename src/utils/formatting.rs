//! Formatting utilities used for terminal rendering and exports.

use regex::Regex;
use std::sync::LazyLock;
use unicode_width::UnicodeWidthStr;

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// Display width, ignoring ANSI escape sequences.
pub fn visible_width(s: &str) -> usize {
    strip_ansi(s).width()
}

/// Pads to `width` display columns; never truncates.
pub fn pad_right(s: &str, width: usize) -> String {
    let w = visible_width(s);
    if w >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - w))
    }
}

/// CSI escape sequences (colours, cursor and erase codes).
static ANSI_CSI: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\x1B\[[0-?]*[ -/]*[@-~]").expect("valid CSI pattern"));

pub fn strip_ansi(s: &str) -> String {
    ANSI_CSI.replace_all(s, "").into_owned()
}

/// Horizontal rule of the given width.
pub fn separator(ch: char, width: usize) -> String {
    std::iter::repeat_n(ch, width).collect()
}

/// Lays out cells in rows of `per_row`, each padded to `cell_width`.
pub fn grid(cells: &[String], per_row: usize, cell_width: usize) -> Vec<String> {
    cells
        .chunks(per_row.max(1))
        .map(|row| {
            row.iter()
                .map(|c| pad_right(c, cell_width))
                .collect::<Vec<_>>()
                .join(" ")
                .trim_end()
                .to_string()
        })
        .collect()
}
