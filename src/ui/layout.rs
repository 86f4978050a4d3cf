//! Responsive presentation choice. Pure functions of the width signal; the
//! selector state machine never sees any of this.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// Widths below this are treated as a narrow viewport.
    pub narrow_breakpoint: u16,
    /// Show presets as a chip grid on wide viewports.
    pub compact_presets: bool,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            narrow_breakpoint: 80,
            compact_presets: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresetVariant {
    ChipGrid,
    List,
    NarrowList,
}

pub fn is_narrow(width: u16, cfg: &LayoutConfig) -> bool {
    width < cfg.narrow_breakpoint
}

pub fn variant_for(width: u16, cfg: &LayoutConfig) -> PresetVariant {
    if is_narrow(width, cfg) {
        PresetVariant::NarrowList
    } else if cfg.compact_presets {
        PresetVariant::ChipGrid
    } else {
        PresetVariant::List
    }
}

/// Columns used by the medication editor: one on narrow viewports, up to
/// four otherwise.
pub fn form_columns(width: u16, cfg: &LayoutConfig) -> usize {
    if is_narrow(width, cfg) { 1 } else { 4 }
}
