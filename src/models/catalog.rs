//! Fixed option lists offered by the select-type fields.

pub const MEDICINE_TYPES: [&str; 7] = [
    "Tablet", "Capsule", "Syrup", "Injection", "Cream", "Drops", "Inhaler",
];

pub const DOSE_UNITS: [&str; 6] = ["mg", "ml", "g", "mcg", "IU", "units"];

pub const TIMINGS: [&str; 7] = [
    "Before Breakfast",
    "After Breakfast",
    "Before Lunch",
    "After Lunch",
    "Before Dinner",
    "After Dinner",
    "Anytime of the day",
];

pub const FREQUENCIES: [&str; 10] = [
    "Once daily",
    "Twice daily",
    "Three times daily",
    "Four times daily",
    "Every 4 hours",
    "Every 6 hours",
    "Every 8 hours",
    "Every 12 hours",
    "As needed",
    "Once weekly",
];

/// A keyed option, as used by the prescription page radio/select groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyedOption {
    pub key: &'static str,
    pub label: &'static str,
}

pub const PAGE_TIMINGS: [KeyedOption; 7] = [
    KeyedOption { key: "before-breakfast", label: "Before Breakfast" },
    KeyedOption { key: "after-breakfast", label: "After Breakfast" },
    KeyedOption { key: "before-lunch", label: "Before Lunch" },
    KeyedOption { key: "after-lunch", label: "After Lunch" },
    KeyedOption { key: "before-dinner", label: "Before Dinner" },
    KeyedOption { key: "after-dinner", label: "After Dinner" },
    KeyedOption { key: "anytime", label: "Anytime of the day" },
];

pub const PAGE_FREQUENCIES: [KeyedOption; 6] = [
    KeyedOption { key: "once", label: "Once daily" },
    KeyedOption { key: "twice", label: "Twice daily" },
    KeyedOption { key: "thrice", label: "Three times daily" },
    KeyedOption { key: "four", label: "Four times daily" },
    KeyedOption { key: "weekly", label: "Weekly" },
    KeyedOption { key: "asneeded", label: "As needed" },
];

/// Case-insensitive lookup returning the catalog spelling.
pub fn match_option(options: &[&'static str], input: &str) -> Option<&'static str> {
    let needle = input.trim();
    options
        .iter()
        .copied()
        .find(|opt| opt.eq_ignore_ascii_case(needle))
}

/// Lookup by key or label; returns the key.
pub fn match_keyed(options: &[KeyedOption], input: &str) -> Option<&'static str> {
    let needle = input.trim();
    options
        .iter()
        .find(|opt| opt.key.eq_ignore_ascii_case(needle) || opt.label.eq_ignore_ascii_case(needle))
        .map(|opt| opt.key)
}

pub fn keyed_label(options: &[KeyedOption], key: &str) -> Option<&'static str> {
    options.iter().find(|opt| opt.key == key).map(|opt| opt.label)
}
