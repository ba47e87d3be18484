//! Choices offered by a picker-with-free-text row.

use std::fmt::Display;

/// Label of the choice that clears the text.
pub const EMPTY_CHOICE_LABEL: &str = "<empty>";

/// One entry in a picker's dropdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerChoice {
    /// Clear the text.
    Clear,
    /// Replace the text with an option's label.
    Option(String),
}

impl PickerChoice {
    /// Text shown for this entry.
    pub fn label(&self) -> &str {
        match self {
            PickerChoice::Clear => EMPTY_CHOICE_LABEL,
            PickerChoice::Option(label) => label,
        }
    }

    /// Apply the choice to the bound text.
    pub fn apply(&self, text: &mut String) {
        text.clear();
        if let PickerChoice::Option(label) = self {
            text.push_str(label);
        }
    }
}

/// Build the dropdown entries: the clear entry followed by each option's label.
pub fn picker_choices<V>(options: &[V], to_label: impl Fn(&V) -> String) -> Vec<PickerChoice> {
    std::iter::once(PickerChoice::Clear)
        .chain(options.iter().map(|option| PickerChoice::Option(to_label(option))))
        .collect()
}

/// Default label projection: the value's `Display` output.
pub fn display_label<V: Display>(value: &V) -> String {
    value.to_string()
}
