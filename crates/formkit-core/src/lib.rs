//! FormKit Core Library
//!
//! Toolkit-agnostic state and logic behind the FormKit form widgets.

pub mod input;
pub mod picker;
pub mod selection;
pub mod share;

pub use input::{format_number, parse_number, NumberDraft};
pub use picker::{display_label, picker_choices, PickerChoice, EMPTY_CHOICE_LABEL};
pub use selection::{
    selection_summary, OptionToggle, SelectionAccessor, SelectionBinding, SelectionContext,
    SelectionKey, SelectionSet, SelectionValue, ToggleState, EMPTY_SELECTION_TEXT,
};
pub use share::{SharePayload, ShareError, ShareResult};
