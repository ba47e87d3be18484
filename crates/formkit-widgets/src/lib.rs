//! Reusable egui form components.
//!
//! This crate provides form rows and helpers for egui applications:
//!
//! - **Empty state**: icon, title and description placeholder
//! - **Rows**: labeled text, text/number input, picker with free text
//! - **Multi-picker**: dropdown whose tagged options toggle a shared selection
//! - **Share**: share sheet for a document written to a temporary file

pub mod empty_state;
pub mod input_field;
pub mod labeled_text;
pub mod multi_picker;
pub mod picker_input;
pub mod share;

pub use empty_state::{EmptyState, EmptyStateStyle};
pub use input_field::InputField;
pub use labeled_text::{LabeledText, LabeledTextStyle};
pub use multi_picker::{MultiPicker, MultiPickerResponse, MultiPickerTag};
pub use picker_input::PickerInput;
pub use share::ShareFile;

/// Standard sizing constants used across widgets.
pub mod sizing {
    /// Height of a form row
    pub const ROW_HEIGHT: f32 = 28.0;
    /// Height of an option row inside a dropdown
    pub const OPTION_HEIGHT: f32 = 24.0;
    /// Minimum width of a trailing text field
    pub const FIELD_MIN_WIDTH: f32 = 120.0;
    /// Minimum width of a dropdown
    pub const MENU_MIN_WIDTH: f32 = 160.0;
    /// Standard corner radius
    pub const CORNER_RADIUS: u8 = 4;
}

/// Standard colors and glyphs used across widgets.
pub mod theme {
    use egui::Color32;

    /// Primary text color (dark gray)
    pub const TEXT: Color32 = Color32::from_rgb(60, 60, 60);
    /// Secondary text color
    pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 120, 120);
    /// Selection/active color (blue)
    pub const ACCENT: Color32 = Color32::from_rgb(59, 130, 246);
    /// Hover background
    pub const HOVER_BG: Color32 = Color32::from_rgb(245, 245, 245);
    /// Error text color
    pub const ERROR: Color32 = Color32::from_rgb(220, 38, 38);

    /// Up/down chevron on dropdown triggers
    pub const CHEVRON: &str = "⏶⏷";
    /// Selected-state indicator
    pub const CHECKMARK: &str = "✔";
}
