//! Label/value row.

use egui::{Align, Color32, FontId, Layout, Response, RichText, Ui};

use crate::{sizing, theme};

/// Colors and fonts of a [`LabeledText`] row.
#[derive(Clone, Debug, PartialEq)]
pub struct LabeledTextStyle {
    /// Label color
    pub label_color: Color32,
    /// Value color
    pub value_color: Color32,
    /// Label font
    pub label_font: FontId,
    /// Value font
    pub value_font: FontId,
}

impl Default for LabeledTextStyle {
    fn default() -> Self {
        Self {
            label_color: theme::TEXT,
            value_color: theme::TEXT,
            label_font: FontId::proportional(14.0),
            value_font: FontId::proportional(14.0),
        }
    }
}

/// A label on the left and a value on the right, separated by flexible space.
///
/// ```ignore
/// LabeledText::new("Email", "john.doe@example.com")
///     .label_color(theme::TEXT_MUTED)
///     .value_color(theme::ACCENT)
///     .show(ui);
/// ```
#[derive(Clone, Debug)]
pub struct LabeledText<'a> {
    label: &'a str,
    value: &'a str,
    style: LabeledTextStyle,
}

impl<'a> LabeledText<'a> {
    /// Create a row with default style.
    pub fn new(label: &'a str, value: &'a str) -> Self {
        Self {
            label,
            value,
            style: LabeledTextStyle::default(),
        }
    }

    /// Create a row with a colored value.
    pub fn with_value_color(label: &'a str, value: &'a str, color: Color32) -> Self {
        Self::new(label, value).value_color(color)
    }

    /// Set the label color.
    pub fn label_color(mut self, color: Color32) -> Self {
        self.style.label_color = color;
        self
    }

    /// Set the value color.
    pub fn value_color(mut self, color: Color32) -> Self {
        self.style.value_color = color;
        self
    }

    /// Set the label font.
    pub fn label_font(mut self, font: FontId) -> Self {
        self.style.label_font = font;
        self
    }

    /// Set the value font.
    pub fn value_font(mut self, font: FontId) -> Self {
        self.style.value_font = font;
        self
    }

    /// Replace the whole style.
    pub fn style(mut self, style: LabeledTextStyle) -> Self {
        self.style = style;
        self
    }

    /// Show the row.
    pub fn show(self, ui: &mut Ui) -> Response {
        let style = self.style;
        ui.horizontal(|ui| {
            ui.set_min_height(sizing::ROW_HEIGHT);
            ui.label(
                RichText::new(self.label)
                    .font(style.label_font)
                    .color(style.label_color),
            );
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                ui.label(
                    RichText::new(self.value)
                        .font(style.value_font)
                        .color(style.value_color),
                );
            });
        })
        .response
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builders_return_modified_copy() {
        let base = LabeledText::new("Status", "Active");
        let styled = base
            .clone()
            .value_color(Color32::GREEN)
            .label_font(FontId::proportional(17.0));

        assert_eq!(base.style, LabeledTextStyle::default());
        assert_eq!(styled.style.value_color, Color32::GREEN);
        assert_eq!(styled.style.label_font.size, 17.0);
        assert_eq!(styled.style.label_color, theme::TEXT);
    }

    #[test]
    fn test_with_value_color() {
        let row = LabeledText::with_value_color("Subscription", "Premium", Color32::ORANGE);
        assert_eq!(row.style.value_color, Color32::ORANGE);
    }

    #[test]
    fn test_row_spans_width() {
        let ctx = egui::Context::default();
        let mut widths = (0.0, 0.0);
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                let available = ui.available_width();
                let response = LabeledText::new("Name", "John Doe").show(ui);
                widths = (available, response.rect.width());
            });
        });
        assert!((widths.0 - widths.1).abs() < 1.0);
    }
}
