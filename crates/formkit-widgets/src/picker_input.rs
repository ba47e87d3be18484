//! Free-text row with a dropdown of suggested values.

use std::fmt::Display;

use egui::{Align, Layout, Response, RichText, TextEdit, Ui};
use formkit_core::{display_label, picker_choices, PickerChoice};

use crate::{sizing, theme};

/// A label, a trailing text field and a dropdown that fills the field.
///
/// The dropdown starts with an `<empty>` entry that clears the text, followed
/// by one entry per option.
pub struct PickerInput<'a, V> {
    label: &'a str,
    text: &'a mut String,
    options: &'a [V],
    to_label: Box<dyn Fn(&V) -> String + 'a>,
    placeholder: &'a str,
}

impl<'a, V: Display> PickerInput<'a, V> {
    /// Create a picker labelling options with their `Display` output.
    pub fn new(label: &'a str, text: &'a mut String, options: &'a [V]) -> Self {
        Self::with_labels(label, text, options, display_label)
    }
}

impl<'a, V> PickerInput<'a, V> {
    /// Create a picker with a custom option label.
    pub fn with_labels(
        label: &'a str,
        text: &'a mut String,
        options: &'a [V],
        to_label: impl Fn(&V) -> String + 'a,
    ) -> Self {
        Self {
            label,
            text,
            options,
            to_label: Box::new(to_label),
            placeholder: "",
        }
    }

    /// Set the hint shown while the field is empty.
    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = placeholder;
        self
    }

    /// Dropdown entries in display order.
    pub fn choices(&self) -> Vec<PickerChoice> {
        picker_choices(self.options, &self.to_label)
    }

    /// Show the row. Returns the text field's response, marked changed when a
    /// dropdown entry replaced the text.
    pub fn show(self, ui: &mut Ui) -> Response {
        let choices = self.choices();
        let Self {
            label,
            text,
            placeholder,
            ..
        } = self;

        ui.horizontal(|ui| {
            ui.set_min_height(sizing::ROW_HEIGHT);
            ui.label(label);
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                let picked = ui
                    .menu_button(
                        RichText::new(theme::CHEVRON).small().color(theme::TEXT_MUTED),
                        |ui| {
                            ui.set_min_width(sizing::MENU_MIN_WIDTH);
                            let mut picked = None;
                            for choice in &choices {
                                if ui.button(choice.label()).clicked() {
                                    picked = Some(choice.clone());
                                    ui.close();
                                }
                            }
                            picked
                        },
                    )
                    .inner
                    .flatten();

                let mut response = ui.add(
                    TextEdit::singleline(text)
                        .hint_text(placeholder)
                        .horizontal_align(Align::Max)
                        .min_size(egui::vec2(sizing::FIELD_MIN_WIDTH, 0.0)),
                );

                if let Some(choice) = picked {
                    log::debug!("Picker {:?} chose {:?}", label, choice.label());
                    apply_choice(ui, &mut response, text, &choice);
                }
                response
            })
            .inner
        })
        .inner
    }
}

/// Write a picked choice into the bound text. The field was already drawn with
/// the old text this frame, so another pass is requested.
fn apply_choice(ui: &Ui, response: &mut Response, text: &mut String, choice: &PickerChoice) {
    choice.apply(text);
    response.mark_changed();
    ui.ctx().request_repaint();
}
