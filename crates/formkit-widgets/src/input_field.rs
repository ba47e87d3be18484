//! Text and number input rows.

use egui::{Align, Id, Layout, Response, TextEdit, Ui};
use formkit_core::NumberDraft;

use crate::sizing;

enum InputBinding<'a> {
    Text(&'a mut String),
    Number(&'a mut i64),
}

/// A label on the left and a trailing-aligned single-line field on the right.
pub struct InputField<'a> {
    label: &'a str,
    placeholder: &'a str,
    id_salt: Id,
    binding: InputBinding<'a>,
}

impl<'a> InputField<'a> {
    /// Row editing free text.
    pub fn text(label: &'a str, text: &'a mut String) -> Self {
        Self {
            label,
            placeholder: "",
            id_salt: Id::new(label),
            binding: InputBinding::Text(text),
        }
    }

    /// Row editing a whole number.
    ///
    /// The value changes when the field loses focus or Enter is pressed; text
    /// that is not a number reverts to the previous value.
    pub fn number(label: &'a str, value: &'a mut i64) -> Self {
        Self {
            label,
            placeholder: "",
            id_salt: Id::new(label),
            binding: InputBinding::Number(value),
        }
    }

    /// Set the hint shown while the field is empty.
    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = placeholder;
        self
    }

    /// Override the id the number draft is stored under. Defaults to the label;
    /// rows sharing a label under one parent need distinct salts.
    pub fn id_salt(mut self, salt: impl std::hash::Hash) -> Self {
        self.id_salt = Id::new(salt);
        self
    }

    /// Show the row and return the field's response.
    ///
    /// For number rows `changed()` is also set on the frame a commit changes
    /// the bound value.
    pub fn show(self, ui: &mut Ui) -> Response {
        let label = self.label;
        let placeholder = self.placeholder;
        let mut binding = self.binding;
        let draft_id = number_draft_id(ui.id(), self.id_salt);

        ui.horizontal(|ui| {
            ui.set_min_height(sizing::ROW_HEIGHT);
            ui.label(label);
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| match &mut binding {
                InputBinding::Text(text) => text_field(ui, placeholder, text),
                InputBinding::Number(value) => number_field(ui, draft_id, placeholder, value),
            })
            .inner
        })
        .inner
    }
}

fn trailing_edit<'t>(text: &'t mut dyn egui::TextBuffer, placeholder: &str) -> TextEdit<'t> {
    TextEdit::singleline(text)
        .hint_text(placeholder)
        .horizontal_align(Align::Max)
        .min_size(egui::vec2(sizing::FIELD_MIN_WIDTH, 0.0))
}

fn text_field(ui: &mut Ui, placeholder: &str, text: &mut String) -> Response {
    ui.add(trailing_edit(text, placeholder))
}

fn number_draft_id(parent: Id, salt: Id) -> Id {
    parent.with(("formkit_number_draft", salt))
}

fn number_field(ui: &mut Ui, draft_id: Id, placeholder: &str, value: &mut i64) -> Response {
    let mut draft = ui
        .data_mut(|d| d.get_temp::<NumberDraft>(draft_id))
        .unwrap_or_else(|| NumberDraft::new(*value));

    let editing = ui.memory(|m| m.has_focus(draft_id.with("edit")));
    draft.sync(*value, editing);

    let mut response = ui.add(trailing_edit(draft.text_mut(), placeholder).id(draft_id.with("edit")));

    if response.lost_focus() {
        if let Some(parsed) = draft.commit() {
            if parsed != *value {
                *value = parsed;
                response.mark_changed();
            }
        }
    }

    ui.data_mut(|d| d.insert_temp(draft_id, draft));
    response
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_frame(ctx: &egui::Context, mut add: impl FnMut(&mut Ui)) {
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| add(ui));
        });
    }

    #[test]
    fn test_text_row_leaves_value_untouched_without_input() {
        let ctx = egui::Context::default();
        let mut text = "hello".to_string();
        run_frame(&ctx, |ui| {
            let response = InputField::text("Greeting", &mut text)
                .placeholder("Say something")
                .show(ui);
            assert!(!response.changed());
        });
        assert_eq!(text, "hello");
    }

    #[test]
    fn test_number_row_keeps_draft_between_frames() {
        let ctx = egui::Context::default();
        let mut value = 12;
        for _ in 0..2 {
            run_frame(&ctx, |ui| {
                let response = InputField::number("Count", &mut value).show(ui);
                assert!(!response.changed());
            });
        }
        assert_eq!(value, 12);
    }

    #[test]
    fn test_number_row_picks_up_external_change() {
        let ctx = egui::Context::default();
        let mut value = 1;
        run_frame(&ctx, |ui| {
            InputField::number("Count", &mut value).show(ui);
        });

        value = 7;
        let mut shown = String::new();
        run_frame(&ctx, |ui| {
            InputField::number("Count", &mut value).show(ui);
            let draft_id = number_draft_id(ui.id(), Id::new("Count"));
            if let Some(draft) = ui.data_mut(|d| d.get_temp::<NumberDraft>(draft_id)) {
                shown = draft.text().to_string();
            }
        });
        assert_eq!(shown, "7");
    }

    #[test]
    fn test_same_label_rows_with_salts_keep_separate_drafts() {
        let ctx = egui::Context::default();
        let mut first = 3;
        let mut second = 9;
        let mut shown = (String::new(), String::new());
        for _ in 0..2 {
            run_frame(&ctx, |ui| {
                InputField::number("Qty", &mut first).id_salt("row-1").show(ui);
                InputField::number("Qty", &mut second).id_salt("row-2").show(ui);
                let read = |salt: &str| {
                    ui.data_mut(|d| d.get_temp::<NumberDraft>(number_draft_id(ui.id(), Id::new(salt))))
                        .map(|draft| draft.text().to_string())
                        .unwrap_or_default()
                };
                shown = (read("row-1"), read("row-2"));
            });
        }
        assert_eq!(shown, ("3".to_string(), "9".to_string()));
        assert_eq!((first, second), (3, 9));
    }
}
