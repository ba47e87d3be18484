//! Multi-selection dropdown and its tagged option rows.
//!
//! The picker owns the caller's `Vec<V>` for one frame and hands its content
//! closure a [`SelectionContext`]. Any [`MultiPickerTag`] shown with that
//! context toggles its own tag in the selection; the picker never wires a
//! callback per option.
//!
//! ```ignore
//! MultiPicker::new("Days", &mut days).show(ui, |ui, ctx| {
//!     for day in Weekday::ALL {
//!         MultiPickerTag::new(day).show(ui, ctx, |ui| ui.label(day.to_string()));
//!     }
//! });
//! ```

use std::fmt::Display;

use egui::{
    Align, CornerRadius, CursorIcon, InnerResponse, Layout, Response, RichText, Sense, Shape, Ui,
};
use formkit_core::{
    display_label, selection_summary, OptionToggle, SelectionBinding, SelectionContext,
    SelectionValue,
};

use crate::{sizing, theme};

/// Result of showing a [`MultiPicker`].
pub struct MultiPickerResponse<R> {
    /// Response of the collapsed trigger; marked changed when the selection changed.
    pub response: Response,
    /// Value returned by the content closure, if the dropdown was open.
    pub inner: Option<R>,
    /// Whether any option toggled during this frame.
    pub changed: bool,
}

/// A labeled dropdown showing a summary of the selection when collapsed.
pub struct MultiPicker<'a, V> {
    label: &'a str,
    selection: &'a mut Vec<V>,
    to_label: Box<dyn Fn(&V) -> String + 'a>,
}

impl<'a, V: SelectionValue + Display> MultiPicker<'a, V> {
    /// Create a picker summarizing the selection with `Display`.
    pub fn new(label: &'a str, selection: &'a mut Vec<V>) -> Self {
        Self::with_labels(label, selection, display_label)
    }
}

impl<'a, V: SelectionValue> MultiPicker<'a, V> {
    /// Create a picker with a custom label for each selected value.
    pub fn with_labels(
        label: &'a str,
        selection: &'a mut Vec<V>,
        to_label: impl Fn(&V) -> String + 'a,
    ) -> Self {
        Self {
            label,
            selection,
            to_label: Box::new(to_label),
        }
    }

    /// Text shown in the collapsed state.
    pub fn summary(&self) -> String {
        selection_summary(self.selection.as_slice(), &self.to_label)
    }

    /// Show the picker. `add_contents` runs while the dropdown is open and
    /// receives the context its options toggle against.
    pub fn show<R>(
        self,
        ui: &mut Ui,
        add_contents: impl FnOnce(&mut Ui, SelectionContext<'_>) -> R,
    ) -> MultiPickerResponse<R> {
        let summary = self.summary();
        let Self {
            label, selection, ..
        } = self;

        let binding = SelectionBinding::new(selection);
        let ctx = SelectionContext::empty().set(&binding);

        let menu = ui
            .horizontal(|ui| {
                ui.set_min_height(sizing::ROW_HEIGHT);
                ui.label(RichText::new(label).color(theme::TEXT));
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    let trigger = RichText::new(format!("{} {}", summary, theme::CHEVRON))
                        .color(theme::TEXT_MUTED);
                    ui.menu_button(trigger, |ui| {
                        ui.set_min_width(sizing::MENU_MIN_WIDTH);
                        add_contents(ui, ctx)
                    })
                })
                .inner
            })
            .inner;

        let changed = binding.changed();
        let mut response = menu.response;
        if changed {
            log::debug!("{:?} selection changed ({} writes)", label, binding.writes());
            response.mark_changed();
            ui.ctx().request_repaint();
        }

        MultiPickerResponse {
            response,
            inner: menu.inner,
            changed,
        }
    }
}

/// An option row tagged with a selection value.
///
/// Inside a [`MultiPicker`] the row is clickable and shows a checkmark when its
/// tag is selected. With an empty context it renders the content unchanged.
pub struct MultiPickerTag<V> {
    toggle: OptionToggle<V>,
}

impl<V: SelectionValue> MultiPickerTag<V> {
    /// Create an option row for `tag`.
    pub fn new(tag: V) -> Self {
        Self {
            toggle: OptionToggle::new(tag),
        }
    }

    /// Show the row. The response is marked changed when a click toggled the tag.
    pub fn show<R>(
        self,
        ui: &mut Ui,
        ctx: SelectionContext<'_>,
        add_contents: impl FnOnce(&mut Ui) -> R,
    ) -> InnerResponse<R> {
        let state = self.toggle.state(&ctx);
        if !state.is_interactive() {
            return ui.scope(add_contents);
        }

        let background = ui.painter().add(Shape::Noop);
        let row = ui.horizontal(|ui| {
            ui.set_min_height(sizing::OPTION_HEIGHT);
            let inner = add_contents(ui);
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                if state.is_selected() {
                    ui.label(RichText::new(theme::CHECKMARK).color(theme::ACCENT));
                }
            });
            inner
        });

        let rect = row.response.rect;
        let mut response = ui
            .interact(rect, row.response.id.with("multi_picker_tag"), Sense::click())
            .on_hover_cursor(CursorIcon::PointingHand);

        if response.hovered() {
            ui.painter().set(
                background,
                Shape::rect_filled(rect, CornerRadius::same(sizing::CORNER_RADIUS), theme::HOVER_BG),
            );
        }

        if response.clicked() && self.toggle.activate(&ctx).is_some() {
            response.mark_changed();
            ui.ctx().request_repaint();
        }

        InnerResponse::new(row.inner, response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::{Event, Modifiers, PointerButton, Pos2, RawInput};

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    enum Day {
        Mon,
        Tue,
    }

    impl Display for Day {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            match self {
                Day::Mon => write!(f, "Monday"),
                Day::Tue => write!(f, "Tuesday"),
            }
        }
    }

    fn run_frame(ctx: &egui::Context, input: RawInput, mut add: impl FnMut(&mut Ui)) {
        let _ = ctx.run(input, |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| add(ui));
        });
    }

    fn button_event(pos: Pos2, pressed: bool) -> Event {
        Event::PointerButton {
            pos,
            button: PointerButton::Primary,
            pressed,
            modifiers: Modifiers::NONE,
        }
    }

    #[test]
    fn test_summary() {
        let mut empty: Vec<Day> = Vec::new();
        assert_eq!(MultiPicker::new("Days", &mut empty).summary(), "<empty>");

        let mut days = vec![Day::Tue, Day::Mon];
        assert_eq!(MultiPicker::new("Days", &mut days).summary(), "Tuesday, Monday");

        let short = MultiPicker::with_labels("Days", &mut days, |d| format!("{d:?}"));
        assert_eq!(short.summary(), "Tue, Mon");
    }

    #[test]
    fn test_closed_picker_does_not_run_contents() {
        let ctx = egui::Context::default();
        let mut days = vec![Day::Mon];
        let mut ran = false;
        run_frame(&ctx, RawInput::default(), |ui| {
            let result = MultiPicker::new("Days", &mut days).show(ui, |_, _| ran = true);
            assert!(result.inner.is_none());
            assert!(!result.changed);
        });
        assert!(!ran);
        assert_eq!(days, vec![Day::Mon]);
    }

    #[test]
    fn test_tag_without_container_is_passthrough() {
        let ctx = egui::Context::default();
        let mut rendered = false;
        run_frame(&ctx, RawInput::default(), |ui| {
            let row = MultiPickerTag::new(Day::Mon).show(ui, SelectionContext::empty(), |ui| {
                rendered = true;
                ui.label("Monday");
            });
            assert!(!row.response.changed());
        });
        assert!(rendered);
    }

    #[test]
    fn test_click_toggles_tag_in_container() {
        let ctx = egui::Context::default();
        let mut days = vec![Day::Mon];
        let mut rect = egui::Rect::NOTHING;

        let frame = |input: RawInput, days: &mut Vec<Day>, rect: &mut egui::Rect| {
            run_frame(&ctx, input, |ui| {
                let binding = SelectionBinding::new(&mut *days);
                let selection = SelectionContext::empty().set(&binding);
                let row = MultiPickerTag::new(Day::Tue).show(ui, selection, |ui| {
                    ui.label("Tuesday");
                });
                *rect = row.response.rect;
            });
        };

        frame(RawInput::default(), &mut days, &mut rect);
        let pos = rect.center();

        let mut press = RawInput::default();
        press.events = vec![Event::PointerMoved(pos), button_event(pos, true)];
        frame(press, &mut days, &mut rect);

        let mut release = RawInput::default();
        release.events = vec![button_event(pos, false)];
        frame(release, &mut days, &mut rect);

        assert_eq!(days, vec![Day::Mon, Day::Tue]);
    }

    /// One frame of a "Days" picker offering Tuesday. Records the trigger and
    /// option rects and returns whether the selection changed.
    fn picker_frame(
        ctx: &egui::Context,
        input: RawInput,
        days: &mut Vec<Day>,
        rects: &mut (egui::Rect, egui::Rect),
    ) -> bool {
        let mut changed = false;
        run_frame(ctx, input, |ui| {
            let result = MultiPicker::new("Days", &mut *days).show(ui, |ui, selection| {
                MultiPickerTag::new(Day::Tue)
                    .show(ui, selection, |ui| {
                        ui.label("Tuesday");
                    })
                    .response
                    .rect
            });
            rects.0 = result.response.rect;
            if let Some(option) = result.inner {
                rects.1 = option;
            }
            if result.changed {
                assert!(result.response.changed());
                changed = true;
            }
        });
        changed
    }

    fn click(pos: Pos2) -> [RawInput; 2] {
        let mut press = RawInput::default();
        press.events = vec![Event::PointerMoved(pos), button_event(pos, true)];
        let mut release = RawInput::default();
        release.events = vec![button_event(pos, false)];
        [press, release]
    }

    #[test]
    fn test_open_picker_toggles_tag_and_reports_change() {
        let ctx = egui::Context::default();
        let mut days = vec![Day::Mon];
        let mut rects = (egui::Rect::NOTHING, egui::Rect::NOTHING);

        assert!(!picker_frame(&ctx, RawInput::default(), &mut days, &mut rects));
        for input in click(rects.0.center()) {
            assert!(!picker_frame(&ctx, input, &mut days, &mut rects));
        }
        assert!(!picker_frame(&ctx, RawInput::default(), &mut days, &mut rects));
        assert!(rects.1.is_positive(), "dropdown contents were not shown");

        let mut changed = false;
        for input in click(rects.1.center()) {
            changed |= picker_frame(&ctx, input, &mut days, &mut rects);
        }

        assert!(changed);
        assert_eq!(days, vec![Day::Mon, Day::Tue]);
    }
}
