//! Placeholder shown when a list has nothing to display.

use egui::{Align, Color32, Layout, Response, RichText, Ui};

use crate::theme;

/// Style configuration for [`EmptyState`].
#[derive(Clone, Debug)]
pub struct EmptyStateStyle {
    /// Icon glyph size
    pub icon_size: f32,
    /// Title size
    pub title_size: f32,
    /// Description size
    pub description_size: f32,
    /// Space between stacked items
    pub spacing: f32,
    /// Extra space below the icon
    pub icon_padding: f32,
    /// Space above and below the whole block
    pub vertical_padding: f32,
    /// Icon and description color
    pub muted_color: Color32,
    /// Title color
    pub title_color: Color32,
}

impl Default for EmptyStateStyle {
    fn default() -> Self {
        Self {
            icon_size: 50.0,
            title_size: 17.0,
            description_size: 13.0,
            spacing: 12.0,
            icon_padding: 8.0,
            vertical_padding: 40.0,
            muted_color: theme::TEXT_MUTED,
            title_color: theme::TEXT,
        }
    }
}

/// Icon, title and description stacked and centered across the full width.
pub struct EmptyState<'a> {
    title: &'a str,
    icon: &'a str,
    description: &'a str,
    style: EmptyStateStyle,
}

impl<'a> EmptyState<'a> {
    /// Create an empty state. `icon` is a single glyph such as `"📥"`.
    pub fn new(title: &'a str, icon: &'a str, description: &'a str) -> Self {
        Self {
            title,
            icon,
            description,
            style: EmptyStateStyle::default(),
        }
    }

    /// Set the style.
    pub fn style(mut self, style: EmptyStateStyle) -> Self {
        self.style = style;
        self
    }

    /// Show the placeholder.
    pub fn show(self, ui: &mut Ui) -> Response {
        let style = self.style;
        ui.allocate_ui_with_layout(
            egui::vec2(ui.available_width(), 0.0),
            Layout::top_down(Align::Center),
            |ui| {
                ui.set_min_width(ui.available_width());
                ui.add_space(style.vertical_padding);

                ui.label(
                    RichText::new(self.icon)
                        .size(style.icon_size)
                        .color(style.muted_color),
                );
                ui.add_space(style.icon_padding + style.spacing);

                ui.label(
                    RichText::new(self.title)
                        .size(style.title_size)
                        .strong()
                        .color(style.title_color),
                );
                ui.add_space(style.spacing);

                ui.add(
                    egui::Label::new(
                        RichText::new(self.description)
                            .size(style.description_size)
                            .color(style.muted_color),
                    )
                    .halign(Align::Center)
                    .wrap(),
                );

                ui.add_space(style.vertical_padding);
            },
        )
        .response
    }
}
