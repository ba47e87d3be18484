//! Gallery state and layout.

use std::fmt;

use egui::{Color32, FontId, ScrollArea};
use formkit_widgets::{
    theme, EmptyState, InputField, LabeledText, MultiPicker, MultiPickerTag, PickerInput,
    ShareFile,
};

/// Gallery window configuration.
#[derive(Debug, Clone)]
pub struct GalleryConfig {
    pub title: String,
    pub width: f32,
    pub height: f32,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            title: "FormKit Gallery".to_string(),
            width: 420.0,
            height: 720.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Weekday {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
    Sun,
}

impl Weekday {
    pub const ALL: [Weekday; 7] = [
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
        Weekday::Sat,
        Weekday::Sun,
    ];
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Weekday::Mon => "Monday",
            Weekday::Tue => "Tuesday",
            Weekday::Wed => "Wednesday",
            Weekday::Thu => "Thursday",
            Weekday::Fri => "Friday",
            Weekday::Sat => "Saturday",
            Weekday::Sun => "Sunday",
        };
        f.write_str(name)
    }
}

const CITIES: [&str; 4] = ["Berlin", "Lisbon", "Osaka", "Toronto"];

const FRUITS: [&str; 4] = ["Apple", "Banana", "Cherry", "Durian"];

/// Gallery application.
pub struct Gallery {
    config: GalleryConfig,
    name: String,
    age: i64,
    city: String,
    days: Vec<Weekday>,
    fruits: Vec<String>,
    share_presented: bool,
}

impl Gallery {
    pub fn new(config: GalleryConfig) -> Self {
        Self {
            config,
            name: "John Doe".to_string(),
            age: 32,
            city: String::new(),
            days: vec![Weekday::Mon, Weekday::Fri],
            fruits: Vec::new(),
            share_presented: false,
        }
    }

    /// The form contents as CSV, used as the shared document.
    pub fn export_csv(&self) -> String {
        let days: Vec<String> = self.days.iter().map(|d| d.to_string()).collect();
        format!(
            "name,age,city,days,fruits\n{},{},{},{},{}\n",
            self.name,
            self.age,
            self.city,
            days.join(";"),
            self.fruits.join(";")
        )
    }

    fn section(ui: &mut egui::Ui, title: &str) {
        ui.add_space(12.0);
        ui.label(egui::RichText::new(title).size(10.0).color(theme::TEXT_MUTED));
        ui.separator();
    }
}

impl eframe::App for Gallery {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading(&self.config.title);
            ScrollArea::vertical().show(ui, |ui| {
                Self::section(ui, "LABELED TEXT");
                LabeledText::new("Name", &self.name).show(ui);
                LabeledText::new("Email", "john.doe@example.com")
                    .label_color(theme::TEXT_MUTED)
                    .value_color(theme::ACCENT)
                    .show(ui);
                LabeledText::with_value_color("Status", "Active", Color32::from_rgb(22, 163, 74))
                    .label_font(FontId::proportional(16.0))
                    .show(ui);
                LabeledText::new("Subscription", "Premium")
                    .label_font(FontId::proportional(11.0))
                    .value_font(FontId::proportional(11.0))
                    .value_color(Color32::from_rgb(249, 115, 22))
                    .show(ui);

                Self::section(ui, "INPUT");
                InputField::text("Name", &mut self.name)
                    .placeholder("Full name")
                    .show(ui);
                InputField::number("Age", &mut self.age)
                    .placeholder("Years")
                    .show(ui);
                PickerInput::new("City", &mut self.city, &CITIES)
                    .placeholder("Type or pick")
                    .show(ui);

                Self::section(ui, "MULTI PICKER");
                MultiPicker::new("Days", &mut self.days).show(ui, |ui, selection| {
                    for day in Weekday::ALL {
                        MultiPickerTag::new(day).show(ui, selection, |ui| {
                            ui.label(day.to_string());
                        });
                    }
                });
                MultiPicker::with_labels("Fruits", &mut self.fruits, |f| f.to_uppercase()).show(
                    ui,
                    |ui, selection| {
                        for fruit in FRUITS {
                            MultiPickerTag::new(fruit.to_string()).show(ui, selection, |ui| {
                                ui.label(fruit);
                            });
                        }
                    },
                );

                Self::section(ui, "SHARE");
                if ui.button("Share as CSV").clicked() {
                    self.share_presented = true;
                }

                Self::section(ui, "EMPTY STATE");
                EmptyState::new(
                    "No Items",
                    "📥",
                    "There are no items to display. Try adding some new items.",
                )
                .show(ui);
            });
        });

        let document = self.export_csv();
        ShareFile::new(&mut self.share_presented, document, "form.csv").show(ctx);
    }
}
