//! Preview gallery for FormKit widgets (native).

mod gallery;

use gallery::{Gallery, GalleryConfig};

fn main() -> eframe::Result {
    env_logger::init();
    log::info!("Starting FormKit gallery");

    let config = GalleryConfig::default();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(config.title.clone())
            .with_inner_size([config.width, config.height])
            .with_min_inner_size([320.0, 400.0]),
        centered: true,
        ..Default::default()
    };

    let title = config.title.clone();
    eframe::run_native(
        &title,
        options,
        Box::new(|_cc| Ok(Box::new(Gallery::new(config)))),
    )
}
