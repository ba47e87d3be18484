//! Share sheet for a document written to a temporary file.

use std::path::PathBuf;

use egui::{Context, Id, RichText, Ui};
use formkit_core::SharePayload;

use crate::theme;

/// Presents a share sheet while `is_presented` is set.
///
/// The document is written to the temporary directory once per presentation;
/// the sheet then offers to save a copy elsewhere or copy the file's path.
/// Closing the sheet clears `is_presented`.
pub struct ShareFile<'a> {
    is_presented: &'a mut bool,
    payload: SharePayload,
    id: Id,
}

/// Outcome of writing the temporary file, kept for the presentation's lifetime.
#[derive(Clone)]
enum Prepared {
    Ready(PathBuf),
    Failed(String),
}

impl<'a> ShareFile<'a> {
    /// Create a share sheet for `document` under `filename`.
    pub fn new(is_presented: &'a mut bool, document: impl Into<Vec<u8>>, filename: &str) -> Self {
        Self {
            is_presented,
            payload: SharePayload::new(filename, document),
            id: Id::new(("formkit_share", filename.to_string())),
        }
    }

    /// Override the id used to remember the prepared file.
    pub fn id_salt(mut self, salt: impl std::hash::Hash) -> Self {
        self.id = Id::new(("formkit_share", salt));
        self
    }

    /// Show the sheet if presented.
    pub fn show(self, ctx: &Context) {
        let Self {
            is_presented,
            payload,
            id,
        } = self;

        if !*is_presented {
            ctx.data_mut(|d| d.remove::<Prepared>(id));
            return;
        }

        let prepared = ctx.data_mut(|d| d.get_temp::<Prepared>(id)).unwrap_or_else(|| {
            let prepared = prepare(&payload);
            ctx.data_mut(|d| d.insert_temp(id, prepared.clone()));
            prepared
        });

        let mut open = true;
        let mut close_requested = false;
        egui::Window::new("Share")
            .id(id.with("window"))
            .open(&mut open)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .show(ctx, |ui| {
                ui.label(RichText::new(payload.filename()).strong().color(theme::TEXT));
                ui.label(
                    RichText::new(format!("{} bytes", payload.document().len()))
                        .small()
                        .color(theme::TEXT_MUTED),
                );
                ui.add_space(8.0);

                match &prepared {
                    Prepared::Ready(path) => share_actions(ui, &payload, path),
                    Prepared::Failed(message) => {
                        ui.label(RichText::new(message).color(theme::ERROR));
                    }
                }

                ui.add_space(8.0);
                if ui.button("Close").clicked() {
                    close_requested = true;
                }
            });

        if !open || close_requested {
            *is_presented = false;
            ctx.data_mut(|d| d.remove::<Prepared>(id));
        }
    }
}

fn prepare(payload: &SharePayload) -> Prepared {
    match payload.write_temporary() {
        Ok(path) => Prepared::Ready(path),
        Err(e) => {
            log::error!("Failed to create temporary file: {}", e);
            Prepared::Failed(e.to_string())
        }
    }
}

#[cfg(feature = "native")]
fn share_actions(ui: &mut Ui, payload: &SharePayload, path: &std::path::Path) {
    ui.horizontal(|ui| {
        if ui.button("Save As…").clicked() {
            save_copy(payload, path);
        }
        if ui.button("Copy Path").clicked() {
            copy_path(path);
        }
    });
}

#[cfg(not(feature = "native"))]
fn share_actions(ui: &mut Ui, _payload: &SharePayload, path: &std::path::Path) {
    ui.label(RichText::new(path.display().to_string()).monospace().small());
}

#[cfg(feature = "native")]
fn save_copy(payload: &SharePayload, path: &std::path::Path) {
    let dialog = rfd::FileDialog::new().set_file_name(payload.filename());
    if let Some(target) = dialog.save_file() {
        match std::fs::copy(path, &target) {
            Ok(_) => log::info!("Saved shared file to: {:?}", target),
            Err(e) => log::error!("Failed to save shared file: {}", e),
        }
    }
}

#[cfg(feature = "native")]
fn copy_path(path: &std::path::Path) {
    match arboard::Clipboard::new() {
        Ok(mut clipboard) => {
            if let Err(e) = clipboard.set_text(path.display().to_string()) {
                log::error!("Failed to copy path to clipboard: {}", e);
            } else {
                log::info!("Copied share path to clipboard: {:?}", path);
            }
        }
        Err(e) => log::error!("Failed to access clipboard: {}", e),
    }
}
