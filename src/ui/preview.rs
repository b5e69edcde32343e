//! Markdown preview panel using egui_commonmark

use std::path::PathBuf;

use eframe::egui;
use egui_commonmark::{CommonMarkCache, CommonMarkViewer};

use crate::core::front_matter;

/// A file loaded into the central preview.
pub struct PreviewFile {
    pub path: PathBuf,
    pub content: String,
}

/// Rendered-markdown view of a selected file
pub struct PreviewPanel;

impl PreviewPanel {
    /// Show the preview. Returns the path when "Open in Editor" was clicked.
    pub fn show(
        ui: &mut egui::Ui,
        file: &PreviewFile,
        cache: &mut CommonMarkCache,
    ) -> Option<PathBuf> {
        let mut open_request = None;

        ui.horizontal(|ui| {
            let name = file
                .path
                .file_name()
                .map(|name| name.to_string_lossy().to_string())
                .unwrap_or_else(|| file.path.display().to_string());
            ui.heading(name);
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("Open in Editor").clicked() {
                    open_request = Some(file.path.clone());
                }
            });
        });

        ui.separator();

        // Front matter stays out of the rendered output
        let body = front_matter::body(&file.content);
        egui::ScrollArea::vertical()
            .id_salt("preview_scroll")
            .show(ui, |ui| {
                if body.trim().is_empty() {
                    Self::show_empty(ui);
                } else {
                    CommonMarkViewer::new().show(ui, cache, body);
                }
            });

        open_request
    }

    /// Show empty state
    fn show_empty(ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.add_space(50.0);
            ui.label("Nothing to preview");
            ui.label("This file has no content below its front matter");
        });
    }
}
