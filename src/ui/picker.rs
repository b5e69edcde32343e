//! Modal dialogs: file selection for publish/unpublish, overwrite confirmation

use std::path::{Path, PathBuf};

use eframe::egui;

/// What a file picker is selecting for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerPurpose {
    Publish,
    Unpublish,
}

impl PickerPurpose {
    fn title(&self) -> &'static str {
        match self {
            PickerPurpose::Publish => "Select Draft to Publish",
            PickerPurpose::Unpublish => "Select Post to Unpublish",
        }
    }

    fn action_label(&self) -> &'static str {
        match self {
            PickerPurpose::Publish => "Publish",
            PickerPurpose::Unpublish => "Unpublish",
        }
    }
}

/// Outcome of a picker interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerOutcome {
    Chosen(PathBuf),
    Cancelled,
}

/// Modal list of files to publish or unpublish.
pub struct FilePicker {
    pub purpose: PickerPurpose,
    entries: Vec<PathBuf>,
    selected: Option<usize>,
}

impl FilePicker {
    pub fn new(purpose: PickerPurpose, entries: Vec<PathBuf>) -> Self {
        Self {
            purpose,
            entries,
            selected: None,
        }
    }

    /// Render the modal window. Returns an outcome once the user commits.
    pub fn show(&mut self, ctx: &egui::Context) -> Option<PickerOutcome> {
        let mut outcome = None;

        egui::Window::new(self.purpose.title())
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                ui.set_min_width(360.0);

                egui::ScrollArea::vertical()
                    .id_salt("picker_scroll")
                    .max_height(260.0)
                    .show(ui, |ui| {
                        for (index, path) in self.entries.iter().enumerate() {
                            let response =
                                ui.selectable_label(self.selected == Some(index), display_name(path));
                            if response.clicked() {
                                self.selected = Some(index);
                            }
                            if response.double_clicked() {
                                outcome = Some(PickerOutcome::Chosen(path.clone()));
                            }
                        }
                    });

                ui.separator();
                ui.horizontal(|ui| {
                    if ui.button("Cancel").clicked() {
                        outcome = Some(PickerOutcome::Cancelled);
                    }
                    let chosen = self.selected.and_then(|index| self.entries.get(index));
                    if ui
                        .add_enabled(
                            chosen.is_some(),
                            egui::Button::new(self.purpose.action_label()),
                        )
                        .clicked()
                    {
                        if let Some(path) = chosen {
                            outcome = Some(PickerOutcome::Chosen(path.clone()));
                        }
                    }
                });
            });

        outcome
    }
}

/// Modal confirmation before replacing an existing file.
pub struct OverwriteDialog;

impl OverwriteDialog {
    /// Render. `Some(true)` means overwrite, `Some(false)` keep the file.
    pub fn show(ctx: &egui::Context, target: &Path) -> Option<bool> {
        let mut decision = None;

        egui::Window::new("File Exists")
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                ui.label(format!(
                    "{} already exists. Overwrite it?",
                    display_name(target)
                ));
                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    if ui.button("Cancel").clicked() {
                        decision = Some(false);
                    }
                    if ui.button("Overwrite").clicked() {
                        decision = Some(true);
                    }
                });
            });

        decision
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}
