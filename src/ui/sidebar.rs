//! Sidebar with site info, content actions, and recent files

use eframe::egui;

use crate::app::{ComposeApp, MainView};
use crate::core::content::ContentKind;
use crate::core::launcher::JekyllCommand;
use crate::core::site;

/// Left panel with site context and shortcuts
pub struct SidebarPanel;

impl SidebarPanel {
    /// Show the sidebar
    pub fn show(ui: &mut egui::Ui, app: &mut ComposeApp) {
        ui.vertical(|ui| {
            ui.heading("Site");
            match app.site_root.clone() {
                Some(root) => {
                    ui.label(site::site_name(&root));
                    ui.label(
                        egui::RichText::new(root.display().to_string())
                            .small()
                            .weak(),
                    );
                }
                None => {
                    ui.label("No site open");
                }
            }
            if ui.button("\u{1F4C2} Change Location").clicked() {
                app.change_site_root();
            }

            ui.separator();

            if ui.button("\u{270F} New Post").clicked() {
                app.start_compose(ContentKind::Post);
            }
            if ui.button("\u{1F4DD} New Draft").clicked() {
                app.start_compose(ContentKind::Draft);
            }
            if ui.button("\u{1F4C4} New Page").clicked() {
                app.start_compose(ContentKind::Page);
            }
            if ui.button("\u{1F4DA} Collection File").clicked() {
                app.start_compose(ContentKind::Collection(String::new()));
            }
            if ui.button("\u{1F680} Publish Draft").clicked() {
                app.start_publish();
            }
            if ui.button("\u{1F4E6} Unpublish Post").clicked() {
                app.start_unpublish();
            }

            ui.separator();

            if ui.button("\u{1F527} Build Site").clicked() {
                app.run_jekyll(JekyllCommand::Build);
            }
            if ui.button("\u{1F680} Serve Site").clicked() {
                app.run_jekyll(JekyllCommand::Serve);
            }

            ui.separator();

            egui::CollapsingHeader::new("Recent Files")
                .default_open(true)
                .show(ui, |ui| {
                    app.prune_recent();
                    // Clone first so clicks can mutate the app
                    let recents = app.settings.recent_files.clone();
                    if recents.is_empty() {
                        ui.label("Nothing yet");
                        return;
                    }
                    egui::ScrollArea::vertical()
                        .id_salt("recent_files_scroll")
                        .show(ui, |ui| {
                            for path in recents {
                                let Some(name) = path.file_name() else {
                                    continue;
                                };
                                let is_active = matches!(
                                    &app.view,
                                    MainView::Preview(file) if file.path == path
                                );
                                if ui
                                    .selectable_label(is_active, name.to_string_lossy())
                                    .clicked()
                                {
                                    app.open_preview(path.clone());
                                }
                            }
                        });
                });
        });
    }
}
