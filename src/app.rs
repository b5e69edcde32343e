//! Main application state and UI coordination

use std::path::{Path, PathBuf};

use chrono::Local;
use eframe::egui;

use crate::core::config::Settings;
use crate::core::content::{self, ContentKind, ContentRequest, WriteOutcome};
use crate::core::launcher::{self, JekyllCommand};
use crate::core::publish;
use crate::core::site;
use crate::ui::forms::{ComposeForm, FormAction};
use crate::ui::picker::{FilePicker, OverwriteDialog, PickerOutcome, PickerPurpose};
use crate::ui::preview::{PreviewFile, PreviewPanel};
use crate::ui::sidebar::SidebarPanel;
use crate::ui::status::StatusBar;

/// What the central panel is showing
pub enum MainView {
    Welcome,
    Compose(ComposeForm),
    Preview(PreviewFile),
}

/// The operation to retry once overwriting is confirmed
pub enum OverwriteAction {
    Create(ContentRequest),
    Publish(PathBuf),
    Unpublish(PathBuf),
}

/// A write that hit an existing file and now waits on confirmation
pub struct PendingOverwrite {
    pub target: PathBuf,
    pub action: OverwriteAction,
}

/// Main application state
pub struct ComposeApp {
    /// Validated site root (contains `_config.yml`)
    pub site_root: Option<PathBuf>,
    /// Collection names available in the current site
    pub collections: Vec<String>,
    /// Central panel state
    pub view: MainView,
    /// Modal file picker for publish/unpublish
    pub picker: Option<FilePicker>,
    /// Write awaiting overwrite confirmation
    pub pending_overwrite: Option<PendingOverwrite>,
    /// Persisted settings
    pub settings: Settings,
    /// Bottom status bar
    pub status: StatusBar,
    /// Commonmark cache for preview
    pub commonmark_cache: egui_commonmark::CommonMarkCache,
}

impl ComposeApp {
    /// Create a new application instance
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        // Load settings or use defaults
        let settings = Settings::load().unwrap_or_default();

        let mut app = Self {
            site_root: None,
            collections: Vec::new(),
            view: MainView::Welcome,
            picker: None,
            pending_overwrite: None,
            settings,
            status: StatusBar::default(),
            commonmark_cache: egui_commonmark::CommonMarkCache::default(),
        };

        // Saved root first, then walk up from the working directory
        let saved = app.settings.site_root.clone();
        if let Some(root) = saved
            .filter(|root| site::is_site_root(root))
            .or_else(site::find_root)
        {
            app.set_site_root(root);
        }
        app
    }

    /// Point the app at a site root, refusing directories without `_config.yml`
    pub fn set_site_root(&mut self, root: PathBuf) {
        match site::validate_root(root) {
            Ok(root) => {
                self.collections = site::collections(&root);
                self.status
                    .success(format!("Loaded: {}", site::site_name(&root)));
                self.settings.site_root = Some(root.clone());
                self.site_root = Some(root);
                self.save_settings();
            }
            Err(err) => self.status.error(err.to_string()),
        }
    }

    /// Pick a new site root with the OS folder dialog
    pub fn change_site_root(&mut self) {
        if let Some(path) = rfd::FileDialog::new().pick_folder() {
            self.set_site_root(path);
        }
    }

    /// Switch the central panel to a compose form
    pub fn start_compose(&mut self, kind: ContentKind) {
        if self.site_root.is_none() {
            self.status.error("Open a Jekyll site first");
            return;
        }
        self.view = MainView::Compose(ComposeForm::new(kind, Local::now().date_naive()));
    }

    fn submit_compose(&mut self) {
        let MainView::Compose(form) = &self.view else {
            return;
        };
        match form.to_request() {
            Ok(request) => self.create_content(request, false),
            Err(message) => self.status.error(message),
        }
    }

    fn create_content(&mut self, request: ContentRequest, overwrite: bool) {
        let Some(root) = self.site_root.clone() else {
            self.status.error("Open a Jekyll site first");
            return;
        };
        match content::create(&root, &request, overwrite) {
            Ok(WriteOutcome::Written(result)) => {
                self.status
                    .success(format!("Created: {}", display_name(&result.path)));
                self.push_recent(result.path.clone());
                if self.settings.auto_open {
                    if let Err(err) = launcher::open_path(&result.path) {
                        self.status.error(format!("{err:#}"));
                    }
                }
                self.view = MainView::Welcome;
            }
            Ok(WriteOutcome::Exists(target)) => {
                self.pending_overwrite = Some(PendingOverwrite {
                    target,
                    action: OverwriteAction::Create(request),
                });
            }
            Err(err) => self.status.error(format!("{err:#}")),
        }
    }

    /// Open the draft picker
    pub fn start_publish(&mut self) {
        let Some(root) = self.site_root.clone() else {
            self.status.error("Open a Jekyll site first");
            return;
        };
        let entries = site::markdown_entries(&root, &ContentKind::Draft.dir_name());
        if entries.is_empty() {
            self.status.info("No drafts to publish");
        } else {
            self.picker = Some(FilePicker::new(PickerPurpose::Publish, entries));
        }
    }

    /// Open the post picker
    pub fn start_unpublish(&mut self) {
        let Some(root) = self.site_root.clone() else {
            self.status.error("Open a Jekyll site first");
            return;
        };
        let entries = site::markdown_entries(&root, &ContentKind::Post.dir_name());
        if entries.is_empty() {
            self.status.info("No posts to unpublish");
        } else {
            self.picker = Some(FilePicker::new(PickerPurpose::Unpublish, entries));
        }
    }

    fn finish_publish(&mut self, draft: PathBuf, overwrite: bool) {
        let Some(root) = self.site_root.clone() else {
            return;
        };
        match publish::publish(&root, &draft, Local::now().date_naive(), overwrite) {
            Ok(WriteOutcome::Written(result)) => {
                self.status
                    .success(format!("Published: {}", display_name(&result.path)));
                self.push_recent(result.path);
            }
            Ok(WriteOutcome::Exists(target)) => {
                self.pending_overwrite = Some(PendingOverwrite {
                    target,
                    action: OverwriteAction::Publish(draft),
                });
            }
            Err(err) => self.status.error(format!("{err:#}")),
        }
    }

    fn finish_unpublish(&mut self, post: PathBuf, overwrite: bool) {
        let Some(root) = self.site_root.clone() else {
            return;
        };
        match publish::unpublish(&root, &post, overwrite) {
            Ok(WriteOutcome::Written(result)) => {
                self.status
                    .success(format!("Unpublished: {}", display_name(&result.path)));
                self.push_recent(result.path);
            }
            Ok(WriteOutcome::Exists(target)) => {
                self.pending_overwrite = Some(PendingOverwrite {
                    target,
                    action: OverwriteAction::Unpublish(post),
                });
            }
            Err(err) => self.status.error(format!("{err:#}")),
        }
    }

    /// Load a file into the central preview
    pub fn open_preview(&mut self, path: PathBuf) {
        match std::fs::read_to_string(&path) {
            Ok(content) => self.view = MainView::Preview(PreviewFile { path, content }),
            Err(err) => self
                .status
                .error(format!("Failed to read {}: {err}", display_name(&path))),
        }
    }

    /// Hand a file to the OS default editor
    pub fn open_in_editor(&mut self, path: PathBuf) {
        match launcher::open_path(&path) {
            Ok(()) => {
                self.status
                    .info(format!("Opened: {}", display_name(&path)));
                self.push_recent(path);
            }
            Err(err) => self.status.error(format!("{err:#}")),
        }
    }

    /// Reveal the site root in the OS file browser
    pub fn open_site_folder(&mut self) {
        let Some(root) = self.site_root.clone() else {
            self.status.error("Open a Jekyll site first");
            return;
        };
        if let Err(err) = launcher::open_path(&root) {
            self.status.error(format!("{err:#}"));
        }
    }

    /// Launch a Jekyll build or serve in a new terminal
    pub fn run_jekyll(&mut self, command: JekyllCommand) {
        let Some(root) = self.site_root.clone() else {
            self.status.error("Open a Jekyll site first");
            return;
        };
        match launcher::run_in_terminal(&root, command) {
            Ok(()) => self
                .status
                .info(format!("Running: jekyll {}", command.subcommand())),
            Err(err) => self.status.error(err.to_string()),
        }
    }

    fn push_recent(&mut self, path: PathBuf) {
        self.settings.add_recent_file(path);
        self.save_settings();
    }

    /// Drop recent entries whose files no longer exist
    pub fn prune_recent(&mut self) {
        if self.settings.prune_recent_files() {
            self.save_settings();
        }
    }

    fn save_settings(&mut self) {
        if let Err(err) = self.settings.save() {
            tracing::error!("Failed to save settings: {err:#}");
        }
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("New Post").clicked() {
                        self.start_compose(ContentKind::Post);
                        ui.close();
                    }
                    if ui.button("New Draft").clicked() {
                        self.start_compose(ContentKind::Draft);
                        ui.close();
                    }
                    if ui.button("New Page").clicked() {
                        self.start_compose(ContentKind::Page);
                        ui.close();
                    }
                    if ui.button("New Collection File").clicked() {
                        self.start_compose(ContentKind::Collection(String::new()));
                        ui.close();
                    }
                    ui.separator();
                    if ui.button("Change Site Root...").clicked() {
                        self.change_site_root();
                        ui.close();
                    }
                    ui.separator();
                    if ui.button("Exit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });

                ui.menu_button("Site", |ui| {
                    if ui.button("Build").clicked() {
                        self.run_jekyll(JekyllCommand::Build);
                        ui.close();
                    }
                    if ui.button("Serve").clicked() {
                        self.run_jekyll(JekyllCommand::Serve);
                        ui.close();
                    }
                    ui.separator();
                    if ui.button("Open Site Folder").clicked() {
                        self.open_site_folder();
                        ui.close();
                    }
                    ui.separator();
                    if ui.button("Publish Draft...").clicked() {
                        self.start_publish();
                        ui.close();
                    }
                    if ui.button("Unpublish Post...").clicked() {
                        self.start_unpublish();
                        ui.close();
                    }
                });

                ui.menu_button("Settings", |ui| {
                    if ui
                        .checkbox(&mut self.settings.auto_open, "Auto-open created files")
                        .changed()
                    {
                        self.save_settings();
                    }
                });
            });
        });
    }

    /// Welcome screen with quick-start actions
    fn show_welcome(&mut self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.add_space(100.0);

            ui.heading("Welcome to Jekyll Compose");
            ui.add_space(20.0);

            ui.label("Create and manage your Jekyll content with ease.");
            ui.label("Choose an action from the sidebar to get started.");
            ui.add_space(20.0);

            if self.site_root.is_none() {
                ui.label("No Jekyll site is open yet.");
                ui.add_space(10.0);
                if ui.button("\u{1F4C2} Open Site Folder...").clicked() {
                    self.change_site_root();
                }
                return;
            }

            if ui.button("\u{270F} New Post").clicked() {
                self.start_compose(ContentKind::Post);
            }
            if ui.button("\u{1F4DD} New Draft").clicked() {
                self.start_compose(ContentKind::Draft);
            }
            ui.add_space(20.0);

            ui.label("Keyboard shortcuts:");
            ui.label("  Ctrl+N - New post");
            ui.label("  Ctrl+D - New draft");
        });
    }
}

impl eframe::App for ComposeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Handle keyboard shortcuts
        ctx.input(|i| {
            if i.modifiers.ctrl && i.key_pressed(egui::Key::N) {
                self.start_compose(ContentKind::Post);
            }
            if i.modifiers.ctrl && i.key_pressed(egui::Key::D) {
                self.start_compose(ContentKind::Draft);
            }
        });

        // Render menu bar
        self.render_menu_bar(ctx);

        // Render sidebar
        egui::SidePanel::left("sidebar")
            .resizable(true)
            .default_width(250.0)
            .min_width(200.0)
            .show(ctx, |ui| {
                SidebarPanel::show(ui, self);
            });

        // Render status bar
        let mut auto_open_toggled = false;
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            auto_open_toggled = self.status.show(ui, &mut self.settings);
        });
        if auto_open_toggled {
            self.save_settings();
        }

        // Render main content area
        egui::CentralPanel::default().show(ctx, |ui| {
            if matches!(self.view, MainView::Welcome) {
                self.show_welcome(ui);
                return;
            }

            let mut form_action = None;
            let mut open_request = None;
            match &mut self.view {
                MainView::Welcome => {}
                MainView::Compose(form) => {
                    form_action = form.show(ui, &self.collections);
                }
                MainView::Preview(file) => {
                    open_request = PreviewPanel::show(ui, file, &mut self.commonmark_cache);
                }
            }

            match form_action {
                Some(FormAction::Submit) => self.submit_compose(),
                Some(FormAction::Cancel) => self.view = MainView::Welcome,
                None => {}
            }
            if let Some(path) = open_request {
                self.open_in_editor(path);
            }
        });

        // Modal dialogs last so they draw over the panels
        let mut picker_outcome = None;
        if let Some(picker) = &mut self.picker {
            picker_outcome = picker.show(ctx);
        }
        if let Some(outcome) = picker_outcome {
            if let Some(picker) = self.picker.take() {
                if let PickerOutcome::Chosen(path) = outcome {
                    match picker.purpose {
                        PickerPurpose::Publish => self.finish_publish(path, false),
                        PickerPurpose::Unpublish => self.finish_unpublish(path, false),
                    }
                }
            }
        }

        let mut overwrite_decision = None;
        if let Some(prompt) = &self.pending_overwrite {
            overwrite_decision = OverwriteDialog::show(ctx, &prompt.target);
        }
        if let Some(confirmed) = overwrite_decision {
            if let Some(prompt) = self.pending_overwrite.take() {
                if confirmed {
                    match prompt.action {
                        OverwriteAction::Create(request) => self.create_content(request, true),
                        OverwriteAction::Publish(draft) => self.finish_publish(draft, true),
                        OverwriteAction::Unpublish(post) => self.finish_unpublish(post, true),
                    }
                }
            }
        }
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}
