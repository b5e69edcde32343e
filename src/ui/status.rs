//! Bottom status bar with auto-clearing messages

use std::time::{Duration, Instant};

use eframe::egui;

use crate::core::config::Settings;

/// How long a message stays up before the bar returns to Ready.
const CLEAR_AFTER: Duration = Duration::from_secs(3);

/// Kind of the current message, drawn as a colored dot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusKind {
    #[default]
    Ready,
    Info,
    Success,
    Error,
}

impl StatusKind {
    fn color(&self) -> egui::Color32 {
        match self {
            StatusKind::Ready => egui::Color32::from_rgb(100, 116, 139),
            StatusKind::Info => egui::Color32::from_rgb(37, 99, 235),
            StatusKind::Success => egui::Color32::from_rgb(16, 185, 129),
            StatusKind::Error => egui::Color32::from_rgb(239, 68, 68),
        }
    }
}

/// Status bar state
pub struct StatusBar {
    message: String,
    kind: StatusKind,
    shown_at: Option<Instant>,
}

impl Default for StatusBar {
    fn default() -> Self {
        Self {
            message: "Ready".to_owned(),
            kind: StatusKind::Ready,
            shown_at: None,
        }
    }
}

impl StatusBar {
    pub fn info(&mut self, message: impl Into<String>) {
        self.set(StatusKind::Info, message.into());
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.set(StatusKind::Success, message.into());
    }

    /// Show a failure. All surfaced errors pass through here, so this is
    /// also where they reach the log.
    pub fn error(&mut self, message: impl Into<String>) {
        let message = message.into();
        tracing::error!("{message}");
        self.set(StatusKind::Error, message);
    }

    fn set(&mut self, kind: StatusKind, message: String) {
        self.kind = kind;
        self.message = message;
        self.shown_at = Some(Instant::now());
    }

    /// Reset to Ready once the display window has passed.
    fn tick(&mut self) {
        if let Some(shown_at) = self.shown_at {
            if shown_at.elapsed() >= CLEAR_AFTER {
                self.message = "Ready".to_owned();
                self.kind = StatusKind::Ready;
                self.shown_at = None;
            }
        }
    }

    /// Render into the bottom panel. Returns true when the auto-open
    /// checkbox changed so the caller can persist settings.
    pub fn show(&mut self, ui: &mut egui::Ui, settings: &mut Settings) -> bool {
        self.tick();
        if let Some(shown_at) = self.shown_at {
            // Wake up again so the message clears without further input
            ui.ctx()
                .request_repaint_after(CLEAR_AFTER.saturating_sub(shown_at.elapsed()));
        }

        let mut changed = false;
        ui.horizontal(|ui| {
            ui.colored_label(self.kind.color(), "\u{25CF}");
            ui.label(&self.message);
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui
                    .checkbox(&mut settings.auto_open, "Auto-open created files")
                    .changed()
                {
                    changed = true;
                }
            });
        });
        changed
    }
}
