//! Compose form for new posts, drafts, pages and collection files

use chrono::NaiveDate;
use eframe::egui;

use crate::core::content::{ContentKind, ContentRequest};

/// What the user did with the form this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormAction {
    Submit,
    Cancel,
}

/// State of the central compose form.
pub struct ComposeForm {
    pub kind: ContentKind,
    pub title: String,
    pub date_text: String,
}

impl ComposeForm {
    /// Fresh form for a content kind; post dates start at today.
    pub fn new(kind: ContentKind, today: NaiveDate) -> Self {
        let date_text = if kind.is_dated() {
            today.format("%Y-%m-%d").to_string()
        } else {
            String::new()
        };
        Self {
            kind,
            title: String::new(),
            date_text,
        }
    }

    fn heading(&self) -> &'static str {
        match self.kind {
            ContentKind::Post => "Create New Post",
            ContentKind::Draft => "Create New Draft",
            ContentKind::Page => "Create New Page",
            ContentKind::Collection(_) => "Create Collection File",
        }
    }

    /// Validate the form and turn it into a creation request.
    pub fn to_request(&self) -> Result<ContentRequest, String> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err("A title is required".to_owned());
        }
        if let ContentKind::Collection(name) = &self.kind {
            if name.is_empty() {
                return Err("Choose a collection".to_owned());
            }
        }

        let date = if self.kind.is_dated() {
            let text = self.date_text.trim();
            if text.is_empty() {
                None
            } else {
                Some(
                    NaiveDate::parse_from_str(text, "%Y-%m-%d")
                        .map_err(|_| format!("Invalid date: {text} (expected YYYY-MM-DD)"))?,
                )
            }
        } else {
            None
        };

        Ok(ContentRequest {
            title: title.to_owned(),
            date,
            kind: self.kind.clone(),
        })
    }

    /// Render the form. Returns an action once a button was pressed.
    pub fn show(&mut self, ui: &mut egui::Ui, collections: &[String]) -> Option<FormAction> {
        let mut action = None;

        ui.heading(self.heading());
        ui.add_space(10.0);

        ui.horizontal(|ui| {
            ui.label("Title:");
            ui.text_edit_singleline(&mut self.title);
        });

        if self.kind.is_dated() {
            ui.horizontal(|ui| {
                ui.label("Date:");
                ui.add(egui::TextEdit::singleline(&mut self.date_text).hint_text("YYYY-MM-DD"));
            });
        }

        if let ContentKind::Collection(selected) = &mut self.kind {
            ui.horizontal(|ui| {
                ui.label("Collection:");
                egui::ComboBox::from_id_salt("collection_choice")
                    .selected_text(if selected.is_empty() {
                        "choose..."
                    } else {
                        selected.as_str()
                    })
                    .show_ui(ui, |ui| {
                        for name in collections {
                            ui.selectable_value(selected, name.clone(), name);
                        }
                    });
            });
        }

        ui.add_space(10.0);
        ui.horizontal(|ui| {
            if ui.button("Cancel").clicked() {
                action = Some(FormAction::Cancel);
            }
            if ui.button("Create").clicked() {
                action = Some(FormAction::Submit);
            }
        });

        action
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 7, 12).unwrap()
    }

    #[test]
    fn test_post_form_starts_with_today() {
        let form = ComposeForm::new(ContentKind::Post, today());
        assert_eq!(form.date_text, "2025-07-12");

        let form = ComposeForm::new(ContentKind::Page, today());
        assert_eq!(form.date_text, "");
    }

    #[test]
    fn test_blank_title_is_rejected() {
        let mut form = ComposeForm::new(ContentKind::Draft, today());
        assert!(form.to_request().is_err());

        form.title = "   ".to_owned();
        assert!(form.to_request().is_err());
    }

    #[test]
    fn test_post_form_parses_date_override() {
        let mut form = ComposeForm::new(ContentKind::Post, today());
        form.title = "My Awesome Post".to_owned();
        form.date_text = "2025-12-01".to_owned();

        let request = form.to_request().unwrap();
        assert_eq!(request.title, "My Awesome Post");
        assert_eq!(request.date, NaiveDate::from_ymd_opt(2025, 12, 1));
    }

    #[test]
    fn test_unparseable_date_is_rejected() {
        let mut form = ComposeForm::new(ContentKind::Post, today());
        form.title = "Anything".to_owned();
        form.date_text = "next tuesday".to_owned();
        assert!(form.to_request().is_err());
    }

    #[test]
    fn test_collection_form_requires_a_choice() {
        let mut form = ComposeForm::new(ContentKind::Collection(String::new()), today());
        form.title = "Team".to_owned();
        assert!(form.to_request().is_err());

        form.kind = ContentKind::Collection("authors".to_owned());
        let request = form.to_request().unwrap();
        assert_eq!(request.kind, ContentKind::Collection("authors".to_owned()));
        assert_eq!(request.date, None);
    }
}
