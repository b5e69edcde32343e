//! Content requests, file naming and creation

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};

use super::front_matter;
use super::slug::slugify;

/// Extension given to created content files.
pub const MARKDOWN_EXTENSION: &str = "md";

/// Stem used when a title slugifies to nothing.
const FALLBACK_STEM: &str = "untitled";

/// What kind of content a request targets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentKind {
    Post,
    Draft,
    Page,
    Collection(String),
}

impl ContentKind {
    /// Directory the content lands in, relative to the site root.
    pub fn dir_name(&self) -> String {
        match self {
            ContentKind::Post => "_posts".to_string(),
            ContentKind::Draft => "_drafts".to_string(),
            ContentKind::Page => "_pages".to_string(),
            ContentKind::Collection(name) => format!("_{name}"),
        }
    }

    /// Label used in status messages and form headers.
    pub fn label(&self) -> &str {
        match self {
            ContentKind::Post => "Post",
            ContentKind::Draft => "Draft",
            ContentKind::Page => "Page",
            ContentKind::Collection(_) => "Collection file",
        }
    }

    /// Whether this kind carries a date in its file name and front matter.
    pub fn is_dated(&self) -> bool {
        matches!(self, ContentKind::Post)
    }
}

/// A single content-creation request, built from the compose form and
/// discarded after the write.
#[derive(Debug, Clone)]
pub struct ContentRequest {
    pub title: String,
    pub date: Option<NaiveDate>,
    pub kind: ContentKind,
}

/// A successfully written file.
#[derive(Debug, Clone)]
pub struct FileResult {
    pub path: PathBuf,
    pub content: String,
}

/// Outcome of a write that honors the overwrite prompt.
#[derive(Debug)]
pub enum WriteOutcome {
    /// The file was written.
    Written(FileResult),
    /// The target already exists and `overwrite` was not set; nothing was
    /// touched.
    Exists(PathBuf),
}

/// Slug for a title, falling back to a usable stem when the title is all
/// symbols.
pub(crate) fn slug_stem(title: &str) -> String {
    let stem = slugify(title);
    if stem.is_empty() {
        FALLBACK_STEM.to_string()
    } else {
        stem
    }
}

impl ContentRequest {
    /// File name the request resolves to: `YYYY-MM-DD-<slug>.md` for posts,
    /// `<slug>.md` for everything else.
    pub fn file_name(&self) -> String {
        let stem = slug_stem(&self.title);

        if self.kind.is_dated() {
            format!(
                "{}-{}.{}",
                self.effective_date().format("%Y-%m-%d"),
                stem,
                MARKDOWN_EXTENSION
            )
        } else {
            format!("{stem}.{MARKDOWN_EXTENSION}")
        }
    }

    /// Full target path inside the site.
    pub fn target_path(&self, root: &Path) -> PathBuf {
        root.join(self.kind.dir_name()).join(self.file_name())
    }

    /// Front matter written for this request.
    pub fn front_matter(&self) -> String {
        let date = self.kind.is_dated().then(|| self.effective_date());
        front_matter::render(&self.title, date)
    }

    /// The date override, else today.
    fn effective_date(&self) -> NaiveDate {
        self.date.unwrap_or_else(|| Local::now().date_naive())
    }

    /// Pin the effective date so file name and front matter cannot disagree
    /// across a midnight rollover.
    fn with_pinned_date(mut self) -> Self {
        if self.kind.is_dated() && self.date.is_none() {
            self.date = Some(Local::now().date_naive());
        }
        self
    }
}

/// Create the requested file under the site root.
///
/// The collection directory is created if needed. An existing target is left
/// untouched unless `overwrite` is set, so the caller can ask first.
pub fn create(root: &Path, request: &ContentRequest, overwrite: bool) -> Result<WriteOutcome> {
    let request = request.clone().with_pinned_date();
    let path = request.target_path(root);

    if path.exists() && !overwrite {
        return Ok(WriteOutcome::Exists(path));
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    let content = request.front_matter();
    std::fs::write(&path, &content)
        .with_context(|| format!("Failed to create file: {}", path.display()))?;

    tracing::info!("Created {}: {}", request.kind.label(), path.display());

    Ok(WriteOutcome::Written(FileResult { path, content }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn post(title: &str, day: Option<&str>) -> ContentRequest {
        ContentRequest {
            title: title.to_string(),
            date: day.map(date),
            kind: ContentKind::Post,
        }
    }

    #[test]
    fn test_post_file_name_with_override() {
        let request = post("My Awesome Post", Some("2025-07-12"));
        assert_eq!(request.file_name(), "2025-07-12-my-awesome-post.md");
    }

    #[test]
    fn test_post_file_name_defaults_to_today() {
        let request = post("Fresh Post", None);
        let today = Local::now().date_naive().format("%Y-%m-%d");
        assert_eq!(request.file_name(), format!("{}-fresh-post.md", today));
    }

    #[test]
    fn test_undated_kinds_have_plain_names() {
        let draft = ContentRequest {
            title: "Work In Progress".to_string(),
            date: None,
            kind: ContentKind::Draft,
        };
        assert_eq!(draft.file_name(), "work-in-progress.md");

        let page = ContentRequest {
            title: "About".to_string(),
            date: None,
            kind: ContentKind::Page,
        };
        assert_eq!(page.file_name(), "about.md");
    }

    #[test]
    fn test_collection_target_path() {
        let request = ContentRequest {
            title: "Side Project".to_string(),
            date: None,
            kind: ContentKind::Collection("projects".to_string()),
        };
        assert_eq!(
            request.target_path(Path::new("/site")),
            PathBuf::from("/site/_projects/side-project.md")
        );
    }

    #[test]
    fn test_symbol_only_title_falls_back() {
        let request = post("???", Some("2025-07-12"));
        assert_eq!(request.file_name(), "2025-07-12-untitled.md");
    }

    #[test]
    fn test_create_writes_expected_file() {
        let site = TempDir::new().unwrap();
        let request = post("My Awesome Post", Some("2025-07-12"));

        let outcome = create(site.path(), &request, false).unwrap();
        let WriteOutcome::Written(result) = outcome else {
            panic!("expected a write");
        };

        assert_eq!(
            result.path,
            site.path().join("_posts").join("2025-07-12-my-awesome-post.md")
        );
        let on_disk = std::fs::read_to_string(&result.path).unwrap();
        assert_eq!(on_disk, "---\ntitle: My Awesome Post\ndate: 2025-07-12\n---\n\n");
        assert_eq!(on_disk, result.content);
    }

    #[test]
    fn test_create_reports_collision_without_touching_the_file() {
        let site = TempDir::new().unwrap();
        let request = post("Taken", Some("2025-07-12"));

        create(site.path(), &request, false).unwrap();
        let path = request.target_path(site.path());
        std::fs::write(&path, "edited by hand\n").unwrap();

        let outcome = create(site.path(), &request, false).unwrap();
        assert!(matches!(outcome, WriteOutcome::Exists(p) if p == path));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "edited by hand\n");
    }

    #[test]
    fn test_create_with_overwrite_replaces() {
        let site = TempDir::new().unwrap();
        let request = post("Taken", Some("2025-07-12"));

        create(site.path(), &request, false).unwrap();
        let path = request.target_path(site.path());
        std::fs::write(&path, "stale\n").unwrap();

        let outcome = create(site.path(), &request, true).unwrap();
        assert!(matches!(outcome, WriteOutcome::Written(_)));
        assert!(std::fs::read_to_string(&path).unwrap().starts_with("---\n"));
    }
}
