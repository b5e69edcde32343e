//! Moving drafts into `_posts` and posts back into `_drafts`.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use regex_lite::Regex;

use super::content::{slug_stem, ContentKind, FileResult, WriteOutcome, MARKDOWN_EXTENSION};
use super::front_matter;

/// Move a draft into `_posts`, dating both the file name and the front
/// matter.
///
/// The post is named `YYYY-MM-DD-<slug>.md` where the slug comes from the
/// draft's front-matter title, or from the draft's file stem when no title
/// is present. Returns [`WriteOutcome::Exists`] without touching anything
/// when the target already exists and `overwrite` is false.
pub fn publish(
    root: &Path,
    draft_path: &Path,
    date: NaiveDate,
    overwrite: bool,
) -> Result<WriteOutcome> {
    let content = std::fs::read_to_string(draft_path)
        .with_context(|| format!("Failed to read draft: {}", draft_path.display()))?;

    let title = front_matter::extract_title(&content).unwrap_or_else(|| file_stem(draft_path));
    let post_name = format!(
        "{}-{}.{}",
        date.format("%Y-%m-%d"),
        slug_stem(&title),
        MARKDOWN_EXTENSION
    );
    let post_path = root.join(ContentKind::Post.dir_name()).join(post_name);

    let replacing = post_path.exists();
    if replacing && !overwrite {
        return Ok(WriteOutcome::Exists(post_path));
    }

    let dated = front_matter::set_date(&content, date);
    if let Some(parent) = post_path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    std::fs::write(&post_path, &dated)
        .with_context(|| format!("Failed to create file: {}", post_path.display()))?;
    finish_move(draft_path, &post_path, replacing)?;

    tracing::info!("Published {} -> {}", draft_path.display(), post_path.display());
    Ok(WriteOutcome::Written(FileResult {
        path: post_path,
        content: dated,
    }))
}

/// Move a post back into `_drafts`, removing the date prefix from the file
/// name and the `date:` field from the front matter.
pub fn unpublish(root: &Path, post_path: &Path, overwrite: bool) -> Result<WriteOutcome> {
    let content = std::fs::read_to_string(post_path)
        .with_context(|| format!("Failed to read post: {}", post_path.display()))?;

    let post_name = post_path
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_default();
    let draft_path = root
        .join(ContentKind::Draft.dir_name())
        .join(strip_date_prefix(&post_name));

    let replacing = draft_path.exists();
    if replacing && !overwrite {
        return Ok(WriteOutcome::Exists(draft_path));
    }

    let undated = front_matter::strip_date(&content);
    if let Some(parent) = draft_path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    std::fs::write(&draft_path, &undated)
        .with_context(|| format!("Failed to create file: {}", draft_path.display()))?;
    finish_move(post_path, &draft_path, replacing)?;

    tracing::info!(
        "Unpublished {} -> {}",
        post_path.display(),
        draft_path.display()
    );
    Ok(WriteOutcome::Written(FileResult {
        path: draft_path,
        content: undated,
    }))
}

/// File name with a leading `YYYY-MM-DD-` date prefix removed.
///
/// Names without a full date prefix pass through unchanged, so hyphenated
/// slugs like `my-three-part-name.md` are never mangled.
pub fn strip_date_prefix(name: &str) -> &str {
    let re = Regex::new(r"^\d{4}-\d{2}-\d{2}-(.+)$").unwrap();
    re.captures(name)
        .and_then(|captures| captures.get(1))
        .map(|field| field.as_str())
        .unwrap_or(name)
}

/// Remove the source half of a move. If that fails, a freshly created
/// destination is backed out so the tree is left as it was; a destination
/// that overwrote an existing file stays put.
fn finish_move(src: &Path, dest: &Path, replaced_existing: bool) -> Result<()> {
    if let Err(err) = std::fs::remove_file(src) {
        if !replaced_existing {
            let _ = std::fs::remove_file(dest);
        }
        return Err(err).with_context(|| format!("Failed to remove {}", src.display()));
    }
    Ok(())
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().to_string())
        .unwrap_or_default()
}
