//! Jekyll site discovery and directory scanning

use std::path::{Path, PathBuf};

use thiserror::Error;
use walkdir::WalkDir;

/// Marker file identifying a Jekyll site root.
pub const CONFIG_FILE: &str = "_config.yml";

/// Underscore directories that never hold authored content.
const RESERVED_DIRS: [&str; 5] = ["_site", "_sass", "_layouts", "_includes", "_data"];

/// Collections every site is offered even before their directories exist.
const DEFAULT_COLLECTIONS: [&str; 3] = ["drafts", "pages", "posts"];

/// Errors raised while resolving the site root
#[derive(Debug, Error)]
pub enum SiteError {
    /// The chosen directory does not contain `_config.yml`.
    #[error("no _config.yml found in {}", .0.display())]
    NotASiteRoot(PathBuf),
}

/// Check whether a directory is a Jekyll site root.
pub fn is_site_root(path: &Path) -> bool {
    path.join(CONFIG_FILE).is_file()
}

/// Accept a directory as site root, or reject it so the user can reselect.
pub fn validate_root(path: PathBuf) -> Result<PathBuf, SiteError> {
    if is_site_root(&path) {
        Ok(path)
    } else {
        Err(SiteError::NotASiteRoot(path))
    }
}

/// Walk from `start` upward looking for a directory with `_config.yml`.
pub fn find_root_from(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .find(|path| is_site_root(path))
        .map(Path::to_path_buf)
}

/// Detect a site root from the process working directory.
pub fn find_root() -> Option<PathBuf> {
    std::env::current_dir()
        .ok()
        .and_then(|cwd| find_root_from(&cwd))
}

/// Short display name for a site root.
pub fn site_name(root: &Path) -> String {
    root.file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| root.display().to_string())
}

/// Collections available in a site, without the underscore prefix.
///
/// The defaults (`drafts`, `pages`, `posts`) are always offered; every other
/// top-level `_<name>/` directory counts as a collection except the reserved
/// Jekyll machinery directories. Sorted and deduplicated.
pub fn collections(root: &Path) -> Vec<String> {
    let mut names: Vec<String> = DEFAULT_COLLECTIONS.iter().map(|s| s.to_string()).collect();

    if let Ok(entries) = std::fs::read_dir(root) {
        for entry in entries.flatten() {
            let path = entry.path();
            if !path.is_dir() {
                continue;
            }
            let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
                continue;
            };
            if RESERVED_DIRS.contains(&name) {
                continue;
            }
            if let Some(stripped) = name.strip_prefix('_') {
                if !stripped.is_empty() {
                    names.push(stripped.to_string());
                }
            }
        }
    }

    names.sort();
    names.dedup();
    names
}

/// Markdown files under a collection directory, sorted by path.
///
/// Recursive, because Jekyll allows nesting content in subdirectories
/// (`_posts/2024/…`). Missing directories yield an empty list.
pub fn markdown_entries(root: &Path, dir_name: &str) -> Vec<PathBuf> {
    let dir = root.join(dir_name);
    if !dir.is_dir() {
        return Vec::new();
    }

    let mut entries: Vec<PathBuf> = WalkDir::new(&dir)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file() && is_markdown(e.path()))
        .map(|e| e.path().to_path_buf())
        .collect();

    entries.sort();
    entries
}

/// Check if a path has a markdown extension
pub fn is_markdown(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext == "md" || ext == "markdown")
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn site_with_config() -> TempDir {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join(CONFIG_FILE), "title: Test Site\n").unwrap();
        temp
    }

    #[test]
    fn test_is_site_root() {
        let site = site_with_config();
        assert!(is_site_root(site.path()));

        let empty = TempDir::new().unwrap();
        assert!(!is_site_root(empty.path()));
    }

    #[test]
    fn test_validate_root_rejects_plain_directories() {
        let empty = TempDir::new().unwrap();
        let err = validate_root(empty.path().to_path_buf()).unwrap_err();
        assert!(err.to_string().contains("_config.yml"));
    }

    #[test]
    fn test_find_root_walks_upward() {
        let site = site_with_config();
        let nested = site.path().join("_posts").join("2024");
        std::fs::create_dir_all(&nested).unwrap();

        let found = find_root_from(&nested).unwrap();
        assert_eq!(found, site.path());
    }

    #[test]
    fn test_find_root_gives_up_outside_a_site() {
        let plain = TempDir::new().unwrap();
        assert_eq!(find_root_from(plain.path()), None);
    }

    #[test]
    fn test_collections_scan() {
        let site = site_with_config();
        for dir in ["_posts", "_projects", "_site", "_sass", "assets"] {
            std::fs::create_dir(site.path().join(dir)).unwrap();
        }
        // A file with an underscore name is not a collection
        std::fs::write(site.path().join("_notes"), "").unwrap();

        assert_eq!(
            collections(site.path()),
            vec!["drafts", "pages", "posts", "projects"]
        );
    }

    #[test]
    fn test_markdown_entries_recursive_and_sorted() {
        let site = site_with_config();
        let posts = site.path().join("_posts");
        std::fs::create_dir_all(posts.join("2024")).unwrap();
        std::fs::write(posts.join("b.md"), "").unwrap();
        std::fs::write(posts.join("a.md"), "").unwrap();
        std::fs::write(posts.join("2024").join("nested.md"), "").unwrap();
        std::fs::write(posts.join("notes.txt"), "").unwrap();

        let entries = markdown_entries(site.path(), "_posts");
        assert_eq!(
            entries,
            vec![
                posts.join("2024").join("nested.md"),
                posts.join("a.md"),
                posts.join("b.md"),
            ]
        );
    }

    #[test]
    fn test_markdown_entries_missing_dir() {
        let site = site_with_config();
        assert!(markdown_entries(site.path(), "_drafts").is_empty());
    }
}
