//! Application settings management

use std::path::PathBuf;

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

/// How many entries the recent-files list keeps.
pub const RECENT_FILES_CAP: usize = 20;

/// Persisted application settings.
///
/// A single flat JSON object, flushed to disk after every mutation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    /// Open created files with the OS default handler
    pub auto_open: bool,
    /// Jekyll site root (the directory holding `_config.yml`)
    pub site_root: Option<PathBuf>,
    /// Recently touched content files, most recent first
    pub recent_files: Vec<PathBuf>,
}

impl Settings {
    /// Get the settings file path
    fn settings_path() -> Option<PathBuf> {
        ProjectDirs::from("com", "jekyllcompose", "Jekyll Compose")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load settings from disk
    pub fn load() -> Result<Self> {
        let path = Self::settings_path()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path)?;
        let settings: Self = serde_json::from_str(&content)?;
        Ok(settings)
    }

    /// Save settings to disk
    pub fn save(&self) -> Result<()> {
        let path = Self::settings_path()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

        // Ensure config directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&path, content)?;

        tracing::info!("Saved settings to: {}", path.display());
        Ok(())
    }

    /// Push a file onto the recent list, most recent first.
    pub fn add_recent_file(&mut self, path: PathBuf) {
        // Remove if already present
        self.recent_files.retain(|p| p != &path);
        // Add to front
        self.recent_files.insert(0, path);
        // Keep the list bounded
        self.recent_files.truncate(RECENT_FILES_CAP);
    }

    /// Drop recent entries whose files no longer exist.
    pub fn prune_recent_files(&mut self) -> bool {
        let before = self.recent_files.len();
        self.recent_files.retain(|p| p.exists());
        self.recent_files.len() != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_recent_files_most_recent_first() {
        let mut settings = Settings::default();
        settings.add_recent_file(PathBuf::from("/site/_posts/a.md"));
        settings.add_recent_file(PathBuf::from("/site/_posts/b.md"));
        settings.add_recent_file(PathBuf::from("/site/_posts/c.md"));

        assert_eq!(
            settings.recent_files,
            vec![
                PathBuf::from("/site/_posts/c.md"),
                PathBuf::from("/site/_posts/b.md"),
                PathBuf::from("/site/_posts/a.md"),
            ]
        );
    }

    #[test]
    fn test_recent_files_reinsert_moves_to_front() {
        let mut settings = Settings::default();
        settings.add_recent_file(PathBuf::from("/a.md"));
        settings.add_recent_file(PathBuf::from("/b.md"));
        settings.add_recent_file(PathBuf::from("/a.md"));

        assert_eq!(
            settings.recent_files,
            vec![PathBuf::from("/a.md"), PathBuf::from("/b.md")]
        );
    }

    #[test]
    fn test_recent_files_stay_bounded() {
        let mut settings = Settings::default();
        for i in 0..(RECENT_FILES_CAP + 15) {
            settings.add_recent_file(PathBuf::from(format!("/posts/{}.md", i)));
        }

        assert_eq!(settings.recent_files.len(), RECENT_FILES_CAP);
        // The newest insertion is still at the front
        assert_eq!(
            settings.recent_files[0],
            PathBuf::from(format!("/posts/{}.md", RECENT_FILES_CAP + 14))
        );
    }

    #[test]
    fn test_prune_recent_files_drops_missing_entries() {
        let temp = TempDir::new().unwrap();
        let kept = temp.path().join("kept.md");
        let gone = temp.path().join("gone.md");
        std::fs::write(&kept, "x").unwrap();
        std::fs::write(&gone, "x").unwrap();

        let mut settings = Settings::default();
        settings.add_recent_file(kept.clone());
        settings.add_recent_file(gone.clone());
        std::fs::remove_file(&gone).unwrap();

        assert!(settings.prune_recent_files());
        assert_eq!(settings.recent_files, vec![kept]);
        // Nothing left to drop on a second pass
        assert!(!settings.prune_recent_files());
    }

    #[test]
    fn test_settings_round_trip_through_json() {
        let mut settings = Settings {
            auto_open: true,
            site_root: Some(PathBuf::from("/home/me/blog")),
            recent_files: Vec::new(),
        };
        settings.add_recent_file(PathBuf::from("/home/me/blog/_posts/x.md"));

        let json = serde_json::to_string(&settings).unwrap();
        let reloaded: Settings = serde_json::from_str(&json).unwrap();

        assert!(reloaded.auto_open);
        assert_eq!(reloaded.site_root, settings.site_root);
        assert_eq!(reloaded.recent_files, settings.recent_files);
    }
}
