use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use log::{info, warn};

use crate::model::export::ExportDocument;
use crate::repository::traits::ExportRepository;

const DEFAULT_DIR_NAME: &str = ".moodboard";
const DEFAULT_FILE_NAME: &str = "entries.json";
const MOOD_MIN: i32 = 1;
const MOOD_MAX: i32 = 100;

/// Directory the exporter writes into by default (`~/.moodboard`).
pub fn default_data_dir() -> Result<PathBuf> {
    let home_dir = dirs::home_dir()
        .ok_or_else(|| anyhow!("Could not determine home directory"))?;
    Ok(home_dir.join(DEFAULT_DIR_NAME))
}

#[derive(Clone, Debug)]
pub struct FileExportRepository {
    file_path: PathBuf,
}

impl FileExportRepository {
    /// Uses `file_path` as given, or `~/.moodboard/entries.json` when `None`.
    ///
    /// The export belongs to the tool that produced it, so unlike a data
    /// store nothing is created here; a missing file surfaces on `load`.
    pub fn new(file_path: Option<PathBuf>) -> Result<Self> {
        let file_path = match file_path {
            Some(path) => path,
            None => default_data_dir()?.join(DEFAULT_FILE_NAME),
        };
        Ok(FileExportRepository { file_path })
    }

    pub fn path(&self) -> &Path {
        &self.file_path
    }
}

impl ExportRepository for FileExportRepository {
    fn load(&self) -> Result<ExportDocument> {
        let file = File::open(&self.file_path)
            .with_context(|| format!("Failed to open export file {}", self.file_path.display()))?;
        let reader = BufReader::new(file);
        let document: ExportDocument = serde_json::from_reader(reader)
            .with_context(|| format!("Failed to parse export file {}", self.file_path.display()))?;

        let out_of_range = document.entries.iter()
            .filter(|e| e.mood < MOOD_MIN || e.mood > MOOD_MAX)
            .count();
        if out_of_range > 0 {
            warn!(
                "{} entries in {} have moods outside {}..={}; the chart will clamp them",
                out_of_range,
                self.file_path.display(),
                MOOD_MIN,
                MOOD_MAX
            );
        }
        info!(
            "Loaded {} entries from {} (generated {})",
            document.entries.len(),
            self.file_path.display(),
            document.meta.generated_at
        );
        Ok(document)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_load_reads_entries() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("entries.json");
        fs::write(
            &path,
            r#"{"meta":{"generated_at":"2026-01-05T00:00:00+00:00","days":7},
                "entries":[{"date":"2026-01-05","mood":180,"note":"great"}]}"#,
        )
        .unwrap();

        let repo = FileExportRepository::new(Some(path.clone())).unwrap();
        assert_eq!(repo.path(), path.as_path());
        let doc = repo.load().unwrap();
        assert_eq!(doc.entries.len(), 1);
        assert_eq!(doc.entries[0].mood, 180);
    }

    #[test]
    fn test_missing_file_names_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nope.json");
        let repo = FileExportRepository::new(Some(path)).unwrap();
        let err = repo.load().unwrap_err();
        assert!(format!("{}", err).contains("nope.json"));
    }

    #[test]
    fn test_malformed_json_fails() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("entries.json");
        fs::write(&path, "{ not json").unwrap();
        let repo = FileExportRepository::new(Some(path)).unwrap();
        assert!(repo.load().is_err());
    }

    #[test]
    fn test_default_path_lives_under_home() {
        if dirs::home_dir().is_none() {
            return;
        }
        let repo = FileExportRepository::new(None).unwrap();
        assert!(repo.path().ends_with(".moodboard/entries.json"));
    }
}
