use std::fs::Metadata;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use exam_core::model::{AnswerKey, Exam, ExamName, PageImage};
use tokio::fs::{DirEntry, ReadDir};

use crate::repository::{ExamCatalog, StorageError};

mod answer_key;

pub use answer_key::{ANSWER_KEY_FILE, parse_answer_key};

const PAGE_EXTENSIONS: [&str; 3] = ["png", "jpg", "jpeg"];

/// Catalog backed by a data directory: one subdirectory per exam, holding
/// page images and an optional `answer_key.json`.
#[derive(Debug, Clone)]
pub struct FsCatalog {
    root: PathBuf,
}

impl FsCatalog {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Exam names map to a single directory level; anything that could
    /// escape the root is treated as missing.
    fn exam_dir(&self, name: &ExamName) -> Result<PathBuf, StorageError> {
        let raw = name.as_str();
        if raw == "." || raw == ".." || raw.contains(['/', '\\']) {
            return Err(StorageError::NotFound);
        }
        Ok(self.root.join(raw))
    }
}

fn is_page_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            PAGE_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
}

/// Next directory entry; a failing read ends the scan with what was
/// collected so far.
async fn next_readable_entry(dir: &mut ReadDir, parent: &Path) -> Option<DirEntry> {
    match dir.next_entry().await {
        Ok(entry) => entry,
        Err(err) => {
            tracing::debug!(dir = %parent.display(), error = %err, "directory scan stopped early");
            None
        }
    }
}

/// Metadata with symlinks followed, or `None` if the entry cannot be read.
async fn entry_metadata(entry: &DirEntry) -> Option<Metadata> {
    let path = entry.path();
    match tokio::fs::metadata(&path).await {
        Ok(meta) => Some(meta),
        Err(err) => {
            tracing::debug!(path = %path.display(), error = %err, "skipping unreadable entry");
            None
        }
    }
}

#[async_trait]
impl ExamCatalog for FsCatalog {
    async fn list_exams(&self) -> Result<Vec<ExamName>, StorageError> {
        let mut dir = match tokio::fs::read_dir(&self.root).await {
            Ok(dir) => dir,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(root = %self.root.display(), "catalog directory missing");
                return Ok(Vec::new());
            }
            Err(err) => return Err(err.into()),
        };

        let mut names = Vec::new();
        while let Some(entry) = next_readable_entry(&mut dir, &self.root).await {
            if !entry_metadata(&entry).await.is_some_and(|meta| meta.is_dir()) {
                continue;
            }
            let Some(raw) = entry.file_name().to_str().map(str::to_owned) else {
                tracing::debug!(path = %entry.path().display(), "skipping non UTF-8 exam directory");
                continue;
            };
            if let Ok(name) = ExamName::new(raw) {
                names.push(name);
            }
        }
        names.sort();
        tracing::debug!(count = names.len(), "scanned exam catalog");
        Ok(names)
    }

    async fn load_exam(&self, name: &ExamName) -> Result<Exam, StorageError> {
        let exam_dir = self.exam_dir(name)?;
        let mut dir = tokio::fs::read_dir(&exam_dir).await?;

        let mut pages = Vec::new();
        while let Some(entry) = next_readable_entry(&mut dir, &exam_dir).await {
            let path = entry.path();
            if !is_page_image(&path) {
                continue;
            }
            if !entry_metadata(&entry).await.is_some_and(|meta| meta.is_file()) {
                continue;
            }
            if let Some(file_name) = entry.file_name().to_str() {
                pages.push(PageImage::new(file_name, path.clone()));
            }
        }

        tracing::debug!(exam = %name, pages = pages.len(), "loaded exam pages");
        Ok(Exam::new(name.clone(), pages))
    }

    async fn answer_key(&self, name: &ExamName) -> Result<Option<AnswerKey>, StorageError> {
        let path = self.exam_dir(name)?.join(ANSWER_KEY_FILE);
        let json = match tokio::fs::read_to_string(&path).await {
            Ok(json) => json,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };
        parse_answer_key(&json).map(Some)
    }
}
