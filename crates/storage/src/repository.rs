use async_trait::async_trait;
use exam_core::model::{AnswerKey, Exam, ExamName, PageImage};
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};
use thiserror::Error;

use crate::fs::{FsCatalog, parse_answer_key};

/// Errors surfaced by catalog adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("not found")]
    NotFound,

    #[error("io error: {0}")]
    Io(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

impl From<std::io::Error> for StorageError {
    fn from(err: std::io::Error) -> Self {
        if err.kind() == std::io::ErrorKind::NotFound {
            StorageError::NotFound
        } else {
            StorageError::Io(err.to_string())
        }
    }
}

/// Read-only source of exams and their answer keys.
#[async_trait]
pub trait ExamCatalog: Send + Sync {
    /// Names of all exams, sorted ascending.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the catalog exists but cannot be read.
    async fn list_exams(&self) -> Result<Vec<ExamName>, StorageError>;

    /// Load an exam with its pages in file-name order.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::NotFound` if there is no such exam, or other
    /// storage errors.
    async fn load_exam(&self, name: &ExamName) -> Result<Exam, StorageError>;

    /// Fetch the answer key for an exam. `Ok(None)` means the exam ships
    /// without one.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Serialization` for a malformed key, or other
    /// storage errors.
    async fn answer_key(&self, name: &ExamName) -> Result<Option<AnswerKey>, StorageError>;
}

#[derive(Debug, Clone, Default)]
struct MemoryExam {
    pages: Vec<PageImage>,
    answer_key_json: Option<String>,
}

/// Simple in-memory catalog for testing and prototyping.
///
/// Answer keys are kept as raw JSON so malformed keys can be exercised.
#[derive(Clone, Default)]
pub struct InMemoryCatalog {
    exams: Arc<Mutex<BTreeMap<ExamName, MemoryExam>>>,
}

impl InMemoryCatalog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace an exam.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Io` if the catalog lock is poisoned.
    pub fn insert_exam(
        &self,
        name: ExamName,
        pages: Vec<PageImage>,
        answer_key_json: Option<String>,
    ) -> Result<(), StorageError> {
        let mut guard = self
            .exams
            .lock()
            .map_err(|e| StorageError::Io(e.to_string()))?;
        guard.insert(
            name,
            MemoryExam {
                pages,
                answer_key_json,
            },
        );
        Ok(())
    }

    fn get(&self, name: &ExamName) -> Result<MemoryExam, StorageError> {
        let guard = self
            .exams
            .lock()
            .map_err(|e| StorageError::Io(e.to_string()))?;
        guard.get(name).cloned().ok_or(StorageError::NotFound)
    }
}

#[async_trait]
impl ExamCatalog for InMemoryCatalog {
    async fn list_exams(&self) -> Result<Vec<ExamName>, StorageError> {
        let guard = self
            .exams
            .lock()
            .map_err(|e| StorageError::Io(e.to_string()))?;
        Ok(guard.keys().cloned().collect())
    }

    async fn load_exam(&self, name: &ExamName) -> Result<Exam, StorageError> {
        let exam = self.get(name)?;
        Ok(Exam::new(name.clone(), exam.pages))
    }

    async fn answer_key(&self, name: &ExamName) -> Result<Option<AnswerKey>, StorageError> {
        let exam = self.get(name)?;
        exam.answer_key_json
            .as_deref()
            .map(parse_answer_key)
            .transpose()
    }
}

/// Catalog handle shared by services and the UI.
#[derive(Clone)]
pub struct Storage {
    pub exams: Arc<dyn ExamCatalog>,
}

impl Storage {
    /// Catalog rooted at a data directory on disk.
    #[must_use]
    pub fn filesystem(root: impl Into<std::path::PathBuf>) -> Self {
        Self {
            exams: Arc::new(FsCatalog::new(root)),
        }
    }

    #[must_use]
    pub fn in_memory(catalog: InMemoryCatalog) -> Self {
        Self {
            exams: Arc::new(catalog),
        }
    }
}
