use std::path::{Path, PathBuf};

use crate::model::ids::{ExamName, QUESTION_COUNT};

/// A single scanned page of an exam booklet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageImage {
    file_name: String,
    path: PathBuf,
}

impl PageImage {
    #[must_use]
    pub fn new(file_name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            file_name: file_name.into(),
            path: path.into(),
        }
    }

    #[must_use]
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Location the image can be loaded from.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// An exam as discovered in the catalog. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exam {
    name: ExamName,
    pages: Vec<PageImage>,
}

impl Exam {
    /// Builds an exam, ordering pages by file name.
    #[must_use]
    pub fn new(name: ExamName, mut pages: Vec<PageImage>) -> Self {
        pages.sort_by(|a, b| a.file_name.cmp(&b.file_name));
        Self { name, pages }
    }

    #[must_use]
    pub fn name(&self) -> &ExamName {
        &self.name
    }

    #[must_use]
    pub fn pages(&self) -> &[PageImage] {
        &self.pages
    }

    #[must_use]
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    #[must_use]
    pub fn has_pages(&self) -> bool {
        !self.pages.is_empty()
    }

    #[must_use]
    pub fn question_count(&self) -> u8 {
        QUESTION_COUNT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pages_sorted_by_file_name() {
        let exam = Exam::new(
            ExamName::new("mock").unwrap(),
            vec![
                PageImage::new("p10.png", "/x/p10.png"),
                PageImage::new("p02.png", "/x/p02.png"),
                PageImage::new("p01.png", "/x/p01.png"),
            ],
        );
        let names: Vec<&str> = exam.pages().iter().map(PageImage::file_name).collect();
        assert_eq!(names, ["p01.png", "p02.png", "p10.png"]);
        assert_eq!(exam.question_count(), 50);
    }

    #[test]
    fn sort_is_lexicographic_not_numeric() {
        let exam = Exam::new(
            ExamName::new("mock").unwrap(),
            vec![
                PageImage::new("10.png", "/x/10.png"),
                PageImage::new("9.png", "/x/9.png"),
            ],
        );
        assert_eq!(exam.pages()[0].file_name(), "10.png");
    }
}
