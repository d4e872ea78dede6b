#![forbid(unsafe_code)]

pub mod error;
pub mod exam_service;

pub use exam_core::Clock;

pub use error::ExamServiceError;
pub use exam_service::{ExamService, GradedExam};
