use std::sync::Arc;

use exam_core::model::ExamName;
use services::ExamService;

pub trait UiApp: Send + Sync {
    /// Human-readable location of the exam catalog, shown on the home screen.
    fn catalog_label(&self) -> String;
    fn preselected_exam(&self) -> Option<ExamName>;

    fn exam_service(&self) -> Arc<ExamService>;
}

#[derive(Clone)]
pub struct AppContext {
    catalog_label: String,
    preselected_exam: Option<ExamName>,

    exam_service: Arc<ExamService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            catalog_label: app.catalog_label(),
            preselected_exam: app.preselected_exam(),
            exam_service: app.exam_service(),
        }
    }

    #[must_use]
    pub fn catalog_label(&self) -> &str {
        &self.catalog_label
    }

    #[must_use]
    pub fn preselected_exam(&self) -> Option<&ExamName> {
        self.preselected_exam.as_ref()
    }

    #[must_use]
    pub fn exam_service(&self) -> Arc<ExamService> {
        Arc::clone(&self.exam_service)
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
