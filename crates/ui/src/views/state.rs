use dioxus::prelude::*;
use services::ExamServiceError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewError {
    Unknown,
    ExamNotFound,
    NoPages,
}

impl ViewError {
    #[must_use]
    pub fn from_service(err: &ExamServiceError) -> Self {
        match err {
            ExamServiceError::NotFound(_) => ViewError::ExamNotFound,
            ExamServiceError::NoPages(_) => ViewError::NoPages,
            _ => ViewError::Unknown,
        }
    }

    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            ViewError::Unknown => "Something went wrong. Please try again.",
            ViewError::ExamNotFound => "That exam is no longer in the catalog.",
            ViewError::NoPages => "That exam has no page images.",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ViewState<T> {
    Idle,
    Loading,
    Ready(T),
    Error(ViewError),
}

#[must_use]
pub fn view_state_from_resource<T: Clone>(
    resource: &Resource<Result<T, ViewError>>,
) -> ViewState<T> {
    match resource.state().cloned() {
        UseResourceState::Pending => ViewState::Loading,
        UseResourceState::Ready => match resource.value().read().as_ref() {
            Some(Ok(data)) => ViewState::Ready(data.clone()),
            Some(Err(err)) => ViewState::Error(*err),
            None => ViewState::Error(ViewError::Unknown),
        },
        UseResourceState::Paused | UseResourceState::Stopped => ViewState::Idle,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use exam_core::model::ExamName;

    #[test]
    fn service_errors_map_to_messages() {
        let name = ExamName::new("mock").unwrap();
        let not_found = ViewError::from_service(&ExamServiceError::NotFound(name.clone()));
        assert_eq!(not_found, ViewError::ExamNotFound);
        assert_eq!(
            ViewError::from_service(&ExamServiceError::NoPages(name)),
            ViewError::NoPages
        );
        assert!(ViewError::Unknown.message().starts_with("Something went wrong"));
    }
}
