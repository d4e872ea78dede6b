use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::model::{Exam, ExamSession, SessionError};

//
// ─── ERRORS ───────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum FlowError {
    #[error("cannot {event:?} from {from:?}")]
    InvalidTransition { from: Screen, event: ScreenEvent },

    #[error("a {0:?} dialog is already open")]
    ModalOpen(Modal),

    #[error("{modal:?} dialog is not available on {screen:?}")]
    ModalNotAllowed { modal: Modal, screen: Screen },

    #[error(transparent)]
    Session(#[from] SessionError),
}

//
// ─── SCREENS ──────────────────────────────────────────────────────────────────
//

/// Top-level screen the application is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Home,
    InExam,
    ReviewingResult,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenEvent {
    Start,
    Submit,
    ReturnToExam,
    ExitConfirmed,
}

impl Screen {
    /// Target screen for `event`, or `None` when the pair is not allowed.
    #[must_use]
    pub fn on(self, event: ScreenEvent) -> Option<Screen> {
        match (self, event) {
            (Screen::Home, ScreenEvent::Start) => Some(Screen::InExam),
            (Screen::InExam, ScreenEvent::Submit) => Some(Screen::ReviewingResult),
            (Screen::ReviewingResult, ScreenEvent::ReturnToExam) => Some(Screen::InExam),
            (Screen::InExam | Screen::ReviewingResult, ScreenEvent::ExitConfirmed) => {
                Some(Screen::Home)
            }
            _ => None,
        }
    }
}

//
// ─── MODALS ───────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modal {
    ConfirmExit,
    EditQuestion,
}

/// How the user closed a modal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalResult {
    /// Confirmed; carries the text field contents for input dialogs.
    Confirm(Option<String>),
    Cancel,
}

//
// ─── FLOW ─────────────────────────────────────────────────────────────────────
//

/// Application controller: the current screen, any open dialog, and the
/// single exam session they act on.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ExamFlow {
    screen: Screen,
    modal: Option<Modal>,
    session: ExamSession,
}

impl ExamFlow {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn screen(&self) -> Screen {
        self.screen
    }

    #[must_use]
    pub fn modal(&self) -> Option<Modal> {
        self.modal
    }

    #[must_use]
    pub fn session(&self) -> &ExamSession {
        &self.session
    }

    /// Mutable access for in-screen operations (navigation, answering).
    pub fn session_mut(&mut self) -> &mut ExamSession {
        &mut self.session
    }

    /// `Home -> InExam`. The session is only replaced when the exam has pages.
    ///
    /// # Errors
    ///
    /// Returns `FlowError::InvalidTransition` outside Home, or
    /// `FlowError::Session` when the exam cannot be started.
    pub fn start(&mut self, exam: &Exam, started_at: DateTime<Utc>) -> Result<(), FlowError> {
        let next = self.transition_target(ScreenEvent::Start)?;
        self.session.start_exam(exam, started_at)?;
        self.screen = next;
        Ok(())
    }

    /// `InExam -> ReviewingResult`.
    ///
    /// # Errors
    ///
    /// Returns `FlowError::InvalidTransition` outside the exam screen.
    pub fn submit(&mut self) -> Result<(), FlowError> {
        self.screen = self.transition_target(ScreenEvent::Submit)?;
        Ok(())
    }

    /// `ReviewingResult -> InExam`, keeping all answers.
    ///
    /// # Errors
    ///
    /// Returns `FlowError::InvalidTransition` outside the result screen.
    pub fn return_to_exam(&mut self) -> Result<(), FlowError> {
        self.screen = self.transition_target(ScreenEvent::ReturnToExam)?;
        Ok(())
    }

    /// Open a dialog on top of the current screen.
    ///
    /// # Errors
    ///
    /// Returns `FlowError::ModalOpen` if another dialog is showing, or
    /// `FlowError::ModalNotAllowed` if the dialog has no meaning on the
    /// current screen.
    pub fn open_modal(&mut self, modal: Modal) -> Result<(), FlowError> {
        if let Some(open) = self.modal {
            return Err(FlowError::ModalOpen(open));
        }
        let allowed = match modal {
            Modal::ConfirmExit => self.screen.on(ScreenEvent::ExitConfirmed).is_some(),
            Modal::EditQuestion => self.screen == Screen::InExam,
        };
        if !allowed {
            return Err(FlowError::ModalNotAllowed {
                modal,
                screen: self.screen,
            });
        }
        self.modal = Some(modal);
        Ok(())
    }

    /// Close the open dialog and apply its effect. Returns the dialog that was
    /// resolved, or `None` when nothing was open.
    pub fn resolve_modal(&mut self, result: ModalResult) -> Option<Modal> {
        let modal = self.modal.take()?;
        match (modal, result) {
            (Modal::ConfirmExit, ModalResult::Confirm(_)) => {
                if let Some(home) = self.screen.on(ScreenEvent::ExitConfirmed) {
                    self.session.reset();
                    self.screen = home;
                }
            }
            (Modal::EditQuestion, ModalResult::Confirm(Some(text))) => {
                self.session.set_current_question_from_input(&text);
            }
            (_, _) => {}
        }
        Some(modal)
    }

    fn transition_target(&self, event: ScreenEvent) -> Result<Screen, FlowError> {
        if let Some(open) = self.modal {
            return Err(FlowError::ModalOpen(open));
        }
        self.screen.on(event).ok_or(FlowError::InvalidTransition {
            from: self.screen,
            event,
        })
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
