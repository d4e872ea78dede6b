mod answer_key;
mod answer_sheet;
mod choice;
mod exam;
mod flow;
mod ids;
mod session;

pub use ids::{ExamName, ParseIdError, QUESTION_COUNT, QuestionNumber};

pub use answer_key::AnswerKey;
pub use answer_sheet::AnswerSheet;
pub use choice::{Choice, ChoiceError, sheet_value};
pub use exam::{Exam, PageImage};
pub use flow::{ExamFlow, FlowError, Modal, ModalResult, Screen, ScreenEvent};
pub use session::{ExamSession, SessionError};
