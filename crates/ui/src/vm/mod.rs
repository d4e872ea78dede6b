mod exam_vm;
mod result_vm;
mod time_fmt;

pub use exam_vm::{AnswerButtonVm, ExamPageVm};
pub use result_vm::{ResultRowVm, ResultVm};
pub use time_fmt::{format_datetime, format_elapsed};
