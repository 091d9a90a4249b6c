pub mod submission;
pub mod validation;

pub use submission::{use_submission, SubmissionState};
