//! Request extractors.

pub mod application_id;
pub mod submission;
pub use application_id::ApplicationId;
pub use submission::{FormSubmission, Submission};
