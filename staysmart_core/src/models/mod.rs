pub mod demo;
pub mod request;

pub use demo::{DemoRequest, DemoRequestPayload, TimeSlot};
pub use request::{ApiResponse, SubmissionResponse};
