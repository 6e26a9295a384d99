//! Client-side controller for the "schedule a demo" form

pub mod controller;
pub mod http;

pub use controller::{FormController, FormField, SubmissionStatus, SubmitDemo, SubmitError};
pub use http::HttpSubmitter;
