//! Input validation rules shared by the handlers and domain types

pub mod rules;

pub use rules::*;
