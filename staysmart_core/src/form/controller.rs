//! Form state machine for the demo-scheduling flow
//!
//! Holds the in-progress request, the selected date/time, and the submission
//! status. Transport is an injected trait so the controller can be driven
//! against the real endpoint or a test double.

use async_trait::async_trait;
use chrono::{Datelike, NaiveDate, Weekday};

use crate::models::{DemoRequest, TimeSlot};

pub const MISSING_SCHEDULE_MESSAGE: &str = "Please select a date and time for the demo";
pub const GENERIC_FAILURE_MESSAGE: &str = "Something went wrong";

/// Client-visible lifecycle of one submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionStatus {
    Idle,
    Submitting,
    Success,
    Error(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Email,
    Company,
    Phone,
    Message,
}

#[derive(Debug, Clone)]
pub enum SubmitError {
    /// The server answered with a non-success status; the payload message is
    /// shown to the user when present.
    Rejected(Option<String>),
    /// The request never got an answer.
    Network(String),
}

impl SubmitError {
    pub fn user_message(&self) -> String {
        match self {
            SubmitError::Rejected(Some(message)) => message.clone(),
            SubmitError::Rejected(None) | SubmitError::Network(_) => {
                GENERIC_FAILURE_MESSAGE.to_string()
            }
        }
    }
}

/// Transport seam for `FormController::submit`.
#[async_trait]
pub trait SubmitDemo {
    async fn submit(&self, request: &DemoRequest) -> Result<(), SubmitError>;
}

pub struct FormController {
    name: String,
    email: String,
    company: String,
    phone: String,
    message: String,
    date: Option<NaiveDate>,
    time: Option<TimeSlot>,
    status: SubmissionStatus,
    today: NaiveDate,
}

impl FormController {
    /// `today` anchors the past-date filter so callers (and tests) control
    /// the clock.
    pub fn new(today: NaiveDate) -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            company: String::new(),
            phone: String::new(),
            message: String::new(),
            date: None,
            time: None,
            status: SubmissionStatus::Idle,
            today,
        }
    }

    pub fn status(&self) -> &SubmissionStatus {
        &self.status
    }

    pub fn selected_date(&self) -> Option<NaiveDate> {
        self.date
    }

    pub fn selected_time(&self) -> Option<TimeSlot> {
        self.time
    }

    pub fn field(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Company => &self.company,
            FormField::Phone => &self.phone,
            FormField::Message => &self.message,
        }
    }

    /// The submit control is disabled while a request is in flight; that is
    /// the only in-flight guard, matching the UI.
    pub fn can_submit(&self) -> bool {
        self.status != SubmissionStatus::Submitting
    }

    pub fn update_field(&mut self, field: FormField, value: &str) {
        let slot = match field {
            FormField::Name => &mut self.name,
            FormField::Email => &mut self.email,
            FormField::Company => &mut self.company,
            FormField::Phone => &mut self.phone,
            FormField::Message => &mut self.message,
        };
        *slot = value.to_string();
    }

    /// Convenience filter only; the server accepts any parseable date.
    pub fn date_selectable(&self, date: NaiveDate) -> bool {
        date >= self.today && date.weekday() != Weekday::Sun
    }

    /// Returns false (leaving the selection unchanged) for past dates and
    /// Sundays.
    pub fn select_date(&mut self, date: NaiveDate) -> bool {
        if !self.date_selectable(date) {
            return false;
        }
        self.date = Some(date);
        true
    }

    pub fn select_time(&mut self, slot: TimeSlot) {
        self.time = Some(slot);
    }

    /// Dismisses a success or error banner.
    pub fn reset(&mut self) {
        if matches!(
            self.status,
            SubmissionStatus::Success | SubmissionStatus::Error(_)
        ) {
            self.status = SubmissionStatus::Idle;
        }
    }

    pub async fn submit<T: SubmitDemo + Sync>(&mut self, transport: &T) {
        if !self.can_submit() {
            return;
        }

        let (date, time) = match (self.date, self.time) {
            (Some(date), Some(time)) => (date, time),
            _ => {
                self.status = SubmissionStatus::Error(MISSING_SCHEDULE_MESSAGE.to_string());
                return;
            }
        };

        self.status = SubmissionStatus::Submitting;

        let request = DemoRequest {
            name: self.name.clone(),
            email: self.email.clone(),
            company: non_empty(&self.company),
            phone: non_empty(&self.phone),
            date,
            time,
            message: non_empty(&self.message),
        };

        match transport.submit(&request).await {
            Ok(()) => {
                self.clear_fields();
                self.status = SubmissionStatus::Success;
            }
            Err(err) => {
                self.status = SubmissionStatus::Error(err.user_message());
            }
        }
    }

    fn clear_fields(&mut self) {
        self.name.clear();
        self.email.clear();
        self.company.clear();
        self.phone.clear();
        self.message.clear();
        self.date = None;
        self.time = None;
    }
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
