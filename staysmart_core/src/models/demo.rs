//! Demo-request payload and its validated domain form

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::validation::validate_email;

/// Demo slots offered on the contact page. The set is fixed; anything else
/// on the wire is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeSlot {
    #[serde(rename = "09:00 AM")]
    NineAm,
    #[serde(rename = "10:00 AM")]
    TenAm,
    #[serde(rename = "11:00 AM")]
    ElevenAm,
    #[serde(rename = "12:00 PM")]
    TwelvePm,
    #[serde(rename = "02:00 PM")]
    TwoPm,
    #[serde(rename = "03:00 PM")]
    ThreePm,
    #[serde(rename = "04:00 PM")]
    FourPm,
    #[serde(rename = "05:00 PM")]
    FivePm,
}

impl TimeSlot {
    pub const ALL: [TimeSlot; 8] = [
        TimeSlot::NineAm,
        TimeSlot::TenAm,
        TimeSlot::ElevenAm,
        TimeSlot::TwelvePm,
        TimeSlot::TwoPm,
        TimeSlot::ThreePm,
        TimeSlot::FourPm,
        TimeSlot::FivePm,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TimeSlot::NineAm => "09:00 AM",
            TimeSlot::TenAm => "10:00 AM",
            TimeSlot::ElevenAm => "11:00 AM",
            TimeSlot::TwelvePm => "12:00 PM",
            TimeSlot::TwoPm => "02:00 PM",
            TimeSlot::ThreePm => "03:00 PM",
            TimeSlot::FourPm => "04:00 PM",
            TimeSlot::FivePm => "05:00 PM",
        }
    }

    pub fn parse(value: &str) -> Option<TimeSlot> {
        TimeSlot::ALL.iter().copied().find(|slot| slot.as_str() == value)
    }
}

/// Raw request body as submitted by the contact form. Every field is optional
/// at this stage so that validation can answer with a field-specific message
/// instead of a serde rejection.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DemoRequestPayload {
    pub name: Option<String>,
    pub email: Option<String>,
    pub company: Option<String>,
    pub phone: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub message: Option<String>,
}

/// A demo request with typed date and time. Server-side construction goes
/// through `TryFrom<DemoRequestPayload>`, which guarantees a non-empty name,
/// a plausible email address, and an offered slot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DemoRequest {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub date: NaiveDate,
    pub time: TimeSlot,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

fn required(value: Option<String>, field: &str) -> Result<String, String> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v.trim().to_string()),
        _ => Err(format!("{} is required", field)),
    }
}

fn optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl TryFrom<DemoRequestPayload> for DemoRequest {
    type Error = String;

    fn try_from(payload: DemoRequestPayload) -> Result<Self, Self::Error> {
        let name = required(payload.name, "name")?;
        let email = required(payload.email, "email")?;
        let date = required(payload.date, "date")?;
        let time = required(payload.time, "time")?;

        validate_email(&email).map_err(|_| "Please provide a valid email address".to_string())?;

        let date = NaiveDate::parse_from_str(&date, "%Y-%m-%d")
            .map_err(|_| "date must be a valid YYYY-MM-DD date".to_string())?;

        let time = TimeSlot::parse(&time)
            .ok_or_else(|| "time must be one of the offered demo slots".to_string())?;

        Ok(DemoRequest {
            name,
            email,
            company: optional(payload.company),
            phone: optional(payload.phone),
            date,
            time,
            message: optional(payload.message),
        })
    }
}
