//! Outbound notification email: provider client, HTML template, and the
//! once-at-startup configured/unconfigured resolution.

pub mod client;
pub mod template;

pub use client::{EmailClient, EmailClientError};

use crate::config::EmailConfig;

/// Provider configuration resolved once at process start.
///
/// `Unconfigured` is the deliberate degraded mode: submissions are accepted
/// and logged, but no email is sent.
#[derive(Clone)]
pub enum Mailer {
    Configured(EmailClient),
    Unconfigured,
}

impl Mailer {
    pub fn from_config(config: &EmailConfig) -> Result<Self, EmailClientError> {
        if config.api_key.is_empty() {
            Ok(Mailer::Unconfigured)
        } else {
            Ok(Mailer::Configured(EmailClient::new(config)?))
        }
    }

    pub fn is_configured(&self) -> bool {
        matches!(self, Mailer::Configured(_))
    }

    pub fn mode(&self) -> &'static str {
        match self {
            Mailer::Configured(_) => "live",
            Mailer::Unconfigured => "degraded",
        }
    }
}
