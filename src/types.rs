use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct NotificationRequest {
    pub to: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

impl NotificationRequest {
    pub fn new(to: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            to: to.into(),
            message: message.into(),
            language: None,
        }
    }

    pub fn with_language(mut self, language: Option<String>) -> Self {
        self.language = language;
        self
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Sms,
    #[value(name = "whatsapp")]
    WhatsApp,
}

impl Channel {
    pub fn path(self) -> &'static str {
        match self {
            Self::Sms => "/api/sms/send",
            Self::WhatsApp => "/api/whatsapp/send",
        }
    }

    pub fn default_message(self) -> &'static str {
        match self {
            Self::Sms => "Hello from GramCare SMS!",
            Self::WhatsApp => "Hello from GramCare WhatsApp!",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sms => f.write_str("sms"),
            Self::WhatsApp => f.write_str("whatsapp"),
        }
    }
}

/// A request that reached the server and came back with a JSON body.
/// Error statuses land here too.
#[derive(Debug, Clone, PartialEq)]
pub struct DispatchOutcome {
    pub status: u16,
    pub body: Value,
}

impl DispatchOutcome {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HealthReport {
    pub status: u16,
    pub body: Option<Value>,
}
