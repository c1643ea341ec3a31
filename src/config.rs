use std::time::Duration;

use anyhow::{anyhow, bail, Context};
use clap::Parser;
use reqwest::Url;

use crate::types::{Channel, NotificationRequest};

pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";
pub const DEFAULT_RECIPIENT: &str = "+918822459141";

/// Sends a test notification through the GramCare SMS and WhatsApp endpoints.
#[derive(Parser, Debug, Clone)]
#[command(name = "gramcare-notify", version, about)]
pub struct Config {
    /// Base URL of the GramCare backend
    #[arg(long, env = "GRAMCARE_API_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Full SMS endpoint URL, overriding the base URL
    #[arg(long, env = "GRAMCARE_SMS_URL")]
    pub sms_url: Option<String>,

    /// Full WhatsApp endpoint URL, overriding the base URL
    #[arg(long, env = "GRAMCARE_WHATSAPP_URL")]
    pub whatsapp_url: Option<String>,

    /// Destination phone number
    #[arg(long, env = "GRAMCARE_TO", default_value = DEFAULT_RECIPIENT)]
    pub to: String,

    /// Message text; each channel has its own default
    #[arg(long, env = "GRAMCARE_MESSAGE")]
    pub message: Option<String>,

    /// Language code forwarded to the backend for translation
    #[arg(long, env = "GRAMCARE_LANGUAGE")]
    pub language: Option<String>,

    /// Channel to dispatch on; may be repeated. Defaults to sms then whatsapp.
    #[arg(long = "channel", value_enum)]
    pub channels: Vec<Channel>,

    /// Request timeout in seconds. No timeout when unset.
    #[arg(long, env = "GRAMCARE_TIMEOUT_SECS")]
    pub timeout_secs: Option<u64>,

    /// Probe the backend's /health route before dispatching
    #[arg(long)]
    pub health: bool,
}

impl Config {
    pub fn channels(&self) -> Vec<Channel> {
        if self.channels.is_empty() {
            vec![Channel::Sms, Channel::WhatsApp]
        } else {
            self.channels.clone()
        }
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    pub fn endpoint(&self, channel: Channel) -> anyhow::Result<Url> {
        let over = match channel {
            Channel::Sms => self.sms_url.as_deref(),
            Channel::WhatsApp => self.whatsapp_url.as_deref(),
        };
        match over {
            Some(url) => parse_http_url(url),
            None => join_base(&self.base_url, channel.path()),
        }
    }

    pub fn health_url(&self) -> anyhow::Result<Url> {
        join_base(&self.base_url, "/health")
    }

    pub fn request(&self, channel: Channel) -> NotificationRequest {
        let message = self
            .message
            .clone()
            .unwrap_or_else(|| channel.default_message().to_string());
        NotificationRequest::new(self.to.clone(), message).with_language(self.language.clone())
    }
}

/// Appends `path` to the base URL's own path. Bases with a query string or
/// fragment are rejected.
fn join_base(base: &str, path: &str) -> anyhow::Result<Url> {
    let mut url = parse_http_url(base)?;
    if url.query().is_some() || url.fragment().is_some() {
        bail!("base URL {:?} must not carry a query or fragment", base);
    }
    url.path_segments_mut()
        .map_err(|_| anyhow!("base URL {:?} cannot take a path", base))?
        .pop_if_empty()
        .extend(path.split('/').filter(|s| !s.is_empty()));
    Ok(url)
}

fn parse_http_url(raw: &str) -> anyhow::Result<Url> {
    let url = Url::parse(raw).with_context(|| format!("invalid endpoint URL {:?}", raw))?;
    match url.scheme() {
        "http" | "https" => {}
        other => bail!("unsupported scheme {:?} in endpoint URL {:?}", other, raw),
    }
    if url.host_str().is_none() {
        return Err(anyhow!("endpoint URL {:?} has no host", raw));
    }
    Ok(url)
}
