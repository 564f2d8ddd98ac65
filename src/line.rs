use std::time::Duration;

use serde::Serialize;

use crate::error::NotifyError;
use crate::nlog;

const BASE_URL: &str = "https://api.line.me";
const PUSH_PATH: &str = "/v2/bot/message/push";

/// Whole-request deadline. The hook never retries; it gives up after this.
const TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Serialize)]
struct PushPayload<'a> {
    to: &'a str,
    messages: [TextMessage<'a>; 1],
}

#[derive(Serialize)]
struct TextMessage<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    text: &'a str,
}

/// Minimal client for the LINE Messaging API push endpoint.
pub struct LineClient {
    http: reqwest::blocking::Client,
    base_url: String,
    access_token: String,
}

impl LineClient {
    pub fn new(access_token: &str) -> Result<Self, NotifyError> {
        Self::with_base_url(access_token, BASE_URL)
    }

    /// Point the client at a different host. Only tests use this.
    pub fn with_base_url(access_token: &str, base_url: &str) -> Result<Self, NotifyError> {
        let http = reqwest::blocking::Client::builder().timeout(TIMEOUT).build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            access_token: access_token.to_string(),
        })
    }

    /// Push one text message to `user_id`. Exactly one attempt; a connection
    /// error, the timeout, and a non-2xx reply are all delivery failures.
    pub fn push_text(&self, user_id: &str, text: &str) -> Result<(), NotifyError> {
        let payload = PushPayload {
            to: user_id,
            messages: [TextMessage { kind: "text", text }],
        };

        nlog!("POST {}{}", self.base_url, PUSH_PATH);
        let response = self
            .http
            .post(format!("{}{}", self.base_url, PUSH_PATH))
            .header("Authorization", format!("Bearer {}", self.access_token))
            .json(&payload)
            .send()?;

        let status = response.status();
        nlog!("LINE replied {status}");
        if !status.is_success() {
            // LINE puts the reason in the response body; keep it for stderr.
            let body = response.text().unwrap_or_default();
            return Err(NotifyError::Rejected { status, body });
        }
        Ok(())
    }
}
