//! Delivery of a completed form to the external form-relay service.
//!
//! The relay expects `{accessKey, subject, name, email, replyTo, message,
//! honeypot}` and answers `{success, message?}`. The message is a plain-text
//! block meant for mail delivery.

use crate::config::SurveyConfig;
use crate::error::SubmitError;
use crate::payload::FormPayload;
use chrono::{DateTime, Local};
use futures::future::{self, Either};
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;
use std::future::Future;
use std::pin::pin;
use std::time::Duration;

/// Failure text when the deadline passed to [`SubmissionClient::submit_before`] fires first.
pub const TIMED_OUT: &str = "Form submission timed out";

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RelayRequest {
    pub access_key: String,
    pub subject: String,
    pub name: String,
    pub email: String,
    pub reply_to: String,
    pub message: String,
    /// Spam trap; always empty from real users.
    pub honeypot: String,
}

impl RelayRequest {
    pub fn new(access_key: &str, payload: &FormPayload, submitted_at: DateTime<Local>) -> Self {
        let name = payload.personal.name.clone();
        let display_name = if name.is_empty() { "Anonymous" } else { name.as_str() };
        RelayRequest {
            access_key: access_key.to_string(),
            subject: format!("New Fitness Journey Form - {}", display_name),
            email: payload.personal.email.clone(),
            reply_to: payload.personal.email.clone(),
            message: compose_message(payload, submitted_at),
            honeypot: String::new(),
            name,
        }
    }
}

/// Human-readable body listing every payload field.
pub fn compose_message(payload: &FormPayload, submitted_at: DateTime<Local>) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Age Group: {}", payload.age_group);
    if let Some(since) = payload.time_since_menopause {
        let _ = writeln!(out, "Time Since Menopause: {} years", since.as_str());
    }
    let _ = writeln!(out, "Preferred Contact Method: {}", payload.extra_choice.as_str());
    let _ = writeln!(out, "Language: {}", payload.language.code());
    out.push('\n');
    match &payload.theme_priorities {
        Some(priorities) => {
            let _ = writeln!(out, "Selected Themes (by priority):");
            for (rank, theme) in priorities.iter().zip(&payload.themes) {
                let _ = writeln!(out, "{}. {}", rank.priority, theme.title);
            }
        }
        None => {
            let _ = writeln!(out, "Selected Themes:");
            for theme in &payload.themes {
                let _ = writeln!(out, "- {}", theme.title);
            }
        }
    }
    out.push('\n');
    let _ = writeln!(out, "Consent: {}", if payload.consent { "Yes" } else { "No" });
    let _ = write!(out, "Submitted: {}", submitted_at.format("%Y-%m-%d %H:%M:%S"));
    out
}

/// Raw HTTP answer from a [`Transport`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpReply {
    pub status: u16,
    pub body: String,
}

impl HttpReply {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Minimal HTTP seam so the client can be driven without a network.
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn post_json(&self, url: &str, body: &RelayRequest) -> Result<HttpReply, String>;
}

pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new(timeout: Duration) -> Result<Self, SubmitError> {
        let builder = reqwest::Client::builder();
        // The browser fetch backend has no client-wide timeout.
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.timeout(timeout);
        #[cfg(target_arch = "wasm32")]
        let _ = timeout;
        let client = builder
            .build()
            .map_err(|e| SubmitError::Transport(e.to_string()))?;
        Ok(Self { client })
    }
}

impl Transport for ReqwestTransport {
    async fn post_json(&self, url: &str, body: &RelayRequest) -> Result<HttpReply, String> {
        let resp = self
            .client
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        let status = resp.status().as_u16();
        let body = resp.text().await.map_err(|e| e.to_string())?;
        Ok(HttpReply { status, body })
    }
}

#[derive(Debug, Deserialize)]
struct RelayReply {
    #[serde(default)]
    success: bool,
    message: Option<String>,
}

/// Acknowledgement from the relay.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Ack {
    pub message: Option<String>,
}

pub struct SubmissionClient<T> {
    transport: T,
    endpoint: String,
    access_key: Option<String>,
}

impl SubmissionClient<ReqwestTransport> {
    pub fn from_config(config: &SurveyConfig) -> Result<Self, SubmitError> {
        let transport = ReqwestTransport::new(config.timeout)?;
        Ok(Self::new(
            transport,
            config.endpoint.clone(),
            config.access_key.clone(),
        ))
    }
}

impl<T: Transport> SubmissionClient<T> {
    pub fn new(transport: T, endpoint: impl Into<String>, access_key: Option<String>) -> Self {
        Self {
            transport,
            endpoint: endpoint.into(),
            access_key: access_key.filter(|k| !k.trim().is_empty()),
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// [`submit`](Self::submit) raced against `deadline`. The browser build
    /// has no client-wide request timeout, so the caller supplies a timer.
    pub async fn submit_before<D>(&self, payload: &FormPayload, deadline: D) -> Result<Ack, SubmitError>
    where
        D: Future<Output = ()>,
    {
        let attempt = pin!(self.submit(payload));
        let deadline = pin!(deadline);
        match future::select(attempt, deadline).await {
            Either::Left((result, _)) => result,
            Either::Right(((), _)) => {
                tracing::warn!(endpoint = %self.endpoint, "form relay did not answer in time");
                Err(SubmitError::Transport(TIMED_OUT.to_string()))
            }
        }
    }

    /// One attempt, no retry.
    pub async fn submit(&self, payload: &FormPayload) -> Result<Ack, SubmitError> {
        let Some(access_key) = self.access_key.as_deref() else {
            tracing::warn!("submission key missing; not contacting relay");
            return Err(SubmitError::MissingCredential);
        };
        let request = RelayRequest::new(access_key, payload, Local::now());
        tracing::info!(
            endpoint = %self.endpoint,
            themes = payload.themes.len(),
            language = payload.language.code(),
            "submitting form"
        );

        let reply = self
            .transport
            .post_json(&self.endpoint, &request)
            .await
            .map_err(|e| {
                tracing::warn!(error = %e, "form relay unreachable");
                SubmitError::Transport(e)
            })?;

        if !reply.is_success() {
            let reason = reqwest::StatusCode::from_u16(reply.status)
                .ok()
                .and_then(|s| s.canonical_reason())
                .unwrap_or("");
            tracing::warn!(status = reply.status, "form relay returned error status");
            return Err(SubmitError::Transport(
                format!("Form submission failed: {} {}", reply.status, reason)
                    .trim_end()
                    .to_string(),
            ));
        }

        let parsed: RelayReply = serde_json::from_str(&reply.body).map_err(|e| {
            tracing::warn!(error = %e, "unreadable relay response");
            SubmitError::Transport(format!("Invalid response from form service: {}", e))
        })?;
        if !parsed.success {
            let message = parsed
                .message
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| "Submission failed".to_string());
            tracing::warn!(%message, "form relay rejected submission");
            return Err(SubmitError::Rejected(message));
        }

        tracing::info!("form submitted");
        Ok(Ack {
            message: parsed.message,
        })
    }
}
