//! Validator services: the traits the dispatcher calls and the W3C HTTP
//! clients behind them.
//!
//! Both services are black boxes that take source text and either return
//! their native result shape or fail. Normalization happens elsewhere.

use crate::models::raw::{MarkupResponse, StyleResponse, StyleResult};
use std::time::Duration;
use thiserror::Error;
use ureq::{Agent, AgentBuilder};

pub const DEFAULT_HTML_URL: &str = "https://validator.w3.org/nu/";
pub const DEFAULT_CSS_URL: &str = "https://jigsaw.w3.org/css-validator/validator";

/// Hard failure of a validator call. Terminal for the invocation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationFailure {
    #[error("request to {url} failed: {message}")]
    Transport { url: String, message: String },
    #[error("{url} answered with HTTP {code}")]
    Status { url: String, code: u16 },
    #[error("response from {url} could not be decoded: {message}")]
    Decode { url: String, message: String },
    /// The service answered, but with an error instead of a result.
    #[error("{0}")]
    Service(String),
}

pub trait MarkupValidator {
    fn validate(&self, text: &str) -> Result<MarkupResponse, ValidationFailure>;
}

pub trait StyleValidator {
    fn validate(&self, text: &str, options: &StyleOptions)
        -> Result<StyleResult, ValidationFailure>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// The user's CSS report type selection.
pub enum ReportType {
    All,
    MostImportant,
    NoWarnings,
    #[default]
    Normal,
}

impl ReportType {
    /// Anything unrecognized selects the default level.
    pub fn parse(s: &str) -> Self {
        match s.trim() {
            "all" => ReportType::All,
            "most important" => ReportType::MostImportant,
            "no warnings" => ReportType::NoWarnings,
            _ => ReportType::Normal,
        }
    }

    /// Sentinel accepted by the CSS validator's `warning` parameter.
    pub fn warning_param(self) -> &'static str {
        match self {
            ReportType::All => "2",
            ReportType::MostImportant => "0",
            ReportType::NoWarnings => "no",
            ReportType::Normal => "1",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Options forwarded verbatim to the CSS validator.
pub struct StyleOptions {
    pub profile: String,
    pub medium: String,
    pub report_type: ReportType,
}

impl Default for StyleOptions {
    fn default() -> Self {
        Self {
            profile: "css3".into(),
            medium: "all".into(),
            report_type: ReportType::Normal,
        }
    }
}

fn build_agent(timeout: Option<Duration>) -> Agent {
    let mut builder = AgentBuilder::new();
    if let Some(t) = timeout {
        builder = builder.timeout(t);
    }
    builder.build()
}

fn transport_failure(url: &str, err: ureq::Error) -> ValidationFailure {
    match err {
        ureq::Error::Status(code, _) => ValidationFailure::Status {
            url: url.to_string(),
            code,
        },
        ureq::Error::Transport(t) => ValidationFailure::Transport {
            url: url.to_string(),
            message: t.to_string(),
        },
    }
}

fn read_json<T: serde::de::DeserializeOwned>(
    url: &str,
    response: ureq::Response,
) -> Result<T, ValidationFailure> {
    let decode = |message: String| ValidationFailure::Decode {
        url: url.to_string(),
        message,
    };
    let body = response.into_string().map_err(|e| decode(e.to_string()))?;
    tracing::trace!(url, bytes = body.len(), "validator response received");
    serde_json::from_str(&body).map_err(|e| decode(e.to_string()))
}

/// Client for the Nu HTML checker.
#[derive(Debug)]
pub struct NuHtmlValidator {
    url: String,
    agent: Agent,
}

impl NuHtmlValidator {
    pub fn new(url: impl Into<String>, timeout: Option<Duration>) -> Self {
        Self {
            url: url.into(),
            agent: build_agent(timeout),
        }
    }
}

impl MarkupValidator for NuHtmlValidator {
    fn validate(&self, text: &str) -> Result<MarkupResponse, ValidationFailure> {
        tracing::debug!(url = %self.url, bytes = text.len(), "submitting markup");
        let response = self
            .agent
            .post(&self.url)
            .query("out", "json")
            .set("Content-Type", "text/html; charset=utf-8")
            .send_string(text)
            .map_err(|e| transport_failure(&self.url, e))?;
        read_json(&self.url, response)
    }
}

/// Query parameters for a jigsaw `GET` request, in submission order.
fn style_query<'a>(text: &'a str, options: &'a StyleOptions) -> [(&'static str, &'a str); 5] {
    [
        ("text", text),
        ("profile", options.profile.as_str()),
        ("usermedium", options.medium.as_str()),
        ("warning", options.report_type.warning_param()),
        ("output", "json"),
    ]
}

/// Client for the W3C CSS validator.
#[derive(Debug)]
pub struct JigsawCssValidator {
    url: String,
    agent: Agent,
}

impl JigsawCssValidator {
    pub fn new(url: impl Into<String>, timeout: Option<Duration>) -> Self {
        Self {
            url: url.into(),
            agent: build_agent(timeout),
        }
    }
}

impl StyleValidator for JigsawCssValidator {
    fn validate(
        &self,
        text: &str,
        options: &StyleOptions,
    ) -> Result<StyleResult, ValidationFailure> {
        tracing::debug!(
            url = %self.url,
            profile = %options.profile,
            medium = %options.medium,
            warning = options.report_type.warning_param(),
            "submitting stylesheet"
        );
        let response = style_query(text, options)
            .into_iter()
            .fold(self.agent.get(&self.url), |req, (key, value)| {
                req.query(key, value)
            })
            .call()
            .map_err(|e| transport_failure(&self.url, e))?;
        let envelope: StyleResponse = read_json(&self.url, response)?;
        envelope.cssvalidation.ok_or_else(|| {
            ValidationFailure::Service("CSS validator returned no validation payload".into())
        })
    }
}
