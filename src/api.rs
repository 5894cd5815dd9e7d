// API client module: a small blocking HTTP client that talks to the
// DigitalOcean Functions Challenge endpoint. One request per run, no
// retries and no connection reuse beyond what reqwest does by itself.

use crate::category::SammyType;
use crate::config::Config;
use anyhow::{Context, Result};
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Endpoint used when `SAMMY_API_URL` is not set.
pub const API_URL: &str = "https://functionschallenge.digitalocean.com/api/sammy";

/// Blocking client bound to a single endpoint URL.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    url: String,
}

/// Payload of the create call.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SammyRequest {
    pub name: String,
    #[serde(rename = "type")]
    pub sammy_type: SammyType,
}

impl SammyRequest {
    pub fn new(name: impl Into<String>, sammy_type: SammyType) -> Self {
        SammyRequest {
            name: name.into(),
            sammy_type,
        }
    }
}

/// Body returned by the endpoint. `errors` maps a request field to the
/// validation messages the server produced for it; it is missing or
/// empty when the Sammy was created.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct SammyResponse {
    #[serde(default)]
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<BTreeMap<String, Vec<String>>>,
}

/// What a parsed response means for the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Created { message: String },
    Rejected(Rejection),
}

/// Server-side validation failure. Kept as a concrete error type so the
/// binary can render it differently from transport errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection {
    pub message: String,
    pub errors: BTreeMap<String, Vec<String>>,
}

impl SammyResponse {
    pub fn has_errors(&self) -> bool {
        self.errors.as_ref().is_some_and(|e| !e.is_empty())
    }

    pub fn into_outcome(self) -> Outcome {
        match self.errors {
            Some(errors) if !errors.is_empty() => Outcome::Rejected(Rejection {
                message: self.message,
                errors,
            }),
            _ => Outcome::Created {
                message: self.message,
            },
        }
    }
}

impl Rejection {
    /// Flattened `(field, error)` pairs, fields in sorted order.
    pub fn field_errors(&self) -> impl Iterator<Item = (&str, &str)> {
        self.errors.iter().flat_map(|(field, errs)| {
            errs.iter().map(move |e| (field.as_str(), e.as_str()))
        })
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "An error occurred: Message: {}", self.message)?;
        for (field, err) in self.field_errors() {
            write!(f, "\n  {field}: {err}")?;
        }
        Ok(())
    }
}

impl std::error::Error for Rejection {}

impl ApiClient {
    /// Build a client for the given endpoint URL.
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .default_headers(json_headers())
            .build()
            .context("Failed to build HTTP client")?;
        Ok(ApiClient {
            client,
            url: url.into(),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(config.api_url.clone())
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// POST the request and parse whatever body comes back. The status code
    /// is not checked: validation failures arrive as a JSON body with
    /// `errors` set, which the caller inspects through `into_outcome`.
    pub fn create_sammy(&self, req: &SammyRequest) -> Result<SammyResponse> {
        let body = serde_json::to_vec(req).context("Failed to encode request body")?;
        log::debug!("POST {} {}", self.url, String::from_utf8_lossy(&body));

        let res = self
            .client
            .post(&self.url)
            .body(body)
            .send()
            .with_context(|| format!("Failed to send request to {}", self.url))?;

        let status = res.status();
        let txt = res.text().context("Unable to read response body")?;
        log::debug!("Got {status} from {}: {txt}", self.url);

        let resp: SammyResponse = serde_json::from_str(&txt)
            .with_context(|| format!("Parsing response json (status {status})"))?;
        Ok(resp)
    }
}

/// Both headers the endpoint expects on every call.
fn json_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers
}
