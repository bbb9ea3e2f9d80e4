//! Checks for the hello endpoint contract.
//!
//! [`verify_response`] is the assertion core: given a status, a content type
//! and a body, it either returns the decoded payload or names the first
//! mismatch. The in-process router tests feed it directly; [`HelloProbe`]
//! feeds it from a real HTTP exchange against a running service.
//!
//! ```no_run
//! use std::time::Duration;
//! use hello_vibe::harness::HelloProbe;
//!
//! # async fn run() -> Result<(), hello_vibe::error::HarnessError> {
//! let probe = HelloProbe::new("http://127.0.0.1:8080", Duration::from_secs(5))?;
//! let report = probe.probe().await?;
//! assert_eq!(report.status, 200);
//! # Ok(())
//! # }
//! ```

use std::time::{Duration, Instant};

use reqwest::header::CONTENT_TYPE;
use serde_json::{json, Value};
use tracing::{debug, info, warn};
use url::Url;

use crate::api::{HelloResponse, HELLO_MESSAGE, HELLO_PATH};
use crate::error::HarnessError;

/// Default per-request timeout for a probe.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Status the hello endpoint must answer with.
const EXPECTED_STATUS: u16 = 200;

/// Outcome of a passing probe.
#[derive(Debug, Clone)]
pub struct ProbeReport {
    /// Full URL that was requested.
    pub url: String,
    /// Observed status code.
    pub status: u16,
    /// Observed Content-Type header.
    pub content_type: String,
    /// Decoded payload.
    pub payload: HelloResponse,
    /// Round-trip time in milliseconds.
    pub elapsed_ms: f64,
}

/// Whether a Content-Type value names a JSON media type.
///
/// Accepts `application/json` and structured-syntax `application/*+json`,
/// with or without parameters, case-insensitively.
pub fn is_json_media_type(value: &str) -> bool {
    let essence = value
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    match essence.split_once('/') {
        Some(("application", subtype)) => subtype == "json" || subtype.ends_with("+json"),
        _ => false,
    }
}

/// The body every hello response must deep-equal.
fn expected_body() -> Value {
    json!({ "message": HELLO_MESSAGE })
}

/// Check a hello response against the endpoint contract.
///
/// Status is checked first, then content type, then the body. The body is
/// compared as JSON, so key order and whitespace do not matter but extra keys
/// do.
pub fn verify_response(
    status: u16,
    content_type: Option<&str>,
    body: &[u8],
) -> Result<HelloResponse, HarnessError> {
    if status != EXPECTED_STATUS {
        return Err(HarnessError::StatusMismatch {
            expected: EXPECTED_STATUS,
            actual: status,
        });
    }

    match content_type {
        Some(ct) if is_json_media_type(ct) => {}
        other => {
            return Err(HarnessError::ContentTypeMismatch {
                actual: other.map(str::to_owned),
            })
        }
    }

    let expected = expected_body();
    let body_mismatch = || HarnessError::BodyMismatch {
        expected: expected.to_string(),
        actual: String::from_utf8_lossy(body).into_owned(),
    };

    let actual: Value = serde_json::from_slice(body).map_err(|_| body_mismatch())?;
    if actual != expected {
        return Err(body_mismatch());
    }

    Ok(HelloResponse::new())
}

/// Network-level check of a running hello service.
#[derive(Debug, Clone)]
pub struct HelloProbe {
    client: reqwest::Client,
    url: Url,
}

impl HelloProbe {
    /// Build a probe for the service rooted at `base_url`.
    ///
    /// Any path on `base_url` is replaced by the hello path.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, HarnessError> {
        let base = Url::parse(base_url)
            .map_err(|e| HarnessError::InvalidUrl(format!("{base_url}: {e}")))?;

        if !matches!(base.scheme(), "http" | "https") {
            return Err(HarnessError::InvalidUrl(format!(
                "{base_url}: scheme must be http or https"
            )));
        }

        let url = base
            .join(HELLO_PATH)
            .map_err(|e| HarnessError::InvalidUrl(format!("{base_url}: {e}")))?;

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| HarnessError::Unreachable {
                url: url.to_string(),
                reason: format!("failed to build http client: {e}"),
            })?;

        Ok(Self { client, url })
    }

    /// URL the probe requests.
    pub fn url(&self) -> &str {
        self.url.as_str()
    }

    /// Issue `GET /api/hello` and verify the answer.
    pub async fn probe(&self) -> Result<ProbeReport, HarnessError> {
        let start = Instant::now();
        let url = self.url.to_string();
        debug!(%url, "Probing hello endpoint");

        let unreachable = |e: reqwest::Error| HarnessError::Unreachable {
            url: url.clone(),
            reason: e.to_string(),
        };

        let response = self
            .client
            .get(self.url.clone())
            .send()
            .await
            .map_err(unreachable)?;

        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned);
        let body = response.bytes().await.map_err(unreachable)?;
        let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;

        match verify_response(status, content_type.as_deref(), &body) {
            Ok(payload) => {
                info!(%url, status, elapsed_ms, "Hello endpoint check passed");
                Ok(ProbeReport {
                    url,
                    status,
                    content_type: content_type.unwrap_or_default(),
                    payload,
                    elapsed_ms,
                })
            }
            Err(e) => {
                warn!(%url, error = %e, "Hello endpoint check failed");
                Err(e)
            }
        }
    }
}
