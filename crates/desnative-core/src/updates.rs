// Update check against a remote version descriptor.
//
// The descriptor is `UpdateInfo` JSON. Its own `available` flag is ignored;
// availability is decided locally by comparing build numbers.

use async_trait::async_trait;
use log::info;
use std::time::Duration;

use crate::atoms::constants::{APP_VERSION, UPDATE_CHECK_TIMEOUT_SECS};
use crate::atoms::error::{CoreError, CoreResult};
use crate::atoms::types::UpdateInfo;

// ── Version comparison ─────────────────────────────────────────────────────

/// Whether `remote` should be offered over `current`.
///
/// Integer build numbers compare numerically. Anything else (e.g. `1.0.0`)
/// counts as newer whenever it differs.
pub fn is_newer(current: &str, remote: &str) -> bool {
    let (current, remote) = (current.trim(), remote.trim());
    match (current.parse::<i64>(), remote.parse::<i64>()) {
        (Ok(c), Ok(r)) => r > c,
        _ => remote != current,
    }
}

/// Decode a descriptor body and decide availability against `current`.
pub fn evaluate(current: &str, body: &str) -> CoreResult<UpdateInfo> {
    let mut info: UpdateInfo = serde_json::from_str(body)?;
    info.available = is_newer(current, &info.version);
    Ok(info)
}

// ── Descriptor source ──────────────────────────────────────────────────────

#[async_trait]
pub trait UpdateSource: Send + Sync {
    /// Fetch the raw descriptor body from `url`.
    async fn fetch_descriptor(&self, url: &str) -> CoreResult<String>;
}

/// Plain HTTP(S) GET via reqwest.
#[derive(Debug, Clone)]
pub struct HttpUpdateSource {
    client: reqwest::Client,
}

impl HttpUpdateSource {
    pub fn new() -> CoreResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(UPDATE_CHECK_TIMEOUT_SECS))
            .user_agent(format!("desnative/{}", APP_VERSION))
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl UpdateSource for HttpUpdateSource {
    async fn fetch_descriptor(&self, url: &str) -> CoreResult<String> {
        let resp = self.client.get(url).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(CoreError::NetworkStatus { url: url.to_string(), status: status.as_u16() });
        }
        Ok(resp.text().await?)
    }
}

// ── Checker ────────────────────────────────────────────────────────────────

pub struct UpdateChecker<S = HttpUpdateSource> {
    source: S,
    current_version: String,
}

impl UpdateChecker {
    /// HTTP checker for this build.
    pub fn new() -> CoreResult<Self> {
        Ok(Self::with_source(HttpUpdateSource::new()?, APP_VERSION))
    }
}

impl<S: UpdateSource> UpdateChecker<S> {
    pub fn with_source(source: S, current_version: impl Into<String>) -> Self {
        Self { source, current_version: current_version.into() }
    }

    pub fn current_version(&self) -> &str {
        &self.current_version
    }

    pub async fn check(&self, url: &str) -> CoreResult<UpdateInfo> {
        let body = self.source.fetch_descriptor(url).await?;
        let info = evaluate(&self.current_version, &body)?;
        info!(
            "[updates] Checked {}: remote {} vs current {} (available: {})",
            url, info.version, self.current_version, info.available
        );
        Ok(info)
    }
}
