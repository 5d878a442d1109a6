//! Blocking client for the ExoFOP TESS target service.
//!
//! Three independent operations, each a single HTTP GET plus JSON parsing:
//! name→TIC resolution, composite target info (coordinates + V magnitude),
//! and the candidate-parameter fetch. Each public operation wraps its body
//! in the wall-clock retry policy and reports failure as a sentinel `None`
//! after logging — errors never escape to the caller. The `try_*` variants
//! underneath perform a single attempt and expose the full error.

use std::time::Duration;

use log::{debug, error};
use reqwest::blocking::Client;
use reqwest::Url;
use serde_json::Value;

use crate::distance::Distance;
use crate::errors::{ExofopError, ExofopResult};
use crate::position::SkyPosition;
use crate::response::{self, TargetResponse, TicLookupResponse};
use crate::retry::retry_with_deadline;

/// TESS Input Catalog identifier.
pub type TicId = u64;

/// Production ExoFOP service root.
pub const EXOFOP_BASE_URL: &str = "https://exofop.ipac.caltech.edu/tess";

/// Wall-clock budget wrapping each operation's retrying sequence.
pub const DEFAULT_RETRY_BUDGET: Duration = Duration::from_secs(30);

/// Timeout applied to every individual HTTP request. Kept well under the
/// retry budget so a hanging request cannot starve the retry loop.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Client for ExoFOP target-metadata lookups.
///
/// Holds configuration only; each request builds a fresh blocking HTTP
/// client. A value may be shared across threads — calls are independent and
/// touch no state beyond the logging sink.
#[derive(Debug, Clone)]
pub struct ExofopClient {
    base_url: String,
    user_agent: String,
    retry_budget: Duration,
    request_timeout: Duration,
}

impl ExofopClient {
    pub fn new() -> Self {
        Self {
            base_url: EXOFOP_BASE_URL.to_string(),
            user_agent: format!("exofop-client/{}", env!("CARGO_PKG_VERSION")),
            retry_budget: DEFAULT_RETRY_BUDGET,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }

    /// Points the client at a different service root (used by tests).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_retry_budget(mut self, budget: Duration) -> Self {
        self.retry_budget = budget;
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Resolves a free-text target name to its TIC identifier.
    ///
    /// Returns `None` when the service does not know the name or anything
    /// fails along the way; the cause is logged, never raised.
    pub fn resolve_tic_id(&self, target: &str) -> Option<TicId> {
        match retry_with_deadline(self.retry_budget, || self.try_resolve_tic_id(target)) {
            Ok(tic) => Some(tic),
            Err(err) => {
                error!("ExoFOP lookup failed for target {:?}: {}", target, err);
                None
            }
        }
    }

    /// Single-attempt name→TIC resolution.
    pub fn try_resolve_tic_id(&self, target: &str) -> ExofopResult<TicId> {
        let url = self.lookup_url(target)?;
        let body = self.fetch(url)?;
        let rsp: TicLookupResponse =
            serde_json::from_str(&body).map_err(|e| ExofopError::decode(e.to_string()))?;

        if rsp.status != "OK" {
            let message = rsp
                .message
                .unwrap_or_else(|| format!("status {}", rsp.status));
            return Err(ExofopError::upstream(message));
        }

        response::tic_id(rsp.tic.as_ref())
            .ok_or_else(|| ExofopError::decode("status OK but no usable TIC field"))
    }

    /// Fetches coordinates, distance, proper motion, and V magnitude for a
    /// TIC target.
    ///
    /// Returns `None` on any failure (logged with the TIC for traceability).
    /// A missing V magnitude is not a failure: `Some((position, None))`.
    pub fn composite_info(&self, tic: TicId) -> Option<(SkyPosition, Option<f64>)> {
        match retry_with_deadline(self.retry_budget, || self.try_composite_info(tic)) {
            Ok(info) => Some(info),
            Err(err) => {
                error!("ExoFOP target fetch failed for TIC {}: {}", tic, err);
                None
            }
        }
    }

    /// Single-attempt composite-info fetch.
    ///
    /// All four of RA, Dec, PM RA, PM Dec must convert; a partial coordinate
    /// record is a validation error, never a partial result. A missing
    /// distance falls back to [`Distance::UNKNOWN`].
    pub fn try_composite_info(&self, tic: TicId) -> ExofopResult<(SkyPosition, Option<f64>)> {
        let url = self.target_url(tic)?;
        let body = self.fetch(url)?;
        let rsp: TargetResponse =
            serde_json::from_str(&body).map_err(|e| ExofopError::decode(e.to_string()))?;

        let coords = &rsp.coordinates;
        let fields = (
            response::safe_float(coords.ra.as_ref()),
            response::safe_float(coords.dec.as_ref()),
            response::safe_float(coords.pm_ra.as_ref()),
            response::safe_float(coords.pm_dec.as_ref()),
        );
        let (Some(ra), Some(dec), Some(pm_ra), Some(pm_dec)) = fields else {
            return Err(ExofopError::validation(
                "missing or invalid RA/Dec/PM fields in ExoFOP JSON",
            ));
        };

        let distance = match response::measured_distance_pc(&rsp.stellar_parameters) {
            Some(parsecs) => Distance::from_parsecs(parsecs)?,
            None => Distance::UNKNOWN,
        };
        let vmag = response::v_band_magnitude(&rsp.magnitudes);

        let position = SkyPosition::new(ra, dec, distance, pm_ra, pm_dec)?;
        Ok((position, vmag))
    }

    /// Fetches candidate planet parameters for a TIC target.
    ///
    /// Placeholder: ExoFOP publishes no parameter schema, so this logs the
    /// top-level response keys and the raw `planet_parameters` block to the
    /// diagnostic channel and always reports the unknown pair, whatever the
    /// service returned.
    pub fn planet_parameters(&self, tic: TicId) -> (Option<Value>, Option<Value>) {
        match retry_with_deadline(self.retry_budget, || self.try_fetch_target_raw(tic)) {
            Ok(raw) => {
                if let Value::Object(map) = &raw {
                    let keys: Vec<&String> = map.keys().collect();
                    debug!("ExoFOP target response keys for TIC {}: {:?}", tic, keys);
                }
                debug!(
                    "ExoFOP planet_parameters for TIC {}: {}",
                    tic,
                    raw.get("planet_parameters").unwrap_or(&Value::Null)
                );
            }
            Err(err) => {
                error!("ExoFOP parameter fetch failed for TIC {}: {}", tic, err);
            }
        }
        (None, None)
    }

    /// Single-attempt raw fetch of the target-detail payload.
    fn try_fetch_target_raw(&self, tic: TicId) -> ExofopResult<Value> {
        let url = self.target_url(tic)?;
        let body = self.fetch(url)?;
        serde_json::from_str(&body).map_err(|e| ExofopError::decode(e.to_string()))
    }

    fn lookup_url(&self, target: &str) -> ExofopResult<Url> {
        let mut url = self.endpoint("gototicid.php")?;
        url.query_pairs_mut()
            .append_pair("target", target)
            .append_key_only("json");
        Ok(url)
    }

    fn target_url(&self, tic: TicId) -> ExofopResult<Url> {
        let mut url = self.endpoint("target.php")?;
        url.query_pairs_mut()
            .append_pair("id", &tic.to_string())
            .append_key_only("json");
        Ok(url)
    }

    fn endpoint(&self, path: &str) -> ExofopResult<Url> {
        let raw = format!("{}/{}", self.base_url.trim_end_matches('/'), path);
        Url::parse(&raw)
            .map_err(|e| ExofopError::validation(format!("invalid service URL {}: {}", raw, e)))
    }

    /// Issues one GET and returns the body, mapping non-2xx statuses to
    /// [`ExofopError::HttpStatus`].
    fn fetch(&self, url: Url) -> ExofopResult<String> {
        let client = Client::builder()
            .user_agent(&self.user_agent)
            .timeout(self.request_timeout)
            .build()?;

        let response = client.get(url.clone()).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(ExofopError::http_status(status, url.as_str()));
        }

        Ok(response.text()?)
    }
}

impl Default for ExofopClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_defaults() {
        let client = ExofopClient::new();
        assert_eq!(client.base_url, EXOFOP_BASE_URL);
        assert!(client.user_agent.starts_with("exofop-client/"));
        assert_eq!(client.retry_budget, DEFAULT_RETRY_BUDGET);
        assert_eq!(client.request_timeout, DEFAULT_REQUEST_TIMEOUT);
    }

    #[test]
    fn test_builder_overrides() {
        let client = ExofopClient::new()
            .with_base_url("http://localhost:9999/tess/")
            .with_retry_budget(Duration::from_millis(10))
            .with_request_timeout(Duration::from_millis(5));
        assert_eq!(client.base_url, "http://localhost:9999/tess/");
        assert_eq!(client.retry_budget, Duration::from_millis(10));
        assert_eq!(client.request_timeout, Duration::from_millis(5));
    }

    #[test]
    fn test_lookup_url_embeds_target_and_json_flag() {
        let client = ExofopClient::new();
        let url = client.lookup_url("Pi Men").unwrap();
        assert!(url.as_str().starts_with(EXOFOP_BASE_URL));
        assert!(url.path().ends_with("/gototicid.php"));
        let query = url.query().unwrap();
        assert!(query.contains("target=Pi+Men") || query.contains("target=Pi%20Men"));
        assert!(query.contains("json"));
    }

    #[test]
    fn test_target_url_embeds_tic() {
        let client = ExofopClient::new();
        let url = client.target_url(261136679).unwrap();
        assert!(url.path().ends_with("/target.php"));
        assert!(url.query().unwrap().contains("id=261136679"));
    }

    #[test]
    fn test_trailing_slash_in_base_url() {
        let client = ExofopClient::new().with_base_url("http://localhost:1234/tess/");
        let url = client.target_url(1).unwrap();
        assert_eq!(url.path(), "/tess/target.php");
    }

    #[test]
    fn test_invalid_base_url_is_validation_error() {
        let client = ExofopClient::new().with_base_url("not a url");
        assert!(matches!(
            client.target_url(1),
            Err(ExofopError::Validation { .. })
        ));
    }
}
