//! Blocking JSON client for the remote numeric-compute service.
//!
//! Every operation is a `POST {base_url}/{operation}` with a JSON body and a
//! JSON reply. Results computed by the service are independent of the local
//! kernel and need not agree with [`crate::interpolate::interp`] or
//! [`crate::signal::cumtrapz`].
use anyhow::{anyhow, bail, Context, Result};
use reqwest::blocking::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::config::RemoteConfig;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterpolateRequest {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub x_new: Vec<f64>,
    /// Interpolation kind understood by the service, e.g. `"linear"` or `"cubic"`.
    pub kind: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterpolateResponse {
    pub y_new: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurveFitRequest {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    /// Model expression in terms of `x` and the fitted parameters.
    pub model: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_guess: Option<Vec<f64>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurveFitResponse {
    pub params: Vec<f64>,
    #[serde(default)]
    pub covariance: Vec<Vec<f64>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FindRootRequest {
    pub expression: String,
    pub x0: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FindRootResponse {
    pub root: f64,
    #[serde(default)]
    pub converged: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignFilterRequest {
    pub order: u32,
    /// Cutoff frequency, or a `[low, high]` pair for band filters.
    pub cutoff: Vec<f64>,
    /// `"lowpass"`, `"highpass"`, `"bandpass"` or `"bandstop"`.
    pub btype: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fs: Option<f64>,
}

/// Transfer-function coefficients `b / a`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignFilterResponse {
    pub b: Vec<f64>,
    pub a: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplyFilterRequest {
    pub b: Vec<f64>,
    pub a: Vec<f64>,
    pub signal: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplyFilterResponse {
    pub signal: Vec<f64>,
}

/// HTTP client bound to one service endpoint family.
#[derive(Debug, Clone)]
pub struct RemoteClient {
    config: RemoteConfig,
    http: Client,
}

impl RemoteClient {
    pub fn new(config: RemoteConfig) -> Result<Self> {
        let mut builder = Client::builder().timeout(config.timeout());
        if config.no_proxy {
            builder = builder.no_proxy();
        }
        let http = builder.build().context("Failed to build HTTP client")?;
        Ok(Self { config, http })
    }

    pub fn config(&self) -> &RemoteConfig {
        &self.config
    }

    /// Full URL for `operation`.
    pub fn endpoint(&self, operation: &str) -> String {
        format!(
            "{}/{}",
            self.config.base_url.trim_end_matches('/'),
            operation.trim_start_matches('/')
        )
    }

    /// POST `request` to `operation` and decode the JSON reply.
    ///
    /// Transport failures and 5xx replies are retried up to `max_retries`
    /// times with a fixed backoff. Any other non-success status fails at once.
    pub fn call<Req, Resp>(&self, operation: &str, request: &Req) -> Result<Resp>
    where
        Req: Serialize + ?Sized,
        Resp: DeserializeOwned,
    {
        let url = self.endpoint(operation);
        let attempts = self.config.max_retries + 1;
        let mut last_error = None;

        for attempt in 1..=attempts {
            log::debug!("POST {} (attempt {}/{})", url, attempt, attempts);
            match self.http.post(&url).json(request).send() {
                Ok(response) => {
                    let status = response.status();
                    if status.is_success() {
                        return response
                            .json::<Resp>()
                            .with_context(|| format!("Failed to decode response from {}", url));
                    }
                    let body = response.text().unwrap_or_default();
                    if !status.is_server_error() {
                        bail!("{} rejected the request with {}: {}", url, status, body);
                    }
                    last_error = Some(anyhow!("{} returned {}: {}", url, status, body));
                }
                Err(err) => {
                    last_error =
                        Some(anyhow::Error::new(err).context(format!("Request to {} failed", url)));
                }
            }

            if attempt < attempts {
                log::warn!(
                    "{} failed on attempt {}/{}, retrying in {:?}",
                    operation,
                    attempt,
                    attempts,
                    self.config.retry_backoff()
                );
                std::thread::sleep(self.config.retry_backoff());
            }
        }

        Err(last_error
            .unwrap_or_else(|| anyhow!("no attempt was made"))
            .context(format!("{} failed after {} attempt(s)", operation, attempts)))
    }

    pub fn interpolate(&self, request: &InterpolateRequest) -> Result<InterpolateResponse> {
        self.call("interpolate", request)
    }

    pub fn curve_fit(&self, request: &CurveFitRequest) -> Result<CurveFitResponse> {
        self.call("curve_fit", request)
    }

    pub fn find_root(&self, request: &FindRootRequest) -> Result<FindRootResponse> {
        self.call("find_root", request)
    }

    pub fn design_filter(&self, request: &DesignFilterRequest) -> Result<DesignFilterResponse> {
        self.call("design_filter", request)
    }

    pub fn apply_filter(&self, request: &ApplyFilterRequest) -> Result<ApplyFilterResponse> {
        self.call("apply_filter", request)
    }
}
