//! Blocking HTTP transport for the advisor and news endpoints.
//!
//! The underlying `reqwest` client is built lazily on the first request, so
//! an SDK that only runs calculators never opens a connection pool.

use crate::config;
use crate::error::{FinlitError, Result};
use reqwest::blocking::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;
use tracing::debug;

/// Thin wrapper over a lazily built `reqwest` blocking client bound to one
/// API base URL.
pub struct ApiClient {
    /// Base URL without a trailing slash (e.g. `http://localhost:8000`).
    pub base_url: String,
    /// If true, never touch the network.
    pub offline: bool,
    timeout: Duration,
    client: Option<Client>,
}

impl ApiClient {
    /// Create a new client. No connection is made until the first request.
    pub fn new(base_url: &str, offline: bool, timeout: Duration) -> Self {
        Self {
            base_url: config::normalize_base(base_url),
            offline,
            timeout,
            client: None,
        }
    }

    /// Lazy HTTP client, created on first use.
    pub fn client(&mut self) -> Result<&Client> {
        if self.client.is_none() {
            let client = Client::builder()
                .timeout(self.timeout)
                .redirect(reqwest::redirect::Policy::limited(10))
                .build()?;
            self.client = Some(client);
        }
        self.client
            .as_ref()
            .ok_or_else(|| FinlitError::InvalidArgument("HTTP client unavailable".into()))
    }

    /// Full URL for an endpoint path.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// POST to `path` with optional query parameters and an optional JSON body,
    /// and decode the JSON response.
    ///
    /// Any non-2xx status is returned as an error.
    pub fn post_json<B, T>(
        &mut self,
        path: &str,
        query: &[(&str, &str)],
        body: Option<&B>,
        what: &'static str,
    ) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        if self.offline {
            return Err(FinlitError::Offline(what));
        }
        let url = self.url(path);
        debug!(%url, what, "sending request");

        let client = self.client()?.clone();
        let mut req = client.post(&url);
        if !query.is_empty() {
            req = req.query(query);
        }
        if let Some(b) = body {
            req = req.json(b);
        }
        let resp = req.send()?.error_for_status()?;
        let decoded = resp.json::<T>()?;
        Ok(decoded)
    }

    /// Drop the HTTP client, if open.
    pub fn close(&mut self) {
        self.client = None;
    }
}
