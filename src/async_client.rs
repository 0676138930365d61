//! Async wrapper around [`FinlitSdk`] for use in async runtimes (Tokio, etc.).
//!
//! Runs all SDK operations on a blocking thread pool via
//! [`tokio::task::spawn_blocking`], keeping the async event loop free while
//! backend calls wait on the network.
//!
//! # Example
//!
//! ```ignore
//! use finlit_sdk::AsyncFinlitSdk;
//! use finlit_sdk::calculators::{Sip, SipInput};
//!
//! #[tokio::main]
//! async fn main() {
//!     let sdk = AsyncFinlitSdk::builder().build().await.unwrap();
//!
//!     // Run any sync SDK method via closure
//!     let sip = sdk.run(|s| s.calculate::<Sip>(&SipInput::default())).await.unwrap();
//!
//!     // Convenience method for the advisor
//!     let reply = sdk.ask("What is a SIP?", Vec::new()).await.unwrap();
//! }
//! ```

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::calculators::Calculator;
use crate::config;
use crate::error::{FinlitError, Result};
use crate::models::{ChatReply, ChatTurn};
use crate::FinlitSdk;

// ---------------------------------------------------------------------------
// AsyncFinlitSdkBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing an [`AsyncFinlitSdk`] instance.
pub struct AsyncFinlitSdkBuilder {
    api_base: Option<String>,
    offline: bool,
    timeout: Duration,
    lessons_file: Option<PathBuf>,
}

impl Default for AsyncFinlitSdkBuilder {
    fn default() -> Self {
        Self {
            api_base: None,
            offline: false,
            timeout: config::DEFAULT_TIMEOUT,
            lessons_file: None,
        }
    }
}

impl AsyncFinlitSdkBuilder {
    /// Set the backend base URL.
    pub fn api_base(mut self, base: impl Into<String>) -> Self {
        self.api_base = Some(base.into());
        self
    }

    /// Enable or disable offline mode.
    pub fn offline(mut self, offline: bool) -> Self {
        self.offline = offline;
        self
    }

    /// Set the HTTP request timeout for backend calls.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Load lessons from a JSON file instead of the built-in catalog.
    pub fn lessons_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.lessons_file = Some(path.as_ref().to_path_buf());
        self
    }

    /// Build the async SDK.
    ///
    /// Initialization runs on the blocking thread pool so reading a lessons
    /// file won't block the async event loop.
    pub async fn build(self) -> Result<AsyncFinlitSdk> {
        tokio::task::spawn_blocking(move || {
            let mut builder = FinlitSdk::builder()
                .offline(self.offline)
                .timeout(self.timeout);
            if let Some(base) = self.api_base {
                builder = builder.api_base(base);
            }
            if let Some(path) = self.lessons_file {
                builder = builder.lessons_file(path);
            }
            let sdk = builder.build()?;
            Ok(AsyncFinlitSdk {
                inner: Arc::new(Mutex::new(sdk)),
            })
        })
        .await
        .map_err(|e| FinlitError::InvalidArgument(format!("Task join error: {e}")))?
    }
}

// ---------------------------------------------------------------------------
// AsyncFinlitSdk
// ---------------------------------------------------------------------------

/// Async wrapper around [`FinlitSdk`].
///
/// All operations are dispatched to a blocking thread pool via
/// [`tokio::task::spawn_blocking`]. The underlying [`FinlitSdk`] is
/// protected by a [`Mutex`] since it uses `RefCell` internally.
pub struct AsyncFinlitSdk {
    inner: Arc<Mutex<FinlitSdk>>,
}

impl AsyncFinlitSdk {
    /// Create a new builder for configuring the async SDK.
    pub fn builder() -> AsyncFinlitSdkBuilder {
        AsyncFinlitSdkBuilder::default()
    }

    /// Run a sync SDK operation on the blocking thread pool.
    ///
    /// The closure receives an `&FinlitSdk` reference and should return
    /// a `Result<T>`.
    pub async fn run<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&FinlitSdk) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let sdk = self.inner.clone();
        tokio::task::spawn_blocking(move || {
            let guard = sdk
                .lock()
                .map_err(|_| FinlitError::InvalidArgument("SDK lock poisoned".into()))?;
            f(&guard)
        })
        .await
        .map_err(|e| FinlitError::InvalidArgument(format!("Task join error: {e}")))?
    }

    /// Validate `input` and run calculator `C`.
    pub async fn calculate<C>(&self, input: C::Input) -> Result<C::Output>
    where
        C: Calculator + 'static,
        C::Input: Send + 'static,
        C::Output: Send + 'static,
    {
        self.run(move |s| s.calculate::<C>(&input)).await
    }

    /// Ask the advisor. See [`Advisor::ask`](crate::advisor::Advisor::ask).
    pub async fn ask(&self, message: &str, history: Vec<ChatTurn>) -> Result<ChatReply> {
        let message = message.to_string();
        self.run(move |s| s.advisor().ask(&message, &history)).await
    }

    /// Summarize a news article. See
    /// [`NewsSummarizer::summarize`](crate::news::NewsSummarizer::summarize).
    pub async fn summarize(&self, title: &str, content: &str) -> Result<String> {
        let title = title.to_string();
        let content = content.to_string();
        self.run(move |s| s.news().summarize(&title, &content)).await
    }

    /// Close the SDK, releasing all resources.
    ///
    /// The SDK is dropped on the blocking pool, since the blocking HTTP
    /// client cannot be dropped from inside the async runtime.
    pub async fn close(self) -> Result<()> {
        let inner = self.inner;
        tokio::task::spawn_blocking(move || drop(inner))
            .await
            .map_err(|e| FinlitError::InvalidArgument(format!("Task join error: {e}")))
    }
}
