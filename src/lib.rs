//! Personal-finance education SDK for Rust.
//!
//! Provides closed-form financial calculators (SIP, FD, PPF, EPF, loan EMI,
//! income tax and more) behind declarative input validation, lesson content
//! with embedded quizzes, and a thin client for the remote advisor chat and
//! news-summary endpoints with static fallbacks.
//!
//! # Quick start
//!
//! ```no_run
//! use finlit_sdk::calculators::{FixedDeposit, FixedDepositInput};
//! use finlit_sdk::FinlitSdk;
//!
//! let sdk = FinlitSdk::builder().build().unwrap();
//!
//! // Run a calculator
//! let fd = sdk.calculate::<FixedDeposit>(&FixedDepositInput::default()).unwrap();
//!
//! // Ask the advisor (falls back to a canned answer when offline)
//! let reply = sdk.advisor().ask("How do I start a SIP?", &[]).unwrap();
//! ```

pub mod advisor;
#[cfg(feature = "async")]
pub mod async_client;
pub mod calculators;
pub mod config;
pub mod error;
pub mod format;
pub mod http;
pub mod lessons;
pub mod models;
pub mod news;
pub mod quiz;
pub mod schema;

pub use advisor::{Advisor, Conversation};
#[cfg(feature = "async")]
pub use async_client::AsyncFinlitSdk;
pub use calculators::{calculate, Calculator, CalculatorView};
pub use error::{FinlitError, Result};
pub use http::ApiClient;
pub use lessons::LessonCatalog;
pub use news::NewsSummarizer;
pub use quiz::QuizState;
pub use schema::{FieldRule, FormSchema};

use std::cell::RefCell;
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use models::Lesson;

// ---------------------------------------------------------------------------
// FinlitSdkBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing a [`FinlitSdk`] instance.
///
/// Use [`FinlitSdk::builder()`] to obtain a builder, chain configuration
/// methods, and call [`build()`](FinlitSdkBuilder::build) to create the SDK.
pub struct FinlitSdkBuilder {
    api_base: Option<String>,
    offline: bool,
    timeout: Duration,
    lessons_file: Option<PathBuf>,
}

impl Default for FinlitSdkBuilder {
    fn default() -> Self {
        Self {
            api_base: None,
            offline: false,
            timeout: config::DEFAULT_TIMEOUT,
            lessons_file: None,
        }
    }
}

impl FinlitSdkBuilder {
    /// Set the backend base URL (e.g. `https://api.example.com`).
    ///
    /// If not set, `FINLIT_API_BASE` is read from the environment, falling
    /// back to `http://localhost:8000`.
    pub fn api_base(mut self, base: impl Into<String>) -> Self {
        self.api_base = Some(base.into());
        self
    }

    /// Enable or disable offline mode.
    ///
    /// When offline, the SDK never calls the backend: the advisor answers
    /// from its canned replies and news summaries fail fast. Defaults to
    /// `false`.
    pub fn offline(mut self, offline: bool) -> Self {
        self.offline = offline;
        self
    }

    /// Set the HTTP request timeout for backend calls.
    ///
    /// Defaults to 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Load lessons from a JSON file instead of the built-in catalog.
    pub fn lessons_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.lessons_file = Some(path.as_ref().to_path_buf());
        self
    }

    /// Build the SDK.
    ///
    /// Loads the lesson catalog eagerly. The HTTP client is created lazily
    /// on the first backend call.
    pub fn build(self) -> Result<FinlitSdk> {
        let base = self.api_base.unwrap_or_else(config::api_base_from_env);
        let client = ApiClient::new(&base, self.offline, self.timeout);
        let lessons = match self.lessons_file {
            Some(path) => LessonCatalog::from_json_file(path)?,
            None => LessonCatalog::builtin()?,
        };
        Ok(FinlitSdk {
            client: RefCell::new(client),
            lessons,
        })
    }
}

// ---------------------------------------------------------------------------
// FinlitSdk
// ---------------------------------------------------------------------------

/// The main entry point for the SDK.
///
/// Owns the [`ApiClient`] and the [`LessonCatalog`], and exposes the backend
/// interfaces as lightweight borrowing wrappers. Calculators are pure and
/// can also be used directly through [`calculators::calculate`].
///
/// Created via [`FinlitSdk::builder()`].
pub struct FinlitSdk {
    client: RefCell<ApiClient>,
    lessons: LessonCatalog,
}

impl FinlitSdk {
    /// Create a new builder for configuring the SDK.
    pub fn builder() -> FinlitSdkBuilder {
        FinlitSdkBuilder::default()
    }

    // -- Calculators -------------------------------------------------------

    /// Validate `input` and run calculator `C`.
    pub fn calculate<C: Calculator>(&self, input: &C::Input) -> Result<C::Output> {
        calculators::calculate::<C>(input)
    }

    /// A fresh view-model for calculator `C`, pre-filled with its defaults.
    pub fn view<C: Calculator>(&self) -> CalculatorView<C>
    where
        C::Input: Default,
    {
        CalculatorView::default()
    }

    // -- Lessons -----------------------------------------------------------

    /// The loaded lesson catalog.
    pub fn lessons(&self) -> &LessonCatalog {
        &self.lessons
    }

    /// Look up a lesson by id.
    pub fn lesson(&self, id: &str) -> Result<&Lesson> {
        self.lessons.get(id)
    }

    // -- Backend accessors -------------------------------------------------

    /// Access the advisor chat interface.
    ///
    /// Returns a lightweight wrapper that borrows the HTTP client.
    pub fn advisor(&self) -> Advisor<'_> {
        Advisor::new(&self.client)
    }

    /// Access the news summary interface.
    pub fn news(&self) -> NewsSummarizer<'_> {
        NewsSummarizer::new(&self.client)
    }

    /// The backend base URL in use.
    pub fn api_base(&self) -> String {
        self.client.borrow().base_url.clone()
    }

    /// Whether backend calls are disabled. See
    /// [`FinlitSdkBuilder::offline`].
    pub fn is_offline(&self) -> bool {
        self.client.borrow().offline
    }

    /// Consume the SDK and release the HTTP client.
    pub fn close(self) {
        self.client.borrow_mut().close();
    }
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

impl fmt::Display for FinlitSdk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let client = self.client.borrow();
        write!(
            f,
            "FinlitSdk(api_base={}, lessons={}, offline={})",
            client.base_url,
            self.lessons.len(),
            client.offline
        )
    }
}
