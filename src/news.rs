//! Client for the remote news summary endpoint.

use crate::config;
use crate::error::{FinlitError, Result};
use crate::http::ApiClient;
use crate::models::NewsSummaryResponse;
use std::cell::RefCell;
use tracing::warn;

pub const SUMMARY_FALLBACK: &str = "Unable to generate a summary right now. Please try again.";

pub struct NewsSummarizer<'a> {
    client: &'a RefCell<ApiClient>,
}

impl<'a> NewsSummarizer<'a> {
    pub fn new(client: &'a RefCell<ApiClient>) -> Self {
        Self { client }
    }

    /// Ask the backend to summarize an article.
    ///
    /// Title and content travel as query parameters. A response with
    /// `success: false` or no summary is an [`FinlitError::Api`] error.
    pub fn summarize(&self, title: &str, content: &str) -> Result<String> {
        if title.trim().is_empty() && content.trim().is_empty() {
            return Err(FinlitError::InvalidArgument(
                "title and content are both empty".into(),
            ));
        }
        let resp: NewsSummaryResponse = self.client.borrow_mut().post_json(
            config::NEWS_SUMMARY_PATH,
            &[("title", title), ("content", content)],
            None::<&()>,
            "news summary",
        )?;

        match resp {
            NewsSummaryResponse {
                success: true,
                summary: Some(summary),
                ..
            } if !summary.trim().is_empty() => Ok(summary),
            NewsSummaryResponse { error, .. } => Err(FinlitError::Api(
                error.unwrap_or_else(|| "summary unavailable".to_string()),
            )),
        }
    }

    /// Like [`summarize`](Self::summarize), but any failure becomes a
    /// generic "try again" message.
    pub fn summarize_or_fallback(&self, title: &str, content: &str) -> String {
        self.summarize(title, content).unwrap_or_else(|e| {
            warn!(error = %e, "news summary failed");
            SUMMARY_FALLBACK.to_string()
        })
    }
}
