//! Client for the remote "AI advisor" chat endpoint.
//!
//! Each message is sent with a short trailing window of the conversation.
//! When the endpoint cannot be reached, returns a non-2xx status or an
//! unusable body, the reply falls back to a canned answer picked by keyword.

use crate::config;
use crate::error::{FinlitError, Result};
use crate::http::ApiClient;
use crate::models::{ChatReply, ChatRequest, ChatResponse, ChatTurn, ReplySource};
use std::cell::RefCell;
use tracing::{debug, warn};

/// Keyword → canned reply, checked in order. First match wins.
const FALLBACK_REPLIES: &[(&str, &str)] = &[
    (
        "sip",
        "A SIP (Systematic Investment Plan) lets you invest a fixed amount in a mutual fund \
         every month. It builds discipline and averages out your purchase cost over time. \
         Try the SIP calculator to see how regular investing can grow.",
    ),
    (
        "saving",
        "A good rule of thumb is to save at least 20% of your income. Start with an emergency \
         fund covering 3 to 6 months of expenses, then automate your savings so they happen \
         before you spend.",
    ),
    (
        "credit",
        "To keep a healthy credit score, pay your bills and EMIs on time, keep your card \
         utilisation below 30%, and avoid applying for several loans at once.",
    ),
    (
        "mutual fund",
        "Mutual funds pool money from many investors and invest it in stocks, bonds or both. \
         Equity funds suit long-term goals, while debt funds are steadier for shorter horizons.",
    ),
];

pub const DEFAULT_FALLBACK: &str = "I'm sorry, I'm having trouble connecting right now. \
     Please try again in a moment, or explore the lessons and calculators in the meantime.";

/// Pick a canned reply for `message` by case-insensitive keyword scan.
pub fn fallback_reply(message: &str) -> &'static str {
    let lower = message.to_lowercase();
    FALLBACK_REPLIES
        .iter()
        .find(|(keyword, _)| lower.contains(keyword))
        .map(|(_, reply)| *reply)
        .unwrap_or(DEFAULT_FALLBACK)
}

/// The last [`CHAT_CONTEXT_WINDOW`](config::CHAT_CONTEXT_WINDOW) turns of `history`.
pub fn trailing_context(history: &[ChatTurn]) -> &[ChatTurn] {
    let start = history.len().saturating_sub(config::CHAT_CONTEXT_WINDOW);
    &history[start..]
}

// ---------------------------------------------------------------------------
// Advisor
// ---------------------------------------------------------------------------

/// Stateless chat interface bound to the SDK's HTTP client.
pub struct Advisor<'a> {
    client: &'a RefCell<ApiClient>,
}

impl<'a> Advisor<'a> {
    pub fn new(client: &'a RefCell<ApiClient>) -> Self {
        Self { client }
    }

    /// Send `message` with the trailing window of `history` as context.
    ///
    /// Only an empty message is an error; every transport or server failure
    /// becomes a [`ReplySource::Fallback`] reply.
    pub fn ask(&self, message: &str, history: &[ChatTurn]) -> Result<ChatReply> {
        let message = message.trim();
        if message.is_empty() {
            return Err(FinlitError::InvalidArgument("message is empty".into()));
        }

        match self.request(message, trailing_context(history)) {
            Ok(text) => Ok(ChatReply {
                text,
                source: ReplySource::Remote,
            }),
            Err(e) => {
                warn!(error = %e, "advisor endpoint unavailable; using canned reply");
                Ok(ChatReply {
                    text: fallback_reply(message).to_string(),
                    source: ReplySource::Fallback,
                })
            }
        }
    }

    fn request(&self, message: &str, context: &[ChatTurn]) -> Result<String> {
        let body = ChatRequest { message, context };
        debug!(context_turns = context.len(), "asking advisor");
        let resp: ChatResponse =
            self.client
                .borrow_mut()
                .post_json(config::CHAT_PATH, &[], Some(&body), "advisor chat")?;
        if resp.response.trim().is_empty() {
            return Err(FinlitError::Api("empty advisor response".into()));
        }
        Ok(resp.response)
    }
}

// ---------------------------------------------------------------------------
// Conversation
// ---------------------------------------------------------------------------

/// Ordered turns of one chat session. Lives only in memory.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Conversation {
    turns: Vec<ChatTurn>,
}

impl Conversation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ask the advisor and append both the message and the reply.
    pub fn send(&mut self, advisor: &Advisor<'_>, message: &str) -> Result<ChatReply> {
        let reply = advisor.ask(message, &self.turns)?;
        self.turns.push(ChatTurn::user(message.trim()));
        self.turns.push(ChatTurn::assistant(reply.text.clone()));
        Ok(reply)
    }

    pub fn turns(&self) -> &[ChatTurn] {
        &self.turns
    }

    pub fn clear(&mut self) {
        self.turns.clear();
    }
}
