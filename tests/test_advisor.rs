//! Advisor chat tests against a local stub endpoint.

mod common;

use common::{offline_sdk, refused_url, request_body, request_line, sdk_for, StubServer};
use finlit_sdk::advisor::{fallback_reply, trailing_context, DEFAULT_FALLBACK};
use finlit_sdk::models::{ChatTurn, ReplySource, Role};
use finlit_sdk::{Conversation, FinlitError};

// ---------------------------------------------------------------------------
// Canned replies
// ---------------------------------------------------------------------------

#[test]
fn fallback_matches_keywords_case_insensitively() {
    assert!(fallback_reply("How does a SIP work?").contains("Systematic Investment Plan"));
    assert!(fallback_reply("tips for SAVING money").contains("20% of your income"));
    assert!(fallback_reply("improve my Credit score").contains("credit score"));
    assert!(fallback_reply("what is a mutual fund").contains("pool money"));
}

#[test]
fn fallback_first_keyword_wins() {
    // "sip" is checked before "mutual fund"
    let reply = fallback_reply("Should I start a SIP in a mutual fund?");
    assert_eq!(reply, fallback_reply("sip"));
}

#[test]
fn fallback_default_for_unknown_topic() {
    assert_eq!(fallback_reply("tell me a joke"), DEFAULT_FALLBACK);
}

#[test]
fn trailing_context_keeps_last_five() {
    let history: Vec<ChatTurn> = (0..8).map(|i| ChatTurn::user(format!("m{i}"))).collect();
    let ctx = trailing_context(&history);

    assert_eq!(ctx.len(), 5);
    assert_eq!(ctx[0].content, "m3");
    assert_eq!(ctx[4].content, "m7");
}

#[test]
fn trailing_context_short_history_is_unchanged() {
    let history = vec![ChatTurn::user("hi"), ChatTurn::assistant("hello")];
    assert_eq!(trailing_context(&history), history.as_slice());
}

// ---------------------------------------------------------------------------
// Remote replies
// ---------------------------------------------------------------------------

#[test]
fn ask_returns_remote_reply() {
    let server = StubServer::respond_once(200, r#"{"response": "Start small and stay consistent."}"#);
    let sdk = sdk_for(&server.base_url);

    let reply = sdk.advisor().ask("How should I invest?", &[]).unwrap();
    assert_eq!(reply.source, ReplySource::Remote);
    assert_eq!(reply.text, "Start small and stay consistent.");

    let raw = server.received();
    assert!(request_line(&raw).starts_with("POST /api/chat "));
    let body = request_body(&raw);
    assert_eq!(body["message"], "How should I invest?");
    assert_eq!(body["context"].as_array().unwrap().len(), 0);
}

#[test]
fn ask_sends_trimmed_message_and_windowed_context() {
    let server = StubServer::respond_once(200, r#"{"response": "ok"}"#);
    let sdk = sdk_for(&server.base_url);
    let history: Vec<ChatTurn> = (0..7)
        .map(|i| {
            if i % 2 == 0 {
                ChatTurn::user(format!("q{i}"))
            } else {
                ChatTurn::assistant(format!("a{i}"))
            }
        })
        .collect();

    sdk.advisor().ask("  next question  ", &history).unwrap();

    let body = request_body(&server.received());
    assert_eq!(body["message"], "next question");
    let context = body["context"].as_array().unwrap();
    assert_eq!(context.len(), 5);
    assert_eq!(context[0]["content"], "q2");
    assert_eq!(context[0]["role"], "user");
    assert_eq!(context[1]["role"], "assistant");
}

// ---------------------------------------------------------------------------
// Fallbacks
// ---------------------------------------------------------------------------

#[test]
fn server_error_falls_back() {
    let server = StubServer::respond_once(500, r#"{"detail": "boom"}"#);
    let sdk = sdk_for(&server.base_url);

    let reply = sdk.advisor().ask("what is a sip", &[]).unwrap();
    assert_eq!(reply.source, ReplySource::Fallback);
    assert_eq!(reply.text, fallback_reply("sip"));
    server.received();
}

#[test]
fn unreachable_backend_falls_back() {
    let sdk = sdk_for(&refused_url());

    let reply = sdk.advisor().ask("credit card tips", &[]).unwrap();
    assert_eq!(reply.source, ReplySource::Fallback);
    assert_eq!(reply.text, fallback_reply("credit"));
}

#[test]
fn malformed_body_falls_back() {
    let server = StubServer::respond_once(200, r#"{"unexpected": true}"#);
    let sdk = sdk_for(&server.base_url);

    let reply = sdk.advisor().ask("hello", &[]).unwrap();
    assert_eq!(reply.source, ReplySource::Fallback);
    assert_eq!(reply.text, DEFAULT_FALLBACK);
    server.received();
}

#[test]
fn blank_response_falls_back() {
    let server = StubServer::respond_once(200, r#"{"response": "   "}"#);
    let sdk = sdk_for(&server.base_url);

    let reply = sdk.advisor().ask("saving goals", &[]).unwrap();
    assert_eq!(reply.source, ReplySource::Fallback);
    server.received();
}

#[test]
fn offline_sdk_never_calls_backend() {
    let sdk = offline_sdk();

    let reply = sdk.advisor().ask("mutual fund basics", &[]).unwrap();
    assert_eq!(reply.source, ReplySource::Fallback);
    assert_eq!(reply.text, fallback_reply("mutual fund"));
}

#[test]
fn empty_message_is_rejected() {
    let sdk = offline_sdk();
    assert!(matches!(
        sdk.advisor().ask("   ", &[]),
        Err(FinlitError::InvalidArgument(_))
    ));
}

// ---------------------------------------------------------------------------
// Conversation
// ---------------------------------------------------------------------------

#[test]
fn conversation_records_both_turns() {
    let sdk = offline_sdk();
    let advisor = sdk.advisor();
    let mut convo = Conversation::new();

    convo.send(&advisor, " What is a SIP? ").unwrap();
    convo.send(&advisor, "And credit?").unwrap();

    let turns = convo.turns();
    assert_eq!(turns.len(), 4);
    assert_eq!(turns[0].role, Role::User);
    assert_eq!(turns[0].content, "What is a SIP?");
    assert_eq!(turns[1].role, Role::Assistant);
    assert_eq!(turns[1].content, fallback_reply("sip"));
    assert_eq!(turns[3].content, fallback_reply("credit"));
}

#[test]
fn conversation_rejected_message_leaves_no_trace() {
    let sdk = offline_sdk();
    let mut convo = Conversation::new();

    assert!(convo.send(&sdk.advisor(), "").is_err());
    assert!(convo.turns().is_empty());
}

#[test]
fn conversation_clear() {
    let sdk = offline_sdk();
    let mut convo = Conversation::new();
    convo.send(&sdk.advisor(), "hi").unwrap();
    convo.clear();
    assert!(convo.turns().is_empty());
}
