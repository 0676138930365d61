//! Async wrapper tests. Built only with `--features async`.

#![cfg(feature = "async")]

use finlit_sdk::calculators::{Loan, LoanInput, Sip, SipInput};
use finlit_sdk::models::ReplySource;
use finlit_sdk::{AsyncFinlitSdk, FinlitError};

fn runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Builder::new_current_thread()
        .build()
        .unwrap()
}

#[test]
fn async_calculate_matches_sync() {
    runtime().block_on(async {
        let sdk = AsyncFinlitSdk::builder().offline(true).build().await.unwrap();

        let r = sdk.calculate::<Sip>(SipInput::default()).await.unwrap();
        let expected = finlit_sdk::calculate::<Sip>(&SipInput::default()).unwrap();
        assert_eq!(r, expected);

        sdk.close().await.unwrap();
    });
}

#[test]
fn async_calculate_propagates_validation_errors() {
    runtime().block_on(async {
        let sdk = AsyncFinlitSdk::builder().offline(true).build().await.unwrap();

        let input = LoanInput {
            principal: 10.0,
            ..LoanInput::default()
        };
        let result = sdk.calculate::<Loan>(input).await;
        assert!(matches!(result, Err(FinlitError::Validation(_))));
    });
}

#[test]
fn async_ask_offline_uses_fallback() {
    runtime().block_on(async {
        let sdk = AsyncFinlitSdk::builder().offline(true).build().await.unwrap();

        let reply = sdk.ask("What is a SIP?", Vec::new()).await.unwrap();
        assert_eq!(reply.source, ReplySource::Fallback);
    });
}

#[test]
fn async_summarize_offline_fails() {
    runtime().block_on(async {
        let sdk = AsyncFinlitSdk::builder().offline(true).build().await.unwrap();

        let result = sdk.summarize("Title", "Body").await;
        assert!(matches!(result, Err(FinlitError::Offline(_))));
    });
}

#[test]
fn async_run_exposes_sync_sdk() {
    runtime().block_on(async {
        let sdk = AsyncFinlitSdk::builder().offline(true).build().await.unwrap();

        let count = sdk.run(|s| Ok(s.lessons().len())).await.unwrap();
        assert_eq!(count, 5);
    });
}
