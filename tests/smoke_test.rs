//! End-to-end smoke test for the finlit SDK.
//!
//! Runs every calculator with its defaults, plays each built-in quiz, and
//! talks to a live backend at `FINLIT_API_BASE` (default
//! `http://localhost:8000`) for the advisor and news summary endpoints.
//!
//! Run with:
//! ```sh
//! FINLIT_API_BASE=http://localhost:8000 cargo test -- --ignored --nocapture
//! ```

use finlit_sdk::calculators::*;
use finlit_sdk::format::{format_compact, format_inr};
use finlit_sdk::models::{Breakdown, ChatTurn, ReplySource};
use finlit_sdk::{Calculator, Conversation, FinlitSdk, QuizState};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Print a section header to stderr.
fn section(name: &str) {
    eprintln!("\n{}", "=".repeat(60));
    eprintln!("  {}", name);
    eprintln!("{}", "=".repeat(60));
}

/// Counters for pass/fail/skip reporting.
struct Counters {
    pass: usize,
    fail: usize,
    skip: usize,
}

impl Counters {
    fn new() -> Self {
        Self {
            pass: 0,
            fail: 0,
            skip: 0,
        }
    }

    fn check(&mut self, label: &str, condition: bool, detail: &str) {
        let status = if condition { "PASS" } else { "FAIL" };
        if condition {
            self.pass += 1;
        } else {
            self.fail += 1;
        }
        if detail.is_empty() {
            eprintln!("  [{}] {}", status, label);
        } else {
            eprintln!("  [{}] {} -- {}", status, label, detail);
        }
    }

    fn skip(&mut self, label: &str, reason: &str) {
        self.skip += 1;
        if reason.is_empty() {
            eprintln!("  [SKIP] {}", label);
        } else {
            eprintln!("  [SKIP] {} -- {}", label, reason);
        }
    }
}

/// Run a calculator on its default input and check the breakdown is finite.
fn run_default<C>(sdk: &FinlitSdk, c: &mut Counters)
where
    C: Calculator,
    C::Input: Default,
{
    match sdk.calculate::<C>(&C::Input::default()) {
        Ok(out) => {
            let points = out.breakdown();
            let finite = points.iter().all(|p| p.amount.is_finite());
            let detail = points
                .iter()
                .map(|p| format!("{}={}", p.label, format_compact(p.amount)))
                .collect::<Vec<_>>()
                .join(", ");
            c.check(C::NAME, finite && !points.is_empty(), &detail);
        }
        Err(e) => c.check(C::NAME, false, &e.to_string()),
    }
}

// ---------------------------------------------------------------------------
// Main smoke test
// ---------------------------------------------------------------------------

#[test]
#[ignore]
fn smoke_test() {
    let sdk = FinlitSdk::builder().build().unwrap();
    let mut c = Counters::new();

    // ================================================================
    // 1. CALCULATORS
    // ================================================================
    section("Calculators (defaults)");

    run_default::<FixedDeposit>(&sdk, &mut c);
    run_default::<Ppf>(&sdk, &mut c);
    run_default::<Epf>(&sdk, &mut c);
    run_default::<PostOfficeDeposit>(&sdk, &mut c);
    run_default::<Sip>(&sdk, &mut c);
    run_default::<StepUpSip>(&sdk, &mut c);
    run_default::<Lumpsum>(&sdk, &mut c);
    run_default::<GoalSip>(&sdk, &mut c);
    run_default::<Annuity>(&sdk, &mut c);
    run_default::<Loan>(&sdk, &mut c);
    run_default::<IncomeTax>(&sdk, &mut c);
    run_default::<CapitalGains>(&sdk, &mut c);
    run_default::<BudgetRule>(&sdk, &mut c);
    run_default::<Affordability>(&sdk, &mut c);
    run_default::<EmergencyFund>(&sdk, &mut c);
    run_default::<Inflation>(&sdk, &mut c);
    run_default::<InsuranceEstimate>(&sdk, &mut c);
    run_default::<RiskProfile>(&sdk, &mut c);
    run_default::<PortfolioAllocator>(&sdk, &mut c);

    let nw = sdk.calculate::<NetWorth>(&NetWorthInput {
        assets: vec![LineItem::new("Bank", 250_000.0)],
        liabilities: vec![LineItem::new("Loan", 50_000.0)],
    });
    c.check(
        "net_worth",
        nw.as_ref().map(|r| r.net_worth == 200_000.0).unwrap_or(false),
        &nw.map(|r| format_inr(r.net_worth)).unwrap_or_default(),
    );

    // ================================================================
    // 2. LESSONS & QUIZZES
    // ================================================================
    section("Lessons & quizzes");

    c.check(
        "builtin catalog",
        !sdk.lessons().is_empty(),
        &format!("{} lessons", sdk.lessons().len()),
    );
    for lesson in sdk.lessons().list() {
        let mut state = QuizState::new();
        for (idx, q) in lesson.quiz.questions.iter().enumerate() {
            if let Err(e) = state.select(&lesson.quiz, idx, q.correct_answer) {
                c.check(&lesson.id, false, &e.to_string());
            }
        }
        let score = state.submit(&lesson.quiz).unwrap_or(0);
        c.check(
            &format!("quiz {}", lesson.id),
            score as usize == lesson.quiz.len(),
            &format!("{}/{}", score, lesson.quiz.len()),
        );
    }

    // ================================================================
    // 3. ADVISOR
    // ================================================================
    section("Advisor chat");

    let reply = sdk.advisor().ask("What is a SIP?", &[]).unwrap();
    if reply.source == ReplySource::Remote {
        c.check("ask (remote)", !reply.text.is_empty(), &reply.text);
    } else {
        c.skip("ask (remote)", "backend unavailable; canned reply used");
    }

    let history = vec![
        ChatTurn::user("I earn 50,000 a month"),
        ChatTurn::assistant("Great, let's plan a budget."),
    ];
    let reply = sdk.advisor().ask("How much should I save?", &history).unwrap();
    c.check("ask with history", !reply.text.is_empty(), &format!("{:?}", reply.source));

    let mut convo = Conversation::new();
    let advisor = sdk.advisor();
    let _ = convo.send(&advisor, "Tell me about credit scores");
    c.check("conversation turns", convo.turns().len() == 2, "");

    // ================================================================
    // 4. NEWS
    // ================================================================
    section("News summary");

    match sdk.news().summarize(
        "RBI keeps repo rate unchanged",
        "The Reserve Bank left the repo rate at 6.5 percent for the ninth time.",
    ) {
        Ok(summary) => c.check("summarize", !summary.is_empty(), &summary),
        Err(e) => c.skip("summarize", &e.to_string()),
    }

    // ================================================================
    // 5. DISPLAY / CLOSE
    // ================================================================
    section("Display & Close");

    let display = format!("{}", sdk);
    c.check(
        "Display impl",
        display.contains("FinlitSdk"),
        &format!("display={}", display),
    );

    sdk.close();
    c.check("close()", true, "SDK closed cleanly");

    // ================================================================
    // SUMMARY
    // ================================================================
    section("SMOKE TEST COMPLETE");

    let total_checks = c.pass + c.fail;
    eprintln!("  Total:   {} checks ({} skipped)", total_checks, c.skip);
    eprintln!("  Passed:  {}", c.pass);
    eprintln!("  Failed:  {}", c.fail);
    eprintln!();

    if c.fail > 0 {
        eprintln!("  *** FAILURES DETECTED ***");
        eprintln!();
    }

    assert_eq!(c.fail, 0, "{} smoke test checks failed", c.fail);
}
