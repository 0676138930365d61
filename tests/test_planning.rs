//! Insurance estimate, risk questionnaire and portfolio allocation tests.

use approx::assert_relative_eq;
use finlit_sdk::calculators::{
    Allocation, InsuranceEstimate, InsuranceInput, PortfolioAllocator, PortfolioInput, RiskAnswers,
    RiskLevel, RiskProfile,
};
use finlit_sdk::models::Breakdown;
use finlit_sdk::{calculate, FinlitError};

// ---------------------------------------------------------------------------
// InsuranceEstimate
// ---------------------------------------------------------------------------

#[test]
fn insurance_cover_for_thirties() {
    let r = calculate::<InsuranceEstimate>(&InsuranceInput::default()).unwrap();

    assert_relative_eq!(r.recommended_cover, 15_000_000.0);
    assert_relative_eq!(r.additional_cover, 15_000_000.0);
    assert_relative_eq!(r.annual_premium, 13_500.0, max_relative = 1e-12);
    assert_relative_eq!(r.monthly_premium, 1_125.0, max_relative = 1e-12);
}

#[test]
fn smoker_pays_loading() {
    let input = InsuranceInput {
        smoker: true,
        ..InsuranceInput::default()
    };
    let r = calculate::<InsuranceEstimate>(&input).unwrap();
    assert_relative_eq!(r.annual_premium, 20_250.0, max_relative = 1e-12);
}

#[test]
fn existing_cover_reduces_need() {
    let input = InsuranceInput {
        existing_cover: 5_000_000.0,
        ..InsuranceInput::default()
    };
    let r = calculate::<InsuranceEstimate>(&input).unwrap();

    assert_relative_eq!(r.additional_cover, 10_000_000.0);
    assert_relative_eq!(r.annual_premium, 9_000.0, max_relative = 1e-12);
}

#[test]
fn over_insured_needs_nothing() {
    let input = InsuranceInput {
        existing_cover: 50_000_000.0,
        ..InsuranceInput::default()
    };
    let r = calculate::<InsuranceEstimate>(&input).unwrap();

    assert_eq!(r.additional_cover, 0.0);
    assert_eq!(r.annual_premium, 0.0);
}

#[test]
fn age_bands_change_multiplier() {
    let young = calculate::<InsuranceEstimate>(&InsuranceInput {
        age: 25,
        ..InsuranceInput::default()
    })
    .unwrap();
    let older = calculate::<InsuranceEstimate>(&InsuranceInput {
        age: 55,
        ..InsuranceInput::default()
    })
    .unwrap();

    assert_relative_eq!(young.recommended_cover, 20_000_000.0);
    assert_relative_eq!(older.recommended_cover, 10_000_000.0);
}

#[test]
fn band_edges_and_oldest_band() {
    let at = |age| {
        calculate::<InsuranceEstimate>(&InsuranceInput { age, ..InsuranceInput::default() })
            .unwrap()
    };

    assert_relative_eq!(at(49).recommended_cover, 12_000_000.0);
    assert_relative_eq!(at(50).recommended_cover, 10_000_000.0);

    let oldest = at(65);
    assert_relative_eq!(oldest.recommended_cover, 10_000_000.0);
    assert_relative_eq!(oldest.annual_premium, 35_000.0, max_relative = 1e-12);
}

#[test]
fn insurance_rejects_age_out_of_range() {
    let input = InsuranceInput {
        age: 70,
        ..InsuranceInput::default()
    };
    let err = calculate::<InsuranceEstimate>(&input).unwrap_err();
    assert!(err.to_string().contains("Age must be at most 65"));
}

// ---------------------------------------------------------------------------
// RiskProfile
// ---------------------------------------------------------------------------

#[test]
fn default_answers_score_aggressive() {
    let r = calculate::<RiskProfile>(&RiskAnswers::default()).unwrap();

    assert_relative_eq!(r.score, 70.0);
    assert_eq!(r.level, RiskLevel::Aggressive);
    assert_eq!(r.allocation, RiskLevel::Aggressive.allocation());
}

#[test]
fn cautious_answers_score_conservative() {
    let answers = RiskAnswers {
        age: 58,
        horizon_years: 2,
        loss_tolerance: 1,
        income_stability: 2,
        experience: 1,
    };
    let r = calculate::<RiskProfile>(&answers).unwrap();

    // 5 + 3 + 0 + 3.75 + 0
    assert_relative_eq!(r.score, 11.75);
    assert_eq!(r.level, RiskLevel::Conservative);
}

#[test]
fn maximum_answers_score_hundred() {
    let answers = RiskAnswers {
        age: 22,
        horizon_years: 30,
        loss_tolerance: 5,
        income_stability: 5,
        experience: 5,
    };
    assert_relative_eq!(RiskProfile::score(&answers), 100.0);
}

#[test]
fn score_thresholds() {
    assert_eq!(RiskLevel::from_score(39.9), RiskLevel::Conservative);
    assert_eq!(RiskLevel::from_score(40.0), RiskLevel::Moderate);
    assert_eq!(RiskLevel::from_score(69.9), RiskLevel::Moderate);
    assert_eq!(RiskLevel::from_score(70.0), RiskLevel::Aggressive);
}

#[test]
fn model_allocations_sum_to_hundred() {
    for level in [RiskLevel::Conservative, RiskLevel::Moderate, RiskLevel::Aggressive] {
        assert_relative_eq!(level.allocation().total(), 100.0);
    }
}

#[test]
fn model_allocations_map_back_to_their_level() {
    for level in [RiskLevel::Conservative, RiskLevel::Moderate, RiskLevel::Aggressive] {
        let score = level.allocation().score();
        assert_eq!(RiskLevel::from_portfolio_score(score), level);
    }
}

#[test]
fn answers_outside_scale_are_rejected() {
    let answers = RiskAnswers {
        loss_tolerance: 6,
        ..RiskAnswers::default()
    };
    assert!(matches!(
        calculate::<RiskProfile>(&answers),
        Err(FinlitError::Validation(_))
    ));
}

// ---------------------------------------------------------------------------
// PortfolioAllocator
// ---------------------------------------------------------------------------

#[test]
fn portfolio_splits_amount() {
    let r = calculate::<PortfolioAllocator>(&PortfolioInput::default()).unwrap();

    assert_relative_eq!(r.equity_amount, 500_000.0);
    assert_relative_eq!(r.debt_amount, 400_000.0);
    assert_relative_eq!(r.gold_amount, 100_000.0);
    assert_relative_eq!(r.score, 44.0, max_relative = 1e-12);
    assert_eq!(r.level, RiskLevel::Moderate);
}

#[test]
fn portfolio_breakdown_uses_amounts() {
    let r = calculate::<PortfolioAllocator>(&PortfolioInput::default()).unwrap();
    let total: f64 = r.breakdown().iter().map(|p| p.amount).sum();
    assert_relative_eq!(total, 1_000_000.0);
}

#[test]
fn portfolio_total_must_be_hundred() {
    let input = PortfolioInput {
        amount: 1_000_000.0,
        allocation: Allocation {
            equity: 60.0,
            debt: 30.0,
            gold: 20.0,
        },
    };
    match calculate::<PortfolioAllocator>(&input) {
        Err(FinlitError::Validation(errs)) => {
            assert_eq!(errs.len(), 1);
            assert_eq!(errs.for_field("total"), Some("Total allocation must be at most 100"));
        }
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[test]
fn portfolio_accepts_thirds_after_rounding() {
    let input = PortfolioInput {
        amount: 300_000.0,
        allocation: Allocation {
            equity: 33.3,
            debt: 33.3,
            gold: 33.4,
        },
    };
    assert!(calculate::<PortfolioAllocator>(&input).is_ok());
}
