//! Risk questionnaire and portfolio allocation.
//!
//! Point tables, profile cut-offs, model allocations and the portfolio score
//! weights are presentational constants. They give learners a feel for the
//! trade-offs and carry no actuarial meaning.

use serde::{Deserialize, Serialize};

use super::Calculator;
use crate::models::{Breakdown, ChartPoint};
use crate::schema::{FieldRule, FormSchema};

pub const EQUITY_WEIGHT: f64 = 0.7;
pub const DEBT_WEIGHT: f64 = 0.2;
pub const GOLD_WEIGHT: f64 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Allocation {
    /// Percent of the portfolio.
    pub equity: f64,
    pub debt: f64,
    pub gold: f64,
}

impl Allocation {
    pub fn total(&self) -> f64 {
        self.equity + self.debt + self.gold
    }

    /// `equity·0.7 + debt·0.2 + gold·0.1`
    pub fn score(&self) -> f64 {
        self.equity * EQUITY_WEIGHT + self.debt * DEBT_WEIGHT + self.gold * GOLD_WEIGHT
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Conservative,
    Moderate,
    Aggressive,
}

impl RiskLevel {
    /// Level for a questionnaire score out of 100.
    pub fn from_score(score: f64) -> Self {
        if score < 40.0 {
            RiskLevel::Conservative
        } else if score < 70.0 {
            RiskLevel::Moderate
        } else {
            RiskLevel::Aggressive
        }
    }

    /// Level implied by an allocation's weighted score (see [`Allocation::score`]).
    pub fn from_portfolio_score(score: f64) -> Self {
        if score < 35.0 {
            RiskLevel::Conservative
        } else if score < 50.0 {
            RiskLevel::Moderate
        } else {
            RiskLevel::Aggressive
        }
    }

    /// Model allocation for the profile.
    pub fn allocation(self) -> Allocation {
        match self {
            RiskLevel::Conservative => Allocation {
                equity: 30.0,
                debt: 60.0,
                gold: 10.0,
            },
            RiskLevel::Moderate => Allocation {
                equity: 50.0,
                debt: 40.0,
                gold: 10.0,
            },
            RiskLevel::Aggressive => Allocation {
                equity: 75.0,
                debt: 15.0,
                gold: 10.0,
            },
        }
    }
}

// ---------------------------------------------------------------------------
// RiskProfile
// ---------------------------------------------------------------------------

/// Questionnaire answers. The 1–5 answers run from lowest to highest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskAnswers {
    pub age: u32,
    pub horizon_years: u32,
    pub loss_tolerance: u32,
    pub income_stability: u32,
    pub experience: u32,
}

impl Default for RiskAnswers {
    fn default() -> Self {
        Self {
            age: 30,
            horizon_years: 10,
            loss_tolerance: 3,
            income_stability: 3,
            experience: 3,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskProfileResult {
    /// 0–100.
    pub score: f64,
    pub level: RiskLevel,
    pub allocation: Allocation,
}

impl Breakdown for RiskProfileResult {
    fn breakdown(&self) -> Vec<ChartPoint> {
        self.allocation.breakdown()
    }
}

impl Breakdown for Allocation {
    fn breakdown(&self) -> Vec<ChartPoint> {
        vec![
            ChartPoint::new("Equity", self.equity),
            ChartPoint::new("Debt", self.debt),
            ChartPoint::new("Gold", self.gold),
        ]
    }
}

pub struct RiskProfile;

impl RiskProfile {
    /// Questionnaire score out of 100.
    pub fn score(a: &RiskAnswers) -> f64 {
        let age = match a.age {
            0..=29 => 25.0,
            30..=39 => 20.0,
            40..=49 => 12.0,
            _ => 5.0,
        };
        let horizon = match a.horizon_years {
            10..=u32::MAX => 25.0,
            5..=9 => 15.0,
            3..=4 => 8.0,
            _ => 3.0,
        };
        let scale = |answer: u32, max: f64| (answer.clamp(1, 5) - 1) as f64 / 4.0 * max;
        age + horizon
            + scale(a.loss_tolerance, 20.0)
            + scale(a.income_stability, 15.0)
            + scale(a.experience, 15.0)
    }
}

impl Calculator for RiskProfile {
    type Input = RiskAnswers;
    type Output = RiskProfileResult;

    const NAME: &'static str = "risk_profile";

    fn schema() -> FormSchema {
        FormSchema::new(Self::NAME)
            .field(FieldRule::new("age", "Age").min(18.0).max(100.0).whole())
            .field(FieldRule::new("horizon_years", "Investment horizon").min(0.0).max(50.0).whole())
            .field(FieldRule::new("loss_tolerance", "Loss tolerance").min(1.0).max(5.0).whole())
            .field(FieldRule::new("income_stability", "Income stability").min(1.0).max(5.0).whole())
            .field(FieldRule::new("experience", "Investing experience").min(1.0).max(5.0).whole())
    }

    fn values(input: &Self::Input) -> Vec<(&'static str, f64)> {
        vec![
            ("age", input.age as f64),
            ("horizon_years", input.horizon_years as f64),
            ("loss_tolerance", input.loss_tolerance as f64),
            ("income_stability", input.income_stability as f64),
            ("experience", input.experience as f64),
        ]
    }

    fn compute(input: &Self::Input) -> RiskProfileResult {
        let score = Self::score(input);
        let level = RiskLevel::from_score(score);
        RiskProfileResult {
            score,
            level,
            allocation: level.allocation(),
        }
    }
}

// ---------------------------------------------------------------------------
// PortfolioAllocator
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioInput {
    pub amount: f64,
    pub allocation: Allocation,
}

impl Default for PortfolioInput {
    fn default() -> Self {
        Self {
            amount: 1_000_000.0,
            allocation: RiskLevel::Moderate.allocation(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioResult {
    pub equity_amount: f64,
    pub debt_amount: f64,
    pub gold_amount: f64,
    pub score: f64,
    pub level: RiskLevel,
}

impl Breakdown for PortfolioResult {
    fn breakdown(&self) -> Vec<ChartPoint> {
        vec![
            ChartPoint::new("Equity", self.equity_amount),
            ChartPoint::new("Debt", self.debt_amount),
            ChartPoint::new("Gold", self.gold_amount),
        ]
    }
}

/// Splits an amount across equity, debt and gold.
pub struct PortfolioAllocator;

impl Calculator for PortfolioAllocator {
    type Input = PortfolioInput;
    type Output = PortfolioResult;

    const NAME: &'static str = "portfolio_allocator";

    fn schema() -> FormSchema {
        FormSchema::new(Self::NAME)
            .field(FieldRule::new("amount", "Investment amount").min(1_000.0).max(1e10))
            .field(FieldRule::new("equity", "Equity").min(0.0).max(100.0))
            .field(FieldRule::new("debt", "Debt").min(0.0).max(100.0))
            .field(FieldRule::new("gold", "Gold").min(0.0).max(100.0))
            .field(FieldRule::new("total", "Total allocation").min(100.0).max(100.0))
    }

    fn values(input: &Self::Input) -> Vec<(&'static str, f64)> {
        let a = &input.allocation;
        // rounded so 33.3 + 33.3 + 33.4 passes
        let total = (a.total() * 100.0).round() / 100.0;
        vec![
            ("amount", input.amount),
            ("equity", a.equity),
            ("debt", a.debt),
            ("gold", a.gold),
            ("total", total),
        ]
    }

    fn compute(input: &Self::Input) -> PortfolioResult {
        let a = &input.allocation;
        let score = a.score();
        PortfolioResult {
            equity_amount: input.amount * a.equity / 100.0,
            debt_amount: input.amount * a.debt / 100.0,
            gold_amount: input.amount * a.gold / 100.0,
            score,
            level: RiskLevel::from_portfolio_score(score),
        }
    }
}
