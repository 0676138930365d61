//! Market-linked growth: SIP, step-up SIP, lumpsum and goal-based SIP.

use serde::{Deserialize, Serialize};

use super::{annuity_due_fv, Calculator};
use crate::models::{Breakdown, ChartPoint, YearlyRow};
use crate::schema::{FieldRule, FormSchema};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SipResult {
    pub invested: f64,
    pub estimated_returns: f64,
    pub maturity: f64,
    pub schedule: Vec<YearlyRow>,
}

impl Breakdown for SipResult {
    fn breakdown(&self) -> Vec<ChartPoint> {
        vec![
            ChartPoint::new("Invested Amount", self.invested),
            ChartPoint::new("Estimated Returns", self.estimated_returns),
        ]
    }
}

// ---------------------------------------------------------------------------
// Sip
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SipInput {
    pub monthly_investment: f64,
    /// Expected annual return, percent.
    pub annual_rate: f64,
    pub years: u32,
}

impl Default for SipInput {
    fn default() -> Self {
        Self {
            monthly_investment: 5_000.0,
            annual_rate: 12.0,
            years: 10,
        }
    }
}

/// Systematic investment plan. Each monthly contribution is made at the start
/// of the month and compounds over the periods that remain.
pub struct Sip;

impl Calculator for Sip {
    type Input = SipInput;
    type Output = SipResult;

    const NAME: &'static str = "sip";

    fn schema() -> FormSchema {
        FormSchema::new(Self::NAME)
            .field(FieldRule::new("monthly_investment", "Monthly investment").min(500.0).max(1_000_000.0))
            .field(FieldRule::new("annual_rate", "Expected return rate").min(1.0).max(30.0))
            .field(FieldRule::new("years", "Time period").min(1.0).max(40.0).whole())
    }

    fn values(input: &Self::Input) -> Vec<(&'static str, f64)> {
        vec![
            ("monthly_investment", input.monthly_investment),
            ("annual_rate", input.annual_rate),
            ("years", input.years as f64),
        ]
    }

    fn compute(input: &Self::Input) -> SipResult {
        let i = input.annual_rate / 100.0 / 12.0;
        let months = input.years * 12;

        let value_after = |elapsed: u32| -> f64 {
            (0..elapsed)
                .map(|k| input.monthly_investment * (1.0 + i).powi((elapsed - k) as i32))
                .sum()
        };

        let schedule = (1..=input.years)
            .map(|year| YearlyRow {
                year,
                invested: input.monthly_investment * (year * 12) as f64,
                balance: value_after(year * 12),
            })
            .collect();

        let invested = input.monthly_investment * months as f64;
        let maturity = value_after(months);
        SipResult {
            invested,
            estimated_returns: maturity - invested,
            maturity,
            schedule,
        }
    }
}

// ---------------------------------------------------------------------------
// StepUpSip
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepUpSipInput {
    pub monthly_investment: f64,
    /// Increase applied to the monthly amount at every year boundary, percent.
    pub step_up: f64,
    pub annual_rate: f64,
    pub years: u32,
}

impl Default for StepUpSipInput {
    fn default() -> Self {
        Self {
            monthly_investment: 5_000.0,
            step_up: 10.0,
            annual_rate: 12.0,
            years: 10,
        }
    }
}

/// SIP whose monthly amount grows by a fixed percentage every year.
pub struct StepUpSip;

impl Calculator for StepUpSip {
    type Input = StepUpSipInput;
    type Output = SipResult;

    const NAME: &'static str = "step_up_sip";

    fn schema() -> FormSchema {
        FormSchema::new(Self::NAME)
            .field(FieldRule::new("monthly_investment", "Monthly investment").min(500.0).max(1_000_000.0))
            .field(FieldRule::new("step_up", "Annual step-up").min(0.0).max(50.0))
            .field(FieldRule::new("annual_rate", "Expected return rate").min(1.0).max(30.0))
            .field(FieldRule::new("years", "Time period").min(1.0).max(40.0).whole())
    }

    fn values(input: &Self::Input) -> Vec<(&'static str, f64)> {
        vec![
            ("monthly_investment", input.monthly_investment),
            ("step_up", input.step_up),
            ("annual_rate", input.annual_rate),
            ("years", input.years as f64),
        ]
    }

    fn compute(input: &Self::Input) -> SipResult {
        let i = input.annual_rate / 100.0 / 12.0;
        let step = 1.0 + input.step_up / 100.0;

        let mut value = 0.0;
        let mut invested = 0.0;
        let mut monthly = input.monthly_investment;
        let mut schedule = Vec::with_capacity(input.years as usize);

        for year in 1..=input.years {
            for _ in 0..12 {
                value = (value + monthly) * (1.0 + i);
                invested += monthly;
            }
            schedule.push(YearlyRow {
                year,
                invested,
                balance: value,
            });
            monthly *= step;
        }

        SipResult {
            invested,
            estimated_returns: value - invested,
            maturity: value,
            schedule,
        }
    }
}

// ---------------------------------------------------------------------------
// Lumpsum
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LumpsumInput {
    pub amount: f64,
    pub annual_rate: f64,
    pub years: u32,
}

impl Default for LumpsumInput {
    fn default() -> Self {
        Self {
            amount: 100_000.0,
            annual_rate: 12.0,
            years: 10,
        }
    }
}

/// One-time investment compounded annually.
pub struct Lumpsum;

impl Calculator for Lumpsum {
    type Input = LumpsumInput;
    type Output = SipResult;

    const NAME: &'static str = "lumpsum";

    fn schema() -> FormSchema {
        FormSchema::new(Self::NAME)
            .field(FieldRule::new("amount", "Total investment").min(1_000.0).max(1e9))
            .field(FieldRule::new("annual_rate", "Expected return rate").min(1.0).max(30.0))
            .field(FieldRule::new("years", "Time period").min(1.0).max(40.0).whole())
    }

    fn values(input: &Self::Input) -> Vec<(&'static str, f64)> {
        vec![
            ("amount", input.amount),
            ("annual_rate", input.annual_rate),
            ("years", input.years as f64),
        ]
    }

    fn compute(input: &Self::Input) -> SipResult {
        let growth = 1.0 + input.annual_rate / 100.0;
        let schedule = (1..=input.years)
            .map(|year| YearlyRow {
                year,
                invested: input.amount,
                balance: input.amount * growth.powi(year as i32),
            })
            .collect();
        let maturity = input.amount * growth.powi(input.years as i32);
        SipResult {
            invested: input.amount,
            estimated_returns: maturity - input.amount,
            maturity,
            schedule,
        }
    }
}

// ---------------------------------------------------------------------------
// GoalSip
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalSipInput {
    pub target_amount: f64,
    pub annual_rate: f64,
    pub years: u32,
}

impl Default for GoalSipInput {
    fn default() -> Self {
        Self {
            target_amount: 1_000_000.0,
            annual_rate: 12.0,
            years: 10,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalSipResult {
    pub monthly_investment: f64,
    pub invested: f64,
    pub estimated_returns: f64,
    pub target_amount: f64,
}

impl Breakdown for GoalSipResult {
    fn breakdown(&self) -> Vec<ChartPoint> {
        vec![
            ChartPoint::new("Invested Amount", self.invested),
            ChartPoint::new("Estimated Returns", self.estimated_returns),
        ]
    }
}

/// Monthly SIP needed to reach a target corpus: the inverse of [`Sip`].
pub struct GoalSip;

impl Calculator for GoalSip {
    type Input = GoalSipInput;
    type Output = GoalSipResult;

    const NAME: &'static str = "goal_sip";

    fn schema() -> FormSchema {
        FormSchema::new(Self::NAME)
            .field(FieldRule::new("target_amount", "Goal amount").min(10_000.0).max(1e10))
            .field(FieldRule::new("annual_rate", "Expected return rate").min(0.0).max(30.0))
            .field(FieldRule::new("years", "Time to goal").min(1.0).max(40.0).whole())
    }

    fn values(input: &Self::Input) -> Vec<(&'static str, f64)> {
        vec![
            ("target_amount", input.target_amount),
            ("annual_rate", input.annual_rate),
            ("years", input.years as f64),
        ]
    }

    fn compute(input: &Self::Input) -> GoalSipResult {
        let i = input.annual_rate / 100.0 / 12.0;
        let months = input.years * 12;
        // FV of one rupee a month; scale to hit the target
        let per_rupee = annuity_due_fv(1.0, i, months);
        let monthly = input.target_amount / per_rupee;
        let invested = monthly * months as f64;
        GoalSipResult {
            monthly_investment: monthly,
            invested,
            estimated_returns: input.target_amount - invested,
            target_amount: input.target_amount,
        }
    }
}
