//! Term life cover and premium estimate.
//!
//! Multipliers and premium rates below are illustrative rules of thumb for
//! display, not insurer quotes.

use serde::{Deserialize, Serialize};

use super::Calculator;
use crate::models::{Breakdown, ChartPoint};
use crate::schema::{FieldRule, FormSchema};

pub const SMOKER_LOADING: f64 = 1.5;

/// `(max age inclusive, income multiplier, yearly premium per ₹1,000 cover)`
const AGE_BANDS: &[(u32, f64, f64)] = &[
    (29, 20.0, 0.6),
    (39, 15.0, 0.9),
    (49, 12.0, 1.8),
];

/// `(income multiplier, premium rate)` above the last age band.
const OLDEST_BAND: (f64, f64) = (10.0, 3.5);

fn band(age: u32) -> (f64, f64) {
    AGE_BANDS
        .iter()
        .find(|(max_age, _, _)| age <= *max_age)
        .map(|&(_, mult, rate)| (mult, rate))
        .unwrap_or(OLDEST_BAND)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsuranceInput {
    pub age: u32,
    pub annual_income: f64,
    #[serde(default)]
    pub existing_cover: f64,
    #[serde(default)]
    pub smoker: bool,
}

impl Default for InsuranceInput {
    fn default() -> Self {
        Self {
            age: 30,
            annual_income: 1_000_000.0,
            existing_cover: 0.0,
            smoker: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsuranceResult {
    pub recommended_cover: f64,
    pub additional_cover: f64,
    pub annual_premium: f64,
    pub monthly_premium: f64,
}

impl Breakdown for InsuranceResult {
    fn breakdown(&self) -> Vec<ChartPoint> {
        vec![
            ChartPoint::new("Existing Cover", self.recommended_cover - self.additional_cover),
            ChartPoint::new("Additional Cover Needed", self.additional_cover),
        ]
    }
}

pub struct InsuranceEstimate;

impl Calculator for InsuranceEstimate {
    type Input = InsuranceInput;
    type Output = InsuranceResult;

    const NAME: &'static str = "insurance";

    fn schema() -> FormSchema {
        FormSchema::new(Self::NAME)
            .field(FieldRule::new("age", "Age").min(18.0).max(65.0).whole())
            .field(FieldRule::new("annual_income", "Annual income").min(100_000.0).max(1e10))
            .field(FieldRule::new("existing_cover", "Existing cover").min(0.0).optional())
    }

    fn values(input: &Self::Input) -> Vec<(&'static str, f64)> {
        vec![
            ("age", input.age as f64),
            ("annual_income", input.annual_income),
            ("existing_cover", input.existing_cover),
        ]
    }

    fn compute(input: &Self::Input) -> InsuranceResult {
        let (multiplier, rate) = band(input.age);
        let recommended = input.annual_income * multiplier;
        let additional = (recommended - input.existing_cover).max(0.0);
        let loading = if input.smoker { SMOKER_LOADING } else { 1.0 };
        let annual = additional / 1_000.0 * rate * loading;
        InsuranceResult {
            recommended_cover: recommended,
            additional_cover: additional,
            annual_premium: annual,
            monthly_premium: annual / 12.0,
        }
    }
}
