//! Level-payment formulas: annuity payout from a corpus and loan EMI.

use serde::{Deserialize, Serialize};

use super::{level_payment, Calculator};
use crate::models::{Breakdown, ChartPoint};
use crate::schema::{FieldRule, FormSchema};

// ---------------------------------------------------------------------------
// Annuity
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnuityInput {
    pub corpus: f64,
    pub annual_rate: f64,
    pub years: u32,
}

impl Default for AnnuityInput {
    fn default() -> Self {
        Self {
            corpus: 5_000_000.0,
            annual_rate: 7.0,
            years: 20,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnuityResult {
    pub monthly_payout: f64,
    pub total_payout: f64,
    pub interest_earned: f64,
}

impl Breakdown for AnnuityResult {
    fn breakdown(&self) -> Vec<ChartPoint> {
        vec![
            ChartPoint::new("Corpus", self.total_payout - self.interest_earned),
            ChartPoint::new("Interest Earned", self.interest_earned),
        ]
    }
}

/// Monthly payout that exhausts a corpus over the chosen term,
/// `PMT = C·i / (1 − (1+i)^−n)`.
pub struct Annuity;

impl Calculator for Annuity {
    type Input = AnnuityInput;
    type Output = AnnuityResult;

    const NAME: &'static str = "annuity";

    fn schema() -> FormSchema {
        FormSchema::new(Self::NAME)
            .field(FieldRule::new("corpus", "Corpus").min(10_000.0).max(1e10))
            .field(FieldRule::new("annual_rate", "Annuity rate").min(0.0).max(15.0))
            .field(FieldRule::new("years", "Payout period").min(1.0).max(40.0).whole())
    }

    fn values(input: &Self::Input) -> Vec<(&'static str, f64)> {
        vec![
            ("corpus", input.corpus),
            ("annual_rate", input.annual_rate),
            ("years", input.years as f64),
        ]
    }

    fn compute(input: &Self::Input) -> AnnuityResult {
        let i = input.annual_rate / 100.0 / 12.0;
        let months = input.years * 12;
        let monthly = level_payment(input.corpus, i, months);
        let total = monthly * months as f64;
        AnnuityResult {
            monthly_payout: monthly,
            total_payout: total,
            interest_earned: total - input.corpus,
        }
    }
}

// ---------------------------------------------------------------------------
// Loan
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanInput {
    pub principal: f64,
    pub annual_rate: f64,
    pub years: u32,
}

impl Default for LoanInput {
    fn default() -> Self {
        Self {
            principal: 2_000_000.0,
            annual_rate: 8.5,
            years: 20,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmortizationRow {
    pub year: u32,
    pub principal_paid: f64,
    pub interest_paid: f64,
    /// Outstanding principal at the end of the year.
    pub balance: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanResult {
    pub emi: f64,
    pub total_interest: f64,
    pub total_payment: f64,
    pub schedule: Vec<AmortizationRow>,
}

impl Breakdown for LoanResult {
    fn breakdown(&self) -> Vec<ChartPoint> {
        vec![
            ChartPoint::new("Principal Amount", self.total_payment - self.total_interest),
            ChartPoint::new("Total Interest", self.total_interest),
        ]
    }
}

/// Equated monthly instalment on a reducing-balance loan.
pub struct Loan;

impl Calculator for Loan {
    type Input = LoanInput;
    type Output = LoanResult;

    const NAME: &'static str = "loan_emi";

    fn schema() -> FormSchema {
        FormSchema::new(Self::NAME)
            .field(FieldRule::new("principal", "Loan amount").min(10_000.0).max(1e9))
            .field(FieldRule::new("annual_rate", "Interest rate").min(1.0).max(30.0))
            .field(FieldRule::new("years", "Loan tenure").min(1.0).max(30.0).whole())
    }

    fn values(input: &Self::Input) -> Vec<(&'static str, f64)> {
        vec![
            ("principal", input.principal),
            ("annual_rate", input.annual_rate),
            ("years", input.years as f64),
        ]
    }

    fn compute(input: &Self::Input) -> LoanResult {
        let i = input.annual_rate / 100.0 / 12.0;
        let months = input.years * 12;
        let emi = level_payment(input.principal, i, months);

        let mut balance = input.principal;
        let mut schedule = Vec::with_capacity(input.years as usize);
        for year in 1..=input.years {
            let mut principal_paid = 0.0;
            let mut interest_paid = 0.0;
            for _ in 0..12 {
                let interest = balance * i;
                let repaid = (emi - interest).min(balance);
                interest_paid += interest;
                principal_paid += repaid;
                balance -= repaid;
            }
            schedule.push(AmortizationRow {
                year,
                principal_paid,
                interest_paid,
                balance: balance.max(0.0),
            });
        }

        let total_payment = emi * months as f64;
        LoanResult {
            emi,
            total_interest: total_payment - input.principal,
            total_payment,
            schedule,
        }
    }
}
