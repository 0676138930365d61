//! Fixed-income deposits: bank FD, PPF, EPF and Post-Office time deposits.

use serde::{Deserialize, Serialize};

use super::{annuity_due_fv, compound, Calculator};
use crate::models::{Breakdown, ChartPoint, Compounding, YearlyRow};
use crate::schema::{FieldRule, FormSchema};

// ---------------------------------------------------------------------------
// GrowthResult: shared result shape for deposits
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrowthResult {
    pub invested: f64,
    pub interest: f64,
    pub maturity: f64,
    pub schedule: Vec<YearlyRow>,
}

impl GrowthResult {
    fn new(invested: f64, maturity: f64, schedule: Vec<YearlyRow>) -> Self {
        Self {
            invested,
            interest: maturity - invested,
            maturity,
            schedule,
        }
    }
}

impl Breakdown for GrowthResult {
    fn breakdown(&self) -> Vec<ChartPoint> {
        vec![
            ChartPoint::new("Invested Amount", self.invested),
            ChartPoint::new("Interest Earned", self.interest),
        ]
    }
}

/// End-of-year balances of a lump sum, with a final partial year if `years`
/// is fractional.
fn lump_sum_schedule(principal: f64, rate_pct: f64, n: u32, years: f64) -> Vec<YearlyRow> {
    let full = years.ceil() as u32;
    (1..=full)
        .map(|y| {
            let t = (y as f64).min(years);
            YearlyRow {
                year: y,
                invested: principal,
                balance: compound(principal, rate_pct, n, t),
            }
        })
        .collect()
}

// ---------------------------------------------------------------------------
// FixedDeposit
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixedDepositInput {
    pub principal: f64,
    /// Annual rate in percent.
    pub annual_rate: f64,
    pub years: f64,
    #[serde(default)]
    pub compounding: Compounding,
}

impl Default for FixedDepositInput {
    fn default() -> Self {
        Self {
            principal: 100_000.0,
            annual_rate: 7.0,
            years: 5.0,
            compounding: Compounding::Quarterly,
        }
    }
}

/// Bank fixed deposit, `A = P·(1 + r/n)^(n·t)`.
pub struct FixedDeposit;

impl Calculator for FixedDeposit {
    type Input = FixedDepositInput;
    type Output = GrowthResult;

    const NAME: &'static str = "fixed_deposit";

    fn schema() -> FormSchema {
        FormSchema::new(Self::NAME)
            .field(FieldRule::new("principal", "Deposit amount").min(1_000.0).max(1e9))
            .field(FieldRule::new("annual_rate", "Interest rate").min(1.0).max(15.0))
            .field(FieldRule::new("years", "Tenure").min(1.0).max(25.0))
    }

    fn values(input: &Self::Input) -> Vec<(&'static str, f64)> {
        vec![
            ("principal", input.principal),
            ("annual_rate", input.annual_rate),
            ("years", input.years),
        ]
    }

    fn compute(input: &Self::Input) -> GrowthResult {
        let n = input.compounding.periods_per_year();
        let maturity = compound(input.principal, input.annual_rate, n, input.years);
        let schedule = lump_sum_schedule(input.principal, input.annual_rate, n, input.years);
        GrowthResult::new(input.principal, maturity, schedule)
    }
}

// ---------------------------------------------------------------------------
// Ppf
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PpfInput {
    pub yearly_contribution: f64,
    pub annual_rate: f64,
    pub years: u32,
}

impl Default for PpfInput {
    fn default() -> Self {
        Self {
            yearly_contribution: 150_000.0,
            annual_rate: 7.1,
            years: 15,
        }
    }
}

/// Public Provident Fund. Deposits are made at the start of each year and
/// interest is credited annually. Minimum lock-in is 15 years.
pub struct Ppf;

impl Calculator for Ppf {
    type Input = PpfInput;
    type Output = GrowthResult;

    const NAME: &'static str = "ppf";

    fn schema() -> FormSchema {
        FormSchema::new(Self::NAME)
            .field(
                FieldRule::new("yearly_contribution", "Yearly investment")
                    .min(500.0)
                    .max(150_000.0),
            )
            .field(FieldRule::new("annual_rate", "Interest rate").min(1.0).max(15.0))
            .field(FieldRule::new("years", "Time period").min(15.0).max(50.0).whole())
    }

    fn values(input: &Self::Input) -> Vec<(&'static str, f64)> {
        vec![
            ("yearly_contribution", input.yearly_contribution),
            ("annual_rate", input.annual_rate),
            ("years", input.years as f64),
        ]
    }

    fn compute(input: &Self::Input) -> GrowthResult {
        let r = input.annual_rate / 100.0;
        let mut balance = 0.0;
        let mut schedule = Vec::with_capacity(input.years as usize);
        for year in 1..=input.years {
            balance = (balance + input.yearly_contribution) * (1.0 + r);
            schedule.push(YearlyRow {
                year,
                invested: input.yearly_contribution * year as f64,
                balance,
            });
        }
        let invested = input.yearly_contribution * input.years as f64;
        GrowthResult::new(invested, balance, schedule)
    }
}

// ---------------------------------------------------------------------------
// Epf
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EpfInput {
    pub monthly_basic: f64,
    /// Employee share of basic salary, percent.
    pub employee_rate: f64,
    /// Employer share credited to EPF (the rest goes to EPS), percent.
    pub employer_rate: f64,
    pub annual_rate: f64,
    pub years: u32,
    #[serde(default)]
    pub current_balance: f64,
}

impl Default for EpfInput {
    fn default() -> Self {
        Self {
            monthly_basic: 50_000.0,
            employee_rate: 12.0,
            employer_rate: 3.67,
            annual_rate: 8.25,
            years: 25,
            current_balance: 0.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EpfResult {
    pub employee_monthly: f64,
    pub employer_monthly: f64,
    pub monthly_contribution: f64,
    pub invested: f64,
    pub interest: f64,
    pub maturity: f64,
    pub schedule: Vec<YearlyRow>,
}

impl Breakdown for EpfResult {
    fn breakdown(&self) -> Vec<ChartPoint> {
        vec![
            ChartPoint::new("Total Contribution", self.invested),
            ChartPoint::new("Interest Earned", self.interest),
        ]
    }
}

/// Employee Provident Fund: both contribution streams summed monthly and
/// grown with the annuity-due future value at `annual_rate / 12`.
pub struct Epf;

impl Calculator for Epf {
    type Input = EpfInput;
    type Output = EpfResult;

    const NAME: &'static str = "epf";

    fn schema() -> FormSchema {
        FormSchema::new(Self::NAME)
            .field(FieldRule::new("monthly_basic", "Monthly basic salary").min(1_000.0).max(10_000_000.0))
            .field(FieldRule::new("employee_rate", "Employee contribution").min(0.0).max(20.0))
            .field(FieldRule::new("employer_rate", "Employer contribution").min(0.0).max(12.0))
            .field(FieldRule::new("annual_rate", "Interest rate").min(1.0).max(15.0))
            .field(FieldRule::new("years", "Years of service").min(1.0).max(45.0).whole())
            .field(FieldRule::new("current_balance", "Current EPF balance").min(0.0).optional())
    }

    fn values(input: &Self::Input) -> Vec<(&'static str, f64)> {
        vec![
            ("monthly_basic", input.monthly_basic),
            ("employee_rate", input.employee_rate),
            ("employer_rate", input.employer_rate),
            ("annual_rate", input.annual_rate),
            ("years", input.years as f64),
            ("current_balance", input.current_balance),
        ]
    }

    fn compute(input: &Self::Input) -> EpfResult {
        let employee = input.monthly_basic * input.employee_rate / 100.0;
        let employer = input.monthly_basic * input.employer_rate / 100.0;
        let monthly = employee + employer;
        let i = input.annual_rate / 100.0 / 12.0;

        let balance_after = |months: u32| {
            input.current_balance * (1.0 + i).powi(months as i32) + annuity_due_fv(monthly, i, months)
        };

        let schedule = (1..=input.years)
            .map(|year| YearlyRow {
                year,
                invested: input.current_balance + monthly * (year * 12) as f64,
                balance: balance_after(year * 12),
            })
            .collect();

        let months = input.years * 12;
        let invested = input.current_balance + monthly * months as f64;
        let maturity = balance_after(months);
        EpfResult {
            employee_monthly: employee,
            employer_monthly: employer,
            monthly_contribution: monthly,
            invested,
            interest: maturity - invested,
            maturity,
            schedule,
        }
    }
}

// ---------------------------------------------------------------------------
// PostOfficeDeposit
// ---------------------------------------------------------------------------

/// Post-Office time deposit tenures and their notified rates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PostOfficeTenure {
    #[serde(rename = "1")]
    OneYear,
    #[serde(rename = "2")]
    TwoYears,
    #[serde(rename = "3")]
    ThreeYears,
    #[default]
    #[serde(rename = "5")]
    FiveYears,
}

impl PostOfficeTenure {
    pub fn years(self) -> u32 {
        match self {
            PostOfficeTenure::OneYear => 1,
            PostOfficeTenure::TwoYears => 2,
            PostOfficeTenure::ThreeYears => 3,
            PostOfficeTenure::FiveYears => 5,
        }
    }

    /// Annual rate in percent.
    pub fn rate(self) -> f64 {
        match self {
            PostOfficeTenure::OneYear => 6.9,
            PostOfficeTenure::TwoYears => 7.0,
            PostOfficeTenure::ThreeYears => 7.1,
            PostOfficeTenure::FiveYears => 7.5,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostOfficeDepositInput {
    pub principal: f64,
    #[serde(default)]
    pub tenure: PostOfficeTenure,
}

impl Default for PostOfficeDepositInput {
    fn default() -> Self {
        Self {
            principal: 100_000.0,
            tenure: PostOfficeTenure::FiveYears,
        }
    }
}

/// Post-Office time deposit, compounded quarterly at the tenure's rate.
pub struct PostOfficeDeposit;

impl Calculator for PostOfficeDeposit {
    type Input = PostOfficeDepositInput;
    type Output = GrowthResult;

    const NAME: &'static str = "post_office_deposit";

    fn schema() -> FormSchema {
        FormSchema::new(Self::NAME).field(
            FieldRule::new("principal", "Deposit amount")
                .min(1_000.0)
                .max(1e9)
                .whole(),
        )
    }

    fn values(input: &Self::Input) -> Vec<(&'static str, f64)> {
        vec![("principal", input.principal)]
    }

    fn compute(input: &Self::Input) -> GrowthResult {
        let n = Compounding::Quarterly.periods_per_year();
        let rate = input.tenure.rate();
        let years = input.tenure.years() as f64;
        let maturity = compound(input.principal, rate, n, years);
        let schedule = lump_sum_schedule(input.principal, rate, n, years);
        GrowthResult::new(input.principal, maturity, schedule)
    }
}
