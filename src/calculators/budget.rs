//! Household planning ratios: 50/30/20 budget, net worth, affordability,
//! emergency fund and inflation.

use serde::{Deserialize, Serialize};

use super::Calculator;
use crate::models::{Breakdown, ChartPoint};
use crate::schema::{FieldRule, FormSchema};

// ---------------------------------------------------------------------------
// BudgetRule (50/30/20)
// ---------------------------------------------------------------------------

pub const NEEDS_PERCENT: f64 = 50.0;
pub const WANTS_PERCENT: f64 = 30.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetRuleInput {
    pub monthly_income: f64,
}

impl Default for BudgetRuleInput {
    fn default() -> Self {
        Self {
            monthly_income: 50_000.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetRuleResult {
    pub needs: f64,
    pub wants: f64,
    pub savings: f64,
}

impl Breakdown for BudgetRuleResult {
    fn breakdown(&self) -> Vec<ChartPoint> {
        vec![
            ChartPoint::new("Needs (50%)", self.needs),
            ChartPoint::new("Wants (30%)", self.wants),
            ChartPoint::new("Savings (20%)", self.savings),
        ]
    }
}

/// 50/30/20 split. Savings takes the remainder so the three parts always
/// add back to the income exactly.
pub struct BudgetRule;

impl Calculator for BudgetRule {
    type Input = BudgetRuleInput;
    type Output = BudgetRuleResult;

    const NAME: &'static str = "budget_50_30_20";

    fn schema() -> FormSchema {
        FormSchema::new(Self::NAME)
            .field(FieldRule::new("monthly_income", "Monthly income").min(1_000.0).max(1e9))
    }

    fn values(input: &Self::Input) -> Vec<(&'static str, f64)> {
        vec![("monthly_income", input.monthly_income)]
    }

    fn compute(input: &Self::Input) -> BudgetRuleResult {
        let income = input.monthly_income;
        let needs = income * NEEDS_PERCENT / 100.0;
        let wants = income * WANTS_PERCENT / 100.0;
        BudgetRuleResult {
            needs,
            wants,
            savings: income - needs - wants,
        }
    }
}

// ---------------------------------------------------------------------------
// NetWorth
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub label: String,
    pub amount: f64,
}

impl LineItem {
    pub fn new(label: impl Into<String>, amount: f64) -> Self {
        Self {
            label: label.into(),
            amount,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NetWorthInput {
    #[serde(default)]
    pub assets: Vec<LineItem>,
    #[serde(default)]
    pub liabilities: Vec<LineItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetWorthResult {
    pub total_assets: f64,
    pub total_liabilities: f64,
    pub net_worth: f64,
    /// Liabilities as a share of assets, `None` when there are no assets.
    pub debt_to_asset: Option<f64>,
}

impl Breakdown for NetWorthResult {
    fn breakdown(&self) -> Vec<ChartPoint> {
        vec![
            ChartPoint::new("Assets", self.total_assets),
            ChartPoint::new("Liabilities", self.total_liabilities),
        ]
    }
}

pub struct NetWorth;

impl Calculator for NetWorth {
    type Input = NetWorthInput;
    type Output = NetWorthResult;

    const NAME: &'static str = "net_worth";

    fn schema() -> FormSchema {
        FormSchema::new(Self::NAME)
            .field(FieldRule::new("assets", "Asset").min(0.0).repeated())
            .field(FieldRule::new("liabilities", "Liability").min(0.0).repeated())
    }

    fn values(input: &Self::Input) -> Vec<(&'static str, f64)> {
        let assets = input.assets.iter().map(|item| ("assets", item.amount));
        let liabilities = input.liabilities.iter().map(|item| ("liabilities", item.amount));
        assets.chain(liabilities).collect()
    }

    fn compute(input: &Self::Input) -> NetWorthResult {
        let total_assets: f64 = input.assets.iter().map(|i| i.amount).sum();
        let total_liabilities: f64 = input.liabilities.iter().map(|i| i.amount).sum();
        NetWorthResult {
            total_assets,
            total_liabilities,
            net_worth: total_assets - total_liabilities,
            debt_to_asset: (total_assets > 0.0).then(|| total_liabilities / total_assets),
        }
    }
}

// ---------------------------------------------------------------------------
// Affordability
// ---------------------------------------------------------------------------

/// Cap on total EMIs as a share of income (FOIR).
pub const FOIR_CAP: f64 = 0.40;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AffordabilityInput {
    pub monthly_income: f64,
    pub monthly_expenses: f64,
    #[serde(default)]
    pub existing_emis: f64,
    #[serde(default)]
    pub housing_cost: f64,
    pub loan_rate: f64,
    pub loan_years: u32,
}

impl Default for AffordabilityInput {
    fn default() -> Self {
        Self {
            monthly_income: 100_000.0,
            monthly_expenses: 40_000.0,
            existing_emis: 0.0,
            housing_cost: 20_000.0,
            loan_rate: 8.5,
            loan_years: 20,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AffordabilityResult {
    /// Percent of income going to existing EMIs.
    pub debt_to_income: f64,
    /// Percent of income left after expenses and EMIs.
    pub savings_rate: f64,
    /// Percent of income spent on housing.
    pub housing_ratio: f64,
    /// Largest new EMI that keeps total EMIs under the FOIR cap.
    pub max_new_emi: f64,
    /// Loan principal that `max_new_emi` can service at the given rate and tenure.
    pub max_loan_amount: f64,
}

impl Breakdown for AffordabilityResult {
    fn breakdown(&self) -> Vec<ChartPoint> {
        vec![
            ChartPoint::new("Debt-to-Income %", self.debt_to_income),
            ChartPoint::new("Savings Rate %", self.savings_rate),
            ChartPoint::new("Housing %", self.housing_ratio),
        ]
    }
}

pub struct Affordability;

impl Calculator for Affordability {
    type Input = AffordabilityInput;
    type Output = AffordabilityResult;

    const NAME: &'static str = "affordability";

    fn schema() -> FormSchema {
        FormSchema::new(Self::NAME)
            .field(FieldRule::new("monthly_income", "Monthly income").min(1_000.0).max(1e9))
            .field(FieldRule::new("monthly_expenses", "Monthly expenses").min(0.0).max(1e9))
            .field(FieldRule::new("existing_emis", "Existing EMIs").min(0.0).optional())
            .field(FieldRule::new("housing_cost", "Housing cost").min(0.0).optional())
            .field(FieldRule::new("loan_rate", "Loan interest rate").min(1.0).max(20.0))
            .field(FieldRule::new("loan_years", "Loan tenure").min(1.0).max(30.0).whole())
    }

    fn values(input: &Self::Input) -> Vec<(&'static str, f64)> {
        vec![
            ("monthly_income", input.monthly_income),
            ("monthly_expenses", input.monthly_expenses),
            ("existing_emis", input.existing_emis),
            ("housing_cost", input.housing_cost),
            ("loan_rate", input.loan_rate),
            ("loan_years", input.loan_years as f64),
        ]
    }

    fn compute(input: &Self::Input) -> AffordabilityResult {
        let income = input.monthly_income;
        let max_new_emi = (income * FOIR_CAP - input.existing_emis).max(0.0);
        let i = input.loan_rate / 100.0 / 12.0;
        let n = (input.loan_years * 12) as i32;
        let max_loan_amount = max_new_emi * (1.0 - (1.0 + i).powi(-n)) / i;
        AffordabilityResult {
            debt_to_income: input.existing_emis / income * 100.0,
            savings_rate: (income - input.monthly_expenses - input.existing_emis) / income * 100.0,
            housing_ratio: input.housing_cost / income * 100.0,
            max_new_emi,
            max_loan_amount,
        }
    }
}

// ---------------------------------------------------------------------------
// EmergencyFund
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmergencyFundInput {
    pub monthly_expenses: f64,
    pub months: u32,
    #[serde(default)]
    pub current_savings: f64,
}

impl Default for EmergencyFundInput {
    fn default() -> Self {
        Self {
            monthly_expenses: 40_000.0,
            months: 6,
            current_savings: 0.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmergencyFundResult {
    pub target: f64,
    pub shortfall: f64,
    /// How many months of expenses current savings cover.
    pub coverage_months: f64,
}

impl Breakdown for EmergencyFundResult {
    fn breakdown(&self) -> Vec<ChartPoint> {
        vec![
            ChartPoint::new("Current Savings", self.target - self.shortfall),
            ChartPoint::new("Shortfall", self.shortfall),
        ]
    }
}

pub struct EmergencyFund;

impl Calculator for EmergencyFund {
    type Input = EmergencyFundInput;
    type Output = EmergencyFundResult;

    const NAME: &'static str = "emergency_fund";

    fn schema() -> FormSchema {
        FormSchema::new(Self::NAME)
            .field(FieldRule::new("monthly_expenses", "Monthly expenses").min(1_000.0).max(1e8))
            .field(FieldRule::new("months", "Months of cover").min(3.0).max(24.0).whole())
            .field(FieldRule::new("current_savings", "Current savings").min(0.0).optional())
    }

    fn values(input: &Self::Input) -> Vec<(&'static str, f64)> {
        vec![
            ("monthly_expenses", input.monthly_expenses),
            ("months", input.months as f64),
            ("current_savings", input.current_savings),
        ]
    }

    fn compute(input: &Self::Input) -> EmergencyFundResult {
        let target = input.monthly_expenses * input.months as f64;
        EmergencyFundResult {
            target,
            shortfall: (target - input.current_savings).max(0.0),
            coverage_months: input.current_savings / input.monthly_expenses,
        }
    }
}

// ---------------------------------------------------------------------------
// Inflation
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InflationInput {
    pub current_cost: f64,
    pub inflation_rate: f64,
    pub years: u32,
}

impl Default for InflationInput {
    fn default() -> Self {
        Self {
            current_cost: 100_000.0,
            inflation_rate: 6.0,
            years: 10,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InflationResult {
    pub current_cost: f64,
    pub future_cost: f64,
    /// What today's amount will be worth in today's money after `years`.
    pub purchasing_power: f64,
}

impl Breakdown for InflationResult {
    fn breakdown(&self) -> Vec<ChartPoint> {
        vec![
            ChartPoint::new("Current Cost", self.current_cost),
            ChartPoint::new("Inflation Impact", self.future_cost - self.current_cost),
        ]
    }
}

pub struct Inflation;

impl Calculator for Inflation {
    type Input = InflationInput;
    type Output = InflationResult;

    const NAME: &'static str = "inflation";

    fn schema() -> FormSchema {
        FormSchema::new(Self::NAME)
            .field(FieldRule::new("current_cost", "Current cost").min(1.0).max(1e10))
            .field(FieldRule::new("inflation_rate", "Inflation rate").min(0.0).max(20.0))
            .field(FieldRule::new("years", "Time period").min(1.0).max(50.0).whole())
    }

    fn values(input: &Self::Input) -> Vec<(&'static str, f64)> {
        vec![
            ("current_cost", input.current_cost),
            ("inflation_rate", input.inflation_rate),
            ("years", input.years as f64),
        ]
    }

    fn compute(input: &Self::Input) -> InflationResult {
        let factor = (1.0 + input.inflation_rate / 100.0).powi(input.years as i32);
        InflationResult {
            current_cost: input.current_cost,
            future_cost: input.current_cost * factor,
            purchasing_power: input.current_cost / factor,
        }
    }
}
