//! Income tax under the old and new regimes, and equity capital gains.
//!
//! Slab boundaries, caps and rates are fixed constants for the assessment
//! year the tables describe; they are not inputs.

use serde::{Deserialize, Serialize};

use super::Calculator;
use crate::models::{Breakdown, ChartPoint};
use crate::schema::{FieldRule, FormSchema};

/// `(upper bound, marginal rate)` pairs, ascending.
type SlabTable = [(f64, f64)];

pub const OLD_REGIME_SLABS: &SlabTable = &[
    (250_000.0, 0.0),
    (500_000.0, 0.05),
    (1_000_000.0, 0.20),
    (f64::INFINITY, 0.30),
];

pub const NEW_REGIME_SLABS: &SlabTable = &[
    (300_000.0, 0.0),
    (700_000.0, 0.05),
    (1_000_000.0, 0.10),
    (1_200_000.0, 0.15),
    (1_500_000.0, 0.20),
    (f64::INFINITY, 0.30),
];

pub const SECTION_80C_CAP: f64 = 150_000.0;
pub const SECTION_80D_CAP: f64 = 25_000.0;
pub const SECTION_80CCD_1B_CAP: f64 = 50_000.0;
pub const HOME_LOAN_INTEREST_CAP: f64 = 200_000.0;
pub const OLD_STANDARD_DEDUCTION: f64 = 50_000.0;
pub const NEW_STANDARD_DEDUCTION: f64 = 75_000.0;

/// Section 87A: full rebate up to `max_rebate` when taxable income is at or
/// below `threshold`.
const OLD_REBATE: (f64, f64) = (500_000.0, 12_500.0);
const NEW_REBATE: (f64, f64) = (700_000.0, 25_000.0);

pub const CESS_RATE: f64 = 0.04;

/// Progressive tax on `taxable` under a slab table.
pub fn slab_tax(taxable: f64, slabs: &SlabTable) -> f64 {
    let mut tax = 0.0;
    let mut lower = 0.0;
    for &(upper, rate) in slabs {
        if taxable <= lower {
            break;
        }
        tax += (taxable.min(upper) - lower) * rate;
        lower = upper;
    }
    tax
}

// ---------------------------------------------------------------------------
// IncomeTax
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaxRegime {
    Old,
    New,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxInput {
    pub annual_income: f64,
    #[serde(default)]
    pub section_80c: f64,
    #[serde(default)]
    pub section_80d: f64,
    /// HRA exemption as claimed.
    #[serde(default)]
    pub hra_exemption: f64,
    #[serde(default)]
    pub nps_80ccd_1b: f64,
    #[serde(default)]
    pub home_loan_interest: f64,
}

impl Default for TaxInput {
    fn default() -> Self {
        Self {
            annual_income: 1_000_000.0,
            section_80c: 0.0,
            section_80d: 0.0,
            hra_exemption: 0.0,
            nps_80ccd_1b: 0.0,
            home_loan_interest: 0.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegimeResult {
    pub regime: TaxRegime,
    pub gross_income: f64,
    pub deductions: f64,
    pub taxable_income: f64,
    pub slab_tax: f64,
    pub rebate: f64,
    pub cess: f64,
    pub total_tax: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxComparison {
    pub old_regime: RegimeResult,
    pub new_regime: RegimeResult,
    pub recommended: TaxRegime,
    /// How much less the recommended regime costs.
    pub savings: f64,
}

impl Breakdown for TaxComparison {
    fn breakdown(&self) -> Vec<ChartPoint> {
        vec![
            ChartPoint::new("Old Regime", self.old_regime.total_tax),
            ChartPoint::new("New Regime", self.new_regime.total_tax),
        ]
    }
}

/// Old-regime deductions after applying the statutory caps.
pub fn old_regime_deductions(input: &TaxInput) -> f64 {
    input.section_80c.min(SECTION_80C_CAP)
        + input.section_80d.min(SECTION_80D_CAP)
        + input.hra_exemption
        + input.nps_80ccd_1b.min(SECTION_80CCD_1B_CAP)
        + input.home_loan_interest.min(HOME_LOAN_INTEREST_CAP)
        + OLD_STANDARD_DEDUCTION
}

fn regime_result(
    regime: TaxRegime,
    income: f64,
    deductions: f64,
    slabs: &SlabTable,
    (threshold, max_rebate): (f64, f64),
) -> RegimeResult {
    let taxable = (income - deductions).max(0.0);
    let base = slab_tax(taxable, slabs);
    let rebate = if taxable <= threshold {
        base.min(max_rebate)
    } else {
        0.0
    };
    let cess = (base - rebate) * CESS_RATE;
    RegimeResult {
        regime,
        gross_income: income,
        deductions,
        taxable_income: taxable,
        slab_tax: base,
        rebate,
        cess,
        total_tax: base - rebate + cess,
    }
}

pub fn old_regime(input: &TaxInput) -> RegimeResult {
    regime_result(
        TaxRegime::Old,
        input.annual_income,
        old_regime_deductions(input),
        OLD_REGIME_SLABS,
        OLD_REBATE,
    )
}

pub fn new_regime(input: &TaxInput) -> RegimeResult {
    regime_result(
        TaxRegime::New,
        input.annual_income,
        NEW_STANDARD_DEDUCTION,
        NEW_REGIME_SLABS,
        NEW_REBATE,
    )
}

/// Old vs. new regime comparison. Ties go to the new regime, which is the
/// default when no choice is made.
pub struct IncomeTax;

impl Calculator for IncomeTax {
    type Input = TaxInput;
    type Output = TaxComparison;

    const NAME: &'static str = "income_tax";

    fn schema() -> FormSchema {
        FormSchema::new(Self::NAME)
            .field(FieldRule::new("annual_income", "Annual income").min(0.0).max(1e10))
            .field(FieldRule::new("section_80c", "Section 80C").min(0.0).optional())
            .field(FieldRule::new("section_80d", "Section 80D").min(0.0).optional())
            .field(FieldRule::new("hra_exemption", "HRA exemption").min(0.0).optional())
            .field(FieldRule::new("nps_80ccd_1b", "NPS 80CCD(1B)").min(0.0).optional())
            .field(FieldRule::new("home_loan_interest", "Home loan interest").min(0.0).optional())
    }

    fn values(input: &Self::Input) -> Vec<(&'static str, f64)> {
        vec![
            ("annual_income", input.annual_income),
            ("section_80c", input.section_80c),
            ("section_80d", input.section_80d),
            ("hra_exemption", input.hra_exemption),
            ("nps_80ccd_1b", input.nps_80ccd_1b),
            ("home_loan_interest", input.home_loan_interest),
        ]
    }

    fn compute(input: &Self::Input) -> TaxComparison {
        let old = old_regime(input);
        let new = new_regime(input);
        let (recommended, savings) = if old.total_tax < new.total_tax {
            (TaxRegime::Old, new.total_tax - old.total_tax)
        } else {
            (TaxRegime::New, old.total_tax - new.total_tax)
        };
        TaxComparison {
            old_regime: old,
            new_regime: new,
            recommended,
            savings,
        }
    }
}

// ---------------------------------------------------------------------------
// CapitalGains
// ---------------------------------------------------------------------------

pub const EQUITY_LONG_TERM_MONTHS: u32 = 12;
pub const EQUITY_STCG_RATE: f64 = 0.20;
pub const EQUITY_LTCG_RATE: f64 = 0.125;
pub const EQUITY_LTCG_EXEMPTION: f64 = 125_000.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CapitalGainsInput {
    pub purchase_value: f64,
    pub sale_value: f64,
    pub holding_months: u32,
}

impl Default for CapitalGainsInput {
    fn default() -> Self {
        Self {
            purchase_value: 500_000.0,
            sale_value: 800_000.0,
            holding_months: 24,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CapitalGainsResult {
    pub gain: f64,
    pub long_term: bool,
    pub exemption: f64,
    pub taxable_gain: f64,
    pub rate: f64,
    pub tax: f64,
}

impl Breakdown for CapitalGainsResult {
    fn breakdown(&self) -> Vec<ChartPoint> {
        let gain = self.gain.max(0.0);
        vec![
            ChartPoint::new("Tax Payable", self.tax),
            ChartPoint::new("Gain After Tax", gain - self.tax),
        ]
    }
}

/// Listed equity gains: short-term at a flat rate, long-term above an
/// annual exemption.
pub struct CapitalGains;

impl Calculator for CapitalGains {
    type Input = CapitalGainsInput;
    type Output = CapitalGainsResult;

    const NAME: &'static str = "capital_gains";

    fn schema() -> FormSchema {
        FormSchema::new(Self::NAME)
            .field(FieldRule::new("purchase_value", "Purchase value").min(0.0).max(1e10))
            .field(FieldRule::new("sale_value", "Sale value").min(0.0).max(1e10))
            .field(FieldRule::new("holding_months", "Holding period").min(0.0).max(600.0).whole())
    }

    fn values(input: &Self::Input) -> Vec<(&'static str, f64)> {
        vec![
            ("purchase_value", input.purchase_value),
            ("sale_value", input.sale_value),
            ("holding_months", input.holding_months as f64),
        ]
    }

    fn compute(input: &Self::Input) -> CapitalGainsResult {
        let gain = input.sale_value - input.purchase_value;
        let long_term = input.holding_months > EQUITY_LONG_TERM_MONTHS;
        let (exemption, rate) = if long_term {
            (EQUITY_LTCG_EXEMPTION.min(gain.max(0.0)), EQUITY_LTCG_RATE)
        } else {
            (0.0, EQUITY_STCG_RATE)
        };
        let taxable_gain = (gain - exemption).max(0.0);
        CapitalGainsResult {
            gain,
            long_term,
            exemption,
            taxable_gain,
            rate,
            tax: taxable_gain * rate,
        }
    }
}
