//! Financial calculators.
//!
//! Every calculator is a unit type implementing [`Calculator`]: a declarative
//! [`FormSchema`], a projection of its input onto `(field, value)` pairs, and
//! a pure `compute` function that is total over inputs the schema accepts.
//! [`calculate`] runs validation and the formula in one step;
//! [`CalculatorView`] keeps the per-form state a UI binds to.

pub mod budget;
pub mod deposits;
pub mod insurance;
pub mod loans;
pub mod portfolio;
pub mod sip;
pub mod tax;

use crate::error::{Result, ValidationErrors};
use crate::models::Breakdown;
use crate::schema::FormSchema;
use tracing::debug;

pub use budget::{
    Affordability, AffordabilityInput, AffordabilityResult, BudgetRule, BudgetRuleInput,
    BudgetRuleResult, EmergencyFund, EmergencyFundInput, EmergencyFundResult, Inflation,
    InflationInput, InflationResult, LineItem, NetWorth, NetWorthInput, NetWorthResult,
};
pub use deposits::{
    Epf, EpfInput, EpfResult, FixedDeposit, FixedDepositInput, GrowthResult, PostOfficeDeposit,
    PostOfficeDepositInput, PostOfficeTenure, Ppf, PpfInput,
};
pub use insurance::{InsuranceEstimate, InsuranceInput, InsuranceResult};
pub use loans::{AmortizationRow, Annuity, AnnuityInput, AnnuityResult, Loan, LoanInput, LoanResult};
pub use portfolio::{
    Allocation, PortfolioAllocator, PortfolioInput, PortfolioResult, RiskAnswers, RiskLevel,
    RiskProfile, RiskProfileResult,
};
pub use sip::{
    GoalSip, GoalSipInput, GoalSipResult, Lumpsum, LumpsumInput, Sip, SipInput, SipResult,
    StepUpSip, StepUpSipInput,
};
pub use tax::{
    CapitalGains, CapitalGainsInput, CapitalGainsResult, IncomeTax, RegimeResult, TaxComparison,
    TaxInput, TaxRegime,
};

/// A pure financial formula with a declared input domain.
pub trait Calculator {
    type Input: Clone;
    type Output: Clone + Breakdown;

    /// Stable identifier used in logs.
    const NAME: &'static str;

    /// Constraint table checked before [`compute`](Self::compute) runs.
    fn schema() -> FormSchema;

    /// Project the input onto the schema's field names.
    fn values(input: &Self::Input) -> Vec<(&'static str, f64)>;

    /// Evaluate the formula. Only called with inputs the schema accepts.
    fn compute(input: &Self::Input) -> Self::Output;
}

/// Validate `input` against the calculator's schema and, if it passes,
/// evaluate the formula.
pub fn calculate<C: Calculator>(input: &C::Input) -> Result<C::Output> {
    C::schema().check(&C::values(input))?;
    debug!(calculator = C::NAME, "computing result");
    Ok(C::compute(input))
}

// ---------------------------------------------------------------------------
// CalculatorView
// ---------------------------------------------------------------------------

/// Isolated view-model for one calculator form.
///
/// Owns the current input, the errors from the last submit, and the last
/// successful result. A failed submit clears the previous result so a stale
/// figure is never shown next to invalid input.
pub struct CalculatorView<C: Calculator> {
    input: C::Input,
    errors: ValidationErrors,
    result: Option<C::Output>,
}

impl<C: Calculator> CalculatorView<C> {
    pub fn new(input: C::Input) -> Self {
        Self {
            input,
            errors: ValidationErrors::default(),
            result: None,
        }
    }

    pub fn input(&self) -> &C::Input {
        &self.input
    }

    /// Replace the input. Errors and result from the previous submit remain
    /// until the next [`submit`](Self::submit).
    pub fn set_input(&mut self, input: C::Input) {
        self.input = input;
    }

    pub fn input_mut(&mut self) -> &mut C::Input {
        &mut self.input
    }

    /// Validate and compute. Returns the new result, or `None` when
    /// validation failed (see [`errors`](Self::errors)).
    pub fn submit(&mut self) -> Option<&C::Output> {
        match C::schema().validate(&C::values(&self.input)) {
            Ok(()) => {
                debug!(calculator = C::NAME, "computing result");
                self.errors = ValidationErrors::default();
                self.result = Some(C::compute(&self.input));
            }
            Err(errs) => {
                debug!(calculator = C::NAME, errors = errs.len(), "submission rejected");
                self.errors = errs;
                self.result = None;
            }
        }
        self.result.as_ref()
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    /// Error message for one field, if it failed on the last submit.
    pub fn error_for(&self, field: &str) -> Option<&str> {
        self.errors.for_field(field)
    }

    pub fn result(&self) -> Option<&C::Output> {
        self.result.as_ref()
    }

    /// Drop errors and result, keeping the input.
    pub fn clear(&mut self) {
        self.errors = ValidationErrors::default();
        self.result = None;
    }
}

impl<C: Calculator> Clone for CalculatorView<C> {
    fn clone(&self) -> Self {
        Self {
            input: self.input.clone(),
            errors: self.errors.clone(),
            result: self.result.clone(),
        }
    }
}

impl<C: Calculator> CalculatorView<C>
where
    C::Input: Default,
{
    /// Restore the form to its defaults.
    pub fn reset(&mut self) {
        self.input = C::Input::default();
        self.clear();
    }
}

impl<C: Calculator> Default for CalculatorView<C>
where
    C::Input: Default,
{
    fn default() -> Self {
        Self::new(C::Input::default())
    }
}

// ---------------------------------------------------------------------------
// Shared formula helpers
// ---------------------------------------------------------------------------

/// `P·(1 + r/n)^(n·t)` with `rate_pct` in percent.
pub(crate) fn compound(principal: f64, rate_pct: f64, periods_per_year: u32, years: f64) -> f64 {
    let n = periods_per_year as f64;
    principal * (1.0 + rate_pct / 100.0 / n).powf(n * years)
}

/// Future value of `months` equal start-of-month payments at monthly rate `i`.
pub(crate) fn annuity_due_fv(payment: f64, monthly_rate: f64, months: u32) -> f64 {
    if months == 0 {
        return 0.0;
    }
    if monthly_rate == 0.0 {
        return payment * months as f64;
    }
    let growth = (1.0 + monthly_rate).powi(months as i32);
    payment * (growth - 1.0) / monthly_rate * (1.0 + monthly_rate)
}

/// Level payment that amortizes `principal` over `months` at monthly rate `i`.
pub(crate) fn level_payment(principal: f64, monthly_rate: f64, months: u32) -> f64 {
    if months == 0 {
        return 0.0;
    }
    if monthly_rate == 0.0 {
        return principal / months as f64;
    }
    principal * monthly_rate / (1.0 - (1.0 + monthly_rate).powi(-(months as i32)))
}
