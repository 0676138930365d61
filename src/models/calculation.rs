use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// ChartPoint: One labeled amount in a result breakdown
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub label: String,
    pub amount: f64,
}

impl ChartPoint {
    pub fn new(label: impl Into<String>, amount: f64) -> Self {
        Self {
            label: label.into(),
            amount,
        }
    }
}

/// Ordered `{label, amount}` pairs for rendering a result as a chart or card.
pub trait Breakdown {
    fn breakdown(&self) -> Vec<ChartPoint>;
}

// ---------------------------------------------------------------------------
// YearlyRow: End-of-year snapshot for growth schedules
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearlyRow {
    pub year: u32,
    /// Cumulative amount contributed by the end of this year.
    pub invested: f64,
    /// Value at the end of this year.
    pub balance: f64,
}

// ---------------------------------------------------------------------------
// Compounding: How often interest is credited per year
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Compounding {
    Yearly,
    HalfYearly,
    #[default]
    Quarterly,
    Monthly,
}

impl Compounding {
    pub fn periods_per_year(self) -> u32 {
        match self {
            Compounding::Yearly => 1,
            Compounding::HalfYearly => 2,
            Compounding::Quarterly => 4,
            Compounding::Monthly => 12,
        }
    }
}
