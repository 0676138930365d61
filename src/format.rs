//! Display helpers for result cards: Indian digit grouping and lakh/crore
//! shorthand.

const LAKH: f64 = 100_000.0;
const CRORE: f64 = 10_000_000.0;

/// Group an integer the Indian way: last three digits, then pairs.
///
/// `14499580` → `"1,44,99,580"`
pub fn group_indian(n: u64) -> String {
    let digits = n.to_string();
    if digits.len() <= 3 {
        return digits;
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups = Vec::new();
    let mut rest = head;
    while rest.len() > 2 {
        let (left, pair) = rest.split_at(rest.len() - 2);
        groups.push(pair);
        rest = left;
    }
    groups.push(rest);
    groups.reverse();
    format!("{},{}", groups.join(","), tail)
}

/// Rupee amount rounded to whole rupees, e.g. `₹1,44,996`.
pub fn format_inr(amount: f64) -> String {
    let whole = amount.abs().round() as u64;
    let sign = if amount < 0.0 && whole > 0 { "-" } else { "" };
    format!("{}₹{}", sign, group_indian(whole))
}

/// Compact form for cards and chart axes: `₹1.45 L`, `₹2.50 Cr`; amounts
/// under one lakh use [`format_inr`].
pub fn format_compact(amount: f64) -> String {
    let sign = if amount < 0.0 { "-" } else { "" };
    let abs = amount.abs();
    // tiers are chosen on the displayed value, so 99,999.6 shows as 1.00 L
    let lakhs = (abs / LAKH * 100.0).round() / 100.0;
    if lakhs >= CRORE / LAKH {
        format!("{}₹{:.2} Cr", sign, abs / CRORE)
    } else if abs.round() >= LAKH {
        format!("{}₹{:.2} L", sign, lakhs)
    } else {
        format_inr(amount)
    }
}

/// Percentage with two decimals, e.g. `7.10%`.
pub fn format_percent(value: f64) -> String {
    format!("{:.2}%", value)
}
