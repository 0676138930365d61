//! Display formatting tests.

use finlit_sdk::format::{format_compact, format_inr, format_percent, group_indian};

#[test]
fn groups_last_three_then_pairs() {
    assert_eq!(group_indian(0), "0");
    assert_eq!(group_indian(999), "999");
    assert_eq!(group_indian(1_000), "1,000");
    assert_eq!(group_indian(100_000), "1,00,000");
    assert_eq!(group_indian(14_499_580), "1,44,99,580");
    assert_eq!(group_indian(1_000_000_000), "1,00,00,00,000");
}

#[test]
fn inr_rounds_to_whole_rupees() {
    assert_eq!(format_inr(144_994.8), "₹1,44,995");
    assert_eq!(format_inr(12.4), "₹12");
    assert_eq!(format_inr(-1_500.0), "-₹1,500");
}

#[test]
fn compact_uses_lakh_and_crore() {
    assert_eq!(format_compact(144_994.8), "₹1.45 L");
    assert_eq!(format_compact(25_000_000.0), "₹2.50 Cr");
    assert_eq!(format_compact(99_999.0), "₹99,999");
    assert_eq!(format_compact(-250_000.0), "-₹2.50 L");
}

#[test]
fn sign_follows_the_rounded_amount() {
    assert_eq!(format_inr(-0.3), "₹0");
    assert_eq!(format_inr(-0.6), "-₹1");
    assert_eq!(format_compact(-0.3), "₹0");
}

#[test]
fn compact_tier_follows_the_rounded_amount() {
    assert_eq!(format_compact(99_999.6), "₹1.00 L");
    assert_eq!(format_compact(99_999.4), "₹99,999");
    assert_eq!(format_compact(9_999_600.0), "₹1.00 Cr");
    assert_eq!(format_compact(-99_999.6), "-₹1.00 L");
}

#[test]
fn percent_has_two_decimals() {
    assert_eq!(format_percent(7.1), "7.10%");
    assert_eq!(format_percent(12.0), "12.00%");
}
