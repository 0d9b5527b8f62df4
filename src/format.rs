//! Shared derived-value and formatting functions
//!
//! Stateless helpers used by every render target. Renderers read computed
//! record fields and format them through these functions only, so the
//! on-screen view and the markup export can never disagree.

use crate::proposal::PromoData;
use chrono::{Datelike, NaiveDate};

/// Attained age at a given policy year
pub fn age_at(client_age: u32, policy_year: u32) -> u32 {
    client_age + policy_year
}

/// Attained-age range for a goal, collapsed when start and end coincide
pub fn age_span(client_age: u32, start: u32, end: u32) -> String {
    let start_age = age_at(client_age, start);
    let end_age = age_at(client_age, end);
    if start_age == end_age {
        format!("{}", start_age)
    } else {
        format!("{}-{}", start_age, end_age)
    }
}

/// Policy-year range label for a goal
pub fn year_span(start: u32, end: u32) -> String {
    if start == end {
        format!("第 {} 年", start)
    } else {
        format!("第 {}-{} 年", start, end)
    }
}

/// Percentage of `value` against `basis`, rounded to whole percent
///
/// A zero basis yields the literal "0%" rather than failing.
pub fn return_rate(value: u64, basis: u64) -> String {
    if basis == 0 {
        return "0%".to_string();
    }
    format!("{:.0}%", value as f64 / basis as f64 * 100.0)
}

/// Thousands-grouped decimal formatting, no symbol, no fraction
pub fn format_money(amount: u64) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Render an ISO date as "M月D日"
///
/// Anything that does not parse as a calendar date comes back unchanged,
/// including the empty string.
pub fn format_short_date(iso_date: &str) -> String {
    match NaiveDate::parse_from_str(iso_date, "%Y-%m-%d") {
        Ok(date) => format!("{}月{}日", date.month(), date.day()),
        Err(_) => iso_date.to_string(),
    }
}

/// Comma-joined summary of the enabled rebate promotions, "N/A" when none
pub fn rebate_summary(promo: &PromoData) -> String {
    let mut parts = Vec::new();
    if promo.lump_sum.enabled {
        parts.push(format!("一笔过 {}%", promo.lump_sum.percent));
    }
    if promo.five_year.enabled {
        parts.push(format!("5年缴 {}%", promo.five_year.percent));
    }
    if parts.is_empty() {
        "N/A".to_string()
    } else {
        parts.join(", ")
    }
}

/// Prepayment interest rate string, "N/A" when the promotion is off
pub fn prepay_summary(promo: &PromoData) -> String {
    if promo.prepay.enabled {
        format!("{}%", promo.prepay.rate)
    } else {
        "N/A".to_string()
    }
}

/// Parenthetical offer deadline, only when the promotion is enabled and a
/// deadline was entered
pub fn prepay_deadline(promo: &PromoData) -> String {
    if !promo.prepay.enabled || promo.prepay.deadline.is_empty() {
        return String::new();
    }
    format!("(截止至 {})", format_short_date(&promo.prepay.deadline))
}
