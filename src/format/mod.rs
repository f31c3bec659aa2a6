use chrono::{DateTime, Local};
use rust_decimal::{Decimal, RoundingStrategy};

/// Format a decimal amount with thousand separators and 2 decimal places.
/// e.g. `1234567.89` → `"$1,234,567.89"`
pub(crate) fn format_amount(val: Decimal) -> String {
    let abs = val.abs();
    let formatted = format!("{abs:.2}");
    let mut parts = formatted.split('.');
    let int_part = parts.next().unwrap_or("0");
    let dec_part = parts.next().unwrap_or("00");

    let with_commas = group_thousands(int_part);

    if val < Decimal::ZERO {
        format!("-${with_commas}.{dec_part}")
    } else {
        format!("${with_commas}.{dec_part}")
    }
}

/// Format a decimal amount as whole currency, no cents.
/// e.g. `1200` → `"$1,200"`; halves round away from zero.
pub(crate) fn format_whole(val: Decimal) -> String {
    let rounded = val
        .abs()
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    let with_commas = group_thousands(&format!("{rounded:.0}"));

    if val < Decimal::ZERO {
        format!("-${with_commas}")
    } else {
        format!("${with_commas}")
    }
}

fn group_thousands(digits: &str) -> String {
    digits
        .as_bytes()
        .rchunks(3)
        .rev()
        .map(|chunk| std::str::from_utf8(chunk).unwrap_or(""))
        .collect::<Vec<_>>()
        .join(",")
}

/// `part` as a percentage of `total`. Zero totals yield zero so the
/// callers never divide by zero.
pub(crate) fn percentage(part: Decimal, total: Decimal) -> Decimal {
    if total == Decimal::ZERO {
        Decimal::ZERO
    } else {
        part / total * Decimal::ONE_HUNDRED
    }
}

/// Percentage rounded to the nearest whole number, half away from zero
/// (28.75 → 29, 12.5 → 13).
pub(crate) fn whole_percent(part: Decimal, total: Decimal) -> Decimal {
    percentage(part, total).round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

/// Human-readable time difference for chat timestamps.
pub(crate) fn time_ago(timestamp: DateTime<Local>, now: DateTime<Local>) -> String {
    let seconds = now.signed_duration_since(timestamp).num_seconds();

    if seconds < 60 {
        "Just now".to_string()
    } else if seconds < 3600 {
        format!("{} min ago", seconds / 60)
    } else if seconds < 86400 {
        format!("{} hrs ago", seconds / 3600)
    } else {
        format!("{} days ago", seconds / 86400)
    }
}

#[cfg(test)]
mod tests;
