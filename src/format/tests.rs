#![allow(clippy::unwrap_used)]

use chrono::{Duration, Local};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::*;

// ── format_amount ─────────────────────────────────────────────

#[test]
fn test_format_amount_basic() {
    assert_eq!(format_amount(dec!(1234.56)), "$1,234.56");
}

#[test]
fn test_format_amount_no_commas() {
    assert_eq!(format_amount(dec!(999.99)), "$999.99");
}

#[test]
fn test_format_amount_zero() {
    assert_eq!(format_amount(dec!(0)), "$0.00");
}

#[test]
fn test_format_amount_pads_cents() {
    assert_eq!(format_amount(dec!(45)), "$45.00");
    assert_eq!(format_amount(dec!(1.5)), "$1.50");
}

#[test]
fn test_format_amount_negative() {
    assert_eq!(format_amount(dec!(-42.50)), "-$42.50");
}

#[test]
fn test_format_amount_large() {
    assert_eq!(format_amount(dec!(1234567.89)), "$1,234,567.89");
}

// ── format_whole ──────────────────────────────────────────────

#[test]
fn test_format_whole_basic() {
    assert_eq!(format_whole(dec!(285)), "$285");
    assert_eq!(format_whole(dec!(400)), "$400");
}

#[test]
fn test_format_whole_commas() {
    assert_eq!(format_whole(dec!(1200)), "$1,200");
}

#[test]
fn test_format_whole_rounds_half_away() {
    assert_eq!(format_whole(dec!(400.5)), "$401");
    assert_eq!(format_whole(dec!(400.4)), "$400");
}

#[test]
fn test_format_whole_negative() {
    assert_eq!(format_whole(dec!(-1500)), "-$1,500");
}

// ── percentage ────────────────────────────────────────────────

#[test]
fn test_percentage_zero_total_guard() {
    assert_eq!(percentage(dec!(50), Decimal::ZERO), Decimal::ZERO);
    assert_eq!(percentage(Decimal::ZERO, Decimal::ZERO), Decimal::ZERO);
}

#[test]
fn test_percentage_basic() {
    assert_eq!(percentage(dec!(285), dec!(400)), dec!(71.25));
}

#[test]
fn test_percentage_negative_part() {
    assert_eq!(percentage(dec!(-115), dec!(400)), dec!(-28.75));
}

#[test]
fn test_percentage_over_hundred() {
    assert_eq!(percentage(dec!(450), dec!(400)), dec!(112.5));
}

// ── whole_percent ─────────────────────────────────────────────

#[test]
fn test_whole_percent_rounds_half_away_from_zero() {
    // 115/400 = 28.75% → 29, 50/400 = 12.5% → 13
    assert_eq!(whole_percent(dec!(115), dec!(400)), dec!(29));
    assert_eq!(whole_percent(dec!(50), dec!(400)), dec!(13));
    assert_eq!(whole_percent(dec!(-50), dec!(400)), dec!(-13));
}

#[test]
fn test_whole_percent_zero_total() {
    assert_eq!(whole_percent(dec!(99), Decimal::ZERO), Decimal::ZERO);
}

// ── time_ago ──────────────────────────────────────────────────

#[test]
fn test_time_ago_just_now() {
    let now = Local::now();
    assert_eq!(time_ago(now, now), "Just now");
    assert_eq!(time_ago(now - Duration::seconds(59), now), "Just now");
}

#[test]
fn test_time_ago_minutes() {
    let now = Local::now();
    assert_eq!(time_ago(now - Duration::minutes(1), now), "1 min ago");
    assert_eq!(time_ago(now - Duration::minutes(10), now), "10 min ago");
    assert_eq!(time_ago(now - Duration::minutes(59), now), "59 min ago");
}

#[test]
fn test_time_ago_hours() {
    let now = Local::now();
    assert_eq!(time_ago(now - Duration::hours(1), now), "1 hrs ago");
    assert_eq!(time_ago(now - Duration::hours(23), now), "23 hrs ago");
}

#[test]
fn test_time_ago_days() {
    let now = Local::now();
    assert_eq!(time_ago(now - Duration::days(1), now), "1 days ago");
    assert_eq!(time_ago(now - Duration::days(5), now), "5 days ago");
}

#[test]
fn test_time_ago_future_timestamp() {
    // Clock skew reads as "Just now" rather than panicking
    let now = Local::now();
    assert_eq!(time_ago(now + Duration::seconds(30), now), "Just now");
}
