#![allow(clippy::unwrap_used, clippy::panic)]

use rust_decimal_macros::dec;

use super::*;
use crate::models::Category;

fn extractor() -> Extractor {
    Extractor::new().unwrap()
}

fn expect_expense(text: &str) -> ExpenseCandidate {
    match extractor().extract(text) {
        Extraction::Expense(candidate) => candidate,
        other => panic!("expected an expense from {text:?}, got {other:?}"),
    }
}

// ── Pattern matching ──────────────────────────────────────────

#[test]
fn test_extract_spent_on() {
    let exp = expect_expense("I spent $45 on groceries today");
    assert_eq!(exp.amount, dec!(45.00));
    assert_eq!(exp.category, Category::Food);
    assert_eq!(exp.description, "groceries");
}

#[test]
fn test_extract_paid_for() {
    let exp = expect_expense("paid $1,250.50 for rent this morning");
    assert_eq!(exp.amount, dec!(1250.50));
    assert_eq!(exp.category, Category::Rent);
    assert_eq!(exp.description, "rent");
}

#[test]
fn test_extract_bought_verb() {
    let exp = expect_expense("bought 30 for gas");
    assert_eq!(exp.amount, dec!(30.00));
    assert_eq!(exp.category, Category::Travel);
}

#[test]
fn test_extract_case_insensitive() {
    let exp = expect_expense("SPENT $10 ON UBER");
    assert_eq!(exp.amount, dec!(10.00));
    assert_eq!(exp.category, Category::Travel);
    assert_eq!(exp.description, "UBER");
}

#[test]
fn test_extract_amount_without_symbol() {
    let exp = expect_expense("I spent 20 on coffee");
    assert_eq!(exp.amount, dec!(20.00));
}

#[test]
fn test_extract_description_is_first_token_only() {
    let exp = expect_expense("paid $30 for dinner with friends");
    assert_eq!(exp.description, "dinner");
    assert_eq!(exp.category, Category::Food);
}

#[test]
fn test_extract_missing_description() {
    // Verb and amount with nothing after the preposition still matches;
    // the description is empty and the category falls back.
    let exp = expect_expense("I spent $20 on");
    assert_eq!(exp.amount, dec!(20.00));
    assert_eq!(exp.description, "");
    assert_eq!(exp.category, Category::Miscellaneous);
}

#[test]
fn test_extract_rounds_amount_to_cents() {
    let exp = expect_expense("I spent $5.999 on coffee");
    assert_eq!(exp.amount, dec!(6.00));
}

// ── No match ──────────────────────────────────────────────────

#[test]
fn test_extract_plain_chatter() {
    assert_eq!(extractor().extract("hello there"), Extraction::NoMatch);
}

#[test]
fn test_extract_no_amount() {
    assert_eq!(
        extractor().extract("I spent a lot on food"),
        Extraction::NoMatch
    );
}

#[test]
fn test_extract_no_preposition() {
    assert_eq!(
        extractor().extract("bought 3 coffees yesterday"),
        Extraction::NoMatch
    );
}

#[test]
fn test_extract_empty_input() {
    assert_eq!(extractor().extract(""), Extraction::NoMatch);
}

// ── Bad amounts ───────────────────────────────────────────────

#[test]
fn test_extract_unparseable_amount() {
    // Commas alone satisfy the lexical pattern but strip to nothing
    assert_eq!(
        extractor().extract("I spent $,, on stuff"),
        Extraction::BadAmount
    );
}

#[test]
fn test_extract_zero_amount() {
    assert_eq!(
        extractor().extract("I spent $0 on coffee"),
        Extraction::BadAmount
    );
}

// ── Category inference ────────────────────────────────────────

#[test]
fn test_category_fallback() {
    let exp = expect_expense("I spent $20 on coffee");
    assert_eq!(exp.category, Category::Miscellaneous);
}

#[test]
fn test_category_keyword_containment() {
    // "gas" is matched inside the longer token
    let exp = expect_expense("spent $40 on gasoline");
    assert_eq!(exp.category, Category::Travel);
}

#[test]
fn test_category_first_keyword_wins() {
    // Contains both "movie" and "rent"; "movie" is enumerated first
    let exp = expect_expense("spent $15 on movierental");
    assert_eq!(exp.category, Category::Miscellaneous);
}

#[test]
fn test_category_inference_is_case_insensitive() {
    let exp = expect_expense("spent $80 on GROCERIES");
    assert_eq!(exp.category, Category::Food);
}

// ── Purity ────────────────────────────────────────────────────

#[test]
fn test_extract_is_idempotent() {
    let ex = extractor();
    let text = "I spent $45 on groceries today";
    assert_eq!(ex.extract(text), ex.extract(text));
}
