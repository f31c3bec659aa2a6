use anyhow::Result;
use regex::Regex;
use rust_decimal::{Decimal, RoundingStrategy};
use tracing::debug;

use crate::models::Category;

/// Lexical expense pattern: a spending verb, then an amount (optional
/// `$` prefix, comma grouping), then "on"/"for" and the described item.
/// The description capture is deliberately narrow: a single token.
const EXPENSE_PATTERN: &str =
    r"(?i)(?:spent|paid|bought).*?(\$?\s*[\d,]+\.?\d*)\s*(?:on|for)\s*(\S*)";

/// Keyword → category associations, tested in order against the
/// lowercased description; the first containment match wins.
const KEYWORD_CATEGORIES: [(&str, Category); 6] = [
    ("groceries", Category::Food),
    ("dinner", Category::Food),
    ("uber", Category::Travel),
    ("gas", Category::Travel),
    ("movie", Category::Miscellaneous),
    ("rent", Category::Rent),
];

/// An expense parsed out of free text, before the caller stamps it with
/// a timestamp and commits it.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ExpenseCandidate {
    pub(crate) amount: Decimal,
    pub(crate) category: Category,
    pub(crate) description: String,
}

/// Outcome of a parse attempt. `NoMatch` and `BadAmount` both produce
/// the same fallback reply downstream, but stay distinguishable so the
/// swallowed parse failure can be diagnosed.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Extraction {
    Expense(ExpenseCandidate),
    NoMatch,
    BadAmount,
}

pub(crate) struct Extractor {
    pattern: Regex,
}

impl Extractor {
    pub(crate) fn new() -> Result<Self> {
        Ok(Self {
            pattern: Regex::new(EXPENSE_PATTERN)?,
        })
    }

    /// Parse one chat message. Pure: no state is carried between calls.
    pub(crate) fn extract(&self, text: &str) -> Extraction {
        let Some(caps) = self.pattern.captures(text) else {
            return Extraction::NoMatch;
        };

        let raw_amount = caps.get(1).map_or("", |m| m.as_str());
        let cleaned = raw_amount.replace(['$', ','], "");
        let amount = match cleaned.trim().parse::<Decimal>() {
            Ok(amount) if amount > Decimal::ZERO => amount,
            Ok(_) => {
                debug!(raw = raw_amount, "expense pattern matched a non-positive amount");
                return Extraction::BadAmount;
            }
            Err(_) => {
                debug!(raw = raw_amount, "expense pattern matched but amount failed to parse");
                return Extraction::BadAmount;
            }
        };
        let amount = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);

        let description = caps.get(2).map_or("", |m| m.as_str()).trim().to_string();
        let category = infer_category(&description);

        Extraction::Expense(ExpenseCandidate {
            amount,
            category,
            description,
        })
    }
}

fn infer_category(description: &str) -> Category {
    let desc_lower = description.to_lowercase();

    for (keyword, category) in &KEYWORD_CATEGORIES {
        if desc_lower.contains(keyword) {
            return *category;
        }
    }

    Category::FALLBACK
}

#[cfg(test)]
mod tests;
