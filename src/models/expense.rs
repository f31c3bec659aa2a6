use chrono::{DateTime, Local};
use rust_decimal::Decimal;

use super::Category;

/// A recorded spending event. Immutable once created; the caller owns
/// the append-only list it lives in.
#[derive(Debug, Clone, PartialEq)]
pub struct Expense {
    pub amount: Decimal,
    pub category: Category,
    pub description: String,
    pub timestamp: DateTime<Local>,
}

impl Expense {
    pub fn new(amount: Decimal, category: Category, description: String) -> Self {
        Self {
            amount,
            category,
            description,
            timestamp: Local::now(),
        }
    }

    /// Sum of amounts in one category across a slice of expenses.
    pub fn total_for(expenses: &[Expense], category: Category) -> Decimal {
        expenses
            .iter()
            .filter(|e| e.category == category)
            .map(|e| e.amount)
            .sum()
    }
}
