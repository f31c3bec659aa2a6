use rust_decimal::Decimal;

use super::Category;

/// Per-category spending limits. A category without an entry reads as
/// zero, which the responder reports as "no budget set". Only the UI
/// layer writes to this; the core reads it each turn.
#[derive(Debug, Clone, Default)]
pub struct Budgets {
    limits: Vec<(Category, Decimal)>,
}

impl Budgets {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn limit(&self, category: Category) -> Decimal {
        self.limits
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, limit)| *limit)
            .unwrap_or(Decimal::ZERO)
    }

    pub fn set(&mut self, category: Category, limit: Decimal) {
        if let Some(entry) = self.limits.iter_mut().find(|(c, _)| *c == category) {
            entry.1 = limit;
        } else {
            self.limits.push((category, limit));
        }
    }
}
