mod respond;

pub(crate) use respond::compose_budget_reply;

use anyhow::Result;

use crate::extract::{Extraction, Extractor};
use crate::models::{Budgets, Expense};

/// Reply for any message that states no recognizable expense.
pub(crate) const FALLBACK_REPLY: &str =
    "I can help you track expenses! Try saying something like 'I spent $20 on coffee'";

/// Conversation orchestrator: one entry point per chat turn. Stateless
/// between calls apart from the compiled expense pattern.
pub(crate) struct Assistant {
    extractor: Extractor,
}

impl Assistant {
    pub(crate) fn new() -> Result<Self> {
        Ok(Self {
            extractor: Extractor::new()?,
        })
    }

    /// Handle one chat turn. When the message states an expense, returns
    /// the budget-aware reply plus the new record for the caller to
    /// append; the prior expense list and budgets are never mutated
    /// here. Anything unparseable gets the fixed fallback prompt.
    pub(crate) fn handle_message(
        &self,
        text: &str,
        prior_expenses: &[Expense],
        budgets: &Budgets,
    ) -> (String, Option<Expense>) {
        match self.extractor.extract(text) {
            Extraction::Expense(candidate) => {
                let current = Expense::total_for(prior_expenses, candidate.category);
                let new_total = current + candidate.amount;
                let budget = budgets.limit(candidate.category);

                let reply =
                    compose_budget_reply(candidate.amount, candidate.category, new_total, budget);
                let expense =
                    Expense::new(candidate.amount, candidate.category, candidate.description);

                (reply, Some(expense))
            }
            Extraction::NoMatch | Extraction::BadAmount => (FALLBACK_REPLY.to_string(), None),
        }
    }
}
