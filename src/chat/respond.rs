use rust_decimal::Decimal;

use crate::format::{format_amount, format_whole, whole_percent};
use crate::models::Category;

/// Compose the status reply for a newly recorded expense: the amount,
/// the running category total against its budget, and how much headroom
/// is left. Total for any numeric input; a zero budget short-circuits
/// before any division.
pub(crate) fn compose_budget_reply(
    amount: Decimal,
    category: Category,
    new_total: Decimal,
    budget: Decimal,
) -> String {
    let status = if budget == Decimal::ZERO {
        "no budget set".to_string()
    } else if new_total > budget {
        format!(
            "{}% over budget",
            whole_percent(new_total - budget, budget).abs()
        )
    } else {
        format!("{}% remaining", whole_percent(budget - new_total, budget))
    };

    format!(
        "Got it! I've recorded {} for {}. You've spent {} out of your {} {} budget this month. You're doing great - {}!",
        format_amount(amount),
        category,
        format_whole(new_total),
        format_whole(budget),
        category,
        status
    )
}
