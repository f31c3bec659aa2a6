use anyhow::Result;
use rust_decimal::Decimal;

use crate::format::format_amount;
use crate::models::{Category, Expense};

/// Candidate expense produced from a receipt image.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ReceiptData {
    pub(crate) amount: Decimal,
    pub(crate) category: Category,
}

/// Boundary to the OCR/model pipeline. The real implementation lives
/// outside this crate; any error comes back as a single opaque message
/// and is never retried here.
pub(crate) trait ReceiptAdapter {
    fn process_receipt(&self, image: &[u8]) -> Result<ReceiptData>;
}

/// Stand-in adapter returning a fixed receipt.
pub(crate) struct MockReceiptAdapter;

impl ReceiptAdapter for MockReceiptAdapter {
    fn process_receipt(&self, _image: &[u8]) -> Result<ReceiptData> {
        Ok(ReceiptData {
            amount: Decimal::new(4250, 2),
            category: Category::Food,
        })
    }
}

/// Build the expense record for a processed receipt, with a synthesized
/// description naming the uploaded file.
pub(crate) fn receipt_expense(data: &ReceiptData, filename: &str) -> Expense {
    Expense::new(data.amount, data.category, format!("Receipt: {filename}"))
}

/// Chat acknowledgement for a receipt. Reports amount and category
/// only; receipt replies carry no budget percentage context.
pub(crate) fn receipt_reply(data: &ReceiptData) -> String {
    format!(
        "Receipt processed: {} for {}",
        format_amount(data.amount),
        data.category
    )
}

#[cfg(test)]
mod tests;
