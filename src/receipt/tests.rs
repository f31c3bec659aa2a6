#![allow(clippy::unwrap_used)]

use anyhow::Result;
use rust_decimal_macros::dec;

use super::*;
use crate::models::Category;

struct FailingAdapter;

impl ReceiptAdapter for FailingAdapter {
    fn process_receipt(&self, _image: &[u8]) -> Result<ReceiptData> {
        anyhow::bail!("OCR failed: no text found in image")
    }
}

#[test]
fn test_mock_adapter_fixed_receipt() {
    let data = MockReceiptAdapter.process_receipt(&[]).unwrap();
    assert_eq!(data.amount, dec!(42.50));
    assert_eq!(data.category, Category::Food);
}

#[test]
fn test_receipt_expense_record() {
    let data = MockReceiptAdapter.process_receipt(&[]).unwrap();
    let expense = receipt_expense(&data, "receipt.jpg");
    assert_eq!(expense.amount, dec!(42.50));
    assert_eq!(expense.category, Category::Food);
    assert_eq!(expense.description, "Receipt: receipt.jpg");
}

#[test]
fn test_receipt_reply_has_no_budget_context() {
    let data = MockReceiptAdapter.process_receipt(&[]).unwrap();
    let reply = receipt_reply(&data);
    assert_eq!(reply, "Receipt processed: $42.50 for Food");
    assert!(!reply.contains('%'));
}

#[test]
fn test_adapter_error_propagates_as_message() {
    let err = FailingAdapter.process_receipt(&[]).unwrap_err();
    assert_eq!(err.to_string(), "OCR failed: no text found in image");
}

#[test]
fn test_adapter_usable_as_trait_object() {
    let adapter: Box<dyn ReceiptAdapter> = Box::new(MockReceiptAdapter);
    assert!(adapter.process_receipt(&[]).is_ok());
}
