//! Pipeline orchestration: normalize, detect mode, branch to the
//! single-receipt chain or the history parser, and assemble candidates.
//! Extraction never fails a request; a failed upstream decode produces a
//! manual-entry placeholder so the upload can still complete.

use chrono::Local;

use crate::classifier;
use crate::extractor::extract_receipt_data;
use crate::history::{detect_history_mode, parse_transaction_history_with};
use crate::models::{DecodeOutcome, ExtractedReceiptData, SuggestedTransaction, TransactionType};
use crate::taxonomy::{self, KeywordTable, OTHER_EXPENSE};

/// Placeholder candidate emitted when OCR/PDF decoding failed entirely.
pub fn manual_entry_placeholder() -> SuggestedTransaction {
    SuggestedTransaction {
        txn_type: TransactionType::Expense,
        amount: 0.0,
        description: "Manual entry required".to_string(),
        category: OTHER_EXPENSE.to_string(),
        date: Local::now().date_naive(),
        location: None,
        payment_method: None,
        source_receipt: None,
    }
}

/// Compose extracted receipt fields into one expense candidate. An
/// undetected date defaults to today.
pub fn suggest_from_receipt(
    data: &ExtractedReceiptData,
    table: &KeywordTable,
) -> SuggestedTransaction {
    SuggestedTransaction {
        txn_type: TransactionType::Expense,
        amount: data.total_amount,
        description: data.merchant_name.clone(),
        category: classifier::classify(&data.merchant_name, table),
        date: data.date.unwrap_or_else(|| Local::now().date_naive()),
        location: None,
        payment_method: None,
        source_receipt: None,
    }
}

/// Run the full pipeline over one decoded document. History-mode text yields
/// the parser's rows unmodified; anything else yields exactly one receipt
/// candidate. `source_receipt` is stamped onto every candidate.
pub fn process_document_with(
    outcome: DecodeOutcome,
    source_receipt: Option<&str>,
    table: &KeywordTable,
) -> Vec<SuggestedTransaction> {
    let mut candidates = match outcome {
        DecodeOutcome::Failed => vec![manual_entry_placeholder()],
        DecodeOutcome::Decoded(text) => {
            if detect_history_mode(&text) {
                parse_transaction_history_with(&text, table)
            } else {
                let data = extract_receipt_data(&text);
                vec![suggest_from_receipt(&data, table)]
            }
        }
    };
    if let Some(source) = source_receipt {
        for candidate in &mut candidates {
            candidate.source_receipt = Some(source.to_string());
        }
    }
    candidates
}

/// `process_document_with` against the built-in keyword table.
pub fn process_document(outcome: DecodeOutcome) -> Vec<SuggestedTransaction> {
    process_document_with(outcome, None, taxonomy::default_table())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_failure_yields_placeholder() {
        let txns = process_document(DecodeOutcome::Failed);
        assert_eq!(txns.len(), 1);
        let t = &txns[0];
        assert_eq!(t.txn_type, TransactionType::Expense);
        assert_eq!(t.amount, 0.0);
        assert_eq!(t.description, "Manual entry required");
        assert_eq!(t.category, "other-expense");
        assert_eq!(t.date, Local::now().date_naive());
    }

    #[test]
    fn test_receipt_mode_yields_single_candidate() {
        let text = "Joe's Diner\n01/02/2024\nBurger 8.50\nTOTAL 8.50";
        let txns = process_document(DecodeOutcome::Decoded(text.to_string()));
        assert_eq!(txns.len(), 1);
        let t = &txns[0];
        assert_eq!(t.txn_type, TransactionType::Expense);
        assert_eq!(t.description, "Joe's Diner");
        assert_eq!(t.amount, 8.50);
        assert_eq!(t.category, "food-dining");
        assert_eq!(t.date, chrono::NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());
        assert_eq!(t.payment_method, None);
    }

    #[test]
    fn test_history_mode_passes_rows_through() {
        let text = "Date Description Amount\n\
                    01/05/2024 Salary Deposit +2000.00\n\
                    03/05/2024 Shell Fuel 40.00";
        let txns = process_document(DecodeOutcome::Decoded(text.to_string()));
        assert_eq!(txns.len(), 2);
        assert_eq!(txns[0].txn_type, TransactionType::Income);
        assert_eq!(txns[1].category, "gas");
        assert_eq!(txns[1].payment_method.as_deref(), Some("bank-transfer"));
    }

    #[test]
    fn test_undetected_date_defaults_to_today() {
        let txns = process_document(DecodeOutcome::Decoded("Corner Shop".to_string()));
        assert_eq!(txns[0].date, Local::now().date_naive());
    }

    #[test]
    fn test_empty_text_degrades_to_zero_candidate() {
        let txns = process_document(DecodeOutcome::Decoded(String::new()));
        assert_eq!(txns.len(), 1);
        assert_eq!(txns[0].amount, 0.0);
        assert_eq!(txns[0].description, "");
        assert_eq!(txns[0].category, "other-expense");
    }

    #[test]
    fn test_source_receipt_stamped_on_candidates() {
        let txns = process_document_with(
            DecodeOutcome::Failed,
            Some("receipt-42"),
            taxonomy::default_table(),
        );
        assert_eq!(txns[0].source_receipt.as_deref(), Some("receipt-42"));

        let text = "Date Description Amount\n01/05/2024 Salary Deposit +2000.00";
        let txns = process_document_with(
            DecodeOutcome::Decoded(text.to_string()),
            Some("upload-7"),
            taxonomy::default_table(),
        );
        assert_eq!(txns[0].source_receipt.as_deref(), Some("upload-7"));
    }
}
