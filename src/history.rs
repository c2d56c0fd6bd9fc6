//! Transaction-history mode: detection of tabular statement text and the
//! row parser that turns it into multiple transaction candidates.

use std::sync::OnceLock;

use chrono::NaiveDate;
use regex::Regex;

use crate::classifier;
use crate::extractor::{normalize_lines, parse_numeric_date};
use crate::models::{SuggestedTransaction, TransactionType};
use crate::taxonomy::{self, KeywordTable, OTHER_INCOME};

/// Every parsed history row gets this payment method; it is never inferred.
pub const HISTORY_PAYMENT_METHOD: &str = "bank-transfer";

// Row shape: date token + description + optional currency symbol + signed
// decimal amount.
fn row_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r"^(\d{1,2}[/-]\d{1,2}[/-]\d{4}|\d{4}[/-]\d{1,2}[/-]\d{1,2})\s+(.+?)\s+\$?([+-]?\d+(?:\.\d{1,2})?)\s*$",
        )
        .expect("invalid regex literal")
    })
}

/// History mode triggers when any single line carries a tabular header:
/// "date" and "amount" plus "description" or "transaction". One pass, one
/// rule, no confidence score.
pub fn detect_history_mode(text: &str) -> bool {
    normalize_lines(text).iter().any(|line| {
        let lower = line.to_lowercase();
        lower.contains("date")
            && lower.contains("amount")
            && (lower.contains("description") || lower.contains("transaction"))
    })
}

fn is_income_row(description: &str, raw_line: &str) -> bool {
    let desc = description.to_lowercase();
    desc.contains("deposit")
        || desc.contains("salary")
        || desc.contains("payment received")
        || raw_line.contains('+')
}

fn parse_row(line: &str, table: &KeywordTable) -> Option<SuggestedTransaction> {
    let caps = row_re().captures(line)?;
    let date: NaiveDate = parse_numeric_date(&caps[1])?;
    let description = caps[2].trim().to_string();
    let amount: f64 = caps[3].parse().ok()?;
    if amount <= 0.0 {
        return None;
    }

    let (txn_type, category) = if is_income_row(&description, line) {
        (TransactionType::Income, OTHER_INCOME.to_string())
    } else {
        (
            TransactionType::Expense,
            classifier::classify(&description, table),
        )
    };

    Some(SuggestedTransaction {
        txn_type,
        amount,
        description,
        category,
        date,
        location: None,
        payment_method: Some(HISTORY_PAYMENT_METHOD.to_string()),
        source_receipt: None,
    })
}

/// Parse statement-style text into transaction candidates, one per
/// structurally valid row, in input line order. Rows that fail the pattern,
/// carry an unparseable date, or have a non-positive amount are dropped
/// silently.
pub fn parse_transaction_history_with(
    text: &str,
    table: &KeywordTable,
) -> Vec<SuggestedTransaction> {
    normalize_lines(text)
        .into_iter()
        .filter_map(|line| parse_row(line, table))
        .collect()
}

/// `parse_transaction_history_with` against the built-in keyword table.
pub fn parse_transaction_history(text: &str) -> Vec<SuggestedTransaction> {
    parse_transaction_history_with(text, taxonomy::default_table())
}
