use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Outcome of the external OCR/PDF text decoding step. Decoding is opaque
/// and fallible; the pipeline branches on this explicitly instead of
/// recovering from an exception somewhere upstream.
#[derive(Debug, Clone, PartialEq)]
pub enum DecodeOutcome {
    Decoded(String),
    Failed,
}

/// A single purchased product/service parsed from receipt text.
/// Quantity is always 1; it is never inferred from the line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub name: String,
    pub price: f64,
    pub quantity: u32,
}

impl LineItem {
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            price,
            quantity: 1,
        }
    }
}

/// Best-effort structured view of one receipt. Undetected fields are
/// zero/empty rather than errors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractedReceiptData {
    pub merchant_name: String,
    pub total_amount: f64,
    pub tax_amount: f64,
    pub date: Option<NaiveDate>,
    pub items: Vec<LineItem>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    Expense,
}

impl std::fmt::Display for TransactionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Income => write!(f, "income"),
            Self::Expense => write!(f, "expense"),
        }
    }
}

/// A transaction candidate handed to the persistence layer. The category is
/// a suggestion and may fall outside the enforced taxonomy (the sentinels
/// "other-expense"/"other-income"); persistence re-validates before commit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuggestedTransaction {
    pub txn_type: TransactionType,
    pub amount: f64,
    pub description: String,
    pub category: String,
    pub date: NaiveDate,
    pub location: Option<String>,
    pub payment_method: Option<String>,
    pub source_receipt: Option<String>,
}
