//! Merchant classifier: case-insensitive substring lookup against an ordered
//! keyword table. No tokenization, no stemming, no fuzzy scoring.

use crate::taxonomy::{self, KeywordTable, OTHER_EXPENSE};

/// Map a merchant/description string to a category. Entries are tested in
/// table order and the first category with a matching keyword wins; an empty
/// or unmatched name falls through to the "other-expense" sentinel.
pub fn classify(merchant: &str, table: &KeywordTable) -> String {
    let name = merchant.to_lowercase();
    for (category, keywords) in table.entries() {
        if keywords.iter().any(|kw| name.contains(kw.as_str())) {
            return category.to_string();
        }
    }
    OTHER_EXPENSE.to_string()
}

/// `classify` against the built-in keyword table.
pub fn suggest_category(merchant: &str) -> String {
    classify(merchant, taxonomy::default_table())
}
