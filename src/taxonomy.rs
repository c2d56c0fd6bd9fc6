use std::sync::OnceLock;

use crate::models::TransactionType;

/// Valid expense categories enforced at commit time by the persistence layer.
pub const EXPENSE_CATEGORIES: &[&str] = &[
    "food-dining",
    "transportation",
    "shopping",
    "entertainment",
    "bills-utilities",
    "healthcare",
    "education",
    "travel",
    "groceries",
    "gas",
    "others",
];

/// Valid income categories enforced at commit time by the persistence layer.
pub const INCOME_CATEGORIES: &[&str] = &[
    "salary",
    "freelance",
    "business",
    "investment",
    "rental",
    "gift",
    "others",
];

/// Sentinel returned when no merchant keyword matches. Deliberately NOT a
/// member of EXPENSE_CATEGORIES; the persistence layer catches it downstream.
pub const OTHER_EXPENSE: &str = "other-expense";

/// Sentinel category for history-mode income rows. Like OTHER_EXPENSE, it
/// sits outside the enforced taxonomy.
pub const OTHER_INCOME: &str = "other-income";

/// Declaration order doubles as match priority: earlier entries win.
const DEFAULT_KEYWORDS: &[(&str, &[&str])] = &[
    (
        "food-dining",
        &[
            "restaurant", "cafe", "coffee", "pizza", "burger", "diner", "grill", "bakery",
            "deli", "bar", "kitchen", "food",
        ],
    ),
    (
        "groceries",
        &[
            "grocery", "supermarket", "market", "mart", "walmart", "costco", "kroger", "aldi",
            "safeway", "whole foods", "trader joe",
        ],
    ),
    (
        "gas",
        &["gas", "fuel", "petrol", "shell", "chevron", "exxon", "mobil", "texaco"],
    ),
    (
        "shopping",
        &[
            "amazon", "ebay", "target", "best buy", "store", "mall", "outlet", "boutique",
            "clothing", "shoes",
        ],
    ),
    (
        "healthcare",
        &[
            "pharmacy", "hospital", "clinic", "medical", "dental", "doctor", "cvs", "walgreens",
            "health",
        ],
    ),
    (
        "entertainment",
        &[
            "cinema", "movie", "theater", "netflix", "spotify", "concert", "arcade", "bowling",
            "game",
        ],
    ),
    (
        "transportation",
        &[
            "uber", "lyft", "taxi", "cab", "metro", "train", "transit", "parking", "toll",
            "airline", "bus",
        ],
    ),
    (
        "bills-utilities",
        &[
            "electric", "water", "internet", "phone", "cable", "utility", "power", "telecom",
            "broadband",
        ],
    ),
];

/// Ordered merchant-keyword lookup table. Entries are tested front to back;
/// the first category with a matching keyword wins.
#[derive(Debug, Clone)]
pub struct KeywordTable {
    entries: Vec<(String, Vec<String>)>,
}

impl KeywordTable {
    /// The fixed built-in table.
    pub fn with_defaults() -> Self {
        let entries = DEFAULT_KEYWORDS
            .iter()
            .map(|(cat, kws)| {
                (
                    (*cat).to_string(),
                    kws.iter().map(|k| (*k).to_string()).collect(),
                )
            })
            .collect();
        Self { entries }
    }

    /// Append user keywords after the fixed entries. Built-in priority order
    /// is never disturbed.
    pub fn push(&mut self, category: &str, keywords: Vec<String>) {
        self.entries.push((
            category.to_string(),
            keywords.into_iter().map(|k| k.to_lowercase()).collect(),
        ));
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(cat, kws)| (cat.as_str(), kws.as_slice()))
    }
}

/// Process-wide default table, built once and shared by reference.
pub fn default_table() -> &'static KeywordTable {
    static TABLE: OnceLock<KeywordTable> = OnceLock::new();
    TABLE.get_or_init(KeywordTable::with_defaults)
}

/// Whether a category label is a member of the enforced taxonomy for the
/// given transaction type. Classifier sentinels are not members.
pub fn is_valid_category(txn_type: TransactionType, label: &str) -> bool {
    let set = match txn_type {
        TransactionType::Expense => EXPENSE_CATEGORIES,
        TransactionType::Income => INCOME_CATEGORIES,
    };
    set.contains(&label)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table_priority_order() {
        let table = KeywordTable::with_defaults();
        let cats: Vec<&str> = table.entries().map(|(c, _)| c).collect();
        assert_eq!(
            cats,
            vec![
                "food-dining",
                "groceries",
                "gas",
                "shopping",
                "healthcare",
                "entertainment",
                "transportation",
                "bills-utilities",
            ]
        );
    }

    #[test]
    fn test_push_appends_after_defaults() {
        let mut table = KeywordTable::with_defaults();
        let before = table.entries().count();
        table.push("education", vec!["Udemy".to_string()]);
        let last = table.entries().last().unwrap();
        assert_eq!(table.entries().count(), before + 1);
        assert_eq!(last.0, "education");
        assert_eq!(last.1, &["udemy".to_string()]);
    }

    #[test]
    fn test_sentinels_outside_taxonomy() {
        assert!(!is_valid_category(TransactionType::Expense, OTHER_EXPENSE));
        assert!(!is_valid_category(TransactionType::Income, OTHER_INCOME));
        assert!(is_valid_category(TransactionType::Expense, "gas"));
        assert!(is_valid_category(TransactionType::Income, "salary"));
        assert!(!is_valid_category(TransactionType::Income, "gas"));
    }

    #[test]
    fn test_every_default_entry_maps_to_taxonomy_category() {
        for (cat, _) in KeywordTable::with_defaults().entries() {
            assert!(
                is_valid_category(TransactionType::Expense, cat),
                "{cat} is not a taxonomy member"
            );
        }
    }
}
