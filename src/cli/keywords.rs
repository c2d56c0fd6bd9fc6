use comfy_table::{Cell, Table};

use scrip::error::{Result, ScripError};
use scrip::models::TransactionType;
use scrip::settings::{keyword_table, load_settings, save_settings, KeywordEntry};
use scrip::taxonomy;

pub fn add(category: &str, keyword: &str) -> Result<()> {
    if !taxonomy::is_valid_category(TransactionType::Expense, category) {
        return Err(ScripError::UnknownCategory(category.to_string()));
    }
    let keyword = keyword.to_lowercase();

    let mut settings = load_settings();
    if let Some(entry) = settings
        .extra_keywords
        .iter_mut()
        .find(|e| e.category == category)
    {
        if !entry.keywords.contains(&keyword) {
            entry.keywords.push(keyword.clone());
        }
    } else {
        settings.extra_keywords.push(KeywordEntry {
            category: category.to_string(),
            keywords: vec![keyword.clone()],
        });
    }
    save_settings(&settings)?;
    println!("Added \"{keyword}\" to {category}");
    Ok(())
}

pub fn list() -> Result<()> {
    let keywords = keyword_table(&load_settings());
    let mut table = Table::new();
    table.set_header(vec!["Category", "Keywords"]);
    for (category, kws) in keywords.entries() {
        table.add_row(vec![Cell::new(category), Cell::new(kws.join(", "))]);
    }
    println!("{table}");
    Ok(())
}
