use colored::Colorize;
use comfy_table::{Cell, Table};
use serde::Serialize;

use scrip::error::Result;
use scrip::extractor::extract_receipt_data;
use scrip::fmt::{date_or_none, money};
use scrip::models::{ExtractedReceiptData, SuggestedTransaction};
use scrip::pipeline::suggest_from_receipt;
use scrip::settings::{keyword_table, load_settings};

use crate::cli::read_input;

#[derive(Serialize)]
struct ExtractOutput {
    receipt: ExtractedReceiptData,
    suggestion: SuggestedTransaction,
}

pub fn run(file: &str, json: bool) -> Result<()> {
    let text = read_input(file)?;
    let table = keyword_table(&load_settings());
    let receipt = extract_receipt_data(&text);
    let suggestion = suggest_from_receipt(&receipt, &table);

    if json {
        let out = ExtractOutput {
            receipt,
            suggestion,
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    println!("{}", "Receipt".bold());
    let merchant = if receipt.merchant_name.is_empty() {
        "(none)"
    } else {
        receipt.merchant_name.as_str()
    };
    println!("Merchant:  {merchant}");
    println!("Date:      {}", date_or_none(receipt.date));
    println!("Tax:       {}", money(receipt.tax_amount));
    println!("Total:     {}", money(receipt.total_amount));

    if !receipt.items.is_empty() {
        let mut items = Table::new();
        items.set_header(vec!["Item", "Qty", "Price"]);
        for item in &receipt.items {
            items.add_row(vec![
                Cell::new(&item.name),
                Cell::new(item.quantity),
                Cell::new(money(item.price)),
            ]);
        }
        println!("{items}");
    }

    println!();
    println!("{}", "Suggested transaction".bold());
    println!("Type:      {}", suggestion.txn_type.to_string().red());
    println!("Category:  {}", suggestion.category);
    println!("Amount:    {}", money(suggestion.amount));
    println!("Date:      {}", suggestion.date.format("%Y-%m-%d"));
    Ok(())
}
