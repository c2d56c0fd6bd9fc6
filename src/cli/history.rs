use colored::Colorize;
use comfy_table::{Cell, Table};

use scrip::error::Result;
use scrip::fmt::money;
use scrip::history::parse_transaction_history_with;
use scrip::models::{SuggestedTransaction, TransactionType};
use scrip::settings::{keyword_table, load_settings};

use crate::cli::read_input;

pub(crate) fn print_candidates(txns: &[SuggestedTransaction]) {
    if txns.is_empty() {
        println!("No parseable rows.");
        return;
    }
    let mut table = Table::new();
    table.set_header(vec!["Date", "Description", "Type", "Category", "Amount"]);
    for t in txns {
        table.add_row(vec![
            Cell::new(t.date.format("%Y-%m-%d")),
            Cell::new(&t.description),
            Cell::new(t.txn_type),
            Cell::new(&t.category),
            Cell::new(money(t.amount)),
        ]);
    }
    println!("{table}");

    let income = txns
        .iter()
        .filter(|t| t.txn_type == TransactionType::Income)
        .count();
    let expense = txns.len() - income;
    println!(
        "{} income, {} expense",
        income.to_string().green(),
        expense.to_string().red()
    );
}

fn write_csv(txns: &[SuggestedTransaction], path: &str) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;
    wtr.write_record([
        "date",
        "description",
        "type",
        "category",
        "amount",
        "payment_method",
    ])?;
    for t in txns {
        wtr.write_record([
            t.date.format("%Y-%m-%d").to_string(),
            t.description.clone(),
            t.txn_type.to_string(),
            t.category.clone(),
            format!("{:.2}", t.amount),
            t.payment_method.clone().unwrap_or_default(),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn run(file: &str, json: bool, csv_out: Option<&str>) -> Result<()> {
    let text = read_input(file)?;
    let table = keyword_table(&load_settings());
    let txns = parse_transaction_history_with(&text, &table);

    if let Some(path) = csv_out {
        write_csv(&txns, path)?;
        println!("Wrote {path}");
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&txns)?);
        return Ok(());
    }

    print_candidates(&txns);
    Ok(())
}
