use colored::Colorize;

use scrip::error::Result;
use scrip::models::DecodeOutcome;
use scrip::pipeline::process_document;

use crate::cli::history::print_candidates;

const SAMPLE_RECEIPT: &str = "\
Joe's Diner
123 Main Street
January 5, 2024
Burger 8.50
Fries 3.00
Soda 2.25
TAX 0.90
TOTAL 14.65
";

const SAMPLE_STATEMENT: &str = "\
Date Description Amount
01/05/2024 Salary Deposit +2000.00
03/05/2024 City Supermarket 54.20
04/05/2024 Shell Fuel 40.00
05/05/2024 Corner Cafe 8.20
";

pub fn run() -> Result<()> {
    println!("{}", "Sample receipt".bold());
    println!("{SAMPLE_RECEIPT}");
    let txns = process_document(DecodeOutcome::Decoded(SAMPLE_RECEIPT.to_string()));
    print_candidates(&txns);

    println!();
    println!("{}", "Sample statement".bold());
    println!("{SAMPLE_STATEMENT}");
    let txns = process_document(DecodeOutcome::Decoded(SAMPLE_STATEMENT.to_string()));
    print_candidates(&txns);

    println!();
    println!("{}", "Failed decode".bold());
    let txns = process_document(DecodeOutcome::Failed);
    print_candidates(&txns);
    Ok(())
}
