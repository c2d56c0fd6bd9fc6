use colored::Colorize;

use scrip::error::Result;
use scrip::taxonomy::{EXPENSE_CATEGORIES, INCOME_CATEGORIES};

pub fn run() -> Result<()> {
    println!("{}", "EXPENSE".red().bold());
    for category in EXPENSE_CATEGORIES {
        println!("  {category}");
    }
    println!();
    println!("{}", "INCOME".green().bold());
    for category in INCOME_CATEGORIES {
        println!("  {category}");
    }
    Ok(())
}
