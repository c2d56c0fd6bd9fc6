use scrip::classifier::classify;
use scrip::error::Result;
use scrip::settings::{keyword_table, load_settings};

pub fn run(merchant: &str) -> Result<()> {
    let table = keyword_table(&load_settings());
    println!("{}", classify(merchant, &table));
    Ok(())
}
