use scrip::error::Result;
use scrip::history::detect_history_mode;

use crate::cli::read_input;

pub fn run(file: &str) -> Result<()> {
    let text = read_input(file)?;
    if detect_history_mode(&text) {
        println!("history");
    } else {
        println!("receipt");
    }
    Ok(())
}
