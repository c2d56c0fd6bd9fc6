mod cli;

use clap::Parser;

use cli::{Cli, Commands, KeywordsCommands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Extract { file, json } => cli::extract::run(&file, json),
        Commands::History { file, json, csv } => cli::history::run(&file, json, csv.as_deref()),
        Commands::Detect { file } => cli::detect::run(&file),
        Commands::Suggest { merchant } => cli::suggest::run(&merchant),
        Commands::Categories => cli::categories::run(),
        Commands::Keywords { command } => match command {
            KeywordsCommands::Add { category, keyword } => cli::keywords::add(&category, &keyword),
            KeywordsCommands::List => cli::keywords::list(),
        },
        Commands::Demo => cli::demo::run(),
        Commands::Completions { shell } => cli::completions(shell),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
