use clap::Parser;
use std::fs;

use parex::{compare, markup, MinMatchWords};

mod cli;
use cli::{Cli, Commands, Format};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Compare { file_a, file_b, min_words, format } => {
            run_compare(&file_a, &file_b, min_words, format)
        }
        Commands::Phrases { file_a, file_b, min_words } => {
            run_phrases(&file_a, &file_b, min_words)
        }
    };

    if let Err(e) = result {
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }
}

fn read_document(path: &str) -> Result<String, Box<dyn std::error::Error>> {
    fs::read_to_string(path).map_err(|e| format!("{}: {}", path, e).into())
}

fn run_compare(
    file_a: &str,
    file_b: &str,
    min_words: usize,
    format: Format,
) -> Result<(), Box<dyn std::error::Error>> {
    let min = MinMatchWords::new(min_words)?;
    let text_a = read_document(file_a)?;
    let text_b = read_document(file_b)?;

    let result = compare(&text_a, &text_b, min);

    match format {
        Format::Json => {
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        Format::Html => {
            println!("{}", markup::to_html(&result.segments_a));
            println!("{}", markup::to_html(&result.segments_b));
        }
        Format::Text => {
            println!("{}", markup::to_text(&result.segments_a));
            println!("{}", markup::to_text(&result.segments_b));
        }
        Format::Ansi => {
            println!("{}", cli::display::document_header(file_a));
            println!("{}", cli::display::render_segments(&result.segments_a));
            println!();
            println!("{}", cli::display::document_header(file_b));
            println!("{}", cli::display::render_segments(&result.segments_b));
            println!();
            println!(
                "{}",
                cli::display::match_summary(result.matched_words, result.phrases.len())
            );
            for phrase in &result.phrases {
                println!("{}", cli::display::dim_line(&format!("  \"{}\"", phrase)));
            }
        }
    }

    Ok(())
}

fn run_phrases(
    file_a: &str,
    file_b: &str,
    min_words: usize,
) -> Result<(), Box<dyn std::error::Error>> {
    let min = MinMatchWords::new(min_words)?;
    let text_a = read_document(file_a)?;
    let text_b = read_document(file_b)?;

    for phrase in compare(&text_a, &text_b, min).phrases {
        println!("{}", phrase);
    }

    Ok(())
}
