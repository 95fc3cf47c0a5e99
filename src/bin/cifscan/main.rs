//! Command-line interface for cifscan
//! This binary tokenizes CIF/mmCIF files and renders the result for
//! inspection.
//!
//! Usage:
//!   cifscan tokens `<path>` [--format `<format>`]   - Print the token stream
//!   cifscan highlight `<path>` [--theme `<theme>`]  - Print the file with ANSI colors
mod theme;

use cifscan::cif::token_spans;
use clap::{Arg, Command};
use crossterm::style::Stylize;
use theme::Theme;

fn main() {
    let matches = Command::new("cifscan")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for inspecting CIF/mmCIF token streams")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("tokens")
                .about("Print the token stream of a CIF file")
                .arg(
                    Arg::new("path")
                        .help("Path to the CIF file")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format")
                        .value_parser(["text", "json"])
                        .default_value("text"),
                ),
        )
        .subcommand(
            Command::new("highlight")
                .about("Print a CIF file with ANSI colors per token category")
                .arg(
                    Arg::new("path")
                        .help("Path to the CIF file")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("theme")
                        .long("theme")
                        .short('t')
                        .help("Path to a YAML theme file"),
                ),
        )
        .get_matches();

    match matches.subcommand() {
        Some(("tokens", tokens_matches)) => {
            let path = tokens_matches.get_one::<String>("path").unwrap();
            let format = tokens_matches.get_one::<String>("format").unwrap();
            handle_tokens_command(path, format);
        }
        Some(("highlight", highlight_matches)) => {
            let path = highlight_matches.get_one::<String>("path").unwrap();
            let theme_path = highlight_matches.get_one::<String>("theme");
            handle_highlight_command(path, theme_path.map(String::as_str));
        }
        _ => unreachable!(),
    }
}

fn read_source(path: &str) -> String {
    std::fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading file: {}", e);
        std::process::exit(1);
    })
}

/// Handle the tokens command
fn handle_tokens_command(path: &str, format: &str) {
    let source = read_source(path);
    let spans = token_spans(&source);

    match format {
        "json" => {
            let output = serde_json::to_string_pretty(&spans).unwrap_or_else(|e| {
                eprintln!("Serialization error: {}", e);
                std::process::exit(1);
            });
            println!("{}", output);
        }
        _ => {
            for span in &spans {
                println!(
                    "{}\t{}\t{}",
                    span.start,
                    span.length,
                    span.category.scope_name()
                );
            }
        }
    }
}

/// Handle the highlight command
fn handle_highlight_command(path: &str, theme_path: Option<&str>) {
    let source = read_source(path);
    let theme = match theme_path {
        Some(theme_file) => Theme::from_yaml_file(theme_file).unwrap_or_else(|e| {
            eprintln!("Error loading theme: {}", e);
            std::process::exit(1);
        }),
        None => Theme::default(),
    };

    // Token boundaries always fall on ASCII bytes (blank space or
    // delimiters), so slicing the source at span edges is safe.
    let mut cursor = 0usize;
    for span in token_spans(&source) {
        let start = span.start as usize;
        let end = span.end() as usize;
        print!("{}", &source[cursor..start]);
        print!("{}", source[start..end].with(theme.color_for(span.category)));
        cursor = end;
    }
    print!("{}", &source[cursor..]);
}
