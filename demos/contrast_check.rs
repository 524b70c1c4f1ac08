//! Command-line contrast checker for wcag_contrast
//!
//! Prints the JSON report to stdout and a summary to stderr

use std::{env, process};
use tracing_subscriber::EnvFilter;
use wcag_contrast::{check_contrast, check_contrast_lenient, ContrastReport};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();

    let mut lenient = false;
    let mut colors = Vec::new();

    for arg in &args[1..] {
        match arg.as_str() {
            "--lenient" => lenient = true,
            "--help" | "-h" => {
                print_help(&args[0]);
                process::exit(0);
            }
            other if !other.starts_with("--") => colors.push(other.to_string()),
            _ => {
                eprintln!("Unknown option: {}", arg);
                eprintln!("Use --help for usage information");
                process::exit(1);
            }
        }
    }

    let (foreground, background) = match colors.as_slice() {
        [fg, bg] => (fg, bg),
        _ => {
            print_help(&args[0]);
            process::exit(1);
        }
    };

    let report = if lenient {
        check_contrast_lenient(foreground, background)
    } else {
        match check_contrast(foreground, background) {
            Ok(report) => report,
            Err(e) => {
                eprintln!("Error: {}", e.user_message());
                process::exit(1);
            }
        }
    };

    print_report(&report);
}

fn print_help(program_name: &str) {
    eprintln!("Usage: {} [--lenient] <text-color> <background-color>", program_name);
    eprintln!();
    eprintln!("Colors are six digit hex values, with or without a leading '#'.");
    eprintln!("With --lenient, malformed colors are treated as black.");
    eprintln!();
    eprintln!("Example:");
    eprintln!("  {} '#FFFFFF' '#2196F3'", program_name);
}

fn print_report(report: &ContrastReport) {
    match serde_json::to_string_pretty(report) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Error serializing report: {}", e),
    }

    eprintln!();
    eprintln!("Contrast Summary:");
    eprintln!("  Text:       {}", report.foreground);
    eprintln!("  Background: {}", report.background);
    eprintln!("  Ratio:      {}", report.formatted_ratio());
    eprintln!("  Level:      {} ({})", report.tier, report.indicator());
}
