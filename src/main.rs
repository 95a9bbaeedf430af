use anyhow::{Context, Result};
use crossterm::style::Stylize;
use tracing::{info, warn};

use dnd_table::config::Config;
use dnd_table::data::{load_payments, payment_columns, sample_payments};
use dnd_table::logging::init_tracing;
use dnd_table::table::TableController;
use dnd_table::ui::classic::print_classic;
use dnd_table::ui::run_tui;

fn print_help() {
    println!("{}", "dnd-table - reorder table columns by dragging their headers".blue().bold());
    println!();
    println!("{}", "Usage:".yellow());
    println!("  dnd-table [OPTIONS] [FILE.csv|FILE.json]");
    println!();
    println!("{}", "Options:".yellow());
    println!("  {}         - Print the table once and exit", "--classic".green());
    println!(
        "  {} - Write a commented default config file",
        "--generate-config".green()
    );
    println!("  {}            - Show this help", "--help".green());
    println!();
    println!("Without a file the built-in sample payments are shown.");
}

fn generate_config() -> Result<()> {
    let path = Config::get_config_path()?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Error creating config directory {:?}", parent))?;
    }
    std::fs::write(&path, Config::create_default_with_comments())
        .with_context(|| format!("Error writing config file {:?}", path))?;
    println!("Configuration file created at: {:?}", path);
    Ok(())
}

/// Command line, hand-parsed
#[derive(Debug, Default, PartialEq, Eq)]
struct Args {
    help: bool,
    generate_config: bool,
    classic: bool,
    data_file: Option<String>,
    unknown: Vec<String>,
}

fn parse_args(args: &[String]) -> Args {
    let mut parsed = Args::default();
    for arg in args {
        match arg.as_str() {
            "--help" | "-h" => parsed.help = true,
            "--generate-config" => parsed.generate_config = true,
            "--classic" => parsed.classic = true,
            option if option.starts_with('-') => parsed.unknown.push(option.to_string()),
            // The loader decides whether the extension is supported
            file if parsed.data_file.is_none() => parsed.data_file = Some(file.to_string()),
            extra => parsed.unknown.push(extra.to_string()),
        }
    }
    parsed
}

fn main() -> Result<()> {
    let raw: Vec<String> = std::env::args().skip(1).collect();
    let args = parse_args(&raw);

    if args.help {
        print_help();
        return Ok(());
    }

    if args.generate_config {
        return generate_config();
    }

    let config = Config::load().unwrap_or_else(|e| {
        eprintln!("Warning: could not load config ({}), using defaults", e);
        Config::default()
    });
    let _log_buffer = init_tracing(&config.behavior.log_level);

    for unknown in &args.unknown {
        warn!(target: "config", "Ignoring unknown argument {}", unknown);
    }

    let rows = match &args.data_file {
        Some(path) => {
            info!(target: "table", "Loading rows from {}", path);
            load_payments(path)?
        }
        None => sample_payments(),
    };

    if args.classic {
        let table = TableController::new(payment_columns(), rows)?;
        print_classic(&table);
        return Ok(());
    }

    run_tui(config, rows)
}
