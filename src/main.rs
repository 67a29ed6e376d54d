use anyhow::Context;
use clap::Parser;
use is_terminal::IsTerminal;
use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;

mod config;
mod table;
mod ui;

use table::{LoadOptions, Table};

#[derive(Parser)]
#[command(
    name = "table-browser",
    version,
    author = "Patrik Sahlin <psahlin@gmail.com>",
    about = "Browse data tables in the terminal.",
    long_about = "A terminal browser for delimited data files. The left pane lists row labels, the right pane lists every field of the selected row. Tab switches panes, arrows and PageUp/PageDown move, x quits."
)]
struct Cli {
    /// Name of comma separated file
    file_name: PathBuf,

    /// File has no header row
    #[arg(long)]
    no_header: bool,

    /// Field delimiter (defaults to ',')
    #[arg(long, short)]
    delimiter: Option<char>,

    /// Verbose output
    #[arg(long, short)]
    verbose: bool,

    /// Write diagnostics to this file instead of stderr
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = init_tracing(&cli) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }

    if let Err(e) = browse(&cli) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

/// Logs would corrupt the alternate screen, so nothing is installed unless asked for.
fn init_tracing(cli: &Cli) -> anyhow::Result<()> {
    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    if let Some(path) = &cli.log_file {
        let file = File::create(path)
            .with_context(|| format!("Failed to create log file: {}", path.display()))?;
        tracing_subscriber::fmt()
            .with_max_level(level)
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .init();
    } else if cli.verbose {
        tracing_subscriber::fmt()
            .with_max_level(level)
            .with_ansi(false)
            .with_writer(std::io::stderr)
            .init();
    }

    Ok(())
}

/// Load the table and hand it to the interactive browser.
fn browse(cli: &Cli) -> anyhow::Result<()> {
    let config = config::load_config().context("Failed to load configuration")?;

    // CLI flags take precedence over the config file
    let delimiter = match cli.delimiter {
        Some(c) => config::delimiter_byte(c)?,
        None => config.delimiter_byte()?,
    };
    let options = LoadOptions {
        has_headers: !(cli.no_header || config.no_header.unwrap_or(false)),
        delimiter,
    };

    let table = Table::from_csv_path(&cli.file_name, &options)?;
    tracing::info!(
        file = %cli.file_name.display(),
        rows = table.row_count(),
        columns = table.column_count(),
        "Opening table"
    );

    if !std::io::stdout().is_terminal() {
        anyhow::bail!("table-browser needs an interactive terminal on stdout");
    }

    ui::run(
        &table,
        &ui::UiOptions {
            left_pane_percent: config.left_pane_percent(),
        },
    )
}
