#![forbid(unsafe_code)]
use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use loadprofile::classifier::classify;
use loadprofile::config::{self, load_configuration};
use loadprofile::importers::{LoadOptions, list_sheets, load_grid};
use loadprofile::report::{Report, render_preview};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

/// Recognizes the layout of a yearly electricity load diagram.
#[derive(Debug, Parser)]
#[command(name = "loadprofile", version)]
struct Cli {
    /// CSV file or spreadsheet (xlsx, xlsm, xlsb, xls, ods) holding the diagram
    file: PathBuf,

    /// Sheet to read, the first sheet by default
    #[arg(long)]
    sheet: Option<String>,

    /// Print the sheet names of the workbook and exit
    #[arg(long)]
    list_sheets: bool,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    output: OutputFormat,

    /// Do not print the first rows of the table
    #[arg(long)]
    no_preview: bool,
}

const EXIT_UNRECOGNIZED: u8 = 2;

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Logs go to stderr, stdout is reserved for the result
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn,loadprofile=info".into()),
        )
        .init();

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to create Tokio runtime")?;

    runtime.block_on(async_main(cli))
}

async fn async_main(cli: Cli) -> Result<ExitCode> {
    load_configuration().context("Failed to load configuration")?;
    let config = config::get().context("Failed to get configuration")?;

    if cli.list_sheets {
        let sheets = list_sheets(&cli.file)
            .await
            .with_context(|| format!("Failed to list the sheets of {}", cli.file.display()))?;
        for sheet in sheets {
            println!("{}", sheet);
        }
        return Ok(ExitCode::SUCCESS);
    }

    let options = LoadOptions::from_config(&config)
        .context("Invalid configuration")?
        .with_sheet(cli.sheet);
    let table = load_grid(&cli.file, &options)
        .await
        .with_context(|| format!("Failed to load {}", cli.file.display()))?;

    let result = classify(&table.grid);
    let report = Report::new(&result, table.sheet);

    match cli.output {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Text => {
            if !cli.no_preview {
                println!("Data preview (first {} rows)", config.preview_rows);
                println!("{}\n", render_preview(&table.grid, config.preview_rows));
            }
            if report.success {
                println!("{}", report.to_text());
            } else {
                eprintln!("{}", report.to_text());
            }
        }
    }

    Ok(if report.success {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(EXIT_UNRECOGNIZED)
    })
}
