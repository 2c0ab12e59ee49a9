use anyhow::{Context, Result};
use clap::Parser;
use search_cli::{read_session, render, OutputFormat};
use search_core::{SearchConfig, MAX_RESULT_DOCUMENT_COUNT};
use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "search")]
#[command(about = "Rank documents against a query by TF-IDF", long_about = None)]
struct Args {
    /// Session file: stop words, document count, documents, query (one per line). Reads stdin if omitted
    #[arg(long)]
    input: Option<PathBuf>,
    /// Maximum number of documents to print
    #[arg(long, default_value_t = MAX_RESULT_DOCUMENT_COUNT)]
    max_results: usize,
    /// Token separator
    #[arg(long, default_value_t = ' ')]
    separator: char,
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).with_writer(io::stderr).init();
    let args = Args::parse();

    let session = match &args.input {
        Some(path) => {
            let f = File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
            read_session(BufReader::new(f))?
        }
        None => read_session(io::stdin().lock())?,
    };

    let config = SearchConfig::default()
        .with_separator(args.separator)
        .with_max_results(args.max_results);
    let server = session.build_server(config)?;
    let hits = server.find_top_documents(&session.query);

    let out = render(args.format, &session.query, server.document_count(), &hits)?;
    let mut stdout = io::stdout().lock();
    stdout.write_all(out.as_bytes())?;
    stdout.flush()?;
    Ok(())
}
