// Command-line entry point for js-outline.

use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use js_outline::files::{collect_sources, outline_files, FileOutline};
use js_outline::outline::{extract_outline, Dialect};
use js_outline::render::render_entries;

#[derive(Parser, Debug)]
#[command(author, version, about = "List the functions declared in JavaScript/TypeScript files", long_about = None)]
struct Cli {
    /// Files or directories to outline
    #[arg(required_unless_present = "stdin")]
    paths: Vec<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Parse every input as this dialect instead of guessing from the extension
    #[arg(short, long, value_enum)]
    dialect: Option<DialectArg>,

    /// Read a single source from stdin
    #[arg(long, conflicts_with = "paths")]
    stdin: bool,

    /// Log at debug level unless JS_OUTLINE_LOG says otherwise
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum DialectArg {
    Js,
    Jsx,
    Ts,
    Tsx,
}

impl From<DialectArg> for Dialect {
    fn from(arg: DialectArg) -> Self {
        match arg {
            DialectArg::Js => Dialect::JavaScript,
            DialectArg::Jsx => Dialect::Jsx,
            DialectArg::Ts => Dialect::TypeScript,
            DialectArg::Tsx => Dialect::Tsx,
        }
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env("JS_OUTLINE_LOG")
        .unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let dialect = cli.dialect.map(Dialect::from);

    if cli.stdin {
        let mut source = String::new();
        io::stdin()
            .read_to_string(&mut source)
            .context("Failed to read stdin")?;
        let entries = extract_outline(&source, dialect.unwrap_or(Dialect::JavaScript))?;
        match cli.format {
            Format::Text => print!("{}", render_entries(&entries)),
            Format::Json => println!("{}", serde_json::to_string_pretty(&entries)?),
        }
        return Ok(ExitCode::SUCCESS);
    }

    let mut sources = Vec::new();
    for path in &cli.paths {
        if !path.exists() {
            anyhow::bail!("Path does not exist: {}", path.display());
        }
        // With a forced dialect an explicitly named file is taken whatever its extension
        if dialect.is_some() && path.is_file() {
            sources.push(path.clone());
        } else {
            sources.extend(collect_sources(path));
        }
    }

    let mut outlines: Vec<FileOutline> = Vec::new();
    let mut failed = false;
    // Failures are already logged per file by the batch
    for (_, result) in outline_files(&sources, dialect) {
        match result {
            Ok(outline) => outlines.push(outline),
            Err(_) => failed = true,
        }
    }

    match cli.format {
        Format::Text => {
            for outline in &outlines {
                println!("{}", outline.path.display());
                print!("{}", render_entries(&outline.entries));
            }
        }
        Format::Json => println!("{}", serde_json::to_string_pretty(&outlines)?),
    }

    Ok(if failed { ExitCode::FAILURE } else { ExitCode::SUCCESS })
}
