use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use elemtree::{welcome_document, Render, RenderConfig};

#[derive(Debug, Parser)]
#[command(author, version, about = "Render the welcome document as markup", long_about = None)]
struct Args {
    /// Outer element tag
    #[arg(long, default_value = "div")]
    tag: String,

    /// Value of the outer element's class attribute
    #[arg(short, long, default_value = "container")]
    class: String,

    /// Heading text
    #[arg(long, default_value = "Welcome to NMOX!")]
    heading: String,

    /// Drop the space before `>` on tags without attributes
    #[arg(long)]
    compact: bool,

    /// Output file (defaults to stdout)
    #[arg(short, long, value_name = "OUTPUT")]
    output: Option<PathBuf>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .init();

    if let Err(e) = run() {
        error!("{:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = Args::parse();

    let config = if args.compact {
        RenderConfig::compact()
    } else {
        RenderConfig::default()
    };

    let document = welcome_document(&args.tag, &args.class, &args.heading);
    let markup = document.render_with(&config);
    info!(bytes = markup.len(), "document rendered");

    write_output(&args.output, &markup)
}

fn write_output(path: &Option<PathBuf>, markup: &str) -> Result<()> {
    match path {
        Some(path) => std::fs::write(path, markup)
            .with_context(|| format!("failed to write output file {}", path.display())),
        None => {
            let mut stdout = io::stdout();
            writeln!(stdout, "{markup}").context("failed to write stdout")?;
            Ok(())
        }
    }
}
