use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;
use xprotect_extract::cli::{Args, OutputFormat};
use xprotect_extract::config::ExtractLimits;
use xprotect_extract::{loader, output};

fn main() -> Result<()> {
    let args = Args::parse();

    // Use RUST_LOG env var if set, otherwise derive from the verbose flag.
    let env_filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if args.verbose {
        EnvFilter::new("xprotect_extract=debug")
    } else {
        EnvFilter::new("xprotect_extract=info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let limits = match args.max_depth {
        Some(depth) => ExtractLimits::new(depth).context("Invalid --max-depth")?,
        None => ExtractLimits::default(),
    };

    let rows = match &args.plist {
        Some(path) => {
            debug!("Loading signature plist from {}", path);
            loader::load_rows_from_path(path, &limits)
                .with_context(|| format!("Failed to extract rows from {path}"))?
        }
        None => loader::load_default_rows(&limits)
            .context("Failed to extract rows from the system XProtect.plist")?,
    };

    match args.format {
        OutputFormat::Json => println!("{}", output::render_json(&rows)?),
        OutputFormat::Terminal => {
            print!("{}", output::render_table(&rows));
            eprintln!("{} signature rows", rows.len());
        }
    }

    Ok(())
}
