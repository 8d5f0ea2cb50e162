use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "xprotect-extract")]
#[command(about = "Flattens XProtect malware-signature definitions into tabular rows")]
#[command(version)]
pub struct Args {
    /// Path to an XProtect.plist (defaults to the system location)
    #[arg(short, long)]
    pub plist: Option<String>,

    /// Output format (json, terminal)
    #[arg(short, long, default_value = "terminal")]
    pub format: OutputFormat,

    /// Cap on match-group nesting depth
    #[arg(long)]
    pub max_depth: Option<usize>,

    /// Verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output for machine consumption
    Json,
    /// Human-readable terminal output
    Terminal,
}
