//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for nova-duet
#[derive(Parser, Debug)]
#[command(name = "nova-duet")]
#[command(author, version, about = "Dual-tier chat - a fast answer now, a detailed one streamed right after")]
#[command(long_about = r#"
Nova Duet sends every question to two Amazon Nova models at once:

1. Fast tier: a small model returns a brief answer almost immediately
2. Deep tier: a larger model streams a detailed answer while you read

Configuration files are loaded from (in priority order):
1. NOVA_DUET_* environment variables (e.g. NOVA_DUET_BEDROCK__REGION)
2. --config <path>          Explicit config file
3. ./nova-duet.toml         Project-level config
4. ~/.config/nova-duet/config.toml   Global config

Example:
  nova-duet "What is the difference between AWS Lambda and EC2?"
  nova-duet --batch --no-pause --locale en
  nova-duet --region us-west-2
"#)]
pub struct Cli {
    /// The question to ask (omit for interactive mode)
    pub query: Option<String>,

    /// Run the built-in sample questions
    #[arg(short, long, conflicts_with = "query")]
    pub batch: bool,

    /// Do not wait for Enter between batch questions
    #[arg(long, requires = "batch")]
    pub no_pause: bool,

    /// Prompt and message language (ko, en)
    #[arg(short, long, value_name = "LOCALE")]
    pub locale: Option<String>,

    /// AWS region for Bedrock
    #[arg(long, value_name = "REGION")]
    pub region: Option<String>,

    /// AWS profile for credentials
    #[arg(long, value_name = "PROFILE")]
    pub profile: Option<String>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

/// How the session driver is chosen from the arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunMode {
    Single(String),
    Batch,
    Interactive,
}

impl Cli {
    pub fn run_mode(&self) -> RunMode {
        if self.batch {
            return RunMode::Batch;
        }
        match self.query.as_deref().map(str::trim) {
            Some(q) if !q.is_empty() => RunMode::Single(q.to_string()),
            _ => RunMode::Interactive,
        }
    }
}
