//! CLI entrypoint for Nova Duet
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use colored::Colorize;
use duet_application::{ModelClient, Orchestrator};
use duet_domain::Query;
use duet_infrastructure::{BedrockTransport, ConfigLoader, FileConfig};
use duet_presentation::output::labels::Labels;
use duet_presentation::{BatchRunner, ChatRepl, Cli, ConsoleSink, RunMode, run_turn};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG wins over -v
    let default_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    info!("Starting Nova Duet");

    // === Configuration ===
    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow::anyhow!("{e}"))
            .context("Failed to load configuration")?
    };
    apply_cli_overrides(&mut config, &cli);

    let issues = config.validate();
    if !issues.is_empty() {
        for issue in &issues {
            eprintln!("{} {}", "config error:".red().bold(), issue);
        }
        bail!("Invalid configuration ({} issue(s))", issues.len());
    }
    let params = config.chat_params()?;
    let locale = params.locale;

    // === Dependency Injection ===
    let transport = BedrockTransport::new(&config.bedrock)
        .await
        .context("Failed to initialize the Bedrock client; check AWS credentials and region")?;
    let client = ModelClient::new(Arc::new(transport), params);
    let orchestrator = Orchestrator::new(client);

    if !cli.quiet {
        let labels = Labels::for_locale(locale);
        println!("{}", labels.banner_title.bold());
        println!("{}", labels.banner_subtitle);
        println!("{}", "=".repeat(60));
    }

    match cli.run_mode() {
        RunMode::Single(text) => {
            let mut sink = ConsoleSink::stdout(locale);
            run_turn(&orchestrator, &Query::new(text), &mut sink, cli.quiet).await;
        }
        RunMode::Batch => {
            let pause = config.chat.pause_between_batch && !cli.no_pause;
            BatchRunner::new(orchestrator)
                .with_pause(pause)
                .with_quiet(cli.quiet)
                .run()
                .await?;
        }
        RunMode::Interactive => {
            ChatRepl::new(orchestrator)
                .with_quiet(cli.quiet)
                .run()
                .await?;
        }
    }

    Ok(())
}

/// Command-line flags take precedence over every config source.
fn apply_cli_overrides(config: &mut FileConfig, cli: &Cli) {
    if let Some(ref locale) = cli.locale {
        config.chat.locale = locale.clone();
    }
    if let Some(ref region) = cli.region {
        config.bedrock.region = Some(region.clone());
    }
    if let Some(ref profile) = cli.profile {
        config.bedrock.profile = Some(profile.clone());
    }
}
