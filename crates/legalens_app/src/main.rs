mod app;
mod effects;
mod input;
mod ui;

use std::path::Path;
use std::time::Duration;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use url::Url;

use app_logging::{app_info, LogDestination};
use legalens_client::{check_health, ClientSettings};

const LOG_FILE: &str = "./legalens.log";

/// Terminal client for the legal-document analyzer service.
#[derive(Debug, Parser)]
#[command(
    name = "legalens",
    version,
    about = "Client terminal pour l'analyse de documents juridiques"
)]
struct Cli {
    /// Base URL of the analyzer service.
    #[arg(long, default_value = "http://localhost:8000", value_parser = clap::value_parser!(Url))]
    server: Url,

    /// Where log output goes. The terminal stays quiet by default so the
    /// interface owns the screen.
    #[arg(long, value_enum, default_value_t = LogTarget::File)]
    log: LogTarget,

    /// Probe the service health endpoint and exit.
    #[arg(long)]
    check: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum LogTarget {
    File,
    Terminal,
    Both,
}

impl From<LogTarget> for LogDestination {
    fn from(target: LogTarget) -> Self {
        match target {
            LogTarget::File => LogDestination::File,
            LogTarget::Terminal => LogDestination::Terminal,
            LogTarget::Both => LogDestination::Both,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.check {
        // The probe owns the terminal, so logs may go there too.
        app_logging::initialize(LogDestination::Terminal, Path::new(LOG_FILE));
        return run_check(cli.server);
    }

    app_logging::initialize(cli.log.into(), Path::new(LOG_FILE));
    app_info!("starting legalens against {}", cli.server);
    app::run(ClientSettings::new(cli.server))
}

fn run_check(server: Url) -> anyhow::Result<()> {
    let mut settings = ClientSettings::new(server.clone());
    // A hung probe should fail fast; only the probe is bounded.
    settings.request_timeout = Some(Duration::from_secs(10));

    match check_health(settings) {
        Ok(status) if status.is_healthy() => {
            println!(
                "✓ {}",
                status.message.as_deref().unwrap_or("Service opérationnel")
            );
            Ok(())
        }
        Ok(status) => anyhow::bail!("service at {server} reported status \"{}\"", status.status),
        Err(err) => Err(err).with_context(|| format!("health probe against {server} failed")),
    }
}
