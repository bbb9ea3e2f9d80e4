//! "Hello Vibe!" service entry point.

use std::net::IpAddr;
use std::process::ExitCode;
use std::time::Duration;

use clap::{Parser, Subcommand};
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use hello_vibe::config::Config;
use hello_vibe::harness::{HelloProbe, ProbeReport};
use hello_vibe::HarnessError;
use hello_vibe::metrics;
use hello_vibe::server;
use hello_vibe::utils::shutdown_signal;

/// "Hello Vibe!" HTTP service.
#[derive(Parser, Debug)]
#[command(name = "hello-vibe")]
#[command(about = "Serves GET /api/hello and checks running instances of it")]
#[command(version)]
struct Args {
    /// Enable verbose logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the HTTP service (default).
    Serve {
        /// Address to bind (overrides HOST).
        #[arg(long)]
        host: Option<IpAddr>,

        /// HTTP server port (overrides PORT).
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Check configuration validity.
    CheckConfig,

    /// Check a running service's hello endpoint.
    Probe {
        /// Base URL of the service.
        #[arg(long, default_value = "http://127.0.0.1:8080")]
        url: String,

        /// Request timeout in seconds.
        #[arg(long, default_value = "5")]
        timeout_secs: u64,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let args = Args::parse();

    let config = Config::load().map_err(|e| {
        eprintln!("Failed to load configuration: {}", e);
        e
    })?;

    init_logging(&config, args.verbose || config.verbose);

    match args.command {
        Some(Command::CheckConfig) => cmd_check_config(&config),
        Some(Command::Probe { url, timeout_secs }) => cmd_probe(&url, timeout_secs).await,
        Some(Command::Serve { host, port }) => cmd_serve(config, host, port).await,
        None => cmd_serve(config, None, None).await,
    }
}

/// Initialize the tracing subscriber.
fn init_logging(config: &Config, verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("hello_vibe=debug,info")
    } else {
        EnvFilter::try_new(&config.rust_log).unwrap_or_else(|_| EnvFilter::new("info"))
    };

    let registry = tracing_subscriber::registry().with(filter);
    if config.log_json {
        registry.with(fmt::layer().json()).init();
    } else {
        registry.with(fmt::layer()).init();
    }
}

/// Check configuration validity.
fn cmd_check_config(config: &Config) -> anyhow::Result<ExitCode> {
    println!("======================================================================");
    println!("HELLO VIBE - CONFIGURATION CHECK");
    println!("======================================================================");

    print!("Validating configuration... ");
    if let Err(e) = config.validate() {
        println!("FAILED");
        println!("  Error: {}", e);
        return Ok(ExitCode::FAILURE);
    }
    println!("OK");

    println!("----------------------------------------------------------------------");
    println!("Configuration Summary:");
    println!("  Listen Address: {}", config.server_addr());
    match config.metrics_addr() {
        Some(addr) => println!("  Metrics Exporter: {}", addr),
        None => println!("  Metrics Exporter: Disabled"),
    }
    println!("  Log Filter: {}", config.rust_log);
    println!("  Log Format: {}", if config.log_json { "JSON" } else { "Text" });
    println!("======================================================================");
    println!("CONFIGURATION CHECK PASSED");
    println!("======================================================================");

    Ok(ExitCode::SUCCESS)
}

/// Exit status for a check outcome: 0 pass, 1 wrong answer, 2 unreachable.
fn check_exit_status(outcome: &Result<ProbeReport, HarnessError>) -> u8 {
    match outcome {
        Ok(_) => 0,
        Err(e) if e.is_unreachable() => 2,
        Err(_) => 1,
    }
}

/// Probe a running service. Exit status reflects the outcome.
async fn cmd_probe(url: &str, timeout_secs: u64) -> anyhow::Result<ExitCode> {
    let probe = HelloProbe::new(url, Duration::from_secs(timeout_secs))?;

    println!("Probing {} ...", probe.url());
    let outcome = probe.probe().await;
    match &outcome {
        Ok(report) => {
            println!("PASS");
            println!("  Status: {}", report.status);
            println!("  Content-Type: {}", report.content_type);
            println!("  Message: {}", report.payload.message);
            println!("  Elapsed: {:.2}ms", report.elapsed_ms);
        }
        Err(e) if e.is_unreachable() => {
            println!("UNREACHABLE");
            println!("  {}", e);
        }
        Err(e) => {
            println!("FAIL");
            println!("  {}", e);
        }
    }

    Ok(ExitCode::from(check_exit_status(&outcome)))
}

/// Run the HTTP service until a shutdown signal arrives.
async fn cmd_serve(
    mut config: Config,
    host: Option<IpAddr>,
    port: Option<u16>,
) -> anyhow::Result<ExitCode> {
    // Override with CLI args if provided
    if let Some(host) = host {
        config.host = host;
    }
    if let Some(port) = port {
        config.port = port;
    }

    if let Err(e) = config.validate() {
        error!("Invalid configuration: {}", e);
        return Err(anyhow::anyhow!("Configuration validation failed: {}", e));
    }

    if let Some(addr) = config.metrics_addr() {
        metrics::install_exporter(addr)?;
    }

    let listener = server::bind(config.server_addr()).await?;
    server::serve(listener, shutdown_signal()).await?;

    info!("Shutdown complete");
    Ok(ExitCode::SUCCESS)
}
