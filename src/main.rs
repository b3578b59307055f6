//! CLI entry point for the therapy admin console.
//!
//! Renders the admin analytics dashboards in the terminal.
//!
//! # Usage
//!
//! ```bash
//! # Appointment and engagement analytics for the last month
//! cargo run -- analytics --period month
//!
//! # Interactive mode: change period, refresh, retry on failure
//! cargo run -- analytics --interactive
//!
//! # Platform-wide statistics
//! cargo run -- statistics
//!
//! # Both screens
//! cargo run -- dashboard --period week
//!
//! # Check that the admin API accepts the configured credential
//! cargo run -- check
//! ```
//!
//! # Environment Variables
//!
//! - `ADMIN_TOKEN` (required): bearer credential for the admin API
//! - `API_BASE_URL`: admin API base URL (default: `http://localhost:5000/api`)

use therapy_admin_console::application::services::{AnalyticsService, StatisticsService};
use therapy_admin_console::application::view::{ViewPhase, ViewState};
use therapy_admin_console::config::{self, Config};
use therapy_admin_console::domain::entities::ReportingPeriod;
use therapy_admin_console::domain::gateways::AnalyticsGateway;
use therapy_admin_console::infrastructure::http::HttpAnalyticsGateway;
use therapy_admin_console::infrastructure::StaticCredentials;
use therapy_admin_console::render;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Select};
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

/// Terminal analytics console for the therapy platform admin API.
#[derive(Parser)]
#[command(name = "admin-console")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level commands.
#[derive(Subcommand)]
enum Commands {
    /// Show appointment and engagement analytics
    Analytics {
        /// Reporting period: week, month, quarter or year
        #[arg(short, long, default_value = "month")]
        period: ReportingPeriod,

        /// Interactive mode with period selection and manual refresh
        #[arg(short, long)]
        interactive: bool,
    },

    /// Show the platform-wide statistics dashboard
    Statistics,

    /// Show both screens
    Dashboard {
        /// Reporting period for the analytics screen
        #[arg(short, long, default_value = "month")]
        period: ReportingPeriod,
    },

    /// Check that the admin API accepts the configured credential
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env().context("Failed to load configuration")?;
    init_tracing(&config);
    config.print_summary();

    let credentials = Arc::new(StaticCredentials::new(config.admin_token.clone()));
    let gateway = Arc::new(HttpAnalyticsGateway::new(
        config.api_base_url.clone(),
        Duration::from_secs(config.http_timeout_seconds),
        credentials,
    )?);

    match cli.command {
        Commands::Analytics {
            period,
            interactive,
        } => {
            if interactive {
                run_analytics_interactive(gateway, &config).await?;
            } else {
                run_analytics(gateway, period, &config).await?;
            }
        }
        Commands::Statistics => {
            run_statistics(gateway, &config).await?;
        }
        Commands::Dashboard { period } => {
            run_statistics(gateway.clone(), &config).await?;
            run_analytics(gateway, period, &config).await?;
        }
        Commands::Check => {
            run_check(gateway).await?;
        }
    }

    Ok(())
}

/// Initializes the tracing subscriber from configuration.
fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.clone()));

    if config.log_format == "json" {
        tracing_subscriber::fmt().with_env_filter(filter).json().init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

/// Runs analytics fetch cycles until one renders or the user gives up.
///
/// # Flow
///
/// 1. Begin a cycle (token), put the view into the loading phase
/// 2. Fetch both analytics requests concurrently (all-or-nothing join)
/// 3. Ready: render the screen and return
/// 4. Error: show the banner and offer a retry of the identical cycle
async fn run_analytics<G: AnalyticsGateway>(
    gateway: Arc<G>,
    period: ReportingPeriod,
    config: &Config,
) -> Result<()> {
    let service = AnalyticsService::new(gateway);
    let mut view = ViewState::new();

    loop {
        let cycle = service.begin_cycle();
        view.mark_loading();

        let outcome = service.fetch_snapshot(period).await;
        let auth_failure = matches!(&outcome, Err(e) if e.is_auth_failure());
        view.apply(cycle, outcome);

        match view.phase() {
            ViewPhase::Ready(snapshot) => {
                render::print_analytics(snapshot, config.recent_activity_limit);
                return Ok(());
            }
            ViewPhase::Error(message) => {
                if !offer_retry("analytics", message, auth_failure)? {
                    return Ok(());
                }
            }
            ViewPhase::Loading => unreachable!("cycle outcome was just applied"),
        }
    }
}

/// Interactive analytics session: fetch, then refresh / change period / quit.
async fn run_analytics_interactive<G: AnalyticsGateway>(
    gateway: Arc<G>,
    config: &Config,
) -> Result<()> {
    let service = AnalyticsService::new(gateway);
    let mut view = ViewState::new();
    let mut period = ReportingPeriod::default();

    loop {
        let cycle = service.begin_cycle();
        view.mark_loading();

        let outcome = service.fetch_snapshot(period).await;
        let auth_failure = matches!(&outcome, Err(e) if e.is_auth_failure());
        view.apply(cycle, outcome);

        match view.phase() {
            ViewPhase::Ready(snapshot) => {
                render::print_analytics(snapshot, config.recent_activity_limit);
            }
            ViewPhase::Error(message) => {
                if offer_retry("analytics", message, auth_failure)? {
                    continue;
                }
                return Ok(());
            }
            ViewPhase::Loading => unreachable!("cycle outcome was just applied"),
        }

        let action = Select::new()
            .with_prompt("Next")
            .items(&["Refresh", "Change period", "Quit"])
            .default(0)
            .interact()?;

        match action {
            0 => {}
            1 => {
                let labels: Vec<&str> =
                    ReportingPeriod::ALL.iter().map(|p| p.label()).collect();
                let current = ReportingPeriod::ALL
                    .iter()
                    .position(|p| *p == period)
                    .unwrap_or(0);

                let selected = Select::new()
                    .with_prompt("Reporting period")
                    .items(&labels)
                    .default(current)
                    .interact()?;

                period = ReportingPeriod::ALL[selected];
            }
            _ => return Ok(()),
        }
    }
}

/// Runs statistics fetch cycles until one renders or the user gives up.
async fn run_statistics<G: AnalyticsGateway>(gateway: Arc<G>, config: &Config) -> Result<()> {
    let service = StatisticsService::new(gateway);
    let mut view = ViewState::new();

    loop {
        let cycle = service.begin_cycle();
        view.mark_loading();

        let outcome = service.fetch_summary().await;
        let auth_failure = matches!(&outcome, Err(e) if e.is_auth_failure());
        view.apply(cycle, outcome);

        match view.phase() {
            ViewPhase::Ready(summary) => {
                render::print_statistics(summary, config.recent_activity_limit);
                return Ok(());
            }
            ViewPhase::Error(message) => {
                if !offer_retry("statistics", message, auth_failure)? {
                    return Ok(());
                }
            }
            ViewPhase::Loading => unreachable!("cycle outcome was just applied"),
        }
    }
}

/// Prints the error banner and asks whether to re-run the fetch cycle.
fn offer_retry(screen: &str, message: &str, auth_failure: bool) -> Result<bool> {
    println!();
    println!(
        "{} {}",
        format!("✖ Failed to fetch {screen}:").red().bold(),
        message.red()
    );

    if auth_failure {
        println!(
            "  {}",
            "Check ADMIN_TOKEN; the credential may be expired.".yellow()
        );
    }

    let retry = Confirm::new()
        .with_prompt("Retry?")
        .default(true)
        .interact()?;

    if !retry {
        println!("{}", "❌ Cancelled".red());
    }

    Ok(retry)
}

/// Probes the admin API with the configured credential.
async fn run_check<G: AnalyticsGateway>(gateway: Arc<G>) -> Result<()> {
    println!("{}", "🔍 Checking admin API connection...".bright_blue());

    match gateway.fetch_statistics().await {
        Ok(_) => {
            println!("{}", "✅ Admin API connection OK".green().bold());
            Ok(())
        }
        Err(e) => {
            println!("{} {}", "✖ Admin API check failed:".red().bold(), e);
            Err(e.into())
        }
    }
}
