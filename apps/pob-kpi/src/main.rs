//! # POB KPI Dashboard
//!
//! The main binary for the POB KPI dashboard.
//!
//! This application provides:
//! - HTTP JSON API server (axum-based)
//! - CLI interface for viewing, editing and classifying KPIs
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │             apps/pob-kpi (THE BINARY)        │
//! │                                              │
//! │   ┌─────────────┐        ┌─────────────┐     │
//! │   │    CLI      │        │  HTTP API   │     │
//! │   │   (clap)    │        │   (axum)    │     │
//! │   └──────┬──────┘        └──────┬──────┘     │
//! │          └───────────┬──────────┘            │
//! │                      ▼                       │
//! │              ┌───────────────┐               │
//! │              │  pob-kpi-core │               │
//! │              │  (THE LOGIC)  │               │
//! │              └───────────────┘               │
//! └──────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```bash
//! # Start the HTTP server
//! pob-kpi server --host 0.0.0.0 --port 8080
//!
//! # CLI operations
//! pob-kpi list
//! pob-kpi show penentuan-dosen-pengampu --tier needs-improvement
//! pob-kpi update penjaminan-mutu-akademik --kpi 2 --achievement 95
//! ```

use clap::Parser;
use pob_kpi::{cli, config::ENV_LOG_FORMAT};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// =============================================================================
// APPLICATION ENTRY POINT
// =============================================================================

#[tokio::main]
async fn main() {
    let cli = cli::Cli::parse();

    // POB_KPI_LOG_FORMAT=json enables machine-parseable output.
    let log_format = std::env::var(ENV_LOG_FORMAT).unwrap_or_else(|_| "text".to_string());

    let default_filter = if cli.verbose {
        "pob_kpi=debug,tower_http=debug"
    } else {
        "pob_kpi=info,tower_http=debug"
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_filter.into());

    match log_format.as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer())
                .init();
        }
    }

    if !cli.quiet && !cli.json_mode {
        print_banner();
    }

    if let Err(e) = cli::execute(cli).await {
        tracing::error!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Print the startup banner.
fn print_banner() {
    println!(
        r#"
  POB KPI Dashboard v{}

  Poor • Needs Improvement • Good • Excellent
"#,
        env!("CARGO_PKG_VERSION")
    );
}
