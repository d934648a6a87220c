//! # POB KPI CLI Module
//!
//! This module implements the CLI interface for the POB KPI dashboard.
//!
//! ## Available Commands
//!
//! - `server` - Start the HTTP server
//! - `list` - List POBs
//! - `show` - Show a POB's KPIs (filtered, sorted)
//! - `summary` - Tier counts and percentages
//! - `recommend` - Remediation narratives
//! - `update` - Edit an achievement (in memory) and show the result
//! - `classify` - Classify a value against ad-hoc boundaries
//! - `chart` - Print chart series
//! - `export` - Write a POB's KPIs to CSV
//!
//! Edits are never persisted: every invocation starts from the bundled data.

mod commands;

use crate::config::FileConfig;
use clap::{Parser, Subcommand};
use pob_kpi_core::PobError;
use std::path::PathBuf;

pub use commands::*;

// =============================================================================
// CLI STRUCTURE
// =============================================================================

/// POB KPI Dashboard
///
/// Classifies academic operating-procedure KPIs into Poor, Needs-Improvement,
/// Good and Excellent tiers.
#[derive(Parser, Debug)]
#[command(name = "pob-kpi")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress banner output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output in JSON format (for programmatic access)
    #[arg(long, global = true)]
    pub json_mode: bool,

    /// Path to a TOML config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start HTTP server
    Server {
        /// Host to bind to [default: 127.0.0.1]
        #[arg(short = 'H', long)]
        host: Option<String>,

        /// Port to bind to [default: 8080]
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// List POBs
    List,

    /// Show a POB's KPIs
    Show {
        /// POB slug
        pob: String,

        /// Only this dimension (e.g. Quality, Waktu)
        #[arg(short, long)]
        dimension: Option<String>,

        /// Only this tier (e.g. poor, needs-improvement)
        #[arg(short, long)]
        tier: Option<String>,

        /// Sort column (id, name, dimension, target, achievement, status)
        #[arg(short, long, default_value = "id")]
        sort: String,

        /// Sort descending
        #[arg(long)]
        desc: bool,
    },

    /// Show tier counts and percentages
    Summary {
        /// POB slug
        pob: String,
    },

    /// Show remediation narratives
    Recommend {
        /// POB slug
        pob: String,
    },

    /// Edit an achievement and show the reclassified KPI
    Update {
        /// POB slug
        pob: String,

        /// KPI id
        #[arg(short, long)]
        kpi: u32,

        /// New achievement (e.g. 85, 4.5)
        #[arg(short, long, allow_hyphen_values = true)]
        achievement: String,
    },

    /// Classify a value against ad-hoc boundaries
    Classify {
        /// Boundaries, worst tier first
        #[arg(
            short,
            long,
            num_args = 4,
            required = true,
            value_names = ["POOR", "NEEDS_IMPROVEMENT", "GOOD", "EXCELLENT"]
        )]
        boundaries: Vec<String>,

        /// Achievement value
        #[arg(short, long, allow_hyphen_values = true)]
        achievement: String,

        /// Smaller values are better
        #[arg(long)]
        lower_is_better: bool,
    },

    /// Print chart series
    Chart {
        /// POB slug
        pob: String,

        /// Chart kind (pie, radar, workload)
        #[arg(short, long, default_value = "pie")]
        kind: String,

        /// Only this dimension
        #[arg(short, long)]
        dimension: Option<String>,

        /// Only this tier
        #[arg(short, long)]
        tier: Option<String>,
    },

    /// Write a POB's KPIs to CSV
    Export {
        /// POB slug
        pob: String,

        /// Output file path
        #[arg(short, long)]
        output: PathBuf,

        /// Only this dimension
        #[arg(short, long)]
        dimension: Option<String>,

        /// Only this tier
        #[arg(short, long)]
        tier: Option<String>,
    },
}

// =============================================================================
// COMMAND EXECUTION
// =============================================================================

/// Execute the CLI with parsed arguments.
pub async fn execute(cli: Cli) -> Result<(), PobError> {
    let json_mode = cli.json_mode;

    match cli.command {
        Some(Commands::Server { host, port }) => {
            let file = match &cli.config {
                Some(path) => FileConfig::load(path)?,
                None => FileConfig::default(),
            };
            cmd_server(host, port, &file).await
        }
        Some(Commands::List) | None => cmd_list(json_mode),
        Some(Commands::Show {
            pob,
            dimension,
            tier,
            sort,
            desc,
        }) => cmd_show(
            json_mode,
            &pob,
            dimension.as_deref(),
            tier.as_deref(),
            &sort,
            desc,
        ),
        Some(Commands::Summary { pob }) => cmd_summary(json_mode, &pob),
        Some(Commands::Recommend { pob }) => cmd_recommend(json_mode, &pob),
        Some(Commands::Update {
            pob,
            kpi,
            achievement,
        }) => cmd_update(json_mode, &pob, kpi, &achievement),
        Some(Commands::Classify {
            boundaries,
            achievement,
            lower_is_better,
        }) => cmd_classify(json_mode, &boundaries, &achievement, !lower_is_better),
        Some(Commands::Chart {
            pob,
            kind,
            dimension,
            tier,
        }) => cmd_chart(
            json_mode,
            &pob,
            &kind,
            dimension.as_deref(),
            tier.as_deref(),
        ),
        Some(Commands::Export {
            pob,
            output,
            dimension,
            tier,
        }) => cmd_export(
            json_mode,
            &pob,
            &output,
            dimension.as_deref(),
            tier.as_deref(),
        ),
    }
}

// =============================================================================
// TESTS
// =============================================================================
