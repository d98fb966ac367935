//! surveykit CLI — inspect item files and report survey progress.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "surveykit", version, about = "Survey progress tracking")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate item files
    Validate {
        /// Path to an item file (.toml/.json) or directory
        #[arg(long)]
        items: PathBuf,
    },

    /// Load items, replay answers and report progress
    Report {
        /// Path to an item file (.toml/.json) or directory
        #[arg(long)]
        items: PathBuf,

        /// Answer sheet to replay (.toml)
        #[arg(long)]
        answers: Option<PathBuf>,

        /// Output format: text, json, markdown, html
        #[arg(long, default_value = "text")]
        format: String,

        /// Write the rendered report to this file instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,

        /// Title shown in the report
        #[arg(long, default_value = "Survey progress")]
        title: String,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,

        /// Exit code 1 if any topic is incomplete
        #[arg(long)]
        fail_incomplete: bool,
    },

    /// Create starter config and example item file
    Init,
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("surveykit=info".parse().expect("static directive")),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Validate { items } => commands::validate::execute(items),
        Commands::Report {
            items,
            answers,
            format,
            output,
            title,
            config,
            fail_incomplete,
        } => commands::report::execute(commands::report::ReportArgs {
            items,
            answers,
            format,
            output,
            title,
            config,
            fail_incomplete,
        }),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
