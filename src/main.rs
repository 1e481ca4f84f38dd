use anyhow::Result;
use clap::{Parser, Subcommand};

mod classifier;
mod cli;
mod error;
mod generator;
mod registry;
mod report;
mod scanner;
mod templates;
mod toolchain;

#[derive(Parser)]
#[command(name = "pipewright", version)]
#[command(about = "Detect a project's stack and generate a starter CI/CD pipeline", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a project: detected stack, evidence and a short report
    Analyze {
        /// Project path (defaults to current directory)
        #[arg(default_value = ".")]
        path: String,
    },

    /// Generate a pipeline file for the detected stack.
    /// Overwrites an existing pipeline file at the target path.
    Generate {
        /// Project path (defaults to current directory)
        #[arg(default_value = ".")]
        path: String,

        /// CI platform: github-actions, gitlab-ci, jenkins, azure-devops, circleci
        #[arg(long, default_value = "github-actions")]
        platform: String,

        /// Include a deploy job in the generated pipeline
        #[arg(long)]
        deploy: bool,

        /// Directory to write into (defaults to the project path)
        #[arg(short = 'o', long)]
        output: Option<String>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze { path } => cli::analyze::run(&path)?,
        Commands::Generate {
            path,
            platform,
            deploy,
            output,
        } => cli::generate::run(&path, &platform, deploy, output)?,
    }

    Ok(())
}
