//! CLI argument definitions using clap derive

use clap::{Parser, Subcommand, ValueEnum};

use crate::cli::commands::{
    check::CheckArgs,
    completions::CompletionsArgs,
    generate::GenerateArgs,
    models::ModelsArgs,
    mro::MroArgs,
    parts::PartsArgs,
    template::TemplateCommands,
};

#[derive(Parser)]
#[command(name = "collateral")]
#[command(author, version, about = "Aircraft sales collateral generator")]
#[command(
    long_about = "Generates sales collateral documents from an aircraft parts and MRO capability workbook, filtered to a chosen set of aircraft models."
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalOpts,
}

#[derive(clap::Args, Clone, Debug)]
pub struct GlobalOpts {
    /// Workbook source: an http(s) URL or a local .xlsx path
    #[arg(long, short = 's', global = true, env = "COLLATERAL_SOURCE")]
    pub source: Option<String>,

    /// Output format
    #[arg(long, short = 'f', global = true, default_value = "auto")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List aircraft models found in the workbook
    Models(ModelsArgs),

    /// List parts, optionally filtered by aircraft model
    Parts(PartsArgs),

    /// List MRO capabilities, optionally filtered by aircraft model
    Mro(MroArgs),

    /// Generate a collateral document for selected aircraft models
    Generate(GenerateArgs),

    /// Check that the workbook source and template are usable
    Check(CheckArgs),

    /// Template management
    #[command(subcommand)]
    Template(TemplateCommands),

    /// Generate shell completion scripts
    Completions(CompletionsArgs),
}

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Automatically detect based on context (tsv for lists)
    #[default]
    Auto,
    /// Tab-separated values (for piping)
    Tsv,
    /// JSON format (for programming)
    Json,
    /// CSV format (for spreadsheets)
    Csv,
    /// Markdown tables
    Md,
}
