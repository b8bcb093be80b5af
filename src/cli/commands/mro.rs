//! `collateral mro` command - list MRO capabilities from the workbook

use clap::ValueEnum;
use console::style;
use miette::{IntoDiagnostic, Result};
use tabled::{builder::Builder, settings::Style};

use crate::cli::helpers::truncate_str;
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::{filter_mro, Config, SelectionSet};
use crate::records::MroRecord;

/// Columns to sort list output by
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum SortColumn {
    Model,
    Capability,
    Facility,
}

#[derive(clap::Args, Debug)]
pub struct MroArgs {
    /// Filter by aircraft model (can specify multiple)
    #[arg(long, short = 'm')]
    pub model: Vec<String>,

    /// Search in capability and facility
    #[arg(long)]
    pub search: Option<String>,

    /// Sort by field
    #[arg(long, default_value = "model")]
    pub sort: SortColumn,

    /// Reverse sort order
    #[arg(long, short = 'r')]
    pub reverse: bool,

    /// Limit number of results
    #[arg(long, short = 'n')]
    pub limit: Option<usize>,

    /// Show only count
    #[arg(long)]
    pub count: bool,
}

pub fn run(args: MroArgs, global: &GlobalOpts) -> Result<()> {
    let config = Config::load();
    let workbook = super::load_workbook(global, &config)?;

    let mut capabilities = if args.model.is_empty() {
        workbook.mro.clone()
    } else {
        let selection: SelectionSet = args.model.iter().cloned().collect();
        filter_mro(&workbook.mro, &selection)
    };

    if let Some(ref search) = args.search {
        let search_lower = search.to_lowercase();
        capabilities.retain(|m| {
            m.capability.to_lowercase().contains(&search_lower)
                || m.facility.to_lowercase().contains(&search_lower)
        });
    }

    match args.sort {
        SortColumn::Model => capabilities.sort_by(|a, b| a.aircraft_model.cmp(&b.aircraft_model)),
        SortColumn::Capability => capabilities.sort_by(|a, b| a.capability.cmp(&b.capability)),
        SortColumn::Facility => capabilities.sort_by(|a, b| a.facility.cmp(&b.facility)),
    }

    if args.reverse {
        capabilities.reverse();
    }

    if let Some(limit) = args.limit {
        capabilities.truncate(limit);
    }

    if args.count {
        println!("{}", capabilities.len());
        return Ok(());
    }

    if capabilities.is_empty() {
        println!("No MRO capabilities found.");
        return Ok(());
    }

    print_mro(&capabilities, global)
}

fn print_mro(capabilities: &[MroRecord], global: &GlobalOpts) -> Result<()> {
    let format = match global.format {
        OutputFormat::Auto => OutputFormat::Tsv,
        f => f,
    };

    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(capabilities).into_diagnostic()?;
            println!("{}", json);
        }
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(std::io::stdout());
            for capability in capabilities {
                writer.serialize(capability).into_diagnostic()?;
            }
            writer.flush().into_diagnostic()?;
        }
        OutputFormat::Md => {
            let mut builder = Builder::default();
            builder.push_record(["Aircraft Model", "Capability", "Facility"]);
            for capability in capabilities {
                builder.push_record([
                    capability.aircraft_model.as_str(),
                    capability.capability.as_str(),
                    capability.facility.as_str(),
                ]);
            }
            println!("{}", builder.build().with(Style::markdown()));
        }
        OutputFormat::Tsv => {
            println!(
                "{:<14} {:<30} {}",
                style("MODEL").bold(),
                style("CAPABILITY").bold(),
                style("FACILITY").bold()
            );
            println!("{}", "-".repeat(72));
            for capability in capabilities {
                println!(
                    "{:<14} {:<30} {}",
                    truncate_str(&capability.aircraft_model, 12),
                    truncate_str(&capability.capability, 28),
                    truncate_str(&capability.facility, 26)
                );
            }
            println!();
            println!(
                "{} capability(ies) found.",
                style(capabilities.len()).cyan()
            );
        }
        OutputFormat::Auto => unreachable!(),
    }

    Ok(())
}
