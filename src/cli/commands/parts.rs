//! `collateral parts` command - list parts from the workbook

use clap::ValueEnum;
use console::style;
use miette::{IntoDiagnostic, Result};
use tabled::{builder::Builder, settings::Style};

use crate::cli::helpers::truncate_str;
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::{filter_parts, Config, SelectionSet};
use crate::records::PartRecord;

/// Columns to sort list output by
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum SortColumn {
    Model,
    PartNumber,
    Description,
}

#[derive(clap::Args, Debug)]
pub struct PartsArgs {
    /// Filter by aircraft model (can specify multiple)
    #[arg(long, short = 'm')]
    pub model: Vec<String>,

    /// Search in part number and description
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

pub fn run(args: PartsArgs, global: &GlobalOpts) -> Result<()> {
    let config = Config::load();
    let workbook = super::load_workbook(global, &config)?;

    let mut parts = if args.model.is_empty() {
        workbook.parts.clone()
    } else {
        let selection: SelectionSet = args.model.iter().cloned().collect();
        filter_parts(&workbook.parts, &selection)
    };

    if let Some(ref search) = args.search {
        let search_lower = search.to_lowercase();
        parts.retain(|p| {
            p.part_number.to_lowercase().contains(&search_lower)
                || p.description.to_lowercase().contains(&search_lower)
        });
    }

    match args.sort {
        SortColumn::Model => parts.sort_by(|a, b| a.aircraft_model.cmp(&b.aircraft_model)),
        SortColumn::PartNumber => parts.sort_by(|a, b| a.part_number.cmp(&b.part_number)),
        SortColumn::Description => parts.sort_by(|a, b| a.description.cmp(&b.description)),
    }

    if args.reverse {
        parts.reverse();
    }

    if let Some(limit) = args.limit {
        parts.truncate(limit);
    }

    if args.count {
        println!("{}", parts.len());
        return Ok(());
    }

    if parts.is_empty() {
        println!("No parts found.");
        return Ok(());
    }

    print_parts(&parts, global)
}

fn print_parts(parts: &[PartRecord], global: &GlobalOpts) -> Result<()> {
    let format = match global.format {
        OutputFormat::Auto => OutputFormat::Tsv,
        f => f,
    };

    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(parts).into_diagnostic()?;
            println!("{}", json);
        }
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(std::io::stdout());
            for part in parts {
                writer.serialize(part).into_diagnostic()?;
            }
            writer.flush().into_diagnostic()?;
        }
        OutputFormat::Md => {
            let mut builder = Builder::default();
            builder.push_record(["Aircraft Model", "Part Number", "Description"]);
            for part in parts {
                builder.push_record([
                    part.aircraft_model.as_str(),
                    part.part_number.as_str(),
                    part.description.as_str(),
                ]);
            }
            println!("{}", builder.build().with(Style::markdown()));
        }
        OutputFormat::Tsv => {
            println!(
                "{:<14} {:<18} {}",
                style("MODEL").bold(),
                style("PART NUMBER").bold(),
                style("DESCRIPTION").bold()
            );
            println!("{}", "-".repeat(72));
            for part in parts {
                println!(
                    "{:<14} {:<18} {}",
                    truncate_str(&part.aircraft_model, 12),
                    truncate_str(&part.part_number, 16),
                    truncate_str(&part.description, 40)
                );
            }
            println!();
            println!("{} part(s) found.", style(parts.len()).cyan());
        }
        OutputFormat::Auto => unreachable!(),
    }

    Ok(())
}
