//! `collateral models` command - list aircraft models in the workbook

use console::style;
use miette::{IntoDiagnostic, Result};
use tabled::{builder::Builder, settings::Style};

use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::Config;

#[derive(clap::Args, Debug)]
pub struct ModelsArgs {
    /// Show only count
    #[arg(long)]
    pub count: bool,
}

pub fn run(args: ModelsArgs, global: &GlobalOpts) -> Result<()> {
    let config = Config::load();
    let workbook = super::load_workbook(global, &config)?;
    let models = workbook.models();

    if args.count {
        println!("{}", models.len());
        return Ok(());
    }

    if models.is_empty() {
        println!("No aircraft models found.");
        return Ok(());
    }

    let format = match global.format {
        OutputFormat::Auto => OutputFormat::Tsv,
        f => f,
    };

    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&models).into_diagnostic()?;
            println!("{}", json);
        }
        OutputFormat::Csv => {
            println!("aircraft_model");
            for model in &models {
                println!("{}", model);
            }
        }
        OutputFormat::Md => {
            let mut builder = Builder::default();
            builder.push_record(["Aircraft Model"]);
            for model in &models {
                builder.push_record([model.as_str()]);
            }
            println!("{}", builder.build().with(Style::markdown()));
        }
        OutputFormat::Tsv => {
            println!("{}", style("AIRCRAFT MODEL").bold());
            println!("{}", "-".repeat(30));
            for model in &models {
                println!("{}", model);
            }
            println!();
            println!("{} model(s) found.", style(models.len()).cyan());
        }
        OutputFormat::Auto => unreachable!(),
    }

    Ok(())
}
