//! `collateral check` command - validate the workbook source and template

use console::style;
use miette::Result;
use std::path::PathBuf;

use crate::cli::GlobalOpts;
use crate::core::Config;
use crate::render::{docx, TOKENS};

#[derive(clap::Args, Debug)]
pub struct CheckArgs {
    /// Template document path to check
    #[arg(long, short = 't')]
    pub template: Option<PathBuf>,

    /// Skip the template check
    #[arg(long)]
    pub no_template: bool,
}

pub fn run(args: CheckArgs, global: &GlobalOpts) -> Result<()> {
    let config = Config::load();

    let workbook = super::load_workbook(global, &config)?;
    let models = workbook.models();
    println!(
        "{} Workbook OK: {} part(s), {} MRO capability(ies), {} model(s)",
        style("✓").green(),
        style(workbook.parts.len()).cyan(),
        style(workbook.mro.len()).cyan(),
        style(models.len()).cyan()
    );

    if args.no_template {
        return Ok(());
    }

    let template = args.template.unwrap_or_else(|| config.template());
    let paragraphs = docx::read_template(&template)?;
    println!(
        "{} Template OK: {} ({} paragraph(s))",
        style("✓").green(),
        style(template.display()).yellow(),
        style(paragraphs.len()).cyan()
    );

    for token in TOKENS {
        let present = paragraphs.iter().any(|p| p.contains(token));
        if present {
            println!("   {} {}", style("✓").green(), token);
        } else {
            println!("   {} {} not found in template", style("!").yellow(), token);
        }
    }

    Ok(())
}
