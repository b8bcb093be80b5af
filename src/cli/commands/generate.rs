//! `collateral generate` command - render a collateral document

use console::style;
use dialoguer::{theme::ColorfulTheme, MultiSelect};
use miette::{IntoDiagnostic, Result};
use std::path::PathBuf;

use crate::cli::GlobalOpts;
use crate::core::{filter_mro, filter_parts, Config, SelectionSet};
use crate::render::{render_to_file, RenderContext};

#[derive(clap::Args, Debug)]
pub struct GenerateArgs {
    /// Aircraft models to include (can specify multiple); prompts
    /// interactively when omitted
    #[arg(long, short = 'm')]
    pub model: Vec<String>,

    /// Include every aircraft model without prompting
    #[arg(long, conflicts_with = "model")]
    pub all: bool,

    /// Template document path
    #[arg(long, short = 't')]
    pub template: Option<PathBuf>,

    /// Output document path
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,
}

pub fn run(args: GenerateArgs, global: &GlobalOpts) -> Result<()> {
    let config = Config::load();
    let workbook = super::load_workbook(global, &config)?;
    let available = workbook.models();

    if available.is_empty() {
        return Err(miette::miette!(
            help = "check that the Parts and MRO sheets have an Aircraft Model column with data",
            "workbook contains no aircraft models"
        ));
    }

    let selection = select_models(&args, &available)?;

    let parts = filter_parts(&workbook.parts, &selection);
    let mro = filter_mro(&workbook.mro, &selection);
    let ctx = RenderContext::new(&selection, &parts, &mro);

    let template = args.template.unwrap_or_else(|| config.template());
    let output = args.output.unwrap_or_else(|| config.output());

    render_to_file(&template, &output, &ctx)?;

    if !global.quiet {
        println!(
            "{} Generated collateral for {}",
            style("✓").green(),
            style(&ctx.aircraft_models).yellow()
        );
        println!(
            "   {} part(s), {} MRO capability(ies)",
            style(parts.len()).cyan(),
            style(mro.len()).cyan()
        );
        println!("   {}", style(output.display()).dim());
    }

    Ok(())
}

/// Resolve the model selection from flags, or prompt interactively.
fn select_models(args: &GenerateArgs, available: &[String]) -> Result<SelectionSet> {
    if args.all {
        return Ok(available.iter().cloned().collect());
    }

    if !args.model.is_empty() {
        let unknown: Vec<&String> = args
            .model
            .iter()
            .filter(|m| !available.contains(m))
            .collect();
        if !unknown.is_empty() {
            let unknown: Vec<_> = unknown.iter().map(|m| m.as_str()).collect();
            return Err(miette::miette!(
                help = format!("available models: {}", available.join(", ")),
                "unknown aircraft model(s): {}",
                unknown.join(", ")
            ));
        }
        return Ok(args.model.iter().cloned().collect());
    }

    let theme = ColorfulTheme::default();
    let chosen = MultiSelect::with_theme(&theme)
        .with_prompt("Select aircraft models (space to toggle, enter to confirm)")
        .items(available)
        .interact()
        .into_diagnostic()?;

    if chosen.is_empty() {
        return Err(miette::miette!(
            help = "toggle at least one model with the space bar, or pass --model / --all",
            "no aircraft models selected"
        ));
    }

    Ok(chosen.into_iter().map(|i| available[i].clone()).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(models: &[&str], all: bool) -> GenerateArgs {
        GenerateArgs {
            model: models.iter().map(|m| m.to_string()).collect(),
            all,
            template: None,
            output: None,
        }
    }

    fn available() -> Vec<String> {
        vec!["737".to_string(), "747".to_string(), "A320".to_string()]
    }

    #[test]
    fn test_all_flag_selects_everything() {
        let selection = select_models(&args(&[], true), &available()).unwrap();
        assert_eq!(selection.len(), 3);
    }

    #[test]
    fn test_explicit_models_are_validated() {
        let selection = select_models(&args(&["747", "737"], false), &available()).unwrap();
        let models: Vec<_> = selection.iter().cloned().collect();
        // BTreeSet keeps the selection sorted regardless of flag order
        assert_eq!(models, vec!["737", "747"]);
    }

    #[test]
    fn test_unknown_model_is_rejected() {
        let err = select_models(&args(&["MD-11"], false), &available()).unwrap_err();
        assert!(err.to_string().contains("MD-11"));
    }

    #[test]
    fn test_duplicate_flags_collapse() {
        let selection = select_models(&args(&["737", "737"], false), &available()).unwrap();
        assert_eq!(selection.len(), 1);
    }
}
