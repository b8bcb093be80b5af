//! `collateral template` command - starter template management

use clap::Subcommand;
use console::style;
use miette::Result;
use rust_embed::Embed;
use std::path::PathBuf;

use crate::cli::GlobalOpts;
use crate::core::Config;
use crate::render::{docx, TOKENS};

#[derive(Embed)]
#[folder = "templates/"]
struct EmbeddedTemplates;

const STARTER_TEMPLATE: &str = "collateral.txt";

#[derive(Subcommand, Debug)]
pub enum TemplateCommands {
    /// Write a starter template document
    Init(InitArgs),

    /// Show a template's paragraphs with tokens highlighted
    Show(ShowArgs),
}

#[derive(clap::Args, Debug)]
pub struct InitArgs {
    /// Where to write the template (default: configured template path)
    pub path: Option<PathBuf>,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

#[derive(clap::Args, Debug)]
pub struct ShowArgs {
    /// Template to show (default: configured template path)
    pub path: Option<PathBuf>,
}

pub fn run(cmd: TemplateCommands, global: &GlobalOpts) -> Result<()> {
    match cmd {
        TemplateCommands::Init(args) => run_init(args, global),
        TemplateCommands::Show(args) => run_show(args),
    }
}

fn run_init(args: InitArgs, global: &GlobalOpts) -> Result<()> {
    let config = Config::load();
    let path = args.path.unwrap_or_else(|| config.template());

    if path.exists() && !args.force {
        return Err(miette::miette!(
            help = "pass --force to overwrite",
            "{} already exists",
            path.display()
        ));
    }

    let asset = EmbeddedTemplates::get(STARTER_TEMPLATE)
        .ok_or_else(|| miette::miette!("embedded starter template missing"))?;
    let text = String::from_utf8_lossy(&asset.data);
    let paragraphs: Vec<String> = text.lines().map(str::to_string).collect();

    let bytes = docx::build_document(&paragraphs)?;
    docx::write_document(&path, &bytes)?;

    if !global.quiet {
        println!(
            "{} Created starter template {}",
            style("✓").green(),
            style(path.display()).cyan()
        );
        println!("   Edit it in your word processor, keeping the tokens:");
        for token in TOKENS {
            println!("   {}", style(token).yellow());
        }
    }

    Ok(())
}

fn run_show(args: ShowArgs) -> Result<()> {
    let config = Config::load();
    let path = args.path.unwrap_or_else(|| config.template());
    let paragraphs = docx::read_template(&path)?;

    for para in &paragraphs {
        let mut line = para.clone();
        for token in TOKENS {
            if line.contains(token) {
                line = line.replace(token, &style(token).yellow().to_string());
            }
        }
        println!("{}", line);
    }

    Ok(())
}
