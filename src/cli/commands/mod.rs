//! Command implementations

pub mod check;
pub mod completions;
pub mod generate;
pub mod models;
pub mod mro;
pub mod parts;
pub mod template;

use console::style;
use miette::Result;

use crate::cli::helpers::resolve_source;
use crate::cli::GlobalOpts;
use crate::core::{Config, Workbook};

/// Resolve the source and load the workbook, shared by every command
/// that reads spreadsheet data.
pub(crate) fn load_workbook(global: &GlobalOpts, config: &Config) -> Result<Workbook> {
    let source = resolve_source(global, config)?;
    if global.verbose && !global.quiet {
        eprintln!("{} Loading workbook from {}", style("→").cyan(), source);
    }
    let workbook = Workbook::load(&source)?;
    if global.verbose && !global.quiet {
        eprintln!(
            "{} Loaded {} part(s) and {} MRO capability(ies)",
            style("→").cyan(),
            workbook.parts.len(),
            workbook.mro.len()
        );
    }
    Ok(workbook)
}
