//! Document rendering - template reading, token substitution, DOCX output

pub mod docx;
pub mod template;

use miette::Diagnostic;
use std::path::Path;
use thiserror::Error;

pub use template::{RenderContext, TOKENS};

/// Errors raised while reading the template or writing the document
#[derive(Debug, Error, Diagnostic)]
pub enum RenderError {
    #[error("template not found: {path}")]
    #[diagnostic(
        code(collateral::render::template_missing),
        help("run `collateral template init` to create a starter template")
    )]
    TemplateMissing { path: String },

    #[error("failed to read template {path}: {message}")]
    #[diagnostic(
        code(collateral::render::template_invalid),
        help("the template must be a .docx document")
    )]
    TemplateInvalid { path: String, message: String },

    #[error("failed to pack document: {0}")]
    #[diagnostic(code(collateral::render::pack))]
    Pack(String),

    #[error("failed to write {path}")]
    #[diagnostic(code(collateral::render::io))]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Render the template with the given context and write the document.
///
/// The output bytes are fully built in memory before anything touches
/// the filesystem, so a failed render never leaves a partial file.
pub fn render_to_file(
    template: &Path,
    output: &Path,
    ctx: &RenderContext,
) -> Result<(), RenderError> {
    let paragraphs = docx::read_template(template)?;
    let rendered = template::render_paragraphs(&paragraphs, ctx);
    let bytes = docx::build_document(&rendered)?;
    docx::write_document(output, &bytes)
}
