//! DOCX reading and writing for collateral documents

use docx_rs::{
    read_docx, DocumentChild, Docx, Paragraph, ParagraphChild, Run, RunChild,
};
use std::fs;
use std::io::Cursor;
use std::path::Path;

use super::RenderError;

/// Read a .docx template and return the text of each paragraph, in order.
///
/// Runs within a paragraph are concatenated; formatting is not carried
/// over since the rendered document is rebuilt from plain text.
pub fn read_template(path: &Path) -> Result<Vec<String>, RenderError> {
    let bytes = fs::read(path).map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            RenderError::TemplateMissing {
                path: path.display().to_string(),
            }
        } else {
            RenderError::Io {
                path: path.display().to_string(),
                source,
            }
        }
    })?;

    let docx = read_docx(&bytes).map_err(|e| RenderError::TemplateInvalid {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    let mut paragraphs = Vec::new();
    for child in &docx.document.children {
        if let DocumentChild::Paragraph(para) = child {
            paragraphs.push(paragraph_text(para));
        }
    }
    Ok(paragraphs)
}

fn paragraph_text(para: &Paragraph) -> String {
    let mut text = String::new();
    for child in &para.children {
        if let ParagraphChild::Run(run) = child {
            for rc in &run.children {
                if let RunChild::Text(t) = rc {
                    text.push_str(&t.text);
                }
            }
        }
    }
    text
}

/// Build the finished document from rendered paragraph text.
pub fn build_document(paragraphs: &[String]) -> Result<Vec<u8>, RenderError> {
    let mut docx = Docx::new();
    for text in paragraphs {
        let para = if text.is_empty() {
            Paragraph::new()
        } else {
            // size is in half-points, so 22 = 11pt
            Paragraph::new().add_run(Run::new().add_text(text.as_str()).size(22))
        };
        docx = docx.add_paragraph(para);
    }

    let mut buf = Cursor::new(Vec::new());
    docx.build()
        .pack(&mut buf)
        .map_err(|e| RenderError::Pack(e.to_string()))?;
    Ok(buf.into_inner())
}

/// Write the packed document bytes in a single filesystem operation.
pub fn write_document(path: &Path, bytes: &[u8]) -> Result<(), RenderError> {
    fs::write(path, bytes).map_err(|source| RenderError::Io {
        path: path.display().to_string(),
        source,
    })
}
