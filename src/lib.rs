//! Aero Collateral: aircraft sales collateral generator
//!
//! Loads an aircraft parts workbook (local path or URL), filters its
//! Parts and MRO tables by selected aircraft models, and renders a Word
//! document by substituting placeholder tokens in a template.

pub mod cli;
pub mod core;
pub mod records;
pub mod render;
