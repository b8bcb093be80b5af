//! Core module - source resolution, workbook loading, filtering, config

pub mod config;
pub mod filter;
pub mod source;
pub mod workbook;

pub use config::Config;
pub use filter::{filter_mro, filter_parts, joined_models, SelectionSet};
pub use source::DataSource;
pub use workbook::{LoadError, Workbook, MRO_SHEET, PARTS_SHEET};
