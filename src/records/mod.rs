//! Row types for the two workbook tables

pub mod mro;
pub mod part;

pub use mro::MroRecord;
pub use part::PartRecord;
