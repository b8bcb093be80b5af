//! Filtering the loaded tables by selected aircraft models
//!
//! Pure functions over the row collections. A BTreeSet keeps the
//! selection ordered so downstream output is deterministic regardless of
//! the order models were picked in.

use std::collections::BTreeSet;

use crate::records::{MroRecord, PartRecord};

/// The set of aircraft models chosen by the user
pub type SelectionSet = BTreeSet<String>;

/// Rows of the Parts table whose model is in the selection
pub fn filter_parts(parts: &[PartRecord], selection: &SelectionSet) -> Vec<PartRecord> {
    parts
        .iter()
        .filter(|p| selection.contains(&p.aircraft_model))
        .cloned()
        .collect()
}

/// Rows of the MRO table whose model is in the selection
pub fn filter_mro(mro: &[MroRecord], selection: &SelectionSet) -> Vec<MroRecord> {
    mro.iter()
        .filter(|m| selection.contains(&m.aircraft_model))
        .cloned()
        .collect()
}

/// Selection joined for display, e.g. "737, 747"
pub fn joined_models(selection: &SelectionSet) -> String {
    selection
        .iter()
        .cloned()
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_parts() -> Vec<PartRecord> {
        vec![
            PartRecord::new("737", "PN1", "Bracket"),
            PartRecord::new("747", "PN2", "Wing"),
        ]
    }

    fn sample_mro() -> Vec<MroRecord> {
        vec![
            MroRecord::new("737", "Engine overhaul", "Singapore"),
            MroRecord::new("747", "Landing gear", "Dallas"),
        ]
    }

    fn selection(models: &[&str]) -> SelectionSet {
        models.iter().map(|m| m.to_string()).collect()
    }

    #[test]
    fn test_filtered_models_are_subset_of_selection() {
        let sel = selection(&["737"]);
        for part in filter_parts(&sample_parts(), &sel) {
            assert!(sel.contains(&part.aircraft_model));
        }
        for mro in filter_mro(&sample_mro(), &sel) {
            assert!(sel.contains(&mro.aircraft_model));
        }
    }

    #[test]
    fn test_filter_parts_keeps_matching_rows() {
        let filtered = filter_parts(&sample_parts(), &selection(&["737"]));
        assert_eq!(filtered, vec![PartRecord::new("737", "PN1", "Bracket")]);
    }

    #[test]
    fn test_full_selection_is_identity() {
        let sel = selection(&["737", "747"]);
        assert_eq!(filter_parts(&sample_parts(), &sel), sample_parts());
        assert_eq!(filter_mro(&sample_mro(), &sel), sample_mro());
    }

    #[test]
    fn test_empty_selection_filters_everything() {
        let sel = SelectionSet::new();
        assert!(filter_parts(&sample_parts(), &sel).is_empty());
        assert!(filter_mro(&sample_mro(), &sel).is_empty());
    }

    #[test]
    fn test_joined_models_sorted() {
        // Insertion order does not matter; the set keeps models sorted
        let mut sel = SelectionSet::new();
        sel.insert("747".to_string());
        sel.insert("737".to_string());
        assert_eq!(joined_models(&sel), "737, 747");
    }
}
