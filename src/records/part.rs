//! Parts table rows

use serde::{Deserialize, Serialize};

/// One row of the workbook's "Parts" sheet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartRecord {
    /// Aircraft model this part applies to (the filter key)
    pub aircraft_model: String,

    /// Manufacturer part number
    pub part_number: String,

    /// Free-text part description
    pub description: String,
}

impl PartRecord {
    pub fn new(
        aircraft_model: impl Into<String>,
        part_number: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            aircraft_model: aircraft_model.into(),
            part_number: part_number.into(),
            description: description.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_part_record_json_roundtrip() {
        let part = PartRecord::new("737", "PN1", "Bracket");
        let json = serde_json::to_string(&part).unwrap();
        let parsed: PartRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(part, parsed);
    }
}
