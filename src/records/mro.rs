//! MRO (maintenance, repair, overhaul) table rows

use serde::{Deserialize, Serialize};

/// One row of the workbook's "MRO" sheet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MroRecord {
    /// Aircraft model this capability applies to (the filter key)
    pub aircraft_model: String,

    /// Maintenance capability (e.g. "Engine overhaul")
    pub capability: String,

    /// Facility offering the capability
    pub facility: String,
}

impl MroRecord {
    pub fn new(
        aircraft_model: impl Into<String>,
        capability: impl Into<String>,
        facility: impl Into<String>,
    ) -> Self {
        Self {
            aircraft_model: aircraft_model.into(),
            capability: capability.into(),
            facility: facility.into(),
        }
    }
}
