//! Submit-gate validation.

use crate::schema::{InspectionRecord, MetadataField};
use sc_catalog::Parameter;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("missing basic info: {field} is required")]
    MissingBasicInfo { field: MetadataField },

    #[error("incomplete parameters: {missing} still unscored")]
    IncompleteParameters { missing: usize },
}

/// Gate a record for submission against the checklist it must cover.
///
/// Metadata emptiness is reported first (field order: station, date,
/// inspector), then unscored parameters with their exact count.
pub fn validate_for_submit(
    record: &InspectionRecord,
    catalog: &[Parameter],
) -> Result<(), ValidationError> {
    for field in [
        MetadataField::StationName,
        MetadataField::InspectionDate,
        MetadataField::InspectorName,
    ] {
        if record.metadata(field).is_empty() {
            return Err(ValidationError::MissingBasicInfo { field });
        }
    }

    let missing = catalog
        .iter()
        .filter(|p| record.score(p.id).is_none())
        .count();
    if missing > 0 {
        return Err(ValidationError::IncompleteParameters { missing });
    }

    Ok(())
}
