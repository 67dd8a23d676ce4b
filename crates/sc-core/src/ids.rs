//! Key types shared across the catalog and record.

/// Catalog key for one inspection parameter (e.g. `"platform-cleanliness"`).
///
/// Catalog entries hold these as `&'static str`; the record's maps own them
/// as `String`. The alias keeps map signatures readable.
pub type ParameterId = String;
