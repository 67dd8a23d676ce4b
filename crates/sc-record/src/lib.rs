//! sc-record: the mutable inspection record and its submit gate.
//!
//! One [`InspectionRecord`] exists per form session. All mutation goes
//! through the named operations on the record so the derived total can
//! never drift from the score map.

pub mod payload;
pub mod schema;
pub mod validate;

pub use payload::SubmissionPayload;
pub use schema::{InspectionRecord, MetadataField};
pub use validate::{ValidationError, validate_for_submit};
