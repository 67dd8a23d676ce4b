//! Submission body sent to the remote endpoint.

use crate::schema::InspectionRecord;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

/// The record plus the two submission-only fields the endpoint receives:
/// `submissionTime` (ISO-8601) and `maxPossibleScore`.
///
/// Building a payload clones the record; the in-memory original stays
/// untouched until the owner hears back about the request.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionPayload {
    #[serde(flatten)]
    record: InspectionRecord,
    submission_time: String,
    max_possible_score: u32,
}

impl SubmissionPayload {
    pub fn new(
        record: InspectionRecord,
        submitted_at: DateTime<Utc>,
        max_possible_score: u32,
    ) -> Self {
        Self {
            record,
            submission_time: submitted_at.to_rfc3339_opts(SecondsFormat::Millis, true),
            max_possible_score,
        }
    }

    pub fn record(&self) -> &InspectionRecord {
        &self.record
    }

    pub fn submission_time(&self) -> &str {
        &self.submission_time
    }

    pub fn max_possible_score(&self) -> u32 {
        self.max_possible_score
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::MetadataField;
    use chrono::TimeZone;
    use sc_core::Score;

    #[test]
    fn payload_carries_record_and_submission_fields() {
        let mut record = InspectionRecord::new();
        record.set_metadata(MetadataField::StationName, "Central");
        record.set_score("dustbins", Score::new(6).unwrap());

        let at = Utc.with_ymd_and_hms(2025, 11, 4, 9, 30, 0).unwrap();
        let payload = SubmissionPayload::new(record, at, sc_catalog::max_possible_score());

        let value: serde_json::Value =
            serde_json::from_str(&payload.to_json().unwrap()).unwrap();
        assert_eq!(value["stationName"], "Central");
        assert_eq!(value["scores"]["dustbins"], 6);
        assert_eq!(value["totalScore"], 6);
        assert_eq!(value["maxPossibleScore"], 220);
        assert_eq!(value["submissionTime"], "2025-11-04T09:30:00.000Z");
    }
}
