//! Inspection record schema and mutation operations.

use sc_core::{ParameterId, Score};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The three required free-text metadata fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetadataField {
    StationName,
    InspectionDate,
    InspectorName,
}

impl MetadataField {
    pub fn label(self) -> &'static str {
        match self {
            MetadataField::StationName => "station name",
            MetadataField::InspectionDate => "inspection date",
            MetadataField::InspectorName => "inspector name",
        }
    }
}

impl std::fmt::Display for MetadataField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One inspection session's worth of user input.
///
/// `scores` keys on catalog parameter ids; an absent key means "not yet
/// scored" (`scores().get(id)` yields the `Option` that makes a stored zero
/// unambiguous). `total_score` is serialized with the rest of the snapshot
/// but is recomputed from `scores` on every mutation and on restore, never
/// trusted incrementally.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct InspectionRecord {
    #[serde(default)]
    station_name: String,
    #[serde(default)]
    inspection_date: String,
    #[serde(default)]
    inspector_name: String,
    #[serde(default)]
    scores: BTreeMap<ParameterId, Score>,
    #[serde(default)]
    remarks: BTreeMap<ParameterId, String>,
    #[serde(default)]
    total_score: u32,
}

impl InspectionRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn station_name(&self) -> &str {
        &self.station_name
    }

    pub fn inspection_date(&self) -> &str {
        &self.inspection_date
    }

    pub fn inspector_name(&self) -> &str {
        &self.inspector_name
    }

    pub fn metadata(&self, field: MetadataField) -> &str {
        match field {
            MetadataField::StationName => &self.station_name,
            MetadataField::InspectionDate => &self.inspection_date,
            MetadataField::InspectorName => &self.inspector_name,
        }
    }

    pub fn scores(&self) -> &BTreeMap<ParameterId, Score> {
        &self.scores
    }

    pub fn remarks(&self) -> &BTreeMap<ParameterId, String> {
        &self.remarks
    }

    pub fn score(&self, id: &str) -> Option<Score> {
        self.scores.get(id).copied()
    }

    pub fn remark(&self, id: &str) -> Option<&str> {
        self.remarks.get(id).map(String::as_str)
    }

    pub fn total_score(&self) -> u32 {
        self.total_score
    }

    /// Number of parameters with a recorded score.
    pub fn scored_count(&self) -> usize {
        self.scores.len()
    }

    /// True when the record is back at its session-start default.
    pub fn is_empty(&self) -> bool {
        self.station_name.is_empty()
            && self.inspection_date.is_empty()
            && self.inspector_name.is_empty()
            && self.scores.is_empty()
            && self.remarks.is_empty()
    }

    /// Set one of the metadata strings. No validation here; the submit gate
    /// checks for emptiness.
    pub fn set_metadata(&mut self, field: MetadataField, value: impl Into<String>) {
        let slot = match field {
            MetadataField::StationName => &mut self.station_name,
            MetadataField::InspectionDate => &mut self.inspection_date,
            MetadataField::InspectorName => &mut self.inspector_name,
        };
        *slot = value.into();
    }

    /// Insert or overwrite one parameter's score and recompute the total.
    pub fn set_score(&mut self, id: impl Into<ParameterId>, score: Score) {
        self.scores.insert(id.into(), score);
        self.recompute_total();
    }

    /// Insert or overwrite one parameter's remark. The empty string is a
    /// valid remark and stays stored.
    pub fn set_remark(&mut self, id: impl Into<ParameterId>, text: impl Into<String>) {
        self.remarks.insert(id.into(), text.into());
    }

    /// Clear everything back to the empty default.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Percentage of `catalog_len` parameters scored, rounded to the nearest
    /// integer. An empty catalog reads as 0% complete.
    pub fn completion_percentage(&self, catalog_len: usize) -> u32 {
        if catalog_len == 0 {
            return 0;
        }
        ((self.scores.len() as f64 / catalog_len as f64) * 100.0).round() as u32
    }

    /// Total score as a percentage of `max_possible`, rounded; 0 when
    /// `max_possible` is 0.
    pub fn score_percentage(&self, max_possible: u32) -> u32 {
        if max_possible == 0 {
            return 0;
        }
        ((f64::from(self.total_score) / f64::from(max_possible)) * 100.0).round() as u32
    }

    /// Serialize the record as the draft snapshot payload.
    pub fn to_draft_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Parse a draft snapshot. The stored total is discarded and recomputed
    /// so a hand-edited snapshot cannot smuggle in a drifted sum.
    pub fn from_draft_json(text: &str) -> Result<Self, serde_json::Error> {
        let mut record: Self = serde_json::from_str(text)?;
        record.recompute_total();
        Ok(record)
    }

    fn recompute_total(&mut self) {
        self.total_score = self.scores.values().copied().map(u32::from).sum();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(v: u8) -> Score {
        Score::new(v).unwrap()
    }

    #[test]
    fn set_score_recomputes_total() {
        let mut record = InspectionRecord::new();
        record.set_score("dustbins", score(7));
        record.set_score("urinals", score(3));
        assert_eq!(record.total_score(), 10);

        // Overwrite, not accumulate.
        record.set_score("dustbins", score(2));
        assert_eq!(record.total_score(), 5);
    }

    #[test]
    fn set_score_is_idempotent() {
        let mut record = InspectionRecord::new();
        record.set_score("spittoons", score(6));
        let once = record.clone();
        record.set_score("spittoons", score(6));
        assert_eq!(record, once);
    }

    #[test]
    fn zero_score_is_present_not_missing() {
        let mut record = InspectionRecord::new();
        record.set_score("wash-basins", score(0));
        assert_eq!(record.score("wash-basins"), Some(score(0)));
        assert_eq!(record.scored_count(), 1);
        assert_eq!(record.total_score(), 0);
    }

    #[test]
    fn empty_remark_is_stored() {
        let mut record = InspectionRecord::new();
        record.set_remark("dormitory", "");
        assert_eq!(record.remark("dormitory"), Some(""));
    }

    #[test]
    fn completion_percentage_rounds() {
        let mut record = InspectionRecord::new();
        for id in ["a", "b", "c", "d", "e"] {
            record.set_score(id, score(5));
        }
        // 5 of 22 = 22.7...%
        assert_eq!(record.completion_percentage(22), 23);
        assert_eq!(record.completion_percentage(5), 100);
    }

    #[test]
    fn percentages_survive_empty_denominators() {
        let record = InspectionRecord::new();
        assert_eq!(record.completion_percentage(0), 0);
        assert_eq!(record.score_percentage(0), 0);
    }

    #[test]
    fn reset_restores_empty_default() {
        let mut record = InspectionRecord::new();
        record.set_metadata(MetadataField::StationName, "Central");
        record.set_score("urinals", score(9));
        record.reset();
        assert!(record.is_empty());
        assert_eq!(record, InspectionRecord::default());
    }

    #[test]
    fn draft_json_round_trips() {
        let mut record = InspectionRecord::new();
        record.set_metadata(MetadataField::StationName, "Central");
        record.set_metadata(MetadataField::InspectionDate, "2025-11-04");
        record.set_metadata(MetadataField::InspectorName, "A. Kumar");
        record.set_score("dustbins", score(0));
        record.set_score("waiting-hall", score(8));
        record.set_remark("waiting-hall", "seating dusty");

        let text = record.to_draft_json().unwrap();
        let restored = InspectionRecord::from_draft_json(&text).unwrap();
        assert_eq!(restored, record);
    }

    #[test]
    fn draft_json_uses_wire_field_names() {
        let mut record = InspectionRecord::new();
        record.set_metadata(MetadataField::StationName, "Central");
        let value: serde_json::Value =
            serde_json::from_str(&record.to_draft_json().unwrap()).unwrap();
        assert!(value.get("stationName").is_some());
        assert!(value.get("totalScore").is_some());
    }

    #[test]
    fn restore_recomputes_a_tampered_total() {
        let text = r#"{"stationName":"X","inspectionDate":"d","inspectorName":"n",
                       "scores":{"dustbins":4,"urinals":5},"remarks":{},"totalScore":999}"#;
        let record = InspectionRecord::from_draft_json(text).unwrap();
        assert_eq!(record.total_score(), 9);
    }

    #[test]
    fn restore_rejects_out_of_range_scores() {
        let text = r#"{"scores":{"dustbins":12}}"#;
        assert!(InspectionRecord::from_draft_json(text).is_err());
    }
}
