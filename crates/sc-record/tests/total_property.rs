use proptest::prelude::*;
use sc_core::Score;
use sc_record::InspectionRecord;
use std::collections::BTreeMap;

proptest! {
    // For any sequence of score writes, the total equals the sum of the
    // final value at each distinct parameter id (last write wins per id).
    #[test]
    fn total_matches_last_write_per_id(
        ops in prop::collection::vec((0usize..22, 0u8..=10), 0..200)
    ) {
        let catalog = sc_catalog::parameters();
        let mut record = InspectionRecord::new();
        let mut expected: BTreeMap<&str, u32> = BTreeMap::new();

        for (index, value) in ops {
            let id = catalog[index].id;
            record.set_score(id, Score::new(value).unwrap());
            expected.insert(id, u32::from(value));
        }

        prop_assert_eq!(record.total_score(), expected.values().sum::<u32>());
        prop_assert_eq!(record.scored_count(), expected.len());
    }

    // Serializing and re-parsing a draft never changes what the user typed.
    #[test]
    fn draft_round_trip_is_lossless(
        station in "[a-zA-Z ]{0,24}",
        scores in prop::collection::vec((0usize..22, 0u8..=10), 0..40)
    ) {
        let catalog = sc_catalog::parameters();
        let mut record = InspectionRecord::new();
        record.set_metadata(sc_record::MetadataField::StationName, station);
        for (index, value) in scores {
            record.set_score(catalog[index].id, Score::new(value).unwrap());
        }

        let restored =
            InspectionRecord::from_draft_json(&record.to_draft_json().unwrap()).unwrap();
        prop_assert_eq!(restored, record);
    }
}
