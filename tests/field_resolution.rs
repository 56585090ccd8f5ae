//! Tests for the field-resolution engine: spec shapes, flattening order,
//! range boundaries, and the tag contracts.

mod common;

use common::first_record;
use marcx::{Document, FieldSpec, Record, Selection, Tag};
use proptest::prelude::*;
use std::io::Write;

fn record_from(xml: &str) -> Record {
    let records = Document::parse(xml).unwrap().records();
    records.into_iter().next().unwrap()
}

// ---------------------------------------------------------------------------
// Mixed-spec resolution
// ---------------------------------------------------------------------------

const MIXED: &str = r#"<record>
  <leader>00000cam a2200000Mi 4500</leader>
  <controlfield tag="001">1027474578</controlfield>
  <datafield tag="245" ind1="1" ind2="0">
    <subfield code="a">Kindred /</subfield>
  </datafield>
  <datafield tag="650" ind1=" " ind2="0">
    <subfield code="a">Time travel</subfield>
    <subfield code="a">Slavery</subfield>
    <subfield code="v">Fiction.</subfield>
  </datafield>
</record>"#;

#[test]
fn mixed_specs_yield_heterogeneous_sequences() {
    let record = record_from(MIXED);
    let result = record.field(vec![
        FieldSpec::from("001"),
        FieldSpec::from("245"),
        FieldSpec::from(("650", 'a')),
    ]);

    assert_eq!(result.len(), 4);
    assert!(result[0].as_field().unwrap().is_control());
    assert!(result[1].as_field().unwrap().is_data());
    assert_eq!(result[2].as_subfield().unwrap().value, "Time travel");
    assert_eq!(result[3].as_subfield().unwrap().value, "Slavery");
}

#[test]
fn flattening_is_exactly_one_level_in_element_order() {
    let record = record_from(MIXED);
    let values: Vec<String> = record
        .field(vec![
            FieldSpec::from(("650", 'a')),
            FieldSpec::from(("245", 'a')),
        ])
        .iter()
        .map(Selection::value)
        .collect();
    // element order first, then field/subfield order
    assert_eq!(values, ["Time travel", "Slavery", "Kindred /"]);
}

#[test]
fn default_code_reaches_bare_tags_but_not_pairs() {
    let record = record_from(MIXED);

    let defaults = record.field_with_default(["245", "650"], 'a');
    let values: Vec<String> = defaults.iter().map(Selection::value).collect();
    assert_eq!(values, ["Kindred /", "Time travel", "Slavery"]);

    let overridden = record.field_with_default(
        vec![FieldSpec::from("245"), FieldSpec::from(("650", 'v'))],
        'a',
    );
    let values: Vec<String> = overridden.iter().map(Selection::value).collect();
    assert_eq!(values, ["Kindred /", "Fiction."]);
}

#[test]
fn control_fields_resolve_to_no_subfields() {
    let record = record_from(MIXED);
    assert!(record.field(("001", 'a')).is_empty());
    assert!(record.field_with_default("001", 'a').is_empty());
}

#[test]
fn numeric_tag_specs_are_zero_padded() {
    let record = record_from(
        r#"<record><leader>L</leader><controlfield tag="008">code-data</controlfield></record>"#,
    );
    assert_eq!(record.field(8).len(), 1);
    // 10 queries "010", never "008"
    assert!(record.field(10).is_empty());
}

// ---------------------------------------------------------------------------
// Range boundaries
// ---------------------------------------------------------------------------

/// One field per interesting boundary tag.
fn boundary_record() -> Record {
    let tags = [
        "001", "009", "010", "099", "100", "199", "200", "249", "250", "289",
        "300", "399", "400", "499", "500", "599", "600", "699", "700", "759",
        "760", "789", "800", "839", "841", "889", "899",
    ];
    let fields: String = tags
        .iter()
        .map(|tag| format!(r#"<datafield tag="{tag}" ind1=" " ind2=" "/>"#))
        .collect();
    record_from(&format!("<record><leader>L</leader>{fields}</record>"))
}

#[test]
fn range_boundaries_are_inclusive() {
    let record = boundary_record();
    let tags_of = |fields: Vec<&marcx::Field>| -> Vec<String> {
        fields.iter().map(|f| f.tag().to_string()).collect()
    };

    assert_eq!(tags_of(record.control_fields()), ["001", "009"]);
    assert_eq!(tags_of(record.codes()), ["010", "099"]);
    assert_eq!(tags_of(record.titles()), ["200", "249"]);
    assert_eq!(tags_of(record.edition()), ["250", "289"]);
    assert_eq!(tags_of(record.description()), ["300", "399"]);
    assert_eq!(tags_of(record.series()), ["400", "499"]);
    assert_eq!(tags_of(record.notes()), ["500", "599"]);
    assert_eq!(tags_of(record.subjects()), ["600", "699"]);
    assert_eq!(tags_of(record.added_entries()), ["700", "759"]);
    assert_eq!(tags_of(record.linking()), ["760", "789"]);
    assert_eq!(tags_of(record.series_added()), ["800", "839"]);
    assert_eq!(tags_of(record.holdings()), ["841", "889"]);
}

#[test]
fn ranges_are_mutually_exclusive() {
    let record = boundary_record();
    let segments = [
        record.control_fields(),
        record.codes(),
        record.titles(),
        record.edition(),
        record.description(),
        record.series(),
        record.notes(),
        record.subjects(),
        record.added_entries(),
        record.linking(),
        record.series_added(),
        record.holdings(),
    ];

    let mut seen = std::collections::HashSet::new();
    for segment in &segments {
        for field in segment {
            // every field lands in at most one range
            assert!(seen.insert(field.tag().to_string()));
        }
    }

    // the 1XX block and tags past 88X belong to no range
    let covered: usize = segments.iter().map(Vec::len).sum();
    assert_eq!(covered, record.fields().len() - 3); // 100, 199, 899
    assert!(!seen.contains("100"));
    assert!(!seen.contains("899"));
}

#[test]
fn tag_100_is_a_main_entry_candidate_not_a_code() {
    let record = boundary_record();
    assert!(record.codes().iter().all(|f| f.tag().as_str() != "100"));
    assert_eq!(record.main_entry().unwrap().tag().as_str(), "100");
}

#[test]
fn main_entry_first_match_wins() {
    let record = record_from(
        r#"<record><leader>L</leader>
          <datafield tag="110" ind1=" " ind2=" "><subfield code="a">First corp</subfield></datafield>
          <datafield tag="100" ind1="1" ind2=" "><subfield code="a">A person</subfield></datafield>
        </record>"#,
    );
    // document order decides, not numeric order
    assert_eq!(record.main_entry().unwrap().tag().as_str(), "110");
}

// ---------------------------------------------------------------------------
// Stability and serialization
// ---------------------------------------------------------------------------

#[test]
fn repeated_queries_return_equal_sequences() {
    let record = first_record("quilt_collection.xml");
    assert_eq!(record.field("650"), record.field("650"));
    assert_eq!(record.subjects(), record.subjects());
    assert_eq!(record.main_entry(), record.main_entry());
    assert_eq!(record.lccn(), record.lccn());
}

#[test]
fn records_round_trip_through_serde() {
    let record = first_record("kindred.xml");
    let json = serde_json::to_string(&record).unwrap();
    let restored: Record = serde_json::from_str(&json).unwrap();
    assert_eq!(record, restored);
}

#[test]
fn documents_load_from_written_files() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(MIXED.as_bytes()).unwrap();
    file.flush().unwrap();

    let opened = std::fs::File::open(file.path()).unwrap();
    let doc = Document::from_reader(std::io::BufReader::new(opened)).unwrap();
    assert_eq!(doc.records().len(), 1);
}

// ---------------------------------------------------------------------------
// Tag contract properties
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn numeric_tags_always_pad_to_three_digits(n in 0u16..=999) {
        let tag = Tag::from(n);
        prop_assert_eq!(tag.as_str().len(), 3);
        prop_assert_eq!(tag.as_str().parse::<u16>().unwrap(), n);
    }

    #[test]
    fn tag_ordering_matches_numeric_ordering(a in 0u16..=999, b in 0u16..=999) {
        prop_assert_eq!(a.cmp(&b), Tag::from(a).cmp(&Tag::from(b)));
    }
}
