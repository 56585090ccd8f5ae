//! Shared helpers for integration tests.

use marcx::{Document, Record};
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

/// Load a fixture document from `tests/data/`.
pub fn load_fixture(name: &str) -> Document {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/data")
        .join(name);
    let file = File::open(&path)
        .unwrap_or_else(|err| panic!("could not open {}: {err}", path.display()));
    Document::from_reader(BufReader::new(file)).expect("fixture should parse")
}

/// The first record of a fixture document.
pub fn first_record(name: &str) -> Record {
    let records = load_fixture(name).records();
    assert!(!records.is_empty(), "fixture {name} has no records");
    records.into_iter().next().unwrap()
}
