use route2plan_wasm::options::ParseOptions;
use route2plan_wasm::parser::parse_route;
use std::path::Path;

fn load_fixture(path: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{path}")).unwrap()
}

fn parse(text: &str) -> serde_json::Value {
    let plan = parse_route(text, &ParseOptions::default());
    serde_json::to_value(&plan).unwrap()
}

/// Compare actual output against the expected snapshot file.
/// When `UPDATE_SNAPSHOTS=1` is set, write/overwrite the expected file instead.
fn assert_snapshot(actual: &serde_json::Value, expected_path: &str) {
    let path = format!("tests/fixtures/expected/{expected_path}");

    if matches!(std::env::var("UPDATE_SNAPSHOTS").as_deref(), Ok("1")) {
        let dir = Path::new(&path).parent().unwrap();
        std::fs::create_dir_all(dir).unwrap();
        let pretty = serde_json::to_string_pretty(actual).unwrap();
        std::fs::write(&path, pretty.as_bytes()).unwrap();
        eprintln!("Updated snapshot: {path}");
        return;
    }

    let expected_str = std::fs::read_to_string(&path).unwrap_or_else(|_| {
        panic!("Expected file not found: {path}. Run with UPDATE_SNAPSHOTS=1 to generate.")
    });
    let expected: serde_json::Value = serde_json::from_str(&expected_str)
        .unwrap_or_else(|e| panic!("Failed to parse {path}: {e}"));

    assert_eq!(
        *actual, expected,
        "Snapshot mismatch for {path}.\nRun with UPDATE_SNAPSHOTS=1 to update."
    );
}

/// Parse a fixture with default options and compare against the expected snapshot.
fn assert_snapshot_default(fixture: &str, expected: &str) {
    let text = load_fixture(fixture);
    let actual = parse(&text);
    assert_snapshot(&actual, expected);
}

// ---- basic/ ----

#[test]
fn snapshot_01_city_walk() {
    assert_snapshot_default("basic/01_city_walk.txt", "basic/01_city_walk.json");
}

#[test]
fn snapshot_02_minimal() {
    assert_snapshot_default("basic/02_minimal.txt", "basic/02_minimal.json");
}

#[test]
fn snapshot_03_two_stops() {
    assert_snapshot_default("basic/03_two_stops.txt", "basic/03_two_stops.json");
}

// ---- edge_cases/ ----

#[test]
fn snapshot_04_no_marker() {
    assert_snapshot_default("edge_cases/04_no_marker.txt", "edge_cases/04_no_marker.json");
}
