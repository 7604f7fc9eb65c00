//! Integration tests for the JSON file store.

#[cfg(test)]
mod store {
    use tempfile::TempDir;

    use rg_core::GeoPoint;
    use rg_synth::interpolate;

    use crate::sink::{RouteSink, WriteOutcome};
    use crate::store::JsonFileStore;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn sample_route(name: &str) -> rg_synth::Route {
        interpolate(
            GeoPoint::new(34.0, -84.3),
            GeoPoint::new(34.1, -84.2),
            name,
            "Test: Base → Stop",
        )
    }

    #[test]
    fn write_creates_named_file() {
        let dir = tmp();
        let mut store = JsonFileStore::new(dir.path()).unwrap();
        store.write("a_base_to_stop", &sample_route("a_base_to_stop")).unwrap();
        assert!(dir.path().join("a_base_to_stop.json").exists());
    }

    #[test]
    fn no_temp_file_left_behind() {
        let dir = tmp();
        let mut store = JsonFileStore::new(dir.path()).unwrap();
        store.write("k", &sample_route("k")).unwrap();
        assert!(!dir.path().join("k.json.tmp").exists());
    }

    #[test]
    fn contains_reflects_writes() {
        let dir = tmp();
        let mut store = JsonFileStore::new(dir.path()).unwrap();
        assert!(!store.contains("k"));
        store.write("k", &sample_route("k")).unwrap();
        assert!(store.contains("k"));
    }

    #[test]
    fn read_round_trips() {
        let dir = tmp();
        let mut store = JsonFileStore::new(dir.path()).unwrap();
        let route = sample_route("k");
        store.write("k", &route).unwrap();
        assert_eq!(store.read("k").unwrap(), route);
    }

    #[test]
    fn write_if_absent_skips_existing() {
        let dir = tmp();
        let mut store = JsonFileStore::new(dir.path()).unwrap();

        let first = sample_route("k");
        assert_eq!(
            store.write_if_absent("k", &first).unwrap(),
            WriteOutcome::Written
        );

        // A second write under the same key must leave the stored record
        // untouched, even with different content.
        let second = sample_route("other_route_entirely");
        assert_eq!(
            store.write_if_absent("k", &second).unwrap(),
            WriteOutcome::Skipped
        );
        assert_eq!(store.read("k").unwrap(), first);
    }

    #[test]
    fn missing_directory_is_created() {
        let dir = tmp();
        let nested = dir.path().join("routes").join("daily");
        let _store = JsonFileStore::new(&nested).unwrap();
        assert!(nested.is_dir());
    }

    #[test]
    fn stored_json_is_readable_fixture() {
        let dir = tmp();
        let mut store = JsonFileStore::new(dir.path()).unwrap();
        store.write("k", &sample_route("k")).unwrap();

        let text = std::fs::read_to_string(dir.path().join("k.json")).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["name"], "k");
        assert!(value["waypoints"].as_array().unwrap().len() >= 15);
    }
}
