//! Unit tests for configuration loading and leg expansion.

#[cfg(test)]
mod identity {
    use crate::{normalize, route_identity, title_case};

    #[test]
    fn normalize_lowercases_and_underscores() {
        assert_eq!(normalize("Jane Smith"), "jane_smith");
        assert_eq!(normalize("Drop-Off Point"), "drop_off_point");
        assert_eq!(normalize("BASE"), "base");
    }

    #[test]
    fn identity_format() {
        assert_eq!(
            route_identity("Jane Smith", "BASE", "North Gym"),
            "jane_smith_base_to_north_gym"
        );
    }

    #[test]
    fn identity_is_pure() {
        let a = route_identity("Bob Lee", "Warehouse-2", "BASE");
        let b = route_identity("Bob Lee", "Warehouse-2", "BASE");
        assert_eq!(a, b);
        assert_eq!(a, "bob_lee_warehouse_2_to_base");
    }

    #[test]
    fn title_case_capitalizes_each_segment() {
        assert_eq!(title_case("gym_a"), "Gym_A");
        assert_eq!(title_case("base"), "Base");
        assert_eq!(title_case("north_gym"), "North_Gym");
    }
}

#[cfg(test)]
mod loader {
    use std::io::Cursor;

    use rg_core::DriverId;

    use crate::{ConfigError, load_routines_reader};

    const SAMPLE: &str = r#"{
      "daily_routines": [
        {
          "driver_id": 1,
          "driver_name": "Jane Smith",
          "base_location": {
            "name": "Home Base",
            "latitude": 34.1928,
            "longitude": -84.1297,
            "description": "Cumming residence"
          },
          "remote_locations": [
            { "id": "gym", "name": "North Gym", "latitude": 34.2201, "longitude": -84.1010 },
            { "id": "office", "name": "Midtown Office", "latitude": 33.7838, "longitude": -84.3830 }
          ],
          "standard_sequence": ["gym", "office"],
          "sequence_probability": 0.9
        },
        {
          "driver_id": 2,
          "driver_name": "Bob Lee",
          "base_location": { "name": "Apartment", "latitude": 33.7490, "longitude": -84.3880 },
          "remote_locations": [
            { "id": "site", "name": "Job-Site", "latitude": 33.8121, "longitude": -84.4402 }
          ],
          "standard_sequence": ["site"]
        }
      ]
    }"#;

    #[test]
    fn parses_full_schema() {
        let routines = load_routines_reader(Cursor::new(SAMPLE)).unwrap();
        assert_eq!(routines.len(), 2);

        let jane = &routines[0];
        assert_eq!(jane.driver_id, DriverId(1));
        assert_eq!(jane.driver_name, "Jane Smith");
        assert_eq!(jane.base_location.description, "Cumming residence");
        assert_eq!(jane.remote_locations.len(), 2);
        assert_eq!(jane.standard_sequence, ["gym", "office"]);
        assert_eq!(jane.sequence_probability, 0.9);
    }

    #[test]
    fn optional_fields_default() {
        let routines = load_routines_reader(Cursor::new(SAMPLE)).unwrap();
        let bob = &routines[1];
        assert_eq!(bob.base_location.description, "");
        assert_eq!(bob.sequence_probability, 0.9);
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = load_routines_reader(Cursor::new("{ not json")).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn missing_required_field_is_a_parse_error() {
        let err = load_routines_reader(Cursor::new(
            r#"{ "daily_routines": [ { "driver_id": 1 } ] }"#,
        ))
        .unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}

#[cfg(test)]
mod legs {
    use rg_core::{DriverId, GeoPoint};

    use crate::model::{DailyRoutine, Location, RemoteLocation};
    use crate::ConfigError;

    fn routine() -> DailyRoutine {
        DailyRoutine {
            driver_id: DriverId(1),
            driver_name: "Jane Smith".into(),
            base_location: Location {
                name: "Home Base".into(),
                latitude: 34.1928,
                longitude: -84.1297,
                description: String::new(),
            },
            remote_locations: vec![
                RemoteLocation {
                    id: "gym".into(),
                    name: "North Gym".into(),
                    latitude: 34.2201,
                    longitude: -84.1010,
                    description: String::new(),
                },
                RemoteLocation {
                    id: "office".into(),
                    name: "Midtown Office".into(),
                    latitude: 33.7838,
                    longitude: -84.3830,
                    description: String::new(),
                },
            ],
            standard_sequence: vec!["gym".into(), "office".into()],
            sequence_probability: 0.9,
        }
    }

    #[test]
    fn k_stops_yield_k_plus_one_legs() {
        let legs = routine().legs().unwrap();
        assert_eq!(legs.len(), 3);
    }

    #[test]
    fn legs_start_and_end_at_base() {
        let legs = routine().legs().unwrap();
        let base = GeoPoint::new(34.1928, -84.1297);
        assert_eq!(legs[0].from, base);
        assert_eq!(legs.last().unwrap().to, base);
    }

    #[test]
    fn leg_identities() {
        let names: Vec<String> = routine()
            .legs()
            .unwrap()
            .into_iter()
            .map(|leg| leg.route_name)
            .collect();
        assert_eq!(
            names,
            [
                "jane_smith_base_to_north_gym",
                "jane_smith_north_gym_to_midtown_office",
                "jane_smith_midtown_office_to_base",
            ]
        );
    }

    #[test]
    fn leg_descriptions_title_cased() {
        let legs = routine().legs().unwrap();
        assert_eq!(legs[0].description, "Jane Smith: Base → North_Gym");
        assert_eq!(
            legs[1].description,
            "Jane Smith: North_Gym → Midtown_Office"
        );
    }

    #[test]
    fn adjacent_legs_chain_coordinates() {
        let legs = routine().legs().unwrap();
        assert_eq!(legs[0].to, legs[1].from);
        assert_eq!(legs[1].to, legs[2].from);
    }

    #[test]
    fn unknown_stop_aborts_expansion() {
        let mut bad = routine();
        bad.standard_sequence.push("nowhere".into());
        let err = bad.legs().unwrap_err();
        assert!(
            matches!(err, ConfigError::UnknownStop { ref stop, .. } if stop == "nowhere")
        );
    }
}
