use log::debug;

use crate::{error::DecodeError, model::WeatherRecord};

/// Decode one weather document.
///
/// Every field of [`WeatherRecord`] must be present with its exact JSON type;
/// unknown keys are skipped. Errors carry the path of the offending value.
pub fn decode(bytes: &[u8]) -> Result<WeatherRecord, DecodeError> {
    let mut de = serde_json::Deserializer::from_slice(bytes);

    let record: WeatherRecord = serde_path_to_error::deserialize(&mut de).map_err(|err| {
        let path = err.path().to_string();
        DecodeError { path, source: err.into_inner() }
    })?;

    // Reject trailing garbage after the document.
    de.end().map_err(|source| DecodeError { path: ".".to_string(), source })?;

    debug!(
        "Decoded weather record for '{}' ({} condition entries)",
        record.location_name,
        record.conditions.len()
    );

    Ok(record)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) const LONDON: &str = include_str!("../tests/fixtures/london.json");

    fn london_with(edit: impl FnOnce(&mut serde_json::Value)) -> Vec<u8> {
        let mut value: serde_json::Value = serde_json::from_str(LONDON).expect("fixture is valid");
        edit(&mut value);
        serde_json::to_vec(&value).expect("serializable")
    }

    #[test]
    fn decodes_fixture_exactly() {
        let record = decode(LONDON.as_bytes()).expect("fixture decodes");

        assert_eq!(record.coordinate.latitude, 51.51);
        assert_eq!(record.coordinate.longitude, -0.13);

        assert_eq!(record.conditions.len(), 2);
        assert_eq!(record.conditions[0].id, 300);
        assert_eq!(record.conditions[0].category, "Drizzle");
        assert_eq!(record.conditions[0].description, "light intensity drizzle");
        assert_eq!(record.conditions[0].icon_id, "09d");
        assert_eq!(record.conditions[1].category, "Mist");

        assert_eq!(record.base_station, "stations");
        assert_eq!(record.measurements.temperature, 280.32);
        assert_eq!(record.measurements.pressure, 1012);
        assert_eq!(record.measurements.humidity, 81);
        assert_eq!(record.measurements.temp_min, 279.15);
        assert_eq!(record.measurements.temp_max, 281.15);
        assert_eq!(record.visibility, 10000);
        assert_eq!(record.wind.speed, 4.1);
        assert_eq!(record.wind.direction_degrees, 80);
        assert_eq!(record.cloud_cover.percentage, 90);
        assert_eq!(record.timestamp, 1485789600);

        assert_eq!(record.station_meta.kind, 1);
        assert_eq!(record.station_meta.id, 5091);
        assert_eq!(record.station_meta.message, 0.0103);
        assert_eq!(record.station_meta.country_code, "GB");
        assert_eq!(record.station_meta.sunrise, 1485762037.0);
        assert_eq!(record.station_meta.sunset, 1485794875.0);

        assert_eq!(record.location_id, 2643743);
        assert_eq!(record.location_name, "London");
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let bytes = london_with(|v| {
            v["extra"] = serde_json::json!({ "nested": [1, 2, 3] });
            v["wind"]["gust"] = serde_json::json!(9.3);
        });

        let record = decode(&bytes).expect("extra keys are fine");
        assert_eq!(record.wind.speed, 4.1);
    }

    #[test]
    fn missing_wind_speed_is_rejected() {
        let bytes = london_with(|v| {
            v["wind"].as_object_mut().unwrap().remove("speed");
        });

        let err = decode(&bytes).unwrap_err();
        assert_eq!(err.path, "wind");
        assert!(err.to_string().contains("missing field `speed`"));
    }

    #[test]
    fn missing_top_level_key_is_rejected() {
        let bytes = london_with(|v| {
            v.as_object_mut().unwrap().remove("name");
        });

        let err = decode(&bytes).unwrap_err();
        assert!(err.source.to_string().contains("missing field `name`"));
    }

    #[test]
    fn string_is_not_coerced_to_number() {
        let bytes = london_with(|v| v["wind"]["deg"] = serde_json::json!("280"));

        let err = decode(&bytes).unwrap_err();
        assert_eq!(err.path, "wind.deg");
        assert!(err.source.is_data());
    }

    #[test]
    fn float_is_rejected_where_integer_expected() {
        let bytes = london_with(|v| v["main"]["pressure"] = serde_json::json!(1012.5));

        let err = decode(&bytes).unwrap_err();
        assert_eq!(err.path, "main.pressure");
    }

    #[test]
    fn nested_array_errors_report_index() {
        let bytes = london_with(|v| v["weather"][1]["icon"] = serde_json::json!(50));

        let err = decode(&bytes).unwrap_err();
        assert_eq!(err.path, "weather[1].icon");
    }

    #[test]
    fn non_json_is_rejected() {
        let err = decode(b"not json").unwrap_err();
        assert!(err.source.is_syntax());
    }

    #[test]
    fn trailing_garbage_is_rejected() {
        let mut bytes = LONDON.as_bytes().to_vec();
        bytes.extend_from_slice(b" {}");

        let err = decode(&bytes).unwrap_err();
        assert_eq!(err.path, ".");
    }

    #[test]
    fn empty_input_is_rejected() {
        let err = decode(b"").unwrap_err();
        assert!(err.source.is_eof());
    }
}
