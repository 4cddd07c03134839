use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    #[serde(rename = "lat")]
    pub latitude: f64,
    #[serde(rename = "lon")]
    pub longitude: f64,
}

/// One entry of the `weather` array, e.g. "Drizzle / light intensity drizzle".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConditionEntry {
    pub id: i64,
    #[serde(rename = "main")]
    pub category: String,
    pub description: String,
    #[serde(rename = "icon")]
    pub icon_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Measurements {
    #[serde(rename = "temp")]
    pub temperature: f64,
    pub pressure: i64,
    pub humidity: i64,
    pub temp_min: f64,
    pub temp_max: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindInfo {
    pub speed: f64,
    #[serde(rename = "deg")]
    pub direction_degrees: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CloudCover {
    #[serde(rename = "all")]
    pub percentage: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StationMeta {
    #[serde(rename = "type")]
    pub kind: i64,
    pub id: i64,
    pub message: f64,
    #[serde(rename = "country")]
    pub country_code: String,
    pub sunrise: f64,
    pub sunset: f64,
}

impl StationMeta {
    pub fn sunrise_at(&self) -> Option<DateTime<Utc>> {
        seconds_to_utc(self.sunrise)
    }

    pub fn sunset_at(&self) -> Option<DateTime<Utc>> {
        seconds_to_utc(self.sunset)
    }
}

/// A fully decoded current-weather document.
///
/// Values are only ever produced whole by [`crate::decode::decode`]; a new
/// document replaces the previous record instead of updating it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherRecord {
    #[serde(rename = "coord")]
    pub coordinate: Coordinate,
    #[serde(rename = "weather")]
    pub conditions: Vec<ConditionEntry>,
    #[serde(rename = "base")]
    pub base_station: String,
    #[serde(rename = "main")]
    pub measurements: Measurements,
    pub visibility: i64,
    pub wind: WindInfo,
    #[serde(rename = "clouds")]
    pub cloud_cover: CloudCover,
    #[serde(rename = "dt")]
    pub timestamp: i64,
    #[serde(rename = "sys")]
    pub station_meta: StationMeta,
    #[serde(rename = "id")]
    pub location_id: i64,
    #[serde(rename = "name")]
    pub location_name: String,
}

impl WeatherRecord {
    /// Observation time (`dt`), if it fits chrono's range.
    pub fn observed_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.timestamp, 0)
    }

    pub fn primary_condition(&self) -> Option<&ConditionEntry> {
        self.conditions.first()
    }
}

fn seconds_to_utc(secs: f64) -> Option<DateTime<Utc>> {
    if !secs.is_finite() {
        return None;
    }
    let whole = secs.trunc();
    if whole < i64::MIN as f64 || whole > i64::MAX as f64 {
        return None;
    }
    let nanos = ((secs - whole) * 1e9).round().clamp(0.0, 999_999_999.0) as u32;
    DateTime::from_timestamp(whole as i64, nanos)
}
