use crate::model::WeatherRecord;

/// Display strings derived from one [`WeatherRecord`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayProjection {
    pub coordinate: String,
    /// Without unit; the sink appends `" m/s"`.
    pub wind_speed: String,
    pub wind_direction: String,
    pub location: String,
}

pub fn project(record: &WeatherRecord) -> DisplayProjection {
    DisplayProjection {
        coordinate: format!(
            "Lat: {}, Lon: {}",
            float_text(record.coordinate.latitude),
            float_text(record.coordinate.longitude)
        ),
        wind_speed: format!("Wind Speed: {}", float_text(record.wind.speed)),
        wind_direction: format!("Wind Deg: {}", record.wind.direction_degrees),
        location: format!("Location: {}", record.location_name),
    }
}

/// Shortest round-trip form, always with a fractional part (`5.0`, `4.1`).
fn float_text(value: f64) -> String {
    format!("{value:?}")
}
