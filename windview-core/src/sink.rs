use crate::present::DisplayProjection;

/// Receiver of finished projections. Called once per successful run.
pub trait DisplaySink {
    fn publish(&mut self, projection: &DisplayProjection);
}

/// The four label slots, as shown on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Labels {
    pub location: String,
    pub wind_speed: String,
    pub wind_direction: String,
    pub coordinate: String,
}

impl Labels {
    pub const WIND_SPEED_UNIT: &'static str = " m/s";

    pub fn from_projection(projection: &DisplayProjection) -> Self {
        Self {
            location: projection.location.clone(),
            wind_speed: format!("{}{}", projection.wind_speed, Self::WIND_SPEED_UNIT),
            wind_direction: projection.wind_direction.clone(),
            coordinate: projection.coordinate.clone(),
        }
    }

    /// Slots in display order, top to bottom.
    pub fn lines(&self) -> [&str; 4] {
        [
            self.location.as_str(),
            self.wind_speed.as_str(),
            self.wind_direction.as_str(),
            self.coordinate.as_str(),
        ]
    }
}

/// Keeps every published set of labels.
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub published: Vec<Labels>,
}

impl DisplaySink for RecordingSink {
    fn publish(&mut self, projection: &DisplayProjection) {
        self.published.push(Labels::from_projection(projection));
    }
}
